//! CSV bulk import of menu items.
//!
//! The expected layout is a header row followed by one item per line:
//!
//! ```text
//! name,description,price,category
//! Margherita,"Tomato, mozzarella, basil",$11.50,Pizza
//! Tiramisu,,7,Dessert
//! ```
//!
//! `name` and `price` are required columns; `description` and `category` are
//! optional and any other column is ignored. Fields may be double-quoted to
//! contain commas, with `""` standing for a literal quote. A quoted field
//! cannot span lines.
//!
//! Bad rows do not abort the import: they are collected in
//! [`ImportReport::errors`] alongside the rows that parsed.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::billing::{features_for, require_feature, Feature, Limit, PlanTier};
use crate::error::{MenuKitError, Result};
use super::item::MenuItem;

/// A row that could not be imported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    /// 1-based line number in the input.
    pub line: usize,
    pub message: String,
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

/// Outcome of parsing (and optionally capping) a CSV import.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Items ready to be created, in file order.
    pub items: Vec<MenuItem>,
    /// Rows rejected during parsing.
    pub errors: Vec<RowError>,
    /// Valid rows dropped because the plan's item cap was reached.
    pub skipped_over_limit: usize,
}

impl ImportReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.skipped_over_limit == 0
    }
}

#[derive(Debug)]
struct Columns {
    name: usize,
    price: usize,
    description: Option<usize>,
    category: Option<usize>,
}

impl Columns {
    fn from_header(fields: &[String]) -> Result<Self> {
        let find = |wanted: &str| {
            fields
                .iter()
                .position(|f| f.trim().eq_ignore_ascii_case(wanted))
        };

        let name = find("name")
            .ok_or_else(|| MenuKitError::import("missing required column 'name'"))?;
        let price = find("price")
            .ok_or_else(|| MenuKitError::import("missing required column 'price'"))?;

        Ok(Self {
            name,
            price,
            description: find("description"),
            category: find("category"),
        })
    }
}

/// Parse CSV text into menu items, numbering positions from 0.
///
/// Fails only when there is no usable header; row problems go into the report.
pub fn parse_menu_csv(text: &str) -> Result<ImportReport> {
    parse_from(text, 0)
}

/// Parse and gate a bulk import for a menu that already holds `existing_items`.
///
/// Requires the bulk import feature. Rows beyond the tier's item cap are
/// counted in [`ImportReport::skipped_over_limit`] instead of being returned.
pub fn plan_import(tier: impl Into<PlanTier>, existing_items: u64, text: &str) -> Result<ImportReport> {
    let tier = tier.into();
    require_feature(tier, Feature::BulkImport)?;

    let mut report = parse_from(text, existing_items)?;
    cap_to_limit(&mut report, features_for(tier).max_items, existing_items);

    info!(
        tier = %tier,
        imported = report.items.len(),
        rejected = report.errors.len(),
        skipped = report.skipped_over_limit,
        "bulk import planned"
    );
    Ok(report)
}

/// Drop parsed items that would take the menu past `limit`.
fn cap_to_limit(report: &mut ImportReport, limit: Limit, existing_items: u64) {
    let Some(remaining) = limit.check(existing_items).remaining() else {
        return;
    };
    let remaining = usize::try_from(remaining).unwrap_or(usize::MAX);
    if report.items.len() > remaining {
        report.skipped_over_limit += report.items.len() - remaining;
        report.items.truncate(remaining);
    }
}

fn parse_from(text: &str, first_position: u64) -> Result<ImportReport> {
    // Spreadsheet exports often start with a byte order mark.
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.trim().is_empty());

    let (header_line, header) = lines
        .next()
        .ok_or_else(|| MenuKitError::import("CSV has no header row"))?;
    let header = split_fields(header)
        .map_err(|msg| MenuKitError::import(format!("line {}: {}", header_line, msg)))?;
    let columns = Columns::from_header(&header)?;

    let mut report = ImportReport::default();
    let mut position = first_position;

    for (line, raw) in lines {
        match parse_row(&columns, raw) {
            Ok(mut item) => {
                item.position = u32::try_from(position).unwrap_or(u32::MAX);
                position += 1;
                report.items.push(item);
            }
            Err(message) => {
                debug!(line, %message, "import row rejected");
                report.errors.push(RowError { line, message });
            }
        }
    }

    Ok(report)
}

fn parse_row(columns: &Columns, raw: &str) -> std::result::Result<MenuItem, String> {
    let fields = split_fields(raw)?;
    let get = |index: usize| {
        fields
            .get(index)
            .map(|s| s.as_str())
            .filter(|s| !s.is_empty())
    };
    let optional = |index: Option<usize>| index.and_then(get).map(str::to_string);

    let name = get(columns.name).ok_or("name is required")?;
    let price = get(columns.price).ok_or("price is required")?;
    let price = parse_price(price)?;

    Ok(MenuItem {
        id: None,
        name: name.to_string(),
        description: optional(columns.description),
        price,
        category: optional(columns.category),
        position: 0,
    })
}

fn parse_price(raw: &str) -> std::result::Result<Decimal, String> {
    let digits = raw.strip_prefix('$').unwrap_or(raw).trim();
    let price = Decimal::from_str(digits).map_err(|_| format!("invalid price '{}'", raw))?;
    if price.is_sign_negative() {
        return Err(format!("price must not be negative, got '{}'", raw));
    }
    Ok(price)
}

/// Split one CSV line into trimmed fields.
fn split_fields(line: &str) -> std::result::Result<Vec<String>, String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if field.trim().is_empty() => {
                field.clear();
                in_quotes = true;
            }
            ',' if !in_quotes => {
                fields.push(field.trim().to_string());
                field.clear();
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err("unterminated quoted field".to_string());
    }
    fields.push(field.trim().to_string());
    Ok(fields)
}
