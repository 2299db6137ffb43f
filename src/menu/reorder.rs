//! Drag-and-drop reordering of menu items.

use tracing::debug;

use crate::error::{MenuKitError, Result};
use super::item::MenuItem;

/// Move the item at `from` so it lands at index `to`, shifting the items in
/// between, then renumber every `position` from 0.
///
/// Out-of-range indexes leave `items` untouched.
pub fn reorder(items: &mut Vec<MenuItem>, from: usize, to: usize) -> Result<()> {
    let len = items.len();
    if from >= len || to >= len {
        return Err(MenuKitError::InvalidReorder { from, to, len });
    }

    if from != to {
        let item = items.remove(from);
        items.insert(to, item);
        debug!(from, to, len, "menu item moved");
    }

    renumber(items);
    Ok(())
}

/// Set `position` to each item's index.
pub fn renumber(items: &mut [MenuItem]) {
    for (index, item) in items.iter_mut().enumerate() {
        item.position = u32::try_from(index).unwrap_or(u32::MAX);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn menu(names: &[&str]) -> Vec<MenuItem> {
        let mut items: Vec<MenuItem> = names
            .iter()
            .map(|n| MenuItem::new(*n, Decimal::new(500, 2)))
            .collect();
        renumber(&mut items);
        items
    }

    fn names(items: &[MenuItem]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_move_down() {
        let mut items = menu(&["soup", "salad", "steak", "pie"]);
        reorder(&mut items, 0, 2).unwrap();
        assert_eq!(names(&items), ["salad", "steak", "soup", "pie"]);
    }

    #[test]
    fn test_move_up() {
        let mut items = menu(&["soup", "salad", "steak", "pie"]);
        reorder(&mut items, 3, 0).unwrap();
        assert_eq!(names(&items), ["pie", "soup", "salad", "steak"]);
    }

    #[test]
    fn test_positions_renumbered() {
        let mut items = menu(&["a", "b", "c"]);
        reorder(&mut items, 2, 1).unwrap();
        let positions: Vec<u32> = items.iter().map(|i| i.position).collect();
        assert_eq!(positions, [0, 1, 2]);
        assert_eq!(items[1].name, "c");
    }

    #[test]
    fn test_same_index_is_noop() {
        let mut items = menu(&["a", "b"]);
        items[0].position = 7;
        reorder(&mut items, 1, 1).unwrap();
        assert_eq!(names(&items), ["a", "b"]);
        assert_eq!(items[0].position, 0);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut items = menu(&["a", "b", "c"]);
        let before = items.clone();

        let err = reorder(&mut items, 3, 0).unwrap_err();
        assert!(matches!(err, MenuKitError::InvalidReorder { from: 3, to: 0, len: 3 }));
        assert!(reorder(&mut items, 0, 5).is_err());
        assert_eq!(items, before);

        let mut empty: Vec<MenuItem> = Vec::new();
        assert!(reorder(&mut empty, 0, 0).is_err());
    }
}
