/// Read a setting from the environment, preferring the `MENUKIT_` spelling.
///
/// `get_env_with_prefix("PRO_CHECKOUT_ID")` returns `MENUKIT_PRO_CHECKOUT_ID`
/// when it is set and otherwise `PRO_CHECKOUT_ID`, so deployments that share
/// variable names with other services can namespace them.
///
/// ```rust
/// use menukit::utils::get_env_with_prefix;
///
/// let checkout_base = get_env_with_prefix("CHECKOUT_BASE_URL");
/// # let _ = checkout_base;
/// ```
pub fn get_env_with_prefix(key: &str) -> Option<String> {
    std::env::var(format!("MENUKIT_{}", key))
        .or_else(|_| std::env::var(key))
        .ok()
}
