//! Environment variable parsing with warn-level logging for invalid values.

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    parse_with_default(var, std::env::var(var).ok(), default)
}

/// Same as [`env_parse_with_default`] for an already looked-up value.
pub fn parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    raw: Option<String>,
    default: T,
) -> T {
    match raw {
        Some(v) => match v.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        None => default,
    }
}

/// Build a `ROSTER_<PARTS>` variable name, upper-cased.
#[must_use]
pub fn env_var_name(parts: &[&str]) -> String {
    let mut name = crate::constants::ENV_PREFIX.to_owned();
    for part in parts {
        name.push('_');
        name.push_str(&part.to_ascii_uppercase());
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_parse_valid_value() {
        let var_name = "ROSTER_TEST_ENV_PARSE_VALID_98271";
        unsafe { std::env::set_var(var_name, "42") };
        let result: u32 = env_parse_with_default(var_name, 10);
        assert_eq!(result, 42);
        unsafe { std::env::remove_var(var_name) };
    }

    #[test]
    fn test_env_parse_invalid_value() {
        let var_name = "ROSTER_TEST_ENV_PARSE_INVALID_98272";
        unsafe { std::env::set_var(var_name, "banana") };
        let result: u32 = env_parse_with_default(var_name, 10);
        assert_eq!(result, 10);
        unsafe { std::env::remove_var(var_name) };
    }

    #[test]
    fn test_env_parse_missing_var() {
        let var_name = "ROSTER_TEST_ENV_PARSE_MISSING_98273";
        unsafe { std::env::remove_var(var_name) };
        let result: u32 = env_parse_with_default(var_name, 10);
        assert_eq!(result, 10);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let result: i64 = parse_with_default("X", Some(" 250 ".to_owned()), 10);
        assert_eq!(result, 250);
    }

    #[test]
    fn test_parse_empty_value() {
        let result: i64 = parse_with_default("X", Some(String::new()), 10);
        assert_eq!(result, 10);
    }

    #[test]
    fn test_env_var_name() {
        assert_eq!(env_var_name(&["wiki_pages", "max_page_size"]), "ROSTER_WIKI_PAGES_MAX_PAGE_SIZE");
    }
}
