// ABOUTME: Helpers for reading environment variables
// ABOUTME: Supports a primary name with a legacy fallback and blank-as-unset semantics

use std::env;

use tracing::debug;

/// Read a non-empty string variable. Whitespace-only values count as unset.
pub fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Read `primary`, falling back to the legacy `fallback` name
pub fn var_with_fallback(primary: &str, fallback: &str) -> Option<String> {
    non_empty_var(primary).or_else(|| {
        let value = non_empty_var(fallback);
        if value.is_some() {
            debug!("Using legacy variable {} (prefer {})", fallback, primary);
        }
        value
    })
}

/// Parse a boolean flag ("1", "true", "yes", "on" are truthy).
pub fn parse_bool_flag(name: &str) -> bool {
    non_empty_var(name)
        .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_primary_wins_over_fallback() {
        env::set_var("BP_TEST_PRIMARY", "8080");
        env::set_var("BP_TEST_FALLBACK", "9090");
        assert_eq!(
            var_with_fallback("BP_TEST_PRIMARY", "BP_TEST_FALLBACK").as_deref(),
            Some("8080")
        );
        env::remove_var("BP_TEST_PRIMARY");
        env::remove_var("BP_TEST_FALLBACK");
    }

    #[test]
    #[serial]
    fn test_fallback_then_none() {
        env::set_var("BP_TEST_PRIMARY", "  ");
        env::set_var("BP_TEST_FALLBACK", "9090");
        assert_eq!(
            var_with_fallback("BP_TEST_PRIMARY", "BP_TEST_FALLBACK").as_deref(),
            Some("9090")
        );

        env::remove_var("BP_TEST_FALLBACK");
        assert_eq!(var_with_fallback("BP_TEST_PRIMARY", "BP_TEST_FALLBACK"), None);
        env::remove_var("BP_TEST_PRIMARY");
    }

    #[test]
    #[serial]
    fn test_bool_flag_and_blank_values() {
        env::set_var("BP_TEST_FLAG", "Yes");
        assert!(parse_bool_flag("BP_TEST_FLAG"));
        env::set_var("BP_TEST_FLAG", "0");
        assert!(!parse_bool_flag("BP_TEST_FLAG"));
        env::set_var("BP_TEST_FLAG", "   ");
        assert!(!parse_bool_flag("BP_TEST_FLAG"));
        assert_eq!(non_empty_var("BP_TEST_FLAG"), None);
        env::remove_var("BP_TEST_FLAG");
    }
}
