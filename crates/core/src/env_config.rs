//! Environment variable parsing with warn-level logging for invalid values.

/// Parse an environment variable, falling back to `default`.
///
/// Unset variables fall back silently. Set-but-unparseable values log a
/// warning naming the variable and fall back as well, so a typo in
/// `PORT` or `LEADLINE_DB_POOL_SIZE` never aborts startup.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    match std::env::var(var) {
        Ok(v) => match v.trim().parse() {
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
        Err(_) => default,
    }
}

/// Read a string environment variable, treating blank values as unset.
pub fn env_string(var: &str) -> Option<String> {
    std::env::var(var).ok().map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    // SAFETY (all tests): each test touches a variable name no other test uses.

    #[test]
    fn parses_valid_value() {
        let var_name = "LEADLINE_TEST_ENV_VALID_41151";
        unsafe { std::env::set_var(var_name, "8080") };
        let result: u16 = env_parse_with_default(var_name, 3001);
        assert_eq!(result, 8080);
        unsafe { std::env::remove_var(var_name) };
    }

    #[test]
    fn invalid_value_falls_back() {
        let var_name = "LEADLINE_TEST_ENV_INVALID_41152";
        unsafe { std::env::set_var(var_name, "eighty") };
        let result: u16 = env_parse_with_default(var_name, 3001);
        assert_eq!(result, 3001);
        unsafe { std::env::remove_var(var_name) };
    }

    #[test]
    fn missing_var_falls_back() {
        let var_name = "LEADLINE_TEST_ENV_MISSING_41153";
        unsafe { std::env::remove_var(var_name) };
        let result: u32 = env_parse_with_default(var_name, 4);
        assert_eq!(result, 4);
    }

    #[test]
    fn blank_string_is_unset() {
        let var_name = "LEADLINE_TEST_ENV_BLANK_41154";
        unsafe { std::env::set_var(var_name, "   ") };
        assert_eq!(env_string(var_name), None);
        unsafe { std::env::set_var(var_name, " data/leads.db ") };
        assert_eq!(env_string(var_name).as_deref(), Some("data/leads.db"));
        unsafe { std::env::remove_var(var_name) };
    }
}
