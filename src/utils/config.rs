use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Reads an environment variable, falling back to `default` when the
/// variable is missing or does not parse.
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().unwrap_or_else(|_| {
            error!("Failed to parse {}: {}, using default", env_var, val);
            default
        }),
        Err(_) => default,
    }
}

/// Reads and parses an environment variable, returning `None` when it is
/// missing or invalid.
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().ok(),
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variable_yields_default() {
        let value: u32 = get_env_or_default("PA_CLIENT_TEST_MISSING_VAR", 7);
        assert_eq!(value, 7);
    }

    #[test]
    fn missing_variable_yields_none() {
        let value: Option<String> = get_env_or_none("PA_CLIENT_TEST_MISSING_VAR");
        assert!(value.is_none());
    }
}
