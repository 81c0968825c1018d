//! Read-only sources of environment variables.

use std::collections::HashMap;
use std::env;

/// A read-only snapshot of environment variables.
///
/// The binder looks variables up through this trait instead of touching
/// `std::env` directly, so tests can supply a synthetic environment
/// ([`MapEnv`]) instead of depending on the real process environment.
#[cfg_attr(test, mockall::automock)]
pub trait EnvSource {
    /// Value of `key`, or `None` when the variable is unset.
    ///
    /// A value that is not valid unicode is treated the same as an unset
    /// variable.
    fn var(&self, key: &str) -> Option<String>;
}

/// Zero-sized source backed by the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl EnvSource for SystemEnv {
    fn var(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

/// Fixed in-memory environment, for tests and synthetic snapshots.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a variable, replacing any previous value for the same name.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl EnvSource for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

impl FromIterator<(String, String)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_env_delegates_to_std() {
        env::set_var("SVCKIT_SOURCE_TEST", "present");
        assert_eq!(
            SystemEnv.var("SVCKIT_SOURCE_TEST"),
            Some("present".to_string())
        );
        env::remove_var("SVCKIT_SOURCE_TEST");
        assert_eq!(SystemEnv.var("SVCKIT_SOURCE_TEST"), None);
    }

    #[test]
    fn test_map_env_returns_only_what_it_holds() {
        let env = MapEnv::new().with("JAVA_HOME", "/usr/lib/jvm/default");
        assert_eq!(
            env.var("JAVA_HOME"),
            Some("/usr/lib/jvm/default".to_string())
        );
        assert_eq!(env.var("MISSING"), None);
    }

    #[test]
    fn test_with_replaces_earlier_values() {
        let env = MapEnv::new().with("PORT", "8080").with("PORT", "9090");
        assert_eq!(env.var("PORT"), Some("9090".to_string()));
    }

    #[test]
    fn test_map_env_collects_from_pairs() {
        let pairs = vec![
            ("HOST".to_string(), "localhost".to_string()),
            ("PORT".to_string(), "5672".to_string()),
        ];
        let env: MapEnv = pairs.into_iter().collect();
        assert_eq!(env.var("HOST"), Some("localhost".to_string()));
        assert_eq!(env.var("PORT"), Some("5672".to_string()));
    }
}
