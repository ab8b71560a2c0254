//! Environment-keyed session map.
//!
//! Responsibilities:
//! - Define `Config`, the mapping from environment name to `Session`.
//! - Validate every session's protocol discriminator.
//! - Provide lookup helpers for callers that pick one environment.
//!
//! Does NOT handle:
//! - Locating or reading config files (see `loader` and `paths` modules).
//! - Choosing a serialization format (see `format` module).
//!
//! Invariants:
//! - Keys are unique; iteration order is sorted by key and carries no meaning.
//! - A `null` session value on disk decodes to an empty `Session`.
//! - A `null` or empty top-level document decodes to an empty `Config`.
//! - Validation visits environments in key order and stops at the first error.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use super::session::Session;
use crate::constants::DEFAULT_CONFIG_ENV;
use crate::loader::ConfigError;

/// Remote console credentials keyed by environment name.
///
/// Example file:
///
/// ```yaml
/// default:
///   address: "127.0.0.1:16260"
///   password: "password"
/// staging:
///   address: "10.0.0.5:27015"
///   password: "hunter2"
///   type: "web"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Config {
    environments: BTreeMap<String, Session>,
}

impl Config {
    /// Creates an empty config.
    pub fn new() -> Self {
        Self::default()
    }

    /// The config used when no file exists on the search path: a single
    /// empty session under [`DEFAULT_CONFIG_ENV`].
    ///
    /// Callers proceed with it and fail later with a "no address" error at
    /// the point of use.
    pub fn default_entry() -> Self {
        std::iter::once((DEFAULT_CONFIG_ENV.to_string(), Session::default())).collect()
    }

    /// Inserts or replaces the session for `environment`.
    pub fn insert(&mut self, environment: impl Into<String>, session: Session) -> Option<Session> {
        self.environments.insert(environment.into(), session)
    }

    /// Looks up a session by environment name.
    pub fn get(&self, environment: &str) -> Option<&Session> {
        self.environments.get(environment)
    }

    /// Looks up a session by environment name, failing with an error that
    /// names the missing environment.
    pub fn session(&self, environment: &str) -> Result<&Session, ConfigError> {
        self.get(environment)
            .ok_or_else(|| ConfigError::EnvironmentNotFound(environment.to_string()))
    }

    /// Environment names in key order.
    pub fn environments(&self) -> impl Iterator<Item = &str> {
        self.environments.keys().map(String::as_str)
    }

    /// Iterates `(environment, session)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Session)> {
        self.environments
            .iter()
            .map(|(name, session)| (name.as_str(), session))
    }

    pub fn len(&self) -> usize {
        self.environments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.environments.is_empty()
    }

    /// Checks that every session's `type` is empty or a supported protocol.
    ///
    /// Can be re-run after programmatic edits without touching the disk.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (environment, session) in self.iter() {
            if let Err(source) = session.protocol() {
                return Err(ConfigError::UnsupportedProtocol {
                    environment: environment.to_string(),
                    source,
                });
            }
        }
        Ok(())
    }
}

/// Validates an optional config.
///
/// A missing config is itself a validation error rather than a panic.
pub fn validate(config: Option<&Config>) -> Result<(), ConfigError> {
    match config {
        Some(config) => config.validate(),
        None => Err(ConfigError::ConfigNotSet),
    }
}

impl FromIterator<(String, Session)> for Config {
    fn from_iter<I: IntoIterator<Item = (String, Session)>>(iter: I) -> Self {
        Self {
            environments: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Config {
    type Item = (String, Session);
    type IntoIter = std::collections::btree_map::IntoIter<String, Session>;

    fn into_iter(self) -> Self::IntoIter {
        self.environments.into_iter()
    }
}

impl<'de> Deserialize<'de> for Config {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<BTreeMap<String, Option<Session>>>::deserialize(deserializer)?;

        Ok(raw
            .unwrap_or_default()
            .into_iter()
            .map(|(environment, session)| (environment, session.unwrap_or_default()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Protocol;

    fn sample() -> Config {
        let mut config = Config::new();
        config.insert("default", Session::new("127.0.0.1:16260", "password", ""));
        config.insert("telnet", Session::new("127.0.0.1:8081", "", "telnet"));
        config.insert("web", Session::new("127.0.0.1:28016", "secret", "web"));
        config
    }

    #[test]
    fn test_default_entry_has_single_empty_session() {
        let config = Config::default_entry();
        assert_eq!(config.len(), 1);
        assert_eq!(config.get(DEFAULT_CONFIG_ENV), Some(&Session::default()));
    }

    #[test]
    fn test_validate_accepts_supported_and_empty_types() {
        let mut config = sample();
        config.insert("rcon", Session::new("", "", "rcon"));
        assert!(config.validate().is_ok());
        assert!(validate(Some(&config)).is_ok());
    }

    #[test]
    fn test_validate_accepts_empty_config() {
        assert!(Config::new().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_type_naming_environment() {
        let mut config = sample();
        config.insert("broken", Session::new("host:1", "", "bogus"));

        let err = config.validate().unwrap_err();
        assert!(err.is_validation());
        match err {
            ConfigError::UnsupportedProtocol {
                environment,
                source,
            } => {
                assert_eq!(environment, "broken");
                assert_eq!(source.0, "bogus");
            }
            other => panic!("Expected UnsupportedProtocol, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_reports_first_environment_in_key_order() {
        let mut config = Config::new();
        config.insert("zeta", Session::new("", "", "nope"));
        config.insert("alpha", Session::new("", "", "bogus"));

        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnsupportedProtocol { ref environment, .. } if environment == "alpha"
        ));
    }

    #[test]
    fn test_validate_missing_config() {
        let err = validate(None).unwrap_err();
        assert!(err.is_validation());
        assert!(matches!(err, ConfigError::ConfigNotSet));
    }

    #[test]
    fn test_session_lookup() {
        let config = sample();
        assert_eq!(
            config.session("web").unwrap().protocol(),
            Ok(Protocol::WebRcon)
        );

        let err = config.session("missing").unwrap_err();
        assert!(matches!(err, ConfigError::EnvironmentNotFound(ref name) if name == "missing"));
    }

    #[test]
    fn test_environments_are_sorted() {
        let cfg = sample();
        let names: Vec<&str> = cfg.environments().collect();
        assert_eq!(names, vec!["default", "telnet", "web"]);
    }

    #[test]
    fn test_null_session_deserializes_as_empty() {
        let config: Config = serde_json::from_str(r#"{"default": null}"#).unwrap();
        assert_eq!(config, Config::default_entry());
    }

    #[test]
    fn test_null_document_deserializes_as_empty() {
        let config: Config = serde_json::from_str("null").unwrap();
        assert!(config.is_empty());
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let mut config = Config::new();
        config.insert("default", Session::new("host:1", "pw", ""));

        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"default":{"address":"host:1","password":"pw"}}"#);
    }
}
