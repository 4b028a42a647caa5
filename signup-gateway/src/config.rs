//! Runtime configuration read from the environment.

use std::path::PathBuf;

/// Environment variable holding the socket address to bind.
pub const LISTEN_ADDR_VAR: &str = "SIGNUP_LISTEN_ADDR";

/// Environment variable holding the directory served under `/static`.
pub const STATIC_DIR_VAR: &str = "SIGNUP_STATIC_DIR";

/// Settings for the gateway process.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct GatewayConfig {
    /// Address the HTTP listener binds to, e.g. `"127.0.0.1:8000"`.
    pub listen_addr: String,

    /// Directory whose files are served under `/static`.
    pub static_dir: PathBuf,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8000".to_owned(),
            static_dir: PathBuf::from("static"),
        }
    }
}

impl GatewayConfig {
    /// Build the config from process environment variables, falling back to
    /// defaults for anything unset.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup. Empty values count as
    /// unset.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            listen_addr: get(LISTEN_ADDR_VAR).unwrap_or(defaults.listen_addr),
            static_dir: get(STATIC_DIR_VAR).map_or(defaults.static_dir, PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variables_use_defaults() {
        let config = GatewayConfig::from_lookup(|_| None);
        assert_eq!(config, GatewayConfig::default());
        assert_eq!(config.listen_addr, "127.0.0.1:8000");
    }

    #[test]
    fn set_variables_override_defaults() {
        let config = GatewayConfig::from_lookup(|key| match key {
            LISTEN_ADDR_VAR => Some("0.0.0.0:9000".to_owned()),
            STATIC_DIR_VAR => Some("/srv/signup".to_owned()),
            _ => None,
        });
        assert_eq!(config.listen_addr, "0.0.0.0:9000");
        assert_eq!(config.static_dir, PathBuf::from("/srv/signup"));
    }

    #[test]
    fn blank_variables_are_ignored() {
        let config = GatewayConfig::from_lookup(|_| Some("  ".to_owned()));
        assert_eq!(config, GatewayConfig::default());
    }
}
