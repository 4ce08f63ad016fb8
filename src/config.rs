//! Runtime settings, read from the environment.

use std::env;
use thiserror::Error;

const MAILBOX_CAPACITY_VAR: &str = "DISPATCH_MAILBOX_CAPACITY";
const LOG_VAR: &str = "DISPATCH_LOG";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    #[error("{var} is not valid unicode")]
    NotUnicode { var: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchConfig {
    /// Mailbox size of every record store.
    pub mailbox_capacity: usize,
    /// `tracing` filter directive.
    pub log_filter: String,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            mailbox_capacity: 32,
            log_filter: "info".to_string(),
        }
    }
}

impl DispatchConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env::var)
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup(
        lookup: impl Fn(&'static str) -> Result<String, env::VarError>,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let read = |var: &'static str| match lookup(var) {
            Ok(value) => Ok(Some(value)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode { var }),
        };

        let mailbox_capacity = match read(MAILBOX_CAPACITY_VAR)? {
            Some(value) => match value.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidNumber {
                        var: MAILBOX_CAPACITY_VAR,
                        value,
                    })
                }
            },
            None => defaults.mailbox_capacity,
        };
        let log_filter = read(LOG_VAR)?.unwrap_or(defaults.log_filter);

        Ok(Self {
            mailbox_capacity,
            log_filter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(
        vars: &[(&'static str, &str)],
    ) -> impl Fn(&'static str) -> Result<String, env::VarError> {
        let vars: HashMap<&'static str, String> =
            vars.iter().map(|(k, v)| (*k, v.to_string())).collect();
        move |var| vars.get(var).cloned().ok_or(env::VarError::NotPresent)
    }

    #[test]
    fn defaults_when_unset() {
        let config = DispatchConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, DispatchConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let config = DispatchConfig::from_lookup(lookup(&[
            ("DISPATCH_MAILBOX_CAPACITY", "128"),
            ("DISPATCH_LOG", "order_dispatch=debug"),
        ]))
        .unwrap();
        assert_eq!(config.mailbox_capacity, 128);
        assert_eq!(config.log_filter, "order_dispatch=debug");
    }

    #[test]
    fn rejects_bad_capacity() {
        for bad in ["0", "-1", "lots"] {
            let err = DispatchConfig::from_lookup(lookup(&[("DISPATCH_MAILBOX_CAPACITY", bad)]))
                .unwrap_err();
            assert_eq!(
                err,
                ConfigError::InvalidNumber {
                    var: "DISPATCH_MAILBOX_CAPACITY",
                    value: bad.to_string(),
                }
            );
        }
    }
}
