// src/config.rs
//! Registry construction settings.

use thiserror::Error;

/// Environment variable overriding the default dictionary name.
pub const ENV_DEFAULT_DICTIONARY: &str = "HARFANG_DEFAULT_DICTIONARY";
/// Environment variable overriding the first symbol id handed out.
pub const ENV_FIRST_SYMBOL_ID: &str = "HARFANG_FIRST_SYMBOL_ID";

/// Errors raised while validating a [`RegistryConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Id 0 is the "no symbol" value and cannot be minted.
    #[error("first symbol id must be at least 1 (id 0 is reserved)")]
    ReservedId,

    /// The default dictionary needs a real name; "" is already its alias.
    #[error("default dictionary name must not be empty")]
    EmptyDefaultName,

    /// An environment variable held something that is not a `u32`.
    #[error("invalid value {value:?} for {var}")]
    InvalidNumber {
        /// Variable that failed to parse.
        var: &'static str,
        /// Raw value found in the environment.
        value: String,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Name of the dictionary created with the registry.
    pub default_dictionary: String,
    /// First id handed out by the counter.
    pub first_id: u32,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            default_dictionary: "default".to_string(),
            first_id: 1,
        }
    }
}

impl RegistryConfig {
    /// Defaults, overridden by `HARFANG_DEFAULT_DICTIONARY` and
    /// `HARFANG_FIRST_SYMBOL_ID` when set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(name) = lookup(ENV_DEFAULT_DICTIONARY) {
            cfg.default_dictionary = name;
        }
        if let Some(raw) = lookup(ENV_FIRST_SYMBOL_ID) {
            cfg.first_id = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidNumber {
                    var: ENV_FIRST_SYMBOL_ID,
                    value: raw.clone(),
                })?;
        }
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.first_id == 0 {
            return Err(ConfigError::ReservedId);
        }
        if self.default_dictionary.is_empty() {
            return Err(ConfigError::EmptyDefaultName);
        }
        Ok(())
    }
}
