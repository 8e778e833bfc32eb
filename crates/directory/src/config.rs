//! Directory configuration.

use serde::{Deserialize, Serialize};

/// Environment variable overriding [`DirectoryConfig::name`].
pub const DIRECTORY_NAME_ENV: &str = "ATM_DIRECTORY_NAME";

const DEFAULT_DIRECTORY_NAME: &str = "Local Directory";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// Label shown to card holders (typically the bank's name).
    pub name: String,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_DIRECTORY_NAME.to_string(),
        }
    }
}

impl DirectoryConfig {
    /// Defaults, overridden by `ATM_DIRECTORY_NAME` when set and non-blank.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        match lookup(DIRECTORY_NAME_ENV) {
            Some(name) if !name.trim().is_empty() => config.name = name.trim().to_string(),
            Some(_) => {
                tracing::warn!("{DIRECTORY_NAME_ENV} is blank; using default directory name");
            }
            None => {}
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = DirectoryConfig::from_lookup(|_| None);
        assert_eq!(config.name, "Local Directory");
    }

    #[test]
    fn env_value_overrides_default() {
        let config = DirectoryConfig::from_lookup(|key| {
            (key == DIRECTORY_NAME_ENV).then(|| " Test Bank Name ".to_string())
        });
        assert_eq!(config.name, "Test Bank Name");
    }

    #[test]
    fn blank_value_is_ignored() {
        let config = DirectoryConfig::from_lookup(|_| Some("   ".to_string()));
        assert_eq!(config, DirectoryConfig::default());
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let config: DirectoryConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, DirectoryConfig::default());
    }
}
