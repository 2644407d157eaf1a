//! Storage configuration loaded from the environment.

use std::path::PathBuf;

/// Environment variable naming the inventory data file.
pub const DATA_FILE_ENV: &str = "SHELFWISE_DATA_FILE";

/// Data file used when nothing is configured.
pub const DEFAULT_DATA_FILE: &str = "inventory.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub data_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

impl StorageConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let data_file = lookup(DATA_FILE_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

        Self { data_file }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset_or_blank() {
        assert_eq!(StorageConfig::from_lookup(|_| None), StorageConfig::default());
        assert_eq!(
            StorageConfig::from_lookup(|_| Some("   ".to_string())).data_file,
            PathBuf::from(DEFAULT_DATA_FILE)
        );
    }

    #[test]
    fn reads_data_file_from_lookup() {
        let config = StorageConfig::from_lookup(|key| {
            (key == DATA_FILE_ENV).then(|| "/var/lib/shelfwise/stock.json".to_string())
        });
        assert_eq!(config.data_file, PathBuf::from("/var/lib/shelfwise/stock.json"));
    }
}
