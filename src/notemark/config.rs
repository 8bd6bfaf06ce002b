use crate::error::{NoteMarkError, Result};
use crate::model::Domain;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DOMAIN: &str = "linux";

/// Configuration for notemark, stored as config.json in the app config dir.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NoteMarkConfig {
    /// Domain used when no --domain flag is given (e.g. "linux", "vim")
    #[serde(default = "default_domain")]
    pub default_domain: String,

    /// Sort listings alphabetically by name instead of authoring order
    #[serde(default)]
    pub sorted_lists: bool,
}

fn default_domain() -> String {
    DEFAULT_DOMAIN.to_string()
}

impl Default for NoteMarkConfig {
    fn default() -> Self {
        Self {
            default_domain: DEFAULT_DOMAIN.to_string(),
            sorted_lists: false,
        }
    }
}

impl NoteMarkConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(NoteMarkError::Io)?;
        let config: NoteMarkConfig =
            serde_json::from_str(&content).map_err(NoteMarkError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(NoteMarkError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(NoteMarkError::Serialization)?;
        fs::write(config_path, content).map_err(NoteMarkError::Io)?;
        Ok(())
    }

    /// The configured default domain, parsed. A bad value in the file is an
    /// error here rather than a silent fallback.
    pub fn domain(&self) -> Result<Domain> {
        self.default_domain.parse()
    }

    /// Set the default domain, rejecting unknown keys.
    pub fn set_default_domain(&mut self, key: &str) -> Result<()> {
        let domain: Domain = key.parse()?;
        self.default_domain = domain.key().to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = NoteMarkConfig::default();
        assert_eq!(config.default_domain, "linux");
        assert!(!config.sorted_lists);
        assert_eq!(config.domain().unwrap(), Domain::Linux);
    }

    #[test]
    fn test_set_default_domain() {
        let mut config = NoteMarkConfig::default();
        config.set_default_domain("vim").unwrap();
        assert_eq!(config.domain().unwrap(), Domain::Vim);

        assert!(config.set_default_domain("emacs").is_err());
        // Failed set leaves the previous value in place
        assert_eq!(config.default_domain, "vim");
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = NoteMarkConfig::load(temp_dir.path().join("absent")).unwrap();
        assert_eq!(config, NoteMarkConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();

        let mut config = NoteMarkConfig::default();
        config.set_default_domain("networking").unwrap();
        config.sorted_lists = true;
        config.save(temp_dir.path()).unwrap();

        let loaded = NoteMarkConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = NoteMarkConfig {
            default_domain: "git-advanced".to_string(),
            sorted_lists: true,
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: NoteMarkConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, parsed);
    }

    #[test]
    fn test_bad_domain_in_file_surfaces_on_use() {
        let config = NoteMarkConfig {
            default_domain: "dos".to_string(),
            sorted_lists: false,
        };
        assert!(config.domain().is_err());
    }
}
