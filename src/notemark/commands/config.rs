use crate::commands::{CmdMessage, CmdResult};
use crate::config::NoteMarkConfig;
use crate::error::{NoteMarkError, Result};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    SetDefaultDomain(String),
    SetSortedLists(bool),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = NoteMarkConfig::load(config_dir)?;

    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_config(config)),
        ConfigAction::ShowKey(key) => match key.as_str() {
            "default-domain" | "sorted-lists" => Ok(CmdResult::default().with_config(config)),
            other => Err(NoteMarkError::Api(format!("Unknown config key: {}", other))),
        },
        ConfigAction::SetDefaultDomain(value) => {
            config.set_default_domain(&value)?;
            config.save(config_dir)?;
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "default-domain set to {}",
                value
            )));
            Ok(result)
        }
        ConfigAction::SetSortedLists(value) => {
            config.sorted_lists = value;
            config.save(config_dir)?;
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!("sorted-lists set to {}", value)));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn show_all_returns_defaults_when_unconfigured() {
        let dir = TempDir::new().unwrap();
        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config.unwrap(), NoteMarkConfig::default());
    }

    #[test]
    fn set_default_domain_persists() {
        let dir = TempDir::new().unwrap();
        run(
            dir.path(),
            ConfigAction::SetDefaultDomain("vim".to_string()),
        )
        .unwrap();

        let reloaded = NoteMarkConfig::load(dir.path()).unwrap();
        assert_eq!(reloaded.default_domain, "vim");
    }

    #[test]
    fn set_rejects_unknown_domains() {
        let dir = TempDir::new().unwrap();
        let err = run(
            dir.path(),
            ConfigAction::SetDefaultDomain("emacs".to_string()),
        )
        .unwrap_err();
        assert!(err.to_string().contains("emacs"));
    }

    #[test]
    fn unknown_key_is_an_api_error() {
        let dir = TempDir::new().unwrap();
        let err = run(dir.path(), ConfigAction::ShowKey("colors".to_string())).unwrap_err();
        assert!(matches!(err, NoteMarkError::Api(_)));
    }

    #[test]
    fn set_sorted_lists_persists() {
        let dir = TempDir::new().unwrap();
        run(dir.path(), ConfigAction::SetSortedLists(true)).unwrap();
        assert!(NoteMarkConfig::load(dir.path()).unwrap().sorted_lists);
    }
}
