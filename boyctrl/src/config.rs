//! Behavior switches read once from an optional configuration file.

use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

/// File name looked up in the working directory by [`BoyConfig::load_default`].
pub const CONFIG_FILE_NAME: &str = "boyctrl.json";

/// The four boolean switches the driver forwards to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BoyConfig {
    /// Drive the slave speech channel as well.
    pub with_slave: bool,
    /// Queue behind current speech instead of cutting it off.
    pub append: bool,
    /// Let later submissions preempt this one.
    pub allow_break: bool,
    /// Engine-side "any key silences speech" switch.
    pub any_key_stop: bool,
}

impl Default for BoyConfig {
    fn default() -> Self {
        Self {
            with_slave: false,
            append: true,
            allow_break: true,
            any_key_stop: false,
        }
    }
}

impl BoyConfig {
    /// Read switches from `path`. The file is optional: a missing or
    /// unparseable file yields the defaults.
    pub fn load(path: &Path) -> Self {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("no config at {}, using defaults", path.display());
                return Self::default();
            }
            Err(err) => {
                warn!("failed to read {}: {}", path.display(), err);
                return Self::default();
            }
        };

        match serde_json::from_str(&text) {
            Ok(config) => config,
            Err(err) => {
                warn!("malformed config {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Read switches from [`CONFIG_FILE_NAME`] in the working directory.
    pub fn load_default() -> Self {
        Self::load(Path::new(CONFIG_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BoyConfig::default();
        assert!(!config.with_slave);
        assert!(config.append);
        assert!(config.allow_break);
        assert!(!config.any_key_stop);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = BoyConfig::load(&dir.path().join("missing.json"));
        assert_eq!(config, BoyConfig::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            r#"{"with_slave": true, "append": false, "allow_break": false, "any_key_stop": true}"#,
        )
        .expect("write config");

        let config = BoyConfig::load(&path);
        assert!(config.with_slave);
        assert!(!config.append);
        assert!(!config.allow_break);
        assert!(config.any_key_stop);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, r#"{"any_key_stop": true}"#).expect("write config");

        let config = BoyConfig::load(&path);
        assert!(config.any_key_stop);
        assert!(config.append);
        assert!(config.allow_break);
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "not json").expect("write config");

        assert_eq!(BoyConfig::load(&path), BoyConfig::default());
    }
}
