//! Demo configuration
//!
//! Loaded from `.tiny-store-demo.toml`, looked up in this order:
//! 1. the path in `TINY_STORE_DEMO_CONFIG`
//! 2. the current working directory
//! 3. the home directory

use crate::actions::Action;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

const CONFIG_FILE: &str = ".tiny-store-demo.toml";
const CONFIG_ENV: &str = "TINY_STORE_DEMO_CONFIG";

/// Demo configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Actions dispatched one after another once the first render is done
    #[serde(default = "default_actions")]
    pub actions: Vec<Action>,
}

fn default_actions() -> Vec<Action> {
    vec![
        Action::UpdateTitleText {
            text: "Updated Title".to_string(),
        },
        Action::UpdateTitleColor {
            color: "blue".to_string(),
        },
    ]
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            actions: default_actions(),
        }
    }
}

impl AppConfig {
    /// Load config from the first file found, or use defaults
    pub fn load() -> Self {
        if let Some((path, content)) = load_config_file() {
            match Self::parse(&content) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse {}: {:#}", path.display(), e);
                }
            }
        }

        log::debug!("Using default config");
        Self::default()
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("invalid demo config")
    }
}

/// Read the first config file that exists, returning its path and content
fn load_config_file() -> Option<(PathBuf, String)> {
    candidate_paths().into_iter().find_map(|path| {
        let content = std::fs::read_to_string(&path).ok()?;
        log::debug!("Read config file {}", path.display());
        Some((path, content))
    })
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(path) = env::var_os(CONFIG_ENV) {
        paths.push(PathBuf::from(path));
    }
    paths.push(PathBuf::from(CONFIG_FILE));
    if let Some(home) = env::var_os("HOME") {
        paths.push(PathBuf::from(home).join(CONFIG_FILE));
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config_updates_title() {
        let config = AppConfig::default();
        assert_eq!(
            config.actions,
            vec![
                Action::UpdateTitleText {
                    text: "Updated Title".to_string()
                },
                Action::UpdateTitleColor {
                    color: "blue".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = AppConfig::parse("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            [[actions]]
            type = "UPDATE_CONTENT_TEXT"
            text = "Hello"
        "#;
        let config = AppConfig::parse(toml).unwrap();
        assert_eq!(
            config.actions,
            vec![Action::UpdateContentText {
                text: "Hello".to_string()
            }]
        );
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let err = AppConfig::parse("actions = 3").unwrap_err();
        assert!(err.to_string().contains("invalid demo config"));
    }

    #[test]
    fn test_candidate_paths_include_cwd() {
        let paths = candidate_paths();
        assert!(paths.iter().any(|p| p == &PathBuf::from(CONFIG_FILE)));
    }
}
