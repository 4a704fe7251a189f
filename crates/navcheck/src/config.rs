// File: src/config.rs
// Purpose: Configuration parsing from navcheck.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the optional configuration file at the project root
pub const CONFIG_FILE: &str = "navcheck.toml";

/// Tool configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub check: CheckConfig,
}

/// Where the menu and the pages live, and what counts as a page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckConfig {
    /// YAML file holding `site.menu`, relative to the project root
    #[serde(default = "default_menu_file")]
    pub menu_file: String,

    /// Pages root, relative to the project root
    #[serde(default = "default_pages_dir")]
    pub pages_dir: String,

    /// File extensions treated as page templates (without the dot)
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Href prefixes that are never checked
    #[serde(default)]
    pub ignore: Vec<String>,
}

// Default values
fn default_menu_file() -> String {
    "src/config.yaml".to_string()
}

fn default_pages_dir() -> String {
    "src/pages".to_string()
}

fn default_extensions() -> Vec<String> {
    vec![
        "astro".to_string(),
        "md".to_string(),
        "mdx".to_string(),
        "html".to_string(),
    ]
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            menu_file: default_menu_file(),
            pages_dir: default_pages_dir(),
            extensions: default_extensions(),
            ignore: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from a navcheck.toml
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from `<project_root>/navcheck.toml`
    pub fn load_from_project(project_root: impl AsRef<Path>) -> Result<Self> {
        Self::load(project_root.as_ref().join(CONFIG_FILE))
    }
}
