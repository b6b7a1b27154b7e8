use crate::case::{CaseRules, Convention};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_convention")]
    pub convention: Convention,

    #[serde(default)]
    pub rules: CaseRules,
}

fn default_convention() -> Convention {
    Convention::Title
}

impl Default for Config {
    fn default() -> Self {
        Self {
            convention: default_convention(),
            rules: CaseRules::default(),
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(
        convention: Option<Convention>,
        always_capitalize: Vec<String>,
        always_lowercase: Vec<String>,
        always_uppercase: Vec<String>,
        never_transform: Vec<String>,
    ) -> Result<Self> {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global_config = Self::from_file(&global_path)?;
                config = config.merge(global_config);
            }
        }

        // Load local config (overrides global)
        let local_path = PathBuf::from(".recase.toml");
        if local_path.exists() {
            let local_config = Self::from_file(&local_path)?;
            config = config.merge(local_config);
        }

        // Apply CLI overrides; rule words add to the configured lists
        if let Some(convention) = convention {
            config.convention = convention;
        }
        config.rules.always_capitalize.extend(always_capitalize);
        config.rules.always_lowercase.extend(always_lowercase);
        config.rules.always_uppercase.extend(always_uppercase);
        config.rules.never_transform.extend(never_transform);

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: Self) -> Self {
        // Merge logic: other's values override self's if they differ from defaults
        if other.convention != default_convention() {
            self.convention = other.convention;
        }
        if !other.rules.is_empty() {
            self.rules = other.rules;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "recase").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
