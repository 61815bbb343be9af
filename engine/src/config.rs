use serde::{Deserialize, Serialize};
use std::io::ErrorKind;

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionSettings {
    pub difficulty_level: u32,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            difficulty_level: 1,
            seed: None,
        }
    }
}

impl Validate for SessionSettings {
    fn validate(&self) -> Result<(), String> {
        // Any difficulty level is accepted; levels above 1 collapse to
        // the hard tier inside the engine.
        Ok(())
    }
}

impl SessionSettings {
    /// Loads settings from a YAML file. A missing file yields defaults;
    /// an unreadable or malformed file is an error.
    pub fn load(path: &str) -> Result<Self, String> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => return Err(format!("Failed to read config file: {}", err)),
        };

        let settings: Self = serde_yaml_ng::from_str(&content)
            .map_err(|e| format!("Failed to deserialize config: {}", e))?;

        settings
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        Ok(settings)
    }

    pub fn save(&self, path: &str) -> Result<(), String> {
        self.validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let content = serde_yaml_ng::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {}", e))
    }
}
