use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

use crate::v_info;

/// Client configuration, persisted as TOML next to the binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CocConfig {
    pub auth: AuthConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// File the API token is read from when the COC_TOKEN environment
    /// variable is not set
    pub token_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default verbosity (0=summary, 1=info, 2=debug)
    pub verbosity: u8,
}

impl Default for CocConfig {
    fn default() -> Self {
        Self {
            auth: AuthConfig {
                token_file: crate::TOKEN_FILE.to_string(),
            },
            output: OutputConfig { verbosity: 0 },
        }
    }
}

impl CocConfig {
    /// Load configuration from file, creating a default one if it doesn't exist
    pub fn load_or_create(config_path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        if Path::new(config_path).exists() {
            v_info!("Loading configuration from {}", config_path);
            let config_str = fs::read_to_string(config_path)?;
            let config: CocConfig = toml::from_str(&config_str)?;
            Ok(config)
        } else {
            v_info!("Creating default configuration at {}", config_path);
            let config = CocConfig::default();
            config.save(config_path)?;
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self, config_path: &str) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = Path::new(config_path).parent() {
            fs::create_dir_all(parent)?;
        }

        let config_str = toml::to_string_pretty(self)?;
        fs::write(config_path, config_str)?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.output.verbosity > 2 {
            return Err("verbosity must be between 0 and 2".to_string());
        }
        if self.auth.token_file.is_empty() {
            return Err("token_file must not be empty".to_string());
        }
        Ok(())
    }

    /// Resolves the API token: the COC_TOKEN environment variable wins,
    /// otherwise the configured token file is read.
    pub fn resolve_token(&self) -> Result<String, Box<dyn std::error::Error>> {
        if let Ok(token) = env::var("COC_TOKEN") {
            if !token.trim().is_empty() {
                return Ok(token.trim().to_string());
            }
        }

        let token = fs::read_to_string(&self.auth.token_file)
            .map_err(|e| format!("Failed to read {}: {}", self.auth.token_file, e))?
            .trim()
            .to_string();
        if token.is_empty() {
            return Err(format!("{} is empty", self.auth.token_file).into());
        }
        Ok(token)
    }
}
