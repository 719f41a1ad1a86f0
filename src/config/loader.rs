// file: src/config/loader.rs
// version: 1.0.0
// guid: 54492c10-4a97-4671-957e-a2f7437462fe

//! Configuration file loading and environment variable substitution

use super::ShareConfig;
use crate::error::SetupError;
use crate::Result;
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Configuration loader with environment variable substitution
pub struct ConfigLoader {
    env_vars: HashMap<String, String>,
}

impl ConfigLoader {
    /// Create a new config loader seeded from the process environment
    pub fn new() -> Self {
        Self {
            env_vars: std::env::vars().collect(),
        }
    }

    /// Load a share configuration from a YAML file
    pub fn load_share_config<P: AsRef<Path>>(&self, path: P) -> Result<ShareConfig> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SetupError::config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let expanded = self.expand_env_vars(&content)?;
        if expanded.trim().is_empty() {
            return Ok(ShareConfig::default());
        }

        let config: ShareConfig = serde_yaml::from_str(&expanded)?;
        debug!("Loaded share config from {}", path.display());
        Ok(config)
    }

    /// Expand `${VAR}` placeholders in configuration content
    fn expand_env_vars(&self, content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| SetupError::config(format!("Invalid regex pattern: {}", e)))?;

        let mut result = content.to_string();
        let mut missing_vars = Vec::new();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];

            match self.env_vars.get(var_name) {
                Some(value) => result = result.replace(placeholder, value),
                None => missing_vars.push(var_name.to_string()),
            }
        }

        if !missing_vars.is_empty() {
            return Err(SetupError::config(format!(
                "Missing environment variables: {}",
                missing_vars.join(", ")
            )));
        }

        Ok(result)
    }

    /// Set environment variable for substitution
    pub fn set_env_var(&mut self, key: String, value: String) {
        self.env_vars.insert(key, value);
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
