// Copyright 2025 Formula Lab Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! CLI configuration file support

use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::{Path, PathBuf};

use super::output::OutputFormat;
use super::server::config::ServerConfig;

const CONFIG_FILE_NAME: &str = ".formularc";

/// CLI configuration loaded from ~/.formularc or .formularc
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CliConfig {
    /// Default output format
    #[serde(default)]
    pub output_format: Option<OutputFormat>,

    /// Disable colored output by default
    #[serde(default)]
    pub no_color: bool,

    /// Server defaults for `formula-lab serve`
    #[serde(default)]
    pub server: ServerSection,
}

/// `[server]` table; unset keys fall back to [`ServerConfig::default`]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ServerSection {
    #[serde(default)]
    pub host: Option<IpAddr>,

    #[serde(default)]
    pub port: Option<u16>,

    #[serde(default)]
    pub storage_dir: Option<PathBuf>,

    #[serde(default)]
    pub cors_all: bool,

    #[serde(default)]
    pub max_body_size_mb: Option<u64>,
}

/// Server settings given on the command line; each one overrides the file
#[derive(Debug, Clone, Default)]
pub struct ServerOverrides {
    pub host: Option<IpAddr>,
    pub port: Option<u16>,
    pub storage_dir: Option<PathBuf>,
    pub cors_all: bool,
    pub max_body_size_mb: Option<u64>,
}

impl CliConfig {
    /// Load configuration from standard locations
    ///
    /// Search order:
    /// 1. ./.formularc (current directory)
    /// 2. ~/.formularc (home directory)
    /// 3. ~/.config/formula-lab/config.toml
    pub fn load() -> anyhow::Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// First existing configuration file in search order
    pub fn find_config_file() -> Option<PathBuf> {
        let mut candidates = vec![PathBuf::from(CONFIG_FILE_NAME)];
        if let Some(home) = dirs::home_dir() {
            candidates.push(home.join(CONFIG_FILE_NAME));
            candidates.push(home.join(".config").join("formula-lab").join("config.toml"));
        }
        candidates.into_iter().find(|path| path.is_file())
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get default config file path (user's home directory)
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(CONFIG_FILE_NAME))
    }

    /// Create a sample configuration file with helpful comments
    pub fn sample_config() -> String {
        r#"# Formula Lab Configuration
# This file can be placed at:
#   - ./.formularc (current directory)
#   - ~/.formularc (home directory)
#   - ~/.config/formula-lab/config.toml

# Default output format for `solve` (pretty, json)
output_format = "pretty"

# Disable colored output
no_color = false

[server]
host = "127.0.0.1"
port = 8080
# Read/write file actions are confined to this directory
storage_dir = "./storage"
# Allow every origin (development mode)
cors_all = false
max_body_size_mb = 1
"#
        .to_string()
    }

    /// Build the server configuration, command line values taking precedence
    pub fn server_config(&self, overrides: &ServerOverrides) -> ServerConfig {
        let defaults = ServerConfig::default();
        let file = &self.server;

        ServerConfig::new(
            overrides.port.or(file.port).unwrap_or(defaults.port),
            overrides.host.or(file.host).unwrap_or(defaults.host),
            overrides.cors_all || file.cors_all,
            overrides
                .max_body_size_mb
                .or(file.max_body_size_mb)
                .unwrap_or(defaults.max_body_size_mb),
            overrides
                .storage_dir
                .clone()
                .or_else(|| file.storage_dir.clone())
                .unwrap_or(defaults.storage_dir),
        )
    }
}
