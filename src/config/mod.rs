use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::utils::error::{Result, WarpError};
use crate::utils::validation::{self, Validate};

/// Well-known location the host loads from when none is configured.
pub const DEFAULT_CONFIG_PATH: &str = "config/warpcmd/commands.json";

/// On-disk document shape: `{ "commands": [ { name, ip?, port? } ] }`, or the
/// TOML rendition of the same when the path ends in `.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RawConfig {
    #[serde(default)]
    commands: Vec<RawEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawEntry {
    name: Option<String>,
    ip: Option<String>,
    port: Option<u32>,
}

impl Validate for RawConfig {
    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();

        for (index, entry) in self.commands.iter().enumerate() {
            let name = entry.name.as_deref().ok_or_else(|| {
                WarpError::MissingConfigError {
                    field: format!("commands[{}].name", index),
                }
            })?;
            validation::validate_command_name(&format!("commands[{}].name", index), name)?;

            if !seen.insert(name.to_string()) {
                return Err(WarpError::DuplicateCommandError {
                    name: name.to_string(),
                });
            }

            if let Some(ip) = &entry.ip {
                validation::validate_host(&format!("commands[{}].ip", index), ip)?;
            }

            if let Some(port) = entry.port {
                validation::validate_port(&format!("commands[{}].port", index), port)?;
            }
        }

        Ok(())
    }
}

/// One validated shortcut command. Immutable after load; a handler closes over
/// the ip/port pair at registration time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEntry {
    pub name: String,
    pub ip: Option<String>,
    pub port: Option<u16>,
}

/// Validated command list, frozen for the process lifetime once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandConfig {
    pub commands: Vec<CommandEntry>,
}

impl CommandConfig {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let processed = substitute_env_vars(content);
        let raw: RawConfig = serde_json::from_str(&processed)?;
        Self::from_raw(raw)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = substitute_env_vars(content);
        let raw: RawConfig = toml::from_str(&processed)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self> {
        raw.validate()?;

        let commands = raw
            .commands
            .into_iter()
            .map(|entry| CommandEntry {
                // both fields are validated above: name present, port in range
                name: entry.name.unwrap_or_default(),
                ip: entry.ip,
                port: entry.port.map(|p| p as u16),
            })
            .collect();

        Ok(Self { commands })
    }
}

/// Loads the command list from its well-known location and creates the
/// first-run placeholder when it is missing.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn default_location() -> Self {
        Self::new(DEFAULT_CONFIG_PATH)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing file: parent directories and an empty placeholder are created
    /// and the config is reported absent. An existing empty file (the
    /// placeholder from a previous first run) also reads as absent, so
    /// repeated loads never re-create or fail.
    pub fn load(&self) -> Result<Option<CommandConfig>> {
        if !self.path.exists() {
            if let Some(parent) = self.path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(&self.path, "")?;
            tracing::info!(path = %self.path.display(), "created placeholder command config");
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        let config = if self.path.extension().is_some_and(|ext| ext == "toml") {
            CommandConfig::from_toml_str(&content)?
        } else {
            CommandConfig::from_json_str(&content)?
        };

        Ok(Some(config))
    }

    /// Degradation wrapper for startup: a missing config means nothing to
    /// register, a broken one is logged and treated the same. Startup never
    /// fails on config problems.
    pub fn load_or_empty(&self) -> CommandConfig {
        match self.load() {
            Ok(Some(config)) => config,
            Ok(None) => {
                tracing::info!(path = %self.path.display(), "no command config present; nothing to register");
                CommandConfig::empty()
            }
            Err(err) => {
                tracing::error!(path = %self.path.display(), "failed to load command config: {err}");
                CommandConfig::empty()
            }
        }
    }
}

/// Replaces `${VAR}` with the environment value; unset variables stay verbatim.
fn substitute_env_vars(content: &str) -> String {
    let re = regex::Regex::new(r"\$\{([^}]+)\}").unwrap();

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .into_owned()
}
