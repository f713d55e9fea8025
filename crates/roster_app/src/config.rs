use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use roster_engine::SourceSettings;
use serde::{Deserialize, Serialize};

use crate::{Args, FilterSetting, LogSetting};

pub const DEFAULT_CONFIG_FILE: &str = "roster.ron";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("failed to write {path:?}: {message}")]
    Write { path: PathBuf, message: String },
}

/// Settings read from the RON file. Absent fields take their default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub items_path: String,
    pub memberships_path: String,
    pub bearer_token: Option<String>,
    pub owner_id: u64,
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: u64,
    pub max_bytes: u64,
    pub filter: FilterSetting,
    pub log: LogSetting,
}

impl Default for AppConfig {
    fn default() -> Self {
        let source = SourceSettings::default();
        Self {
            base_url: source.base_url,
            items_path: source.items_path,
            memberships_path: source.memberships_path,
            bearer_token: source.bearer_token,
            owner_id: 1,
            connect_timeout_ms: duration_ms(source.connect_timeout),
            request_timeout_ms: duration_ms(source.request_timeout),
            max_bytes: source.max_bytes,
            filter: FilterSetting::default(),
            log: LogSetting::default(),
        }
    }
}

impl AppConfig {
    /// Command-line flags win over file values.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(base_url) = &args.base_url {
            self.base_url = base_url.clone();
        }
        if let Some(owner) = args.owner {
            self.owner_id = owner;
        }
        if let Some(filter) = args.filter {
            self.filter = filter;
        }
        if let Some(token) = &args.token {
            self.bearer_token = Some(token.clone());
        }
        if let Some(log) = args.log {
            self.log = log;
        }
    }

    pub fn source_settings(&self) -> SourceSettings {
        SourceSettings {
            base_url: self.base_url.clone(),
            items_path: self.items_path.clone(),
            memberships_path: self.memberships_path.clone(),
            connect_timeout: Duration::from_millis(self.connect_timeout_ms),
            request_timeout: Duration::from_millis(self.request_timeout_ms),
            max_bytes: self.max_bytes,
            bearer_token: self.bearer_token.clone(),
        }
    }
}

/// Loads the config at `path`. A missing file yields defaults unless `required`.
pub fn load_config(path: &Path, required: bool) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound && !required => {
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    ron::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

pub fn save_config(path: &Path, config: &AppConfig) -> Result<(), ConfigError> {
    let pretty = ron::ser::PrettyConfig::new();
    let content = ron::ser::to_string_pretty(config, pretty).map_err(|err| ConfigError::Write {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    fs::write(path, content).map_err(|err| ConfigError::Write {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
