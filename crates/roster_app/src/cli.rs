use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use roster_core::FilterMode;
use roster_logging::LogDestination;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "roster",
    version,
    about = "List groups and the subscription state of a user from a REST backend"
)]
pub struct Args {
    /// Configuration file (RON). Defaults to ./roster.ron when present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Backend root, e.g. https://example.com/api
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// User whose subscriptions partition the list.
    #[arg(long, value_name = "ID")]
    pub owner: Option<u64>,

    #[arg(long, value_enum)]
    pub filter: Option<FilterSetting>,

    /// Bearer token sent with every request.
    #[arg(long, value_name = "TOKEN")]
    pub token: Option<String>,

    #[arg(long, value_enum)]
    pub log: Option<LogSetting>,

    /// Log at debug level.
    #[arg(short, long)]
    pub verbose: bool,

    /// Reload every SECS seconds instead of exiting after the first view.
    #[arg(long, value_name = "SECS")]
    pub watch: Option<u64>,

    /// Hide an item locally after loading (repeatable).
    #[arg(long = "remove", value_name = "ID")]
    pub remove: Vec<u64>,

    /// Mark an item as selected in the table (repeatable).
    #[arg(long = "select", value_name = "ID")]
    pub select: Vec<u64>,

    /// Write the effective configuration to the config file and exit.
    #[arg(long)]
    pub write_config: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
pub enum FilterSetting {
    /// Every group.
    #[default]
    All,
    /// Only groups the owner is subscribed to.
    Subscribed,
    /// Only groups the owner is not subscribed to.
    Unsubscribed,
}

impl From<FilterSetting> for FilterMode {
    fn from(setting: FilterSetting) -> Self {
        match setting {
            FilterSetting::All => FilterMode::Unset,
            FilterSetting::Subscribed => FilterMode::IncludeOnly,
            FilterSetting::Unsubscribed => FilterMode::ExcludeOnly,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
pub enum LogSetting {
    #[default]
    File,
    Terminal,
    Both,
}

impl From<LogSetting> for LogDestination {
    fn from(setting: LogSetting) -> Self {
        match setting {
            LogSetting::File => LogDestination::File,
            LogSetting::Terminal => LogDestination::Terminal,
            LogSetting::Both => LogDestination::Both,
        }
    }
}
