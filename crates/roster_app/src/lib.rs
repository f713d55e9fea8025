//! Command-line front-end wiring the roster state machine to the REST engine.
mod app;
mod cli;
mod config;
mod effects;
mod render;

pub use app::{run, Session};
pub use cli::{Args, FilterSetting, LogSetting};
pub use config::{load_config, save_config, AppConfig, ConfigError, DEFAULT_CONFIG_FILE};
pub use effects::{display_error, msg_from_event, EffectRunner};
pub use render::render_table;
