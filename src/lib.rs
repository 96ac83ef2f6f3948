//! pinball: configuration, CLI and app assembly for the two-paddle table.

pub mod app;
pub mod auto_close;
pub mod cli;
pub mod config;
pub mod stats;

pub use app::{ConfigWarnings, PinballPlugin};
pub use auto_close::{AutoCloseTimer, AutoClosePlugin};
pub use cli::Cli;
pub use config::{DebugConfig, PinballConfig, WindowConfig};
pub use stats::StatsLog;

pub(crate) const LOG_TARGET: &str = "pinball";
