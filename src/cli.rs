use std::path::PathBuf;

use clap::Parser;

use crate::PinballConfig;

pub const DEFAULT_CONFIG: &str = "assets/config/pinball.ron";

#[derive(Parser, Debug)]
#[command(name = "pinball", version, about = "Two-paddle pinball table")]
pub struct Cli {
    /// Config file to load. Errors are fatal unless it is the default file,
    /// which falls back to built-in values.
    #[arg(long, short, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,
    /// Exit after this many seconds (overrides window.auto_close)
    #[arg(long, value_name = "SECS")]
    pub auto_close: Option<f32>,
    /// Draw physics collider outlines
    #[arg(long)]
    pub wireframe: bool,
}

impl Cli {
    pub fn uses_default_config(&self) -> bool {
        self.config.as_os_str() == DEFAULT_CONFIG
    }

    /// Command-line flags win over file values.
    pub fn apply(&self, cfg: &mut PinballConfig) {
        if let Some(secs) = self.auto_close {
            cfg.window.auto_close = secs;
        }
        if self.wireframe {
            cfg.debug.wireframe = true;
        }
    }
}
