use std::str::FromStr;

use anyhow::bail;
use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use clap::Parser;
use pinball::{Cli, ConfigWarnings, PinballConfig, PinballPlugin};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut report = ConfigWarnings::default();
    let mut cfg = if cli.uses_default_config() {
        let (cfg, error) = PinballConfig::load_or_default(&cli.config);
        match error {
            Some(e) => report.warnings.push(format!("{e}; using built-in defaults")),
            None => report.sources.push(cli.config.display().to_string()),
        }
        cfg
    } else {
        // An explicitly named file must load.
        let cfg = PinballConfig::load_from_file(&cli.config)?;
        report.sources.push(cli.config.display().to_string());
        cfg
    };
    cli.apply(&mut cfg);
    report.warnings.extend(cfg.validate());

    let level = Level::from_str(&cfg.debug.log_level).unwrap_or_else(|_| {
        report
            .warnings
            .push(format!("[debug] unknown log_level '{}', using info", cfg.debug.log_level));
        Level::INFO
    });

    let exit = App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: cfg.window.title.clone(),
                        resolution: (cfg.window.width, cfg.window.height).into(),
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    filter: cfg.debug.log_filter.clone(),
                    level,
                    ..default()
                }),
        )
        .insert_resource(report)
        .add_plugins(PinballPlugin::new(cfg))
        .run();

    match exit {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => bail!("pinball exited with code {code}"),
    }
}
