use bevy::prelude::*;
use pinball_core::PinballCorePlugin;
use pinball_input::PinballInputPlugin;
use pinball_physics::{PinballPhysicsPlugin, TableRulesPlugin};
use pinball_rendering::PinballRenderingPlugin;

use crate::{AutoClosePlugin, PinballConfig, StatsLog, LOG_TARGET};

/// Problems found while loading configuration, logged once the log
/// subscriber is up.
#[derive(Resource, Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub sources: Vec<String>,
    pub warnings: Vec<String>,
}

/// Wires every table crate from one `PinballConfig`.
pub struct PinballPlugin {
    pub config: PinballConfig,
    /// Rules without Rapier's pipeline, camera or meshes.
    pub headless: bool,
}

impl PinballPlugin {
    pub fn new(config: PinballConfig) -> Self {
        Self {
            config,
            headless: false,
        }
    }

    pub fn headless(config: PinballConfig) -> Self {
        Self {
            config,
            headless: true,
        }
    }
}

impl Plugin for PinballPlugin {
    fn build(&self, app: &mut App) {
        let cfg = &self.config;
        app.insert_resource(cfg.clone())
            .insert_resource(cfg.physics.clone())
            .insert_resource(cfg.table.clone())
            .insert_resource(cfg.controls.clone())
            .init_resource::<ConfigWarnings>()
            .insert_resource(StatsLog::new(cfg.debug.stats_interval))
            .add_plugins((PinballCorePlugin, PinballInputPlugin));

        if self.headless {
            app.add_plugins(TableRulesPlugin);
        } else {
            app.add_plugins((
                PinballPhysicsPlugin,
                PinballRenderingPlugin::with_wireframe(cfg.debug.wireframe),
            ));
        }

        app.add_plugins(AutoClosePlugin {
            seconds: cfg.window.auto_close,
        })
        .add_systems(Startup, report_config);

        #[cfg(feature = "debug")]
        app.add_systems(Last, crate::stats::log_table_stats);
    }
}

fn report_config(report: Res<ConfigWarnings>) {
    if report.sources.is_empty() {
        info!(target: LOG_TARGET, "Config: built-in defaults");
    } else {
        info!(target: LOG_TARGET, "Config: {}", report.sources.join(" + "));
    }
    for w in &report.warnings {
        warn!(target: LOG_TARGET, "Config: {w}");
    }
}
