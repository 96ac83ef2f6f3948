//! pinball_physics: Rapier2D integration for the table.
//!
//! Responsibilities:
//! * Install Rapier with gravity, a capped variable timestep and substeps.
//! * Build the board (walls, bumpers, kinematic paddles) from `TableLayout`.
//! * Spawn balls on request and drain the ones that leave the board.
//! * Swing paddles toward their target angle.
//! * Respond to ball contacts with bumpers and paddles.
//! * Reset and pause.
//!
//! `TableRulesPlugin` holds everything except the Rapier pipeline itself so
//! the rules run headless in tests; `PinballPhysicsPlugin` adds both.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use pinball_core::TableSet;

mod balls;
mod config;
mod contacts;
mod paddle;
mod session;
mod table;

pub use balls::{drain_lost_balls, spawn_requested_balls};
pub use config::PhysicsConfig;
pub use contacts::{classify, respond_to_contacts, TableContact};
pub use paddle::{drive_paddles, spring_angular_velocity};
pub use session::{configure_rapier, reset_table, toggle_pause};
pub use table::spawn_table;

pub(crate) const LOG_TARGET: &str = "pinball_physics";

/// Table logic without the physics pipeline.
pub struct TableRulesPlugin;

impl Plugin for TableRulesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PhysicsConfig>()
            .add_event::<CollisionEvent>()
            .add_systems(Startup, spawn_table)
            .add_systems(
                Update,
                (
                    configure_rapier,
                    (reset_table, spawn_requested_balls, drive_paddles, toggle_pause)
                        .chain()
                        .in_set(TableSet::Commands),
                    respond_to_contacts.in_set(TableSet::Contacts),
                    drain_lost_balls.in_set(TableSet::Cleanup),
                ),
            );
    }
}

pub struct PinballPhysicsPlugin;

impl Plugin for PinballPhysicsPlugin {
    fn build(&self, app: &mut App) {
        let cfg = app
            .world_mut()
            .get_resource_or_insert_with::<PhysicsConfig>(PhysicsConfig::default)
            .clone();

        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(
            cfg.pixels_per_meter,
        ))
        .insert_resource(TimestepMode::Variable {
            max_dt: cfg.max_dt(),
            time_scale: 1.0,
            substeps: cfg.substeps.max(1),
        })
        .add_plugins(TableRulesPlugin);
    }
}
