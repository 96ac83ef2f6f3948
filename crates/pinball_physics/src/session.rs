use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use pinball_core::{Ball, BumperFlash, Paddle, Paused, ResetTable, Score, TogglePause};

use crate::{PhysicsConfig, LOG_TARGET};

/// Pushes gravity into the Rapier context once it exists.
pub fn configure_rapier(
    cfg: Res<PhysicsConfig>,
    paused: Res<Paused>,
    mut rapier: Query<&mut RapierConfiguration>,
    mut done: Local<bool>,
) {
    if *done && !cfg.is_changed() {
        return;
    }
    let mut applied = false;
    for mut rc in &mut rapier {
        rc.gravity = cfg.gravity();
        rc.physics_pipeline_active = !paused.0;
        applied = true;
    }
    if applied && !*done {
        *done = true;
        info!(target: LOG_TARGET, "Rapier configured: gravity {}", cfg.gravity());
    }
}

/// Clears every ball and the score, and snaps paddles back to rest.
/// Walls and bumpers stay.
pub fn reset_table(
    mut commands: Commands,
    mut resets: EventReader<ResetTable>,
    mut score: ResMut<Score>,
    balls: Query<Entity, With<Ball>>,
    mut paddles: Query<(&mut Paddle, &mut Transform)>,
    mut flashes: Query<&mut BumperFlash>,
) {
    if resets.is_empty() {
        return;
    }
    resets.clear();

    let mut removed = 0;
    for entity in &balls {
        commands.entity(entity).despawn();
        removed += 1;
    }
    score.reset();
    for (mut paddle, mut transform) in &mut paddles {
        paddle.settle();
        transform.rotation = Quat::from_rotation_z(paddle.angle);
    }
    for mut flash in &mut flashes {
        flash.remaining = 0.0;
    }
    info!(target: LOG_TARGET, "Table reset ({removed} balls cleared)");
}

/// Flips the physics pipeline on or off once per `TogglePause`.
pub fn toggle_pause(
    mut toggles: EventReader<TogglePause>,
    mut paused: ResMut<Paused>,
    mut rapier: Query<&mut RapierConfiguration>,
) {
    let flips = toggles.read().count();
    if flips % 2 == 0 {
        return;
    }
    paused.0 = !paused.0;
    for mut rc in &mut rapier {
        rc.physics_pipeline_active = !paused.0;
    }
    info!(
        target: LOG_TARGET,
        "Physics {}",
        if paused.0 { "paused" } else { "resumed" }
    );
}
