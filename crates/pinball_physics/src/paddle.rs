use bevy::prelude::*;
use pinball_core::{Paddle, Paused};

use crate::PhysicsConfig;

/// Spring toward `target`: `stiffness * error`, capped at `max_speed` and at
/// the speed that would land exactly on the target within `dt`.
pub fn spring_angular_velocity(
    angle: f32,
    target: f32,
    stiffness: f32,
    max_speed: f32,
    dt: f32,
) -> f32 {
    let error = target - angle;
    let mut cap = max_speed.abs();
    if dt > 0.0 {
        cap = cap.min(error.abs() / dt);
    }
    (error * stiffness).clamp(-cap, cap)
}

/// Swings each kinematic paddle about its pivot. The paddle collider is
/// position-based, so writing the rotation is enough for Rapier to derive
/// the body velocity for the next step.
pub fn drive_paddles(
    time: Res<Time>,
    cfg: Res<PhysicsConfig>,
    paused: Res<Paused>,
    mut paddles: Query<(&mut Paddle, &mut Transform)>,
) {
    if paused.0 {
        return;
    }
    let dt = time.delta_secs().min(cfg.max_dt());
    for (mut paddle, mut transform) in &mut paddles {
        let w = spring_angular_velocity(
            paddle.angle,
            paddle.target_angle(),
            cfg.paddle_stiffness,
            cfg.paddle_max_speed,
            dt,
        );
        if w == 0.0 && paddle.angular_velocity == 0.0 {
            continue;
        }
        paddle.angular_velocity = w;
        paddle.angle += w * dt;
        transform.rotation = Quat::from_rotation_z(paddle.angle);
    }
}
