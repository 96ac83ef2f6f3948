use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use pinball_core::{Ball, BallBundle, BallDrained, BallSpawned, SpawnBallRequest, TableLayout};
use rand::Rng;

use crate::{PhysicsConfig, LOG_TARGET};

/// One dynamic ball per request at the launch point.
pub fn spawn_requested_balls(
    mut commands: Commands,
    mut requests: EventReader<SpawnBallRequest>,
    mut spawned: EventWriter<BallSpawned>,
    layout: Res<TableLayout>,
    cfg: Res<PhysicsConfig>,
    balls: Query<(), With<Ball>>,
) {
    if requests.is_empty() {
        return;
    }
    let mut live = balls.iter().count();
    let mut rng = rand::thread_rng();
    for _ in requests.read() {
        if live >= layout.max_balls {
            warn!(target: LOG_TARGET, "Ball cap {} reached; spawn ignored", layout.max_balls);
            continue;
        }
        let mut position: Vec2 = layout.launch.position.into();
        let jitter = layout.launch.jitter_x.abs();
        if jitter > 0.0 {
            position.x += rng.gen_range(-jitter..=jitter);
        }
        let def = &layout.ball;
        let mut entity = commands.spawn((
            Name::new("Ball"),
            BallBundle::new(position, def.radius, def.mass),
            RigidBody::Dynamic,
            Collider::ball(def.radius),
            ColliderMassProperties::Mass(def.mass),
            Restitution {
                coefficient: def.restitution,
                combine_rule: CoefficientCombineRule::Multiply,
            },
            Velocity::linear(layout.launch.velocity.into()),
            LockedAxes::ROTATION_LOCKED,
            ExternalImpulse::default(),
            ActiveEvents::COLLISION_EVENTS,
        ));
        if cfg.ccd {
            entity.insert(Ccd::enabled());
        }
        let id = entity.id();
        live += 1;
        debug!(target: LOG_TARGET, "Spawned ball {id:?} at {position}");
        spawned.write(BallSpawned(id));
    }
}

/// Removes balls that fell past the drain line or flew off the sides.
pub fn drain_lost_balls(
    mut commands: Commands,
    layout: Res<TableLayout>,
    balls: Query<(Entity, &Transform), With<Ball>>,
    mut drained: EventWriter<BallDrained>,
) {
    for (entity, transform) in &balls {
        let position = transform.translation.truncate();
        if layout.is_drained(position) {
            debug!(target: LOG_TARGET, "Ball {entity:?} drained at {position}");
            commands.entity(entity).despawn();
            drained.write(BallDrained(entity));
        }
    }
}
