use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use pinball_core::{
    Bumper, BumperBundle, PaddleBundle, TableLayout, Wall, WallBundle,
};

use crate::LOG_TARGET;

/// Builds the static board from `TableLayout`: boundary walls, bumpers and
/// the two kinematic paddles. Runs once at startup; reset keeps these.
pub fn spawn_table(mut commands: Commands, layout: Res<TableLayout>) {
    for (i, def) in layout.walls.iter().enumerate() {
        let wall = Wall::new(def.from.into(), def.to.into(), def.radius);
        commands.spawn((
            Name::new(format!("Wall{i}")),
            RigidBody::Fixed,
            Collider::capsule(wall.start, wall.end, wall.radius),
            Restitution {
                coefficient: layout.wall_restitution,
                combine_rule: CoefficientCombineRule::Multiply,
            },
            WallBundle::new(wall),
        ));
    }

    for (i, def) in layout.bumpers.iter().enumerate() {
        let bumper = Bumper {
            radius: def.radius,
            restitution: def.restitution,
            kick: def.kick,
            points: def.points,
        };
        commands.spawn((
            Name::new(format!("Bumper{i}")),
            RigidBody::Fixed,
            Collider::ball(bumper.radius),
            Restitution {
                coefficient: bumper.restitution,
                combine_rule: CoefficientCombineRule::Max,
            },
            BumperBundle::new(def.position.into(), bumper),
        ));
    }

    for def in &layout.paddles {
        let paddle = def.to_paddle();
        let half = paddle.half_extents();
        let collider = Collider::compound(vec![(
            paddle.local_center(),
            0.0,
            Collider::cuboid(half.x, half.y),
        )]);
        commands.spawn((
            Name::new(format!("Paddle{}", capitalized(paddle.side.label()))),
            RigidBody::KinematicPositionBased,
            collider,
            Restitution {
                coefficient: layout.wall_restitution,
                combine_rule: CoefficientCombineRule::Multiply,
            },
            PaddleBundle::new(paddle),
        ));
    }

    info!(
        target: LOG_TARGET,
        "Table built: {} walls, {} bumpers, {} paddles",
        layout.walls.len(),
        layout.bumpers.len(),
        layout.paddles.len()
    );
}

fn capitalized(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
