use bevy::prelude::*;

use crate::{Ball, Bumper, BumperFlash, Paddle, TableElement, Wall};

#[derive(Bundle)]
pub struct BallBundle {
    pub ball: Ball,
    pub element: TableElement,
    pub transform: Transform,
    pub global_transform: GlobalTransform,
}

impl BallBundle {
    pub fn new(position: Vec2, radius: f32, mass: f32) -> Self {
        Self {
            ball: Ball { radius, mass },
            element: TableElement::Ball,
            transform: Transform::from_translation(position.extend(0.0)),
            global_transform: GlobalTransform::IDENTITY,
        }
    }
}

#[derive(Bundle)]
pub struct PaddleBundle {
    pub element: TableElement,
    pub transform: Transform,
    pub global_transform: GlobalTransform,
    pub paddle: Paddle,
}

impl PaddleBundle {
    /// Placed at its pivot, rotated to its current angle.
    pub fn new(paddle: Paddle) -> Self {
        Self {
            element: TableElement::Paddle(paddle.side),
            transform: Transform::from_translation(paddle.pivot.extend(0.0))
                .with_rotation(Quat::from_rotation_z(paddle.angle)),
            global_transform: GlobalTransform::IDENTITY,
            paddle,
        }
    }
}

#[derive(Bundle)]
pub struct BumperBundle {
    pub bumper: Bumper,
    pub flash: BumperFlash,
    pub element: TableElement,
    pub transform: Transform,
    pub global_transform: GlobalTransform,
}

impl BumperBundle {
    pub fn new(position: Vec2, bumper: Bumper) -> Self {
        Self {
            bumper,
            flash: BumperFlash::default(),
            element: TableElement::Bumper,
            transform: Transform::from_translation(position.extend(0.0)),
            global_transform: GlobalTransform::IDENTITY,
        }
    }
}

#[derive(Bundle)]
pub struct WallBundle {
    pub wall: Wall,
    pub element: TableElement,
    pub transform: Transform,
    pub global_transform: GlobalTransform,
}

impl WallBundle {
    /// The entity sits at the world origin; the segment endpoints are world coordinates.
    pub fn new(wall: Wall) -> Self {
        Self {
            wall,
            element: TableElement::Wall,
            transform: Transform::IDENTITY,
            global_transform: GlobalTransform::IDENTITY,
        }
    }
}
