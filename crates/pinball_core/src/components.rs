use bevy::prelude::*;
use serde::Deserialize;

/// Which flipper a paddle is. Also picks the control key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
pub enum PaddleSide {
    Left,
    Right,
}

impl PaddleSide {
    pub const ALL: [PaddleSide; 2] = [PaddleSide::Left, PaddleSide::Right];

    pub fn label(self) -> &'static str {
        match self {
            PaddleSide::Left => "left",
            PaddleSide::Right => "right",
        }
    }
}

/// Tag present on every table entity. Contact handling classifies both
/// colliders of a pair by this tag instead of probing several queries.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableElement {
    Ball,
    Paddle(PaddleSide),
    Bumper,
    Wall,
}

#[derive(Component, Clone, Copy, Debug)]
pub struct Ball {
    pub radius: f32,
    pub mass: f32,
}

#[derive(Component, Clone, Debug)]
pub struct Paddle {
    pub side: PaddleSide,
    /// World position of the hinge.
    pub pivot: Vec2,
    /// Signed length along local x; negative paddles extend to the left of the pivot.
    pub length: f32,
    pub thickness: f32,
    pub rest_angle: f32,
    pub raised_angle: f32,
    /// True while the control key is held.
    pub active: bool,
    /// Current hinge angle; the transform rotation mirrors it.
    pub angle: f32,
    /// Rad/s applied over the last tick.
    pub angular_velocity: f32,
}

impl Paddle {
    pub fn target_angle(&self) -> f32 {
        if self.active {
            self.raised_angle
        } else {
            self.rest_angle
        }
    }

    /// Snap back to rest and stop.
    pub fn settle(&mut self) {
        self.angle = self.rest_angle;
        self.angular_velocity = 0.0;
    }

    /// Velocity of the paddle surface at `point` (world space) due to rotation.
    pub fn surface_velocity(&self, point: Vec2) -> Vec2 {
        (point - self.pivot).perp() * self.angular_velocity
    }

    /// Offset of the paddle body centre from the pivot in local space.
    pub fn local_center(&self) -> Vec2 {
        Vec2::new(self.length * 0.5, self.thickness * 0.5)
    }

    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.length.abs() * 0.5, self.thickness * 0.5)
    }
}

#[derive(Component, Clone, Copy, Debug)]
pub struct Bumper {
    pub radius: f32,
    pub restitution: f32,
    /// Outward speed added to a ball on contact.
    pub kick: f32,
    pub points: u32,
}

/// Short glow after a hit; ticks down in `PinballCorePlugin`.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct BumperFlash {
    pub remaining: f32,
}

impl BumperFlash {
    pub fn is_lit(&self) -> bool {
        self.remaining > 0.0
    }
}

/// Static capsule segment bounding the board.
#[derive(Component, Clone, Debug)]
pub struct Wall {
    pub start: Vec2,
    pub end: Vec2,
    pub radius: f32,
}

impl Wall {
    pub fn new(start: Vec2, end: Vec2, radius: f32) -> Self {
        Self { start, end, radius }
    }
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
    pub fn center(&self) -> Vec2 {
        (self.start + self.end) * 0.5
    }
    pub fn angle(&self) -> f32 {
        let d = self.end - self.start;
        d.y.atan2(d.x)
    }
}

/// Rotation about z of a 2D transform.
pub fn z_angle(rotation: Quat) -> f32 {
    let (z, _, _) = rotation.to_euler(EulerRot::ZYX);
    z
}
