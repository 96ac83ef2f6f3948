//! Table layout: board size, boundary segments, bumpers, paddles and the
//! ball launcher. Deserialized from the `table` section of the RON config;
//! every field falls back to the default 600x900 board.

use bevy::prelude::*;
use serde::Deserialize;
use std::f32::consts::{FRAC_PI_4, FRAC_PI_6};

use crate::{Paddle, PaddleSide};

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct Vec2Def {
    pub x: f32,
    pub y: f32,
}
impl Vec2Def {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
impl From<Vec2Def> for Vec2 {
    fn from(v: Vec2Def) -> Self {
        Vec2::new(v.x, v.y)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct WallDef {
    pub from: Vec2Def,
    pub to: Vec2Def,
    #[serde(default = "default_wall_radius")]
    pub radius: f32,
}

fn default_wall_radius() -> f32 {
    5.0
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BumperDef {
    pub position: Vec2Def,
    #[serde(default = "BumperDef::default_radius")]
    pub radius: f32,
    #[serde(default = "BumperDef::default_restitution")]
    pub restitution: f32,
    #[serde(default = "BumperDef::default_kick")]
    pub kick: f32,
    #[serde(default = "BumperDef::default_points")]
    pub points: u32,
}

impl BumperDef {
    fn default_radius() -> f32 {
        25.0
    }
    fn default_restitution() -> f32 {
        0.9
    }
    fn default_kick() -> f32 {
        350.0
    }
    fn default_points() -> u32 {
        10
    }

    fn at(x: f32, y: f32) -> Self {
        Self {
            position: Vec2Def::new(x, y),
            radius: Self::default_radius(),
            restitution: Self::default_restitution(),
            kick: Self::default_kick(),
            points: Self::default_points(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PaddleDef {
    pub side: PaddleSide,
    pub pivot: Vec2Def,
    /// Signed; negative extends to the left of the pivot.
    pub length: f32,
    pub thickness: f32,
    /// Radians, counter-clockwise.
    pub rest_angle: f32,
    pub raised_angle: f32,
}

impl PaddleDef {
    pub fn to_paddle(&self) -> Paddle {
        Paddle {
            side: self.side,
            pivot: self.pivot.into(),
            length: self.length,
            thickness: self.thickness,
            rest_angle: self.rest_angle,
            raised_angle: self.raised_angle,
            active: false,
            angle: self.rest_angle,
            angular_velocity: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LaunchDef {
    pub position: Vec2Def,
    pub velocity: Vec2Def,
    /// Half-width of a uniform random x offset. 0 keeps every launch identical.
    pub jitter_x: f32,
}

impl Default for LaunchDef {
    fn default() -> Self {
        Self {
            position: Vec2Def::new(300.0, 750.0),
            velocity: Vec2Def::new(0.0, 0.0),
            jitter_x: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BallDef {
    pub radius: f32,
    pub mass: f32,
    pub restitution: f32,
}

impl Default for BallDef {
    fn default() -> Self {
        Self {
            radius: 13.0,
            mass: 1.0,
            restitution: 0.4,
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct TableLayout {
    pub width: f32,
    pub height: f32,
    /// Balls below this y are drained.
    pub drain_y: f32,
    /// Balls further than this outside the side edges are drained.
    pub side_margin: f32,
    pub max_balls: usize,
    pub wall_restitution: f32,
    pub walls: Vec<WallDef>,
    pub bumpers: Vec<BumperDef>,
    pub paddles: Vec<PaddleDef>,
    pub launch: LaunchDef,
    pub ball: BallDef,
}

impl Default for TableLayout {
    fn default() -> Self {
        let seg = |ax: f32, ay: f32, bx: f32, by: f32| WallDef {
            from: Vec2Def::new(ax, ay),
            to: Vec2Def::new(bx, by),
            radius: default_wall_radius(),
        };
        Self {
            width: 600.0,
            height: 900.0,
            drain_y: -20.0,
            side_margin: 100.0,
            max_balls: 64,
            wall_restitution: 0.5,
            walls: vec![
                seg(50.0, 160.0, 190.0, 85.0),
                seg(550.0, 160.0, 410.0, 85.0),
                seg(50.0, 160.0, 50.0, 800.0),
                seg(550.0, 800.0, 550.0, 160.0),
                seg(50.0, 800.0, 550.0, 800.0),
            ],
            bumpers: vec![
                BumperDef::at(200.0, 520.0),
                BumperDef::at(400.0, 520.0),
                BumperDef::at(300.0, 640.0),
            ],
            paddles: vec![
                PaddleDef {
                    side: PaddleSide::Left,
                    pivot: Vec2Def::new(200.0, 60.0),
                    length: 80.0,
                    thickness: 20.0,
                    rest_angle: -FRAC_PI_6,
                    raised_angle: FRAC_PI_4,
                },
                PaddleDef {
                    side: PaddleSide::Right,
                    pivot: Vec2Def::new(400.0, 60.0),
                    length: -80.0,
                    thickness: 20.0,
                    rest_angle: FRAC_PI_6,
                    raised_angle: -FRAC_PI_4,
                },
            ],
            launch: LaunchDef::default(),
            ball: BallDef::default(),
        }
    }
}

impl TableLayout {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// True once a ball at `position` has left the play area.
    pub fn is_drained(&self, position: Vec2) -> bool {
        position.y < self.drain_y
            || position.x < -self.side_margin
            || position.x > self.width + self.side_margin
    }

    pub fn board_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Suspicious values; not hard errors.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.width <= 0.0 || self.height <= 0.0 {
            w.push(format!(
                "table size must be > 0 (got {}x{})",
                self.width, self.height
            ));
        }
        if self.ball.radius <= 0.0 {
            w.push(format!("ball.radius {} must be > 0", self.ball.radius));
        }
        if self.ball.mass <= 0.0 {
            w.push(format!("ball.mass {} must be > 0", self.ball.mass));
        }
        if self.max_balls == 0 {
            w.push("max_balls is 0; spawning is disabled".into());
        }
        let board = self.board_rect();
        let launch: Vec2 = self.launch.position.into();
        if !board.contains(launch) {
            w.push(format!("launch position {launch} lies outside the board"));
        }
        if self.is_drained(launch) {
            w.push(format!("launch position {launch} is already drained"));
        }
        for (i, b) in self.bumpers.iter().enumerate() {
            let p: Vec2 = b.position.into();
            if !board.contains(p) {
                w.push(format!("bumper #{i} at {p} lies outside the board"));
            }
            if b.radius <= 0.0 {
                w.push(format!("bumper #{i} radius {} must be > 0", b.radius));
            }
        }
        for side in PaddleSide::ALL {
            let count = self.paddles.iter().filter(|p| p.side == side).count();
            if count != 1 {
                w.push(format!("expected exactly one {} paddle, found {count}", side.label()));
            }
        }
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_is_clean() {
        let layout = TableLayout::default();
        assert!(layout.validate().is_empty(), "{:?}", layout.validate());
        assert_eq!(layout.walls.len(), 5);
        assert_eq!(layout.paddles.len(), 2);
    }

    #[test]
    fn drain_bounds() {
        let layout = TableLayout::default();
        assert!(!layout.is_drained(Vec2::new(300.0, 750.0)));
        assert!(!layout.is_drained(Vec2::new(300.0, -19.0)));
        assert!(layout.is_drained(Vec2::new(300.0, -21.0)));
        assert!(layout.is_drained(Vec2::new(-150.0, 400.0)));
        assert!(layout.is_drained(Vec2::new(750.0, 400.0)));
    }

    #[test]
    fn partial_ron_keeps_defaults() {
        let layout: TableLayout = ron::from_str(
            "(drain_y: -40.0, launch: (velocity: (x: 0.0, y: -120.0)), bumpers: [(position: (x: 300.0, y: 500.0), points: 25)])",
        )
        .expect("parse layout");
        assert_eq!(layout.drain_y, -40.0);
        assert_eq!(layout.launch.velocity, Vec2Def::new(0.0, -120.0));
        assert_eq!(layout.launch.position, Vec2Def::new(300.0, 750.0));
        assert_eq!(layout.bumpers.len(), 1);
        assert_eq!(layout.bumpers[0].points, 25);
        assert_eq!(layout.bumpers[0].radius, 25.0);
        assert_eq!(layout.walls.len(), 5);
    }

    #[test]
    fn missing_paddle_is_reported() {
        let mut layout = TableLayout::default();
        layout.paddles.retain(|p| p.side == PaddleSide::Left);
        let warnings = layout.validate();
        assert!(warnings.iter().any(|w| w.contains("right paddle")), "{warnings:?}");
    }
}
