use bevy::prelude::*;
use pinball_core::Vec2Def;
use serde::Deserialize;

/// Physics tuning, read from the `physics` config section.
#[derive(Resource, Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    pub pixels_per_meter: f32,
    /// Pixels / s^2; y-up, so falling is negative.
    pub gravity: Vec2Def,
    /// Upper bound on ticks per second; one tick never integrates more than `1 / fps`.
    pub fps: f32,
    pub substeps: usize,
    /// Spring gain pulling a paddle toward its target angle (1/s).
    pub paddle_stiffness: f32,
    /// Rad/s cap on paddle swing.
    pub paddle_max_speed: f32,
    /// Fraction of the paddle surface velocity added to a ball on contact.
    pub flip_boost: f32,
    /// Paddles slower than this (rad/s) only deflect passively.
    pub flip_min_speed: f32,
    pub ccd: bool,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            pixels_per_meter: 50.0,
            gravity: Vec2Def::new(0.0, -900.0),
            fps: 60.0,
            substeps: 5,
            paddle_stiffness: 25.0,
            paddle_max_speed: 20.0,
            flip_boost: 0.35,
            flip_min_speed: 1.0,
            ccd: true,
        }
    }
}

impl PhysicsConfig {
    pub fn gravity(&self) -> Vec2 {
        self.gravity.into()
    }

    /// Longest step a single tick may integrate.
    pub fn max_dt(&self) -> f32 {
        if self.fps > 0.0 {
            1.0 / self.fps
        } else {
            1.0 / 60.0
        }
    }

    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.pixels_per_meter <= 0.0 {
            w.push(format!("pixels_per_meter {} must be > 0", self.pixels_per_meter));
        }
        if self.gravity.y > 0.0 {
            w.push(format!(
                "gravity.y {} is positive; balls will fall upward",
                self.gravity.y
            ));
        }
        if self.fps <= 0.0 {
            w.push(format!("fps {} must be > 0 (using 60)", self.fps));
        }
        if self.substeps == 0 {
            w.push("substeps is 0; physics will not advance".into());
        }
        if self.paddle_stiffness <= 0.0 {
            w.push(format!(
                "paddle_stiffness {} must be > 0 or paddles never move",
                self.paddle_stiffness
            ));
        } else if self.paddle_stiffness * self.max_dt() > 1.0 {
            w.push(format!(
                "paddle_stiffness {} exceeds fps {}; the swing is clamped every tick",
                self.paddle_stiffness, self.fps
            ));
        }
        if self.paddle_max_speed <= 0.0 {
            w.push(format!("paddle_max_speed {} must be > 0", self.paddle_max_speed));
        }
        if self.flip_boost < 0.0 {
            w.push(format!("flip_boost {} is negative", self.flip_boost));
        }
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_clean() {
        let cfg = PhysicsConfig::default();
        assert!(cfg.validate().is_empty(), "{:?}", cfg.validate());
        assert!((cfg.max_dt() - 1.0 / 60.0).abs() < 1e-6);
        assert_eq!(cfg.gravity(), Vec2::new(0.0, -900.0));
    }

    #[test]
    fn suspicious_values_warn() {
        let cfg: PhysicsConfig =
            ron::from_str("(gravity: (x: 0.0, y: 400.0), substeps: 0, paddle_stiffness: 120.0)")
                .expect("parse physics");
        let w = cfg.validate();
        assert_eq!(w.len(), 3, "{w:?}");
        assert_eq!(cfg.fps, 60.0);
    }
}
