use bevy::prelude::*;

/// Process-wide scoreboard.
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct Score {
    pub points: u64,
    pub bumper_hits: u32,
    pub balls_launched: u32,
    pub balls_drained: u32,
}

impl Score {
    pub fn add_hit(&mut self, points: u32) {
        self.points += u64::from(points);
        self.bumper_hits += 1;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Mirrors the physics pipeline's active flag so systems without a
/// Rapier context (HUD, headless tests) can read it.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Paused(pub bool);

/// Seconds a bumper stays lit after a hit.
#[derive(Resource, Debug, Clone, Copy)]
pub struct BumperFlashDuration(pub f32);

impl Default for BumperFlashDuration {
    fn default() -> Self {
        Self(0.15)
    }
}
