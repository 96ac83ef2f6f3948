use bevy::prelude::*;

/// Ask the physics side to launch one ball.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct SpawnBallRequest;

#[derive(Event, Debug, Clone, Copy)]
pub struct BallSpawned(pub Entity);

#[derive(Event, Debug, Clone, Copy)]
pub struct BallDrained(pub Entity);

/// One per started ball/bumper contact.
#[derive(Event, Debug, Clone, Copy)]
pub struct BumperHit {
    pub bumper: Entity,
    pub ball: Entity,
    pub points: u32,
}

/// Clear every ball and the score.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ResetTable;

/// Freeze or resume the physics pipeline.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct TogglePause;
