use bevy::prelude::*;
#[cfg(feature = "debug")]
use pinball_core::{Ball, Paused, Score};

#[cfg(feature = "debug")]
use crate::LOG_TARGET;

/// Accumulator for the periodic stats line.
#[derive(Resource, Debug, Clone)]
pub struct StatsLog {
    pub interval: f32,
    pub elapsed: f32,
    pub frames: u64,
}

impl StatsLog {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            elapsed: 0.0,
            frames: 0,
        }
    }
}

#[cfg(feature = "debug")]
pub fn log_table_stats(
    time: Res<Time>,
    mut log: ResMut<StatsLog>,
    score: Res<Score>,
    paused: Res<Paused>,
    balls: Query<(), With<Ball>>,
) {
    log.frames += 1;
    if log.interval <= 0.0 {
        return;
    }
    log.elapsed += time.delta_secs();
    if log.elapsed < log.interval {
        return;
    }
    log.elapsed = 0.0;
    info!(
        target: LOG_TARGET,
        "TABLE frame={} t={:.1}s balls={} score={} hits={} launched={} drained={} paused={}",
        log.frames,
        time.elapsed_secs(),
        balls.iter().count(),
        score.points,
        score.bumper_hits,
        score.balls_launched,
        score.balls_drained,
        paused.0
    );
}
