//! pinball_core: foundational ECS types (components, resources, events, layout)
//! shared by the input, physics and rendering crates.

use bevy::prelude::*;

pub mod bundles;
pub mod components;
pub mod events;
pub mod layout;
pub mod resources;
pub mod system_order;

pub use bundles::*;
pub use components::*;
pub use events::*;
pub use layout::*;
pub use resources::*;
pub use system_order::TableSet;

const LOG_TARGET: &str = "pinball_core";

pub struct PinballCorePlugin;
impl Plugin for PinballCorePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SpawnBallRequest>()
            .add_event::<BallSpawned>()
            .add_event::<BallDrained>()
            .add_event::<BumperHit>()
            .add_event::<ResetTable>()
            .add_event::<TogglePause>()
            .init_resource::<Score>()
            .init_resource::<Paused>()
            .init_resource::<TableLayout>()
            .init_resource::<BumperFlashDuration>()
            .configure_sets(
                Update,
                (
                    TableSet::Controls,
                    TableSet::Commands,
                    TableSet::Contacts,
                    TableSet::Cleanup,
                    TableSet::Tally,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (tally_score, count_ball_lifecycle, tick_bumper_flash)
                    .chain()
                    .in_set(TableSet::Tally),
            );
    }
}

/// Adds every bumper hit to the score. One event, one increment.
pub fn tally_score(
    mut hits: EventReader<BumperHit>,
    mut score: ResMut<Score>,
    duration: Res<BumperFlashDuration>,
    mut flashes: Query<&mut BumperFlash>,
) {
    for hit in hits.read() {
        score.add_hit(hit.points);
        if let Ok(mut flash) = flashes.get_mut(hit.bumper) {
            flash.remaining = duration.0;
        }
        debug!(target: LOG_TARGET, "bumper {:?} hit by {:?} (+{}) score={}", hit.bumper, hit.ball, hit.points, score.points);
    }
}

fn count_ball_lifecycle(
    mut spawned: EventReader<BallSpawned>,
    mut drained: EventReader<BallDrained>,
    mut score: ResMut<Score>,
) {
    let launched = spawned.read().count() as u32;
    let lost = drained.read().count() as u32;
    if launched > 0 || lost > 0 {
        score.balls_launched += launched;
        score.balls_drained += lost;
    }
}

fn tick_bumper_flash(time: Res<Time>, mut flashes: Query<&mut BumperFlash>) {
    let dt = time.delta_secs();
    for mut flash in &mut flashes {
        if flash.remaining > 0.0 {
            flash.remaining = (flash.remaining - dt).max(0.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins).add_plugins(PinballCorePlugin);
        app
    }

    #[test]
    fn score_counts_each_hit_once() {
        let mut app = app();
        let bumper = app
            .world_mut()
            .spawn(BumperBundle::new(
                Vec2::new(300.0, 500.0),
                Bumper { radius: 25.0, restitution: 0.9, kick: 300.0, points: 10 },
            ))
            .id();
        let ball = app.world_mut().spawn(BallBundle::new(Vec2::ZERO, 13.0, 1.0)).id();
        app.world_mut().send_event(BumperHit { bumper, ball, points: 10 });
        app.update();
        app.update();
        let score = app.world().resource::<Score>();
        assert_eq!(score.points, 10);
        assert_eq!(score.bumper_hits, 1);
        let flash = app.world().get::<BumperFlash>(bumper).unwrap();
        assert!(flash.is_lit());
    }

    #[test]
    fn lifecycle_counters() {
        let mut app = app();
        let ball = app.world_mut().spawn_empty().id();
        app.world_mut().send_event(BallSpawned(ball));
        app.world_mut().send_event(BallSpawned(ball));
        app.world_mut().send_event(BallDrained(ball));
        app.update();
        let score = app.world().resource::<Score>();
        assert_eq!(score.balls_launched, 2);
        assert_eq!(score.balls_drained, 1);
        assert_eq!(score.points, 0);
    }

    #[test]
    fn score_reset_zeroes_everything() {
        let mut score = Score::default();
        score.add_hit(10);
        score.add_hit(25);
        assert_eq!(score.points, 35);
        score.reset();
        assert_eq!(score, Score::default());
    }
}
