use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy_rapier2d::prelude::*;
use bevy_rapier2d::rapier::geometry::CollisionEventFlags;
use pinball_core::*;
use pinball_physics::*;

const TICK: f32 = 1.0 / 60.0;

fn test_app(layout: TableLayout) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f32(TICK)))
        .add_plugins((PinballCorePlugin, TableRulesPlugin))
        .insert_resource(layout);
    app.update();
    app
}

fn balls(app: &mut App) -> Vec<Entity> {
    let world = app.world_mut();
    let mut q = world.query_filtered::<Entity, With<Ball>>();
    q.iter(world).collect()
}

fn find(app: &mut App, kind: TableElement) -> Entity {
    let world = app.world_mut();
    let mut q = world.query::<(Entity, &TableElement)>();
    q.iter(world)
        .find(|(_, k)| **k == kind)
        .map(|(e, _)| e)
        .expect("element present")
}

fn spawn_one(app: &mut App) -> Entity {
    app.world_mut().send_event(SpawnBallRequest);
    app.update();
    *balls(app).last().expect("ball spawned")
}

fn contact(app: &mut App, a: Entity, b: Entity) {
    app.world_mut()
        .send_event(CollisionEvent::Started(a, b, CollisionEventFlags::empty()));
}

#[test]
fn spawn_then_drain() {
    let mut layout = TableLayout::default();
    layout.launch.velocity = Vec2Def::new(0.0, -120.0);
    let mut app = test_app(layout);

    let ball = spawn_one(&mut app);
    assert_eq!(balls(&mut app).len(), 1);
    let tf = app.world().get::<Transform>(ball).unwrap();
    assert_eq!(tf.translation.truncate(), Vec2::new(300.0, 750.0));
    let vel = app.world().get::<Velocity>(ball).unwrap();
    assert_eq!(vel.linvel, Vec2::new(0.0, -120.0));
    assert!(app.world().get::<Ccd>(ball).is_some());

    app.world_mut().get_mut::<Transform>(ball).unwrap().translation.y = -30.0;
    app.update();
    assert!(balls(&mut app).is_empty());
    let score = app.world().resource::<Score>();
    assert_eq!(score.balls_launched, 1);
    assert_eq!(score.balls_drained, 1);
}

#[test]
fn ball_on_the_drain_line_stays() {
    let mut app = test_app(TableLayout::default());
    let ball = spawn_one(&mut app);
    app.world_mut().get_mut::<Transform>(ball).unwrap().translation.y = -20.0;
    app.update();
    assert_eq!(balls(&mut app), vec![ball]);
}

#[test]
fn bumper_contact_scores_once_and_kicks_outward() {
    let mut app = test_app(TableLayout::default());
    let ball = spawn_one(&mut app);
    let bumper = find(&mut app, TableElement::Bumper);
    let bumper_pos = app.world().get::<Transform>(bumper).unwrap().translation;
    app.world_mut().get_mut::<Transform>(ball).unwrap().translation =
        bumper_pos + Vec3::new(0.0, 38.0, 0.0);

    contact(&mut app, bumper, ball);
    app.update();
    app.update();

    let score = app.world().resource::<Score>();
    assert_eq!(score.points, 10);
    assert_eq!(score.bumper_hits, 1);
    let impulse = app.world().get::<ExternalImpulse>(ball).unwrap();
    assert_eq!(impulse.impulse, Vec2::new(0.0, 350.0));
    assert!(app.world().get::<BumperFlash>(bumper).unwrap().is_lit());

    app.world_mut()
        .send_event(CollisionEvent::Stopped(bumper, ball, CollisionEventFlags::empty()));
    app.update();
    assert_eq!(app.world().resource::<Score>().points, 10);
}

#[test]
fn wall_contact_is_ignored() {
    let mut app = test_app(TableLayout::default());
    let ball = spawn_one(&mut app);
    let wall = find(&mut app, TableElement::Wall);
    contact(&mut app, ball, wall);
    app.update();
    assert_eq!(app.world().resource::<Score>().points, 0);
    let impulse = app.world().get::<ExternalImpulse>(ball).unwrap();
    assert_eq!(impulse.impulse, Vec2::ZERO);
}

#[test]
fn paddle_raises_then_returns_monotonically() {
    let mut app = test_app(TableLayout::default());
    let left = find(&mut app, TableElement::Paddle(PaddleSide::Left));
    let (rest, raised) = {
        let p = app.world().get::<Paddle>(left).unwrap();
        (p.rest_angle, p.raised_angle)
    };

    app.world_mut().get_mut::<Paddle>(left).unwrap().active = true;
    for _ in 0..30 {
        app.update();
    }
    let paddle = app.world().get::<Paddle>(left).unwrap();
    assert!((paddle.angle - raised).abs() < 1e-3, "angle {}", paddle.angle);
    let tf = app.world().get::<Transform>(left).unwrap();
    assert!((z_angle(tf.rotation) - paddle.angle).abs() < 1e-4);

    app.world_mut().get_mut::<Paddle>(left).unwrap().active = false;
    let mut last = app.world().get::<Paddle>(left).unwrap().angle;
    for _ in 0..60 {
        app.update();
        let angle = app.world().get::<Paddle>(left).unwrap().angle;
        assert!(angle <= last + 1e-6, "{angle} rose above {last}");
        assert!(angle >= rest - 1e-6, "{angle} overshot rest {rest}");
        last = angle;
    }
    assert!((last - rest).abs() < 1e-3, "settled at {last}");
}

#[test]
fn swinging_paddle_boosts_ball() {
    let mut app = test_app(TableLayout::default());
    let left = find(&mut app, TableElement::Paddle(PaddleSide::Left));
    app.world_mut().get_mut::<Paddle>(left).unwrap().active = true;
    app.update();

    let ball = spawn_one(&mut app);
    app.world_mut().get_mut::<Transform>(ball).unwrap().translation = Vec3::new(260.0, 60.0, 0.0);
    contact(&mut app, left, ball);
    app.update();

    let w = app.world().get::<Paddle>(left).unwrap().angular_velocity;
    assert!(w > 0.0);
    let impulse = app.world().get::<ExternalImpulse>(ball).unwrap().impulse;
    assert!(impulse.x.abs() < 1e-3, "{impulse}");
    assert!(impulse.y > 0.0, "{impulse}");
}

#[test]
fn resting_paddle_only_deflects_passively() {
    let mut app = test_app(TableLayout::default());
    let right = find(&mut app, TableElement::Paddle(PaddleSide::Right));
    let ball = spawn_one(&mut app);
    contact(&mut app, ball, right);
    app.update();
    let impulse = app.world().get::<ExternalImpulse>(ball).unwrap();
    assert_eq!(impulse.impulse, Vec2::ZERO);
}

#[test]
fn reset_clears_balls_and_score() {
    let mut app = test_app(TableLayout::default());
    let ball = spawn_one(&mut app);
    spawn_one(&mut app);
    let bumper = find(&mut app, TableElement::Bumper);
    contact(&mut app, ball, bumper);
    app.update();
    assert_eq!(app.world().resource::<Score>().points, 10);

    app.world_mut().send_event(ResetTable);
    app.update();
    assert!(balls(&mut app).is_empty());
    assert_eq!(app.world().resource::<Score>().points, 0);
    assert_eq!(find(&mut app, TableElement::Bumper), bumper);
}

#[test]
fn ball_cap_rejects_extra_spawns() {
    let layout = TableLayout {
        max_balls: 2,
        ..Default::default()
    };
    let mut app = test_app(layout);
    for _ in 0..3 {
        app.world_mut().send_event(SpawnBallRequest);
    }
    app.update();
    app.world_mut().send_event(SpawnBallRequest);
    app.update();
    assert_eq!(balls(&mut app).len(), 2);
    assert_eq!(app.world().resource::<Score>().balls_launched, 2);
}

#[test]
fn pause_freezes_paddles() {
    let mut app = test_app(TableLayout::default());
    let left = find(&mut app, TableElement::Paddle(PaddleSide::Left));
    app.world_mut().send_event(TogglePause);
    app.update();
    assert!(app.world().resource::<Paused>().0);

    let before = app.world().get::<Paddle>(left).unwrap().angle;
    app.world_mut().get_mut::<Paddle>(left).unwrap().active = true;
    for _ in 0..5 {
        app.update();
    }
    assert_eq!(app.world().get::<Paddle>(left).unwrap().angle, before);

    app.world_mut().send_event(TogglePause);
    app.update();
    app.update();
    assert!(!app.world().resource::<Paused>().0);
    assert!(app.world().get::<Paddle>(left).unwrap().angle > before);
}
