use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use pinball_core::{Ball, Bumper, BumperHit, Paddle, TableElement};

use crate::{PhysicsConfig, LOG_TARGET};

/// A started contact sorted by what touched the ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableContact {
    BallBumper { ball: Entity, bumper: Entity },
    BallPaddle { ball: Entity, paddle: Entity },
}

/// Orders a pair by element tag. Pairs without exactly one ball, or with a
/// wall or second ball on the other side, yield `None`.
pub fn classify(
    (e1, k1): (Entity, TableElement),
    (e2, k2): (Entity, TableElement),
) -> Option<TableContact> {
    let (ball, other, kind) = match (k1, k2) {
        (TableElement::Ball, TableElement::Ball) => return None,
        (TableElement::Ball, kind) => (e1, e2, kind),
        (kind, TableElement::Ball) => (e2, e1, kind),
        _ => return None,
    };
    match kind {
        TableElement::Bumper => Some(TableContact::BallBumper { ball, bumper: other }),
        TableElement::Paddle(_) => Some(TableContact::BallPaddle { ball, paddle: other }),
        TableElement::Wall | TableElement::Ball => None,
    }
}

/// Reacts to contacts started during the last physics step. A bumper pushes
/// the ball straight away from its centre and scores; a swinging paddle adds
/// part of its surface velocity.
pub fn respond_to_contacts(
    mut collisions: EventReader<CollisionEvent>,
    cfg: Res<PhysicsConfig>,
    elements: Query<&TableElement>,
    mut balls: Query<(&Ball, &Transform, &mut ExternalImpulse)>,
    bumpers: Query<(&Bumper, &Transform)>,
    paddles: Query<&Paddle>,
    mut hits: EventWriter<BumperHit>,
) {
    for event in collisions.read() {
        let &CollisionEvent::Started(e1, e2, _) = event else {
            continue;
        };
        let (Ok(&k1), Ok(&k2)) = (elements.get(e1), elements.get(e2)) else {
            continue;
        };
        match classify((e1, k1), (e2, k2)) {
            Some(TableContact::BallBumper { ball, bumper }) => {
                let Ok((bumper_c, bumper_tf)) = bumpers.get(bumper) else {
                    continue;
                };
                let Ok((ball_c, ball_tf, mut impulse)) = balls.get_mut(ball) else {
                    continue;
                };
                let outward = (ball_tf.translation - bumper_tf.translation)
                    .truncate()
                    .normalize_or(Vec2::Y);
                impulse.impulse += outward * bumper_c.kick * ball_c.mass;
                hits.write(BumperHit {
                    bumper,
                    ball,
                    points: bumper_c.points,
                });
            }
            Some(TableContact::BallPaddle { ball, paddle }) => {
                let Ok(paddle_c) = paddles.get(paddle) else {
                    continue;
                };
                if !paddle_c.active || paddle_c.angular_velocity.abs() < cfg.flip_min_speed {
                    continue;
                }
                let Ok((ball_c, ball_tf, mut impulse)) = balls.get_mut(ball) else {
                    continue;
                };
                let surface = paddle_c.surface_velocity(ball_tf.translation.truncate());
                impulse.impulse += surface * cfg.flip_boost * ball_c.mass;
                debug!(target: LOG_TARGET, "{} paddle flipped {ball:?}", paddle_c.side.label());
            }
            None => {}
        }
    }
}
