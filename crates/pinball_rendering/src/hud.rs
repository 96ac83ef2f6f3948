use bevy::prelude::*;
use bevy::sprite::Anchor;
use pinball_core::{Ball, Paused, Score, TableLayout};

use crate::TablePalette;

/// Marker for the score text.
#[derive(Component)]
pub struct ScoreHud;

pub fn hud_text(score: &Score, live_balls: usize, paused: bool) -> String {
    let mut text = format!(
        "Score {}   Hits {}   Balls {} ({} launched, {} lost)",
        score.points, score.bumper_hits, live_balls, score.balls_launched, score.balls_drained
    );
    if paused {
        text.push_str("   [PAUSED]");
    }
    text
}

pub fn spawn_score_hud(mut commands: Commands, layout: Res<TableLayout>, palette: Res<TablePalette>) {
    commands.spawn((
        Name::new("ScoreHUD"),
        ScoreHud,
        Text2d::new(hud_text(&Score::default(), 0, false)),
        TextFont {
            font_size: 18.0,
            ..Default::default()
        },
        TextColor(palette.text),
        Anchor::TopLeft,
        Transform::from_xyz(12.0, layout.height - 12.0, 10.0),
    ));
}

pub fn update_score_hud(
    score: Res<Score>,
    paused: Res<Paused>,
    balls: Query<(), With<Ball>>,
    mut text_q: Query<&mut Text2d, With<ScoreHud>>,
) {
    let Ok(mut text) = text_q.single_mut() else {
        return;
    };
    let next = hud_text(&score, balls.iter().count(), paused.0);
    if text.0 != next {
        text.0 = next;
    }
}
