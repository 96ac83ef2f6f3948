use bevy::prelude::*;
use pinball_core::TableLayout;

/// 2D camera centred on the board; the window matches the board size.
pub fn setup_camera(mut commands: Commands, layout: Res<TableLayout>) {
    commands.spawn((
        Name::new("TableCamera"),
        Camera2d,
        Transform::from_translation(layout.center().extend(0.0)),
    ));
}
