//! pinball_rendering: camera, flat mesh visuals for every table element,
//! bumper glow and the score HUD. Visuals attach to entities as they appear,
//! so physics and rules never touch meshes.

use bevy::prelude::*;
use bevy_rapier2d::render::RapierDebugRenderPlugin;
use pinball_core::TableSet;

mod camera;
mod hud;
mod palette;
mod visuals;

pub use camera::setup_camera;
pub use hud::{hud_text, spawn_score_hud, update_score_hud, ScoreHud};
pub use palette::{TableMaterials, TablePalette};
pub use visuals::{
    attach_ball_visuals, attach_bumper_visuals, attach_paddle_visuals, attach_wall_visuals,
    update_bumper_glow, wall_mesh_transform, BallMeshes, BumperVisual,
};

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub struct TableVisualsSet;

#[derive(Debug, Clone, Default)]
pub struct PinballRenderingPlugin {
    /// Overlay Rapier collider outlines.
    pub wireframe: bool,
}

impl PinballRenderingPlugin {
    pub fn with_wireframe(wireframe: bool) -> Self {
        Self { wireframe }
    }
}

impl Plugin for PinballRenderingPlugin {
    fn build(&self, app: &mut App) {
        let palette = app
            .world_mut()
            .get_resource_or_insert_with::<TablePalette>(TablePalette::default)
            .clone();

        app.insert_resource(ClearColor(palette.background))
            .init_resource::<BallMeshes>()
            .add_systems(
                Startup,
                (init_materials, setup_camera, spawn_score_hud),
            )
            .add_systems(
                Update,
                (
                    (
                        attach_wall_visuals,
                        attach_bumper_visuals,
                        attach_paddle_visuals,
                        attach_ball_visuals,
                    ),
                    update_bumper_glow,
                    update_score_hud,
                )
                    .chain()
                    .in_set(TableVisualsSet)
                    .after(TableSet::Tally),
            );

        if self.wireframe {
            app.add_plugins(RapierDebugRenderPlugin::default());
        }
    }
}

fn init_materials(
    mut commands: Commands,
    palette: Res<TablePalette>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands.insert_resource(TableMaterials::new(&palette, &mut materials));
}
