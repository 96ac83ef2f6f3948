use bevy::prelude::*;

/// Colours for every table element, drawn on a white background.
#[derive(Resource, Debug, Clone)]
pub struct TablePalette {
    pub background: Color,
    pub ball: Color,
    pub bumper: Color,
    pub bumper_lit: Color,
    pub paddle: Color,
    pub wall: Color,
    pub text: Color,
}

impl Default for TablePalette {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            ball: Color::srgb(0.15, 0.25, 0.65),
            bumper: Color::srgb(0.80, 0.20, 0.20),
            bumper_lit: Color::srgb(1.00, 0.85, 0.20),
            paddle: Color::srgb(0.25, 0.25, 0.28),
            wall: Color::srgb(0.45, 0.45, 0.50),
            text: Color::BLACK,
        }
    }
}

/// Shared material handles, one per palette entry.
#[derive(Resource, Debug, Clone)]
pub struct TableMaterials {
    pub ball: Handle<ColorMaterial>,
    pub bumper: Handle<ColorMaterial>,
    pub bumper_lit: Handle<ColorMaterial>,
    pub paddle: Handle<ColorMaterial>,
    pub wall: Handle<ColorMaterial>,
}

impl TableMaterials {
    pub fn new(palette: &TablePalette, materials: &mut Assets<ColorMaterial>) -> Self {
        Self {
            ball: materials.add(palette.ball),
            bumper: materials.add(palette.bumper),
            bumper_lit: materials.add(palette.bumper_lit),
            paddle: materials.add(palette.paddle),
            wall: materials.add(palette.wall),
        }
    }
}
