use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;
use pinball_core::{Ball, Bumper, BumperFlash, Paddle, Wall};

use crate::TableMaterials;

const WALL_Z: f32 = 0.1;
const PADDLE_Z: f32 = 0.2;
const BUMPER_Z: f32 = 0.3;
const BALL_Z: f32 = 1.0;

/// Child mesh of a bumper; swaps material while the bumper is lit.
#[derive(Component, Debug, Clone, Copy)]
pub struct BumperVisual {
    pub bumper: Entity,
}

/// Ball meshes keyed by radius bits so every ball of one size shares a mesh.
#[derive(Resource, Default)]
pub struct BallMeshes(Vec<(u32, Handle<Mesh>)>);

impl BallMeshes {
    fn get_or_add(&mut self, radius: f32, meshes: &mut Assets<Mesh>) -> Handle<Mesh> {
        let key = radius.to_bits();
        if let Some((_, h)) = self.0.iter().find(|(k, _)| *k == key) {
            return h.clone();
        }
        let h = meshes.add(Circle::new(radius));
        self.0.push((key, h.clone()));
        h
    }
}

/// Local transform of a wall capsule mesh. `Capsule2d` is vertical, so it is
/// turned a quarter less than the segment angle.
pub fn wall_mesh_transform(wall: &Wall, z: f32) -> Transform {
    Transform::from_translation(wall.center().extend(z))
        .with_rotation(Quat::from_rotation_z(wall.angle() - FRAC_PI_2))
}

/// Physics entities carry no `Visibility`; attaching adds one so the mesh
/// child inherits it.
pub fn attach_ball_visuals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut cache: ResMut<BallMeshes>,
    materials: Res<TableMaterials>,
    balls: Query<(Entity, &Ball), Added<Ball>>,
) {
    for (entity, ball) in &balls {
        let mesh = cache.get_or_add(ball.radius, &mut meshes);
        commands.entity(entity).insert(Visibility::default()).with_child((
            Mesh2d(mesh),
            MeshMaterial2d(materials.ball.clone()),
            Transform::from_xyz(0.0, 0.0, BALL_Z),
        ));
    }
}

pub fn attach_bumper_visuals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    materials: Res<TableMaterials>,
    bumpers: Query<(Entity, &Bumper), Added<Bumper>>,
) {
    for (entity, bumper) in &bumpers {
        commands.entity(entity).insert(Visibility::default()).with_child((
            BumperVisual { bumper: entity },
            Mesh2d(meshes.add(Circle::new(bumper.radius))),
            MeshMaterial2d(materials.bumper.clone()),
            Transform::from_xyz(0.0, 0.0, BUMPER_Z),
        ));
    }
}

pub fn attach_paddle_visuals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    materials: Res<TableMaterials>,
    paddles: Query<(Entity, &Paddle), Added<Paddle>>,
) {
    for (entity, paddle) in &paddles {
        let size = paddle.half_extents() * 2.0;
        commands.entity(entity).insert(Visibility::default()).with_child((
            Mesh2d(meshes.add(Rectangle::new(size.x, size.y))),
            MeshMaterial2d(materials.paddle.clone()),
            Transform::from_translation(paddle.local_center().extend(PADDLE_Z)),
        ));
    }
}

pub fn attach_wall_visuals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    materials: Res<TableMaterials>,
    walls: Query<(Entity, &Wall), Added<Wall>>,
) {
    for (entity, wall) in &walls {
        commands.entity(entity).insert(Visibility::default()).with_child((
            Mesh2d(meshes.add(Capsule2d::new(wall.radius, wall.length()))),
            MeshMaterial2d(materials.wall.clone()),
            wall_mesh_transform(wall, WALL_Z),
        ));
    }
}

/// Lit bumpers use the glow material until their flash runs out.
pub fn update_bumper_glow(
    materials: Res<TableMaterials>,
    flashes: Query<&BumperFlash>,
    mut visuals: Query<(&BumperVisual, &mut MeshMaterial2d<ColorMaterial>)>,
) {
    for (visual, mut material) in &mut visuals {
        let Ok(flash) = flashes.get(visual.bumper) else {
            continue;
        };
        let wanted = if flash.is_lit() {
            &materials.bumper_lit
        } else {
            &materials.bumper
        };
        if material.0 != *wanted {
            material.0 = wanted.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_wall_needs_no_turn() {
        let wall = Wall::new(Vec2::new(50.0, 160.0), Vec2::new(50.0, 800.0), 5.0);
        let tf = wall_mesh_transform(&wall, WALL_Z);
        assert_eq!(tf.translation, Vec3::new(50.0, 480.0, WALL_Z));
        assert!(pinball_core::z_angle(tf.rotation).abs() < 1e-5);
    }

    #[test]
    fn horizontal_wall_turns_a_quarter() {
        let wall = Wall::new(Vec2::new(50.0, 800.0), Vec2::new(550.0, 800.0), 5.0);
        let tf = wall_mesh_transform(&wall, WALL_Z);
        assert!((pinball_core::z_angle(tf.rotation) + FRAC_PI_2).abs() < 1e-5);
    }
}
