use bevy::prelude::*;

use crate::wave::WaveViewer;

#[derive(Component)]
pub struct MainCamera;

pub fn setup(mut commands: Commands) {
    // 1) Light
    commands.spawn((
        DirectionalLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(60.0, 120.0, 40.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // 2) Camera; the wave animator culls against this entity's position
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(-60.0, 45.0, 90.0).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
        WaveViewer,
    ));
}
