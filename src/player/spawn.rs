//! Avatar, camera, and lighting setup.

use bevy::prelude::*;

use crate::shared::*;

pub fn spawn_player(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let body_material = materials.add(StandardMaterial {
        base_color: Color::srgb(1.0, 0.71, 0.76),
        ..default()
    });
    let head_material = materials.add(StandardMaterial {
        base_color: Color::srgb(1.0, 0.86, 0.67),
        ..default()
    });
    let eye_material = materials.add(StandardMaterial {
        base_color: Color::BLACK,
        ..default()
    });

    commands
        .spawn((
            Player,
            PlayerMovement::default(),
            Transform::from_xyz(0.0, PLAYER_HEIGHT, 0.0),
            Visibility::default(),
        ))
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(meshes.add(Capsule3d::new(0.3, 0.8))),
                MeshMaterial3d(body_material),
                Transform::from_xyz(0.0, 0.0, 0.0),
            ));
            parent.spawn((
                Mesh3d(meshes.add(Sphere::new(0.35))),
                MeshMaterial3d(head_material),
                Transform::from_xyz(0.0, 0.7, 0.0),
            ));
            // Eyes face +z, the forward direction at heading 0.
            for x in [-0.1, 0.1] {
                parent.spawn((
                    Mesh3d(meshes.add(Sphere::new(0.05))),
                    MeshMaterial3d(eye_material.clone()),
                    Transform::from_xyz(x, 0.75, 0.3),
                ));
            }
        });
}

pub fn spawn_camera_and_light(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(CAMERA_OFFSET).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
    });

    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(10.0, 20.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
