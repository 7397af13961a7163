//! Keeps one mesh entity per live fish in sync with the pond state.
//!
//! The pond's `Vec<FishEntity>` is the source of truth; meshes are spawned
//! for new fish, moved every frame, and despawned the same frame a fish
//! leaves the live set (caught or escaped).

use bevy::prelude::*;

use crate::shared::*;

/// Marks the root entity of one fish's mesh group.
#[derive(Component, Debug)]
pub struct FishMesh {
    pub fish_id: FishId,
}

const FISH_BODY_COLOR: Color = Color::srgb(0.12, 0.23, 0.54);

pub fn sync_fish_meshes(
    mut commands: Commands,
    pond: Res<PondState>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut mesh_query: Query<(Entity, &FishMesh, &mut Transform)>,
) {
    // Move existing meshes; despawn the ones whose fish is gone.
    let mut known: Vec<FishId> = Vec::new();
    for (entity, fish_mesh, mut transform) in mesh_query.iter_mut() {
        match pond.fish.iter().find(|f| f.id == fish_mesh.fish_id) {
            Some(f) => {
                transform.translation = f.position;
                transform.rotation = Quat::from_rotation_y(f.heading);
                known.push(f.id);
            }
            None => {
                commands.entity(entity).despawn_recursive();
            }
        }
    }

    // Spawn meshes for fish that don't have one yet.
    for f in pond.fish.iter().filter(|f| !known.contains(&f.id)) {
        let body_material = materials.add(StandardMaterial {
            base_color: FISH_BODY_COLOR,
            perceptual_roughness: 0.3,
            metallic: 0.2,
            emissive: LinearRgba::new(0.0, 0.0, 0.2, 1.0),
            ..default()
        });
        let tail_material = materials.add(StandardMaterial {
            base_color: FISH_BODY_COLOR,
            ..default()
        });

        commands
            .spawn((
                FishMesh { fish_id: f.id },
                Transform::from_translation(f.position)
                    .with_rotation(Quat::from_rotation_y(f.heading)),
                Visibility::default(),
            ))
            .with_children(|parent| {
                // Body: squashed sphere.
                parent.spawn((
                    Mesh3d(meshes.add(Sphere::new(0.25))),
                    MeshMaterial3d(body_material),
                    Transform::default().with_scale(Vec3::new(0.8, 0.6, 1.5)),
                ));
                // Tail: small cone behind the body.
                parent.spawn((
                    Mesh3d(meshes.add(Cone {
                        radius: 0.15,
                        height: 0.3,
                    })),
                    MeshMaterial3d(tail_material),
                    Transform::from_xyz(0.0, 0.0, -0.3)
                        .with_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2)),
                ));
            });
    }
}
