//! Mesh builders for everything static in the meadow.
//!
//! All geometry is primitive placeholder shapes; builders return the root
//! entity so callers can attach domain components (Flower, ShopBuilding,
//! PlacedItem) without this module knowing about them.

use bevy::prelude::*;
use rand::Rng;

use crate::shared::*;

// ─── Palette ─────────────────────────────────────────────────────────────────

const GROUND_COLOR: Color = Color::srgb(0.56, 0.93, 0.56);
const TRUNK_COLOR: Color = Color::srgb(0.55, 0.27, 0.07);
const LEAVES_COLOR: Color = Color::srgb(0.13, 0.55, 0.13);
const ROCK_COLOR: Color = Color::srgb(0.5, 0.5, 0.5);
const STEM_COLOR: Color = Color::srgb(0.13, 0.55, 0.13);
const FLOWER_CENTER_COLOR: Color = Color::srgb(1.0, 0.84, 0.0);
const SHOP_WALL_COLOR: Color = Color::srgb(1.0, 0.84, 0.0);
const SHOP_ROOF_COLOR: Color = Color::srgb(0.55, 0.0, 0.0);
const WOOD_COLOR: Color = Color::srgb(0.55, 0.27, 0.07);
const WOOD_DARK_COLOR: Color = Color::srgb(0.40, 0.26, 0.13);
const POND_BED_COLOR: Color = Color::srgb(0.18, 0.31, 0.56);
const WATER_COLOR: Color = Color::srgba(0.25, 0.41, 0.88, 0.7);

pub const FLOWER_PALETTE: [(&str, (f32, f32, f32)); 4] = [
    ("Pink", (1.0, 0.41, 0.71)),
    ("Light Pink", (1.0, 0.71, 0.76)),
    ("Gold", (1.0, 0.84, 0.0)),
    ("Tomato", (1.0, 0.39, 0.28)),
];

pub fn random_flower_color(rng: &mut impl Rng) -> (&'static str, (f32, f32, f32)) {
    FLOWER_PALETTE[rng.gen_range(0..FLOWER_PALETTE.len())]
}

// ─── Builders ────────────────────────────────────────────────────────────────

pub fn spawn_ground(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(50.0, 50.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: GROUND_COLOR,
            perceptual_roughness: 0.8,
            metallic: 0.2,
            ..default()
        })),
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));
}

pub fn spawn_tree(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    position: Vec3,
) -> Entity {
    let trunk = materials.add(StandardMaterial {
        base_color: TRUNK_COLOR,
        ..default()
    });
    let leaves = materials.add(StandardMaterial {
        base_color: LEAVES_COLOR,
        ..default()
    });

    commands
        .spawn((Transform::from_translation(position), Visibility::default()))
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(meshes.add(Cylinder::new(0.35, 2.0))),
                MeshMaterial3d(trunk),
                Transform::from_xyz(0.0, 1.0, 0.0),
            ));
            parent.spawn((
                Mesh3d(meshes.add(Sphere::new(1.5))),
                MeshMaterial3d(leaves.clone()),
                Transform::from_xyz(0.0, 2.5, 0.0),
            ));
            parent.spawn((
                Mesh3d(meshes.add(Sphere::new(1.2))),
                MeshMaterial3d(leaves),
                Transform::from_xyz(0.0, 3.5, 0.0),
            ));
        })
        .id()
}

pub fn spawn_rock(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    position: Vec3,
) -> Entity {
    commands
        .spawn((
            Mesh3d(meshes.add(Sphere::new(0.5))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: ROCK_COLOR,
                perceptual_roughness: 0.9,
                ..default()
            })),
            Transform::from_translation(position + Vec3::Y * 0.5),
        ))
        .id()
}

/// Stem, five petals in a ring, and a golden center. Used for flowers in
/// the meadow and for flowers placed back out of the inventory.
pub fn spawn_flower(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    position: Vec3,
    tint: (f32, f32, f32),
) -> Entity {
    let stem = materials.add(StandardMaterial {
        base_color: STEM_COLOR,
        ..default()
    });
    let petal = materials.add(StandardMaterial {
        base_color: Color::srgb(tint.0, tint.1, tint.2),
        ..default()
    });
    let center = materials.add(StandardMaterial {
        base_color: FLOWER_CENTER_COLOR,
        ..default()
    });

    commands
        .spawn((Transform::from_translation(position), Visibility::default()))
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(meshes.add(Cylinder::new(0.05, 0.3))),
                MeshMaterial3d(stem),
                Transform::from_xyz(0.0, 0.15, 0.0),
            ));
            for i in 0..5 {
                let angle = (i as f32 / 5.0) * std::f32::consts::TAU;
                parent.spawn((
                    Mesh3d(meshes.add(Sphere::new(0.15))),
                    MeshMaterial3d(petal.clone()),
                    Transform::from_xyz(angle.cos() * 0.2, 0.3, angle.sin() * 0.2),
                ));
            }
            parent.spawn((
                Mesh3d(meshes.add(Sphere::new(0.1))),
                MeshMaterial3d(center),
                Transform::from_xyz(0.0, 0.3, 0.0),
            ));
        })
        .id()
}

pub fn spawn_shop(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    position: Vec3,
) -> Entity {
    let base = materials.add(StandardMaterial {
        base_color: WOOD_COLOR,
        ..default()
    });
    let wall = materials.add(StandardMaterial {
        base_color: SHOP_WALL_COLOR,
        ..default()
    });
    let roof = materials.add(StandardMaterial {
        base_color: SHOP_ROOF_COLOR,
        ..default()
    });
    let sign = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        ..default()
    });

    commands
        .spawn((Transform::from_translation(position), Visibility::default()))
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(meshes.add(Cuboid::new(3.0, 0.2, 3.0))),
                MeshMaterial3d(base),
                Transform::from_xyz(0.0, 0.1, 0.0),
            ));
            // Four walls around the base.
            for (w, d, x, z) in [
                (3.0, 0.2, 0.0, 1.4),
                (3.0, 0.2, 0.0, -1.4),
                (0.2, 3.0, -1.4, 0.0),
                (0.2, 3.0, 1.4, 0.0),
            ] {
                parent.spawn((
                    Mesh3d(meshes.add(Cuboid::new(w, 2.0, d))),
                    MeshMaterial3d(wall.clone()),
                    Transform::from_xyz(x, 1.1, z),
                ));
            }
            parent.spawn((
                Mesh3d(meshes.add(Cone {
                    radius: 2.5,
                    height: 1.5,
                })),
                MeshMaterial3d(roof),
                Transform::from_xyz(0.0, 2.5, 0.0)
                    .with_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_4)),
            ));
            parent.spawn((
                Mesh3d(meshes.add(Cuboid::new(1.0, 0.3, 0.1))),
                MeshMaterial3d(sign),
                Transform::from_xyz(0.0, 2.2, 1.5),
            ));
        })
        .id()
}

pub fn spawn_pond(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    center: Vec3,
    radius: f32,
) -> Entity {
    let bed = materials.add(StandardMaterial {
        base_color: POND_BED_COLOR,
        perceptual_roughness: 0.1,
        metallic: 0.3,
        ..default()
    });
    let water = materials.add(StandardMaterial {
        base_color: WATER_COLOR,
        alpha_mode: AlphaMode::Blend,
        perceptual_roughness: 0.1,
        metallic: 0.5,
        ..default()
    });

    commands
        .spawn((Transform::from_translation(center), Visibility::default()))
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(meshes.add(Cylinder::new(radius, 0.5))),
                MeshMaterial3d(bed),
                Transform::from_xyz(0.0, 0.25, 0.0),
            ));
            parent.spawn((
                Mesh3d(meshes.add(Circle::new(radius))),
                MeshMaterial3d(water),
                Transform::from_xyz(0.0, WATER_SURFACE_Y, 0.0)
                    .with_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2)),
            ));
        })
        .id()
}

pub fn spawn_table(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    position: Vec3,
) -> Entity {
    let top = materials.add(StandardMaterial {
        base_color: WOOD_COLOR,
        ..default()
    });
    let leg = materials.add(StandardMaterial {
        base_color: WOOD_DARK_COLOR,
        ..default()
    });

    commands
        .spawn((Transform::from_translation(position), Visibility::default()))
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(meshes.add(Cuboid::new(1.5, 0.1, 1.5))),
                MeshMaterial3d(top),
                Transform::from_xyz(0.0, 0.75, 0.0),
            ));
            for (x, z) in [(-0.6, -0.6), (0.6, -0.6), (-0.6, 0.6), (0.6, 0.6)] {
                parent.spawn((
                    Mesh3d(meshes.add(Cylinder::new(0.05, 0.7))),
                    MeshMaterial3d(leg.clone()),
                    Transform::from_xyz(x, 0.35, z),
                ));
            }
        })
        .id()
}

pub fn spawn_chair(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    position: Vec3,
) -> Entity {
    let seat = materials.add(StandardMaterial {
        base_color: WOOD_COLOR,
        ..default()
    });
    let leg = materials.add(StandardMaterial {
        base_color: WOOD_DARK_COLOR,
        ..default()
    });

    commands
        .spawn((Transform::from_translation(position), Visibility::default()))
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(meshes.add(Cuboid::new(0.6, 0.1, 0.6))),
                MeshMaterial3d(seat.clone()),
                Transform::from_xyz(0.0, 0.5, 0.0),
            ));
            parent.spawn((
                Mesh3d(meshes.add(Cuboid::new(0.6, 0.6, 0.1))),
                MeshMaterial3d(seat),
                Transform::from_xyz(0.0, 0.8, -0.25),
            ));
            for (x, z) in [(-0.25, -0.25), (0.25, -0.25), (-0.25, 0.25), (0.25, 0.25)] {
                parent.spawn((
                    Mesh3d(meshes.add(Cylinder::new(0.03, 0.5))),
                    MeshMaterial3d(leg.clone()),
                    Transform::from_xyz(x, 0.25, z),
                ));
            }
        })
        .id()
}
