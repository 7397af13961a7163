use bevy::prelude::*;

use crate::shared::*;

// ─── Sub-modules ────────────────────────────────────────────────────────────
pub mod furniture;
pub mod objects;

pub use furniture::*;
pub use objects::*;

// ─── Plugin ─────────────────────────────────────────────────────────────────

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_world).add_systems(
            Update,
            furniture::handle_place_item.run_if(in_state(GameState::Playing)),
        );
    }
}

/// Lays out the whole meadow: ground, trees, rocks, the shop, the pond, and
/// the first crop of flowers. Positions mirror a hand-placed scene rather
/// than procedural generation — this is a tiny world.
fn setup_world(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut rng = rand::thread_rng();

    objects::spawn_ground(&mut commands, &mut meshes, &mut materials);

    for (x, z) in [
        (-8.0, -8.0),
        (8.0, -8.0),
        (-8.0, 8.0),
        (8.0, 8.0),
        (0.0, -10.0),
        (0.0, 10.0),
    ] {
        objects::spawn_tree(&mut commands, &mut meshes, &mut materials, Vec3::new(x, 0.0, z));
    }

    objects::spawn_rock(&mut commands, &mut meshes, &mut materials, Vec3::new(-5.0, 0.0, 5.0));
    objects::spawn_rock(&mut commands, &mut meshes, &mut materials, Vec3::new(5.0, 0.0, -5.0));

    for (x, z) in [
        (-3.0, 3.0),
        (3.0, -3.0),
        (-2.0, 2.0),
        (2.0, -2.0),
        (-4.0, 4.0),
        (4.0, -4.0),
        (-1.0, 1.0),
        (1.0, -1.0),
    ] {
        let (color_name, tint) = objects::random_flower_color(&mut rng);
        let entity = objects::spawn_flower(
            &mut commands,
            &mut meshes,
            &mut materials,
            Vec3::new(x, 0.0, z),
            tint,
        );
        commands.entity(entity).insert(Flower { color_name, tint });
    }

    let shop = objects::spawn_shop(
        &mut commands,
        &mut meshes,
        &mut materials,
        Vec3::new(-10.0, 0.0, 0.0),
    );
    commands.entity(shop).insert(ShopBuilding);

    objects::spawn_pond(&mut commands, &mut meshes, &mut materials, POND_CENTER, POND_RADIUS);

    info!("[World] Meadow laid out.");
}
