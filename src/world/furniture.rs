//! Placing inventory items back into the world.
//!
//! The inventory screen emits PlaceItemEvent; this system takes the item out
//! of the inventory, spawns the matching meshes a couple of units in front
//! of the player, and tags the root with PlacedItem so the interaction
//! domain can hand it back later.

use bevy::prelude::*;

use crate::shared::*;
use super::objects;

pub fn handle_place_item(
    mut events: EventReader<PlaceItemEvent>,
    mut inventory: ResMut<Inventory>,
    player_query: Query<(&Transform, &PlayerMovement), With<Player>>,
    mut notifications: EventWriter<NotificationEvent>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for ev in events.read() {
        let Ok((transform, movement)) = player_query.get_single() else {
            continue;
        };

        let Some(item) = inventory.remove(ev.inventory_index) else {
            warn!(
                "[World] Place request for missing inventory index {}",
                ev.inventory_index
            );
            continue;
        };

        // Drop spot: fixed distance ahead of where the avatar faces.
        let position = Vec3::new(
            transform.translation.x + movement.heading.sin() * PLACE_DISTANCE,
            0.0,
            transform.translation.z + movement.heading.cos() * PLACE_DISTANCE,
        );

        let entity = match item.def_id.as_str() {
            "table" => objects::spawn_table(&mut commands, &mut meshes, &mut materials, position),
            "chair" => objects::spawn_chair(&mut commands, &mut meshes, &mut materials, position),
            "flower" => objects::spawn_flower(
                &mut commands,
                &mut meshes,
                &mut materials,
                position,
                item.tint.unwrap_or((1.0, 0.41, 0.71)),
            ),
            other => {
                // Not a placeable kind; put it back where it came from.
                warn!("[World] '{}' is not placeable.", other);
                inventory.add(item);
                continue;
            }
        };

        notifications.send(NotificationEvent::new(format!("Placed {}.", item.name)));
        info!(
            "[World] Placed '{}' at ({:.1}, {:.1}).",
            item.name, position.x, position.z
        );
        commands.entity(entity).insert(PlacedItem { item });
    }
}
