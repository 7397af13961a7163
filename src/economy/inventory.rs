//! Inventory bookkeeping: everything that enters the bag goes through
//! ItemPickupEvent so there is exactly one place items are added.

use bevy::prelude::*;
use crate::shared::*;

pub fn apply_item_pickups(
    mut pickup_events: EventReader<ItemPickupEvent>,
    mut inventory: ResMut<Inventory>,
) {
    for ev in pickup_events.read() {
        info!("[Economy] '{}' added to inventory.", ev.item.name);
        inventory.add(ev.item.clone());
    }
}
