use bevy::prelude::*;

use crate::shared::*;

// ─── Plugin ─────────────────────────────────────────────────────────────────

pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InteractionTarget>().add_systems(
            Update,
            (scan_for_interactions, dispatch_interaction)
                .chain()
                .run_if(in_state(GameState::Playing)),
        );
    }
}

// ─── Resource ────────────────────────────────────────────────────────────────

/// What the player could interact with this frame. Placed items take priority
/// over flowers, which take priority over the shop.
#[derive(Resource, Debug, Default)]
pub struct InteractionTarget {
    pub placed_item: Option<Entity>,
    pub flower: Option<Entity>,
    pub near_shop: bool,
    /// Cached display name for the prompt.
    pub placed_item_name: Option<String>,
}

impl InteractionTarget {
    fn reset(&mut self) {
        self.placed_item = None;
        self.flower = None;
        self.near_shop = false;
        self.placed_item_name = None;
    }

    /// HUD prompt for whatever is closest, or None.
    pub fn prompt(&self) -> Option<String> {
        if self.placed_item.is_some() {
            let name = self.placed_item_name.as_deref().unwrap_or("item");
            Some(format!("Press E to pick up {}", name))
        } else if self.flower.is_some() {
            Some("Press E to pick up flower".to_string())
        } else if self.near_shop {
            Some("Press E to open shop".to_string())
        } else {
            None
        }
    }
}

// ─── Systems ─────────────────────────────────────────────────────────────────

/// Proximity scan, every frame. First match in each category wins; the
/// priority ordering (placed item, then flower, then shop) mirrors how
/// cluttered spots should resolve.
pub fn scan_for_interactions(
    player_query: Query<&Transform, With<Player>>,
    placed_query: Query<(Entity, &Transform, &PlacedItem), Without<Player>>,
    flower_query: Query<(Entity, &Transform), (With<Flower>, Without<Player>)>,
    shop_query: Query<&Transform, (With<ShopBuilding>, Without<Player>)>,
    mut target: ResMut<InteractionTarget>,
) {
    target.reset();

    let Ok(player) = player_query.get_single() else {
        return;
    };
    let player_pos = player.translation;

    for (entity, transform, placed) in placed_query.iter() {
        if player_pos.distance(transform.translation) < INTERACT_RANGE {
            target.placed_item = Some(entity);
            target.placed_item_name = Some(placed.item.name.clone());
            break;
        }
    }

    if target.placed_item.is_none() {
        for (entity, transform) in flower_query.iter() {
            if player_pos.distance(transform.translation) < INTERACT_RANGE {
                target.flower = Some(entity);
                break;
            }
        }
    }

    if let Ok(shop) = shop_query.get_single() {
        if player_pos.distance(shop.translation) < SHOP_INTERACT_RANGE {
            target.near_shop = true;
        }
    }
}

/// The E key acts on whatever the scan found.
pub fn dispatch_interaction(
    input: Res<PlayerInput>,
    target: Res<InteractionTarget>,
    placed_query: Query<&PlacedItem>,
    flower_query: Query<&Flower>,
    mut pickup_writer: EventWriter<ItemPickupEvent>,
    mut notifications: EventWriter<NotificationEvent>,
    mut next_state: ResMut<NextState<GameState>>,
    mut commands: Commands,
) {
    if !input.interact {
        return;
    }

    if let Some(entity) = target.placed_item {
        if let Ok(placed) = placed_query.get(entity) {
            pickup_writer.send(ItemPickupEvent {
                item: placed.item.clone(),
            });
            notifications.send(NotificationEvent::new(format!(
                "Picked up {}!",
                placed.item.name
            )));
            commands.entity(entity).despawn_recursive();
        }
        return;
    }

    if let Some(entity) = target.flower {
        if let Ok(flower) = flower_query.get(entity) {
            let item = OwnedItem {
                def_id: "flower".to_string(),
                name: format!("{} Flower", flower.color_name),
                sell_price: FLOWER_SELL_PRICE,
                tint: Some(flower.tint),
            };
            notifications.send(NotificationEvent::new(format!("Picked up {}!", item.name)));
            pickup_writer.send(ItemPickupEvent { item });
            commands.entity(entity).despawn_recursive();
        }
        return;
    }

    if target.near_shop {
        next_state.set(GameState::Shop);
        info!("[Interaction] Entering the shop.");
    }
}
