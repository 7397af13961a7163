use bevy::prelude::*;
use crate::shared::*;

// ─────────────────────────────────────────────────────────────────────────────
// Resources
// ─────────────────────────────────────────────────────────────────────────────

/// Items the player sold recently. The shopkeeper holds on to the last
/// MAX_RECENTLY_SOLD of them, newest first, and sells them back at the price
/// they fetched.
#[derive(Resource, Debug, Clone, Default)]
pub struct RecentlySold {
    pub items: Vec<OwnedItem>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Events (internal — used to drive transactions from UI input)
// ─────────────────────────────────────────────────────────────────────────────

/// Fired by the shop screen when the player confirms a purchase.
#[derive(Event, Debug, Clone)]
pub struct BuyRequestEvent {
    pub stock_index: usize,
}

/// Fired by the shop screen when the player sells an inventory item.
#[derive(Event, Debug, Clone)]
pub struct SellRequestEvent {
    pub inventory_index: usize,
}

/// Fired by the shop screen to buy back a recently sold item.
#[derive(Event, Debug, Clone)]
pub struct RebuyRequestEvent {
    pub sold_index: usize,
}

// ─────────────────────────────────────────────────────────────────────────────
// Systems
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_buy(
    mut buy_events: EventReader<BuyRequestEvent>,
    stock: Res<ShopStock>,
    registry: Res<ItemRegistry>,
    wallet: Res<Wallet>,
    mut money_writer: EventWriter<MoneyChangeEvent>,
    mut pickup_writer: EventWriter<ItemPickupEvent>,
    mut notifications: EventWriter<NotificationEvent>,
) {
    for ev in buy_events.read() {
        let Some(listing) = stock.listings.get(ev.stock_index) else {
            warn!("[Economy] Buy failed — no stock index {}", ev.stock_index);
            continue;
        };
        let Some(def) = registry.get(&listing.item_id) else {
            warn!("[Economy] Buy failed — unknown item '{}'", listing.item_id);
            continue;
        };

        if wallet.bells < listing.price {
            notifications.send(NotificationEvent::new(format!(
                "Not enough bells! Need {} bells.",
                listing.price
            )));
            continue;
        }

        money_writer.send(MoneyChangeEvent {
            amount: -(listing.price as i32),
            reason: format!("Bought {}", def.name),
        });
        pickup_writer.send(ItemPickupEvent {
            item: OwnedItem {
                def_id: def.id.clone(),
                name: def.name.clone(),
                sell_price: resale_price(listing.price),
                tint: None,
            },
        });
        notifications.send(NotificationEvent::new(format!(
            "Bought {} for {} bells!",
            def.name, listing.price
        )));
        info!(
            "[Economy] Bought '{}' for {} bells.",
            def.name, listing.price
        );
    }
}

pub fn handle_sell(
    mut sell_events: EventReader<SellRequestEvent>,
    mut inventory: ResMut<Inventory>,
    mut recently_sold: ResMut<RecentlySold>,
    mut money_writer: EventWriter<MoneyChangeEvent>,
    mut notifications: EventWriter<NotificationEvent>,
) {
    for ev in sell_events.read() {
        let Some(item) = inventory.remove(ev.inventory_index) else {
            warn!(
                "[Economy] Sell failed — no inventory index {}",
                ev.inventory_index
            );
            continue;
        };

        money_writer.send(MoneyChangeEvent {
            amount: item.sell_price as i32,
            reason: format!("Sold {}", item.name),
        });
        notifications.send(NotificationEvent::new(format!(
            "Sold {} for {} bells!",
            item.name, item.sell_price
        )));
        info!("[Economy] Sold '{}' for {} bells.", item.name, item.sell_price);
        record_sale(&mut recently_sold.items, item);
    }
}

pub fn handle_rebuy(
    mut rebuy_events: EventReader<RebuyRequestEvent>,
    mut recently_sold: ResMut<RecentlySold>,
    wallet: Res<Wallet>,
    mut money_writer: EventWriter<MoneyChangeEvent>,
    mut pickup_writer: EventWriter<ItemPickupEvent>,
    mut notifications: EventWriter<NotificationEvent>,
) {
    for ev in rebuy_events.read() {
        let Some(item) = recently_sold.items.get(ev.sold_index) else {
            warn!("[Economy] Re-buy failed — no sold index {}", ev.sold_index);
            continue;
        };

        // Buying back costs exactly what the shop paid for it.
        if wallet.bells < item.sell_price {
            notifications.send(NotificationEvent::new(format!(
                "Not enough bells! Need {} bells.",
                item.sell_price
            )));
            continue;
        }

        let item = recently_sold.items.remove(ev.sold_index);
        money_writer.send(MoneyChangeEvent {
            amount: -(item.sell_price as i32),
            reason: format!("Bought back {}", item.name),
        });
        notifications.send(NotificationEvent::new(format!(
            "Bought back {} for {} bells!",
            item.name, item.sell_price
        )));
        info!(
            "[Economy] Bought back '{}' for {} bells.",
            item.name, item.sell_price
        );
        pickup_writer.send(ItemPickupEvent { item });
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Bought goods resell at half what they cost.
pub fn resale_price(buy_price: u32) -> u32 {
    buy_price / 2
}

/// Push a sale onto the buy-back shelf, newest first, keeping at most
/// MAX_RECENTLY_SOLD entries.
pub fn record_sale(shelf: &mut Vec<OwnedItem>, item: OwnedItem) {
    shelf.insert(0, item);
    shelf.truncate(MAX_RECENTLY_SOLD);
}
