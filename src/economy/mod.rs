use bevy::prelude::*;

use crate::shared::*;

// ─── Sub-modules ────────────────────────────────────────────────────────────
pub mod inventory;
pub mod money;
pub mod shop;

pub use inventory::*;
pub use money::*;
pub use shop::*;

// ─── Plugin ─────────────────────────────────────────────────────────────────

pub struct EconomyPlugin;

impl Plugin for EconomyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EconomyStats>()
            .init_resource::<RecentlySold>()
            .add_event::<BuyRequestEvent>()
            .add_event::<SellRequestEvent>()
            .add_event::<RebuyRequestEvent>()
            // Bookkeeping runs in every state: pickups and money changes can
            // originate from gameplay, fishing, or the shop screens.
            .add_systems(
                Update,
                (money::apply_money_changes, inventory::apply_item_pickups),
            )
            .add_systems(
                Update,
                (shop::handle_buy, shop::handle_sell, shop::handle_rebuy)
                    .run_if(in_state(GameState::Shop)),
            );
    }
}
