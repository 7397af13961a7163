use bevy::prelude::*;

use crate::shared::*;

// ─── Sub-modules ────────────────────────────────────────────────────────────
pub mod hud;
pub mod inventory_screen;
pub mod shop_screen;
pub mod toast;

pub use hud::*;
pub use inventory_screen::*;
pub use shop_screen::*;
pub use toast::*;

// ─── Plugin ─────────────────────────────────────────────────────────────────

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InventoryScreenState>()
            .init_resource::<ShopScreenState>()
            .add_systems(Startup, (hud::spawn_hud, toast::spawn_toast_container))
            .add_systems(
                Update,
                (
                    hud::update_bells_text,
                    hud::update_prompt_text,
                    toast::handle_notifications,
                    toast::update_toasts,
                ),
            )
            // I opens the bag while walking around
            .add_systems(
                Update,
                handle_open_inventory.run_if(in_state(GameState::Playing)),
            )
            // Inventory screen
            .add_systems(OnEnter(GameState::Inventory), inventory_screen::spawn_inventory_screen)
            .add_systems(OnExit(GameState::Inventory), inventory_screen::despawn_inventory_screen)
            .add_systems(
                Update,
                (
                    inventory_screen::navigate_inventory_screen,
                    inventory_screen::render_inventory_screen,
                )
                    .chain()
                    .run_if(in_state(GameState::Inventory)),
            )
            // Shop screen
            .add_systems(OnEnter(GameState::Shop), shop_screen::spawn_shop_screen)
            .add_systems(OnExit(GameState::Shop), shop_screen::despawn_shop_screen)
            .add_systems(
                Update,
                (
                    shop_screen::navigate_shop_screen,
                    shop_screen::render_shop_screen,
                )
                    .chain()
                    .run_if(in_state(GameState::Shop)),
            );
    }
}

fn handle_open_inventory(
    input: Res<PlayerInput>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if input.open_inventory {
        next_state.set(GameState::Inventory);
    }
}
