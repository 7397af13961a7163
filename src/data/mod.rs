//! Data layer — populates all registries at game startup.
//!
//! This plugin runs in OnEnter(GameState::Loading), fills every registry
//! (ItemRegistry, FishTable, ShopStock) from the hard-coded game-design data
//! defined in submodules, then transitions the game into GameState::Playing.
//!
//! No other domain needs to seed these resources.

mod fish;
mod items;
pub mod settings;
mod shops;

use bevy::prelude::*;
use crate::shared::*;

pub use settings::GameSettings;

pub struct DataPlugin;

impl Plugin for DataPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Loading), load_all_data);
    }
}

/// Single system that populates every registry and then starts the game.
fn load_all_data(
    mut item_registry: ResMut<ItemRegistry>,
    mut fish_table: ResMut<FishTable>,
    mut shop_stock: ResMut<ShopStock>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    info!("DataPlugin: populating registries…");

    items::populate_items(&mut item_registry);
    info!("  Items loaded: {}", item_registry.items.len());

    fish::populate_fish(&mut fish_table);
    info!("  Fish species loaded: {}", fish_table.species.len());

    shops::populate_shop(&mut shop_stock);
    info!("  Shop listings loaded: {}", shop_stock.listings.len());

    info!("DataPlugin: all registries populated. Starting.");
    next_state.set(GameState::Playing);
}
