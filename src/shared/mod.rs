//! Shared components, resources, events, and states for Bellbrook.
//!
//! This is the type contract. Every domain plugin imports from here.
//! No domain imports from any other domain directly.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ═══════════════════════════════════════════════════════════════════════
// GAME STATE — top-level state machine
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, States, Default)]
pub enum GameState {
    #[default]
    Loading,
    Playing,
    /// Rod is cast; the player stands at the pond until the session resolves.
    Fishing,
    Inventory,
    Shop,
}

// ═══════════════════════════════════════════════════════════════════════
// INPUT
// ═══════════════════════════════════════════════════════════════════════

/// Which set of key mappings is live, derived from GameState each frame.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputContext {
    #[default]
    Disabled,
    Gameplay,
    Menu,
    /// Session active: movement is off, only the strike/cancel keys work.
    Fishing,
}

/// The single frame-scoped view of player intent. Written once per frame by
/// the input domain, read by everyone else.
#[derive(Resource, Debug, Clone, Default)]
pub struct PlayerInput {
    pub move_axis: Vec2,
    pub interact: bool,
    /// Cast or strike, depending on session state.
    pub fish_action: bool,
    pub open_inventory: bool,
    pub export_journal: bool,
    pub ui_up: bool,
    pub ui_down: bool,
    pub ui_confirm: bool,
    pub ui_cancel: bool,
    pub tab_pressed: bool,
}

#[derive(Resource, Debug, Clone)]
pub struct KeyBindings {
    pub move_up: KeyCode,
    pub move_down: KeyCode,
    pub move_left: KeyCode,
    pub move_right: KeyCode,
    pub interact: KeyCode,
    pub fish_action: KeyCode,
    pub open_inventory: KeyCode,
    pub ui_confirm: KeyCode,
    pub ui_cancel: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            move_up: KeyCode::KeyW,
            move_down: KeyCode::KeyS,
            move_left: KeyCode::KeyA,
            move_right: KeyCode::KeyD,
            interact: KeyCode::KeyE,
            fish_action: KeyCode::KeyF,
            open_inventory: KeyCode::KeyI,
            ui_confirm: KeyCode::Enter,
            ui_cancel: KeyCode::Escape,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// PLAYER
// ═══════════════════════════════════════════════════════════════════════

#[derive(Component, Debug, Clone, Default)]
pub struct Player;

/// Movement state for the avatar. `heading` is the facing angle in radians,
/// with forward = (sin h, 0, cos h) on the ground plane.
#[derive(Component, Debug, Clone)]
pub struct PlayerMovement {
    pub heading: f32,
    pub is_moving: bool,
    pub speed: f32,
}

impl Default for PlayerMovement {
    fn default() -> Self {
        Self {
            heading: 0.0,
            is_moving: false,
            speed: PLAYER_MOVE_SPEED,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// ITEMS & INVENTORY
// ═══════════════════════════════════════════════════════════════════════

/// Unique identifier for every item type in the game.
/// Using string IDs for data-driven flexibility.
pub type ItemId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    Flower,
    Fish,
    Furniture,
    Tool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDef {
    pub id: ItemId,
    pub name: String,
    pub category: ItemCategory,
    pub sell_price: u32,
    pub buy_price: Option<u32>, // None = not buyable
    pub placeable: bool,
    pub icon: String,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct ItemRegistry {
    pub items: HashMap<ItemId, ItemDef>,
}

impl ItemRegistry {
    pub fn get(&self, id: &str) -> Option<&ItemDef> {
        self.items.get(id)
    }
}

/// One item instance in the player's possession. Carried per-instance rather
/// than as a stack because fish keep the sell value they were caught with and
/// flowers keep their petal color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnedItem {
    pub def_id: ItemId,
    pub name: String,
    pub sell_price: u32,
    /// Petal color for flowers; None for everything else.
    pub tint: Option<(f32, f32, f32)>,
}

/// Ordered list of owned items. Order is what the inventory and shop screens
/// display, so removal is by index.
#[derive(Resource, Debug, Clone, Default)]
pub struct Inventory {
    pub items: Vec<OwnedItem>,
}

impl Inventory {
    pub fn add(&mut self, item: OwnedItem) {
        self.items.push(item);
    }

    pub fn remove(&mut self, index: usize) -> Option<OwnedItem> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn get(&self, index: usize) -> Option<&OwnedItem> {
        self.items.get(index)
    }

    pub fn has(&self, def_id: &str) -> bool {
        self.items.iter().any(|i| i.def_id == def_id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The player's bells. Mutated only through MoneyChangeEvent so every
/// transaction is logged and tracked in one place.
#[derive(Resource, Debug, Clone, Default)]
pub struct Wallet {
    pub bells: u32,
}

// ═══════════════════════════════════════════════════════════════════════
// WORLD OBJECTS
// ═══════════════════════════════════════════════════════════════════════

/// A flower still growing in the meadow.
#[derive(Component, Debug, Clone)]
pub struct Flower {
    pub color_name: &'static str,
    pub tint: (f32, f32, f32),
}

/// The shop building. Interaction range is wider than for small objects.
#[derive(Component, Debug, Clone)]
pub struct ShopBuilding;

/// A furniture (or flower) item the player has placed back into the world.
/// Picking it up returns the carried `item` to the inventory.
#[derive(Component, Debug, Clone)]
pub struct PlacedItem {
    pub item: OwnedItem,
}

// ═══════════════════════════════════════════════════════════════════════
// POND & FISH
// ═══════════════════════════════════════════════════════════════════════

pub type FishId = u32;

/// The circular fishable region. Fish motion is clamped to
/// `radius - POND_EDGE_MARGIN`; casting requires the player within
/// MAX_CAST_RANGE of `center`.
#[derive(Debug, Clone, Copy)]
pub struct PondRegion {
    pub center: Vec3,
    pub radius: f32,
}

impl PondRegion {
    /// Horizontal distance from the pond center.
    pub fn distance_from_center(&self, position: Vec3) -> f32 {
        let dx = position.x - self.center.x;
        let dz = position.z - self.center.z;
        (dx * dx + dz * dz).sqrt()
    }
}

/// One fish swimming in the pond.
///
/// While `facing_bobbler` is set the encounter state machine owns the fish's
/// heading and nibble state; the motion controller must skip it.
#[derive(Debug, Clone)]
pub struct FishEntity {
    pub id: FishId,
    pub position: Vec3,
    pub heading: f32,
    pub target_heading: f32,
    pub speed: f32,
    pub heading_change_timer: f32,
    pub heading_change_interval: f32,
    pub is_nibbling: bool,
    pub nibble_timer: f32,
    pub facing_bobbler: bool,
}

/// Names of the fish species a catch can produce. Populated by the data
/// layer; the encounter machine draws from it uniformly.
#[derive(Resource, Debug, Clone, Default)]
pub struct FishTable {
    pub species: Vec<String>,
}

/// The pond and everything alive in it. The Vec preserves spawn order, which
/// is also the order the encounter's proximity scan uses.
#[derive(Resource, Debug, Clone)]
pub struct PondState {
    pub region: PondRegion,
    pub fish: Vec<FishEntity>,
    pub next_fish_id: FishId,
    /// One pending timer per fish owed to the pond (catch or escape).
    pub respawn_timers: Vec<Timer>,
}

impl Default for PondState {
    fn default() -> Self {
        Self {
            region: PondRegion {
                center: POND_CENTER,
                radius: POND_RADIUS,
            },
            fish: Vec::new(),
            next_fish_id: 0,
            respawn_timers: Vec::new(),
        }
    }
}

impl PondState {
    /// Queue a single-fish respawn after the fixed delay.
    pub fn schedule_respawn(&mut self) {
        self.respawn_timers
            .push(Timer::from_seconds(FISH_RESPAWN_DELAY_SECS, TimerMode::Once));
    }
}

// ═══════════════════════════════════════════════════════════════════════
// SHOP DATA
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopListing {
    pub item_id: ItemId,
    pub price: u32,
}

/// What the shop has on offer. Fixed stock, populated by the data layer.
#[derive(Resource, Debug, Clone, Default)]
pub struct ShopStock {
    pub listings: Vec<ShopListing>,
}

// ═══════════════════════════════════════════════════════════════════════
// EVENTS — cross-domain communication
// ═══════════════════════════════════════════════════════════════════════

#[derive(Event, Debug, Clone)]
pub struct MoneyChangeEvent {
    pub amount: i32, // positive = gain, negative = spend
    pub reason: String,
}

/// Player-facing toast message.
#[derive(Event, Debug, Clone)]
pub struct NotificationEvent {
    pub message: String,
    pub duration_secs: f32,
}

impl NotificationEvent {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            duration_secs: 2.0,
        }
    }
}

/// An item entered the inventory (picked, caught, bought, or re-bought).
#[derive(Event, Debug, Clone)]
pub struct ItemPickupEvent {
    pub item: OwnedItem,
}

/// Sent by the inventory screen when the player places a placeable item.
#[derive(Event, Debug, Clone)]
pub struct PlaceItemEvent {
    pub inventory_index: usize,
}

/// A fish was landed; feeds the catch journal and statistics.
#[derive(Event, Debug, Clone)]
pub struct FishCaughtEvent {
    pub species: String,
    pub value: u32,
}

// ═══════════════════════════════════════════════════════════════════════
// CONSTANTS
// ═══════════════════════════════════════════════════════════════════════

pub const SCREEN_WIDTH: f32 = 1280.0;
pub const SCREEN_HEIGHT: f32 = 720.0;

pub const PLAYER_MOVE_SPEED: f32 = 5.0;
pub const PLAYER_HEIGHT: f32 = 0.8;
pub const CAMERA_OFFSET: Vec3 = Vec3::new(0.0, 8.0, 12.0);
pub const CAMERA_LERP: f32 = 0.1;

pub const INTERACT_RANGE: f32 = 2.5;
pub const SHOP_INTERACT_RANGE: f32 = INTERACT_RANGE + 2.0;
pub const PLACE_DISTANCE: f32 = 2.0;

pub const WATER_SURFACE_Y: f32 = 0.5;
pub const FISH_SWIM_Y: f32 = 0.3;
pub const POND_CENTER: Vec3 = Vec3::new(10.0, 0.0, 10.0);
pub const POND_RADIUS: f32 = 4.0;
/// Fish keep this much clearance from the pond rim.
pub const POND_EDGE_MARGIN: f32 = 0.5;
pub const STARTING_FISH_COUNT: usize = 5;

pub const FISH_SPEED_MIN: f32 = 0.5;
pub const FISH_SPEED_MAX: f32 = 1.0;
pub const HEADING_CHANGE_MIN_SECS: f32 = 2.0;
pub const HEADING_CHANGE_MAX_SECS: f32 = 5.0;
/// Fraction of the remaining turn applied each tick. Deliberately not
/// delta-normalized; see DESIGN.md.
pub const HEADING_SMOOTHING: f32 = 0.1;

pub const MAX_CAST_RANGE: f32 = 6.0;
pub const CAST_DISTANCE: f32 = 3.0;
pub const BITE_RADIUS: f32 = 1.5;
pub const NIBBLE_GOAL_MIN: u32 = 1;
pub const NIBBLE_GOAL_MAX: u32 = 5;
pub const NIBBLE_PULSE_SECS: f32 = 0.5;
pub const STRIKE_WINDOW_SECS: f32 = 1.0;
pub const FISH_RESPAWN_DELAY_SECS: f32 = 3.0;
pub const CATCH_VALUE_MIN: u32 = 20;
pub const CATCH_VALUE_SPAN: u32 = 30;

pub const FLOWER_SELL_PRICE: u32 = 10;
pub const MAX_RECENTLY_SOLD: usize = 10;
