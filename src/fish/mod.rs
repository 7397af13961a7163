use bevy::prelude::*;
use rand::Rng;

use crate::shared::*;

// ─── Sub-modules ────────────────────────────────────────────────────────────
pub mod movement;
pub mod rendering;
pub mod respawn;

pub use movement::*;
pub use rendering::*;
pub use respawn::*;

// ─── Plugin ─────────────────────────────────────────────────────────────────

pub struct FishPlugin;

impl Plugin for FishPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PondState>()
            .add_systems(OnEnter(GameState::Playing), stock_pond_once)
            // The pond keeps living while the player fishes or browses menus,
            // but the encounter tick (fishing domain) is ordered ahead of the
            // wander so engagement flags are settled before motion runs.
            .add_systems(
                Update,
                (update_fish_wander, update_fish_respawn, sync_fish_meshes)
                    .chain()
                    .run_if(in_state(GameState::Playing).or(in_state(GameState::Fishing)))
                    .in_set(FishSet),
            );
    }
}

/// Label so the fishing domain can order its encounter tick before motion.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct FishSet;

// ─── Spawning ────────────────────────────────────────────────────────────────

/// Create one fish at a random spot inside the pond, with randomized speed,
/// heading, and wander cadence.
pub fn spawn_fish(pond: &mut PondState, rng: &mut impl Rng) -> FishId {
    let id = pond.next_fish_id;
    pond.next_fish_id += 1;

    let angle = rng.gen_range(0.0..std::f32::consts::TAU);
    let distance = rng.gen_range(0.0..pond.region.radius - 1.0);
    let position = Vec3::new(
        pond.region.center.x + angle.sin() * distance,
        FISH_SWIM_Y,
        pond.region.center.z + angle.cos() * distance,
    );

    pond.fish.push(FishEntity {
        id,
        position,
        heading: rng.gen_range(0.0..std::f32::consts::TAU),
        target_heading: rng.gen_range(0.0..std::f32::consts::TAU),
        speed: rng.gen_range(FISH_SPEED_MIN..FISH_SPEED_MAX),
        heading_change_timer: 0.0,
        heading_change_interval: rng.gen_range(HEADING_CHANGE_MIN_SECS..HEADING_CHANGE_MAX_SECS),
        is_nibbling: false,
        nibble_timer: 0.0,
        facing_bobbler: false,
    });

    id
}

/// Initial stocking, once, on the first entry into Playing.
fn stock_pond_once(mut pond: ResMut<PondState>) {
    if !pond.fish.is_empty() || pond.next_fish_id > 0 {
        return;
    }
    let mut rng = rand::thread_rng();
    for _ in 0..STARTING_FISH_COUNT {
        spawn_fish(&mut pond, &mut rng);
    }
    info!("[Pond] Stocked {} fish.", pond.fish.len());
}
