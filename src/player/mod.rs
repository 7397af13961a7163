use bevy::prelude::*;

use crate::shared::*;

// ─── Sub-modules ────────────────────────────────────────────────────────────
pub mod camera;
pub mod movement;
pub mod spawn;

pub use camera::*;
pub use movement::*;
pub use spawn::*;

// ─── Plugin ─────────────────────────────────────────────────────────────────

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn::spawn_player, spawn::spawn_camera_and_light))
            .add_systems(
                Update,
                movement::player_movement.run_if(in_state(GameState::Playing)),
            )
            // The camera keeps tracking even while menus or a session hold
            // the avatar still.
            .add_systems(PostUpdate, camera::camera_follow);
    }
}
