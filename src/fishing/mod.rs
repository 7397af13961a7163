use bevy::prelude::*;

use crate::fish::FishSet;
use crate::shared::*;

// ─── Sub-modules ────────────────────────────────────────────────────────────
mod cast;
mod encounter;
mod journal;
mod render;
mod resolve;
pub mod session;

pub use cast::*;
pub use encounter::*;
pub use journal::*;
pub use render::*;
pub use resolve::*;
pub use session::*;

// ─── Plugin ─────────────────────────────────────────────────────────────────

pub struct FishingPlugin;

impl Plugin for FishingPlugin {
    fn build(&self, app: &mut App) {
        app
            // Resources
            .init_resource::<FishingSession>()
            .init_resource::<CatchJournal>()
            // Casting happens while walking around
            .add_systems(
                Update,
                cast::handle_cast.run_if(in_state(GameState::Playing)),
            )
            // The encounter itself. Strike before tick so a press on the
            // window's last frame still lands; both before the motion set so
            // engagement flags and removals are settled when fish wander.
            .add_systems(
                Update,
                (
                    resolve::handle_strike,
                    encounter::drive_encounter,
                    resolve::handle_cancel_fishing,
                )
                    .chain()
                    .before(FishSet)
                    .run_if(in_state(GameState::Fishing)),
            )
            // Bobbler visuals + status prompt live only during a session
            .add_systems(OnEnter(GameState::Fishing), render::spawn_status_text)
            .add_systems(OnExit(GameState::Fishing), render::despawn_status_text)
            .add_systems(
                Update,
                (
                    render::animate_bobbler,
                    render::draw_fishing_line,
                    render::update_status_text,
                )
                    .run_if(in_state(GameState::Fishing)),
            )
            // Catch journal bookkeeping
            .add_systems(
                Update,
                (journal::record_catches, journal::handle_journal_export),
            );
    }
}

// ─── Marker Components ───────────────────────────────────────────────────────

/// Marks the bobbler entity floating at the cast target.
#[derive(Component, Debug)]
pub struct Bobbler;
