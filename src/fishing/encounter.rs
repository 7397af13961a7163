//! Drives the session tick each frame: fish engagement, nibble pulses,
//! submersion, and the strike-window timeout.

use bevy::prelude::*;

use crate::shared::*;
use super::resolve::despawn_bobbler;
use super::{Bobbler, FishingSession, TickOutcome};

pub fn drive_encounter(
    time: Res<Time>,
    mut session: ResMut<FishingSession>,
    mut pond: ResMut<PondState>,
    mut next_state: ResMut<NextState<GameState>>,
    mut notifications: EventWriter<NotificationEvent>,
    bobbler_query: Query<Entity, With<Bobbler>>,
    mut commands: Commands,
) {
    if !session.active {
        return;
    }

    let outcome = session.tick(&mut pond.fish, time.delta_secs());

    if let Some(TickOutcome::Escaped { fish }) = outcome {
        // The window elapsed unanswered. The fish is already out of the live
        // set; the pond owes itself a replacement.
        notifications.send(NotificationEvent::new("Fish got away!"));
        pond.schedule_respawn();
        despawn_bobbler(&mut commands, &bobbler_query);
        next_state.set(GameState::Playing);
        if let Some(f) = fish {
            info!("[Fishing] Fish {} escaped after the strike window closed.", f.id);
        }
    }
}
