//! Strike resolution and session teardown.
//!
//! These systems translate `attempt_catch` results into inventory pickups,
//! notifications, and the pond's respawn schedule.

use bevy::prelude::*;

use crate::shared::*;
use super::{Bobbler, CatchOutcome, FishingError, FishingSession};

/// The player presses F while the line is out.
pub fn handle_strike(
    input: Res<PlayerInput>,
    mut session: ResMut<FishingSession>,
    mut pond: ResMut<PondState>,
    table: Res<FishTable>,
    mut next_state: ResMut<NextState<GameState>>,
    mut notifications: EventWriter<NotificationEvent>,
    mut pickup_writer: EventWriter<ItemPickupEvent>,
    mut caught_writer: EventWriter<FishCaughtEvent>,
    bobbler_query: Query<Entity, With<Bobbler>>,
    mut commands: Commands,
) {
    if !input.fish_action {
        return;
    }

    let mut rng = rand::thread_rng();
    match session.attempt_catch(&mut pond.fish, &table, &mut rng) {
        Ok(CatchOutcome::Caught { item, fish }) => {
            notifications.send(NotificationEvent::new(format!(
                "Caught {}! (+{} bells)",
                item.name, item.sell_price
            )));
            caught_writer.send(FishCaughtEvent {
                species: item.name.clone(),
                value: item.sell_price,
            });
            pickup_writer.send(ItemPickupEvent { item });
            pond.schedule_respawn();
            despawn_bobbler(&mut commands, &bobbler_query);
            next_state.set(GameState::Playing);
            info!("[Fishing] Landed fish {}.", fish.id);
        }
        Ok(CatchOutcome::Miss { fish }) => {
            notifications.send(NotificationEvent::new("Fish got away!"));
            pond.schedule_respawn();
            despawn_bobbler(&mut commands, &bobbler_query);
            next_state.set(GameState::Playing);
            info!("[Fishing] Struck too late; fish {} bolted.", fish.id);
        }
        Err(FishingError::TooEarly) => {
            // Session continues; just nudge the player.
            notifications.send(NotificationEvent::new(FishingError::TooEarly.message()));
        }
        Err(error) => {
            notifications.send(NotificationEvent::new(error.message()));
        }
    }
}

/// Escape reels the line back in without resolving anything. The engaged
/// fish (if any) is released, not removed, and no respawn is owed.
pub fn handle_cancel_fishing(
    input: Res<PlayerInput>,
    mut session: ResMut<FishingSession>,
    mut pond: ResMut<PondState>,
    mut next_state: ResMut<NextState<GameState>>,
    mut notifications: EventWriter<NotificationEvent>,
    bobbler_query: Query<Entity, With<Bobbler>>,
    mut commands: Commands,
) {
    if !input.ui_cancel || !session.active {
        return;
    }

    session.end(&mut pond.fish);
    despawn_bobbler(&mut commands, &bobbler_query);
    next_state.set(GameState::Playing);
    notifications.send(NotificationEvent::new("Reeled the line back in."));
    info!("[Fishing] Session cancelled.");
}

/// Remove the bobbler entity (and anything parented to it).
pub fn despawn_bobbler(commands: &mut Commands, bobbler_query: &Query<Entity, With<Bobbler>>) {
    for entity in bobbler_query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
