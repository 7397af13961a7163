//! Cast handling: the F key while walking starts a session when the player
//! owns a rod and stands close enough to the pond.

use bevy::prelude::*;

use crate::shared::*;
use super::{Bobbler, FishingSession};

pub fn handle_cast(
    input: Res<PlayerInput>,
    mut session: ResMut<FishingSession>,
    pond: Res<PondState>,
    inventory: Res<Inventory>,
    player_query: Query<(&Transform, &PlayerMovement), With<Player>>,
    mut next_state: ResMut<NextState<GameState>>,
    mut notifications: EventWriter<NotificationEvent>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !input.fish_action {
        return;
    }

    // Guard: only one session at a time. State transitions make this
    // unreachable in practice, but the resource is shared.
    if session.active {
        return;
    }

    if !inventory.has("fishing_rod") {
        notifications.send(NotificationEvent::new(
            "You need a fishing rod! The shop sells one.",
        ));
        return;
    }

    let Ok((transform, movement)) = player_query.get_single() else {
        return;
    };

    let mut rng = rand::thread_rng();
    match session.cast(
        transform.translation,
        movement.heading,
        &pond.region,
        &mut rng,
    ) {
        Ok(()) => {
            // Golden bobbler sphere at the cast target.
            commands.spawn((
                Bobbler,
                Mesh3d(meshes.add(Sphere::new(0.1))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: Color::srgb(1.0, 0.84, 0.0),
                    emissive: LinearRgba::new(0.27, 0.27, 0.0, 1.0),
                    ..default()
                })),
                Transform::from_translation(session.cast_target),
            ));

            notifications.send(NotificationEvent::new(
                "Fishing... Press F when the bobbler goes underwater!",
            ));
            next_state.set(GameState::Fishing);
            info!(
                "[Fishing] Cast to ({:.1}, {:.1}), {} nibbles to go.",
                session.cast_target.x, session.cast_target.z, session.nibble_goal
            );
        }
        Err(error) => {
            notifications.send(NotificationEvent::new(error.message()));
        }
    }
}
