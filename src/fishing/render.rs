//! Bobbler animation, the fishing line, and the on-screen status prompt.

use bevy::prelude::*;

use crate::shared::*;
use super::{Bobbler, FishingSession};

// ─── Constants ───────────────────────────────────────────────────────────────

/// How deep the bobbler sits once the bite pulls it under.
const BOBBLER_SUBMERGED_Y: f32 = 0.3;
/// Idle float: slow, barely-visible ripple.
const IDLE_BOB_SPEED: f32 = 3.0;
const IDLE_BOB_AMPLITUDE: f32 = 0.02;
/// Nibble pulses shake it harder.
const NIBBLE_BOB_SPEED: f32 = 10.0;
const NIBBLE_BOB_AMPLITUDE: f32 = 0.05;

const LINE_COLOR: Color = Color::srgb(0.40, 0.26, 0.13);
/// Rod hand height above the player's origin.
const HAND_HEIGHT: f32 = 1.5;

const STATUS_COLOR: Color = Color::WHITE;
const STATUS_URGENT_COLOR: Color = Color::srgb(1.0, 0.3, 0.2);

// ─── Bobbler ─────────────────────────────────────────────────────────────────

/// Float animation: gentle bob while waiting, agitated shake during a nibble
/// pulse, pulled under once submerged. Cosmetic only.
pub fn animate_bobbler(
    time: Res<Time>,
    session: Res<FishingSession>,
    pond: Res<PondState>,
    mut bobbler_query: Query<&mut Transform, With<Bobbler>>,
) {
    let nibbling = session
        .engaged_fish
        .and_then(|id| pond.fish.iter().find(|f| f.id == id))
        .map(|f| f.is_nibbling)
        .unwrap_or(false);

    let elapsed = time.elapsed_secs();
    let y = if session.bobbler_submerged {
        BOBBLER_SUBMERGED_Y
    } else if nibbling {
        WATER_SURFACE_Y + (elapsed * NIBBLE_BOB_SPEED).sin() * NIBBLE_BOB_AMPLITUDE
    } else {
        WATER_SURFACE_Y + (elapsed * IDLE_BOB_SPEED).sin() * IDLE_BOB_AMPLITUDE
    };

    for mut transform in bobbler_query.iter_mut() {
        transform.translation.y = y;
    }
}

/// A line from the rod hand to the bobbler, drawn fresh each frame.
pub fn draw_fishing_line(
    mut gizmos: Gizmos,
    player_query: Query<&Transform, With<Player>>,
    bobbler_query: Query<&Transform, (With<Bobbler>, Without<Player>)>,
) {
    let Ok(player) = player_query.get_single() else {
        return;
    };
    let hand = player.translation + Vec3::Y * HAND_HEIGHT;
    for bobbler in bobbler_query.iter() {
        gizmos.line(hand, bobbler.translation, LINE_COLOR);
    }
}

// ─── Status prompt ───────────────────────────────────────────────────────────

/// Marks the status text shown while a session is active.
#[derive(Component)]
pub struct FishingStatusText;

pub fn spawn_status_text(mut commands: Commands) {
    commands.spawn((
        FishingStatusText,
        Text::new(""),
        TextFont {
            font_size: 22.0,
            ..default()
        },
        TextColor(STATUS_COLOR),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(80.0),
            left: Val::Percent(50.0),
            margin: UiRect {
                left: Val::Px(-160.0),
                ..default()
            },
            ..default()
        },
    ));
}

pub fn despawn_status_text(
    mut commands: Commands,
    status_query: Query<Entity, With<FishingStatusText>>,
) {
    for entity in status_query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

/// Poll the session each tick for the current prompt; urgent lines flash red.
pub fn update_status_text(
    session: Res<FishingSession>,
    mut status_query: Query<(&mut Text, &mut TextColor), With<FishingStatusText>>,
) {
    let Ok((mut text, mut color)) = status_query.get_single_mut() else {
        return;
    };

    match session.status() {
        Some(status) => {
            text.0 = status.text.to_string();
            color.0 = if status.urgent {
                STATUS_URGENT_COLOR
            } else {
                STATUS_COLOR
            };
        }
        None => {
            text.0.clear();
        }
    }
}
