//! Always-on overlay: the bell count and the contextual interaction prompt.

use bevy::prelude::*;

use crate::economy::format_bells;
use crate::interaction::InteractionTarget;
use crate::shared::*;

#[derive(Component)]
pub struct BellsText;

#[derive(Component)]
pub struct PromptText;

pub fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        BellsText,
        Text::new("0 bells"),
        TextFont {
            font_size: 20.0,
            ..default()
        },
        TextColor(Color::srgb(1.0, 0.9, 0.4)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            left: Val::Px(16.0),
            ..default()
        },
    ));

    commands.spawn((
        PromptText,
        Text::new(""),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(48.0),
            left: Val::Percent(50.0),
            margin: UiRect {
                left: Val::Px(-140.0),
                ..default()
            },
            ..default()
        },
    ));
}

pub fn update_bells_text(
    wallet: Res<Wallet>,
    mut bells_query: Query<&mut Text, With<BellsText>>,
) {
    if !wallet.is_changed() {
        return;
    }
    for mut text in bells_query.iter_mut() {
        text.0 = format_bells(wallet.bells);
    }
}

pub fn update_prompt_text(
    target: Res<InteractionTarget>,
    state: Res<State<GameState>>,
    mut prompt_query: Query<&mut Text, With<PromptText>>,
) {
    let Ok(mut text) = prompt_query.get_single_mut() else {
        return;
    };
    // The prompt only makes sense while walking around.
    if *state.get() != GameState::Playing {
        text.0.clear();
        return;
    }
    text.0 = target.prompt().unwrap_or_default();
}
