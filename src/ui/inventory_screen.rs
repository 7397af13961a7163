//! The bag: list everything carried, place furniture and flowers back into
//! the world.

use bevy::prelude::*;

use crate::shared::*;

#[derive(Component)]
pub struct InventoryScreenRoot;

#[derive(Component)]
pub struct InventoryListText;

/// Cursor position, kept across open/close so the list doesn't jump.
#[derive(Resource, Debug, Default)]
pub struct InventoryScreenState {
    pub selected: usize,
}

pub fn spawn_inventory_screen(mut commands: Commands) {
    commands
        .spawn((
            InventoryScreenRoot,
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(60.0),
                right: Val::Px(40.0),
                width: Val::Px(340.0),
                padding: UiRect::all(Val::Px(14.0)),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(8.0),
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.05, 0.05, 0.1, 0.92)),
            BorderColor(Color::srgb(0.8, 0.7, 0.3)),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Inventory"),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 0.9, 0.4)),
            ));
            parent.spawn((
                InventoryListText,
                Text::new(""),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            parent.spawn((
                Text::new("Up/Down select · Enter place · Esc close"),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.6, 0.6)),
            ));
        });
}

pub fn despawn_inventory_screen(
    mut commands: Commands,
    root_query: Query<Entity, With<InventoryScreenRoot>>,
) {
    for entity in root_query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

pub fn navigate_inventory_screen(
    input: Res<PlayerInput>,
    inventory: Res<Inventory>,
    registry: Res<ItemRegistry>,
    mut screen: ResMut<InventoryScreenState>,
    mut place_writer: EventWriter<PlaceItemEvent>,
    mut notifications: EventWriter<NotificationEvent>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if input.ui_cancel {
        next_state.set(GameState::Playing);
        return;
    }

    let count = inventory.len();
    if count > 0 {
        if input.ui_down {
            screen.selected = (screen.selected + 1) % count;
        }
        if input.ui_up {
            screen.selected = (screen.selected + count - 1) % count;
        }
    }
    screen.selected = screen.selected.min(count.saturating_sub(1));

    if input.ui_confirm {
        let Some(item) = inventory.get(screen.selected) else {
            return;
        };
        let placeable = registry
            .get(&item.def_id)
            .map(|def| def.placeable)
            .unwrap_or(false);
        if placeable {
            place_writer.send(PlaceItemEvent {
                inventory_index: screen.selected,
            });
            next_state.set(GameState::Playing);
        } else {
            notifications.send(NotificationEvent::new(format!(
                "{} can't be placed.",
                item.name
            )));
        }
    }
}

pub fn render_inventory_screen(
    inventory: Res<Inventory>,
    registry: Res<ItemRegistry>,
    screen: Res<InventoryScreenState>,
    mut list_query: Query<&mut Text, With<InventoryListText>>,
) {
    let Ok(mut text) = list_query.get_single_mut() else {
        return;
    };

    if inventory.is_empty() {
        text.0 = "  (empty — go pick some flowers!)".to_string();
        return;
    }

    let mut lines = Vec::with_capacity(inventory.len());
    for (index, item) in inventory.items.iter().enumerate() {
        let cursor = if index == screen.selected { ">" } else { " " };
        let icon = registry
            .get(&item.def_id)
            .map(|def| def.icon.as_str())
            .unwrap_or("?");
        lines.push(format!(
            "{} {} {}  ({} bells)",
            cursor, icon, item.name, item.sell_price
        ));
    }
    text.0 = lines.join("\n");
}
