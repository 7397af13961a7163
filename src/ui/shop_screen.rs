//! The shop: buy from stock, sell from the bag, buy back recent sales.
//!
//! Three panes cycled with Tab. Transactions go through the economy domain's
//! request events; this screen never touches the wallet directly.

use bevy::prelude::*;

use crate::economy::{format_bells, BuyRequestEvent, RebuyRequestEvent, RecentlySold, SellRequestEvent};
use crate::shared::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShopPane {
    #[default]
    Buy,
    Sell,
    BuyBack,
}

impl ShopPane {
    fn next(self) -> Self {
        match self {
            ShopPane::Buy => ShopPane::Sell,
            ShopPane::Sell => ShopPane::BuyBack,
            ShopPane::BuyBack => ShopPane::Buy,
        }
    }

    fn title(self) -> &'static str {
        match self {
            ShopPane::Buy => "Buy",
            ShopPane::Sell => "Sell",
            ShopPane::BuyBack => "Buy back",
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct ShopScreenState {
    pub pane: ShopPane,
    pub selected: usize,
}

#[derive(Component)]
pub struct ShopScreenRoot;

#[derive(Component)]
pub struct ShopPaneText;

#[derive(Component)]
pub struct ShopListText;

#[derive(Component)]
pub struct ShopWalletText;

pub fn spawn_shop_screen(mut commands: Commands, mut screen: ResMut<ShopScreenState>) {
    // Fresh visit, fresh cursor.
    screen.pane = ShopPane::Buy;
    screen.selected = 0;

    commands
        .spawn((
            ShopScreenRoot,
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(60.0),
                left: Val::Percent(50.0),
                width: Val::Px(420.0),
                margin: UiRect {
                    left: Val::Px(-210.0),
                    ..default()
                },
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
                Text::new("Bell & Bloom Trading Post"),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 0.9, 0.4)),
            ));
            parent.spawn((
                ShopWalletText,
                Text::new(""),
                TextFont {
                    font_size: 15.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 0.9, 0.4)),
            ));
            parent.spawn((
                ShopPaneText,
                Text::new(""),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.5, 0.9, 0.5)),
            ));
            parent.spawn((
                ShopListText,
                Text::new(""),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            parent.spawn((
                Text::new("Tab pane · Up/Down select · Enter confirm · Esc leave"),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.6, 0.6)),
            ));
        });
}

pub fn despawn_shop_screen(
    mut commands: Commands,
    root_query: Query<Entity, With<ShopScreenRoot>>,
) {
    for entity in root_query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

pub fn navigate_shop_screen(
    input: Res<PlayerInput>,
    stock: Res<ShopStock>,
    inventory: Res<Inventory>,
    recently_sold: Res<RecentlySold>,
    mut screen: ResMut<ShopScreenState>,
    mut buy_writer: EventWriter<BuyRequestEvent>,
    mut sell_writer: EventWriter<SellRequestEvent>,
    mut rebuy_writer: EventWriter<RebuyRequestEvent>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if input.ui_cancel {
        next_state.set(GameState::Playing);
        return;
    }

    if input.tab_pressed {
        screen.pane = screen.pane.next();
        screen.selected = 0;
    }

    let count = match screen.pane {
        ShopPane::Buy => stock.listings.len(),
        ShopPane::Sell => inventory.len(),
        ShopPane::BuyBack => recently_sold.items.len(),
    };

    if count > 0 {
        if input.ui_down {
            screen.selected = (screen.selected + 1) % count;
        }
        if input.ui_up {
            screen.selected = (screen.selected + count - 1) % count;
        }
    }
    screen.selected = screen.selected.min(count.saturating_sub(1));

    if input.ui_confirm && count > 0 {
        match screen.pane {
            ShopPane::Buy => {
                buy_writer.send(BuyRequestEvent {
                    stock_index: screen.selected,
                });
            }
            ShopPane::Sell => {
                sell_writer.send(SellRequestEvent {
                    inventory_index: screen.selected,
                });
            }
            ShopPane::BuyBack => {
                rebuy_writer.send(RebuyRequestEvent {
                    sold_index: screen.selected,
                });
            }
        }
    }
}

pub fn render_shop_screen(
    stock: Res<ShopStock>,
    inventory: Res<Inventory>,
    recently_sold: Res<RecentlySold>,
    registry: Res<ItemRegistry>,
    wallet: Res<Wallet>,
    screen: Res<ShopScreenState>,
    mut pane_query: Query<&mut Text, (With<ShopPaneText>, Without<ShopListText>, Without<ShopWalletText>)>,
    mut list_query: Query<&mut Text, (With<ShopListText>, Without<ShopWalletText>)>,
    mut wallet_query: Query<&mut Text, With<ShopWalletText>>,
) {
    if let Ok(mut text) = wallet_query.get_single_mut() {
        text.0 = format_bells(wallet.bells);
    }
    if let Ok(mut text) = pane_query.get_single_mut() {
        text.0 = format!("— {} —", screen.pane.title());
    }

    let Ok(mut text) = list_query.get_single_mut() else {
        return;
    };

    let lines: Vec<String> = match screen.pane {
        ShopPane::Buy => stock
            .listings
            .iter()
            .enumerate()
            .map(|(index, listing)| {
                let cursor = if index == screen.selected { ">" } else { " " };
                let (icon, name) = registry
                    .get(&listing.item_id)
                    .map(|def| (def.icon.as_str(), def.name.as_str()))
                    .unwrap_or(("?", listing.item_id.as_str()));
                let afford = if wallet.bells >= listing.price { "" } else { "  (too pricey)" };
                format!("{} {} {}  {} bells{}", cursor, icon, name, listing.price, afford)
            })
            .collect(),
        ShopPane::Sell => inventory
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let cursor = if index == screen.selected { ">" } else { " " };
                format!("{} {}  sells for {} bells", cursor, item.name, item.sell_price)
            })
            .collect(),
        ShopPane::BuyBack => recently_sold
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let cursor = if index == screen.selected { ">" } else { " " };
                format!("{} {}  {} bells", cursor, item.name, item.sell_price)
            })
            .collect(),
    };

    text.0 = if lines.is_empty() {
        match screen.pane {
            ShopPane::Buy => "  (nothing in stock)".to_string(),
            ShopPane::Sell => "  (nothing to sell)".to_string(),
            ShopPane::BuyBack => "  (nothing sold recently)".to_string(),
        }
    } else {
        lines.join("\n")
    };
}
