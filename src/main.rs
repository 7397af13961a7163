mod shared;
mod input;
mod player;
mod world;
mod interaction;
mod fish;
mod fishing;
mod economy;
mod ui;
mod data;

use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};

use shared::*;

fn main() {
    let settings = data::settings::load_settings();

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Bellbrook".into(),
                        resolution: WindowResolution::new(
                            settings.window_width,
                            settings.window_height,
                        ),
                        present_mode: if settings.vsync {
                            PresentMode::AutoVsync
                        } else {
                            PresentMode::AutoNoVsync
                        },
                        resizable: true,
                        ..default()
                    }),
                    ..default()
                }),
        )
        // Game state
        .init_state::<GameState>()
        // Shared resources
        .init_resource::<KeyBindings>()
        .init_resource::<PlayerInput>()
        .init_resource::<InputContext>()
        .init_resource::<Inventory>()
        .init_resource::<Wallet>()
        .init_resource::<ItemRegistry>()
        .init_resource::<FishTable>()
        .init_resource::<ShopStock>()
        // Events
        .add_event::<MoneyChangeEvent>()
        .add_event::<NotificationEvent>()
        .add_event::<ItemPickupEvent>()
        .add_event::<PlaceItemEvent>()
        .add_event::<FishCaughtEvent>()
        // Domain plugins
        .add_plugins(input::InputPlugin)
        .add_plugins(player::PlayerPlugin)
        .add_plugins(world::WorldPlugin)
        .add_plugins(interaction::InteractionPlugin)
        .add_plugins(fish::FishPlugin)
        .add_plugins(fishing::FishingPlugin)
        .add_plugins(economy::EconomyPlugin)
        .add_plugins(ui::UiPlugin)
        // Data loading
        .add_plugins(data::DataPlugin)
        .run();
}
