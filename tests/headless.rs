//! Headless integration tests for Bellbrook.
//!
//! These tests exercise the game's ECS logic without a window or GPU.
//! They use Bevy's `MinimalPlugins` to tick the app, register only the
//! pure-logic systems (skipping all rendering/UI), and verify that the
//! core loops work correctly.
//!
//! Run with: `cargo test --test headless`

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use rand::rngs::StdRng;
use rand::SeedableRng;

use bellbrook::data::DataPlugin;
use bellbrook::economy::{
    apply_item_pickups, apply_money_changes, handle_buy, handle_rebuy, handle_sell,
    BuyRequestEvent, EconomyStats, RebuyRequestEvent, RecentlySold, SellRequestEvent,
};
use bellbrook::fish::{spawn_fish, wander_step};
use bellbrook::fishing::{CatchOutcome, FishingSession};
use bellbrook::shared::*;
use bellbrook::ui::toast::{handle_notifications, spawn_toast_container, ToastItem};

// ─────────────────────────────────────────────────────────────────────────────
// Test App Builder
// ─────────────────────────────────────────────────────────────────────────────

/// Builds a minimal Bevy app with all shared resources and events registered
/// but NO rendering, windowing, or asset loading. Systems must be added
/// per-test depending on what's being exercised.
fn build_test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(StatesPlugin);

    // ── Game State ───────────────────────────────────────────────────────
    app.init_state::<GameState>();

    // ── Shared Resources (mirrors main.rs) ───────────────────────────────
    app.init_resource::<KeyBindings>()
        .init_resource::<PlayerInput>()
        .init_resource::<InputContext>()
        .init_resource::<Inventory>()
        .init_resource::<Wallet>()
        .init_resource::<ItemRegistry>()
        .init_resource::<FishTable>()
        .init_resource::<ShopStock>()
        .init_resource::<PondState>()
        .init_resource::<EconomyStats>()
        .init_resource::<RecentlySold>();

    // ── Shared Events (mirrors main.rs) ──────────────────────────────────
    app.add_event::<MoneyChangeEvent>()
        .add_event::<NotificationEvent>()
        .add_event::<ItemPickupEvent>()
        .add_event::<PlaceItemEvent>()
        .add_event::<FishCaughtEvent>()
        .add_event::<BuyRequestEvent>()
        .add_event::<SellRequestEvent>()
        .add_event::<RebuyRequestEvent>();

    app
}

/// Transitions the test app to a state and ticks once to process it.
fn enter_state(app: &mut App, state: GameState) {
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(state);
    app.update();
}

// ─────────────────────────────────────────────────────────────────────────────
// Boot
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_headless_boot_populates_registries_and_starts() {
    let mut app = build_test_app();
    app.add_plugins(DataPlugin);

    // First update enters Loading and populates registries; second applies
    // the NextState transition.
    app.update();
    app.update();

    let state = app.world().resource::<State<GameState>>();
    assert_eq!(
        state.get(),
        &GameState::Playing,
        "Expected to reach Playing after loading data"
    );

    let items = app.world().resource::<ItemRegistry>();
    assert!(items.get("flower").is_some());
    assert!(items.get("fishing_rod").is_some());
    assert!(items.get("table").unwrap().placeable);
    assert!(!items.get("fish").unwrap().placeable);

    let table = app.world().resource::<FishTable>();
    assert_eq!(table.species.len(), 5);

    let stock = app.world().resource::<ShopStock>();
    assert_eq!(stock.listings.len(), 3);
}

// ─────────────────────────────────────────────────────────────────────────────
// Economy
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_money_changes_apply_and_clamp() {
    let mut app = build_test_app();
    app.add_systems(Update, apply_money_changes);

    app.world_mut().send_event(MoneyChangeEvent {
        amount: 120,
        reason: "test income".into(),
    });
    app.update();
    assert_eq!(app.world().resource::<Wallet>().bells, 120);

    app.world_mut().send_event(MoneyChangeEvent {
        amount: -50,
        reason: "test spend".into(),
    });
    app.update();
    assert_eq!(app.world().resource::<Wallet>().bells, 70);

    // Overspending clamps to zero instead of underflowing.
    app.world_mut().send_event(MoneyChangeEvent {
        amount: -500,
        reason: "test overspend".into(),
    });
    app.update();
    assert_eq!(app.world().resource::<Wallet>().bells, 0);

    let stats = app.world().resource::<EconomyStats>();
    assert_eq!(stats.total_bells_earned, 120);
    assert_eq!(stats.total_transactions, 3);
}

#[test]
fn test_buying_a_rod_from_the_shop() {
    let mut app = build_test_app();
    app.add_plugins(DataPlugin);
    app.add_systems(
        Update,
        (handle_buy, apply_money_changes, apply_item_pickups),
    );
    app.update();
    app.update();

    app.world_mut().resource_mut::<Wallet>().bells = 25;
    enter_state(&mut app, GameState::Shop);

    // Stock index 2 is the fishing rod at 10 bells.
    app.world_mut().send_event(BuyRequestEvent { stock_index: 2 });
    app.update();
    app.update();

    assert_eq!(app.world().resource::<Wallet>().bells, 15);
    let inventory = app.world().resource::<Inventory>();
    assert!(inventory.has("fishing_rod"));
    // Bought goods resell at half their buy price.
    assert_eq!(inventory.get(0).unwrap().sell_price, 5);
}

#[test]
fn test_buying_without_funds_changes_nothing() {
    let mut app = build_test_app();
    app.add_plugins(DataPlugin);
    app.add_systems(
        Update,
        (handle_buy, apply_money_changes, apply_item_pickups),
    );
    app.update();
    app.update();

    app.world_mut().resource_mut::<Wallet>().bells = 5;
    enter_state(&mut app, GameState::Shop);

    // Table costs 50; 5 bells won't do.
    app.world_mut().send_event(BuyRequestEvent { stock_index: 0 });
    app.update();
    app.update();

    assert_eq!(app.world().resource::<Wallet>().bells, 5);
    assert!(app.world().resource::<Inventory>().is_empty());
}

#[test]
fn test_sell_then_buy_back_round_trip() {
    let mut app = build_test_app();
    app.add_systems(
        Update,
        (handle_sell, handle_rebuy, apply_money_changes, apply_item_pickups),
    );

    let flower = OwnedItem {
        def_id: "flower".to_string(),
        name: "Pink Flower".to_string(),
        sell_price: FLOWER_SELL_PRICE,
        tint: Some((1.0, 0.41, 0.71)),
    };
    app.world_mut().resource_mut::<Inventory>().add(flower);
    enter_state(&mut app, GameState::Shop);

    app.world_mut()
        .send_event(SellRequestEvent { inventory_index: 0 });
    app.update();
    app.update();

    assert_eq!(app.world().resource::<Wallet>().bells, FLOWER_SELL_PRICE);
    assert!(app.world().resource::<Inventory>().is_empty());
    assert_eq!(app.world().resource::<RecentlySold>().items.len(), 1);

    // Buy it back at the same price.
    app.world_mut().send_event(RebuyRequestEvent { sold_index: 0 });
    app.update();
    app.update();

    assert_eq!(app.world().resource::<Wallet>().bells, 0);
    assert!(app.world().resource::<RecentlySold>().items.is_empty());
    let inventory = app.world().resource::<Inventory>();
    assert_eq!(inventory.len(), 1);
    assert_eq!(inventory.get(0).unwrap().name, "Pink Flower");
}

#[test]
fn test_pickup_events_land_in_the_inventory() {
    let mut app = build_test_app();
    app.add_systems(Update, apply_item_pickups);

    app.world_mut().send_event(ItemPickupEvent {
        item: OwnedItem {
            def_id: "fish".to_string(),
            name: "Tuna".to_string(),
            sell_price: 42,
            tint: None,
        },
    });
    app.update();

    let inventory = app.world().resource::<Inventory>();
    assert_eq!(inventory.len(), 1);
    assert_eq!(inventory.get(0).unwrap().sell_price, 42);
}

// ─────────────────────────────────────────────────────────────────────────────
// Notifications
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_notifications_become_toasts() {
    let mut app = build_test_app();
    app.add_systems(Startup, spawn_toast_container);
    app.add_systems(Update, handle_notifications);

    app.update();
    app.world_mut()
        .send_event(NotificationEvent::new("Picked up Pink Flower!"));
    app.update();
    app.update();

    let toast_count = app
        .world_mut()
        .query::<&ToastItem>()
        .iter(app.world())
        .count();
    assert_eq!(toast_count, 1);
}

// ─────────────────────────────────────────────────────────────────────────────
// Fishing orchestration — session + pond wired together, fixed-step driven
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_full_catch_flow_removes_fish_and_schedules_respawn() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut pond = PondState::default();
    for _ in 0..STARTING_FISH_COUNT {
        spawn_fish(&mut pond, &mut rng);
    }

    let mut table = FishTable::default();
    table.species = vec!["Bass".into(), "Tuna".into()];

    let mut session = FishingSession::default();
    let player = POND_CENTER + Vec3::new(-5.0, 0.0, 0.0);
    session
        .cast(player, std::f32::consts::FRAC_PI_2, &pond.region, &mut rng)
        .expect("cast in range");

    // Park the school on the far shore, then walk one fish onto the bobbler
    // and run the encounter at 60 Hz.
    for f in pond.fish.iter_mut() {
        f.position = POND_CENTER + Vec3::new(3.0, 0.0, 0.0);
    }
    pond.fish[2].position = session.cast_target;
    let delta = 1.0 / 60.0;
    let mut ticks = 0;
    while !session.bobbler_submerged {
        session.tick(&mut pond.fish, delta);
        ticks += 1;
        assert!(ticks < 60 * 30, "encounter never reached submersion");
    }
    assert_eq!(session.engaged_fish, Some(2));

    let outcome = session
        .attempt_catch(&mut pond.fish, &table, &mut rng)
        .expect("strike inside the window");
    let CatchOutcome::Caught { item, fish } = outcome else {
        panic!("expected a catch");
    };
    assert_eq!(fish.id, 2);
    assert!(item.sell_price >= CATCH_VALUE_MIN);
    assert!(item.sell_price < CATCH_VALUE_MIN + CATCH_VALUE_SPAN);

    // Removal is synchronous and visible immediately.
    assert_eq!(pond.fish.len(), STARTING_FISH_COUNT - 1);
    assert!(pond.fish.iter().all(|f| f.id != 2));

    // The orchestrator owes the pond one fish.
    pond.schedule_respawn();
    assert_eq!(pond.respawn_timers.len(), 1);
}

#[test]
fn test_escape_flow_also_costs_the_fish() {
    let mut rng = StdRng::seed_from_u64(43);
    let mut pond = PondState::default();
    spawn_fish(&mut pond, &mut rng);

    let mut session = FishingSession::default();
    let player = POND_CENTER + Vec3::new(-5.0, 0.0, 0.0);
    session
        .cast(player, std::f32::consts::FRAC_PI_2, &pond.region, &mut rng)
        .expect("cast in range");
    pond.fish[0].position = session.cast_target;

    let delta = 1.0 / 60.0;
    let mut ticks = 0;
    while !session.bobbler_submerged {
        session.tick(&mut pond.fish, delta);
        ticks += 1;
        assert!(ticks < 60 * 30, "encounter never reached submersion");
    }

    // Let the strike window lapse: slightly over one second of ticks.
    let mut escaped = false;
    for _ in 0..70 {
        if session.tick(&mut pond.fish, delta).is_some() {
            escaped = true;
            break;
        }
    }
    assert!(escaped, "the window timeout must auto-resolve");
    assert!(pond.fish.is_empty());
    assert!(!session.active);
}

#[test]
fn test_wander_respects_engagement_flags() {
    // A fish marked as engaged must not be moved by the wander step caller;
    // the controller skips it, so its position is wholly the encounter's.
    let mut rng = StdRng::seed_from_u64(44);
    let mut pond = PondState::default();
    spawn_fish(&mut pond, &mut rng);
    spawn_fish(&mut pond, &mut rng);
    pond.fish[0].facing_bobbler = true;
    let held = pond.fish[0].position;
    let roaming = pond.fish[1].position;

    let region = pond.region;
    for f in pond.fish.iter_mut() {
        if f.facing_bobbler {
            continue;
        }
        wander_step(f, &region, 0.5, &mut rng);
    }

    assert_eq!(pond.fish[0].position, held);
    assert_ne!(pond.fish[1].position, roaming);
}
