//! The fishing encounter state machine.
//!
//! One session at a time: cast → wait → nibble → strike window → resolved.
//! All of it lives in the `FishingSession` resource as plain methods so the
//! whole lifecycle can be driven tick-by-tick in tests without an app. The
//! systems in the sibling modules only wire input, time, and world state into
//! these methods.
//!
//! The strike window is an explicit countdown decremented inside `tick`,
//! not a deferred callback — it cannot fire after teardown because `tick`
//! checks `active` first.

use bevy::prelude::*;
use rand::Rng;

use crate::shared::*;

// ─── Results ─────────────────────────────────────────────────────────────────

/// Why a cast or strike was refused. All recoverable; the caller re-prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FishingError {
    /// Player is more than MAX_CAST_RANGE from the pond center.
    TooFar,
    /// Strike attempted with no active session.
    NotFishing,
    /// Strike attempted before the bobbler submerged.
    TooEarly,
    /// Catch/miss reached with no engaged fish. Internal guard.
    NoFishEngaged,
}

impl FishingError {
    pub fn message(&self) -> &'static str {
        match self {
            FishingError::TooFar => "You need to be closer to the pond!",
            FishingError::NotFishing => "Not fishing!",
            FishingError::TooEarly => "Wait for the fish to bite!",
            FishingError::NoFishEngaged => "No fish to catch!",
        }
    }
}

/// Autonomous outcome surfaced by `tick`.
#[derive(Debug, Clone)]
pub enum TickOutcome {
    /// The strike window elapsed unanswered. The engaged fish has been
    /// removed from the live set (None only if it somehow disengaged first).
    Escaped { fish: Option<FishEntity> },
}

/// Result of a player strike.
#[derive(Debug, Clone)]
pub enum CatchOutcome {
    /// Strike landed inside the window. The fish is out of the live set and
    /// `item` is ready for the inventory.
    Caught { item: OwnedItem, fish: FishEntity },
    /// Strike after the window closed: the fish bolts, no reward.
    Miss { fish: FishEntity },
}

/// Read-only status line for the HUD, polled each tick while active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLine {
    pub text: &'static str,
    pub urgent: bool,
}

// ─── Session ─────────────────────────────────────────────────────────────────

#[derive(Resource, Debug, Clone, Default)]
pub struct FishingSession {
    pub active: bool,
    /// Where the bobbler floats, set at cast time.
    pub cast_target: Vec3,
    pub nibble_count: u32,
    /// Nibbles required before the full bite, drawn in [1, 5] per cast.
    pub nibble_goal: u32,
    /// The fish currently interacting with the bobbler. Weak reference:
    /// the entity itself stays in the pond's live set.
    pub engaged_fish: Option<FishId>,
    pub bobbler_submerged: bool,
    pub strike_window_open: bool,
    /// Countdown toward the auto-escape, meaningful only while the window
    /// is open.
    pub strike_window_remaining: f32,
}

impl FishingSession {
    /// Start a session. Fails with `TooFar` (and no state change) when the
    /// player is out of range of the pond.
    pub fn cast(
        &mut self,
        player_pos: Vec3,
        player_heading: f32,
        pond: &PondRegion,
        rng: &mut impl Rng,
    ) -> Result<(), FishingError> {
        if player_pos.distance(pond.center) > MAX_CAST_RANGE {
            return Err(FishingError::TooFar);
        }

        self.active = true;
        self.nibble_count = 0;
        self.nibble_goal = rng.gen_range(NIBBLE_GOAL_MIN..=NIBBLE_GOAL_MAX);
        self.bobbler_submerged = false;
        self.strike_window_open = false;
        self.strike_window_remaining = 0.0;
        self.engaged_fish = None;

        // Bobbler lands a fixed distance in front of the player, on the water.
        self.cast_target = Vec3::new(
            player_pos.x + player_heading.sin() * CAST_DISTANCE,
            WATER_SURFACE_Y,
            player_pos.z + player_heading.cos() * CAST_DISTANCE,
        );

        Ok(())
    }

    /// Advance the encounter one step. Must run before the motion controller
    /// so engagement flags are settled when it iterates.
    pub fn tick(&mut self, fish: &mut Vec<FishEntity>, delta: f32) -> Option<TickOutcome> {
        if !self.active {
            return None;
        }

        // Countdown first: the tick that opens the window never consumes any
        // of it, so the window lasts the full STRIKE_WINDOW_SECS.
        if self.strike_window_open {
            self.strike_window_remaining -= delta;
            if self.strike_window_remaining <= 0.0 {
                let escaped = self.take_engaged(fish);
                self.end(fish);
                return Some(TickOutcome::Escaped { fish: escaped });
            }
        }

        self.scan_for_fish(fish, delta);
        None
    }

    /// Find and drive the first fish (in spawn order) within bite range of
    /// the bobbler. Fish encountered before it that were engaged are
    /// released; fish after it are left untouched this tick.
    fn scan_for_fish(&mut self, fish: &mut [FishEntity], delta: f32) {
        for f in fish.iter_mut() {
            if f.position.distance(self.cast_target) < BITE_RADIUS {
                if !f.facing_bobbler {
                    f.facing_bobbler = true;
                    f.is_nibbling = false;
                    f.nibble_timer = 0.0;
                    self.engaged_fish = Some(f.id);
                }

                // The encounter owns this fish's heading now: face the bobbler.
                let bearing = (self.cast_target.x - f.position.x)
                    .atan2(self.cast_target.z - f.position.z);
                f.heading = bearing;
                f.target_heading = bearing;

                // Nibble pulses are single-tick: set on one tick, cleared on
                // the next.
                if !f.is_nibbling && self.nibble_count < self.nibble_goal {
                    f.nibble_timer += delta;
                    if f.nibble_timer > NIBBLE_PULSE_SECS {
                        f.is_nibbling = true;
                        f.nibble_timer = 0.0;
                        self.nibble_count += 1;
                    }
                } else if f.is_nibbling {
                    f.is_nibbling = false;
                    f.nibble_timer = 0.0;
                }

                // All nibbles done — the bobbler goes under and the strike
                // window opens, once.
                if self.nibble_count >= self.nibble_goal && !self.bobbler_submerged {
                    self.bobbler_submerged = true;
                    self.strike_window_open = true;
                    self.strike_window_remaining = STRIKE_WINDOW_SECS;
                }
                return;
            } else if f.facing_bobbler {
                // Drifted out of range before the bite: release it and keep
                // waiting.
                f.facing_bobbler = false;
                f.is_nibbling = false;
                if self.engaged_fish == Some(f.id) {
                    self.engaged_fish = None;
                }
            }
        }
    }

    /// The player strikes.
    pub fn attempt_catch(
        &mut self,
        fish: &mut Vec<FishEntity>,
        table: &FishTable,
        rng: &mut impl Rng,
    ) -> Result<CatchOutcome, FishingError> {
        if !self.active {
            return Err(FishingError::NotFishing);
        }

        if self.strike_window_open && self.bobbler_submerged {
            let caught = self
                .take_engaged(fish)
                .ok_or(FishingError::NoFishEngaged)?;
            let item = random_catch(table, rng);
            self.end(fish);
            Ok(CatchOutcome::Caught { item, fish: caught })
        } else if self.bobbler_submerged {
            let missed = self
                .take_engaged(fish)
                .ok_or(FishingError::NoFishEngaged)?;
            self.end(fish);
            Ok(CatchOutcome::Miss { fish: missed })
        } else {
            Err(FishingError::TooEarly)
        }
    }

    /// Tear the session down. Any engaged fish is released (not removed).
    /// Safe to call on an already-idle session.
    pub fn end(&mut self, fish: &mut [FishEntity]) {
        if let Some(id) = self.engaged_fish.take() {
            if let Some(f) = fish.iter_mut().find(|f| f.id == id) {
                f.facing_bobbler = false;
                f.is_nibbling = false;
            }
        }
        self.active = false;
        self.bobbler_submerged = false;
        self.strike_window_open = false;
        self.strike_window_remaining = 0.0;
        self.nibble_count = 0;
    }

    /// HUD prompt for the current phase; None while idle.
    pub fn status(&self) -> Option<StatusLine> {
        if !self.active {
            return None;
        }
        if self.bobbler_submerged && self.strike_window_open {
            Some(StatusLine {
                text: "Press F NOW to catch!",
                urgent: true,
            })
        } else if self.engaged_fish.is_some() {
            Some(StatusLine {
                text: "Fish is nibbling... Wait for it!",
                urgent: false,
            })
        } else {
            Some(StatusLine {
                text: "Fishing... Waiting for fish",
                urgent: false,
            })
        }
    }

    /// Remove the engaged fish from the live set, clearing its flags.
    /// Removal is synchronous so the motion controller and render sync see
    /// it the same tick.
    fn take_engaged(&mut self, fish: &mut Vec<FishEntity>) -> Option<FishEntity> {
        let id = self.engaged_fish.take()?;
        let index = fish.iter().position(|f| f.id == id)?;
        let mut f = fish.remove(index);
        f.facing_bobbler = false;
        f.is_nibbling = false;
        Some(f)
    }
}

// ─── Catch generation ────────────────────────────────────────────────────────

/// Roll the catch: a uniform species from the table and a sell value in
/// [CATCH_VALUE_MIN, CATCH_VALUE_MIN + CATCH_VALUE_SPAN). Pure in the rng so
/// tests can seed it.
pub fn random_catch(table: &FishTable, rng: &mut impl Rng) -> OwnedItem {
    let name = if table.species.is_empty() {
        "Carp".to_string()
    } else {
        table.species[rng.gen_range(0..table.species.len())].clone()
    };
    let value = CATCH_VALUE_MIN + rng.gen_range(0..CATCH_VALUE_SPAN);
    OwnedItem {
        def_id: "fish".to_string(),
        name,
        sell_price: value,
        tint: None,
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_pond() -> PondRegion {
        PondRegion {
            center: POND_CENTER,
            radius: POND_RADIUS,
        }
    }

    fn test_table() -> FishTable {
        FishTable {
            species: vec![
                "Bass".into(),
                "Carp".into(),
                "Trout".into(),
                "Salmon".into(),
                "Tuna".into(),
            ],
        }
    }

    /// A fish parked on the cast target so it engages immediately.
    fn fish_at(id: FishId, position: Vec3) -> FishEntity {
        FishEntity {
            id,
            position,
            heading: 0.0,
            target_heading: 0.0,
            speed: 0.6,
            heading_change_timer: 0.0,
            heading_change_interval: 3.0,
            is_nibbling: false,
            nibble_timer: 0.0,
            facing_bobbler: false,
        }
    }

    /// Casts from just inside range and returns the session.
    fn cast_session(rng: &mut StdRng) -> FishingSession {
        let mut session = FishingSession::default();
        let player = Vec3::new(POND_CENTER.x - 5.0, 0.0, POND_CENTER.z);
        session
            .cast(player, 0.0, &test_pond(), rng)
            .expect("cast within range should succeed");
        session
    }

    /// Ticks until the strike window opens. Panics if it never does.
    fn tick_until_submerged(
        session: &mut FishingSession,
        fish: &mut Vec<FishEntity>,
        delta: f32,
    ) {
        for _ in 0..200 {
            session.tick(fish, delta);
            if session.bobbler_submerged {
                return;
            }
        }
        panic!("bobbler never submerged");
    }

    #[test]
    fn test_cast_too_far_leaves_no_session() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut session = FishingSession::default();
        let player = Vec3::new(POND_CENTER.x - 6.1, 0.0, POND_CENTER.z);

        let result = session.cast(player, 0.0, &test_pond(), &mut rng);
        assert_eq!(result, Err(FishingError::TooFar));
        assert!(!session.active, "failed cast must not activate the session");
    }

    #[test]
    fn test_cast_range_boundary() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut session = FishingSession::default();
        let pond = test_pond();

        let near = Vec3::new(POND_CENTER.x - 5.9, 0.0, POND_CENTER.z);
        assert!(session.cast(near, 0.0, &pond, &mut rng).is_ok());
        session.end(&mut []);

        let far = Vec3::new(POND_CENTER.x - 6.1, 0.0, POND_CENTER.z);
        assert_eq!(
            session.cast(far, 0.0, &pond, &mut rng),
            Err(FishingError::TooFar)
        );
    }

    #[test]
    fn test_nibble_goal_always_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            let mut session = cast_session(&mut rng);
            assert!(
                (NIBBLE_GOAL_MIN..=NIBBLE_GOAL_MAX).contains(&session.nibble_goal),
                "nibble goal {} out of range",
                session.nibble_goal
            );
            session.end(&mut []);
        }
    }

    #[test]
    fn test_cast_target_in_front_of_player() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut session = FishingSession::default();
        let player = Vec3::new(POND_CENTER.x - 5.0, 0.0, POND_CENTER.z);
        // Facing +x (heading π/2): target is CAST_DISTANCE along +x.
        session
            .cast(player, std::f32::consts::FRAC_PI_2, &test_pond(), &mut rng)
            .unwrap();
        assert!((session.cast_target.x - (player.x + CAST_DISTANCE)).abs() < 1e-4);
        assert!((session.cast_target.z - player.z).abs() < 1e-4);
        assert_eq!(session.cast_target.y, WATER_SURFACE_Y);
    }

    #[test]
    fn test_engagement_and_nibble_pulses() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut session = cast_session(&mut rng);
        let mut fish = vec![fish_at(0, session.cast_target)];

        session.tick(&mut fish, 0.1);
        assert_eq!(session.engaged_fish, Some(0));
        assert!(fish[0].facing_bobbler);
        assert!(!fish[0].is_nibbling);

        // Nibble timer must exceed the pulse threshold before a pulse fires.
        let mut pulses = 0;
        for _ in 0..20 {
            session.tick(&mut fish, 0.3);
            if fish.first().map(|f| f.is_nibbling).unwrap_or(false) {
                pulses += 1;
                // A pulse lasts exactly one tick.
                session.tick(&mut fish, 0.0);
                assert!(!fish[0].is_nibbling, "pulse must clear on the next tick");
            }
            if session.bobbler_submerged {
                break;
            }
        }
        assert_eq!(pulses as u32, session.nibble_goal);
    }

    #[test]
    fn test_nibble_count_never_exceeds_goal() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut session = cast_session(&mut rng);
        let mut fish = vec![fish_at(0, session.cast_target)];

        for _ in 0..100 {
            session.tick(&mut fish, 0.3);
            assert!(session.nibble_count <= session.nibble_goal);
            if session.bobbler_submerged {
                break;
            }
        }
        assert!(session.bobbler_submerged);
    }

    #[test]
    fn test_submersion_opens_strike_window_simultaneously() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut session = cast_session(&mut rng);
        let mut fish = vec![fish_at(0, session.cast_target)];

        for _ in 0..100 {
            session.tick(&mut fish, 0.3);
            if session.nibble_count >= session.nibble_goal {
                // The same evaluation that completes the nibbles submerges
                // the bobbler and opens the window together.
                assert!(session.bobbler_submerged);
                assert!(session.strike_window_open);
                break;
            }
        }
        assert_eq!(session.strike_window_remaining, STRIKE_WINDOW_SECS);
    }

    #[test]
    fn test_strike_window_implies_submerged() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut session = cast_session(&mut rng);
        let mut fish = vec![fish_at(0, session.cast_target)];

        for _ in 0..100 {
            session.tick(&mut fish, 0.3);
            if session.strike_window_open {
                assert!(session.bobbler_submerged);
            }
            if session.bobbler_submerged {
                break;
            }
        }
    }

    #[test]
    fn test_catch_during_window_removes_fish_once() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut session = cast_session(&mut rng);
        let mut fish = vec![fish_at(0, session.cast_target), fish_at(1, POND_CENTER)];
        tick_until_submerged(&mut session, &mut fish, 0.3);

        let table = test_table();
        let outcome = session
            .attempt_catch(&mut fish, &table, &mut rng)
            .expect("strike inside the window must land");
        match outcome {
            CatchOutcome::Caught { item, fish: caught } => {
                assert_eq!(caught.id, 0);
                assert!((CATCH_VALUE_MIN..CATCH_VALUE_MIN + CATCH_VALUE_SPAN)
                    .contains(&item.sell_price));
                assert!(table.species.contains(&item.name));
            }
            CatchOutcome::Miss { .. } => panic!("expected a catch"),
        }
        assert_eq!(fish.len(), 1, "exactly one fish removed");
        assert_eq!(fish[0].id, 1);
        assert!(!session.active);
    }

    #[test]
    fn test_catch_values_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(10);
        let table = test_table();
        for _ in 0..1000 {
            let item = random_catch(&table, &mut rng);
            assert!(item.sell_price >= CATCH_VALUE_MIN);
            assert!(item.sell_price < CATCH_VALUE_MIN + CATCH_VALUE_SPAN);
        }
    }

    #[test]
    fn test_strike_before_bite_is_too_early() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut session = cast_session(&mut rng);
        let mut fish = vec![fish_at(0, session.cast_target)];
        session.tick(&mut fish, 0.1);

        let result = session.attempt_catch(&mut fish, &test_table(), &mut rng);
        assert!(matches!(result, Err(FishingError::TooEarly)));
        assert!(session.active, "TooEarly must not end the session");
        assert_eq!(fish.len(), 1);
    }

    #[test]
    fn test_strike_with_no_session_is_not_fishing() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut session = FishingSession::default();
        let result = session.attempt_catch(&mut Vec::new(), &test_table(), &mut rng);
        assert!(matches!(result, Err(FishingError::NotFishing)));
    }

    #[test]
    fn test_window_timeout_escapes_exactly_once() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut session = cast_session(&mut rng);
        let mut fish = vec![fish_at(0, session.cast_target)];
        tick_until_submerged(&mut session, &mut fish, 0.3);

        // Ticking past one second of window time resolves Escaped, once.
        let mut escapes = 0;
        for _ in 0..20 {
            if let Some(TickOutcome::Escaped { fish: escaped }) = session.tick(&mut fish, 0.3) {
                escapes += 1;
                assert!(escaped.is_some());
            }
        }
        assert_eq!(escapes, 1, "escape must fire exactly once");
        assert!(fish.is_empty(), "escaped fish leaves the live set");
        assert!(!session.active);
    }

    #[test]
    fn test_window_survives_just_under_a_second() {
        let mut rng = StdRng::seed_from_u64(14);
        let mut session = cast_session(&mut rng);
        let mut fish = vec![fish_at(0, session.cast_target)];
        tick_until_submerged(&mut session, &mut fish, 0.3);

        // 0.9 s of window time: still open.
        for _ in 0..9 {
            assert!(session.tick(&mut fish, 0.1).is_none());
        }
        assert!(session.strike_window_open);

        // The strike still lands.
        let outcome = session.attempt_catch(&mut fish, &test_table(), &mut rng);
        assert!(matches!(outcome, Ok(CatchOutcome::Caught { .. })));
    }

    #[test]
    fn test_disengage_when_fish_leaves_range() {
        let mut rng = StdRng::seed_from_u64(15);
        let mut session = cast_session(&mut rng);
        let mut fish = vec![fish_at(0, session.cast_target)];
        session.tick(&mut fish, 0.1);
        assert_eq!(session.engaged_fish, Some(0));

        // Teleport the fish out of bite range; next tick releases it.
        fish[0].position = POND_CENTER + Vec3::new(2.0, 0.0, 2.0);
        session.tick(&mut fish, 0.1);
        assert_eq!(session.engaged_fish, None);
        assert!(!fish[0].facing_bobbler);
        assert!(!fish[0].is_nibbling);
        assert!(session.active, "session keeps waiting for another bite");
    }

    #[test]
    fn test_only_first_in_range_fish_is_processed() {
        let mut rng = StdRng::seed_from_u64(16);
        let mut session = cast_session(&mut rng);
        // Both fish sit on the bobbler; spawn order decides.
        let mut fish = vec![fish_at(7, session.cast_target), fish_at(8, session.cast_target)];
        session.tick(&mut fish, 0.1);
        assert_eq!(session.engaged_fish, Some(7));
        assert!(fish[0].facing_bobbler);
        assert!(!fish[1].facing_bobbler, "second fish is ignored this tick");
    }

    #[test]
    fn test_end_is_idempotent_and_clears_everything() {
        let mut rng = StdRng::seed_from_u64(17);
        let mut session = cast_session(&mut rng);
        let mut fish = vec![fish_at(0, session.cast_target)];
        tick_until_submerged(&mut session, &mut fish, 0.3);

        session.end(&mut fish);
        assert!(!session.active);
        assert_eq!(session.engaged_fish, None);
        assert!(!session.bobbler_submerged);
        assert!(!session.strike_window_open);
        assert!(!fish[0].facing_bobbler, "cancel releases the fish unharmed");

        // Second teardown is a no-op.
        session.end(&mut fish);
        assert!(!session.active);
    }

    #[test]
    fn test_no_escape_after_teardown() {
        let mut rng = StdRng::seed_from_u64(18);
        let mut session = cast_session(&mut rng);
        let mut fish = vec![fish_at(0, session.cast_target)];
        tick_until_submerged(&mut session, &mut fish, 0.3);

        session.end(&mut fish);
        // Even with window time long expired, an ended session never fires.
        for _ in 0..10 {
            assert!(session.tick(&mut fish, 1.0).is_none());
        }
        assert_eq!(fish.len(), 1);
    }

    #[test]
    fn test_status_lines_follow_the_phases() {
        let mut rng = StdRng::seed_from_u64(19);
        let mut session = FishingSession::default();
        assert_eq!(session.status(), None);

        session = cast_session(&mut rng);
        let mut fish = vec![fish_at(0, POND_CENTER)];
        assert_eq!(
            session.status().unwrap().text,
            "Fishing... Waiting for fish"
        );

        fish[0].position = session.cast_target;
        session.tick(&mut fish, 0.1);
        let status = session.status().unwrap();
        assert_eq!(status.text, "Fish is nibbling... Wait for it!");
        assert!(!status.urgent);

        tick_until_submerged(&mut session, &mut fish, 0.3);
        let status = session.status().unwrap();
        assert_eq!(status.text, "Press F NOW to catch!");
        assert!(status.urgent);
    }

    #[test]
    fn test_engaged_fish_faces_the_bobbler() {
        let mut rng = StdRng::seed_from_u64(20);
        let mut session = cast_session(&mut rng);
        let mut fish = vec![fish_at(
            0,
            session.cast_target + Vec3::new(-1.0, 0.0, 0.0),
        )];
        session.tick(&mut fish, 0.1);
        // Bobbler is due +x of the fish: bearing atan2(1, 0) = π/2.
        assert!((fish[0].heading - std::f32::consts::FRAC_PI_2).abs() < 1e-4);
        assert_eq!(fish[0].heading, fish[0].target_heading);
    }
}
