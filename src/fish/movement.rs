//! Fish wander behavior.
//!
//! Every fish not currently engaged with a bobbler drifts around the pond:
//! pick a random target heading every few seconds, ease toward it, swim
//! forward, and bounce back off the rim. Engaged fish are owned by the
//! fishing encounter and skipped entirely here.

use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::{PI, TAU};

use crate::shared::*;

/// Advance one fish by `delta` seconds of wandering.
pub fn wander_step(f: &mut FishEntity, pond: &PondRegion, delta: f32, rng: &mut impl Rng) {
    // Re-roll the target heading on a randomized cadence.
    f.heading_change_timer += delta;
    if f.heading_change_timer >= f.heading_change_interval {
        f.target_heading = rng.gen_range(0.0..TAU);
        f.heading_change_timer = 0.0;
        f.heading_change_interval =
            rng.gen_range(HEADING_CHANGE_MIN_SECS..HEADING_CHANGE_MAX_SECS);
    }

    // Ease toward the target along the shortest arc. The smoothing factor is
    // per-tick, not per-second.
    let mut diff = (f.target_heading - f.heading).rem_euclid(TAU);
    if diff > PI {
        diff -= TAU;
    }
    f.heading += diff * HEADING_SMOOTHING;

    // Swim forward.
    f.position.x += f.heading.sin() * f.speed * delta;
    f.position.z += f.heading.cos() * f.speed * delta;

    // Rim handling: snap back onto the boundary circle and flip around.
    let limit = pond.radius - POND_EDGE_MARGIN;
    let offset = Vec2::new(f.position.x - pond.center.x, f.position.z - pond.center.z);
    let dist = offset.length();
    if dist > limit {
        let clamped = offset * (limit / dist);
        f.position.x = pond.center.x + clamped.x;
        f.position.z = pond.center.z + clamped.y;
        f.heading = (f.heading + PI).rem_euclid(TAU);
    }
}

/// Per-frame wander for every non-engaged fish.
pub fn update_fish_wander(time: Res<Time>, mut pond: ResMut<PondState>) {
    let mut rng = rand::thread_rng();
    let delta = time.delta_secs();
    let region = pond.region;

    for f in pond.fish.iter_mut() {
        if f.facing_bobbler {
            continue;
        }
        wander_step(f, &region, delta, &mut rng);
    }
}
