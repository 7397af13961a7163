//! Respawn scheduling: the pond owes itself one fish per catch or escape,
//! delivered after a fixed delay.

use bevy::prelude::*;

use crate::shared::*;
use super::spawn_fish;

pub fn update_fish_respawn(time: Res<Time>, mut pond: ResMut<PondState>) {
    if pond.respawn_timers.is_empty() {
        return;
    }

    for timer in pond.respawn_timers.iter_mut() {
        timer.tick(time.delta());
    }

    let due = pond
        .respawn_timers
        .iter()
        .filter(|t| t.finished())
        .count();
    pond.respawn_timers.retain(|t| !t.finished());

    let mut rng = rand::thread_rng();
    for _ in 0..due {
        let id = spawn_fish(&mut pond, &mut rng);
        info!("[Pond] Fish {} surfaces after the respawn delay.", id);
    }
}
