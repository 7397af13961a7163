//! Follow camera: a fixed offset behind and above the avatar, eased toward
//! the target so walking feels smooth.

use bevy::prelude::*;

use crate::shared::*;

pub fn camera_follow(
    player_query: Query<&Transform, (With<Player>, Without<Camera3d>)>,
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
) {
    let Ok(player) = player_query.get_single() else {
        return;
    };
    let Ok(mut camera) = camera_query.get_single_mut() else {
        return;
    };

    let target = player.translation + CAMERA_OFFSET;
    camera.translation = camera.translation.lerp(target, CAMERA_LERP);
    camera.look_at(player.translation, Vec3::Y);
}
