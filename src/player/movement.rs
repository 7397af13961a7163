//! Avatar movement: free ground-plane motion, turning to face travel.

use bevy::prelude::*;

use crate::shared::*;

/// Reads the frame's move axis and walks the avatar. The avatar rotates to
/// face its travel direction and is held at ground height.
pub fn player_movement(
    time: Res<Time>,
    input: Res<PlayerInput>,
    mut query: Query<(&mut Transform, &mut PlayerMovement), With<Player>>,
) {
    let Ok((mut transform, mut movement)) = query.get_single_mut() else {
        return;
    };

    // Screen-up is world -z with the camera behind the player.
    let move_x = input.move_axis.x;
    let move_z = -input.move_axis.y;

    if move_x != 0.0 || move_z != 0.0 {
        movement.is_moving = true;

        let step = movement.speed * time.delta_secs();
        transform.translation.x += move_x * step;
        transform.translation.z += move_z * step;

        movement.heading = move_x.atan2(move_z);
        transform.rotation = Quat::from_rotation_y(movement.heading);
    } else {
        movement.is_moving = false;
    }

    transform.translation.y = PLAYER_HEIGHT;
}
