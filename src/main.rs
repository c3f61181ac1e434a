use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;

mod constants;
mod radial;
mod setup;

use constants::*;
use radial::{ConfirmEvent, RadialMenuPlugin, WandController};
use setup::WandAim;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(RadialMenuPlugin)
        .add_systems(Startup, setup::setup_scene)
        .add_systems(Update, (
            wand_aim_system,
            confirm_input_system,
            setup::menu_bob_system,
        ))
        .run();
}

/// System: Aim the wand with arrow keys, or mouse motion while the right button is held
fn wand_aim_system(
    time: Res<Time>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion_events: EventReader<MouseMotion>,
    mut wand_query: Query<(&mut Transform, &mut WandAim), With<WandController>>,
) {
    let Ok((mut transform, mut aim)) = wand_query.single_mut() else { return };

    let dt = time.delta_secs();
    if keyboard.pressed(KeyCode::ArrowLeft) {
        aim.yaw += WAND_TURN_SPEED * dt;
    }
    if keyboard.pressed(KeyCode::ArrowRight) {
        aim.yaw -= WAND_TURN_SPEED * dt;
    }
    if keyboard.pressed(KeyCode::ArrowUp) {
        aim.pitch += WAND_TURN_SPEED * dt;
    }
    if keyboard.pressed(KeyCode::ArrowDown) {
        aim.pitch -= WAND_TURN_SPEED * dt;
    }

    if mouse_button.pressed(MouseButton::Right) {
        for motion in mouse_motion_events.read() {
            aim.yaw -= motion.delta.x * WAND_MOUSE_SENSITIVITY;
            aim.pitch -= motion.delta.y * WAND_MOUSE_SENSITIVITY;
        }
    } else {
        mouse_motion_events.clear();
    }

    aim.pitch = aim.pitch.clamp(-WAND_PITCH_LIMIT, WAND_PITCH_LIMIT);
    transform.rotation = Quat::from_euler(EulerRot::YXZ, aim.yaw, aim.pitch, 0.0);
}

/// System: Forward confirm edges (Space or left click) to the menu
fn confirm_input_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut confirm_events: EventWriter<ConfirmEvent>,
) {
    if keyboard.just_pressed(KeyCode::Space) || mouse_button.just_pressed(MouseButton::Left) {
        confirm_events.write(ConfirmEvent);
    }
}
