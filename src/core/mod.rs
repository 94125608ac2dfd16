//! Core domain: camera setup and follow behavior.

use bevy::prelude::*;

use crate::movement::Player;

const CAMERA_FOLLOW_RATE: f32 = 4.0;

/// Marker for the main 2D camera
#[derive(Component, Debug)]
pub struct MainCamera;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera)
            .add_systems(Update, follow_player);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((MainCamera, Camera2d));
}

fn follow_player(
    time: Res<Time>,
    player: Query<&Transform, (With<Player>, Without<MainCamera>)>,
    mut camera: Query<&mut Transform, With<MainCamera>>,
) {
    let Ok(target) = player.single() else {
        return;
    };
    let Ok(mut camera) = camera.single_mut() else {
        return;
    };

    let t = (CAMERA_FOLLOW_RATE * time.delta_secs()).min(1.0);
    let next = camera
        .translation
        .truncate()
        .lerp(target.translation.truncate(), t);
    camera.translation.x = next.x;
    camera.translation.y = next.y;
}
