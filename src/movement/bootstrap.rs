//! Movement domain: player and sandbox-room setup.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::motor::CharacterMotor;
use crate::movement::{GameLayer, Ground, Motor, MovementConfig, Player};

pub(crate) fn spawn_player(mut commands: Commands, config: Res<MovementConfig>) {
    let motor = match CharacterMotor::new(config.tuning.clone(), config.sensor.clone()) {
        Ok(motor) => motor,
        Err(err) => panic!("movement configuration rejected: {err}"),
    };

    info!(
        "spawning player: max_speed={}, gravity={}, slope_limit={}",
        config.tuning.max_speed, config.tuning.gravity, config.tuning.slope_limit
    );

    commands.spawn((
        Player,
        Motor(motor),
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(Vec2::new(24.0, 48.0)),
            ..default()
        },
        Transform::from_xyz(0.0, 40.0, 0.0),
        (
            RigidBody::Dynamic,
            Collider::capsule(12.0, 24.0),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // the motor integrates gravity itself
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
        ),
    ));
}

/// Test geometry covering the behaviors the motor distinguishes: flat floor,
/// a walkable ramp, a ramp past the slope limit, and a ledge.
pub(crate) fn spawn_sandbox(mut commands: Commands) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let ramp_color = Color::srgb(0.5, 0.4, 0.3);
    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);

    // Floor
    commands.spawn((
        Ground,
        Sprite {
            color: ground_color,
            custom_size: Some(Vec2::new(1200.0, 40.0)),
            ..default()
        },
        Transform::from_xyz(0.0, -200.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(1200.0, 40.0),
        ground_layers,
    ));

    // Walkable ramp (30 degrees), rising to the right from the floor's edge
    commands.spawn((
        Ground,
        Sprite {
            color: ramp_color,
            custom_size: Some(Vec2::new(400.0, 40.0)),
            ..default()
        },
        Transform::from_xyz(760.0, -90.0, 0.0)
            .with_rotation(Quat::from_rotation_z(30f32.to_radians())),
        RigidBody::Static,
        Collider::rectangle(400.0, 40.0),
        ground_layers,
    ));

    // Steep ramp (60 degrees), past the slope limit: the motor refuses to
    // climb it and slides back down
    commands.spawn((
        Ground,
        Sprite {
            color: ramp_color,
            custom_size: Some(Vec2::new(400.0, 40.0)),
            ..default()
        },
        Transform::from_xyz(-720.0, -60.0, 0.0)
            .with_rotation(Quat::from_rotation_z(-60f32.to_radians())),
        RigidBody::Static,
        Collider::rectangle(400.0, 40.0),
        ground_layers,
    ));

    // Ledge platform: walking off its right edge exercises the abyss probe
    // and the ledge-drop behavior
    commands.spawn((
        Ground,
        Sprite {
            color: ramp_color,
            custom_size: Some(Vec2::new(200.0, 20.0)),
            ..default()
        },
        Transform::from_xyz(-160.0, -40.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(200.0, 20.0),
        ground_layers,
    ));
}
