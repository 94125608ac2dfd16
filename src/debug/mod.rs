//! Debug domain: velocity readout and probe gizmos for dev-tools builds.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::systems::SpatialCaster;
use crate::movement::{Motor, MovementConfig, Player};

/// Resource tracking debug overlay state
#[derive(Resource, Debug)]
pub struct DebugState {
    /// Whether the overlay and gizmos are visible
    pub overlay_visible: bool,
}

impl Default for DebugState {
    fn default() -> Self {
        Self {
            overlay_visible: true,
        }
    }
}

/// Marker for the velocity readout text
#[derive(Component, Debug)]
struct VelocityReadout;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Startup, spawn_velocity_readout)
            .add_systems(
                Update,
                (toggle_overlay, update_velocity_readout, draw_probe_gizmos),
            );
    }
}

fn spawn_velocity_readout(mut commands: Commands) {
    commands.spawn((
        VelocityReadout,
        Text::new("Velocity: --"),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}

/// Toggle the overlay with F1
fn toggle_overlay(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut state: ResMut<DebugState>,
    mut readout: Query<&mut Visibility, With<VelocityReadout>>,
) {
    if !keyboard.just_pressed(KeyCode::F1) {
        return;
    }

    state.overlay_visible = !state.overlay_visible;
    for mut visibility in &mut readout {
        *visibility = if state.overlay_visible {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}

fn update_velocity_readout(
    state: Res<DebugState>,
    player: Query<&Motor, With<Player>>,
    mut readout: Query<&mut Text, With<VelocityReadout>>,
) {
    if !state.overlay_visible {
        return;
    }
    let Ok(motor) = player.single() else {
        return;
    };
    let Ok(mut text) = readout.single_mut() else {
        return;
    };

    let velocity = motor.0.velocity();
    **text = format!("Velocity: {:.2}, {:.2}", velocity.x, velocity.y);
}

/// Draws both probe circles at their cast end positions, colored by what a
/// fresh query sees, plus the ground normal at the contact point.
fn draw_probe_gizmos(
    state: Res<DebugState>,
    config: Res<MovementConfig>,
    spatial_query: SpatialQuery,
    player: Query<&Transform, With<Player>>,
    mut gizmos: Gizmos,
) {
    if !state.overlay_visible {
        return;
    }
    let Ok(transform) = player.single() else {
        return;
    };

    let caster = SpatialCaster {
        query: &spatial_query,
    };
    let position = transform.translation.truncate();
    let check = config
        .sensor
        .check_ground(&caster, position, Vec2::NEG_Y, config.tuning.slope_limit);
    let probes = config.sensor.config();

    let ground_color = if check.on_ground {
        Color::srgba(1.0, 0.0, 0.0, 0.5)
    } else {
        Color::srgba(0.0, 1.0, 0.0, 0.5)
    };
    gizmos.circle_2d(
        position + Vec2::from(probes.ground_offset) + Vec2::NEG_Y * probes.ground_distance,
        probes.ground_radius,
        ground_color,
    );

    let abyss_color = if check.over_abyss {
        Color::srgba(0.0, 1.0, 1.0, 0.5)
    } else {
        Color::srgba(1.0, 0.0, 1.0, 0.5)
    };
    gizmos.circle_2d(
        position + Vec2::from(probes.abyss_offset) + Vec2::NEG_Y * probes.abyss_distance,
        probes.abyss_radius,
        abyss_color,
    );

    if check.on_ground {
        gizmos.line_2d(
            check.point,
            check.point + check.normal * 24.0,
            Color::srgb(1.0, 1.0, 0.3),
        );
    }
}
