use bevy::prelude::*;
use bevy::render::camera::ScalingMode;

use crate::core::config::GameConfig;

/// Marker for the single 2D camera looking at the play field.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct FieldCamera;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera);
    }
}

/// Field coordinates are world coordinates: origin bottom-left, so the camera
/// sits at the field centre and scales to keep the whole field visible.
fn setup_camera(mut commands: Commands, cfg: Res<GameConfig>) {
    let field = cfg.field;
    commands.spawn((
        Camera2d,
        FieldCamera,
        Projection::Orthographic(OrthographicProjection {
            scaling_mode: ScalingMode::AutoMin {
                min_width: field.width,
                min_height: field.height,
            },
            ..OrthographicProjection::default_2d()
        }),
        Transform::from_xyz(field.width * 0.5, field.height * 0.5, 0.0),
    ));
}
