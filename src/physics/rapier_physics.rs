use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::config::GameConfig;

/// Static edge loop around the play field.
#[derive(Component, Debug, Clone, Copy)]
pub struct FieldBounds;

/// Half-thickness of the boundary walls, in field units.
const WALL_HALF: f32 = 25.0;

pub struct PhysicsSetupPlugin; // our wrapper to configure Rapier & arena

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        // pixels_per_meter(1.0): field units are physics units, gravity is given directly.
        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(1.0))
            .add_systems(Startup, (configure_gravity, spawn_field_bounds));
        let debug = app
            .world()
            .get_resource::<GameConfig>()
            .is_some_and(|c| c.rapier_debug);
        if debug {
            app.add_plugins(RapierDebugRenderPlugin::default());
        }
    }
}

fn configure_gravity(mut rapier_cfg: Query<&mut RapierConfiguration>, cfg: Res<GameConfig>) {
    for mut rc in rapier_cfg.iter_mut() {
        rc.gravity = Vec2::new(0.0, cfg.gravity.y);
    }
}

/// Wall placement for a `width` x `height` field: (center, half extents).
pub fn wall_layout(width: f32, height: f32) -> [(Vec2, Vec2); 4] {
    let (hw, hh) = (width * 0.5, height * 0.5);
    [
        (Vec2::new(hw, -WALL_HALF), Vec2::new(hw + 2.0 * WALL_HALF, WALL_HALF)), // floor
        (Vec2::new(hw, height + WALL_HALF), Vec2::new(hw + 2.0 * WALL_HALF, WALL_HALF)), // ceiling
        (Vec2::new(-WALL_HALF, hh), Vec2::new(WALL_HALF, hh)), // left
        (Vec2::new(width + WALL_HALF, hh), Vec2::new(WALL_HALF, hh)), // right
    ]
}

fn spawn_field_bounds(mut commands: Commands, cfg: Res<GameConfig>) {
    for (center, half) in wall_layout(cfg.field.width, cfg.field.height) {
        commands.spawn((
            FieldBounds,
            RigidBody::Fixed,
            Collider::cuboid(half.x, half.y),
            Transform::from_translation(center.extend(0.0)),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walls_enclose_field_without_overlapping_it() {
        let (w, h) = (750.0, 1334.0);
        for (center, half) in wall_layout(w, h) {
            let min = center - half;
            let max = center + half;
            let overlaps_x = min.x < w && max.x > 0.0;
            let overlaps_y = min.y < h && max.y > 0.0;
            assert!(!(overlaps_x && overlaps_y), "wall {center:?} intrudes into field");
        }
        let [floor, ceiling, left, right] = wall_layout(w, h);
        assert_eq!(floor.0.y + floor.1.y, 0.0);
        assert_eq!(ceiling.0.y - ceiling.1.y, h);
        assert_eq!(left.0.x + left.1.x, 0.0);
        assert_eq!(right.0.x - right.1.x, w);
    }
}
