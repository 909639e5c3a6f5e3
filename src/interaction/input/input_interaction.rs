use bevy::prelude::*;

use crate::core::system::system_order::{configure_board_sets, PointerInputSet};

/// Normalized pointer input in field coordinates. Mouse and touch both map
/// onto this; a cancelled touch is reported as `Up`.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Vec2),
    Move(Vec2),
    Up(Vec2),
}

/// Last known mouse position while the left button is held.
#[derive(Resource, Default, Debug)]
pub struct MouseDrag {
    pub last_pos: Option<Vec2>,
}

pub struct PointerInputPlugin;

impl Plugin for PointerInputPlugin {
    fn build(&self, app: &mut App) {
        configure_board_sets(app);
        app.add_event::<PointerEvent>()
            .init_resource::<MouseDrag>()
            .add_systems(
                Update,
                (emit_touch_events, emit_mouse_events)
                    .chain()
                    .in_set(PointerInputSet),
            );
    }
}

fn screen_to_field(camera_q: &Query<(&Camera, &GlobalTransform)>, screen_pos: Vec2) -> Option<Vec2> {
    let (camera, cam_tf) = camera_q.iter().next()?;
    camera.viewport_to_world_2d(cam_tf, screen_pos).ok()
}

fn emit_touch_events(
    touches: Res<Touches>,
    camera_q: Query<(&Camera, &GlobalTransform)>,
    mut ew: EventWriter<PointerEvent>,
) {
    for touch in touches.iter_just_pressed() {
        if let Some(p) = screen_to_field(&camera_q, touch.position()) {
            ew.write(PointerEvent::Down(p));
        }
    }
    for touch in touches.iter() {
        if touches.just_pressed(touch.id()) || touch.delta() == Vec2::ZERO {
            continue;
        }
        if let Some(p) = screen_to_field(&camera_q, touch.position()) {
            ew.write(PointerEvent::Move(p));
        }
    }
    for touch in touches
        .iter_just_released()
        .chain(touches.iter_just_canceled())
    {
        let p = screen_to_field(&camera_q, touch.position()).unwrap_or_default();
        ew.write(PointerEvent::Up(p));
    }
}

fn emit_mouse_events(
    buttons: Res<ButtonInput<MouseButton>>,
    windows_q: Query<&Window>,
    camera_q: Query<(&Camera, &GlobalTransform)>,
    mut drag: ResMut<MouseDrag>,
    mut ew: EventWriter<PointerEvent>,
) {
    let Ok(window) = windows_q.single() else {
        return;
    };
    let cursor = window
        .cursor_position()
        .and_then(|c| screen_to_field(&camera_q, c));

    if buttons.just_pressed(MouseButton::Left) {
        if let Some(p) = cursor {
            ew.write(PointerEvent::Down(p));
        }
        drag.last_pos = cursor;
    } else if buttons.pressed(MouseButton::Left) {
        if let Some(p) = cursor {
            if drag.last_pos != Some(p) {
                ew.write(PointerEvent::Move(p));
                drag.last_pos = Some(p);
            }
        }
    }
    if buttons.just_released(MouseButton::Left) {
        // cursor may have left the window; release still ends the selection
        let p = cursor.or(drag.last_pos).unwrap_or_default();
        ew.write(PointerEvent::Up(p));
        drag.last_pos = None;
    }
}
