use bevy::prelude::*;

use crate::board::ReleaseOutcome;
use crate::core::components::GemColor;
use crate::core::system::system_order::{configure_board_sets, SelectionSet};
use crate::gameplay::spawn::EcsCircleHost;
use crate::gameplay::state::{Board, BoardStats};
use crate::interaction::input::PointerEvent;

/// A release that met the selection threshold. `removed` is the connected
/// component of the first selected circle.
#[derive(Event, Debug, Clone)]
pub struct CirclesMatched {
    pub color: GemColor,
    pub selected: usize,
    pub removed: Vec<Entity>,
}

/// A release below the threshold; the listed circles lost their highlight.
#[derive(Event, Debug, Clone)]
pub struct SelectionCancelled {
    pub restored: Vec<Entity>,
}

pub struct SelectionPlugin;

impl Plugin for SelectionPlugin {
    fn build(&self, app: &mut App) {
        configure_board_sets(app);
        app.add_event::<PointerEvent>()
            .add_event::<CirclesMatched>()
            .add_event::<SelectionCancelled>()
            .add_systems(Update, apply_pointer_events.in_set(SelectionSet));
    }
}

/// Feed pointer events to the board in arrival order.
pub fn apply_pointer_events(
    mut events: EventReader<PointerEvent>,
    mut board: ResMut<Board>,
    mut host: EcsCircleHost,
    mut stats: ResMut<BoardStats>,
    mut matched_ew: EventWriter<CirclesMatched>,
    mut cancelled_ew: EventWriter<SelectionCancelled>,
) {
    for ev in events.read() {
        match *ev {
            PointerEvent::Down(p) => {
                if let Some(e) = board.pointer_down(&mut host, p) {
                    debug!(entity = ?e, x = p.x, y = p.y, "selection started");
                }
            }
            PointerEvent::Move(p) => {
                board.pointer_move(&mut host, p);
            }
            PointerEvent::Up(p) => match board.pointer_up(&mut host, p) {
                ReleaseOutcome::Idle => {}
                ReleaseOutcome::Cancelled { restored } => {
                    stats.cancelled += 1;
                    debug!(count = restored.len(), "selection too short, restored");
                    cancelled_ew.write(SelectionCancelled { restored });
                }
                ReleaseOutcome::Matched {
                    color,
                    selected,
                    removed,
                } => {
                    stats.matches += 1;
                    stats.circles_removed += removed.len() as u32;
                    debug!(
                        ?color,
                        selected,
                        removed = removed.len(),
                        remaining = board.registry().len(),
                        "circles matched"
                    );
                    matched_ew.write(CirclesMatched {
                        color,
                        selected,
                        removed,
                    });
                }
            },
        }
    }
}
