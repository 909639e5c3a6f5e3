//! Central system ordering labels to make the per-frame sequence explicit.
//! Stages (high-level, all in `Update`):
//! 1. BoardSync (physics transforms -> board registry)
//! 2. PointerInput (mouse / touch -> `PointerEvent`)
//! 3. Selection (pointer events -> board selection / removal)
//! 4. Spawn (timer driven batch spawning)
//!
//! Rapier steps in its own schedule afterwards.
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct BoardSyncSet; // registry positions refreshed before any lookup

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PointerInputSet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct SelectionSet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct SpawnSet;

/// Configure the ordering of all board sets. Safe to call from several plugins.
pub fn configure_board_sets(app: &mut App) {
    app.configure_sets(
        Update,
        (BoardSyncSet, PointerInputSet, SelectionSet, SpawnSet).chain(),
    );
}
