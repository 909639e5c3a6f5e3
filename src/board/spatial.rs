//! Uniform hash grid used for point queries.
//!
//! Cell size is the circle diameter, so every circle whose footprint can
//! contain a point lives in the 3x3 block of cells around that point (as long
//! as the hit tolerance stays below one radius).

use bevy::math::Vec2;
use smallvec::SmallVec;
use std::collections::HashMap;

use super::host::CircleHandle;

/// Point queries against the circles currently on the field.
pub trait HitTest {
    type Handle: CircleHandle;

    /// The circle drawn on top at `point`, if any.
    fn topmost_at(&self, point: Vec2) -> Option<Self::Handle>;

    /// Every circle whose footprint contains `point`.
    fn circles_at(&self, point: Vec2) -> SmallVec<[Self::Handle; 4]>;
}

#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub struct Cell(pub i32, pub i32);

#[derive(Debug, Clone)]
pub struct SpatialGrid<H> {
    inv_cell: f32,
    cells: HashMap<Cell, SmallVec<[H; 4]>>,
}

impl<H: CircleHandle> SpatialGrid<H> {
    pub fn new(cell_size: f32) -> Self {
        Self {
            inv_cell: 1.0 / cell_size.max(f32::EPSILON),
            cells: HashMap::new(),
        }
    }

    pub fn cell_of(&self, pos: Vec2) -> Cell {
        Cell(
            (pos.x * self.inv_cell).floor() as i32,
            (pos.y * self.inv_cell).floor() as i32,
        )
    }

    pub fn insert(&mut self, handle: H, pos: Vec2) -> Cell {
        let cell = self.cell_of(pos);
        self.cells.entry(cell).or_default().push(handle);
        cell
    }

    pub fn remove(&mut self, handle: H, cell: Cell) {
        if let Some(list) = self.cells.get_mut(&cell) {
            list.retain(|h| *h != handle);
            if list.is_empty() {
                self.cells.remove(&cell);
            }
        }
    }

    /// Move `handle` from `old` to the cell containing `pos`. Returns the new cell.
    pub fn relocate(&mut self, handle: H, old: Cell, pos: Vec2) -> Cell {
        let new = self.cell_of(pos);
        if new != old {
            self.remove(handle, old);
            self.cells.entry(new).or_default().push(handle);
        }
        new
    }

    /// Handles bucketed in the 3x3 cells around `pos`. A superset of the true
    /// occupants; callers do the exact distance check.
    pub fn candidates_near(&self, pos: Vec2) -> impl Iterator<Item = H> + '_ {
        let Cell(cx, cy) = self.cell_of(pos);
        (-1..=1)
            .flat_map(move |dx| (-1..=1).map(move |dy| Cell(cx + dx, cy + dy)))
            .filter_map(|c| self.cells.get(&c))
            .flat_map(|list| list.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.cells.values().map(|l| l.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
