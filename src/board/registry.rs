use bevy::math::Vec2;
use smallvec::SmallVec;
use std::collections::HashMap;

use super::host::CircleHandle;
use super::spatial::{Cell, HitTest, SpatialGrid};
use crate::core::components::GemColor;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleRecord {
    pub color: GemColor,
    pub position: Vec2,
    pub highlighted: bool,
    /// Registration order; later circles draw on top.
    pub seq: u64,
    cell: Cell,
}

/// Owns the set of live circles and keeps the spatial grid in step with it.
#[derive(Debug, Clone)]
pub struct CircleRegistry<H> {
    records: HashMap<H, CircleRecord>,
    grid: SpatialGrid<H>,
    radius: f32,
    hit_tolerance: f32,
    next_seq: u64,
}

impl<H: CircleHandle> CircleRegistry<H> {
    pub fn new(radius: f32, hit_tolerance: f32) -> Self {
        Self {
            records: HashMap::new(),
            grid: SpatialGrid::new(radius * 2.0),
            radius,
            hit_tolerance: hit_tolerance.max(0.0),
            next_seq: 0,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn hit_tolerance(&self) -> f32 {
        self.hit_tolerance
    }

    /// Register a circle the host just created. Re-inserting a live handle
    /// replaces its record.
    pub fn insert(&mut self, handle: H, color: GemColor, position: Vec2) {
        if let Some(old) = self.records.remove(&handle) {
            self.grid.remove(handle, old.cell);
        }
        let cell = self.grid.insert(handle, position);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.records.insert(
            handle,
            CircleRecord {
                color,
                position,
                highlighted: false,
                seq,
                cell,
            },
        );
    }

    /// Remove each handle at most once. Returns the handles that were live.
    pub fn remove<I>(&mut self, handles: I) -> Vec<H>
    where
        I: IntoIterator<Item = H>,
    {
        let mut removed = Vec::new();
        for h in handles {
            if let Some(rec) = self.records.remove(&h) {
                self.grid.remove(h, rec.cell);
                removed.push(h);
            }
        }
        removed
    }

    pub fn color_of(&self, handle: H) -> Option<GemColor> {
        self.records.get(&handle).map(|r| r.color)
    }

    pub fn position_of(&self, handle: H) -> Option<Vec2> {
        self.records.get(&handle).map(|r| r.position)
    }

    /// Live handles in creation order.
    pub fn all_handles(&self) -> Vec<H> {
        let mut v: Vec<(u64, H)> = self.records.iter().map(|(h, r)| (r.seq, *h)).collect();
        v.sort_unstable_by_key(|(seq, _)| *seq);
        v.into_iter().map(|(_, h)| h).collect()
    }

    pub fn contains(&self, handle: H) -> bool {
        self.records.contains_key(&handle)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Physics sync. Unknown handles are ignored.
    pub fn set_position(&mut self, handle: H, position: Vec2) {
        if let Some(rec) = self.records.get_mut(&handle) {
            if rec.position != position {
                rec.position = position;
                rec.cell = self.grid.relocate(handle, rec.cell, position);
            }
        }
    }

    pub fn set_highlighted(&mut self, handle: H, highlighted: bool) {
        if let Some(rec) = self.records.get_mut(&handle) {
            rec.highlighted = highlighted;
        }
    }

    pub fn is_highlighted(&self, handle: H) -> bool {
        self.records.get(&handle).is_some_and(|r| r.highlighted)
    }

    fn occupies(&self, rec: &CircleRecord, point: Vec2) -> bool {
        let reach = self.radius + self.hit_tolerance;
        rec.position.distance_squared(point) <= reach * reach
    }
}

impl<H: CircleHandle> HitTest for CircleRegistry<H> {
    type Handle = H;

    fn topmost_at(&self, point: Vec2) -> Option<H> {
        self.grid
            .candidates_near(point)
            .filter_map(|h| self.records.get(&h).map(|r| (h, r)))
            .filter(|(_, r)| self.occupies(r, point))
            .max_by_key(|(_, r)| r.seq)
            .map(|(h, _)| h)
    }

    fn circles_at(&self, point: Vec2) -> SmallVec<[H; 4]> {
        self.grid
            .candidates_near(point)
            .filter(|h| self.records.get(h).is_some_and(|r| self.occupies(r, point)))
            .collect()
    }
}
