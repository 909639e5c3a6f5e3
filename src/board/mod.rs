//! Board logic: circle registry, spatial lookup, drag selection, flood-fill
//! removal and the spawn cadence. Platform-free; bodies and visuals are
//! reached only through [`CircleHost`].

pub mod connectivity;
pub mod host;
pub mod registry;
pub mod selection;
pub mod spatial;
pub mod spawner;

use bevy::math::Vec2;
use rand::Rng;

use crate::core::components::GemColor;
use crate::core::config::GameConfig;

pub use connectivity::{connected_component, neighbors_of};
pub use host::{BodySpec, CircleHandle, CircleHost};
pub use registry::{CircleRecord, CircleRegistry};
pub use selection::{SelectionPhase, SelectionTracker};
pub use spatial::{HitTest, SpatialGrid};
pub use spawner::{batch_layout, Spawner};

/// Board-wide constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardRules {
    pub radius: f32,
    pub restitution: f32,
    pub hit_tolerance: f32,
    pub min_selection: usize,
    pub field_width: f32,
    pub field_height: f32,
    pub batch_count: usize,
    pub spawn_interval: f64,
}

impl Default for BoardRules {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

impl BoardRules {
    pub fn from_config(cfg: &GameConfig) -> Self {
        Self {
            radius: cfg.circles.radius,
            restitution: cfg.circles.restitution,
            hit_tolerance: cfg.circles.hit_tolerance,
            min_selection: cfg.selection.min_selection,
            field_width: cfg.field.width,
            field_height: cfg.field.height,
            batch_count: cfg.spawner.batch_count,
            spawn_interval: cfg.spawner.interval_secs,
        }
    }

    pub fn body(&self) -> BodySpec {
        BodySpec::dynamic_circle(self.radius, self.restitution)
    }

    /// Row where new batches appear: one radius below the top edge.
    pub fn spawn_y(&self) -> f32 {
        self.field_height - self.radius
    }
}

/// What a pointer release did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseOutcome<H> {
    /// Nothing was selected.
    Idle,
    /// Too few circles selected; their highlight was cleared.
    Cancelled { restored: Vec<H> },
    /// The connected component of the first selected circle was removed.
    Matched {
        color: GemColor,
        selected: usize,
        removed: Vec<H>,
    },
}

/// One play session: registry, selection and spawn timer.
#[derive(Debug, Clone)]
pub struct GameCore<H> {
    rules: BoardRules,
    registry: CircleRegistry<H>,
    selection: SelectionTracker<H>,
    spawner: Spawner,
}

impl<H: CircleHandle> GameCore<H> {
    pub fn new(rules: BoardRules) -> Self {
        Self {
            registry: CircleRegistry::new(rules.radius, rules.hit_tolerance),
            selection: SelectionTracker::default(),
            spawner: Spawner::new(rules.spawn_interval),
            rules,
        }
    }

    pub fn rules(&self) -> &BoardRules {
        &self.rules
    }

    pub fn registry(&self) -> &CircleRegistry<H> {
        &self.registry
    }

    pub fn selection(&self) -> &SelectionTracker<H> {
        &self.selection
    }

    pub fn spawner(&self) -> &Spawner {
        &self.spawner
    }

    /// Spawn a body through the host and register it.
    pub fn create_circle<C>(&mut self, host: &mut C, color: GemColor, position: Vec2) -> H
    where
        C: CircleHost<Handle = H>,
    {
        let handle = host.spawn(color, position, &self.rules.body());
        self.registry.insert(handle, color, position);
        handle
    }

    /// Remove circles from the registry and destroy their bodies. Handles that
    /// are not live are skipped, so each body is destroyed at most once.
    pub fn remove<C, I>(&mut self, host: &mut C, handles: I) -> Vec<H>
    where
        C: CircleHost<Handle = H>,
        I: IntoIterator<Item = H>,
    {
        let removed = self.registry.remove(handles);
        for h in &removed {
            host.destroy(*h);
        }
        removed
    }

    /// Physics writeback for one circle.
    pub fn sync_position(&mut self, handle: H, position: Vec2) {
        self.registry.set_position(handle, position);
    }

    fn highlight<C: CircleHost<Handle = H>>(&mut self, host: &mut C, handle: H, on: bool) {
        self.registry.set_highlighted(handle, on);
        host.set_highlighted(handle, on);
    }

    /// Returns the circle added to the selection, if any.
    pub fn pointer_down<C>(&mut self, host: &mut C, point: Vec2) -> Option<H>
    where
        C: CircleHost<Handle = H>,
    {
        let handle = self.registry.topmost_at(point)?;
        let color = self.registry.color_of(handle)?;
        if !self.selection.begin(handle, color) {
            return None;
        }
        self.highlight(host, handle, true);
        Some(handle)
    }

    /// Returns the circle added to the selection, if any.
    pub fn pointer_move<C>(&mut self, host: &mut C, point: Vec2) -> Option<H>
    where
        C: CircleHost<Handle = H>,
    {
        let handle = self.registry.topmost_at(point)?;
        let color = self.registry.color_of(handle)?;
        if !self.selection.extend(handle, color) {
            return None;
        }
        self.highlight(host, handle, true);
        Some(handle)
    }

    /// Ends the drag. The removal set is the flood fill from the first selected
    /// circle, not the dragged path; selected circles outside it stay dimmed.
    pub fn pointer_up<C>(&mut self, host: &mut C, _point: Vec2) -> ReleaseOutcome<H>
    where
        C: CircleHost<Handle = H>,
    {
        let color = self.selection.pinned_color();
        let selected = self.selection.take();
        let (Some(first), Some(color)) = (selected.first().copied(), color) else {
            return ReleaseOutcome::Idle;
        };

        if selected.len() < self.rules.min_selection {
            for h in &selected {
                self.highlight(host, *h, false);
            }
            return ReleaseOutcome::Cancelled { restored: selected };
        }

        let component = connected_component(&self.registry, first);
        let removed = self.remove(host, component);
        ReleaseOutcome::Matched {
            color,
            selected: selected.len(),
            removed,
        }
    }

    /// Per-frame tick. Spawns one batch when the interval has elapsed and
    /// returns the new handles.
    pub fn tick<C, R>(&mut self, host: &mut C, rng: &mut R, now: f64) -> Vec<H>
    where
        C: CircleHost<Handle = H>,
        R: Rng + ?Sized,
    {
        if !self.spawner.poll(now) {
            return Vec::new();
        }
        let layout = batch_layout(
            self.rules.field_width,
            self.rules.batch_count,
            self.rules.radius * 2.0,
            self.rules.spawn_y(),
        );
        layout
            .into_iter()
            .map(|pos| {
                let color: GemColor = rng.gen();
                self.create_circle(host, color, pos)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::host::fake::FakeHost;
    use super::*;
    use crate::core::components::GemColor::*;
    use rand::{rngs::StdRng, SeedableRng};

    const R: f32 = 50.0;

    fn at(col: i32, row: i32) -> Vec2 {
        Vec2::new(R + col as f32 * 2.0 * R, R + row as f32 * 2.0 * R)
    }

    fn core() -> GameCore<u32> {
        GameCore::new(BoardRules::default())
    }

    #[test]
    fn drag_rejects_other_color() {
        let mut host = FakeHost::default();
        let mut g = core();
        let a = g.create_circle(&mut host, Red, at(0, 0));
        let b = g.create_circle(&mut host, Red, at(1, 0));
        let c = g.create_circle(&mut host, Blue, at(2, 0));
        assert_eq!(g.pointer_down(&mut host, at(0, 0)), Some(a));
        assert_eq!(g.pointer_move(&mut host, at(1, 0)), Some(b));
        assert_eq!(g.pointer_move(&mut host, at(2, 0)), None);
        assert_eq!(g.selection().members(), &[a, b]);
        assert!(!host.highlighted.contains_key(&c));
        assert!(g.registry().is_highlighted(a));
    }

    #[test]
    fn release_three_connected_removes_all() {
        let mut host = FakeHost::default();
        let mut g = core();
        let hs: Vec<u32> = (0..3)
            .map(|i| g.create_circle(&mut host, Green, at(i, 0)))
            .collect();
        g.pointer_down(&mut host, at(0, 0));
        g.pointer_move(&mut host, at(1, 0));
        g.pointer_move(&mut host, at(2, 0));
        let (color, selected, mut removed) = match g.pointer_up(&mut host, at(2, 0)) {
            ReleaseOutcome::Matched { color, selected, removed } => (color, selected, removed),
            other => panic!("expected a match, got {other:?}"),
        };
        removed.sort_unstable();
        assert_eq!((color, selected), (Green, 3));
        assert_eq!(removed, hs);
        assert!(g.registry().is_empty());
        assert_eq!(host.destroy_calls, 3);
        assert_eq!(g.selection().phase(), SelectionPhase::Idle);
    }

    #[test]
    fn release_two_restores_highlight() {
        let mut host = FakeHost::default();
        let mut g = core();
        let a = g.create_circle(&mut host, Red, at(0, 0));
        let b = g.create_circle(&mut host, Red, at(1, 0));
        g.pointer_down(&mut host, at(0, 0));
        g.pointer_move(&mut host, at(1, 0));
        assert_eq!(
            g.pointer_up(&mut host, at(1, 0)),
            ReleaseOutcome::Cancelled { restored: vec![a, b] }
        );
        assert!(host.destroyed.is_empty());
        assert!(!host.is_highlighted(a) && !host.is_highlighted(b));
        assert_eq!(g.registry().len(), 2);
    }

    #[test]
    fn removal_follows_flood_fill_not_path() {
        let mut host = FakeHost::default();
        let mut g = core();
        // connected red row plus a distant red circle reached by dragging
        let row: Vec<u32> = (0..4).map(|i| g.create_circle(&mut host, Red, at(i, 0))).collect();
        let far = g.create_circle(&mut host, Red, at(6, 4));
        g.pointer_down(&mut host, at(0, 0));
        g.pointer_move(&mut host, at(6, 4));
        g.pointer_move(&mut host, at(1, 0));
        let ReleaseOutcome::Matched { mut removed, selected, .. } = g.pointer_up(&mut host, at(1, 0)) else {
            panic!("expected a match");
        };
        removed.sort_unstable();
        assert_eq!(selected, 3);
        assert_eq!(removed, row, "unselected but connected circles go too");
        assert!(g.registry().contains(far));
        assert!(host.is_highlighted(far), "dragged survivor keeps its dim");
        assert!(g.registry().is_highlighted(far));
    }

    #[test]
    fn second_down_adds_other_color() {
        let mut host = FakeHost::default();
        let mut g = core();
        let a = g.create_circle(&mut host, Red, at(0, 0));
        let b = g.create_circle(&mut host, Blue, at(3, 3));
        assert_eq!(g.pointer_down(&mut host, at(0, 0)), Some(a));
        assert_eq!(g.pointer_down(&mut host, at(3, 3)), Some(b));
        assert_eq!(g.selection().members(), &[a, b]);
        assert_eq!(g.selection().pinned_color(), Some(Red));
        assert!(host.is_highlighted(b));
    }

    #[test]
    fn release_without_selection_is_idle() {
        let mut host = FakeHost::default();
        let mut g = core();
        g.create_circle(&mut host, Red, at(0, 0));
        assert_eq!(g.pointer_down(&mut host, at(5, 5)), None);
        assert_eq!(g.pointer_move(&mut host, at(0, 0)), None);
        assert_eq!(g.pointer_up(&mut host, at(0, 0)), ReleaseOutcome::Idle);
    }

    #[test]
    fn tick_spawns_one_batch_per_interval() {
        let mut host = FakeHost::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut g = core();
        let t0 = 0.5;
        assert!(g.tick(&mut host, &mut rng, t0).is_empty());
        assert!(g.tick(&mut host, &mut rng, t0 + 1.0).is_empty());
        let batch = g.tick(&mut host, &mut rng, t0 + 2.5);
        assert_eq!(batch.len(), 6);
        assert_eq!(g.registry().len(), 6);
        assert!(g.tick(&mut host, &mut rng, t0 + 3.0).is_empty());

        let rules = *g.rules();
        let expected = batch_layout(rules.field_width, 6, rules.radius * 2.0, rules.spawn_y());
        for ((_, _, pos, body), want) in host.spawned.iter().zip(expected) {
            assert_eq!(*pos, want);
            assert_eq!(body.restitution, 0.5);
            assert!(body.lock_rotation);
        }
    }
}
