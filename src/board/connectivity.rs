//! Geometric neighbor probing and same-color flood fill.
//!
//! Circles settle under physics, so adjacency is never stored. A circle at P
//! with radius R probes P±(2R,0) and P±(0,2R); whatever occupies a probe point
//! right now is a neighbor.

use bevy::math::Vec2;
use smallvec::SmallVec;
use std::collections::{HashSet, VecDeque};

use super::host::CircleHandle;
use super::registry::CircleRegistry;
use super::spatial::HitTest;

/// The four cardinal probe points for a circle centred at `center`.
#[inline]
pub fn probe_points(center: Vec2, radius: f32) -> [Vec2; 4] {
    let pitch = radius * 2.0;
    [
        center - Vec2::new(pitch, 0.0),
        center + Vec2::new(pitch, 0.0),
        center - Vec2::new(0.0, pitch),
        center + Vec2::new(0.0, pitch),
    ]
}

/// Circles occupying any cardinal probe point of `handle`, any color.
/// Empty for unknown handles.
pub fn neighbors_of<H: CircleHandle>(registry: &CircleRegistry<H>, handle: H) -> SmallVec<[H; 8]> {
    let mut out: SmallVec<[H; 8]> = SmallVec::new();
    let Some(center) = registry.position_of(handle) else {
        return out;
    };
    for probe in probe_points(center, registry.radius()) {
        for h in registry.circles_at(probe) {
            if h != handle && !out.contains(&h) {
                out.push(h);
            }
        }
    }
    out
}

/// Maximal same-colored component reachable from `seed` through cardinal
/// adjacency, in breadth-first visit order (seed first). Empty if `seed` is
/// not registered.
pub fn connected_component<H: CircleHandle>(registry: &CircleRegistry<H>, seed: H) -> Vec<H> {
    let Some(target) = registry.color_of(seed) else {
        return Vec::new();
    };
    let mut visited: HashSet<H> = HashSet::new();
    let mut order = Vec::new();
    let mut worklist = VecDeque::from([seed]);

    while let Some(node) = worklist.pop_front() {
        if !visited.insert(node) {
            continue;
        }
        order.push(node);
        for n in neighbors_of(registry, node) {
            if !visited.contains(&n) && registry.color_of(n) == Some(target) {
                worklist.push_back(n);
            }
        }
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::components::GemColor::{self, *};

    const R: f32 = 50.0;

    /// Lay circles on the implicit 2R grid: (col,row) -> center.
    fn at(col: i32, row: i32) -> Vec2 {
        Vec2::new(R + col as f32 * 2.0 * R, R + row as f32 * 2.0 * R)
    }

    fn board(cells: &[(u32, i32, i32, GemColor)]) -> CircleRegistry<u32> {
        let mut r = CircleRegistry::new(R, 1.0);
        for &(h, c, row, color) in cells {
            r.insert(h, color, at(c, row));
        }
        r
    }

    fn sorted(mut v: Vec<u32>) -> Vec<u32> {
        v.sort_unstable();
        v
    }

    #[test]
    fn cardinal_neighbors_are_symmetric() {
        let r = board(&[(1, 0, 0, Red), (2, 1, 0, Red), (3, 1, 1, Red), (4, 3, 3, Red)]);
        assert!(neighbors_of(&r, 1).contains(&2));
        assert!(neighbors_of(&r, 2).contains(&1));
        assert!(neighbors_of(&r, 2).contains(&3));
        assert!(neighbors_of(&r, 3).contains(&2));
        // diagonal is not adjacent
        assert!(!neighbors_of(&r, 1).contains(&3));
        assert!(neighbors_of(&r, 4).is_empty());
    }

    #[test]
    fn settled_offsets_still_count() {
        let mut r = CircleRegistry::new(R, 1.0);
        r.insert(1u32, Red, Vec2::new(100.0, 50.0));
        // resting slightly lower and further than exact pitch
        r.insert(2u32, Red, Vec2::new(205.0, 44.0));
        assert_eq!(neighbors_of(&r, 1).into_vec(), vec![2]);
        assert_eq!(neighbors_of(&r, 2).into_vec(), vec![1]);
    }

    #[test]
    fn flood_fill_is_maximal_and_single_colored() {
        // R R B
        // R B B
        // R R R
        let r = board(&[
            (1, 0, 2, Red),
            (2, 1, 2, Red),
            (3, 2, 2, Blue),
            (4, 0, 1, Red),
            (5, 1, 1, Blue),
            (6, 2, 1, Blue),
            (7, 0, 0, Red),
            (8, 1, 0, Red),
            (9, 2, 0, Red),
        ]);
        let comp = connected_component(&r, 2);
        assert_eq!(comp[0], 2, "seed is visited first");
        assert_eq!(sorted(comp.clone()), vec![1, 2, 4, 7, 8, 9]);
        for h in &comp {
            assert_eq!(r.color_of(*h), Some(Red));
            for n in neighbors_of(&r, *h) {
                if r.color_of(n) == Some(Red) {
                    assert!(comp.contains(&n), "component not closed at {n}");
                }
            }
        }
        assert_eq!(sorted(connected_component(&r, 6)), vec![3, 5, 6]);
    }

    #[test]
    fn lone_seed_returns_itself() {
        let r = board(&[(1, 0, 0, Green), (2, 1, 0, Blue)]);
        assert_eq!(connected_component(&r, 1), vec![1]);
        assert!(connected_component(&r, 42).is_empty());
    }
}
