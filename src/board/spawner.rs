use bevy::math::Vec2;

/// Fixed-cadence trigger. Fires when strictly more than `interval` seconds
/// separate `now` from the previous spawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spawner {
    last_spawn: f64,
    interval: f64,
}

impl Spawner {
    pub fn new(interval: f64) -> Self {
        Self {
            last_spawn: 0.0,
            interval,
        }
    }

    pub fn last_spawn(&self) -> f64 {
        self.last_spawn
    }

    /// Returns true (and records `now`) when a batch is due.
    pub fn poll(&mut self, now: f64) -> bool {
        if now - self.last_spawn > self.interval {
            self.last_spawn = now;
            true
        } else {
            false
        }
    }
}

/// Centers for a row of `count` circles spread evenly across `field_width`:
/// `spacing = (W - N*D) / (N+1)`, `x_i = spacing + D/2 + i*(D + spacing)`.
pub fn batch_layout(field_width: f32, count: usize, diameter: f32, y: f32) -> Vec<Vec2> {
    let n = count as f32;
    let spacing = (field_width - n * diameter) / (n + 1.0);
    (0..count)
        .map(|i| Vec2::new(spacing + diameter / 2.0 + i as f32 * (diameter + spacing), y))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_past_interval() {
        let t0 = 10.0;
        let mut s = Spawner::new(2.0);
        assert!(s.poll(t0), "first tick after start-up is already past 2s");
        assert!(!s.poll(t0 + 1.0));
        assert!(s.poll(t0 + 2.5));
        assert_eq!(s.last_spawn(), t0 + 2.5);
    }

    #[test]
    fn exact_interval_does_not_fire() {
        let mut s = Spawner::new(2.0);
        assert!(!s.poll(2.0));
        assert!(s.poll(2.001));
    }

    #[test]
    fn skips_missed_intervals() {
        let mut s = Spawner::new(2.0);
        assert!(s.poll(100.0));
        assert!(!s.poll(101.9));
        assert!(s.poll(102.1));
    }

    #[test]
    fn layout_matches_even_spacing() {
        let (w, n, d) = (750.0, 6, 100.0);
        let xs = batch_layout(w, n, d, 1284.0);
        let spacing = (w - n as f32 * d) / (n as f32 + 1.0);
        assert_eq!(xs.len(), n);
        for (i, p) in xs.iter().enumerate() {
            let expected = spacing + d / 2.0 + i as f32 * (d + spacing);
            assert!((p.x - expected).abs() < 1e-4);
            assert_eq!(p.y, 1284.0);
        }
        // symmetric margins
        assert!((xs[0].x - d / 2.0 - (w - xs[n - 1].x - d / 2.0)).abs() < 1e-3);
    }

    #[test]
    fn empty_batch() {
        assert!(batch_layout(750.0, 0, 100.0, 0.0).is_empty());
    }
}
