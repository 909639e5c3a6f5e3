use crate::core::components::GemColor;

use super::host::CircleHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    Idle,
    Selecting,
}

/// In-progress drag path. The first member pins the color that moves must
/// match; a further pointer-down appends any circle. Members are unique.
#[derive(Debug, Clone)]
pub struct SelectionTracker<H> {
    path: Vec<H>,
    pinned: Option<GemColor>,
}

impl<H> Default for SelectionTracker<H> {
    fn default() -> Self {
        Self {
            path: Vec::new(),
            pinned: None,
        }
    }
}

impl<H: CircleHandle> SelectionTracker<H> {
    pub fn phase(&self) -> SelectionPhase {
        if self.path.is_empty() {
            SelectionPhase::Idle
        } else {
            SelectionPhase::Selecting
        }
    }

    pub fn members(&self) -> &[H] {
        &self.path
    }

    pub fn first(&self) -> Option<H> {
        self.path.first().copied()
    }

    pub fn pinned_color(&self) -> Option<GemColor> {
        self.pinned
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn contains(&self, handle: H) -> bool {
        self.path.contains(&handle)
    }

    /// Pointer-down on a circle. Appends it unless already selected; only the
    /// first member pins the color. Returns true if appended.
    pub fn begin(&mut self, handle: H, color: GemColor) -> bool {
        if self.contains(handle) {
            return false;
        }
        self.pinned.get_or_insert(color);
        self.path.push(handle);
        true
    }

    /// Pointer-move onto a circle. Only color is checked, never adjacency.
    pub fn extend(&mut self, handle: H, color: GemColor) -> bool {
        if self.pinned != Some(color) || self.contains(handle) {
            return false;
        }
        self.path.push(handle);
        true
    }

    /// Empty the selection and return what it held, back to idle.
    pub fn take(&mut self) -> Vec<H> {
        self.pinned = None;
        std::mem::take(&mut self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::components::GemColor::*;

    #[test]
    fn first_member_pins_color() {
        let mut s = SelectionTracker::<u32>::default();
        assert_eq!(s.phase(), SelectionPhase::Idle);
        assert!(s.begin(1, Red));
        assert_eq!(s.phase(), SelectionPhase::Selecting);
        assert!(s.extend(2, Red));
        assert!(!s.extend(3, Blue));
        assert_eq!(s.members(), &[1, 2]);
        assert_eq!(s.pinned_color(), Some(Red));
    }

    #[test]
    fn duplicates_are_ignored() {
        let mut s = SelectionTracker::<u32>::default();
        assert!(s.begin(1, Green));
        assert!(!s.begin(1, Green));
        assert!(!s.extend(1, Green));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn extend_without_selection_is_noop() {
        let mut s = SelectionTracker::<u32>::default();
        assert!(!s.extend(4, Red));
        assert!(s.is_empty());
    }

    #[test]
    fn second_down_appends_any_color() {
        let mut s = SelectionTracker::<u32>::default();
        s.begin(1, Red);
        assert!(s.begin(2, Blue));
        assert!(!s.begin(2, Blue));
        assert_eq!(s.members(), &[1, 2]);
        assert_eq!(s.pinned_color(), Some(Red));
        // moves still follow the first color
        assert!(!s.extend(3, Blue));
        assert!(s.extend(4, Red));
    }

    #[test]
    fn take_resets_to_idle() {
        let mut s = SelectionTracker::<u32>::default();
        s.begin(1, Red);
        s.extend(2, Red);
        assert_eq!(s.take(), vec![1, 2]);
        assert_eq!(s.phase(), SelectionPhase::Idle);
        assert_eq!(s.pinned_color(), None);
        assert!(s.begin(5, Blue));
    }
}
