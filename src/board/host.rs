//! Collaborator seam between the board logic and whatever owns the bodies
//! (the ECS world in the app, a plain fake in tests).

use bevy::math::Vec2;
use std::fmt::Debug;
use std::hash::Hash;

use crate::core::components::GemColor;

/// Anything usable as a stable circle identity.
pub trait CircleHandle: Copy + Eq + Hash + Ord + Debug + Send + Sync + 'static {}
impl<T> CircleHandle for T where T: Copy + Eq + Hash + Ord + Debug + Send + Sync + 'static {}

/// Physics body requested for every spawned circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodySpec {
    pub radius: f32,
    pub restitution: f32,
    pub lock_rotation: bool,
}

impl BodySpec {
    pub fn dynamic_circle(radius: f32, restitution: f32) -> Self {
        Self {
            radius,
            restitution,
            lock_rotation: true,
        }
    }
}

/// Render + physics entity management consumed by the board.
pub trait CircleHost {
    type Handle: CircleHandle;

    /// Create a dynamic body + visual for a circle and return its handle.
    fn spawn(&mut self, color: GemColor, position: Vec2, body: &BodySpec) -> Self::Handle;

    /// Detach the circle from physics and rendering. Called once per handle.
    fn destroy(&mut self, handle: Self::Handle);

    fn set_highlighted(&mut self, handle: Self::Handle, highlighted: bool);
}
