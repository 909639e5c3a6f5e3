use bevy::prelude::*;
use rand::distributions::{Distribution, Standard};
use rand::Rng;

/// Marker component identifying a circle entity (holds physics body & collider).
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Circle;

/// Logical radius used both for the collider and rendering scale.
#[derive(Component, Debug, Deref, DerefMut, Copy, Clone, PartialEq)]
pub struct CircleRadius(pub f32);

/// Palette color of a circle. Matching only ever compares these values.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GemColor {
    Red,
    Green,
    Blue,
}

impl GemColor {
    pub const ALL: [GemColor; 3] = [GemColor::Red, GemColor::Green, GemColor::Blue];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl Distribution<GemColor> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> GemColor {
        GemColor::ALL[rng.gen_range(0..GemColor::ALL.len())]
    }
}

/// Visual selection flag; the materials system dims highlighted circles.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Highlighted(pub bool);
