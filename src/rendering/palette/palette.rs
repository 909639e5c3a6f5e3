//! Centralized circle color palette & helpers.
//! Single source of truth for circle materials and debug drawing.

use bevy::prelude::*;

use crate::core::components::GemColor;

/// Base SRGB palette, indexed by [`GemColor::index`].
pub const BASE_COLORS: [Color; 3] = [
    Color::srgb(0.90, 0.20, 0.25), // red
    Color::srgb(0.20, 0.80, 0.45), // green
    Color::srgb(0.20, 0.55, 0.90), // blue
];

#[inline]
pub fn color_for(gem: GemColor) -> Color {
    BASE_COLORS[gem.index()]
}

/// Palette color with its alpha replaced (selection dimming).
#[inline]
pub fn dimmed(gem: GemColor, alpha: f32) -> Color {
    color_for(gem).with_alpha(alpha.clamp(0.0, 1.0))
}
