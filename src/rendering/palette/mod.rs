pub mod palette;

pub use palette::{color_for, dimmed, BASE_COLORS};
