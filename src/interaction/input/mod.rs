pub mod input_interaction;

pub use input_interaction::{MouseDrag, PointerEvent, PointerInputPlugin};
