pub mod materials;

pub use materials::{
    apply_highlight_materials, draw_selection_rings, CircleAssets,
    MaterialsPlugin,
};
