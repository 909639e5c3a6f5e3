pub mod app;
pub mod board;
pub mod core;
pub mod debug;
pub mod gameplay;
pub mod interaction;
pub mod physics;
pub mod rendering;

// Curated re-exports
pub use app::game::GamePlugin;
pub use board::{BoardRules, GameCore, ReleaseOutcome};
pub use core::components::{Circle, CircleRadius, GemColor, Highlighted};
pub use core::config::{GameConfig, WindowConfig};
pub use gameplay::state::{Board, BoardStats};
