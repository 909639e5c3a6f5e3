pub mod config;

pub use config::{
    CircleConfig, FieldConfig, GameConfig, GravityConfig, SelectionConfig, SpawnerConfig,
    WindowConfig,
};
