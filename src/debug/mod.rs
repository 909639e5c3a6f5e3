//! Debug module: feature gated key toggles and periodic board logging.
//! Built only when compiled with `--features debug`.

#[cfg(feature = "debug")]
pub mod keys; // pub for testing
#[cfg(feature = "debug")]
mod logging;

#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
#[derive(Resource, Debug)]
pub struct DebugState {
    pub log_interval: f32,
    pub time_accum: f32,
    pub frame_counter: u64,
    pub last_circle_count: usize,
}

#[cfg(feature = "debug")]
impl Default for DebugState {
    fn default() -> Self {
        Self {
            log_interval: 1.0,
            time_accum: 0.0,
            frame_counter: 0,
            last_circle_count: 0,
        }
    }
}

#[cfg(feature = "debug")]
pub struct DebugPlugin;

#[cfg(feature = "debug")]
impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        use keys::debug_key_input_system;
        use logging::debug_logging_system;

        fn count_frames(mut state: ResMut<DebugState>) {
            state.frame_counter += 1;
        }

        app.init_resource::<DebugState>().add_systems(
            Update,
            (count_frames, debug_key_input_system, debug_logging_system).chain(),
        );
    }
}

#[cfg(not(feature = "debug"))]
pub struct DebugPlugin;

#[cfg(not(feature = "debug"))]
impl bevy::prelude::Plugin for DebugPlugin {
    fn build(&self, _app: &mut bevy::prelude::App) {}
}

#[cfg(all(test, feature = "debug"))]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use crate::gameplay::state::BoardPlugin;

    #[test]
    fn plugin_counts_frames_headless() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(GameConfig::default());
        app.add_plugins((BoardPlugin, DebugPlugin));
        app.update();
        app.update();
        assert_eq!(app.world().resource::<DebugState>().frame_counter, 2);
    }
}
