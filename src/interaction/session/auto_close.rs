use bevy::prelude::*;

use crate::core::config::GameConfig;
use crate::gameplay::state::BoardStats;

/// Counts down `window.autoClose` seconds, then requests exit.
#[derive(Resource, Deref, DerefMut)]
pub struct SessionTimer(Timer);

pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, arm_session_timer)
            .add_systems(Update, end_session_when_elapsed);
    }
}

fn arm_session_timer(mut commands: Commands, cfg: Res<GameConfig>) {
    let secs = cfg.window.auto_close;
    if secs > 0.0 {
        info!(seconds = secs, "session will close automatically");
        commands.insert_resource(SessionTimer(Timer::from_seconds(secs, TimerMode::Once)));
    }
}

fn end_session_when_elapsed(
    time: Res<Time>,
    timer: Option<ResMut<SessionTimer>>,
    stats: Option<Res<BoardStats>>,
    mut ev_exit: EventWriter<AppExit>,
) {
    let Some(mut t) = timer else {
        return;
    };
    if t.finished() {
        return;
    }
    t.tick(time.delta());
    if t.just_finished() {
        if let Some(s) = stats {
            info!(
                matches = s.matches,
                removed = s.circles_removed,
                spawned = s.circles_spawned,
                "session closing"
            );
        }
        ev_exit.write(AppExit::Success);
    }
}
