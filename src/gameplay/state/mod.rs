use bevy::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

use crate::board::{BoardRules, GameCore};
use crate::core::components::Circle;
use crate::core::config::GameConfig;
use crate::core::system::system_order::{configure_board_sets, BoardSyncSet};

/// The play session's board, keyed by ECS entity.
#[derive(Resource, Debug, Deref, DerefMut)]
pub struct Board(pub GameCore<Entity>);

impl FromWorld for Board {
    fn from_world(world: &mut World) -> Self {
        let rules = world
            .get_resource::<GameConfig>()
            .map(BoardRules::from_config)
            .unwrap_or_default();
        Board(GameCore::new(rules))
    }
}

/// Session RNG; seeded from `GameConfig::rng_seed` when present.
#[derive(Resource, Debug, Deref, DerefMut)]
pub struct GameRng(pub StdRng);

impl FromWorld for GameRng {
    fn from_world(world: &mut World) -> Self {
        let seed = world.get_resource::<GameConfig>().and_then(|c| c.rng_seed);
        match seed {
            Some(s) => {
                info!(seed = s, "GameRng: seeded");
                GameRng(StdRng::seed_from_u64(s))
            }
            None => GameRng(StdRng::from_entropy()),
        }
    }
}

/// Running totals for the session (read by debug logging).
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BoardStats {
    pub batches_spawned: u32,
    pub circles_spawned: u32,
    pub matches: u32,
    pub circles_removed: u32,
    pub cancelled: u32,
}

pub struct BoardPlugin;

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        configure_board_sets(app);
        app.init_resource::<Board>()
            .init_resource::<GameRng>()
            .init_resource::<BoardStats>()
            .add_systems(Update, sync_board_positions.in_set(BoardSyncSet));
    }
}

/// Copy physics-driven transforms into the board registry.
pub fn sync_board_positions(
    mut board: ResMut<Board>,
    q: Query<(Entity, &Transform), (With<Circle>, Changed<Transform>)>,
) {
    for (entity, tf) in q.iter() {
        board.sync_position(entity, tf.translation.truncate());
    }
}
