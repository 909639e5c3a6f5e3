use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::board::{BodySpec, CircleHost};
use crate::core::components::{Circle, CircleRadius, GemColor, Highlighted};
use crate::core::system::system_order::{configure_board_sets, SpawnSet};
use crate::gameplay::state::{Board, BoardStats, GameRng};
use crate::rendering::materials::CircleAssets;

/// Emitted after every spawn batch.
#[derive(Event, Debug, Clone)]
pub struct CirclesSpawned {
    pub handles: Vec<Entity>,
}

/// ECS side of [`CircleHost`]: circles are entities with a dynamic Rapier body.
/// Visuals are attached only when [`CircleAssets`] exists (headless tests skip them).
#[derive(SystemParam)]
pub struct EcsCircleHost<'w, 's> {
    commands: Commands<'w, 's>,
    assets: Option<Res<'w, CircleAssets>>,
}

impl CircleHost for EcsCircleHost<'_, '_> {
    type Handle = Entity;

    fn spawn(&mut self, color: GemColor, position: Vec2, body: &BodySpec) -> Entity {
        let mut ec = self.commands.spawn((
            Circle,
            color,
            CircleRadius(body.radius),
            Highlighted(false),
            Transform::from_translation(position.extend(0.0)),
            RigidBody::Dynamic,
            Collider::ball(body.radius),
            Restitution::coefficient(body.restitution),
            Velocity::zero(),
        ));
        if body.lock_rotation {
            ec.insert(LockedAxes::ROTATION_LOCKED);
        }
        if let Some(assets) = self.assets.as_ref() {
            ec.insert((
                Mesh2d(assets.mesh.clone()),
                MeshMaterial2d(assets.material(color, false)),
            ));
        }
        ec.id()
    }

    fn destroy(&mut self, handle: Entity) {
        self.commands.entity(handle).despawn();
    }

    fn set_highlighted(&mut self, handle: Entity, highlighted: bool) {
        self.commands
            .entity(handle)
            .try_insert(Highlighted(highlighted));
    }
}

pub struct CircleSpawnPlugin;

impl Plugin for CircleSpawnPlugin {
    fn build(&self, app: &mut App) {
        configure_board_sets(app);
        app.add_event::<CirclesSpawned>()
            .add_systems(Update, spawn_batches_on_tick.in_set(SpawnSet));
    }
}

/// Drive the board's spawn timer from the app clock.
pub fn spawn_batches_on_tick(
    time: Res<Time>,
    mut board: ResMut<Board>,
    mut rng: ResMut<GameRng>,
    mut host: EcsCircleHost,
    mut stats: ResMut<BoardStats>,
    mut ew: EventWriter<CirclesSpawned>,
) {
    let now = time.elapsed_secs_f64();
    let spawned = board.tick(&mut host, &mut rng.0, now);
    if spawned.is_empty() {
        return;
    }
    stats.batches_spawned += 1;
    stats.circles_spawned += spawned.len() as u32;
    debug!(
        count = spawned.len(),
        total = board.registry().len(),
        t = now,
        "spawned circle batch"
    );
    ew.write(CirclesSpawned { handles: spawned });
}
