use bevy::prelude::*;
use bevy::sprite::{AlphaMode2d, MeshMaterial2d};

use crate::core::components::{Circle, CircleRadius, GemColor, Highlighted};
use crate::core::config::GameConfig;
use crate::rendering::palette::{color_for, dimmed};

/// Shared unit-circle mesh plus one normal and one dimmed material per palette color.
#[derive(Resource, Debug, Clone)]
pub struct CircleAssets {
    pub mesh: Handle<Mesh>,
    pub normal: Vec<Handle<ColorMaterial>>,
    pub dimmed: Vec<Handle<ColorMaterial>>,
}

impl CircleAssets {
    pub fn material(&self, color: GemColor, highlighted: bool) -> Handle<ColorMaterial> {
        let set = if highlighted { &self.dimmed } else { &self.normal };
        set[color.index()].clone()
    }
}

pub struct MaterialsPlugin;

impl Plugin for MaterialsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_circle_assets)
            .add_systems(Update, draw_selection_rings)
            .add_systems(PostUpdate, apply_highlight_materials);
    }
}

fn setup_circle_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    cfg: Res<GameConfig>,
) {
    let mesh = meshes.add(bevy::math::primitives::Circle::new(cfg.circles.radius));
    let mut normal = Vec::with_capacity(GemColor::ALL.len());
    let mut dim = Vec::with_capacity(GemColor::ALL.len());
    for gem in GemColor::ALL {
        normal.push(materials.add(ColorMaterial {
            color: color_for(gem),
            alpha_mode: AlphaMode2d::Blend,
            ..default()
        }));
        dim.push(materials.add(ColorMaterial {
            color: dimmed(gem, cfg.selection.dim_alpha),
            alpha_mode: AlphaMode2d::Blend,
            ..default()
        }));
    }
    commands.insert_resource(CircleAssets {
        mesh,
        normal,
        dimmed: dim,
    });
}

/// Swap materials whenever the board toggles a circle's highlight.
pub fn apply_highlight_materials(
    assets: Option<Res<CircleAssets>>,
    mut q: Query<
        (&GemColor, &Highlighted, &mut MeshMaterial2d<ColorMaterial>),
        (With<Circle>, Changed<Highlighted>),
    >,
) {
    let Some(assets) = assets else {
        return;
    };
    for (color, hl, mut mat) in q.iter_mut() {
        let want = assets.material(*color, hl.0);
        if mat.0 != want {
            mat.0 = want;
        }
    }
}

/// Debug gizmo ring around highlighted circles (drawn when rapier debug is on).
pub fn draw_selection_rings(
    cfg: Res<GameConfig>,
    mut gizmos: Gizmos,
    q: Query<(&Transform, &CircleRadius, &GemColor, &Highlighted), With<Circle>>,
) {
    if !cfg.rapier_debug {
        return;
    }
    for (tf, r, color, hl) in q.iter() {
        if hl.0 {
            gizmos.circle_2d(
                Isometry2d::from_translation(tf.translation.truncate()),
                r.0 + 4.0,
                color_for(*color),
            );
        }
    }
}
