use bevy::prelude::*;
use bevy_rapier2d::render::DebugRenderContext;

/// F2 toggles the collider wireframe when the Rapier debug renderer is present.
pub fn debug_key_input_system(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    ctx: Option<ResMut<DebugRenderContext>>,
) {
    let (Some(keys), Some(mut ctx)) = (keys, ctx) else {
        return;
    };
    if keys.just_pressed(KeyCode::F2) {
        ctx.enabled = !ctx.enabled;
        info!(enabled = ctx.enabled, "rapier wireframe toggled");
    }
}
