// This file is part of GemLoom.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use crate::core::system::system_order::configure_board_sets;
use crate::debug::DebugPlugin;
use crate::gameplay::spawn::CircleSpawnPlugin;
use crate::gameplay::state::BoardPlugin;
use crate::interaction::input::PointerInputPlugin;
use crate::interaction::selection::SelectionPlugin;
use crate::interaction::session::AutoClosePlugin;
use crate::physics::rapier_physics::PhysicsSetupPlugin;
use crate::rendering::camera::CameraPlugin;
use crate::rendering::materials::MaterialsPlugin;

/// Everything the windowed game needs on top of `DefaultPlugins`.
/// Expects `GameConfig` to be inserted before it is added.
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        configure_board_sets(app);
        app.add_plugins((
            BoardPlugin,
            CameraPlugin,
            MaterialsPlugin,
            PhysicsSetupPlugin,
            CircleSpawnPlugin,
            PointerInputPlugin,
            SelectionPlugin,
            AutoClosePlugin,
            DebugPlugin,
        ));
    }
}
