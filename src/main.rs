use anyhow::bail;
use bevy::prelude::*;
use clap::Parser;

use gem_loom::{GameConfig, GamePlugin};

const DEFAULT_CONFIG: &str = "assets/config/game.ron";
const LOCAL_CONFIG: &str = "assets/config/game.local.ron";

#[derive(Parser, Debug)]
#[command(name = "gem_loom", about = "Drag to connect three or more same-colored gems")]
struct Args {
    /// Config layers, merged in order. Defaults to game.ron then game.local.ron.
    #[arg(long = "config", value_name = "PATH")]
    config: Vec<String>,
    /// Fixed RNG seed for reproducible spawn colors.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let args = Args::parse();
    let explicit = !args.config.is_empty();
    let layers = if explicit {
        args.config.clone()
    } else {
        vec![DEFAULT_CONFIG.to_string(), LOCAL_CONFIG.to_string()]
    };

    let (mut cfg, used, errors) = GameConfig::load_layered(&layers);
    if explicit && !errors.is_empty() {
        bail!("config error: {}", errors.join("; "));
    }
    let mut notes = Vec::new();
    for e in errors {
        // the local override layer is optional
        if !e.starts_with(LOCAL_CONFIG) {
            notes.push(e);
        }
    }
    if let Some(seed) = args.seed {
        cfg.rng_seed = Some(seed);
    }
    let warnings = cfg.validate();

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: cfg.window.title.clone(),
            resolution: (cfg.window.width, cfg.window.height).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }));
    // logging is only live once LogPlugin is in
    info!(layers = ?used, "config loaded");
    for n in &notes {
        warn!("{n}");
    }
    for w in &warnings {
        warn!("config: {w}");
    }
    app.insert_resource(cfg).add_plugins(GamePlugin).run();
    Ok(())
}
