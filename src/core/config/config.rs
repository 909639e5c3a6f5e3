use anyhow::Context;
use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 450.0,
            height: 800.0,
            title: "GemLoom".into(),
            auto_close: 0.0,
        }
    }
}

/// Logical play field in field units. Origin bottom-left, y up.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct FieldConfig {
    pub width: f32,
    pub height: f32,
}
impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: 750.0,
            height: 1334.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CircleConfig {
    pub radius: f32,
    pub restitution: f32,
    /// Slack added to the radius when deciding whether a circle occupies a point.
    pub hit_tolerance: f32,
}
impl Default for CircleConfig {
    fn default() -> Self {
        Self {
            radius: 50.0,
            restitution: 0.5,
            hit_tolerance: 1.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SpawnerConfig {
    pub interval_secs: f64,
    pub batch_count: usize,
}
impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            interval_secs: 2.0,
            batch_count: 6,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SelectionConfig {
    pub min_selection: usize,
    /// Alpha applied to highlighted (selected) circles.
    pub dim_alpha: f32,
}
impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            min_selection: 3,
            dim_alpha: 0.5,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GravityConfig {
    pub y: f32,
}
impl Default for GravityConfig {
    fn default() -> Self {
        Self { y: -980.0 }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub field: FieldConfig,
    pub circles: CircleConfig,
    pub spawner: SpawnerConfig,
    pub selection: SelectionConfig,
    pub gravity: GravityConfig,
    pub rapier_debug: bool,
    pub rng_seed: Option<u64>,
}
impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: Default::default(),
            field: Default::default(),
            circles: Default::default(),
            spawner: Default::default(),
            selection: Default::default(),
            gravity: Default::default(),
            rapier_debug: false,
            rng_seed: None,
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        ron::from_str(&data).with_context(|| format!("parse RON {}", path.display()))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(format!("{e:#}"))),
        }
    }

    /// Load every readable file in order, deep-merging RON maps so later files
    /// only need to mention the keys they override.
    /// Returns (config, files used, per-file errors).
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        fn merge_value(base: &mut Value, overlay: Value) {
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let mut incoming = Some(v);
                        for (ek, ev) in bm.iter_mut() {
                            if *ek == k {
                                if let Some(val) = incoming.take() {
                                    merge_value(ev, val);
                                }
                                break;
                            }
                        }
                        if let Some(val) = incoming {
                            bm.insert(k, val);
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        match &mut merged {
                            Some(cur) => merge_value(cur, val),
                            None => merged = Some(val),
                        }
                        used.push(path_ref.display().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }
        let Some(val) = merged else {
            return (GameConfig::default(), used, errors);
        };
        match val.into_rust::<GameConfig>() {
            Ok(cfg) => (cfg, used, errors),
            Err(e) => {
                errors.push(format!(
                    "failed to deserialize merged config; using defaults: {e}"
                ));
                (GameConfig::default(), used, errors)
            }
        }
    }

    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        }
        if self.field.width <= 0.0 || self.field.height <= 0.0 {
            w.push("field dimensions must be > 0".into());
        }
        if self.circles.radius <= 0.0 {
            w.push("circles.radius must be > 0".into());
        }
        let diameter = self.circles.radius * 2.0;
        let row = diameter * self.spawner.batch_count as f32;
        if row > self.field.width {
            w.push(format!(
                "spawner.batch_count {} circles of diameter {} exceed field width {}; spawns will overlap",
                self.spawner.batch_count, diameter, self.field.width
            ));
        }
        if self.circles.hit_tolerance < 0.0 {
            w.push("circles.hit_tolerance negative -> probes may miss touching circles".into());
        }
        if self.circles.hit_tolerance >= self.circles.radius {
            w.push(format!(
                "circles.hit_tolerance {} >= radius {}; neighbor probes may match circles that are not touching",
                self.circles.hit_tolerance, self.circles.radius
            ));
        }
        if !(0.0..=1.0).contains(&self.circles.restitution) {
            w.push(format!(
                "circles.restitution {} outside recommended 0..1",
                self.circles.restitution
            ));
        }
        if self.spawner.interval_secs <= 0.0 {
            w.push("spawner.interval_secs must be > 0 (otherwise spawns every frame)".into());
        }
        if self.spawner.batch_count == 0 {
            w.push("spawner.batch_count is 0; nothing will spawn".into());
        }
        if self.selection.min_selection == 0 {
            w.push("selection.min_selection is 0; every release removes a cluster".into());
        }
        if !(0.0..=1.0).contains(&self.selection.dim_alpha) {
            w.push(format!(
                "selection.dim_alpha {} outside 0..1",
                self.selection.dim_alpha
            ));
        }
        if self.gravity.y > 0.0 {
            w.push(format!(
                "gravity.y is positive ({}); circles will fall upwards",
                self.gravity.y
            ));
        }
        w
    }
}
