//! Top-level RON configuration. Each section maps onto one crate's resource;
//! every field is optional and falls back to the default two-paddle table.

use std::{fs, path::Path};

use anyhow::Context;
use bevy::prelude::*;
use pinball_core::TableLayout;
use pinball_input::{ControlsConfig, KeyBindings};
use pinball_physics::PhysicsConfig;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    /// Seconds before the app exits on its own; 0 disables.
    pub auto_close: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 900.0,
            title: "Pinball".into(),
            auto_close: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Draw Rapier collider outlines.
    pub wireframe: bool,
    /// `tracing` filter directives, e.g. `wgpu=error,pinball_physics=debug`.
    pub log_filter: String,
    pub log_level: String,
    /// Seconds between stats log lines; 0 disables.
    pub stats_interval: f32,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            wireframe: false,
            log_filter: "wgpu=error,naga=warn".into(),
            log_level: "info".into(),
            stats_interval: 5.0,
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq, Default)]
#[serde(default)]
pub struct PinballConfig {
    pub window: WindowConfig,
    pub physics: PhysicsConfig,
    pub table: TableLayout,
    pub controls: ControlsConfig,
    pub debug: DebugConfig,
}

impl PinballConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        ron::from_str(&data).with_context(|| format!("parse RON in {}", path.display()))
    }

    /// Defaults plus the reason when the file can't be used.
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(format!("{e:#}"))),
        }
    }

    /// Human-readable warnings for suspicious values. Never fatal.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push(format!(
                "[window] size must be > 0 (got {}x{})",
                self.window.width, self.window.height
            ));
        }
        if self.window.auto_close < 0.0 {
            w.push(format!("[window] auto_close {} is negative", self.window.auto_close));
        }
        if self.debug.stats_interval < 0.0 {
            w.push(format!("[debug] stats_interval {} is negative", self.debug.stats_interval));
        }
        w.extend(self.physics.validate().into_iter().map(|m| format!("[physics] {m}")));
        w.extend(self.table.validate().into_iter().map(|m| format!("[table] {m}")));
        let (_, key_errors) = KeyBindings::from_config(&self.controls);
        w.extend(key_errors);
        w
    }
}
