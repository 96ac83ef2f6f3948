use bevy::prelude::*;
use serde::Deserialize;

/// Key names per control, as written in the `controls` config section.
/// Names follow `KeyCode` variants; single letters/digits are accepted too.
#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct ControlsConfig {
    pub left_paddle: Vec<String>,
    pub right_paddle: Vec<String>,
    pub spawn_ball: Vec<String>,
    pub reset: Vec<String>,
    pub pause: Vec<String>,
    pub quit: Vec<String>,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        let keys = |names: &[&str]| names.iter().map(|n| n.to_string()).collect();
        Self {
            left_paddle: keys(&["ArrowLeft", "KeyA"]),
            right_paddle: keys(&["ArrowRight", "KeyD"]),
            spawn_ball: keys(&["Space"]),
            reset: keys(&["KeyR"]),
            pause: keys(&["KeyP"]),
            quit: keys(&["Escape"]),
        }
    }
}
