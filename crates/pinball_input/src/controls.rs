use bevy::prelude::*;

use crate::{parse::parse_keycode, ControlsConfig};

/// Player-facing actions. Paddles are held, the rest fire on press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    LeftPaddle,
    RightPaddle,
    SpawnBall,
    Reset,
    Pause,
    Quit,
}

impl Control {
    pub const ALL: [Control; 6] = [
        Control::LeftPaddle,
        Control::RightPaddle,
        Control::SpawnBall,
        Control::Reset,
        Control::Pause,
        Control::Quit,
    ];

    fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Control::LeftPaddle => "left_paddle",
            Control::RightPaddle => "right_paddle",
            Control::SpawnBall => "spawn_ball",
            Control::Reset => "reset",
            Control::Pause => "pause",
            Control::Quit => "quit",
        }
    }
}

/// Resolved key lists per control.
#[derive(Resource, Debug, Clone, Default)]
pub struct KeyBindings {
    keys: [Vec<KeyCode>; 6],
}

impl KeyBindings {
    /// Resolve key names; unknown names are skipped and reported.
    pub fn from_config(cfg: &ControlsConfig) -> (Self, Vec<String>) {
        let mut bindings = KeyBindings::default();
        let mut errors = Vec::new();
        for control in Control::ALL {
            let names = match control {
                Control::LeftPaddle => &cfg.left_paddle,
                Control::RightPaddle => &cfg.right_paddle,
                Control::SpawnBall => &cfg.spawn_ball,
                Control::Reset => &cfg.reset,
                Control::Pause => &cfg.pause,
                Control::Quit => &cfg.quit,
            };
            for name in names {
                match parse_keycode(name) {
                    Ok(kc) => bindings.keys[control.index()].push(kc),
                    Err(e) => errors.push(format!("[controls.{}] {e}", control.name())),
                }
            }
            if bindings.keys[control.index()].is_empty() {
                errors.push(format!("[controls.{}] no usable key bound", control.name()));
            }
        }
        (bindings, errors)
    }

    pub fn keys(&self, control: Control) -> &[KeyCode] {
        &self.keys[control.index()]
    }

    pub fn bind(&mut self, control: Control, key: KeyCode) -> &mut Self {
        self.keys[control.index()].push(key);
        self
    }

    pub fn pressed(&self, control: Control, input: &ButtonInput<KeyCode>) -> bool {
        input.any_pressed(self.keys(control).iter().copied())
    }

    pub fn just_pressed(&self, control: Control, input: &ButtonInput<KeyCode>) -> bool {
        input.any_just_pressed(self.keys(control).iter().copied())
    }
}

/// Snapshot of the controls for the current tick. Held controls are
/// level-triggered; the others are true only on the tick the key went down.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlState {
    pub left_paddle: bool,
    pub right_paddle: bool,
    pub spawn_ball: bool,
    pub reset: bool,
    pub pause: bool,
    pub quit: bool,
}

impl ControlState {
    pub fn poll(bindings: &KeyBindings, input: &ButtonInput<KeyCode>) -> Self {
        Self {
            left_paddle: bindings.pressed(Control::LeftPaddle, input),
            right_paddle: bindings.pressed(Control::RightPaddle, input),
            spawn_ball: bindings.just_pressed(Control::SpawnBall, input),
            reset: bindings.just_pressed(Control::Reset, input),
            pause: bindings.just_pressed(Control::Pause, input),
            quit: bindings.just_pressed(Control::Quit, input),
        }
    }
}
