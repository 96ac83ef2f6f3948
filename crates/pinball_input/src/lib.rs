//! pinball_input: turns raw keyboard state into one structured `ControlState`
//! per tick, then into table commands. Nothing downstream reads
//! `ButtonInput` directly.

use bevy::input::InputSystem;
use bevy::prelude::*;
use pinball_core::{Paddle, PaddleSide, ResetTable, SpawnBallRequest, TableSet, TogglePause};

mod config;
mod controls;
mod parse;

pub use config::ControlsConfig;
pub use controls::{Control, ControlState, KeyBindings};
pub use parse::parse_keycode;

const LOG_TARGET: &str = "pinball_input";

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub enum InputFlowSet {
    Poll,
}

pub struct PinballInputPlugin;

impl Plugin for PinballInputPlugin {
    fn build(&self, app: &mut App) {
        let cfg = app
            .world_mut()
            .get_resource_or_insert_with::<ControlsConfig>(ControlsConfig::default)
            .clone();
        if !app.world().contains_resource::<KeyBindings>() {
            let (bindings, errors) = KeyBindings::from_config(&cfg);
            for e in errors {
                warn!(target: LOG_TARGET, "{e}");
            }
            app.insert_resource(bindings);
        }

        app.init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<ControlState>()
            .add_systems(
                PreUpdate,
                poll_controls.in_set(InputFlowSet::Poll).after(InputSystem),
            )
            .add_systems(
                Update,
                (issue_table_commands, apply_paddle_controls, exit_on_quit)
                    .in_set(TableSet::Controls),
            );
    }
}

/// Keyboard -> `ControlState`. Runs after Bevy's own input update.
pub fn poll_controls(
    keys: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut state: ResMut<ControlState>,
) {
    let next = ControlState::poll(&bindings, &keys);
    if *state != next {
        *state = next;
    }
}

pub fn issue_table_commands(
    state: Res<ControlState>,
    mut spawn: EventWriter<SpawnBallRequest>,
    mut reset: EventWriter<ResetTable>,
    mut pause: EventWriter<TogglePause>,
) {
    if state.spawn_ball {
        spawn.write(SpawnBallRequest);
    }
    if state.reset {
        info!(target: LOG_TARGET, "Reset requested");
        reset.write(ResetTable);
    }
    if state.pause {
        pause.write(TogglePause);
    }
}

pub fn apply_paddle_controls(state: Res<ControlState>, mut paddles: Query<&mut Paddle>) {
    for mut paddle in &mut paddles {
        let held = match paddle.side {
            PaddleSide::Left => state.left_paddle,
            PaddleSide::Right => state.right_paddle,
        };
        if paddle.active != held {
            paddle.active = held;
        }
    }
}

/// Sends an AppExit event when the quit key is pressed.
pub fn exit_on_quit(state: Res<ControlState>, mut exit: EventWriter<AppExit>) {
    if state.quit {
        info!(target: LOG_TARGET, "Quit requested");
        exit.write(AppExit::Success);
    }
}
