use bevy::prelude::*;

use crate::LOG_TARGET;

#[derive(Resource, Deref, DerefMut)]
pub struct AutoCloseTimer(Timer);

/// Exits the app after `seconds`; does nothing for 0 or less.
pub struct AutoClosePlugin {
    pub seconds: f32,
}

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        if self.seconds <= 0.0 {
            return;
        }
        let secs = self.seconds;
        info!(target: LOG_TARGET, seconds = secs, "AutoClose: will exit after {secs} seconds");
        app.insert_resource(AutoCloseTimer(Timer::from_seconds(secs, TimerMode::Once)))
            .add_systems(Update, check_autoclose);
    }
}

fn check_autoclose(
    time: Res<Time>,
    mut timer: ResMut<AutoCloseTimer>,
    mut exit: EventWriter<AppExit>,
) {
    if timer.tick(time.delta()).just_finished() {
        info!(target: LOG_TARGET, "AutoClose: timer finished, requesting app exit");
        exit.write(AppExit::Success);
    }
}
