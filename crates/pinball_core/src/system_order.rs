//! Central system ordering labels to make the per-tick sequence explicit.
//! 1. input poll (`PreUpdate`, owned by `pinball_input`)
//! 2. `TableSet::Controls`: control snapshot -> table events, paddle flags
//! 3. `TableSet::Commands`: reset, spawn, paddle drive, pause
//! 4. `TableSet::Contacts`: react to contacts reported by the last physics step
//! 5. `TableSet::Cleanup`: drain lost balls
//! 6. `TableSet::Tally`: score and lifecycle counters, feedback timers
//! 7. Rapier step (`PostUpdate`, handled by plugin)
//! 8. Rendering (implicit)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub enum TableSet {
    Controls,
    Commands,
    Contacts,
    Cleanup,
    Tally,
}
