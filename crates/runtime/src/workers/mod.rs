//! Worker tasks that back the runtime orchestration.
//!
//! The simulation worker owns the game session and is its only writer; the
//! scheduler feeds it monster ticks on timers.

mod scheduler;
mod simulation;

pub use scheduler::MonsterScheduler;
pub use simulation::{Command, SimulationWorker};
