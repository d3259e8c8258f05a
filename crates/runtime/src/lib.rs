//! Runtime orchestration for a game session.
//!
//! This crate moves a [`game_core::GameSession`] onto a single worker task,
//! drives its monsters from timers and exposes the session through
//! [`GameHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator, builder and configuration
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - `workers` keeps background tasks internal to the crate
pub mod api;
pub mod events;
pub mod runtime;

mod workers;

pub use api::{GameHandle, GameSnapshot, Result, RuntimeError};
pub use events::{Event, EventBus, LifecycleEvent, MovementEvent, Topic};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig, TempoConfig};
