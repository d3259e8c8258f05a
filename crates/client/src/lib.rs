//! Text front end for the arcade runtime.
//!
//! The binary reads one command per line from stdin, forwards it through a
//! [`runtime::GameHandle`] and prints the board after every command.

pub mod config;
pub mod input;
pub mod logging;
pub mod render;

pub use config::ClientConfig;
pub use input::InputCommand;
