//! Grid-based Snake: a pure tick engine wrapped in a command/event session,
//! with a ratatui front end in the binary.

pub mod config;
pub mod engine;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod session;
pub mod snake;
pub mod terminal_runtime;
pub mod timer;
pub mod ui;
