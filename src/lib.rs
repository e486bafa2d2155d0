//! chronokeys library crate.
//!
//! This library provides the core functionality for chronokeys, including:
//! - The countdown engine and duration draft editor
//! - The keyboard state machine as a pure reducer
//! - Terminal UI components and the event loop hosting them

pub mod app;
pub mod cli;
pub mod config;
pub mod event;
pub mod event_loop;
pub mod handlers;
pub mod host;
pub mod input;
pub mod logging;
pub mod terminal;
pub mod timer;
pub mod ui;
