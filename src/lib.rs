//! Artemis Chat is a terminal chat client for the Artemis assistant backend.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns session state, the submission state machine, the
//!   conversation transcript and its persisted snapshot, and configuration.
//! - [`api`] defines the backend wire payloads and the transport client that
//!   performs the actual HTTP calls.
//! - [`commands`] implements slash-command parsing and dispatch used by the
//!   chat loop.
//! - [`ui`] declares the presentation contract the controller pushes events
//!   through, plus the line-oriented terminal presenter and the interactive
//!   chat loop.
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`crate::cli::run`], which initializes configuration and hands off
//! to [`ui::chat_loop`] for interactive sessions.

pub mod api;
pub mod cli;
pub mod commands;
pub mod core;
pub mod ui;
