//! Presentation layer.
//!
//! [`Presenter`] is the contract the session controller pushes events
//! through. The controller never reads back from the presenter, so any
//! implementation works: the shipped line-oriented terminal presenter, a
//! richer TUI, or a headless recorder in tests.

pub mod chat_loop;
pub mod terminal;

pub(crate) mod test_helpers;

use crate::core::controller::HealthStatus;
use crate::core::message::Turn;

pub trait Presenter: Send {
    /// Display one turn at the end of the conversation view.
    fn render(&mut self, turn: &Turn);

    /// Show the transient "assistant is thinking" placeholder.
    fn show_thinking(&mut self);

    /// Remove the thinking placeholder, if shown.
    fn clear_thinking(&mut self);

    /// Update the service connectivity indicator.
    fn set_status_indicator(&mut self, status: HealthStatus);

    /// Update the combined profile/character label.
    fn set_display_label(&mut self, label: &str);

    /// Keep the latest turn in view.
    fn scroll_to_latest(&mut self);
}
