//! TUI-less line presenter.
//!
//! Prints each turn as a timestamped line on stdout. Status and label
//! changes are only announced when they actually change, so the periodic
//! health probe stays quiet while the service is stable.

use std::io::{self, Write};

use crate::core::controller::HealthStatus;
use crate::core::message::{Sender, Turn};
use crate::ui::Presenter;

pub struct TerminalPresenter {
    out: io::Stdout,
    last_status: Option<HealthStatus>,
    last_label: Option<String>,
}

impl TerminalPresenter {
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            last_status: None,
            last_label: None,
        }
    }

    fn prefix(sender: Sender) -> &'static str {
        match sender {
            Sender::User => "You",
            Sender::Assistant => "Assistant",
        }
    }
}

impl Default for TerminalPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Presenter for TerminalPresenter {
    fn render(&mut self, turn: &Turn) {
        let _ = writeln!(
            self.out,
            "[{}] {}: {}",
            turn.display_time(),
            Self::prefix(turn.sender),
            turn.text
        );
    }

    fn show_thinking(&mut self) {
        let _ = writeln!(self.out, "[assistant is thinking...]");
        let _ = self.out.flush();
    }

    fn clear_thinking(&mut self) {
        // Printed lines cannot be retracted; the response line that follows
        // supersedes the placeholder.
    }

    fn set_status_indicator(&mut self, status: HealthStatus) {
        if self.last_status == Some(status) {
            return;
        }
        self.last_status = Some(status);
        let _ = writeln!(self.out, "-- service {} --", status.as_str());
    }

    fn set_display_label(&mut self, label: &str) {
        if self.last_label.as_deref() == Some(label) {
            return;
        }
        self.last_label = Some(label.to_string());
        let _ = writeln!(self.out, "-- {} --", label);
    }

    fn scroll_to_latest(&mut self) {
        let _ = self.out.flush();
    }
}
