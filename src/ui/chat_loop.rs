//! Interactive chat loop.
//!
//! Owns the session controller and everything that feeds it: stdin lines,
//! resolutions of spawned requests, and the periodic health poller. All
//! controller mutation happens here, on one task; spawned calls only report
//! back through the event channel.

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::api::{HttpTransport, Transport};
use crate::commands::{self, CommandResult};
use crate::core::config::Config;
use crate::core::controller::{probe_health, ControllerEvent, SessionController};
use crate::core::messages;
use crate::core::transcript::TranscriptStore;
use crate::ui::terminal::TerminalPresenter;

pub async fn run_chat(config: Config) -> Result<(), Box<dyn Error>> {
    let transport: Arc<dyn Transport> = Arc::new(HttpTransport::new(config.server_url()));
    let (events_tx, mut events_rx) = mpsc::unbounded_channel();

    let mut store = TranscriptStore::at_default_path();
    store.restore();

    let mut controller = SessionController::new(
        Arc::clone(&transport),
        Box::new(TerminalPresenter::new()),
        store,
        events_tx.clone(),
    );
    controller.replay_restored();

    let poller_cancel = CancellationToken::new();
    spawn_health_poller(
        Arc::clone(&transport),
        events_tx,
        config.health_poll_interval(),
        poller_cancel.clone(),
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut awaiting_clear_confirmation = false;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };

                if awaiting_clear_confirmation {
                    awaiting_clear_confirmation = false;
                    let answer = line.trim();
                    if answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes") {
                        controller.clear_transcript();
                    } else {
                        controller.notice(messages::CLEAR_CANCELLED);
                    }
                    continue;
                }

                match commands::process_input(&mut controller, &line) {
                    CommandResult::Continue => {}
                    CommandResult::ProcessAsMessage(text) => {
                        controller.submit(&text);
                    }
                    CommandResult::SwitchProfile(profile) => {
                        controller.switch_profile(profile).await;
                    }
                    CommandResult::SwitchCharacter(character) => {
                        controller.switch_character(character).await;
                    }
                    CommandResult::ForceSync => {
                        controller.force_sync().await;
                    }
                    CommandResult::RequestClear => {
                        controller.notice(messages::CLEAR_CONFIRM_PROMPT);
                        awaiting_clear_confirmation = true;
                    }
                    CommandResult::Quit => break,
                }
            }
            event = events_rx.recv() => {
                // The controller holds a sender, so this arm stays live for
                // the lifetime of the loop.
                if let Some(event) = event {
                    controller.handle_event(event);
                }
            }
        }
    }

    poller_cancel.cancel();
    Ok(())
}

/// Periodic health probe. Fires immediately at startup, then on the
/// configured interval, until the token is cancelled at teardown.
fn spawn_health_poller(
    transport: Arc<dyn Transport>,
    events: mpsc::UnboundedSender<ControllerEvent>,
    period: Duration,
    cancel: CancellationToken,
) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = interval.tick() => {
                    let status = probe_health(transport.as_ref()).await;
                    if events.send(ControllerEvent::HealthResolved(status)).is_err() {
                        break;
                    }
                }
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::test_support::ScriptedTransport;
    use crate::core::controller::HealthStatus;

    #[tokio::test]
    async fn poller_probes_at_startup_and_then_periodically() {
        let transport: Arc<dyn Transport> =
            Arc::new(ScriptedTransport::replying(serde_json::json!({
                "status": "healthy"
            })));
        let (tx, mut rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        spawn_health_poller(transport, tx, Duration::from_millis(10), cancel.clone());

        for _ in 0..3 {
            match rx.recv().await {
                Some(ControllerEvent::HealthResolved(status)) => {
                    assert_eq!(status, HealthStatus::Online);
                }
                other => panic!("unexpected event: {:?}", other),
            }
        }

        cancel.cancel();
        // Drain whatever was already in flight; the poller drops its sender
        // once it observes the cancellation, closing the channel.
        while rx.recv().await.is_some() {}
    }

    #[tokio::test]
    async fn poller_maps_unreachable_to_offline() {
        let transport: Arc<dyn Transport> = Arc::new(ScriptedTransport::failing_unreachable());
        let (tx, mut rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        spawn_health_poller(transport, tx, Duration::from_millis(10), cancel.clone());

        match rx.recv().await {
            Some(ControllerEvent::HealthResolved(status)) => {
                assert_eq!(status, HealthStatus::Offline);
            }
            other => panic!("unexpected event: {:?}", other),
        }
        cancel.cancel();
    }
}
