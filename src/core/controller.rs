//! The session controller.
//!
//! Owns the submission state machine, the profile/character switch protocol
//! and the health-status mapping. All transport and switch failures are
//! converted here into fixed user-visible turns; nothing propagates further
//! and no single failure is fatal to the session.

use std::sync::Arc;

use serde_json::json;
use tokio::sync::mpsc;

use crate::api::{
    Endpoint, HealthResponse, ProcessResponse, SwitchResponse, SyncResponse, Transport,
    TransportError,
};
use crate::core::message::Turn;
use crate::core::messages;
use crate::core::profile::{Character, Profile};
use crate::core::session::SessionState;
use crate::core::transcript::TranscriptStore;
use crate::ui::Presenter;

/// Connectivity of the assistant service as seen by the health probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    Online,
    Degraded,
    Offline,
}

impl HealthStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            HealthStatus::Online => "online",
            HealthStatus::Degraded => "degraded",
            HealthStatus::Offline => "offline",
        }
    }

    /// Total mapping from a probe outcome: a well-formed `healthy` response
    /// is Online, any other well-formed response is Degraded, any transport
    /// failure is Offline.
    pub fn from_probe(result: Result<serde_json::Value, TransportError>) -> Self {
        match result {
            Ok(payload) => {
                let health: HealthResponse = serde_json::from_value(payload).unwrap_or_default();
                if health.status == "healthy" {
                    HealthStatus::Online
                } else {
                    HealthStatus::Degraded
                }
            }
            Err(_) => HealthStatus::Offline,
        }
    }
}

/// Perform one health probe. Side-channel only: the result never appends to
/// the transcript and never touches the submission state machine.
pub async fn probe_health(transport: &dyn Transport) -> HealthStatus {
    HealthStatus::from_probe(transport.call(Endpoint::Health, None).await)
}

/// Outcomes delivered back to the controller on the event channel once a
/// spawned request resolves.
#[derive(Debug)]
pub enum ControllerEvent {
    ProcessResolved(Result<serde_json::Value, TransportError>),
    HealthResolved(HealthStatus),
}

/// What `submit` did with an input. The skips are deliberate policy, not
/// errors; the chat loop ignores them and tests observe them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted,
    SkippedEmpty,
    SkippedBusy,
}

pub struct SessionController {
    session: SessionState,
    store: TranscriptStore,
    transport: Arc<dyn Transport>,
    presenter: Box<dyn Presenter>,
    events: mpsc::UnboundedSender<ControllerEvent>,
}

impl SessionController {
    pub fn new(
        transport: Arc<dyn Transport>,
        presenter: Box<dyn Presenter>,
        store: TranscriptStore,
        events: mpsc::UnboundedSender<ControllerEvent>,
    ) -> Self {
        Self {
            session: SessionState::new(),
            store,
            transport,
            presenter,
            events,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn transcript(&self) -> &TranscriptStore {
        &self.store
    }

    /// Re-render the restored transcript and push the initial status line.
    pub fn replay_restored(&mut self) {
        for turn in self.store.turns() {
            self.presenter.render(turn);
        }
        if !self.store.is_empty() {
            self.presenter.scroll_to_latest();
        }
        self.push_display_label();
    }

    /// Submit user input. Guarded: empty (after trimming) input and input
    /// arriving while a request is already in flight are silently dropped.
    /// The user turn is appended and rendered before the network call is
    /// issued; the outcome arrives later as [`ControllerEvent::ProcessResolved`].
    pub fn submit(&mut self, text: &str) -> SubmissionOutcome {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            tracing::debug!("dropping empty submission");
            return SubmissionOutcome::SkippedEmpty;
        }
        if self.session.thinking {
            tracing::debug!("dropping submission while a request is in flight");
            return SubmissionOutcome::SkippedBusy;
        }

        let turn = Turn::user(trimmed);
        self.presenter.render(&turn);
        self.store.append(turn);
        self.persist();

        self.session.thinking = true;
        self.presenter.show_thinking();
        self.presenter.scroll_to_latest();

        let transport = Arc::clone(&self.transport);
        let events = self.events.clone();
        let body = json!({ "text": trimmed });
        tokio::spawn(async move {
            let result = transport.call(Endpoint::Process, Some(body)).await;
            let _ = events.send(ControllerEvent::ProcessResolved(result));
        });

        SubmissionOutcome::Accepted
    }

    pub fn handle_event(&mut self, event: ControllerEvent) {
        match event {
            ControllerEvent::ProcessResolved(result) => self.resolve_process(result),
            ControllerEvent::HealthResolved(status) => self.apply_health(status),
        }
    }

    fn resolve_process(&mut self, result: Result<serde_json::Value, TransportError>) {
        self.session.thinking = false;
        self.presenter.clear_thinking();

        let text = match result {
            Ok(payload) => serde_json::from_value::<ProcessResponse>(payload)
                .ok()
                .and_then(|r| r.response)
                .filter(|r| !r.trim().is_empty())
                .unwrap_or_else(|| messages::EMPTY_RESPONSE.to_string()),
            Err(e) => {
                tracing::debug!("process request failed: {e}");
                messages::CONNECTIVITY_ERROR.to_string()
            }
        };
        self.append_assistant(text);
    }

    /// Switch the active profile. Committed only after the backend confirms;
    /// on rejection or transport failure the session field is untouched.
    pub async fn switch_profile(&mut self, profile: Profile) {
        let body = json!({ "profile_id": profile.id() });
        if self.request_switch(Endpoint::ProfileSwitch, body).await {
            self.session.set_profile(profile);
            self.append_assistant(messages::profile_switched(profile));
            self.push_display_label();
        } else {
            self.append_assistant(messages::profile_switch_failed(profile));
        }
    }

    /// Switch the active character. Same protocol as [`Self::switch_profile`].
    pub async fn switch_character(&mut self, character: Character) {
        let body = json!({ "character_id": character.id() });
        if self.request_switch(Endpoint::CharacterSwitch, body).await {
            self.session.set_character(character);
            self.append_assistant(messages::character_switched(character));
            self.push_display_label();
        } else {
            self.append_assistant(messages::character_switch_failed(character));
        }
    }

    async fn request_switch(&self, endpoint: Endpoint, body: serde_json::Value) -> bool {
        match self.transport.call(endpoint, Some(body)).await {
            Ok(payload) => serde_json::from_value::<SwitchResponse>(payload)
                .map(|r| r.success)
                .unwrap_or(false),
            Err(e) => {
                tracing::debug!("switch request failed: {e}");
                false
            }
        }
    }

    /// Ask the backend to re-sync its knowledge files and report the result.
    pub async fn force_sync(&mut self) {
        match self.transport.call(Endpoint::ForceSync, None).await {
            Ok(payload) => {
                let sync: SyncResponse = serde_json::from_value(payload).unwrap_or_default();
                if sync.status == "success" {
                    self.append_assistant(messages::sync_completed(sync.processed_files));
                } else {
                    self.append_assistant(messages::SYNC_FAILED.to_string());
                }
            }
            Err(e) => {
                tracing::debug!("sync request failed: {e}");
                self.append_assistant(messages::SYNC_FAILED.to_string());
            }
        }
    }

    /// Empty the transcript and erase its snapshot. Callers must have
    /// obtained explicit user confirmation first. The confirmation notice is
    /// rendered but not recorded, so a restore after clearing is empty.
    pub fn clear_transcript(&mut self) {
        self.store.clear();
        self.notice(messages::TRANSCRIPT_CLEARED);
    }

    /// Render a session-local notice without recording it in the transcript.
    pub fn notice(&mut self, text: &str) {
        self.presenter.render(&Turn::assistant(text));
        self.presenter.scroll_to_latest();
    }

    fn apply_health(&mut self, status: HealthStatus) {
        self.presenter.set_status_indicator(status);
        if status == HealthStatus::Online {
            self.push_display_label();
        }
    }

    pub fn push_display_label(&mut self) {
        let label = self.session.display_label();
        self.presenter.set_display_label(&label);
    }

    fn append_assistant(&mut self, text: String) {
        let turn = Turn::assistant(text);
        self.presenter.render(&turn);
        self.store.append(turn);
        self.persist();
        self.presenter.scroll_to_latest();
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.persist() {
            tracing::warn!("could not persist transcript snapshot: {e}");
        }
    }
}
