//! Idea fetch state: the widget's request state machine

use std::sync::Arc;

use eframe::egui;
use tokio::task::JoinHandle;

use crate::auth::AuthGate;
use crate::client::IdeaSource;
use crate::error::FetchError;
use crate::state::StateEvent;
use crate::task::{abort_task, poll_task, PollResult};

/// Where the widget's single request currently stands
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A request is in flight
    Loading,
    /// The backend returned an idea (whitespace trimmed)
    Done(String),
    /// The request failed; holds the message shown to the user
    Error(String),
}

impl RequestState {
    /// Settle a finished request
    pub fn from_outcome(outcome: Result<String, FetchError>) -> Self {
        match outcome {
            Ok(text) => Self::Done(text.trim().to_string()),
            Err(e) => Self::Error(e.user_message()),
        }
    }

    /// Short description for the status bar
    pub fn description(&self) -> &'static str {
        match self {
            Self::Idle => "Ready",
            Self::Loading => "Generating your business idea...",
            Self::Done(_) => "Idea ready",
            Self::Error(_) => "Request failed",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn idea(&self) -> Option<&str> {
        match self {
            Self::Done(text) => Some(text),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// State behind the idea widget.
///
/// Owns the request state and the in-flight task. A new trigger aborts the
/// previous task, so the displayed outcome always belongs to the latest
/// trigger. Dropping the state aborts the task as well.
pub struct IdeaState {
    /// Where ideas come from
    source: Arc<dyn IdeaSource>,
    /// Capability check deciding whether a fetch is allowed
    gate: AuthGate,
    /// Fetch once when the widget first becomes active
    fetch_on_activate: bool,
    /// Whether `activate` has already run
    activated: bool,
    /// Current request state
    state: RequestState,
    /// Async task for the in-flight request
    task: Option<JoinHandle<Result<String, FetchError>>>,
    /// Number of requests issued so far
    requests: u64,
}

impl IdeaState {
    pub fn new(source: Arc<dyn IdeaSource>, gate: AuthGate, fetch_on_activate: bool) -> Self {
        Self {
            source,
            gate,
            fetch_on_activate,
            activated: false,
            state: RequestState::Idle,
            task: None,
            requests: 0,
        }
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn gate(&self) -> &AuthGate {
        &self.gate
    }

    /// Whether the current viewer may fetch
    pub fn is_permitted(&self) -> bool {
        self.gate.permits()
    }

    /// Number of requests issued over the widget's lifetime
    pub fn requests_issued(&self) -> u64 {
        self.requests
    }

    /// Called when the widget first becomes active.
    ///
    /// Issues the initial fetch at most once, and only when configured to and
    /// permitted by the gate.
    pub fn activate(&mut self) -> Option<StateEvent> {
        if self.activated {
            return None;
        }
        self.activated = true;

        if self.fetch_on_activate && self.gate.permits() {
            tracing::debug!("Fetching initial idea on activation");
            self.request_idea()
        } else {
            None
        }
    }

    /// Trigger a new request
    pub fn request_idea(&mut self) -> Option<StateEvent> {
        if !self.gate.permits() {
            if abort_task(&mut self.task) {
                tracing::debug!("Dropped in-flight request after sign-out");
            }
            self.state = RequestState::Idle;
            return Some(StateEvent::AuthRequired);
        }

        if abort_task(&mut self.task) {
            tracing::debug!("Superseding in-flight request #{}", self.requests);
        }

        self.requests += 1;
        self.state = RequestState::Loading;
        tracing::info!("Requesting idea (request #{})", self.requests);

        self.task = Some(tokio::spawn(self.source.fetch_idea()));

        Some(StateEvent::StatusMessage(
            self.state.description().to_string(),
        ))
    }

    /// Drop any in-flight request and return to Idle
    pub fn reset(&mut self) {
        if abort_task(&mut self.task) {
            tracing::debug!("Dropped in-flight request on reset");
        }
        self.state = RequestState::Idle;
    }

    /// Poll the in-flight request for completion
    pub fn poll(&mut self, ctx: &egui::Context) -> Vec<StateEvent> {
        let mut events = Vec::new();

        match poll_task(&mut self.task) {
            PollResult::Complete(Ok(outcome)) => {
                if let Err(ref e) = outcome {
                    events.push(StateEvent::LogError(format!("Failed to fetch idea: {}", e)));
                } else {
                    events.push(StateEvent::LogInfo(format!(
                        "Request #{} completed",
                        self.requests
                    )));
                }
                self.state = RequestState::from_outcome(outcome);
                events.push(StateEvent::StatusMessage(
                    self.state.description().to_string(),
                ));
            }
            PollResult::Complete(Err(e)) => {
                let msg = e.to_string();
                events.push(StateEvent::LogError(format!("Fetch task panicked: {}", msg)));
                self.state = RequestState::from_outcome(Err(FetchError::transport(msg)));
                events.push(StateEvent::StatusMessage(
                    self.state.description().to_string(),
                ));
            }
            PollResult::Pending => ctx.request_repaint(),
            PollResult::NoTask => {}
        }

        events
    }
}

impl Drop for IdeaState {
    fn drop(&mut self) {
        if abort_task(&mut self.task) {
            tracing::debug!("Discarding in-flight request on teardown");
        }
    }
}
