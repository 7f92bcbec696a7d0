//! Application state and core logic

use crate::config::FormConfig;
use crate::lookup::{HttpLookupClient, LookupClient, LookupError, PanResponse, PostcodeResponse};
use crate::state::{validate_for_submit, AppState, FieldId, LookupRequest};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Outcome of one enrichment lookup, delivered back to the event loop.
///
/// Carries the value the request was issued with, so applying the outcome
/// merges exactly what that request looked up. A response for a superseded
/// request still applies in full: last response wins.
#[derive(Debug)]
pub enum LookupOutcome {
    Postcode {
        postcode: String,
        result: Result<PostcodeResponse, LookupError>,
    },
    Pan {
        pan: String,
        result: Result<PanResponse, LookupError>,
    },
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client for the two lookup endpoints
    lookup: Arc<dyn LookupClient>,
    /// Sender handed to spawned lookup tasks
    outcome_tx: mpsc::UnboundedSender<LookupOutcome>,
    /// Receiver drained by the event loop
    outcome_rx: mpsc::UnboundedReceiver<LookupOutcome>,
    /// Whether the app should quit
    quit: bool,
    /// Submission feedback message
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance with the production HTTP client
    pub fn new(config: &FormConfig) -> Result<Self> {
        let client = HttpLookupClient::new(config)?;
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Create an App around any lookup client
    pub fn with_client(lookup: Arc<dyn LookupClient>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            lookup,
            outcome_tx,
            outcome_rx,
            quit: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Enter | KeyCode::Down => self.state.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_field(),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit();
            }
            KeyCode::Esc => self.quit = true,
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let request = self.state.input_char(c);
                self.dispatch(request);
            }
            KeyCode::Backspace => {
                let request = self.state.backspace();
                self.dispatch(request);
            }
            _ => {}
        }
    }

    /// Spawn the lookup an edit asked for, if any.
    ///
    /// Fire-and-forget: no retry, no cancellation of a superseded request,
    /// no deduplication. The keystroke that triggered this has already been
    /// merged into the record.
    fn dispatch(&mut self, request: Option<LookupRequest>) {
        let Some(request) = request else {
            return;
        };

        let client = Arc::clone(&self.lookup);
        let tx = self.outcome_tx.clone();

        match request {
            LookupRequest::Postcode(postcode) => {
                self.state.postcode_phase.start();
                tokio::spawn(async move {
                    let result = client.postcode_details(&postcode).await;
                    // Send fails only when the form is shutting down.
                    let _ = tx.send(LookupOutcome::Postcode { postcode, result });
                });
            }
            LookupRequest::Pan(pan) => {
                self.state.pan_phase.start();
                tokio::spawn(async move {
                    let result = client.verify_pan(&pan).await;
                    let _ = tx.send(LookupOutcome::Pan { pan, result });
                });
            }
        }
    }

    /// Drain and apply all completed lookups. Called once per event-loop
    /// iteration, so record mutation stays single-threaded.
    pub fn poll_lookups(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.apply_lookup(outcome);
        }
    }

    /// Merge one lookup outcome into the form state.
    ///
    /// The field's phase returns to idle on every path.
    fn apply_lookup(&mut self, outcome: LookupOutcome) {
        match outcome {
            LookupOutcome::Postcode { postcode, result } => {
                self.state.postcode_phase.finish();
                match result {
                    Ok(resp) if resp.is_success() => {
                        self.state.record.city = resp.first_city().to_string();
                        self.state.record.state = resp.first_state().to_string();
                        self.state.record.postcode = postcode;
                    }
                    Ok(resp) => {
                        tracing::debug!(status = %resp.status, "postcode lookup returned non-success status");
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "postcode lookup failed");
                    }
                }
            }
            LookupOutcome::Pan { pan, result } => {
                self.state.pan_phase.finish();
                match result {
                    Ok(resp) => {
                        if resp.is_verified() {
                            let (first, last) = resp.split_name();
                            self.state.record.first_name = first;
                            self.state.record.last_name = last;
                        } else {
                            self.state.record.first_name.clear();
                            self.state.record.last_name.clear();
                        }
                        self.state.record.pan = pan;
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "PAN verification failed");
                    }
                }
            }
        }
    }

    /// Validate and submit the form.
    ///
    /// Blocks on the first failing rule and focuses the offending field;
    /// on success the record is handed off to the log and the form resets.
    fn submit(&mut self) {
        match validate_for_submit(&self.state.record) {
            Ok(()) => {
                tracing::info!(record = ?self.state.record, "registration submitted");
                self.status_message = Some("Registration submitted".to_string());
                self.state.clear_form();
            }
            Err(err) => {
                match err.field {
                    FieldId::Email => self.state.email_error = Some(err.message),
                    FieldId::ContactNumber => self.state.contact_number_error = Some(err.message),
                    _ => {}
                }
                if let Some(index) = FieldId::ALL.iter().position(|f| *f == err.field) {
                    self.state.active_field = index;
                }
                self.status_message = None;
            }
        }
    }
}
