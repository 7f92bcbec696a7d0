//! Application state definitions

use super::form::{FieldId, FormRecord, PAN_LEN, POSTCODE_LEN};
use super::lookup_state::LookupPhase;
use super::validate::{live_contact_number_error, live_email_error};

/// Enrichment lookup requested by an edit.
///
/// Carries the normalized field value the request must be issued with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupRequest {
    Postcode(String),
    Pan(String),
}

/// The one owned, mutable state aggregate of the form.
///
/// All mutation is sequenced through the single-threaded event loop; the
/// record, field errors, and lookup phases never outlive the form.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Collected field values
    pub record: FormRecord,
    /// Live email validation message
    pub email_error: Option<String>,
    /// Live contact-number validation message
    pub contact_number_error: Option<String>,
    /// PAN verification phase
    pub pan_phase: LookupPhase,
    /// Postcode resolution phase
    pub postcode_phase: LookupPhase,
    /// Index into `FieldId::ALL` of the focused field
    pub active_field: usize,
}

impl AppState {
    pub fn active_field_id(&self) -> FieldId {
        FieldId::ALL[self.active_field]
    }

    /// Move focus to the next field
    pub fn next_field(&mut self) {
        self.active_field = (self.active_field + 1) % FieldId::ALL.len();
    }

    /// Move focus to the previous field
    pub fn prev_field(&mut self) {
        if self.active_field == 0 {
            self.active_field = FieldId::ALL.len() - 1;
        } else {
            self.active_field -= 1;
        }
    }

    /// Handle character input on the focused field.
    ///
    /// The raw edit is normalized, merged into the record, and live
    /// validation runs. Returns the enrichment lookup the edit calls for,
    /// if any.
    pub fn input_char(&mut self, c: char) -> Option<LookupRequest> {
        let field = self.active_field_id();
        let mut raw = self.record.get(field).to_string();
        raw.push(c);
        self.apply_edit(field, &raw)
    }

    /// Handle backspace on the focused field.
    pub fn backspace(&mut self) -> Option<LookupRequest> {
        let field = self.active_field_id();
        let mut raw = self.record.get(field).to_string();
        if raw.pop().is_none() {
            return None;
        }
        self.apply_edit(field, &raw)
    }

    /// Normalize and merge an edited value, then decide whether the edit
    /// triggers an enrichment lookup.
    fn apply_edit(&mut self, field: FieldId, raw: &str) -> Option<LookupRequest> {
        let value = field.normalize(raw);
        self.record.set(field, value.clone());

        match field {
            FieldId::Email => {
                self.email_error = live_email_error(&value);
                None
            }
            FieldId::ContactNumber => {
                self.contact_number_error = live_contact_number_error(&value);
                None
            }
            FieldId::Postcode if value.len() == POSTCODE_LEN => {
                Some(LookupRequest::Postcode(value))
            }
            FieldId::Pan if value.len() == PAN_LEN => Some(LookupRequest::Pan(value)),
            _ => None,
        }
    }

    /// Error message attached to a field, if any.
    pub fn field_error(&self, field: FieldId) -> Option<&str> {
        match field {
            FieldId::Email => self.email_error.as_deref(),
            FieldId::ContactNumber => self.contact_number_error.as_deref(),
            _ => None,
        }
    }

    /// Whether a field has an enrichment lookup in flight.
    pub fn field_busy(&self, field: FieldId) -> bool {
        match field {
            FieldId::Pan => self.pan_phase.is_in_flight(),
            FieldId::Postcode => self.postcode_phase.is_in_flight(),
            _ => false,
        }
    }

    /// Reset the form after a successful submit.
    ///
    /// In-flight lookups are not cancelled; their phases stay as they are
    /// and their responses still apply when they arrive.
    pub fn clear_form(&mut self) {
        self.record = FormRecord::default();
        self.email_error = None;
        self.contact_number_error = None;
        self.active_field = 0;
    }
}
