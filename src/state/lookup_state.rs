//! Per-field enrichment lookup phases

/// Phase of one enrichment lookup.
///
/// Each enrichment field owns exactly one phase. Dispatching a lookup moves
/// it to `InFlight`; applying the outcome moves it back to `Idle` on every
/// exit path (success, non-success status, transport failure).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupPhase {
    #[default]
    Idle,
    InFlight,
}

impl LookupPhase {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, LookupPhase::InFlight)
    }

    pub fn start(&mut self) {
        *self = LookupPhase::InFlight;
    }

    pub fn finish(&mut self) {
        *self = LookupPhase::Idle;
    }
}
