use crate::consts::REJECTION_CUE_MS;
use std::time::{Duration, Instant};

/// Transient "no more room" signal shown after a rejected insert (the shake).
///
/// Purely a function of the instants the caller hands in; nothing runs in the
/// background and an expired cue simply reads as inactive.
#[derive(Debug, Clone, Copy, Default)]
pub struct RejectionCue {
    raised_at: Option<Instant>,
}

impl RejectionCue {
    pub const DURATION: Duration = Duration::from_millis(REJECTION_CUE_MS);

    /// Raising while active restarts the cue.
    pub fn raise(&mut self, now: Instant) {
        self.raised_at = Some(now);
    }

    pub fn is_active(&self, now: Instant) -> bool {
        match self.raised_at {
            Some(at) => now.saturating_duration_since(at) < Self::DURATION,
            None => false,
        }
    }

    /// Clears an expired cue. Returns true if it was cleared by this call.
    pub fn settle(&mut self, now: Instant) -> bool {
        if self.raised_at.is_some() && !self.is_active(now) {
            self.raised_at = None;
            return true;
        }
        false
    }
}
