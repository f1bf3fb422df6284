use std::time::Instant;

/// Debounce for the input adapter: drops are ignored while the feedback for
/// the previous placement is still in flight. This is UI timing, not game
/// logic; the engine itself accepts the next move the instant `apply_move`
/// returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputLock {
    Ready,
    WaitingForFeedback { until: Instant },
}

impl InputLock {
    pub fn new() -> Self {
        InputLock::Ready
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, InputLock::Ready)
    }

    /// Hold input until the given deadline.
    pub fn engage(&mut self, until: Instant) {
        *self = InputLock::WaitingForFeedback { until };
    }

    /// The feedback-complete signal: release the lock once the deadline has
    /// passed. Called from the poll loop on every tick.
    pub fn release_if_elapsed(&mut self, now: Instant) {
        if let InputLock::WaitingForFeedback { until } = *self {
            if now >= until {
                *self = InputLock::Ready;
            }
        }
    }
}

impl Default for InputLock {
    fn default() -> Self {
        Self::new()
    }
}
