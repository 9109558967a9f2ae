//! Last-completion-reason tracking.
//!
//! The engine reports why an utterance ended through a callback passed to
//! `BoyCtrlSpeak`. One process-wide slot holds the most recent raw code;
//! "is speech in progress" is answered by checking it against the pending
//! sentinel stored at submission time.

use std::sync::atomic::{AtomicI32, Ordering};

/// Stored when a submission is handed to the engine and no callback has
/// fired yet.
const RAW_PENDING: i32 = -1;
/// Initial state: nothing has been submitted.
const RAW_NONE: i32 = 0;

static LAST_REASON: AtomicI32 = AtomicI32::new(RAW_NONE);

/// Why the engine stopped speaking an utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionReason {
    /// Speech ran to completion.
    Finished,
    /// Interrupted by a newer speech submission.
    Preempted,
    /// Interrupted by a stop call.
    Stopped,
}

impl CompletionReason {
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            1 => Some(Self::Finished),
            2 => Some(Self::Preempted),
            3 => Some(Self::Stopped),
            _ => None,
        }
    }

    pub fn as_raw(self) -> i32 {
        match self {
            Self::Finished => 1,
            Self::Preempted => 2,
            Self::Stopped => 3,
        }
    }
}

/// Completion callback handed to the engine with every speak submission.
pub extern "system" fn speak_complete(reason: i32) {
    LAST_REASON.store(reason, Ordering::SeqCst);
}

/// True between a speak submission and its completion callback.
pub fn is_speech_pending() -> bool {
    LAST_REASON.load(Ordering::SeqCst) == RAW_PENDING
}

/// The most recent completion reason, if any utterance has finished.
pub fn last_completion() -> Option<CompletionReason> {
    CompletionReason::from_raw(LAST_REASON.load(Ordering::SeqCst))
}

/// Record that a submission is in flight.
pub fn mark_pending() {
    LAST_REASON.store(RAW_PENDING, Ordering::SeqCst);
}

/// Record a completion locally, without waiting for the engine.
pub fn mark(reason: CompletionReason) {
    LAST_REASON.store(reason.as_raw(), Ordering::SeqCst);
}

/// Forget an in-flight submission that the engine rejected.
pub fn clear() {
    LAST_REASON.store(RAW_NONE, Ordering::SeqCst);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_reason_codes() {
        assert_eq!(CompletionReason::from_raw(1), Some(CompletionReason::Finished));
        assert_eq!(CompletionReason::from_raw(2), Some(CompletionReason::Preempted));
        assert_eq!(CompletionReason::from_raw(3), Some(CompletionReason::Stopped));
        assert_eq!(CompletionReason::from_raw(0), None);
        assert_eq!(CompletionReason::from_raw(-1), None);
        assert_eq!(CompletionReason::from_raw(4), None);
    }

    // Single test so the process-wide slot is never raced by the harness.
    #[test]
    fn test_completion_state_machine() {
        assert!(!is_speech_pending());
        assert_eq!(last_completion(), None);

        mark_pending();
        assert!(is_speech_pending());
        assert_eq!(last_completion(), None);

        speak_complete(CompletionReason::Finished.as_raw());
        assert!(!is_speech_pending());
        assert_eq!(last_completion(), Some(CompletionReason::Finished));

        mark_pending();
        speak_complete(CompletionReason::Preempted.as_raw());
        assert_eq!(last_completion(), Some(CompletionReason::Preempted));

        mark_pending();
        mark(CompletionReason::Stopped);
        assert!(!is_speech_pending());
        assert_eq!(last_completion(), Some(CompletionReason::Stopped));

        mark_pending();
        clear();
        assert!(!is_speech_pending());
        assert_eq!(last_completion(), None);
    }
}
