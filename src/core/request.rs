//! Lifecycle tracking for the form's two network requests

use serde::{Deserialize, Serialize};

/// Phase of an asynchronous request as seen by the form state
///
/// Both the catalog fetch and the order submission move through these
/// phases explicitly instead of being fire-and-forget.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestPhase {
    /// No request has been issued yet
    #[default]
    Idle,
    /// A request is in flight
    Pending,
    /// The last request completed successfully
    Succeeded,
    /// The last request failed
    Failed,
}

impl RequestPhase {
    /// Whether a request is currently in flight
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestPhase::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(RequestPhase::default(), RequestPhase::Idle);
        assert!(!RequestPhase::default().is_pending());
        assert!(RequestPhase::Pending.is_pending());
    }
}
