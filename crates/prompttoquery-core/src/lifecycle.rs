//! Client lifecycle state machine

use serde::{Deserialize, Serialize};

/// Query client lifecycle states
///
/// State transitions:
/// ```text
/// Unbound → Bound → Ready
///    │        │
///    └────────┴──→ Failed
/// ```
///
/// There is no way back from `Ready` or `Failed`: a client that failed to
/// initialize is discarded and a new one constructed.
///
/// `Unbound` describes the pipeline before a library is bound. A client value
/// only exists once binding succeeded, so a constructed client starts out
/// `Bound`, and a load or bind failure is returned as an error instead of a
/// `Failed` client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientState {
    /// No native library has been bound yet; never observed on a client
    #[default]
    Unbound,
    /// The library is loaded and its entry points bound
    Bound,
    /// `InitSDK` succeeded; queries may be generated
    Ready,
    /// Loading, binding, or initialization failed
    Failed,
}

impl ClientState {
    /// Check if this state can transition to the target state
    pub fn can_transition_to(&self, target: ClientState) -> bool {
        use ClientState::*;
        matches!(
            (self, target),
            (Unbound, Bound) | (Bound, Ready) | (Unbound, Failed) | (Bound, Failed)
        )
    }

    /// Check if queries can be generated in this state
    pub fn can_handle_requests(&self) -> bool {
        matches!(self, ClientState::Ready)
    }

    /// Check if no further transitions are possible
    pub fn is_terminal(&self) -> bool {
        matches!(self, ClientState::Ready | ClientState::Failed)
    }
}

impl std::fmt::Display for ClientState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientState::Unbound => write!(f, "Unbound"),
            ClientState::Bound => write!(f, "Bound"),
            ClientState::Ready => write!(f, "Ready"),
            ClientState::Failed => write!(f, "Failed"),
        }
    }
}

#[cfg(test)]
#[path = "lifecycle/lifecycle_tests.rs"]
mod lifecycle_tests;
