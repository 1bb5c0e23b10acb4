//! Readiness state machine for registered projects
//!
//! A project is either still waiting for its persisted state or ready to be
//! used. Registration itself is one-way and has no state of its own here.

use std::fmt;

use tableau_common::StateError;

// ============================================================================
// Readiness State Machine
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReadinessState {
    /// Waiting for state to be hydrated
    Loading,
    Ready,
}

impl ReadinessState {
    /// Ready projects never go back to loading
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Ready)
    }

    /// Get all valid next states from current state
    pub fn valid_transitions(&self) -> &'static [ReadinessState] {
        match self {
            Self::Loading => &[Self::Ready],
            Self::Ready => &[],
        }
    }
}

impl fmt::Display for ReadinessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => write!(f, "loading"),
            Self::Ready => write!(f, "ready"),
        }
    }
}

/// Events that trigger readiness transitions
#[derive(Debug, Clone, PartialEq)]
pub enum ReadinessEvent {
    /// Persisted state (or the decision to start empty) was supplied
    Hydrate,
}

impl fmt::Display for ReadinessEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hydrate => write!(f, "hydrate"),
        }
    }
}

pub struct ReadinessStateMachine;

impl ReadinessStateMachine {
    /// Attempt a state transition
    pub fn transition(
        current: ReadinessState,
        event: ReadinessEvent,
    ) -> Result<ReadinessState, StateError> {
        match (current, &event) {
            (ReadinessState::Loading, ReadinessEvent::Hydrate) => Ok(ReadinessState::Ready),
            (ReadinessState::Ready, _) => Err(StateError::TerminalState(current.to_string())),
        }
    }

    /// Check if a transition is valid without performing it
    pub fn can_transition(current: ReadinessState, event: &ReadinessEvent) -> bool {
        Self::transition(current, event.clone()).is_ok()
    }
}
