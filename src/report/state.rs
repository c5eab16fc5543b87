//! Report access state machine
//!
//! ```text
//!   create ──► LOCKED ──unlock──► UNLOCKED ◄─┐
//!                                   │        │ unlock (no-op)
//!                                   └────────┘
//! ```
//!
//! There is no transition back to `Locked`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccessState {
    #[default]
    Locked,
    Unlocked,
}

/// What an unlock attempt did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Locked -> Unlocked
    Unlocked,
    /// Already unlocked; nothing changed
    AlreadyUnlocked,
}

impl AccessState {
    pub fn is_locked(&self) -> bool {
        matches!(self, AccessState::Locked)
    }

    /// Apply the unlock event
    pub fn unlock(self) -> (AccessState, Transition) {
        match self {
            AccessState::Locked => (AccessState::Unlocked, Transition::Unlocked),
            AccessState::Unlocked => (AccessState::Unlocked, Transition::AlreadyUnlocked),
        }
    }
}

impl std::fmt::Display for AccessState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccessState::Locked => write!(f, "LOCKED"),
            AccessState::Unlocked => write!(f, "UNLOCKED"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_locked() {
        assert!(AccessState::default().is_locked());
    }

    #[test]
    fn test_unlock_is_terminal() {
        let (state, t) = AccessState::Locked.unlock();
        assert_eq!(state, AccessState::Unlocked);
        assert_eq!(t, Transition::Unlocked);

        let (again, t) = state.unlock();
        assert_eq!(again, AccessState::Unlocked);
        assert_eq!(t, Transition::AlreadyUnlocked);
    }

    #[test]
    fn test_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&AccessState::Unlocked).expect("serialize"),
            "\"UNLOCKED\""
        );
    }
}
