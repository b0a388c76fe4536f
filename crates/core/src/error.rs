// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use summit_domain::{DomainError, ExpeditionStatus};

/// Errors that can occur while planning a workflow operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated (invalid name, year, status string, ...).
    DomainViolation(DomainError),
    /// The actor's role does not permit the attempted action.
    Forbidden {
        /// The attempted action.
        action: String,
        /// Why the action was refused.
        reason: String,
    },
    /// The actor does not own the expedition they tried to change.
    WrongUser {
        /// The acting user's ID.
        user_id: i64,
    },
    /// The expedition's current status does not permit the attempted
    /// transition.
    InvalidStatus {
        /// The current status.
        from: ExpeditionStatus,
        /// The requested status.
        attempted: ExpeditionStatus,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::Forbidden { action, reason } => {
                write!(f, "Forbidden: cannot {action}: {reason}")
            }
            Self::WrongUser { user_id } => {
                write!(f, "User {user_id} does not own this expedition")
            }
            Self::InvalidStatus { from, attempted } => {
                write!(
                    f,
                    "Expedition status '{from}' does not permit transition to '{attempted}'"
                )
            }
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DomainViolation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
