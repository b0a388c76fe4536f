// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::expedition_status::ExpeditionStatus;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Status string does not name a known expedition status.
    InvalidExpeditionStatus(String),
    /// The requested status transition is not allowed by the state machine.
    InvalidStatusTransition {
        /// The current status.
        from: ExpeditionStatus,
        /// The requested status.
        to: ExpeditionStatus,
    },
    /// Role string does not name a known role.
    InvalidRole(String),
    /// Expedition name is empty or too long.
    InvalidExpeditionName(String),
    /// Expedition target year is outside the supported range.
    InvalidExpeditionYear {
        /// The rejected year value.
        year: i32,
    },
    /// A formed-time window has its start after its end.
    InvalidTimeWindow {
        /// Description of the violation.
        reason: String,
    },
    /// Record status string does not name a known alpinist record status.
    InvalidRecordStatus(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidExpeditionStatus(value) => {
                write!(f, "Invalid expedition status: '{value}'")
            }
            Self::InvalidStatusTransition { from, to } => {
                write!(f, "Invalid status transition from '{from}' to '{to}'")
            }
            Self::InvalidRole(value) => write!(f, "Invalid role: '{value}'"),
            Self::InvalidExpeditionName(msg) => write!(f, "Invalid expedition name: {msg}"),
            Self::InvalidExpeditionYear { year } => {
                write!(f, "Invalid expedition year: {year}. Must be between 1900 and 2200")
            }
            Self::InvalidTimeWindow { reason } => write!(f, "Invalid time window: {reason}"),
            Self::InvalidRecordStatus(value) => {
                write!(f, "Invalid alpinist record status: '{value}'")
            }
        }
    }
}

impl std::error::Error for DomainError {}
