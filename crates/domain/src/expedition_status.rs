// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Expedition status state machine.
//!
//! An expedition moves through a small, source-status-gated lifecycle:
//!
//! ```text
//! draft  -> formed                       (owner requests formation)
//! draft  -> deleted                      (owner abandons the draft)
//! formed -> approved | denied | canceled (moderator decision)
//! ```
//!
//! All other transitions are invalid. `approved`, `denied`, `canceled`,
//! and `deleted` are terminal; `denied`, `canceled`, and `deleted`
//! additionally close the expedition and stamp `closed_at`.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Lifecycle status of an expedition request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpeditionStatus {
    /// Open draft owned by a single user.
    Draft,
    /// Submitted and awaiting a moderator decision.
    Formed,
    /// Accepted by a moderator.
    Approved,
    /// Rejected by a moderator.
    Denied,
    /// Withdrawn by a moderator.
    Canceled,
    /// Abandoned by its owner while still a draft.
    Deleted,
}

impl ExpeditionStatus {
    /// Returns the canonical string representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Formed => "formed",
            Self::Approved => "approved",
            Self::Denied => "denied",
            Self::Canceled => "canceled",
            Self::Deleted => "deleted",
        }
    }

    /// Parses a status from its canonical string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidExpeditionStatus` if the string does not
    /// name a known status.
    pub fn parse_str(value: &str) -> Result<Self, DomainError> {
        match value {
            "draft" => Ok(Self::Draft),
            "formed" => Ok(Self::Formed),
            "approved" => Ok(Self::Approved),
            "denied" => Ok(Self::Denied),
            "canceled" => Ok(Self::Canceled),
            "deleted" => Ok(Self::Deleted),
            _ => Err(DomainError::InvalidExpeditionStatus(String::from(value))),
        }
    }

    /// Whether this status is terminal (no transitions leave it).
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Approved | Self::Denied | Self::Canceled | Self::Deleted
        )
    }

    /// Whether reaching this status closes the expedition and stamps
    /// `closed_at`. `approved` is terminal but does not close the record.
    #[must_use]
    pub const fn is_closing(&self) -> bool {
        matches!(self, Self::Denied | Self::Canceled | Self::Deleted)
    }

    /// Whether this status is a valid moderator decision outcome.
    #[must_use]
    pub const fn is_moderator_decision(&self) -> bool {
        matches!(self, Self::Approved | Self::Denied | Self::Canceled)
    }

    /// Whether a transition from this status to `target` is allowed.
    #[must_use]
    pub const fn can_transition_to(&self, target: &Self) -> bool {
        matches!(
            (self, target),
            (Self::Draft, Self::Formed)
                | (Self::Draft, Self::Deleted)
                | (Self::Formed, Self::Approved)
                | (Self::Formed, Self::Denied)
                | (Self::Formed, Self::Canceled)
        )
    }

    /// Validates a transition from this status to `target`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatusTransition` if the state machine
    /// does not allow the transition.
    pub fn validate_transition(&self, target: &Self) -> Result<(), DomainError> {
        if self.can_transition_to(target) {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition {
                from: *self,
                to: *target,
            })
        }
    }
}

impl std::fmt::Display for ExpeditionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ExpeditionStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}
