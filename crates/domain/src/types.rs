// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Core domain types.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::DomainError;
use crate::expedition_status::ExpeditionStatus;

/// Role of an authenticated caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Regular user: owns drafts and sees only their own expeditions.
    User,
    /// Moderator: decides formed expeditions and sees all non-deleted rows.
    Moderator,
}

impl Role {
    /// Returns the canonical string representation of this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Moderator => "moderator",
        }
    }

    /// Parses a role from its canonical string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRole` if the string does not name a
    /// known role.
    pub fn parse_str(value: &str) -> Result<Self, DomainError> {
        match value {
            "user" => Ok(Self::User),
            "moderator" => Ok(Self::Moderator),
            _ => Err(DomainError::InvalidRole(String::from(value))),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

/// The identity on whose behalf a workflow operation runs.
///
/// Every workflow call receives an explicit actor; there are no ambient
/// or hardcoded identities anywhere in the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    /// Account ID of the caller.
    pub user_id: i64,
    /// Role of the caller.
    pub role: Role,
}

impl Actor {
    /// Creates a new actor.
    #[must_use]
    pub const fn new(user_id: i64, role: Role) -> Self {
        Self { user_id, role }
    }

    /// Whether the actor holds the moderator role.
    #[must_use]
    pub const fn is_moderator(&self) -> bool {
        matches!(self.role, Role::Moderator)
    }
}

/// Record status of a catalog alpinist (soft delete flag).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlpinistRecordStatus {
    /// Visible and usable in expeditions.
    Active,
    /// Soft-deleted; cannot be added to expeditions.
    Removed,
}

impl AlpinistRecordStatus {
    /// Returns the canonical string representation of this record status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Removed => "removed",
        }
    }

    /// Parses a record status from its canonical string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRecordStatus` for unknown strings.
    pub fn parse_str(value: &str) -> Result<Self, DomainError> {
        match value {
            "active" => Ok(Self::Active),
            "removed" => Ok(Self::Removed),
            _ => Err(DomainError::InvalidRecordStatus(String::from(value))),
        }
    }
}

impl std::fmt::Display for AlpinistRecordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A catalogued alpinist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alpinist {
    /// Storage-assigned ID, absent until persisted.
    pub alpinist_id: Option<i64>,
    /// Full name.
    pub name: String,
    /// Lifetime description, e.g. `"1943-1986"`.
    pub lifetime: String,
    /// Country of origin.
    pub country: String,
    /// Free-form biography.
    pub description: String,
    /// Optional reference to a portrait image.
    pub image_ref: Option<String>,
    /// Soft delete flag.
    pub record_status: AlpinistRecordStatus,
}

/// An expedition request.
///
/// Status and all timestamps are server-owned: they are only ever written
/// by workflow transitions, never accepted from a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expedition {
    /// Storage-assigned ID, absent until persisted.
    pub expedition_id: Option<i64>,
    /// Display name, possibly empty for a fresh draft.
    pub name: String,
    /// Target year of the expedition.
    pub year: i32,
    /// Current lifecycle status.
    pub status: ExpeditionStatus,
    /// Set once at draft creation; never changes.
    pub created_at: OffsetDateTime,
    /// Set exactly once, at the draft-to-formed transition.
    pub formed_at: Option<OffsetDateTime>,
    /// Set iff a closing status (denied, canceled, deleted) is reached.
    pub closed_at: Option<OffsetDateTime>,
    /// Owning user.
    pub user_id: i64,
    /// Creating (when a moderator drafted it) or deciding moderator.
    pub moderator_id: Option<i64>,
}

impl Expedition {
    /// Creates a fresh draft owned by `actor`, created at `now`.
    ///
    /// When the actor is a moderator, the moderator ID column is populated
    /// alongside the owner column, mirroring the dual-ownership design.
    #[must_use]
    pub fn new_draft(actor: &Actor, now: OffsetDateTime) -> Self {
        let moderator_id: Option<i64> = actor.is_moderator().then_some(actor.user_id);
        Self {
            expedition_id: None,
            name: String::new(),
            year: now.year(),
            status: ExpeditionStatus::Draft,
            created_at: now,
            formed_at: None,
            closed_at: None,
            user_id: actor.user_id,
            moderator_id,
        }
    }

    /// Returns a copy of this expedition with the given storage ID.
    #[must_use]
    pub fn with_id(mut self, expedition_id: i64) -> Self {
        self.expedition_id = Some(expedition_id);
        self
    }

    /// Whether `actor` owns this expedition.
    #[must_use]
    pub const fn is_owned_by(&self, actor: &Actor) -> bool {
        self.user_id == actor.user_id
    }
}
