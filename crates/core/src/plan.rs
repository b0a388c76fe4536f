// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pure transition planners.
//!
//! Each planner inspects the current record and the acting identity and
//! produces the exact column writes a transition is allowed to perform.
//! Authorization order is deliberate: ownership and role checks run before
//! status checks, so a caller poking at someone else's expedition learns
//! nothing about its state.

use time::OffsetDateTime;

use summit_domain::{
    Actor, Expedition, ExpeditionStatus, validate_expedition_name, validate_expedition_year,
};

use crate::error::CoreError;

/// The column writes produced by a planned status transition.
///
/// The persistence adapter applies this with a compare-and-swap on `from`,
/// so a concurrent transition on the same row leaves exactly one winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChange {
    /// The expected current status (CAS guard).
    pub from: ExpeditionStatus,
    /// The status to write.
    pub to: ExpeditionStatus,
    /// `formed_at` value to write, if this transition forms the expedition.
    pub formed_at: Option<OffsetDateTime>,
    /// `closed_at` value to write, if this transition closes the record.
    pub closed_at: Option<OffsetDateTime>,
    /// Deciding moderator to record, if any.
    pub moderator_id: Option<i64>,
}

/// The column writes produced by a planned field edit.
///
/// Status and every timestamp are server-owned; an edit can only ever
/// touch the name and target year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEdit {
    /// The new display name.
    pub name: String,
    /// The new target year.
    pub year: i32,
}

/// Plans the owner's draft-to-formed transition.
///
/// # Errors
///
/// Returns `CoreError::WrongUser` if the actor does not own the record and
/// `CoreError::InvalidStatus` if the record is not currently a draft.
pub fn plan_formation(
    expedition: &Expedition,
    actor: &Actor,
    now: OffsetDateTime,
) -> Result<StatusChange, CoreError> {
    ensure_owner(expedition, actor)?;
    ensure_transition(expedition, ExpeditionStatus::Formed)?;

    Ok(StatusChange {
        from: expedition.status,
        to: ExpeditionStatus::Formed,
        formed_at: Some(now),
        closed_at: None,
        moderator_id: None,
    })
}

/// Plans a moderator decision on a formed expedition.
///
/// The decision must be one of `approved`, `denied`, or `canceled`; the
/// closing decisions stamp `closed_at`. The deciding moderator is recorded
/// on the row.
///
/// # Errors
///
/// Returns `CoreError::Forbidden` if the actor is not a moderator and
/// `CoreError::InvalidStatus` if the record is not currently formed or the
/// decision is not a valid outcome.
pub fn plan_decision(
    expedition: &Expedition,
    decision: ExpeditionStatus,
    actor: &Actor,
    now: OffsetDateTime,
) -> Result<StatusChange, CoreError> {
    if !actor.is_moderator() {
        return Err(CoreError::Forbidden {
            action: String::from("decide expedition"),
            reason: String::from("moderator role required"),
        });
    }

    ensure_transition(expedition, decision)?;

    let closed_at: Option<OffsetDateTime> = decision.is_closing().then_some(now);

    Ok(StatusChange {
        from: expedition.status,
        to: decision,
        formed_at: None,
        closed_at,
        moderator_id: Some(actor.user_id),
    })
}

/// Plans the owner abandoning their draft.
///
/// # Errors
///
/// Returns `CoreError::WrongUser` if the actor does not own the record and
/// `CoreError::InvalidStatus` if the record is not currently a draft.
pub fn plan_abandon(
    expedition: &Expedition,
    actor: &Actor,
    now: OffsetDateTime,
) -> Result<StatusChange, CoreError> {
    ensure_owner(expedition, actor)?;
    ensure_transition(expedition, ExpeditionStatus::Deleted)?;

    Ok(StatusChange {
        from: expedition.status,
        to: ExpeditionStatus::Deleted,
        formed_at: None,
        closed_at: Some(now),
        moderator_id: None,
    })
}

/// Plans an owner editing the client-writable fields of their expedition.
///
/// # Errors
///
/// Returns `CoreError::WrongUser` if the actor does not own the record and
/// `CoreError::DomainViolation` if the name or year is invalid.
pub fn plan_field_edit(
    expedition: &Expedition,
    name: &str,
    year: i32,
    actor: &Actor,
) -> Result<FieldEdit, CoreError> {
    ensure_owner(expedition, actor)?;
    validate_expedition_name(name)?;
    validate_expedition_year(year)?;

    Ok(FieldEdit {
        name: String::from(name),
        year,
    })
}

/// Whether `actor` may see this expedition at all.
///
/// Owners always see their own rows, deleted ones included. Moderators see
/// every row except deleted ones. Everyone else sees nothing, and callers
/// must surface an invisible row exactly like a missing one.
#[must_use]
pub fn can_view(expedition: &Expedition, actor: &Actor) -> bool {
    if expedition.is_owned_by(actor) {
        return true;
    }
    actor.is_moderator() && expedition.status != ExpeditionStatus::Deleted
}

fn ensure_owner(expedition: &Expedition, actor: &Actor) -> Result<(), CoreError> {
    if expedition.is_owned_by(actor) {
        Ok(())
    } else {
        Err(CoreError::WrongUser {
            user_id: actor.user_id,
        })
    }
}

fn ensure_transition(expedition: &Expedition, target: ExpeditionStatus) -> Result<(), CoreError> {
    if expedition.status.can_transition_to(&target) {
        Ok(())
    } else {
        Err(CoreError::InvalidStatus {
            from: expedition.status,
            attempted: target,
        })
    }
}
