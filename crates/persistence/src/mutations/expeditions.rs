// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Expedition mutations.
//!
//! Two invariants are enforced here rather than in callers:
//!
//! - A user has at most one open draft. `create_or_extend_draft` runs the
//!   find-or-create and the membership append in a single transaction.
//! - Status transitions are compare-and-swap on the expected source
//!   status. A concurrent transition leaves exactly one winner; the loser
//!   observes `PersistenceError::StatusConflict`.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::{debug, info};

use summit_domain::ExpeditionStatus;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::{expedition_members, expeditions};
use crate::error::PersistenceError;

backend_fn! {
/// Finds the owner's open draft or creates one, then appends an alpinist.
///
/// Appending an alpinist that is already a member is a no-op. Returns the
/// draft's expedition ID.
///
/// # Errors
///
/// Returns an error if any statement in the transaction fails.
pub fn create_or_extend_draft(
    conn: &mut _,
    owner_id: i64,
    creator_moderator_id: Option<i64>,
    alpinist_id: i64,
    created_at: &str,
    year: i32,
) -> Result<i64, PersistenceError> {
    conn.transaction(|conn| {
        let existing: Option<i64> = expeditions::table
            .filter(expeditions::user_id.eq(owner_id))
            .filter(expeditions::status.eq(ExpeditionStatus::Draft.as_str()))
            .select(expeditions::expedition_id)
            .first(conn)
            .optional()?;

        let expedition_id: i64 = match existing {
            Some(expedition_id) => {
                debug!("Extending open draft {} for user {}", expedition_id, owner_id);
                expedition_id
            }
            None => {
                diesel::insert_into(expeditions::table)
                    .values((
                        expeditions::name.eq(""),
                        expeditions::year.eq(year),
                        expeditions::status.eq(ExpeditionStatus::Draft.as_str()),
                        expeditions::created_at.eq(created_at),
                        expeditions::user_id.eq(owner_id),
                        expeditions::moderator_id.eq(creator_moderator_id),
                    ))
                    .execute(conn)?;

                let expedition_id: i64 = conn.get_last_insert_rowid()?;
                info!("Created draft {} for user {}", expedition_id, owner_id);
                expedition_id
            }
        };

        let already_member: i64 = expedition_members::table
            .filter(expedition_members::expedition_id.eq(expedition_id))
            .filter(expedition_members::alpinist_id.eq(alpinist_id))
            .count()
            .get_result(conn)?;

        if already_member == 0 {
            diesel::insert_into(expedition_members::table)
                .values((
                    expedition_members::expedition_id.eq(expedition_id),
                    expedition_members::alpinist_id.eq(alpinist_id),
                ))
                .execute(conn)?;
        }

        Ok(expedition_id)
    })
}
}

backend_fn! {
/// Updates the client-writable fields of an expedition.
///
/// Status and timestamps are deliberately untouchable here.
///
/// # Errors
///
/// Returns an error if the update fails or the row does not exist.
pub fn update_expedition_fields(
    conn: &mut _,
    expedition_id: i64,
    name: &str,
    year: i32,
) -> Result<(), PersistenceError> {
    let rows: usize = diesel::update(
        expeditions::table.filter(expeditions::expedition_id.eq(expedition_id)),
    )
    .set((expeditions::name.eq(name), expeditions::year.eq(year)))
    .execute(conn)?;

    if rows == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Expedition {expedition_id} not found"
        )));
    }

    Ok(())
}
}

backend_fn! {
/// Applies a planned status transition with a compare-and-swap guard.
///
/// The status flip only succeeds if the row still carries `expected_from`;
/// the timestamp and moderator writes then run inside the same
/// transaction.
///
/// # Errors
///
/// Returns `PersistenceError::StatusConflict` if the row's status no
/// longer matches `expected_from` (including the row being absent), or a
/// database error if any statement fails.
#[allow(clippy::too_many_arguments)]
pub fn apply_status_change(
    conn: &mut _,
    expedition_id: i64,
    expected_from: &str,
    new_status: &str,
    formed_at: Option<&str>,
    closed_at: Option<&str>,
    moderator_id: Option<i64>,
) -> Result<(), PersistenceError> {
    conn.transaction(|conn| {
        let rows: usize = diesel::update(
            expeditions::table
                .filter(expeditions::expedition_id.eq(expedition_id))
                .filter(expeditions::status.eq(expected_from)),
        )
        .set(expeditions::status.eq(new_status))
        .execute(conn)?;

        if rows == 0 {
            return Err(PersistenceError::StatusConflict { expedition_id });
        }

        if let Some(formed_at) = formed_at {
            diesel::update(
                expeditions::table.filter(expeditions::expedition_id.eq(expedition_id)),
            )
            .set(expeditions::formed_at.eq(formed_at))
            .execute(conn)?;
        }

        if let Some(closed_at) = closed_at {
            diesel::update(
                expeditions::table.filter(expeditions::expedition_id.eq(expedition_id)),
            )
            .set(expeditions::closed_at.eq(closed_at))
            .execute(conn)?;
        }

        if let Some(moderator_id) = moderator_id {
            diesel::update(
                expeditions::table.filter(expeditions::expedition_id.eq(expedition_id)),
            )
            .set(expeditions::moderator_id.eq(moderator_id))
            .execute(conn)?;
        }

        info!(
            "Expedition {} transitioned {} -> {}",
            expedition_id, expected_from, new_status
        );

        Ok(())
    })
}
}
