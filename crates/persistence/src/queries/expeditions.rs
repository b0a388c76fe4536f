// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Expedition query operations.
//!
//! This module provides reads for single expeditions, role-scoped listing,
//! and membership lookups. Listing filters compare stored ISO-8601 text
//! timestamps, which order lexicographically.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use summit_domain::{Expedition, ExpeditionStatus};

use crate::diesel_schema::{expedition_members, expeditions};
use crate::error::PersistenceError;
use crate::timestamps::decode_timestamp;

/// Diesel Queryable struct for expedition rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = expeditions)]
pub(crate) struct ExpeditionRow {
    expedition_id: i64,
    name: String,
    year: i32,
    status: String,
    created_at: String,
    formed_at: Option<String>,
    closed_at: Option<String>,
    user_id: i64,
    moderator_id: Option<i64>,
}

impl ExpeditionRow {
    /// Converts a stored row into the domain type.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored status or a timestamp cannot be
    /// decoded. Either indicates data written outside the adapter.
    pub(crate) fn into_domain(self) -> Result<Expedition, PersistenceError> {
        let status: ExpeditionStatus = ExpeditionStatus::parse_str(&self.status)
            .map_err(|e| PersistenceError::SerializationError(e.to_string()))?;

        let formed_at = self.formed_at.as_deref().map(decode_timestamp).transpose()?;
        let closed_at = self.closed_at.as_deref().map(decode_timestamp).transpose()?;

        Ok(Expedition {
            expedition_id: Some(self.expedition_id),
            name: self.name,
            year: self.year,
            status,
            created_at: decode_timestamp(&self.created_at)?,
            formed_at,
            closed_at,
            user_id: self.user_id,
            moderator_id: self.moderator_id,
        })
    }
}

backend_fn! {
/// Retrieves a single expedition by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the expedition does not exist.
pub fn get_expedition(
    conn: &mut _,
    expedition_id: i64,
) -> Result<Option<Expedition>, PersistenceError> {
    debug!("Looking up expedition {}", expedition_id);

    let row: Option<ExpeditionRow> = expeditions::table
        .filter(expeditions::expedition_id.eq(expedition_id))
        .select(ExpeditionRow::as_select())
        .first(conn)
        .optional()
        .map_err(|e| PersistenceError::QueryFailed(format!("get_expedition: {e}")))?;

    row.map(ExpeditionRow::into_domain).transpose()
}
}

backend_fn! {
/// Finds a user's open draft, if they have one.
///
/// The draft auto-vivification transaction guarantees at most one open
/// draft per user, so a single row lookup suffices.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn find_open_draft(
    conn: &mut _,
    user_id: i64,
) -> Result<Option<Expedition>, PersistenceError> {
    debug!("Looking up open draft for user {}", user_id);

    let row: Option<ExpeditionRow> = expeditions::table
        .filter(expeditions::user_id.eq(user_id))
        .filter(expeditions::status.eq(ExpeditionStatus::Draft.as_str()))
        .select(ExpeditionRow::as_select())
        .first(conn)
        .optional()
        .map_err(|e| PersistenceError::QueryFailed(format!("find_open_draft: {e}")))?;

    row.map(ExpeditionRow::into_domain).transpose()
}
}

backend_fn! {
/// Lists expeditions under a visibility scope and optional filters.
///
/// `owner_id` of `Some` restricts to that user's rows; `None` is the
/// moderation scope, which excludes deleted rows unconditionally. Without
/// an explicit status filter, deleted rows are excluded for every caller.
/// Window bounds compare against `formed_at`, so never-formed rows fall
/// outside any window.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_expeditions(
    conn: &mut _,
    owner_id: Option<i64>,
    status: Option<&str>,
    formed_from: Option<&str>,
    formed_to: Option<&str>,
) -> Result<Vec<Expedition>, PersistenceError> {
    debug!(
        "Listing expeditions (owner: {:?}, status: {:?})",
        owner_id, status
    );

    let mut query = expeditions::table.into_boxed();

    match owner_id {
        Some(user_id) => {
            query = query.filter(expeditions::user_id.eq(user_id));
        }
        None => {
            query = query.filter(
                expeditions::status.ne(ExpeditionStatus::Deleted.as_str()),
            );
        }
    }

    match status {
        Some(status) => {
            query = query.filter(expeditions::status.eq(status.to_string()));
        }
        None => {
            query = query.filter(
                expeditions::status.ne(ExpeditionStatus::Deleted.as_str()),
            );
        }
    }

    if let Some(from) = formed_from {
        query = query.filter(expeditions::formed_at.ge(Some(from.to_string())));
    }
    if let Some(to) = formed_to {
        query = query.filter(expeditions::formed_at.le(Some(to.to_string())));
    }

    let rows: Vec<ExpeditionRow> = query
        .order(expeditions::expedition_id.asc())
        .select(ExpeditionRow::as_select())
        .load(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("list_expeditions: {e}")))?;

    rows.into_iter().map(ExpeditionRow::into_domain).collect()
}
}

backend_fn! {
/// Lists the alpinist IDs that are members of an expedition.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_member_ids(
    conn: &mut _,
    expedition_id: i64,
) -> Result<Vec<i64>, PersistenceError> {
    expedition_members::table
        .filter(expedition_members::expedition_id.eq(expedition_id))
        .order(expedition_members::alpinist_id.asc())
        .select(expedition_members::alpinist_id)
        .load::<i64>(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("get_member_ids: {e}")))
}
}
