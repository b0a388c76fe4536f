// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Alpinist catalog lookups.
//!
//! The catalog has no public CRUD surface; these lookups exist so the
//! workflow can verify that an alpinist being added to a draft exists and
//! has not been soft-deleted.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use summit_domain::{Alpinist, AlpinistRecordStatus};

use crate::diesel_schema::alpinists;
use crate::error::PersistenceError;

/// Diesel Queryable struct for alpinist rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = alpinists)]
struct AlpinistRow {
    alpinist_id: i64,
    name: String,
    lifetime: String,
    country: String,
    description: String,
    image_ref: Option<String>,
    record_status: String,
}

impl AlpinistRow {
    fn into_domain(self) -> Result<Alpinist, PersistenceError> {
        let record_status: AlpinistRecordStatus =
            AlpinistRecordStatus::parse_str(&self.record_status)
                .map_err(|e| PersistenceError::SerializationError(e.to_string()))?;

        Ok(Alpinist {
            alpinist_id: Some(self.alpinist_id),
            name: self.name,
            lifetime: self.lifetime,
            country: self.country,
            description: self.description,
            image_ref: self.image_ref,
            record_status,
        })
    }
}

backend_fn! {
/// Retrieves an alpinist by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the alpinist does not exist.
pub fn get_alpinist(
    conn: &mut _,
    alpinist_id: i64,
) -> Result<Option<Alpinist>, PersistenceError> {
    debug!("Looking up alpinist {}", alpinist_id);

    let row: Option<AlpinistRow> = alpinists::table
        .filter(alpinists::alpinist_id.eq(alpinist_id))
        .select(AlpinistRow::as_select())
        .first(conn)
        .optional()
        .map_err(|e| PersistenceError::QueryFailed(format!("get_alpinist: {e}")))?;

    row.map(AlpinistRow::into_domain).transpose()
}
}

backend_fn! {
/// Checks whether an alpinist exists and is active.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn alpinist_is_active(conn: &mut _, alpinist_id: i64) -> Result<bool, PersistenceError> {
    use diesel::dsl::count;

    let count: i64 = alpinists::table
        .filter(alpinists::alpinist_id.eq(alpinist_id))
        .filter(alpinists::record_status.eq(AlpinistRecordStatus::Active.as_str()))
        .select(count(alpinists::alpinist_id))
        .first(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("alpinist_is_active: {e}")))?;

    Ok(count > 0)
}
}
