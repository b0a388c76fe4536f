// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Alpinist catalog mutations.
//!
//! The catalog has no public CRUD surface; creation exists for seeding
//! and tests.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::info;

use summit_domain::AlpinistRecordStatus;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::alpinists;
use crate::error::PersistenceError;

backend_fn! {
/// Creates an active catalog alpinist and returns its ID.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_alpinist(
    conn: &mut _,
    name: &str,
    lifetime: &str,
    country: &str,
    description: &str,
    image_ref: Option<&str>,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(alpinists::table)
        .values((
            alpinists::name.eq(name),
            alpinists::lifetime.eq(lifetime),
            alpinists::country.eq(country),
            alpinists::description.eq(description),
            alpinists::image_ref.eq(image_ref),
            alpinists::record_status.eq(AlpinistRecordStatus::Active.as_str()),
        ))
        .execute(conn)?;

    let alpinist_id: i64 = conn.get_last_insert_rowid()?;

    info!("Created alpinist {} ({})", alpinist_id, name);
    Ok(alpinist_id)
}
}

backend_fn! {
/// Soft-deletes an alpinist by flipping its record status.
///
/// Existing expedition memberships are left intact; only future adds are
/// prevented.
///
/// # Errors
///
/// Returns an error if the update fails or the row does not exist.
pub fn remove_alpinist(conn: &mut _, alpinist_id: i64) -> Result<(), PersistenceError> {
    let rows: usize = diesel::update(
        alpinists::table.filter(alpinists::alpinist_id.eq(alpinist_id)),
    )
    .set(alpinists::record_status.eq(AlpinistRecordStatus::Removed.as_str()))
    .execute(conn)?;

    if rows == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Alpinist {alpinist_id} not found"
        )));
    }

    Ok(())
}
}
