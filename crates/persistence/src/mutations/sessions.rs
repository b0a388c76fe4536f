// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session mutations.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::diesel_schema::sessions;
use crate::error::PersistenceError;

backend_fn! {
/// Creates a new session for an account.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_session(
    conn: &mut _,
    session_token: &str,
    account_id: i64,
    expires_at: &str,
) -> Result<i64, PersistenceError> {
    debug!("Creating session for account {}", account_id);

    diesel::insert_into(sessions::table)
        .values((
            sessions::session_token.eq(session_token),
            sessions::account_id.eq(account_id),
            sessions::expires_at.eq(expires_at),
        ))
        .execute(conn)?;

    let session_id: i64 = conn.get_last_insert_rowid()?;
    Ok(session_id)
}
}

backend_fn! {
/// Touches a session's last-activity timestamp.
///
/// # Errors
///
/// Returns an error if the database update fails.
pub fn update_session_activity(conn: &mut _, session_id: i64) -> Result<(), PersistenceError> {
    diesel::update(sessions::table)
        .filter(sessions::session_id.eq(session_id))
        .set(sessions::last_activity_at.eq(diesel::dsl::sql::<diesel::sql_types::Text>(
            "CURRENT_TIMESTAMP",
        )))
        .execute(conn)?;

    Ok(())
}
}

backend_fn! {
/// Deletes a session by token (logout).
///
/// Deleting an unknown token is a no-op.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_session(conn: &mut _, session_token: &str) -> Result<(), PersistenceError> {
    diesel::delete(sessions::table)
        .filter(sessions::session_token.eq(session_token))
        .execute(conn)?;

    Ok(())
}
}

backend_fn! {
/// Deletes every session whose expiry is at or before `now`.
///
/// Returns the number of sessions removed.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_expired_sessions(conn: &mut _, now: &str) -> Result<usize, PersistenceError> {
    let removed: usize = diesel::delete(sessions::table)
        .filter(sessions::expires_at.le(now))
        .execute(conn)?;

    if removed > 0 {
        info!("Removed {} expired sessions", removed);
    }

    Ok(removed)
}
}
