// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Account and session queries.
//!
//! This module contains backend-agnostic queries for retrieving accounts
//! and sessions. All queries use Diesel DSL and work across both
//! supported database backends.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crate::data_models::{AccountData, SessionData};
use crate::diesel_schema::{accounts, sessions};
use crate::error::PersistenceError;

/// Diesel Queryable struct for account rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = accounts)]
struct AccountRow {
    account_id: i64,
    login: String,
    display_name: String,
    password_hash: String,
    role: String,
    created_at: String,
    last_login_at: Option<String>,
}

impl From<AccountRow> for AccountData {
    fn from(row: AccountRow) -> Self {
        Self {
            account_id: row.account_id,
            login: row.login,
            display_name: row.display_name,
            password_hash: row.password_hash,
            role: row.role,
            created_at: row.created_at,
            last_login_at: row.last_login_at,
        }
    }
}

/// Diesel Queryable struct for session rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = sessions)]
struct SessionRow {
    session_id: i64,
    session_token: String,
    account_id: i64,
    created_at: String,
    last_activity_at: String,
    expires_at: String,
}

impl From<SessionRow> for SessionData {
    fn from(row: SessionRow) -> Self {
        Self {
            session_id: row.session_id,
            session_token: row.session_token,
            account_id: row.account_id,
            created_at: row.created_at,
            last_activity_at: row.last_activity_at,
            expires_at: row.expires_at,
        }
    }
}

backend_fn! {
/// Retrieves an account by login name.
///
/// The `login` is normalized to uppercase for case-insensitive lookup.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the account is not found.
pub fn get_account_by_login(
    conn: &mut _,
    login: &str,
) -> Result<Option<AccountData>, PersistenceError> {
    let normalized_login: String = login.to_uppercase();

    debug!("Looking up account by login: {}", normalized_login);

    let row: Option<AccountRow> = accounts::table
        .filter(accounts::login.eq(&normalized_login))
        .select(AccountRow::as_select())
        .first(conn)
        .optional()
        .map_err(|e| PersistenceError::QueryFailed(format!("get_account_by_login: {e}")))?;

    Ok(row.map(AccountData::from))
}
}

backend_fn! {
/// Retrieves an account by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the account is not found.
pub fn get_account_by_id(
    conn: &mut _,
    account_id: i64,
) -> Result<Option<AccountData>, PersistenceError> {
    debug!("Looking up account by ID: {}", account_id);

    let row: Option<AccountRow> = accounts::table
        .filter(accounts::account_id.eq(account_id))
        .select(AccountRow::as_select())
        .first(conn)
        .optional()
        .map_err(|e| PersistenceError::QueryFailed(format!("get_account_by_id: {e}")))?;

    Ok(row.map(AccountData::from))
}
}

backend_fn! {
/// Retrieves a session by token.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the session is not found.
pub fn get_session_by_token(
    conn: &mut _,
    session_token: &str,
) -> Result<Option<SessionData>, PersistenceError> {
    debug!("Looking up session by token");

    let row: Option<SessionRow> = sessions::table
        .filter(sessions::session_token.eq(session_token))
        .select(SessionRow::as_select())
        .first(conn)
        .optional()
        .map_err(|e| PersistenceError::QueryFailed(format!("get_session_by_token: {e}")))?;

    Ok(row.map(SessionData::from))
}
}

/// Verifies a password against a stored hash.
///
/// This is a backend-agnostic utility function that uses bcrypt.
///
/// # Errors
///
/// Returns an error if password verification fails.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, PersistenceError> {
    bcrypt::verify(password, password_hash)
        .map_err(|e| PersistenceError::Other(format!("Failed to verify password: {e}")))
}
