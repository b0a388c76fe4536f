// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Account mutations.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::diesel_schema::accounts;
use crate::error::PersistenceError;

backend_fn! {
/// Creates a new account.
///
/// The `login` is normalized to uppercase for case-insensitive
/// uniqueness; the password is bcrypt-hashed before storage.
///
/// # Errors
///
/// Returns an error if the account cannot be created or if the login
/// already exists.
pub fn create_account(
    conn: &mut _,
    login: &str,
    display_name: &str,
    password: &str,
    role: &str,
) -> Result<i64, PersistenceError> {
    let normalized_login: String = login.to_uppercase();

    info!(
        "Creating account with login: {}, display_name: {}, role: {}",
        normalized_login, display_name, role
    );

    let password_hash: String = bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|e| PersistenceError::Other(format!("Failed to hash password: {e}")))?;

    diesel::insert_into(accounts::table)
        .values((
            accounts::login.eq(&normalized_login),
            accounts::display_name.eq(display_name),
            accounts::password_hash.eq(&password_hash),
            accounts::role.eq(role),
        ))
        .execute(conn)?;

    let account_id: i64 = conn.get_last_insert_rowid()?;

    info!(account_id, "Account created successfully");
    Ok(account_id)
}
}

backend_fn! {
/// Updates the last login timestamp for an account.
///
/// # Errors
///
/// Returns an error if the database update fails.
pub fn update_last_login(conn: &mut _, account_id: i64) -> Result<(), PersistenceError> {
    debug!("Updating last_login_at for account ID: {}", account_id);

    diesel::update(accounts::table)
        .filter(accounts::account_id.eq(account_id))
        .set(accounts::last_login_at.eq(diesel::dsl::sql::<
            diesel::sql_types::Nullable<diesel::sql_types::Text>,
        >("CURRENT_TIMESTAMP")))
        .execute(conn)?;

    Ok(())
}
}
