// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session-based authentication against stored accounts.

use time::{Duration, OffsetDateTime};

use summit_domain::{Actor, Role};
use summit_persistence::{AccountData, Persistence, PersistenceError, SessionData, verify_password};

use crate::error::AuthError;

/// Authentication service for session-based authentication.
pub struct AuthenticationService;

impl AuthenticationService {
    /// Default session expiration duration (30 days).
    const DEFAULT_SESSION_EXPIRATION: Duration = Duration::days(30);

    /// Authenticates an account by login and password and creates a session.
    ///
    /// Unknown logins and wrong passwords produce the same error, so the
    /// login endpoint cannot be used to probe which accounts exist.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `login` - The account login (case-insensitive)
    /// * `password` - The plaintext password to verify
    ///
    /// # Returns
    ///
    /// A tuple of (`session_token`, `actor`, `account_data`)
    ///
    /// # Errors
    ///
    /// Returns an error if authentication fails.
    pub fn login(
        persistence: &mut Persistence,
        login: &str,
        password: &str,
    ) -> Result<(String, Actor, AccountData), AuthError> {
        let account: AccountData = persistence
            .get_account_by_login(login)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Invalid login or password"),
            })?;

        let password_matches: bool = verify_password(password, &account.password_hash)
            .map_err(Self::map_persistence_error)?;
        if !password_matches {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Invalid login or password"),
            });
        }

        let role: Role =
            Role::parse_str(&account.role).map_err(|_| AuthError::AuthenticationFailed {
                reason: format!("Invalid role: {}", account.role),
            })?;

        let session_token: String = Self::generate_session_token();

        let expires_at: OffsetDateTime =
            OffsetDateTime::now_utc() + Self::DEFAULT_SESSION_EXPIRATION;
        let expires_at_str: String = expires_at
            .format(&time::format_description::well_known::Iso8601::DEFAULT)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to format expiration time: {e}"),
            })?;

        persistence
            .create_session(&session_token, account.account_id, &expires_at_str)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to create session: {e}"),
            })?;

        persistence
            .update_last_login(account.account_id)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to update last login: {e}"),
            })?;

        let actor: Actor = Actor::new(account.account_id, role);

        Ok((session_token, actor, account))
    }

    /// Validates a session token and returns the acting identity.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `session_token` - The session token to validate
    ///
    /// # Returns
    ///
    /// A tuple of (`actor`, `account_data`)
    ///
    /// # Errors
    ///
    /// Returns an error if the session is invalid or expired.
    pub fn validate_session(
        persistence: &mut Persistence,
        session_token: &str,
    ) -> Result<(Actor, AccountData), AuthError> {
        let session: SessionData = persistence
            .get_session_by_token(session_token)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Invalid session token"),
            })?;

        let expires_at: OffsetDateTime = OffsetDateTime::parse(
            &session.expires_at,
            &time::format_description::well_known::Iso8601::DEFAULT,
        )
        .map_err(|e| AuthError::AuthenticationFailed {
            reason: format!("Failed to parse session expiration: {e}"),
        })?;

        if OffsetDateTime::now_utc() > expires_at {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Session expired"),
            });
        }

        let account: AccountData = persistence
            .get_account_by_id(session.account_id)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Account not found"),
            })?;

        let role: Role =
            Role::parse_str(&account.role).map_err(|_| AuthError::AuthenticationFailed {
                reason: format!("Invalid role: {}", account.role),
            })?;

        persistence
            .update_session_activity(session.session_id)
            .map_err(Self::map_persistence_error)?;

        let actor: Actor = Actor::new(account.account_id, role);

        Ok((actor, account))
    }

    /// Logs out by deleting the session.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `session_token` - The session token to delete
    ///
    /// # Errors
    ///
    /// Returns an error if the logout fails.
    pub fn logout(persistence: &mut Persistence, session_token: &str) -> Result<(), AuthError> {
        persistence
            .delete_session(session_token)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to delete session: {e}"),
            })?;

        Ok(())
    }

    /// Generates a session token.
    ///
    /// In a production system, this would use a cryptographically secure
    /// random number generator. For simplicity, we use a timestamp-based
    /// approach here.
    fn generate_session_token() -> String {
        use std::time::{SystemTime, UNIX_EPOCH};
        let timestamp: u128 = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards")
            .as_nanos();
        format!("session_{timestamp}_{}", rand::random::<u64>())
    }

    /// Maps persistence errors to authentication errors.
    fn map_persistence_error(err: PersistenceError) -> AuthError {
        AuthError::AuthenticationFailed {
            reason: format!("Database error: {err}"),
        }
    }
}
