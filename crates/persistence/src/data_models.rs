// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// An account row as stored, returned to the authentication layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountData {
    pub account_id: i64,
    pub login: String,
    pub display_name: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: String,
    pub last_login_at: Option<String>,
}

/// A session row as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionData {
    pub session_id: i64,
    pub session_token: String,
    pub account_id: i64,
    pub created_at: String,
    pub last_activity_at: String,
    pub expires_at: String,
}
