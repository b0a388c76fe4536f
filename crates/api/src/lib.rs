// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the Summit expedition registry.
//!
//! This crate translates between the HTTP contract (DTOs, session tokens,
//! the error taxonomy) and the core planners. It owns authentication and
//! role gating; the core below it never sees a session token.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod error;
mod handlers;
mod password_policy;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::AuthenticationService;
pub use error::{
    ApiError, AuthError, map_persistence_error, translate_core_error, translate_domain_error,
};
pub use handlers::{
    abandon_draft, add_to_draft, create_account, create_alpinist, decide_expedition,
    get_alpinist, get_expedition, list_expeditions, remove_alpinist, request_formation,
    update_expedition,
};
pub use password_policy::{PasswordPolicy, PasswordPolicyError};
pub use request_response::{
    AbandonExpeditionResponse, AddToDraftResponse, AlpinistInfo, CreateAccountRequest,
    CreateAccountResponse, CreateAlpinistRequest, CreateAlpinistResponse, DecideExpeditionRequest,
    DecideExpeditionResponse, ExpeditionInfo, FormExpeditionResponse, GetExpeditionResponse,
    ListExpeditionsRequest, ListExpeditionsResponse, LoginRequest, LoginResponse,
    RemoveAlpinistResponse, UpdateExpeditionRequest, UpdateExpeditionResponse,
};
