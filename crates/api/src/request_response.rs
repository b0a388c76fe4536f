// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Timestamps cross this boundary as ISO 8601 strings; domain types never
//! leak into the HTTP contract.

/// API request to authenticate an account.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LoginRequest {
    /// The account login (case-insensitive).
    pub login: String,
    /// The account password.
    pub password: String,
}

/// API response for a successful login.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LoginResponse {
    /// The bearer token identifying the new session.
    pub session_token: String,
    /// The authenticated account's identifier.
    pub account_id: i64,
    /// The account's display name.
    pub display_name: String,
    /// The account's role ("user" or "moderator").
    pub role: String,
    /// A success message.
    pub message: String,
}

/// API request to create a new account.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateAccountRequest {
    /// The login name (stored case-insensitively).
    pub login: String,
    /// The display name.
    pub display_name: String,
    /// The password, validated against the password policy.
    pub password: String,
    /// The role to assign ("user" or "moderator").
    pub role: String,
}

/// API response for a successful account creation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateAccountResponse {
    /// The new account's identifier.
    pub account_id: i64,
    /// The normalized login name.
    pub login: String,
    /// A success message.
    pub message: String,
}

/// API response for adding an alpinist to the caller's draft.
///
/// The draft is created on demand: if the caller has no open draft, one is
/// created and the alpinist becomes its first member.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AddToDraftResponse {
    /// The draft expedition the alpinist was added to.
    pub expedition_id: i64,
    /// The expedition status (always "draft").
    pub status: String,
    /// The alpinist IDs now in the draft, in insertion order.
    pub member_ids: Vec<i64>,
    /// A success message.
    pub message: String,
}

/// API request to edit the client-writable fields of an expedition.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UpdateExpeditionRequest {
    /// The expedition to edit.
    pub expedition_id: i64,
    /// The new display name.
    pub name: String,
    /// The new target year.
    pub year: i32,
}

/// API response for a successful expedition edit.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UpdateExpeditionResponse {
    /// The edited expedition.
    pub expedition_id: i64,
    /// The new display name.
    pub name: String,
    /// The new target year.
    pub year: i32,
    /// A success message.
    pub message: String,
}

/// API response for a successful draft-to-formed transition.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FormExpeditionResponse {
    /// The formed expedition.
    pub expedition_id: i64,
    /// The new status (always "formed").
    pub status: String,
    /// When the expedition was formed (ISO 8601).
    pub formed_at: String,
    /// A success message.
    pub message: String,
}

/// API request for a moderator decision on a formed expedition.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DecideExpeditionRequest {
    /// The decision: "approved", "denied", or "canceled".
    pub status: String,
}

/// API response for a successful moderator decision.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DecideExpeditionResponse {
    /// The decided expedition.
    pub expedition_id: i64,
    /// The new status.
    pub status: String,
    /// When the expedition was closed, if the decision closed it (ISO 8601).
    pub closed_at: Option<String>,
    /// A success message.
    pub message: String,
}

/// API response for a successful draft abandonment.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AbandonExpeditionResponse {
    /// The abandoned expedition.
    pub expedition_id: i64,
    /// The new status (always "deleted").
    pub status: String,
    /// A success message.
    pub message: String,
}

/// A single expedition in a listing or detail response.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ExpeditionInfo {
    /// The expedition's identifier.
    pub expedition_id: i64,
    /// The display name, possibly empty for a fresh draft.
    pub name: String,
    /// The target year.
    pub year: i32,
    /// The current status.
    pub status: String,
    /// When the draft was created (ISO 8601).
    pub created_at: String,
    /// When the expedition was formed, if it has been (ISO 8601).
    pub formed_at: Option<String>,
    /// When the expedition was closed, if it has been (ISO 8601).
    pub closed_at: Option<String>,
    /// The owning user.
    pub user_id: i64,
    /// The creating or deciding moderator, if any.
    pub moderator_id: Option<i64>,
}

/// API request to list expeditions visible to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct ListExpeditionsRequest {
    /// Restrict to a single status.
    pub status: Option<String>,
    /// Inclusive lower bound on formed time (ISO 8601).
    pub formed_from: Option<String>,
    /// Inclusive upper bound on formed time (ISO 8601).
    pub formed_to: Option<String>,
}

/// API response for an expedition listing.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListExpeditionsResponse {
    /// The visible expeditions, oldest first.
    pub expeditions: Vec<ExpeditionInfo>,
}

/// API response for a single-expedition lookup.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GetExpeditionResponse {
    /// The expedition.
    pub expedition: ExpeditionInfo,
    /// The alpinist IDs in this expedition, in insertion order.
    pub member_ids: Vec<i64>,
}

/// API request to add an alpinist to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateAlpinistRequest {
    /// Full name.
    pub name: String,
    /// Lifetime description, e.g. "1943-1986".
    pub lifetime: String,
    /// Country of origin.
    pub country: String,
    /// Free-form biography.
    pub description: String,
    /// Optional reference to a portrait image.
    pub image_ref: Option<String>,
}

/// API response for a successful catalog addition.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateAlpinistResponse {
    /// The new alpinist's identifier.
    pub alpinist_id: i64,
    /// The alpinist's name.
    pub name: String,
    /// A success message.
    pub message: String,
}

/// API response for a successful catalog removal (soft delete).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RemoveAlpinistResponse {
    /// The removed alpinist's identifier.
    pub alpinist_id: i64,
    /// A success message.
    pub message: String,
}

/// A single catalog alpinist.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AlpinistInfo {
    /// The alpinist's identifier.
    pub alpinist_id: i64,
    /// Full name.
    pub name: String,
    /// Lifetime description.
    pub lifetime: String,
    /// Country of origin.
    pub country: String,
    /// Free-form biography.
    pub description: String,
    /// Optional reference to a portrait image.
    pub image_ref: Option<String>,
    /// The record status ("active" or "removed").
    pub record_status: String,
}
