// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Each handler receives an explicit [`Actor`] resolved from the caller's
//! session; there are no ambient identities. Handlers plan transitions
//! through the core planners and apply the resulting writes through the
//! persistence layer, translating every failure into an [`ApiError`].

use time::OffsetDateTime;
use time::format_description::well_known::Iso8601;
use tracing::info;

use summit_core::{
    ExpeditionFilter, FieldEdit, ListScope, StatusChange, can_view, plan_abandon, plan_decision,
    plan_field_edit, plan_formation,
};
use summit_domain::{
    Actor, Alpinist, AlpinistRecordStatus, Expedition, ExpeditionStatus, FormedWindow, Role,
};
use summit_persistence::{Persistence, PersistenceError};

use crate::error::{ApiError, AuthError, map_persistence_error, translate_core_error};
use crate::password_policy::PasswordPolicy;
use crate::request_response::{
    AbandonExpeditionResponse, AddToDraftResponse, AlpinistInfo, CreateAccountRequest,
    CreateAccountResponse, CreateAlpinistRequest, CreateAlpinistResponse, DecideExpeditionRequest,
    DecideExpeditionResponse, ExpeditionInfo, FormExpeditionResponse, GetExpeditionResponse,
    ListExpeditionsRequest, ListExpeditionsResponse, RemoveAlpinistResponse,
    UpdateExpeditionRequest, UpdateExpeditionResponse,
};

/// Adds an alpinist to the caller's open draft, creating the draft if none
/// exists.
///
/// This is the only way a draft comes into existence: there is no separate
/// "create expedition" call. When the caller is a moderator, the new draft
/// records them as its creating moderator as well as its owner.
///
/// # Errors
///
/// Returns an error if the alpinist does not exist or has been removed
/// from the catalog, or if persistence fails.
pub fn add_to_draft(
    persistence: &mut Persistence,
    actor: &Actor,
    alpinist_id: i64,
) -> Result<AddToDraftResponse, ApiError> {
    // Removed alpinists are indistinguishable from missing ones
    if !persistence
        .alpinist_is_active(alpinist_id)
        .map_err(map_persistence_error)?
    {
        return Err(alpinist_not_found(alpinist_id));
    }

    let creator_moderator_id: Option<i64> = actor.is_moderator().then_some(actor.user_id);
    let now: OffsetDateTime = OffsetDateTime::now_utc();

    let expedition_id: i64 = persistence
        .create_or_extend_draft(actor.user_id, creator_moderator_id, alpinist_id, now)
        .map_err(map_persistence_error)?;

    let member_ids: Vec<i64> = persistence
        .get_member_ids(expedition_id)
        .map_err(map_persistence_error)?;

    info!(
        "User {} added alpinist {alpinist_id} to draft expedition {expedition_id}",
        actor.user_id
    );

    Ok(AddToDraftResponse {
        expedition_id,
        status: ExpeditionStatus::Draft.to_string(),
        member_ids,
        message: format!("Added alpinist {alpinist_id} to draft expedition {expedition_id}"),
    })
}

/// Edits the client-writable fields (name, target year) of an expedition.
///
/// Status and timestamps are server-owned and cannot be changed here.
///
/// # Errors
///
/// Returns an error if the expedition does not exist, the caller does not
/// own it, or the new field values fail validation.
pub fn update_expedition(
    persistence: &mut Persistence,
    actor: &Actor,
    request: UpdateExpeditionRequest,
) -> Result<UpdateExpeditionResponse, ApiError> {
    let expedition: Expedition = fetch_expedition(persistence, request.expedition_id)?;

    let edit: FieldEdit = plan_field_edit(&expedition, &request.name, request.year, actor)
        .map_err(translate_core_error)?;

    persistence
        .update_expedition_fields(request.expedition_id, &edit)
        .map_err(map_persistence_error)?;

    Ok(UpdateExpeditionResponse {
        expedition_id: request.expedition_id,
        name: edit.name,
        year: edit.year,
        message: format!("Updated expedition {}", request.expedition_id),
    })
}

/// Submits the caller's draft for moderation (draft to formed).
///
/// # Errors
///
/// Returns an error if the expedition does not exist, the caller does not
/// own it, or it is not currently a draft.
pub fn request_formation(
    persistence: &mut Persistence,
    actor: &Actor,
    expedition_id: i64,
) -> Result<FormExpeditionResponse, ApiError> {
    let expedition: Expedition = fetch_expedition(persistence, expedition_id)?;

    let now: OffsetDateTime = OffsetDateTime::now_utc();
    let change: StatusChange =
        plan_formation(&expedition, actor, now).map_err(translate_core_error)?;

    persistence
        .apply_status_change(expedition_id, &change)
        .map_err(map_persistence_error)?;

    info!("User {} formed expedition {expedition_id}", actor.user_id);

    Ok(FormExpeditionResponse {
        expedition_id,
        status: change.to.to_string(),
        formed_at: format_timestamp(now)?,
        message: format!("Expedition {expedition_id} submitted for moderation"),
    })
}

/// Records a moderator decision (approved, denied, or canceled) on a formed
/// expedition.
///
/// # Errors
///
/// Returns an error if the expedition does not exist, the caller is not a
/// moderator, the decision string is invalid, or the expedition is not
/// currently formed.
pub fn decide_expedition(
    persistence: &mut Persistence,
    actor: &Actor,
    expedition_id: i64,
    request: DecideExpeditionRequest,
) -> Result<DecideExpeditionResponse, ApiError> {
    let decision: ExpeditionStatus = ExpeditionStatus::parse_str(&request.status)
        .map_err(crate::error::translate_domain_error)?;

    let expedition: Expedition = fetch_expedition(persistence, expedition_id)?;

    let now: OffsetDateTime = OffsetDateTime::now_utc();
    let change: StatusChange =
        plan_decision(&expedition, decision, actor, now).map_err(translate_core_error)?;

    persistence
        .apply_status_change(expedition_id, &change)
        .map_err(map_persistence_error)?;

    info!(
        "Moderator {} decided expedition {expedition_id}: {decision}",
        actor.user_id
    );

    let closed_at: Option<String> = match change.closed_at {
        Some(ts) => Some(format_timestamp(ts)?),
        None => None,
    };

    Ok(DecideExpeditionResponse {
        expedition_id,
        status: change.to.to_string(),
        closed_at,
        message: format!("Expedition {expedition_id} {decision}"),
    })
}

/// Abandons the caller's draft (draft to deleted).
///
/// # Errors
///
/// Returns an error if the expedition does not exist, the caller does not
/// own it, or it is not currently a draft.
pub fn abandon_draft(
    persistence: &mut Persistence,
    actor: &Actor,
    expedition_id: i64,
) -> Result<AbandonExpeditionResponse, ApiError> {
    let expedition: Expedition = fetch_expedition(persistence, expedition_id)?;

    let now: OffsetDateTime = OffsetDateTime::now_utc();
    let change: StatusChange =
        plan_abandon(&expedition, actor, now).map_err(translate_core_error)?;

    persistence
        .apply_status_change(expedition_id, &change)
        .map_err(map_persistence_error)?;

    info!("User {} abandoned draft expedition {expedition_id}", actor.user_id);

    Ok(AbandonExpeditionResponse {
        expedition_id,
        status: change.to.to_string(),
        message: format!("Expedition {expedition_id} deleted"),
    })
}

/// Lists expeditions visible to the caller, optionally filtered by status
/// and formed-time window.
///
/// Plain users see only their own rows. Moderators see every row except
/// deleted ones. Without an explicit status filter, deleted rows are
/// excluded for everyone.
///
/// # Errors
///
/// Returns an error if the status string or either window bound fails to
/// parse, or if the window's start is after its end.
pub fn list_expeditions(
    persistence: &mut Persistence,
    actor: &Actor,
    request: &ListExpeditionsRequest,
) -> Result<ListExpeditionsResponse, ApiError> {
    let status: Option<ExpeditionStatus> = match request.status.as_deref() {
        Some(value) => {
            Some(ExpeditionStatus::parse_str(value).map_err(crate::error::translate_domain_error)?)
        }
        None => None,
    };

    let formed_from: Option<OffsetDateTime> = parse_bound("formed_from", request.formed_from.as_deref())?;
    let formed_to: Option<OffsetDateTime> = parse_bound("formed_to", request.formed_to.as_deref())?;

    let window: Option<FormedWindow> =
        FormedWindow::resolve(formed_from, formed_to, OffsetDateTime::now_utc())
            .map_err(crate::error::translate_domain_error)?;

    let scope: ListScope = ListScope::for_actor(actor);
    let filter: ExpeditionFilter = ExpeditionFilter { status, window };

    let expeditions: Vec<Expedition> = persistence
        .list_expeditions(scope, &filter)
        .map_err(map_persistence_error)?;

    let expeditions: Vec<ExpeditionInfo> = expeditions
        .into_iter()
        .map(expedition_info)
        .collect::<Result<Vec<ExpeditionInfo>, ApiError>>()?;

    Ok(ListExpeditionsResponse { expeditions })
}

/// Fetches a single expedition with its member list.
///
/// Rows the caller may not see are reported exactly like missing ones, so
/// this endpoint cannot be used to probe which IDs exist.
///
/// # Errors
///
/// Returns a not-found error if the expedition does not exist or is not
/// visible to the caller.
pub fn get_expedition(
    persistence: &mut Persistence,
    actor: &Actor,
    expedition_id: i64,
) -> Result<GetExpeditionResponse, ApiError> {
    let expedition: Expedition = fetch_expedition(persistence, expedition_id)?;

    if !can_view(&expedition, actor) {
        return Err(expedition_not_found(expedition_id));
    }

    let member_ids: Vec<i64> = persistence
        .get_member_ids(expedition_id)
        .map_err(map_persistence_error)?;

    Ok(GetExpeditionResponse {
        expedition: expedition_info(expedition)?,
        member_ids,
    })
}

/// Creates a new account. Moderator only.
///
/// # Errors
///
/// Returns an error if the caller is not a moderator, the role string is
/// invalid, the password fails policy validation, or the login is taken.
pub fn create_account(
    persistence: &mut Persistence,
    actor: &Actor,
    request: CreateAccountRequest,
) -> Result<CreateAccountResponse, ApiError> {
    require_moderator(actor, "create_account")?;

    let role: Role =
        Role::parse_str(&request.role).map_err(crate::error::translate_domain_error)?;

    PasswordPolicy::default().validate(
        &request.password,
        &request.login,
        &request.display_name,
    )?;

    let account_id: i64 = persistence
        .create_account(
            &request.login,
            &request.display_name,
            &request.password,
            role.as_str(),
        )
        .map_err(|e| match e {
            PersistenceError::UniqueViolation(_) => ApiError::DomainRuleViolation {
                rule: String::from("unique_login"),
                message: format!("Login '{}' is already taken", request.login),
            },
            other => map_persistence_error(other),
        })?;

    Ok(CreateAccountResponse {
        account_id,
        login: request.login.to_uppercase(),
        message: format!("Created account '{}'", request.login),
    })
}

/// Adds an alpinist to the catalog. Moderator only.
///
/// # Errors
///
/// Returns an error if the caller is not a moderator, the name is empty,
/// or persistence fails.
pub fn create_alpinist(
    persistence: &mut Persistence,
    actor: &Actor,
    request: CreateAlpinistRequest,
) -> Result<CreateAlpinistResponse, ApiError> {
    require_moderator(actor, "create_alpinist")?;

    if request.name.trim().is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("name"),
            message: String::from("Alpinist name cannot be empty"),
        });
    }

    let alpinist_id: i64 = persistence
        .create_alpinist(
            &request.name,
            &request.lifetime,
            &request.country,
            &request.description,
            request.image_ref.as_deref(),
        )
        .map_err(map_persistence_error)?;

    info!("Moderator {} added alpinist {alpinist_id}", actor.user_id);

    Ok(CreateAlpinistResponse {
        alpinist_id,
        name: request.name,
        message: format!("Added alpinist {alpinist_id} to the catalog"),
    })
}

/// Soft-deletes an alpinist from the catalog. Moderator only.
///
/// Existing expedition memberships are untouched; the alpinist simply
/// cannot be added to new drafts.
///
/// # Errors
///
/// Returns an error if the caller is not a moderator or the alpinist does
/// not exist.
pub fn remove_alpinist(
    persistence: &mut Persistence,
    actor: &Actor,
    alpinist_id: i64,
) -> Result<RemoveAlpinistResponse, ApiError> {
    require_moderator(actor, "remove_alpinist")?;

    persistence
        .get_alpinist(alpinist_id)
        .map_err(map_persistence_error)?
        .ok_or_else(|| alpinist_not_found(alpinist_id))?;

    persistence
        .remove_alpinist(alpinist_id)
        .map_err(map_persistence_error)?;

    info!("Moderator {} removed alpinist {alpinist_id}", actor.user_id);

    Ok(RemoveAlpinistResponse {
        alpinist_id,
        message: format!("Removed alpinist {alpinist_id} from the catalog"),
    })
}

/// Fetches a single catalog alpinist.
///
/// Removed alpinists are reported exactly like missing ones.
///
/// # Errors
///
/// Returns a not-found error if the alpinist does not exist or has been
/// removed.
pub fn get_alpinist(
    persistence: &mut Persistence,
    alpinist_id: i64,
) -> Result<AlpinistInfo, ApiError> {
    let alpinist: Alpinist = persistence
        .get_alpinist(alpinist_id)
        .map_err(map_persistence_error)?
        .ok_or_else(|| alpinist_not_found(alpinist_id))?;

    if alpinist.record_status == AlpinistRecordStatus::Removed {
        return Err(alpinist_not_found(alpinist_id));
    }

    Ok(AlpinistInfo {
        alpinist_id,
        name: alpinist.name,
        lifetime: alpinist.lifetime,
        country: alpinist.country,
        description: alpinist.description,
        image_ref: alpinist.image_ref,
        record_status: alpinist.record_status.to_string(),
    })
}

fn fetch_expedition(
    persistence: &mut Persistence,
    expedition_id: i64,
) -> Result<Expedition, ApiError> {
    persistence
        .get_expedition(expedition_id)
        .map_err(map_persistence_error)?
        .ok_or_else(|| expedition_not_found(expedition_id))
}

fn require_moderator(actor: &Actor, action: &str) -> Result<(), ApiError> {
    if actor.is_moderator() {
        Ok(())
    } else {
        Err(ApiError::from(AuthError::Unauthorized {
            action: String::from(action),
            required_role: String::from("Moderator"),
        }))
    }
}

fn expedition_not_found(expedition_id: i64) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: String::from("Expedition"),
        message: format!("Expedition {expedition_id} does not exist"),
    }
}

fn alpinist_not_found(alpinist_id: i64) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: String::from("Alpinist"),
        message: format!("Alpinist {alpinist_id} does not exist"),
    }
}

fn parse_bound(field: &str, value: Option<&str>) -> Result<Option<OffsetDateTime>, ApiError> {
    match value {
        None => Ok(None),
        Some(raw) => OffsetDateTime::parse(raw, &Iso8601::DEFAULT)
            .map(Some)
            .map_err(|e| ApiError::InvalidInput {
                field: String::from(field),
                message: format!("Failed to parse timestamp '{raw}': {e}"),
            }),
    }
}

fn format_timestamp(ts: OffsetDateTime) -> Result<String, ApiError> {
    ts.format(&Iso8601::DEFAULT).map_err(|e| ApiError::Internal {
        message: format!("Failed to format timestamp: {e}"),
    })
}

fn expedition_info(expedition: Expedition) -> Result<ExpeditionInfo, ApiError> {
    let expedition_id: i64 = expedition.expedition_id.ok_or_else(|| ApiError::Internal {
        message: String::from("Expedition loaded from storage has no ID"),
    })?;

    let formed_at: Option<String> = match expedition.formed_at {
        Some(ts) => Some(format_timestamp(ts)?),
        None => None,
    };
    let closed_at: Option<String> = match expedition.closed_at {
        Some(ts) => Some(format_timestamp(ts)?),
        None => None,
    };

    Ok(ExpeditionInfo {
        expedition_id,
        name: expedition.name,
        year: expedition.year,
        status: expedition.status.to_string(),
        created_at: format_timestamp(expedition.created_at)?,
        formed_at,
        closed_at,
        user_id: expedition.user_id,
        moderator_id: expedition.moderator_id,
    })
}
