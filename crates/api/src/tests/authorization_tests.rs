// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use summit_domain::{Actor, Role};
use summit_persistence::Persistence;

use crate::tests::helpers::{seed_account, seed_alpinist, seed_draft, test_persistence};
use crate::{
    ApiError, CreateAlpinistRequest, DecideExpeditionRequest, UpdateExpeditionRequest,
    abandon_draft, create_alpinist, decide_expedition, remove_alpinist, request_formation,
    update_expedition,
};

#[test]
fn test_non_owner_cannot_edit() {
    let mut p: Persistence = test_persistence();
    let owner: Actor = seed_account(&mut p, "climber1", Role::User);
    let other: Actor = seed_account(&mut p, "climber2", Role::User);
    let expedition_id: i64 = seed_draft(&mut p, &owner);

    let request = UpdateExpeditionRequest {
        expedition_id,
        name: String::from("Hijacked"),
        year: 2027,
    };
    let result = update_expedition(&mut p, &other, request);
    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[test]
fn test_non_owner_cannot_form_or_abandon() {
    let mut p: Persistence = test_persistence();
    let owner: Actor = seed_account(&mut p, "climber1", Role::User);
    let other: Actor = seed_account(&mut p, "climber2", Role::User);
    let expedition_id: i64 = seed_draft(&mut p, &owner);

    assert!(matches!(
        request_formation(&mut p, &other, expedition_id),
        Err(ApiError::Unauthorized { .. })
    ));
    assert!(matches!(
        abandon_draft(&mut p, &other, expedition_id),
        Err(ApiError::Unauthorized { .. })
    ));
}

#[test]
fn test_moderator_cannot_form_someone_elses_draft() {
    let mut p: Persistence = test_persistence();
    let owner: Actor = seed_account(&mut p, "climber1", Role::User);
    let moderator: Actor = seed_account(&mut p, "mod1", Role::Moderator);
    let expedition_id: i64 = seed_draft(&mut p, &owner);

    // Formation is owner-only, regardless of role
    let result = request_formation(&mut p, &moderator, expedition_id);
    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[test]
fn test_plain_user_cannot_decide() {
    let mut p: Persistence = test_persistence();
    let owner: Actor = seed_account(&mut p, "climber1", Role::User);
    let expedition_id: i64 = seed_draft(&mut p, &owner);
    request_formation(&mut p, &owner, expedition_id).unwrap();

    let request = DecideExpeditionRequest {
        status: String::from("approved"),
    };
    let result = decide_expedition(&mut p, &owner, expedition_id, request);
    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[test]
fn test_ownership_is_checked_before_status() {
    let mut p: Persistence = test_persistence();
    let owner: Actor = seed_account(&mut p, "climber1", Role::User);
    let other: Actor = seed_account(&mut p, "climber2", Role::User);
    let expedition_id: i64 = seed_draft(&mut p, &owner);
    request_formation(&mut p, &owner, expedition_id).unwrap();

    // A non-owner poking at a formed record gets an authorization error,
    // not a status error that would reveal the record's state.
    let result = request_formation(&mut p, &other, expedition_id);
    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[test]
fn test_catalog_management_is_moderator_only() {
    let mut p: Persistence = test_persistence();
    let user: Actor = seed_account(&mut p, "climber1", Role::User);
    let moderator: Actor = seed_account(&mut p, "mod1", Role::Moderator);

    let request = CreateAlpinistRequest {
        name: String::from("Walter Bonatti"),
        lifetime: String::from("1930-2011"),
        country: String::from("Italy"),
        description: String::from("Grand Capucin, 1951"),
        image_ref: None,
    };
    let result = create_alpinist(&mut p, &user, request.clone());
    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));

    let alpinist_id: i64 = create_alpinist(&mut p, &moderator, request)
        .unwrap()
        .alpinist_id;

    let result = remove_alpinist(&mut p, &user, alpinist_id);
    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));

    assert!(remove_alpinist(&mut p, &moderator, alpinist_id).is_ok());
}

#[test]
fn test_create_alpinist_rejects_empty_name() {
    let mut p: Persistence = test_persistence();
    let moderator: Actor = seed_account(&mut p, "mod1", Role::Moderator);

    let request = CreateAlpinistRequest {
        name: String::from("   "),
        lifetime: String::from("1930-2011"),
        country: String::from("Italy"),
        description: String::new(),
        image_ref: None,
    };
    let result = create_alpinist(&mut p, &moderator, request);
    assert!(matches!(result, Err(ApiError::InvalidInput { ref field, .. }) if field == "name"));
}

#[test]
fn test_remove_missing_alpinist_is_not_found() {
    let mut p: Persistence = test_persistence();
    let moderator: Actor = seed_account(&mut p, "mod1", Role::Moderator);

    let result = remove_alpinist(&mut p, &moderator, 999);
    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_removed_alpinist_lookup_is_not_found() {
    let mut p: Persistence = test_persistence();
    let moderator: Actor = seed_account(&mut p, "mod1", Role::Moderator);
    let alpinist_id: i64 = seed_alpinist(&mut p, "Walter Bonatti");

    assert!(crate::get_alpinist(&mut p, alpinist_id).is_ok());

    remove_alpinist(&mut p, &moderator, alpinist_id).unwrap();

    let result = crate::get_alpinist(&mut p, alpinist_id);
    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}
