// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use summit_domain::{Actor, Role};
use summit_persistence::Persistence;

use crate::tests::helpers::{seed_account, seed_draft, test_persistence};
use crate::{
    ApiError, ListExpeditionsRequest, abandon_draft, get_expedition, list_expeditions,
    request_formation,
};

fn listed_ids(
    p: &mut Persistence,
    actor: &Actor,
    request: &ListExpeditionsRequest,
) -> Vec<i64> {
    list_expeditions(p, actor, request)
        .unwrap()
        .expeditions
        .into_iter()
        .map(|e| e.expedition_id)
        .collect()
}

#[test]
fn test_get_by_id_does_not_leak_existence() {
    let mut p: Persistence = test_persistence();
    let owner: Actor = seed_account(&mut p, "climber1", Role::User);
    let other: Actor = seed_account(&mut p, "climber2", Role::User);
    let expedition_id: i64 = seed_draft(&mut p, &owner);

    // A foreign row and a missing row produce the same error
    let foreign = get_expedition(&mut p, &other, expedition_id).unwrap_err();
    let missing = get_expedition(&mut p, &other, 999).unwrap_err();

    assert!(matches!(foreign, ApiError::ResourceNotFound { .. }));
    assert!(matches!(missing, ApiError::ResourceNotFound { .. }));
}

#[test]
fn test_moderator_sees_all_but_deleted() {
    let mut p: Persistence = test_persistence();
    let owner: Actor = seed_account(&mut p, "climber1", Role::User);
    let moderator: Actor = seed_account(&mut p, "mod1", Role::Moderator);

    // Form the first draft so the second add opens a fresh one
    let kept: i64 = seed_draft(&mut p, &owner);
    request_formation(&mut p, &owner, kept).unwrap();
    let deleted: i64 = seed_draft(&mut p, &owner);
    abandon_draft(&mut p, &owner, deleted).unwrap();

    assert!(get_expedition(&mut p, &moderator, kept).is_ok());

    let result = get_expedition(&mut p, &moderator, deleted);
    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));

    // Owner still sees their own deleted row
    assert!(get_expedition(&mut p, &owner, deleted).is_ok());
}

#[test]
fn test_listing_scopes() {
    let mut p: Persistence = test_persistence();
    let first: Actor = seed_account(&mut p, "climber1", Role::User);
    let second: Actor = seed_account(&mut p, "climber2", Role::User);
    let moderator: Actor = seed_account(&mut p, "mod1", Role::Moderator);

    let first_exp: i64 = seed_draft(&mut p, &first);
    let second_exp: i64 = seed_draft(&mut p, &second);

    let request = ListExpeditionsRequest::default();

    assert_eq!(listed_ids(&mut p, &first, &request), vec![first_exp]);
    assert_eq!(listed_ids(&mut p, &second, &request), vec![second_exp]);
    assert_eq!(
        listed_ids(&mut p, &moderator, &request),
        vec![first_exp, second_exp]
    );
}

#[test]
fn test_deleted_rows_hidden_without_explicit_filter() {
    let mut p: Persistence = test_persistence();
    let owner: Actor = seed_account(&mut p, "climber1", Role::User);
    let moderator: Actor = seed_account(&mut p, "mod1", Role::Moderator);

    let expedition_id: i64 = seed_draft(&mut p, &owner);
    abandon_draft(&mut p, &owner, expedition_id).unwrap();

    let unfiltered = ListExpeditionsRequest::default();
    assert!(listed_ids(&mut p, &owner, &unfiltered).is_empty());
    assert!(listed_ids(&mut p, &moderator, &unfiltered).is_empty());

    // The owner can ask for their own deleted rows explicitly
    let deleted_filter = ListExpeditionsRequest {
        status: Some(String::from("deleted")),
        ..ListExpeditionsRequest::default()
    };
    assert_eq!(listed_ids(&mut p, &owner, &deleted_filter), vec![expedition_id]);

    // Moderators never see deleted rows, even when asking for them
    assert!(listed_ids(&mut p, &moderator, &deleted_filter).is_empty());
}

#[test]
fn test_status_filter() {
    let mut p: Persistence = test_persistence();
    let owner: Actor = seed_account(&mut p, "climber1", Role::User);

    let formed: i64 = seed_draft(&mut p, &owner);
    request_formation(&mut p, &owner, formed).unwrap();
    let draft: i64 = seed_draft(&mut p, &owner);

    let draft_filter = ListExpeditionsRequest {
        status: Some(String::from("draft")),
        ..ListExpeditionsRequest::default()
    };
    assert_eq!(listed_ids(&mut p, &owner, &draft_filter), vec![draft]);

    let formed_filter = ListExpeditionsRequest {
        status: Some(String::from("formed")),
        ..ListExpeditionsRequest::default()
    };
    assert_eq!(listed_ids(&mut p, &owner, &formed_filter), vec![formed]);
}

#[test]
fn test_formed_window_filter() {
    let mut p: Persistence = test_persistence();
    let owner: Actor = seed_account(&mut p, "climber1", Role::User);

    let formed: i64 = seed_draft(&mut p, &owner);
    request_formation(&mut p, &owner, formed).unwrap();
    let never_formed: i64 = seed_draft(&mut p, &owner);
    assert_ne!(formed, never_formed);

    // Open-ended window from the epoch catches everything ever formed
    let request = ListExpeditionsRequest {
        formed_from: Some(String::from("1970-01-01T00:00:00Z")),
        ..ListExpeditionsRequest::default()
    };
    assert_eq!(listed_ids(&mut p, &owner, &request), vec![formed]);

    // A window entirely in the past matches nothing
    let request = ListExpeditionsRequest {
        formed_from: Some(String::from("1970-01-01T00:00:00Z")),
        formed_to: Some(String::from("1971-01-01T00:00:00Z")),
        ..ListExpeditionsRequest::default()
    };
    assert!(listed_ids(&mut p, &owner, &request).is_empty());
}

#[test]
fn test_listing_input_validation() {
    let mut p: Persistence = test_persistence();
    let owner: Actor = seed_account(&mut p, "climber1", Role::User);

    let request = ListExpeditionsRequest {
        status: Some(String::from("pending")),
        ..ListExpeditionsRequest::default()
    };
    let result = list_expeditions(&mut p, &owner, &request);
    assert!(matches!(result, Err(ApiError::InvalidInput { ref field, .. }) if field == "status"));

    let request = ListExpeditionsRequest {
        formed_from: Some(String::from("not-a-timestamp")),
        ..ListExpeditionsRequest::default()
    };
    let result = list_expeditions(&mut p, &owner, &request);
    assert!(
        matches!(result, Err(ApiError::InvalidInput { ref field, .. }) if field == "formed_from")
    );

    // Inverted window
    let request = ListExpeditionsRequest {
        formed_from: Some(String::from("2026-06-01T00:00:00Z")),
        formed_to: Some(String::from("2026-01-01T00:00:00Z")),
        ..ListExpeditionsRequest::default()
    };
    let result = list_expeditions(&mut p, &owner, &request);
    assert!(
        matches!(result, Err(ApiError::InvalidInput { ref field, .. }) if field == "formed_window")
    );
}
