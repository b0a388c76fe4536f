// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use summit_domain::{Actor, ExpeditionStatus, Role};
use summit_persistence::Persistence;

use crate::tests::helpers::{seed_account, seed_alpinist, seed_draft, test_persistence};
use crate::{
    ApiError, DecideExpeditionRequest, UpdateExpeditionRequest, abandon_draft, add_to_draft,
    decide_expedition, get_expedition, remove_alpinist, request_formation, update_expedition,
};

#[test]
fn test_add_to_draft_vivifies_and_reuses() {
    let mut p: Persistence = test_persistence();
    let owner: Actor = seed_account(&mut p, "climber1", Role::User);
    let first: i64 = seed_alpinist(&mut p, "Walter Bonatti");
    let second: i64 = seed_alpinist(&mut p, "Riccardo Cassin");

    let created = add_to_draft(&mut p, &owner, first).unwrap();
    assert_eq!(created.status, "draft");
    assert_eq!(created.member_ids, vec![first]);

    // Second add lands in the same draft
    let extended = add_to_draft(&mut p, &owner, second).unwrap();
    assert_eq!(extended.expedition_id, created.expedition_id);
    assert_eq!(extended.member_ids, vec![first, second]);
}

#[test]
fn test_add_unknown_or_removed_alpinist_is_not_found() {
    let mut p: Persistence = test_persistence();
    let owner: Actor = seed_account(&mut p, "climber1", Role::User);
    let moderator: Actor = seed_account(&mut p, "mod1", Role::Moderator);

    let result = add_to_draft(&mut p, &owner, 999);
    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));

    let alpinist_id: i64 = seed_alpinist(&mut p, "Walter Bonatti");
    remove_alpinist(&mut p, &moderator, alpinist_id).unwrap();

    // Removed alpinists look exactly like missing ones
    let result = add_to_draft(&mut p, &owner, alpinist_id);
    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_moderator_draft_records_creating_moderator() {
    let mut p: Persistence = test_persistence();
    let moderator: Actor = seed_account(&mut p, "mod1", Role::Moderator);
    let expedition_id: i64 = seed_draft(&mut p, &moderator);

    let response = get_expedition(&mut p, &moderator, expedition_id).unwrap();
    assert_eq!(response.expedition.user_id, moderator.user_id);
    assert_eq!(response.expedition.moderator_id, Some(moderator.user_id));
}

#[test]
fn test_edit_then_form() {
    let mut p: Persistence = test_persistence();
    let owner: Actor = seed_account(&mut p, "climber1", Role::User);
    let expedition_id: i64 = seed_draft(&mut p, &owner);

    let request = UpdateExpeditionRequest {
        expedition_id,
        name: String::from("K2 North Ridge"),
        year: 2027,
    };
    update_expedition(&mut p, &owner, request).unwrap();

    let response = request_formation(&mut p, &owner, expedition_id).unwrap();
    assert_eq!(response.status, "formed");
    assert!(!response.formed_at.is_empty());

    let detail = get_expedition(&mut p, &owner, expedition_id).unwrap();
    assert_eq!(detail.expedition.name, "K2 North Ridge");
    assert_eq!(detail.expedition.year, 2027);
    assert_eq!(detail.expedition.status, "formed");
    assert!(detail.expedition.formed_at.is_some());
    assert_eq!(detail.expedition.closed_at, None);
}

#[test]
fn test_edit_validation_failures() {
    let mut p: Persistence = test_persistence();
    let owner: Actor = seed_account(&mut p, "climber1", Role::User);
    let expedition_id: i64 = seed_draft(&mut p, &owner);

    let request = UpdateExpeditionRequest {
        expedition_id,
        name: String::new(),
        year: 2027,
    };
    let result = update_expedition(&mut p, &owner, request);
    assert!(matches!(result, Err(ApiError::InvalidInput { ref field, .. }) if field == "name"));

    let request = UpdateExpeditionRequest {
        expedition_id,
        name: String::from("K2 North Ridge"),
        year: 1492,
    };
    let result = update_expedition(&mut p, &owner, request);
    assert!(matches!(result, Err(ApiError::InvalidInput { ref field, .. }) if field == "year"));
}

#[test]
fn test_forming_twice_is_rejected() {
    let mut p: Persistence = test_persistence();
    let owner: Actor = seed_account(&mut p, "climber1", Role::User);
    let expedition_id: i64 = seed_draft(&mut p, &owner);

    request_formation(&mut p, &owner, expedition_id).unwrap();

    let result = request_formation(&mut p, &owner, expedition_id);
    assert!(matches!(result, Err(ApiError::DomainRuleViolation { .. })));
}

#[test]
fn test_approval_is_terminal_but_not_closing() {
    let mut p: Persistence = test_persistence();
    let owner: Actor = seed_account(&mut p, "climber1", Role::User);
    let moderator: Actor = seed_account(&mut p, "mod1", Role::Moderator);
    let expedition_id: i64 = seed_draft(&mut p, &owner);
    request_formation(&mut p, &owner, expedition_id).unwrap();

    let request = DecideExpeditionRequest {
        status: String::from("approved"),
    };
    let response = decide_expedition(&mut p, &moderator, expedition_id, request).unwrap();
    assert_eq!(response.status, "approved");
    assert_eq!(response.closed_at, None);

    let detail = get_expedition(&mut p, &owner, expedition_id).unwrap();
    assert_eq!(detail.expedition.moderator_id, Some(moderator.user_id));
    assert_eq!(detail.expedition.closed_at, None);

    // Terminal: no further decisions possible
    let request = DecideExpeditionRequest {
        status: String::from("denied"),
    };
    let result = decide_expedition(&mut p, &moderator, expedition_id, request);
    assert!(matches!(result, Err(ApiError::DomainRuleViolation { .. })));
}

#[test]
fn test_denial_closes_the_expedition() {
    let mut p: Persistence = test_persistence();
    let owner: Actor = seed_account(&mut p, "climber1", Role::User);
    let moderator: Actor = seed_account(&mut p, "mod1", Role::Moderator);
    let expedition_id: i64 = seed_draft(&mut p, &owner);
    request_formation(&mut p, &owner, expedition_id).unwrap();

    let request = DecideExpeditionRequest {
        status: String::from("denied"),
    };
    let response = decide_expedition(&mut p, &moderator, expedition_id, request).unwrap();
    assert_eq!(response.status, "denied");
    assert!(response.closed_at.is_some());
}

#[test]
fn test_decision_on_draft_is_rejected() {
    let mut p: Persistence = test_persistence();
    let owner: Actor = seed_account(&mut p, "climber1", Role::User);
    let moderator: Actor = seed_account(&mut p, "mod1", Role::Moderator);
    let expedition_id: i64 = seed_draft(&mut p, &owner);

    let request = DecideExpeditionRequest {
        status: String::from("approved"),
    };
    let result = decide_expedition(&mut p, &moderator, expedition_id, request);
    assert!(matches!(result, Err(ApiError::DomainRuleViolation { .. })));
}

#[test]
fn test_invalid_decision_string_is_rejected() {
    let mut p: Persistence = test_persistence();
    let owner: Actor = seed_account(&mut p, "climber1", Role::User);
    let moderator: Actor = seed_account(&mut p, "mod1", Role::Moderator);
    let expedition_id: i64 = seed_draft(&mut p, &owner);
    request_formation(&mut p, &owner, expedition_id).unwrap();

    let request = DecideExpeditionRequest {
        status: String::from("blessed"),
    };
    let result = decide_expedition(&mut p, &moderator, expedition_id, request);
    assert!(matches!(result, Err(ApiError::InvalidInput { ref field, .. }) if field == "status"));
}

#[test]
fn test_abandon_draft() {
    let mut p: Persistence = test_persistence();
    let owner: Actor = seed_account(&mut p, "climber1", Role::User);
    let expedition_id: i64 = seed_draft(&mut p, &owner);

    let response = abandon_draft(&mut p, &owner, expedition_id).unwrap();
    assert_eq!(response.status, ExpeditionStatus::Deleted.to_string());

    // The owner still sees their own deleted row, with closed_at stamped
    let detail = get_expedition(&mut p, &owner, expedition_id).unwrap();
    assert_eq!(detail.expedition.status, "deleted");
    assert!(detail.expedition.closed_at.is_some());
}

#[test]
fn test_abandon_formed_is_rejected() {
    let mut p: Persistence = test_persistence();
    let owner: Actor = seed_account(&mut p, "climber1", Role::User);
    let expedition_id: i64 = seed_draft(&mut p, &owner);
    request_formation(&mut p, &owner, expedition_id).unwrap();

    let result = abandon_draft(&mut p, &owner, expedition_id);
    assert!(matches!(result, Err(ApiError::DomainRuleViolation { .. })));
}

#[test]
fn test_abandoned_draft_does_not_block_a_new_one() {
    let mut p: Persistence = test_persistence();
    let owner: Actor = seed_account(&mut p, "climber1", Role::User);
    let alpinist_id: i64 = seed_alpinist(&mut p, "Walter Bonatti");

    let first: i64 = add_to_draft(&mut p, &owner, alpinist_id).unwrap().expedition_id;
    abandon_draft(&mut p, &owner, first).unwrap();

    let second: i64 = add_to_draft(&mut p, &owner, alpinist_id).unwrap().expedition_id;
    assert_ne!(first, second);
}

#[test]
fn test_operations_on_missing_expedition_are_not_found() {
    let mut p: Persistence = test_persistence();
    let owner: Actor = seed_account(&mut p, "climber1", Role::User);

    assert!(matches!(
        request_formation(&mut p, &owner, 999),
        Err(ApiError::ResourceNotFound { .. })
    ));
    assert!(matches!(
        abandon_draft(&mut p, &owner, 999),
        Err(ApiError::ResourceNotFound { .. })
    ));
    assert!(matches!(
        get_expedition(&mut p, &owner, 999),
        Err(ApiError::ResourceNotFound { .. })
    ));
}
