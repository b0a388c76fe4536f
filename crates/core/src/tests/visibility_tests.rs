// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use summit_domain::{ExpeditionStatus, Role};

use crate::tests::helpers::{draft_owned_by, expedition_in_status, moderator, other_user, owner};
use crate::{ListScope, can_view};

#[test]
fn test_owner_sees_own_rows_in_every_status() {
    let actor = owner();

    for status in [
        ExpeditionStatus::Draft,
        ExpeditionStatus::Formed,
        ExpeditionStatus::Approved,
        ExpeditionStatus::Denied,
        ExpeditionStatus::Canceled,
        ExpeditionStatus::Deleted,
    ] {
        let expedition = expedition_in_status(&actor, status);
        assert!(can_view(&expedition, &actor), "owner blind to {status}");
    }
}

#[test]
fn test_other_users_see_nothing() {
    let actor = owner();
    let draft = draft_owned_by(&actor);

    assert!(!can_view(&draft, &other_user()));
}

#[test]
fn test_moderator_sees_all_but_deleted() {
    let actor = owner();
    let deciding = moderator();

    let formed = expedition_in_status(&actor, ExpeditionStatus::Formed);
    assert!(can_view(&formed, &deciding));

    let deleted = expedition_in_status(&actor, ExpeditionStatus::Deleted);
    assert!(!can_view(&deleted, &deciding));
}

#[test]
fn test_list_scope_follows_role() {
    let actor = owner();
    assert_eq!(ListScope::for_actor(&actor), ListScope::Owner(actor.user_id));

    let deciding = moderator();
    assert_eq!(ListScope::for_actor(&deciding), ListScope::Moderation);

    // A moderator listing is never narrowed to their own rows.
    assert_ne!(
        ListScope::for_actor(&deciding),
        ListScope::Owner(deciding.user_id)
    );
    assert_eq!(deciding.role, Role::Moderator);
}
