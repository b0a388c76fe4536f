// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared fixtures for workflow planner tests.

use time::OffsetDateTime;
use time::macros::datetime;

use summit_domain::{Actor, Expedition, ExpeditionStatus, Role};

pub fn test_now() -> OffsetDateTime {
    datetime!(2026-03-01 12:00 UTC)
}

pub fn owner() -> Actor {
    Actor::new(7, Role::User)
}

pub fn other_user() -> Actor {
    Actor::new(8, Role::User)
}

pub fn moderator() -> Actor {
    Actor::new(100, Role::Moderator)
}

pub fn draft_owned_by(actor: &Actor) -> Expedition {
    Expedition::new_draft(actor, test_now()).with_id(1)
}

pub fn expedition_in_status(actor: &Actor, status: ExpeditionStatus) -> Expedition {
    let mut expedition: Expedition = draft_owned_by(actor);
    expedition.status = status;
    if status != ExpeditionStatus::Draft {
        expedition.formed_at = Some(test_now());
    }
    expedition
}
