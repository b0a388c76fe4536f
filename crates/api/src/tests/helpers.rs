// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use summit_domain::{Actor, Role};
use summit_persistence::Persistence;

use crate::add_to_draft;

pub const TEST_PASSWORD: &str = "P@ssw0rd-For-Tests";

pub fn test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("in-memory database")
}

/// Creates an account directly in persistence and returns its acting identity.
pub fn seed_account(persistence: &mut Persistence, login: &str, role: Role) -> Actor {
    let account_id: i64 = persistence
        .create_account(login, &format!("{login} display"), TEST_PASSWORD, role.as_str())
        .expect("seed account");
    Actor::new(account_id, role)
}

pub fn seed_alpinist(persistence: &mut Persistence, name: &str) -> i64 {
    persistence
        .create_alpinist(name, "1914-1986", "Italy", "Test alpinist", None)
        .expect("seed alpinist")
}

/// Creates a draft for `actor` containing one freshly seeded alpinist.
pub fn seed_draft(persistence: &mut Persistence, actor: &Actor) -> i64 {
    let alpinist_id: i64 = seed_alpinist(persistence, "Walter Bonatti");
    add_to_draft(persistence, actor, alpinist_id)
        .expect("seed draft")
        .expedition_id
}
