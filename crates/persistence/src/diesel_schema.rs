// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Diesel table declarations.
//!
//! These declarations are shared by both backends. Timestamps are stored
//! as ISO-8601 text, which keeps them human-readable and lexicographically
//! ordered for range filtering.

diesel::table! {
    alpinists (alpinist_id) {
        alpinist_id -> BigInt,
        name -> Text,
        lifetime -> Text,
        country -> Text,
        description -> Text,
        image_ref -> Nullable<Text>,
        record_status -> Text,
    }
}

diesel::table! {
    accounts (account_id) {
        account_id -> BigInt,
        login -> Text,
        display_name -> Text,
        password_hash -> Text,
        role -> Text,
        created_at -> Text,
        last_login_at -> Nullable<Text>,
    }
}

diesel::table! {
    expeditions (expedition_id) {
        expedition_id -> BigInt,
        name -> Text,
        year -> Integer,
        status -> Text,
        created_at -> Text,
        formed_at -> Nullable<Text>,
        closed_at -> Nullable<Text>,
        user_id -> BigInt,
        moderator_id -> Nullable<BigInt>,
    }
}

diesel::table! {
    expedition_members (expedition_id, alpinist_id) {
        expedition_id -> BigInt,
        alpinist_id -> BigInt,
    }
}

diesel::table! {
    sessions (session_id) {
        session_id -> BigInt,
        session_token -> Text,
        account_id -> BigInt,
        created_at -> Text,
        last_activity_at -> Text,
        expires_at -> Text,
    }
}

diesel::joinable!(expedition_members -> expeditions (expedition_id));
diesel::joinable!(expedition_members -> alpinists (alpinist_id));
diesel::joinable!(sessions -> accounts (account_id));

diesel::allow_tables_to_appear_in_same_query!(
    alpinists,
    accounts,
    expeditions,
    expedition_members,
    sessions,
);
