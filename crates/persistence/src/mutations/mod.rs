// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-agnostic mutation modules.
//!
//! This module contains all state-changing operations for the persistence
//! layer. Most mutations use Diesel DSL and are backend-agnostic, with
//! minimal use of backend-specific helpers (e.g., `last_insert_rowid()`).
//!
//! - `accounts` — account creation and login bookkeeping
//! - `alpinists` — catalog seeding
//! - `expeditions` — draft auto-vivification, field edits, status CAS
//! - `sessions` — session lifecycle

pub mod accounts;
pub mod alpinists;
pub mod expeditions;
pub mod sessions;
