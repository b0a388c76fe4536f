// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-agnostic query modules.
//!
//! All queries use Diesel DSL and work across both supported backends.
//!
//! - `accounts` — account and session lookups, password verification
//! - `alpinists` — catalog lookups for membership checks
//! - `expeditions` — expedition reads, listing, membership

pub mod accounts;
pub mod alpinists;
pub mod expeditions;
