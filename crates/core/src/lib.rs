// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Workflow engine for expedition requests.
//!
//! This crate contains the pure decision logic of the expedition workflow:
//! given the current persisted record, an explicit actor, and an injected
//! "now", each planner either produces the exact set of columns a
//! transition may write or rejects the request with a typed error.
//!
//! Planners never touch storage. The API layer loads the record, asks the
//! planner for a [`StatusChange`] or [`FieldEdit`], and hands the plan to
//! the persistence adapter, which applies status changes with a
//! compare-and-swap on the expected source status.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod filter;
mod plan;

#[cfg(test)]
mod tests;

pub use error::CoreError;
pub use filter::{ExpeditionFilter, ListScope};
pub use plan::{
    FieldEdit, StatusChange, can_view, plan_abandon, plan_decision, plan_field_edit,
    plan_formation,
};
