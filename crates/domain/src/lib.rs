// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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
mod expedition_status;
mod formed_window;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use expedition_status::ExpeditionStatus;
pub use formed_window::FormedWindow;
pub use types::{Actor, Alpinist, AlpinistRecordStatus, Expedition, Role};
pub use validation::{validate_expedition_name, validate_expedition_year};
