// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field validation for client-editable expedition fields.

use crate::error::DomainError;

/// Maximum length of an expedition name, matching the storage column.
pub const MAX_EXPEDITION_NAME_LEN: usize = 90;

/// Supported range for expedition target years.
pub const EXPEDITION_YEAR_RANGE: std::ops::RangeInclusive<i32> = 1900..=2200;

/// Validates an expedition name supplied by a client.
///
/// # Errors
///
/// Returns `DomainError::InvalidExpeditionName` if the name is empty,
/// whitespace-only, or longer than [`MAX_EXPEDITION_NAME_LEN`] characters.
pub fn validate_expedition_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidExpeditionName(String::from(
            "name must not be empty",
        )));
    }

    if name.chars().count() > MAX_EXPEDITION_NAME_LEN {
        return Err(DomainError::InvalidExpeditionName(format!(
            "name must be at most {MAX_EXPEDITION_NAME_LEN} characters"
        )));
    }

    Ok(())
}

/// Validates an expedition target year supplied by a client.
///
/// # Errors
///
/// Returns `DomainError::InvalidExpeditionYear` if the year is outside
/// [`EXPEDITION_YEAR_RANGE`].
pub fn validate_expedition_year(year: i32) -> Result<(), DomainError> {
    if EXPEDITION_YEAR_RANGE.contains(&year) {
        Ok(())
    } else {
        Err(DomainError::InvalidExpeditionYear { year })
    }
}
