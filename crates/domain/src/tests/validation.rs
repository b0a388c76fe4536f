// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::{DomainError, validate_expedition_name, validate_expedition_year};

#[test]
fn test_valid_name() {
    assert!(validate_expedition_name("North Face Winter Attempt").is_ok());
}

#[test]
fn test_empty_name_rejected() {
    assert!(matches!(
        validate_expedition_name(""),
        Err(DomainError::InvalidExpeditionName(_))
    ));
    assert!(matches!(
        validate_expedition_name("   "),
        Err(DomainError::InvalidExpeditionName(_))
    ));
}

#[test]
fn test_name_length_limit() {
    let at_limit: String = "x".repeat(90);
    assert!(validate_expedition_name(&at_limit).is_ok());

    let over_limit: String = "x".repeat(91);
    assert!(matches!(
        validate_expedition_name(&over_limit),
        Err(DomainError::InvalidExpeditionName(_))
    ));
}

#[test]
fn test_year_range() {
    assert!(validate_expedition_year(1900).is_ok());
    assert!(validate_expedition_year(2026).is_ok());
    assert!(validate_expedition_year(2200).is_ok());

    assert_eq!(
        validate_expedition_year(1899),
        Err(DomainError::InvalidExpeditionYear { year: 1899 })
    );
    assert_eq!(
        validate_expedition_year(2201),
        Err(DomainError::InvalidExpeditionYear { year: 2201 })
    );
}
