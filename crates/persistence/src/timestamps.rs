// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Timestamp storage encoding.
//!
//! Timestamps are normalized to UTC and stored as ISO-8601 text. Using a
//! single offset and format keeps stored values lexicographically ordered,
//! which the formed-time range filter relies on.

use time::OffsetDateTime;
use time::format_description::well_known::Iso8601;

use crate::error::PersistenceError;

/// Encodes a timestamp for storage.
///
/// # Errors
///
/// Returns `PersistenceError::SerializationError` if formatting fails.
pub(crate) fn encode_timestamp(ts: OffsetDateTime) -> Result<String, PersistenceError> {
    ts.to_offset(time::UtcOffset::UTC)
        .format(&Iso8601::DEFAULT)
        .map_err(|e| PersistenceError::SerializationError(format!("format timestamp: {e}")))
}

/// Decodes a stored timestamp.
///
/// # Errors
///
/// Returns `PersistenceError::SerializationError` if parsing fails.
pub(crate) fn decode_timestamp(value: &str) -> Result<OffsetDateTime, PersistenceError> {
    OffsetDateTime::parse(value, &Iso8601::DEFAULT)
        .map_err(|e| PersistenceError::SerializationError(format!("parse timestamp '{value}': {e}")))
}
