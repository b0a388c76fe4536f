// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Formed-time filter window resolution.
//!
//! List filtering may bound results by the time an expedition was formed.
//! Bounds are optional on both sides: a missing start is open-ended back to
//! the epoch, and a missing end defaults to one year past "now". When
//! neither bound is supplied, no time filter applies at all.

use time::{Duration, OffsetDateTime};

use crate::error::DomainError;

/// A resolved, inclusive formed-time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormedWindow {
    start: OffsetDateTime,
    end: OffsetDateTime,
}

impl FormedWindow {
    /// Resolves optional client-supplied bounds into a concrete window.
    ///
    /// Returns `None` when neither bound was supplied, meaning no time
    /// filter should be applied.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimeWindow` if the resolved start is
    /// after the resolved end.
    pub fn resolve(
        start: Option<OffsetDateTime>,
        end: Option<OffsetDateTime>,
        now: OffsetDateTime,
    ) -> Result<Option<Self>, DomainError> {
        if start.is_none() && end.is_none() {
            return Ok(None);
        }

        let start: OffsetDateTime = start.unwrap_or(OffsetDateTime::UNIX_EPOCH);
        let end: OffsetDateTime = end.unwrap_or_else(|| now + Duration::days(365));

        if start > end {
            return Err(DomainError::InvalidTimeWindow {
                reason: format!("start {start} is after end {end}"),
            });
        }

        Ok(Some(Self { start, end }))
    }

    /// The inclusive lower bound.
    #[must_use]
    pub const fn start(&self) -> OffsetDateTime {
        self.start
    }

    /// The inclusive upper bound.
    #[must_use]
    pub const fn end(&self) -> OffsetDateTime {
        self.end
    }
}
