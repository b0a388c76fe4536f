// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Role-scoped listing filters.

use summit_domain::{Actor, ExpeditionStatus, FormedWindow};

/// The visibility scope a listing query runs under.
///
/// Plain users see only their own rows. Moderators see every row except
/// deleted ones, which are invisible outside their owner's own listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListScope {
    /// Rows owned by the given user.
    Owner(i64),
    /// All rows except deleted ones.
    Moderation,
}

impl ListScope {
    /// Derives the listing scope for an actor.
    #[must_use]
    pub const fn for_actor(actor: &Actor) -> Self {
        if actor.is_moderator() {
            Self::Moderation
        } else {
            Self::Owner(actor.user_id)
        }
    }
}

/// Client-supplied listing filter, already resolved against defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExpeditionFilter {
    /// Restrict to a single status. Without this, deleted rows are
    /// excluded for every caller.
    pub status: Option<ExpeditionStatus>,
    /// Restrict to rows formed within this window.
    pub window: Option<FormedWindow>,
}
