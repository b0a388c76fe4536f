// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use summit_core::CoreError;
use summit_domain::DomainError;
use summit_persistence::PersistenceError;

use crate::password_policy::PasswordPolicyError;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
/// Every internal failure is translated into exactly one of these variants
/// before crossing the HTTP boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed - the actor does not have permission.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// Why the action was refused.
        reason: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
    /// Password policy violation.
    PasswordPolicyViolation {
        /// A human-readable description of the policy violation.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized { action, reason } => {
                write!(f, "Unauthorized: cannot {action}: {reason}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
            Self::PasswordPolicyViolation { message } => {
                write!(f, "Password policy violation: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                reason: format!("{required_role} role required"),
            },
        }
    }
}

impl From<PasswordPolicyError> for ApiError {
    fn from(err: PasswordPolicyError) -> Self {
        Self::PasswordPolicyViolation {
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidExpeditionStatus(value) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("'{value}' is not a known expedition status"),
        },
        DomainError::InvalidStatusTransition { from, to } => ApiError::DomainRuleViolation {
            rule: String::from("status_transition"),
            message: format!("Cannot transition an expedition from '{from}' to '{to}'"),
        },
        DomainError::InvalidRole(value) => ApiError::InvalidInput {
            field: String::from("role"),
            message: format!("'{value}' is not a known role"),
        },
        DomainError::InvalidExpeditionName(msg) => ApiError::InvalidInput {
            field: String::from("name"),
            message: msg,
        },
        DomainError::InvalidExpeditionYear { year } => ApiError::InvalidInput {
            field: String::from("year"),
            message: format!("Invalid expedition year: {year}. Must be between 1900 and 2200"),
        },
        DomainError::InvalidTimeWindow { reason } => ApiError::InvalidInput {
            field: String::from("formed_window"),
            message: format!("Invalid formed-time window: {reason}"),
        },
        DomainError::InvalidRecordStatus(value) => ApiError::InvalidInput {
            field: String::from("record_status"),
            message: format!("'{value}' is not a known record status"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::Forbidden { action, reason } => ApiError::Unauthorized { action, reason },
        CoreError::WrongUser { user_id } => ApiError::Unauthorized {
            action: String::from("modify expedition"),
            reason: format!("user {user_id} does not own this expedition"),
        },
        CoreError::InvalidStatus { from, attempted } => ApiError::DomainRuleViolation {
            rule: String::from("status_transition"),
            message: format!(
                "Expedition status '{from}' does not permit transition to '{attempted}'"
            ),
        },
    }
}

/// Maps a persistence error into an API error.
///
/// Not-found rows surface as 404-class errors, lost compare-and-swap races
/// surface as status-transition violations, and everything else is an
/// internal error.
#[must_use]
pub fn map_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::NotFound(message) => ApiError::ResourceNotFound {
            resource_type: String::from("Record"),
            message,
        },
        PersistenceError::StatusConflict { expedition_id } => ApiError::DomainRuleViolation {
            rule: String::from("status_transition"),
            message: format!(
                "Expedition {expedition_id} was changed concurrently; its status no longer permits this transition"
            ),
        },
        _ => ApiError::Internal {
            message: format!("Storage failure: {err}"),
        },
    }
}
