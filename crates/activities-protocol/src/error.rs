//! Directory error types and their transport-independent kinds.

use thiserror::Error;

/// Classification of a directory failure.
///
/// The HTTP layer maps each kind to a status code; the directory itself
/// never deals in status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unknown activity, or a participant not enrolled in it.
    NotFound,
    /// The participant is already on the roster.
    AlreadyRegistered,
    /// The roster is full. Only produced under an enforced capacity policy.
    CapacityReached,
}

impl ErrorKind {
    /// Stable snake_case label, used as the `kind` field in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::AlreadyRegistered => "already_registered",
            Self::CapacityReached => "capacity_reached",
        }
    }
}

/// Failure of an enroll or withdraw operation. No mutation is applied
/// when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("activity not found: {activity}")]
    ActivityNotFound { activity: String },

    #[error("{email} is not registered for {activity}")]
    NotRegistered { activity: String, email: String },

    #[error("already registered")]
    AlreadyRegistered { activity: String, email: String },

    #[error("{activity} is full ({max} participants)")]
    CapacityReached { activity: String, max: u32 },
}

impl DirectoryError {
    /// The kind this failure maps to at the HTTP boundary.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ActivityNotFound { .. } | Self::NotRegistered { .. } => ErrorKind::NotFound,
            Self::AlreadyRegistered { .. } => ErrorKind::AlreadyRegistered,
            Self::CapacityReached { .. } => ErrorKind::CapacityReached,
        }
    }

    /// Name of the activity the failed operation targeted.
    pub fn activity(&self) -> &str {
        match self {
            Self::ActivityNotFound { activity }
            | Self::NotRegistered { activity, .. }
            | Self::AlreadyRegistered { activity, .. }
            | Self::CapacityReached { activity, .. } => activity,
        }
    }
}
