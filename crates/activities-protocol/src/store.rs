//! The seam between the HTTP layer and whatever holds the activities.

use crate::error::DirectoryError;
use crate::types::{ActivityName, Confirmation, Listing, ParticipantEmail};

/// Trait implemented by the activity directory.
/// The transport layer calls this for every list, signup, and unregister request.
///
/// Each call is atomic: a `list` never observes a half-applied `enroll` or
/// `withdraw`, and a failed call leaves the store untouched.
pub trait ActivityStore: Send + Sync + 'static {
    /// Snapshot of every activity with its current roster.
    fn list(&self) -> Listing;

    /// Add `email` to the roster of `activity`.
    fn enroll(
        &self,
        activity: &ActivityName,
        email: ParticipantEmail,
    ) -> Result<Confirmation, DirectoryError>;

    /// Remove `email` from the roster of `activity`.
    fn withdraw(
        &self,
        activity: &ActivityName,
        email: &ParticipantEmail,
    ) -> Result<Confirmation, DirectoryError>;

    /// Number of activities. Fixed for the life of the store.
    fn activity_count(&self) -> usize {
        self.list().len()
    }
}
