//! Mergington Activities - Protocol Types
//!
//! Domain and wire types shared by the directory and the HTTP layer.
//! This crate is the single source of truth for activity records, the
//! listing shape, confirmation messages, and error kinds.

pub mod error;
pub mod store;
pub mod types;

pub use error::{DirectoryError, ErrorKind};
pub use store::ActivityStore;
pub use types::{Activity, ActivityName, ActivityView, Confirmation, Listing, ParticipantEmail};
