//! Activity directory implementation.
//!
//! The `Directory` owns every activity and is the only thing that mutates
//! a roster. It implements `ActivityStore` so the HTTP layer can be handed
//! any store without knowing how it is held.

pub mod directory;
pub mod seed;

pub use directory::{CapacityPolicy, Directory};
pub use seed::{SeedError, default_activities, load_seed_file};
