//! Field state: value, dirtiness, submission and aggregated validity.

mod config;
mod snapshot;
mod state;
mod traits;

pub use config::FieldConfig;
pub use snapshot::FieldSnapshot;
pub use state::{Field, FieldId, WatchId};
pub use traits::ValidatedField;
