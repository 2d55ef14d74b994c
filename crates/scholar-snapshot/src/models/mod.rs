//! Data models for the snapshot file.
//!
//! Field names are the snake_case keys of the JSON output consumed by
//! downstream tooling; do not rename them.

mod envelope;
mod publication;

pub use envelope::SnapshotEnvelope;
pub use publication::{NO_CITATIONS, PublicationRecord};
