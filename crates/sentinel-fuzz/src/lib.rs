//! Fuzzing library for scholar-snapshot.
//!
//! This crate provides fuzzing targets for the profile page parser.
//!
//! # Usage
//!
//! ```bash
//! cd crates/sentinel-fuzz
//! cargo +nightly fuzz run fuzz_profile_parse -- -max_total_time=60
//! ```

pub use scholar_snapshot::{models, parser};
