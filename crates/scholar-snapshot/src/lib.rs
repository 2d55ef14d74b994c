//! Scholar Snapshot
//!
//! Fetches a Google Scholar citations profile, extracts its publication
//! list, and writes it as a JSON snapshot for static site generators and
//! other tooling.
//!
//! # Pipeline
//!
//! - **Fetch**: one GET with a browser-like `User-Agent`, 30s timeout, no retries
//! - **Extract**: CSS selectors over the publication table; missing fields degrade to defaults
//! - **Emit**: `{updated_at, count, publications}` as 2-space indented UTF-8 JSON
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use scholar_snapshot::{Config, ProfileSnapshotBuilder};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let builder = ProfileSnapshotBuilder::new(&Config::default())?;
//!     let envelope = builder.run("oVm7TyYAAAAJ", Path::new("publications.json")).await?;
//!     println!("{} publications", envelope.count);
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod client;
pub mod config;
pub mod error;
pub mod formatters;
pub mod models;
pub mod parser;

pub use builder::{ProfileSnapshotBuilder, build_envelope, write_snapshot};
pub use client::ScholarClient;
pub use config::Config;
pub use error::{ClientError, SnapshotError};
pub use parser::{PageKind, ProfileParser, extract_records};
