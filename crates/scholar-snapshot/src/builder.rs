//! Profile snapshot pipeline: fetch → extract → envelope → write.

use std::path::Path;

use url::Url;

use crate::client::ScholarClient;
use crate::config::Config;
use crate::error::{SnapshotError, SnapshotResult};
use crate::formatters::format_snapshot;
use crate::models::{PublicationRecord, SnapshotEnvelope};
use crate::parser::{PageKind, ProfileParser};

/// Builds a publication snapshot for one profile.
#[derive(Debug, Clone)]
pub struct ProfileSnapshotBuilder {
    client: ScholarClient,
    parser: ProfileParser,
    strict: bool,
}

impl ProfileSnapshotBuilder {
    /// Create a builder from configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built or
    /// either base URL is not an absolute URL.
    pub fn new(config: &Config) -> SnapshotResult<Self> {
        Url::parse(&config.base_url)
            .map_err(|e| SnapshotError::config("base_url", e.to_string()))?;
        let client = ScholarClient::new(config)
            .map_err(|e| SnapshotError::config("http_client", e.to_string()))?;
        let parser = ProfileParser::new(&config.link_base_url)
            .map_err(|e| SnapshotError::config("link_base_url", e.to_string()))?;
        Ok(Self { client, parser, strict: config.strict })
    }

    /// Fetch the raw profile HTML for `user_id`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an empty id, a fetch error for any
    /// transport failure or non-success status.
    pub async fn fetch_profile_html(&self, user_id: &str) -> SnapshotResult<String> {
        if user_id.trim().is_empty() {
            return Err(SnapshotError::config("user", "cannot be empty"));
        }
        Ok(self.client.fetch_profile_html(user_id).await?)
    }

    /// Extract publication records from profile HTML.
    #[must_use]
    pub fn extract_records(&self, html: &str) -> Vec<PublicationRecord> {
        self.parser.extract_records(html)
    }

    /// Fetch, extract, and write the snapshot for `user_id` to `path`.
    ///
    /// The output file is only touched once fetching and extraction have
    /// succeeded.
    ///
    /// # Errors
    ///
    /// Returns fetch, write, and (in strict mode) empty-profile errors.
    pub async fn run(&self, user_id: &str, path: &Path) -> SnapshotResult<SnapshotEnvelope> {
        let html = self.fetch_profile_html(user_id).await?;
        let parsed = self.parser.parse(&html);

        if parsed.records.is_empty() {
            self.check_empty(user_id, parsed.kind)?;
        }

        let envelope = build_envelope(parsed.records);
        write_snapshot(&envelope, path)?;

        tracing::info!(
            user_id,
            count = envelope.count,
            path = %path.display(),
            "Snapshot written"
        );
        Ok(envelope)
    }

    fn check_empty(&self, user_id: &str, kind: PageKind) -> SnapshotResult<()> {
        if kind == PageKind::Profile {
            tracing::info!(user_id, "Profile lists no publications");
            return Ok(());
        }

        tracing::warn!(user_id, ?kind, "No publications extracted: {}", kind.describe());
        if self.strict {
            return Err(SnapshotError::EmptyProfile {
                user_id: user_id.to_string(),
                reason: kind.describe().to_string(),
            });
        }
        Ok(())
    }
}

/// Wrap records in an envelope stamped with the current time.
#[must_use]
pub fn build_envelope(records: Vec<PublicationRecord>) -> SnapshotEnvelope {
    SnapshotEnvelope::new(records)
}

/// Write the envelope to `path`, replacing any existing content.
///
/// # Errors
///
/// Returns a write error naming `path` on any filesystem failure.
pub fn write_snapshot(envelope: &SnapshotEnvelope, path: &Path) -> SnapshotResult<()> {
    let json = format_snapshot(envelope)?;
    std::fs::write(path, json).map_err(|e| SnapshotError::write(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_envelope_counts_records() {
        let records = vec![PublicationRecord::default(), PublicationRecord::default()];
        let envelope = build_envelope(records.clone());
        assert_eq!(envelope.count, 2);
        assert_eq!(envelope.publications, records);
    }

    #[test]
    fn test_write_snapshot_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("publications.json");
        std::fs::write(&path, "x".repeat(4096)).unwrap();

        let envelope = SnapshotEnvelope::at(5, Vec::new());
        write_snapshot(&envelope, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let back: SnapshotEnvelope = serde_json::from_str(&written).unwrap();
        assert_eq!(back, envelope);
    }

    #[test]
    fn test_write_snapshot_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("publications.json");

        let err = write_snapshot(&SnapshotEnvelope::at(0, Vec::new()), &path).unwrap_err();
        assert!(matches!(err, SnapshotError::Write { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_invalid_base_url_is_config_error() {
        let err = ProfileSnapshotBuilder::new(&Config::new().with_base_url("not a url")).unwrap_err();
        match err {
            SnapshotError::Config { field, .. } => assert_eq!(field, "base_url"),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_user_id_rejected_before_io() {
        let builder = ProfileSnapshotBuilder::new(&Config::for_testing("http://127.0.0.1:9")).unwrap();
        let err = builder.fetch_profile_html("  ").await.unwrap_err();
        assert!(matches!(err, SnapshotError::Config { .. }));
    }
}
