//! Snapshot envelope persisted to disk.

use serde::{Deserialize, Serialize};

use super::PublicationRecord;

/// Top-level JSON document: generation time, record count, records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEnvelope {
    /// Unix timestamp (seconds) of generation.
    pub updated_at: i64,

    /// Number of publications. Always equals `publications.len()`.
    pub count: usize,

    /// Publications in page order.
    pub publications: Vec<PublicationRecord>,
}

impl SnapshotEnvelope {
    /// Wrap `publications`, stamped with the current time.
    #[must_use]
    pub fn new(publications: Vec<PublicationRecord>) -> Self {
        Self::at(chrono::Utc::now().timestamp(), publications)
    }

    /// Wrap `publications` with an explicit timestamp.
    #[must_use]
    pub fn at(updated_at: i64, publications: Vec<PublicationRecord>) -> Self {
        Self { updated_at, count: publications.len(), publications }
    }

    /// Check if the snapshot holds no publications.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.publications.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, citations: &str) -> PublicationRecord {
        PublicationRecord {
            title: title.to_string(),
            citations: citations.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_count_matches_publications() {
        let env = SnapshotEnvelope::at(0, vec![record("a", "1"), record("b", "2")]);
        assert_eq!(env.count, 2);
        assert_eq!(env.count, env.publications.len());
        assert!(!env.is_empty());
    }

    #[test]
    fn test_empty_envelope() {
        let env = SnapshotEnvelope::at(1_700_000_000, Vec::new());
        assert_eq!(env.count, 0);
        assert!(env.is_empty());
    }

    #[test]
    fn test_new_uses_current_time() {
        let before = chrono::Utc::now().timestamp();
        let env = SnapshotEnvelope::new(Vec::new());
        let after = chrono::Utc::now().timestamp();
        assert!(env.updated_at >= before && env.updated_at <= after);
    }

    #[test]
    fn test_field_order() {
        let env = SnapshotEnvelope::at(7, Vec::new());
        let json = serde_json::to_string(&env).unwrap();
        assert_eq!(json, r#"{"updated_at":7,"count":0,"publications":[]}"#);
    }
}
