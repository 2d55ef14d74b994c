//! JSON snapshot formatting.

use crate::models::SnapshotEnvelope;

/// Render the envelope as the snapshot file contents.
///
/// Two-space indentation; non-ASCII text is emitted as raw UTF-8, not
/// `\u` escapes. No trailing newline.
pub fn format_snapshot(envelope: &SnapshotEnvelope) -> serde_json::Result<String> {
    serde_json::to_string_pretty(envelope)
}
