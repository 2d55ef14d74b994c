//! Console progress lines.

use std::path::Path;

use crate::models::SnapshotEnvelope;

/// Line printed before the profile is fetched.
#[must_use]
pub fn progress_line(user_id: &str) -> String {
    format!("Fetching Google Scholar profile for user: {user_id}")
}

/// Line printed after the snapshot is written.
#[must_use]
pub fn summary_line(envelope: &SnapshotEnvelope, path: &Path) -> String {
    format!("Wrote {} publications to {}", envelope.count, path.display())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines() {
        assert_eq!(progress_line("oVm7TyYAAAAJ"), "Fetching Google Scholar profile for user: oVm7TyYAAAAJ");

        let envelope = SnapshotEnvelope::at(0, Vec::new());
        assert_eq!(
            summary_line(&envelope, Path::new("out/publications.json")),
            "Wrote 0 publications to out/publications.json"
        );
    }
}
