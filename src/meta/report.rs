//! Generation report returned by the entry point.

use std::path::{Path, PathBuf};

use crate::xml::WriteOutcome;

/// Paths touched by one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Documents created or replaced.
    pub written: Vec<PathBuf>,
    /// Existing documents left untouched.
    pub skipped: Vec<PathBuf>,
}

impl Report {
    pub fn record(&mut self, outcome: WriteOutcome) {
        match outcome {
            WriteOutcome::Written(path) => self.written.push(path),
            WriteOutcome::Skipped(path) => self.skipped.push(path),
        }
    }

    /// Total number of documents considered.
    pub fn total(&self) -> usize {
        self.written.len() + self.skipped.len()
    }

    pub fn was_written(&self, path: &Path) -> bool {
        self.written.iter().any(|p| p == path)
    }

    pub fn was_skipped(&self, path: &Path) -> bool {
        self.skipped.iter().any(|p| p == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_query() {
        let mut report = Report::default();
        report.record(WriteOutcome::Written(PathBuf::from("/a.xml")));
        report.record(WriteOutcome::Skipped(PathBuf::from("/b.xml")));

        assert_eq!(report.total(), 2);
        assert!(report.was_written(Path::new("/a.xml")));
        assert!(report.was_skipped(Path::new("/b.xml")));
        assert!(!report.was_written(Path::new("/b.xml")));
    }
}
