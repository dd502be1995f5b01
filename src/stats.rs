//! Line statistics for a single conversion run.

use crate::lines::LineKind;
use log::info;
use std::time::Instant;

/// Counts of each kind of input line seen while scanning a file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineStats {
    pub data: usize,
    pub comments: usize,
    pub blank: usize,
}

impl LineStats {
    pub fn record(&mut self, kind: LineKind) {
        match kind {
            LineKind::Data => self.data += 1,
            LineKind::Comment => self.comments += 1,
            LineKind::Blank => self.blank += 1,
        }
    }

    /// Total number of lines read.
    pub fn total(&self) -> usize {
        self.data + self.comments + self.blank
    }

    /// Log the final statistics for a conversion that started at `start`.
    pub fn finish(&self, label: &str, start: Instant) {
        info!(
            "{}: {} lines read ({} records, {} comments, {} blank) in {:.2?}",
            label,
            self.total(),
            self.data,
            self.comments,
            self.blank,
            start.elapsed()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_total() {
        let mut stats = LineStats::default();
        stats.record(LineKind::Data);
        stats.record(LineKind::Data);
        stats.record(LineKind::Comment);
        stats.record(LineKind::Blank);

        assert_eq!(
            stats,
            LineStats {
                data: 2,
                comments: 1,
                blank: 1
            }
        );
        assert_eq!(stats.total(), 4);
    }
}
