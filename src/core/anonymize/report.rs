//! Anonymization run summary

use serde::Serialize;

/// Summary of one anonymization run
///
/// Counters only; no player names or other sensitive values are retained
/// here, so the summary is safe to log and print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnonymizeSummary {
    /// Number of players assigned an anonymous id
    pub players_mapped: usize,

    /// Number of round records rewritten (scores dropped, names replaced)
    pub rounds_rewritten: usize,

    /// Number of falsy round entries passed through untouched
    pub rounds_skipped: usize,
}

impl AnonymizeSummary {
    /// Create a summary for a roster of the given size
    pub fn new(players_mapped: usize) -> Self {
        Self {
            players_mapped,
            rounds_rewritten: 0,
            rounds_skipped: 0,
        }
    }

    /// Record a rewritten round
    pub fn add_rewritten(&mut self) {
        self.rounds_rewritten += 1;
    }

    /// Record a skipped (falsy) round entry
    pub fn add_skipped(&mut self) {
        self.rounds_skipped += 1;
    }

    /// Total entries seen in `roundData`
    pub fn rounds_total(&self) -> usize {
        self.rounds_rewritten + self.rounds_skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_summary() {
        let summary = AnonymizeSummary::new(4);
        assert_eq!(summary.players_mapped, 4);
        assert_eq!(summary.rounds_rewritten, 0);
        assert_eq!(summary.rounds_skipped, 0);
        assert_eq!(summary.rounds_total(), 0);
    }

    #[test]
    fn test_accumulation() {
        let mut summary = AnonymizeSummary::new(2);
        summary.add_rewritten();
        summary.add_rewritten();
        summary.add_skipped();

        assert_eq!(summary.rounds_rewritten, 2);
        assert_eq!(summary.rounds_skipped, 1);
        assert_eq!(summary.rounds_total(), 3);
    }
}
