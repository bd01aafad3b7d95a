// src/report.rs
// =============================================================================
// Sums up a run: how many links, how many passed, which ones are broken.
//
// The report pairs each LinkEntry with the ProbeResult at the same position
// (the checker keeps input order, so position i of the results belongs to
// entry i). Every checked link is either passed or broken, never both and
// never neither.
// =============================================================================

use crate::checker::{classify, Outcome, ProbeResult, Verdict};
use crate::tree::{LinkEntry, PathAddress};
use serde::Serialize;

/// A link whose probe came back broken
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrokenLinkRecord {
    pub url: String,
    pub path: PathAddress,
    #[serde(rename = "status")]
    pub outcome: Outcome,
}

/// Totals plus the broken links, in discovery order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub total_found: usize,
    pub total_checked: usize,
    pub passed: usize,
    pub broken_count: usize,
    pub broken: Vec<BrokenLinkRecord>,
}

impl Report {
    /// Builds the report from the walker's entries and the checker's results.
    ///
    /// Entries without a matching result (a shorter `results`) count as found
    /// but not checked.
    pub fn build(entries: &[LinkEntry], results: &[ProbeResult]) -> Self {
        let mut passed = 0;
        let mut broken = Vec::new();

        for (entry, result) in entries.iter().zip(results) {
            match classify(&result.outcome) {
                Verdict::NotBroken => passed += 1,
                Verdict::Broken => broken.push(BrokenLinkRecord {
                    url: entry.url.clone(),
                    path: entry.path.clone(),
                    outcome: result.outcome.clone(),
                }),
            }
        }

        Report {
            total_found: entries.len(),
            total_checked: passed + broken.len(),
            passed,
            broken_count: broken.len(),
            broken,
        }
    }

    pub fn has_broken(&self) -> bool {
        !self.broken.is_empty()
    }
}
