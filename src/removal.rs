// src/removal.rs
// =============================================================================
// The interactive removal session.
//
// Each broken link moves through a tiny state machine:
//
//   Pending --(user says no)--> Kept
//   Pending --(removed)-------> Removed
//   Pending --(path failed)---> Failed
//
// Questions are asked one at a time in report order. The confirmed removals
// are then applied as one batch, deepest/last path first, so the paths
// recorded by the walker stay valid the whole way through. A confirmed path
// must still point at the link it was recorded for, or it is not touched.
// =============================================================================

use crate::error::PathError;
use crate::prompt::Confirm;
use crate::report::BrokenLinkRecord;
use crate::tree::{remove_batch, resolve, Node, PathAddress};
use anyhow::Result;
use serde_json::Value;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalState {
    Pending,
    Removed,
    Kept,
    Failed(PathError),
}

/// What happened to every broken link, in report order
#[derive(Debug, Clone)]
pub struct RemovalSummary {
    pub items: Vec<(BrokenLinkRecord, RemovalState)>,
}

impl RemovalSummary {
    pub fn removed(&self) -> usize {
        self.count(|s| matches!(s, RemovalState::Removed))
    }

    pub fn kept(&self) -> usize {
        self.count(|s| matches!(s, RemovalState::Kept))
    }

    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, RemovalState::Failed(_)))
    }

    fn count(&self, pred: impl Fn(&RemovalState) -> bool) -> usize {
        self.items.iter().filter(|(_, state)| pred(state)).count()
    }
}

/// Asks about each broken link and removes the confirmed ones from `document`
pub fn run_session(
    document: &mut Value,
    broken: &[BrokenLinkRecord],
    confirm: &mut impl Confirm,
) -> Result<RemovalSummary> {
    let mut states = vec![RemovalState::Pending; broken.len()];

    for (record, state) in broken.iter().zip(states.iter_mut()) {
        if !confirm.confirm(record)? {
            *state = RemovalState::Kept;
        }
    }

    // Confirmed paths must still point at the link they were recorded for
    for (record, state) in broken.iter().zip(states.iter_mut()) {
        if *state != RemovalState::Pending {
            continue;
        }
        if let Some(value) = resolve(document, record.path.steps()) {
            if Node::new(value).link_url() != Some(record.url.as_str()) {
                *state = RemovalState::Failed(PathError::UrlMismatch {
                    at: record.path.to_string(),
                    expected: record.url.clone(),
                });
            }
        }
    }

    let confirmed: Vec<usize> = states
        .iter()
        .enumerate()
        .filter(|(_, state)| **state == RemovalState::Pending)
        .map(|(i, _)| i)
        .collect();
    let paths: Vec<PathAddress> = confirmed.iter().map(|&i| broken[i].path.clone()).collect();

    for (i, result) in confirmed.into_iter().zip(remove_batch(document, &paths)) {
        states[i] = match result {
            Ok(()) => {
                info!("Removed {} at {}", broken[i].url, broken[i].path);
                RemovalState::Removed
            }
            Err(e) => {
                warn!("Could not remove {} at {}: {}", broken[i].url, broken[i].path, e);
                RemovalState::Failed(e)
            }
        };
    }

    Ok(RemovalSummary {
        items: broken.iter().cloned().zip(states).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::Outcome;
    use crate::prompt::LinePrompt;
    use crate::tree::enumerate;
    use serde_json::json;
    use std::io::Cursor;

    fn broken_from(tree: &Value, urls: &[&str]) -> Vec<BrokenLinkRecord> {
        enumerate(tree)
            .into_iter()
            .filter(|e| urls.contains(&e.url.as_str()))
            .map(|e| BrokenLinkRecord {
                url: e.url,
                path: e.path,
                outcome: Outcome::Status(404),
            })
            .collect()
    }

    fn answers(script: &str) -> LinePrompt<Cursor<String>, Vec<u8>> {
        LinePrompt::new(Cursor::new(script.to_string()), Vec::new())
    }

    #[test]
    fn test_removes_all_confirmed_siblings() {
        let mut tree = json!({"children": [
            {"type": "url", "url": "https://a.test"},
            {"type": "url", "url": "https://b.test"},
            {"type": "url", "url": "https://c.test"}
        ]});
        let broken = broken_from(&tree, &["https://a.test", "https://b.test", "https://c.test"]);

        let summary = run_session(&mut tree, &broken, &mut answers("y\n\nY\n")).unwrap();

        assert_eq!(summary.removed(), 3);
        assert_eq!(tree, json!({"children": []}));
    }

    #[test]
    fn test_kept_links_stay_and_others_still_resolve() {
        let mut tree = json!({"children": [
            {"type": "url", "url": "https://a.test"},
            {"type": "url", "url": "https://b.test"},
            {"type": "url", "url": "https://c.test"}
        ]});
        let broken = broken_from(&tree, &["https://a.test", "https://b.test", "https://c.test"]);

        let summary = run_session(&mut tree, &broken, &mut answers("y\nn\ny\n")).unwrap();

        assert_eq!(summary.removed(), 2);
        assert_eq!(summary.kept(), 1);
        assert_eq!(summary.items[1].1, RemovalState::Kept);
        assert_eq!(
            tree,
            json!({"children": [{"type": "url", "url": "https://b.test"}]})
        );
    }

    #[test]
    fn test_failed_removal_is_reported_and_session_continues() {
        let mut tree = json!({"children": [{"type": "url", "url": "https://a.test"}]});
        let mut broken = broken_from(&tree, &["https://a.test"]);
        broken.insert(
            0,
            BrokenLinkRecord {
                url: "https://stale.test".to_string(),
                path: PathAddress::root().child_index(5),
                outcome: Outcome::Error("Connection failed".to_string()),
            },
        );

        let summary = run_session(&mut tree, &broken, &mut answers("y\ny\n")).unwrap();

        assert_eq!(summary.failed(), 1);
        assert_eq!(summary.removed(), 1);
        assert!(matches!(
            summary.items[0].1,
            RemovalState::Failed(PathError::IndexOutOfRange { .. })
        ));
        assert_eq!(tree, json!({"children": []}));
    }

    #[test]
    fn test_path_pointing_at_another_link_is_not_removed() {
        let mut tree = json!({"children": [
            {"type": "url", "url": "https://a.test"},
            {"type": "url", "url": "https://b.test"}
        ]});
        let before = tree.clone();
        let broken = vec![BrokenLinkRecord {
            url: "https://b.test".to_string(),
            path: PathAddress::root().child_index(0),
            outcome: Outcome::Status(404),
        }];

        let summary = run_session(&mut tree, &broken, &mut answers("y\n")).unwrap();

        assert!(matches!(
            summary.items[0].1,
            RemovalState::Failed(PathError::UrlMismatch { .. })
        ));
        assert_eq!(tree, before);
    }

    #[test]
    fn test_nothing_confirmed_leaves_document_alone() {
        let mut tree = json!({"children": [{"type": "url", "url": "https://a.test"}]});
        let before = tree.clone();
        let broken = broken_from(&tree, &["https://a.test"]);

        let summary = run_session(&mut tree, &broken, &mut answers("")).unwrap();

        assert_eq!(summary.removed(), 0);
        assert_eq!(summary.kept(), 1);
        assert_eq!(tree, before);
    }
}
