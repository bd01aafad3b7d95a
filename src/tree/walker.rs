// src/tree/walker.rs
// =============================================================================
// Finds every link node in the document tree.
//
// How it works:
// 1. Start at the root with an empty path
// 2. If the node is a link node, record (url, path)
// 3. Recurse into each child, extending the path with ChildIndex(i)
//
// This is a depth-first pre-order walk, so entries come out in the same order
// a reader would meet them in the file. The walk never modifies the tree and
// running it twice on the same document gives the same result.
// =============================================================================

use super::node::Node;
use super::path::{PathAddress, Step};
use serde_json::Value;
use tracing::warn;

/// Deepest tree level the walker descends into. Input is a tree so there are
/// no cycles, but a malformed file could still nest absurdly deep.
pub const MAX_DEPTH: usize = 256;

/// One discovered link node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    pub url: String,
    pub path: PathAddress,
}

/// Returns every link node under `root`, in document (pre-)order
pub fn enumerate(root: &Value) -> Vec<LinkEntry> {
    let mut entries = Vec::new();
    walk(root, PathAddress::root(), 0, &mut entries);
    entries
}

fn walk(value: &Value, path: PathAddress, depth: usize, entries: &mut Vec<LinkEntry>) {
    let node = Node::new(value);

    if let Some(url) = node.link_url() {
        entries.push(LinkEntry {
            url: url.to_string(),
            path: path.clone(),
        });
    }

    let Some(children) = node.children() else {
        return;
    };

    if depth >= MAX_DEPTH {
        warn!(
            "Skipping {} child node(s) below '{}': tree is nested deeper than {} levels",
            children.len(),
            path,
            MAX_DEPTH
        );
        return;
    }

    for (i, child) in children.iter().enumerate() {
        walk(child, path.child_index(i), depth + 1, entries);
    }
}

/// Follows `steps` from `root` without modifying anything.
///
/// Returns None as soon as a step does not resolve.
pub fn resolve<'a>(root: &'a Value, steps: &[Step]) -> Option<&'a Value> {
    let mut current = root;

    for step in steps {
        let node = Node::new(current);
        current = match step {
            Step::ChildIndex(i) => node.children()?.get(*i)?,
            Step::Field(name) => node.field(name)?,
        };
    }

    Some(current)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is `path` passed by value into walk()?
//    - Each child needs its own copy extended by one step
//    - child_index() builds that copy, the parent's path stays as it was
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_tree() -> Value {
        json!({
            "type": "folder",
            "name": "root",
            "children": [
                {"type": "url", "url": "https://one.test"},
                {
                    "type": "folder",
                    "children": [
                        {"type": "url", "url": "https://two.test"},
                        {"type": "separator"},
                        {"type": "url", "url": "https://three.test"}
                    ]
                },
                {"type": "url", "url": "https://one.test"},
                "not a node",
                {"type": "folder", "children": "not a list"}
            ]
        })
    }

    #[test]
    fn test_finds_every_link_in_preorder() {
        let entries = enumerate(&sample_tree());

        let found: Vec<(String, String)> = entries
            .iter()
            .map(|e| (e.url.clone(), e.path.to_string()))
            .collect();

        assert_eq!(
            found,
            vec![
                ("https://one.test".to_string(), "children[0]".to_string()),
                ("https://two.test".to_string(), "children[1].children[0]".to_string()),
                ("https://three.test".to_string(), "children[1].children[2]".to_string()),
                ("https://one.test".to_string(), "children[2]".to_string()),
            ]
        );
    }

    #[test]
    fn test_parent_is_emitted_before_its_children() {
        let tree = json!({
            "type": "url",
            "url": "https://parent.test",
            "children": [{"type": "url", "url": "https://child.test"}]
        });

        let entries = enumerate(&tree);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].url, "https://parent.test");
        assert_eq!(entries[0].path, PathAddress::root());
        assert_eq!(entries[1].path.to_string(), "children[0]");
    }

    #[test]
    fn test_deterministic() {
        let tree = sample_tree();
        assert_eq!(enumerate(&tree), enumerate(&tree));
    }

    #[test]
    fn test_no_links() {
        assert!(enumerate(&json!({"children": []})).is_empty());
        assert!(enumerate(&json!([{"type": "url", "url": "https://x.test"}])).is_empty());
        assert!(enumerate(&json!(null)).is_empty());
    }

    #[test]
    fn test_every_path_resolves_back_to_its_node() {
        let tree = sample_tree();

        for entry in enumerate(&tree) {
            let node = resolve(&tree, entry.path.steps()).expect("path should resolve");
            assert_eq!(Node::new(node).link_url(), Some(entry.url.as_str()));
        }
    }

    #[test]
    fn test_resolve_fails_on_bad_steps() {
        let tree = sample_tree();
        assert!(resolve(&tree, &[Step::ChildIndex(99)]).is_none());
        assert!(resolve(&tree, &[Step::ChildIndex(0), Step::ChildIndex(0)]).is_none());
        assert!(resolve(&tree, &[Step::Field("missing".to_string())]).is_none());
        assert_eq!(
            resolve(&tree, &[Step::Field("name".to_string())]),
            Some(&json!("root"))
        );
    }

    #[test]
    fn test_depth_is_bounded() {
        // Build a chain of folders deeper than MAX_DEPTH with a link at every level
        let mut tree = json!({"type": "url", "url": "https://deep.test"});
        for _ in 0..(MAX_DEPTH + 10) {
            tree = json!({"type": "url", "url": "https://deep.test", "children": [tree]});
        }

        let entries = enumerate(&tree);
        assert_eq!(entries.len(), MAX_DEPTH + 1);
    }
}
