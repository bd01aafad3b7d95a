// src/tree/path.rs
// =============================================================================
// A PathAddress says where a node lives inside the document tree.
//
// It is an ordered list of steps from the root:
//   - ChildIndex(i): go into the "children" list and take element i
//   - Field(name):   go into the object field called `name`
//
// The walker builds these once while it scans the tree and the mutator uses
// the very same values to delete nodes later. Nothing ever turns a path into
// a string and parses it back; the string form is only for display.
//
// Ordering matters: removals are applied in DESCENDING path order, so that
// deleting children[i] never shifts the index of a path still waiting to be
// removed (see mutator.rs).
// =============================================================================

use serde::{Serialize, Serializer};
use std::fmt;

/// One step from a node to one of its descendants.
///
/// The derived ordering compares ChildIndex numerically and sorts every
/// ChildIndex before any Field.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    ChildIndex(usize),
    Field(String),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::ChildIndex(i) => write!(f, "children[{}]", i),
            Step::Field(name) => write!(f, "{}", name),
        }
    }
}

/// An ordered sequence of steps from the document root.
///
/// Ordering is lexicographic over the steps, and a path sorts before every
/// path it is a strict prefix of.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PathAddress {
    steps: Vec<Step>,
}

impl PathAddress {
    /// The empty path, pointing at the root itself
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a new path with `step` appended
    pub fn child(&self, step: Step) -> Self {
        let mut steps = self.steps.clone();
        steps.push(step);
        Self { steps }
    }

    /// Shorthand for `child(Step::ChildIndex(index))`
    pub fn child_index(&self, index: usize) -> Self {
        self.child(Step::ChildIndex(index))
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Splits into (parent steps, last step), or None for the root path
    pub fn split_last(&self) -> Option<(&[Step], &Step)> {
        self.steps
            .split_last()
            .map(|(last, parent)| (parent, last))
    }
}

impl From<Vec<Step>> for PathAddress {
    fn from(steps: Vec<Step>) -> Self {
        Self { steps }
    }
}

/// Renders a slice of steps the way users see paths: "children[0].children[2]"
pub fn display_steps(steps: &[Step]) -> String {
    if steps.is_empty() {
        return "<root>".to_string();
    }

    steps
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

impl fmt::Display for PathAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&display_steps(&self.steps))
    }
}

// In the --json report a path is shown as its display string
impl Serialize for PathAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
