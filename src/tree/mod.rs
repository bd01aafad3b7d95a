// src/tree/mod.rs
// =============================================================================
// Everything that reads or edits the JSON document tree.
//
// Submodules:
// - path: PathAddress and Step, the location of a node in the tree
// - node: read-only view answering "is this a link? a container?"
// - walker: finds every link node and records its path
// - mutator: deletes nodes by path, one at a time or as a safe batch
// =============================================================================

mod mutator;
mod node;
mod path;
mod walker;

pub use mutator::remove_batch;
pub use node::Node;
pub use path::PathAddress;
pub use walker::{enumerate, resolve, LinkEntry};
