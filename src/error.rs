// src/error.rs
// =============================================================================
// Typed errors for the parts of the program that callers branch on.
//
// Most of the application flow uses anyhow::Result (see main.rs), but a failed
// removal is not fatal: the caller reports it and moves on to the next link.
// For that we want a real enum we can match on and print nicely.
// =============================================================================

use thiserror::Error;

/// Why a PathAddress could not be resolved (or removed) in a document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The root node cannot be removed from itself
    #[error("path is empty, the root node cannot be removed")]
    EmptyPath,

    /// A ChildIndex step hit a node without a "children" array
    #[error("node at '{at}' has no children list")]
    NotAContainer { at: String },

    /// A ChildIndex step pointed past the end of the children list
    #[error("index {index} is out of range at '{at}' ({len} children)")]
    IndexOutOfRange { at: String, index: usize, len: usize },

    /// A Field step named a field the node does not have
    #[error("node at '{at}' has no field '{field}'")]
    MissingField { at: String, field: String },

    /// The path resolves, but not to the link it was recorded for
    #[error("node at '{at}' is no longer the link '{expected}'")]
    UrlMismatch { at: String, expected: String },
}
