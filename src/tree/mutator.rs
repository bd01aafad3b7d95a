// src/tree/mutator.rs
// =============================================================================
// Deletes nodes from the document tree using the paths the walker recorded.
//
// Single removal:
//   Walk every step but the last, then delete the last step's target from
//   its parent (an element of "children", or a named field). If any step does
//   not resolve, nothing is changed and a PathError comes back.
//
// Batch removal:
//   Deleting children[i] shifts children[i+1..] down by one, which would make
//   any path still waiting to be removed point at the wrong node. Removing in
//   DESCENDING path order avoids that: every path that could be shifted by a
//   removal sorts after it, so it has already been handled.
// =============================================================================

use super::node::{children_mut, fields_mut};
use super::path::{display_steps, PathAddress, Step};
use crate::error::PathError;
use serde_json::Value;

/// Removes the node at `path` from `root`.
///
/// On error the document is left exactly as it was.
pub fn remove(root: &mut Value, path: &PathAddress) -> Result<(), PathError> {
    let (parent_steps, last) = path.split_last().ok_or(PathError::EmptyPath)?;

    let mut parent = root;
    for (depth, step) in parent_steps.iter().enumerate() {
        parent = descend_mut(parent, step, &parent_steps[..depth])?;
    }

    let at = display_steps(parent_steps);
    match last {
        Step::ChildIndex(index) => {
            let children =
                children_mut(parent).ok_or_else(|| PathError::NotAContainer { at: at.clone() })?;
            if *index >= children.len() {
                return Err(PathError::IndexOutOfRange {
                    at,
                    index: *index,
                    len: children.len(),
                });
            }
            children.remove(*index);
        }
        Step::Field(name) => {
            fields_mut(parent)
                .and_then(|fields| fields.remove(name))
                .ok_or_else(|| PathError::MissingField {
                    at,
                    field: name.clone(),
                })?;
        }
    }

    Ok(())
}

/// Removes every path in `paths`, safest order first.
///
/// Results are returned in the same order as `paths`.
pub fn remove_batch(root: &mut Value, paths: &[PathAddress]) -> Vec<Result<(), PathError>> {
    let mut order: Vec<usize> = (0..paths.len()).collect();
    order.sort_by(|&a, &b| paths[b].cmp(&paths[a]));

    let mut results: Vec<(usize, Result<(), PathError>)> = order
        .into_iter()
        .map(|i| (i, remove(root, &paths[i])))
        .collect();
    results.sort_by_key(|(i, _)| *i);

    results.into_iter().map(|(_, result)| result).collect()
}

// Moves one step down the tree, mutably
fn descend_mut<'a>(
    value: &'a mut Value,
    step: &Step,
    walked: &[Step],
) -> Result<&'a mut Value, PathError> {
    match step {
        Step::ChildIndex(index) => {
            let children = children_mut(value).ok_or_else(|| PathError::NotAContainer {
                at: display_steps(walked),
            })?;
            let len = children.len();
            children
                .get_mut(*index)
                .ok_or_else(|| PathError::IndexOutOfRange {
                    at: display_steps(walked),
                    index: *index,
                    len,
                })
        }
        Step::Field(name) => fields_mut(value)
            .and_then(|fields| fields.get_mut(name))
            .ok_or_else(|| PathError::MissingField {
                at: display_steps(walked),
                field: name.clone(),
            }),
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does remove() walk all the steps before touching anything?
//    - descend_mut only borrows, it never deletes
//    - The one deletion happens after the parent was found
//    - So a bad path returns Err with the tree unchanged
//
// 2. What does `paths[b].cmp(&paths[a])` do?
//    - PathAddress derives Ord, so paths compare step by step
//    - Swapping a and b sorts from largest to smallest
//
// 3. Why sort the results back afterwards?
//    - The caller matches result i with path i
// -----------------------------------------------------------------------------
