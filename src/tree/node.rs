// src/tree/node.rs
// =============================================================================
// A read-only view over one JSON value in the document tree.
//
// The tree dialect is small:
//   - a node is a JSON object
//   - it is a LINK node when "type" == "url" and "url" holds a string
//   - it is a CONTAINER when "children" holds an array
//   - a node can be both at once
//
// Instead of sprinkling `value.get("type") == ...` checks around the walker
// and the mutator, both ask a Node what it is.
// =============================================================================

use serde_json::{Map, Value};

/// Field holding the node's kind
pub const TYPE_FIELD: &str = "type";
/// Value of TYPE_FIELD that marks a link node
pub const URL_TYPE_TAG: &str = "url";
/// Field holding the link target of a link node
pub const URL_FIELD: &str = "url";
/// Field holding the ordered child nodes of a container
pub const CHILDREN_FIELD: &str = "children";

/// Borrowed view of a value in the tree
#[derive(Debug, Clone, Copy)]
pub struct Node<'a> {
    value: &'a Value,
}

impl<'a> Node<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    /// The URL if this is a link node, None otherwise
    pub fn link_url(&self) -> Option<&'a str> {
        let object = self.value.as_object()?;

        if object.get(TYPE_FIELD).and_then(Value::as_str) != Some(URL_TYPE_TAG) {
            return None;
        }

        object.get(URL_FIELD).and_then(Value::as_str)
    }

    /// The children list if this node is a container
    pub fn children(&self) -> Option<&'a Vec<Value>> {
        self.value
            .as_object()?
            .get(CHILDREN_FIELD)
            .and_then(Value::as_array)
    }

    /// A named field of this node, if the node is an object that has it
    pub fn field(&self, name: &str) -> Option<&'a Value> {
        self.value.as_object()?.get(name)
    }
}

/// Mutable access to a container's children list
pub fn children_mut(value: &mut Value) -> Option<&mut Vec<Value>> {
    value
        .as_object_mut()?
        .get_mut(CHILDREN_FIELD)
        .and_then(Value::as_array_mut)
}

/// Mutable access to a node's fields
pub fn fields_mut(value: &mut Value) -> Option<&mut Map<String, Value>> {
    value.as_object_mut()
}
