use serde_json::{map::Map as JSMap, Value as JSValue};

use super::conversion::ToJson;
use crate::operation::{Nullable, VariableBindings, VariableDescriptors};
use crate::response::{DocumentContext, Node, ObjectNode};

/// Builds a response value tree from a [serde_json::Value].
///
/// This is what a transport calls with the `data` member of a deserialized response body
/// before handing the tree to [`crate::operation::OperationDocument::decode`]. Numbers keep
/// their integer representation when they have one and fall back to their float
/// representation otherwise.
pub fn node_from_json<'a>(ctx: &'a DocumentContext, value: &JSValue) -> Node<'a> {
    match value {
        JSValue::Null => Node::Null,
        JSValue::Bool(value) => Node::Boolean(*value),
        JSValue::Number(num) => num
            .as_i64()
            .map(Node::Int)
            .unwrap_or_else(|| Node::Float(num.as_f64().unwrap_or(0.0))),
        JSValue::String(str) => Node::String(ctx.alloc_str(str)),
        JSValue::Array(list) => {
            let mut children =
                bumpalo::collections::Vec::with_capacity_in(list.len(), &ctx.arena);
            for item in list {
                children.push(node_from_json(ctx, item));
            }
            Node::List(children)
        }
        JSValue::Object(map) => {
            let mut object = ObjectNode::new_in(ctx);
            for (key, value) in map {
                object.insert(ctx.alloc_str(key), node_from_json(ctx, value));
            }
            Node::Object(object)
        }
    }
}

/// Converts a response value tree back into a [serde_json::Value].
pub fn json_from_node(node: &Node<'_>) -> JSValue {
    match node {
        Node::Null => JSValue::Null,
        Node::Boolean(value) => (*value).into(),
        Node::Int(value) => (*value).into(),
        Node::Float(value) => serde_json::Number::from_f64(*value)
            .map(JSValue::Number)
            .unwrap_or(JSValue::Null),
        Node::String(str) => (*str).into(),
        Node::List(list) => list
            .iter()
            .map(json_from_node)
            .collect::<Vec<JSValue>>()
            .into(),
        Node::Object(object) => {
            let mut map = JSMap::new();
            for entry in object.iter() {
                map.insert(entry.name.to_string(), json_from_node(&entry.value));
            }
            map.into()
        }
    }
}

/// Encodes an operation's variables into the `variables` member of a request payload.
///
/// Walks the operation's declared variables rather than the caller's bindings, so
/// undeclared bindings are never sent. An `Absent` binding (or no binding at all) omits the
/// key entirely, a `Null` binding emits a JSON `null`, and a `Value` binding emits the
/// encoded value. Nested input-object fields follow the same tri-state rule through
/// [`ToJson`].
pub fn json_variables<'a>(
    variables: &VariableDescriptors<'a>,
    bindings: &VariableBindings<'a>,
) -> JSMap<String, JSValue> {
    let mut map = JSMap::new();
    for descriptor in variables.children.iter() {
        let binding = bindings
            .get(descriptor.name)
            .map(Nullable::as_ref)
            .unwrap_or(Nullable::Absent);
        match binding {
            Nullable::Absent => {}
            Nullable::Null => {
                map.insert(descriptor.name.to_string(), JSValue::Null);
            }
            Nullable::Value(value) => {
                map.insert(descriptor.name.to_string(), value.to_json());
            }
        }
    }
    map
}
