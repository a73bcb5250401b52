use serde_json::{map::Map as JSMap, Value as JSValue};

use crate::operation::{InputValue, Nullable, VariableBindings};
use crate::schema::{ArgumentValue, Arguments};

/// Utility trait to encode structures into [serde_json::Value]s.
pub trait ToJson {
    /// Encodes the current structure into a [serde_json::Value].
    fn to_json(&self) -> JSValue;
}

impl ToJson for InputValue<'_> {
    fn to_json(&self) -> JSValue {
        match self {
            InputValue::Null => JSValue::Null,
            InputValue::Boolean(value) => (*value).into(),
            InputValue::Int(value) => (*value).into(),
            InputValue::Float(value) => serde_json::Number::from_f64(*value)
                .map(JSValue::Number)
                .unwrap_or(JSValue::Null),
            InputValue::String(str) | InputValue::Enum(str) => (*str).into(),
            InputValue::List(list) => list
                .iter()
                .map(ToJson::to_json)
                .collect::<Vec<JSValue>>()
                .into(),
            InputValue::Object(fields) => {
                let mut map = JSMap::new();
                for field in fields.iter() {
                    match &field.value {
                        Nullable::Absent => {}
                        Nullable::Null => {
                            map.insert(field.name.to_string(), JSValue::Null);
                        }
                        Nullable::Value(value) => {
                            map.insert(field.name.to_string(), value.to_json());
                        }
                    }
                }
                map.into()
            }
        }
    }
}

/// Resolves a field's arguments into a JSON object against the caller's variable bindings.
///
/// Literals encode directly. A variable reference looks up its binding: an `Absent` binding
/// (or no binding at all) drops the argument key, a `Null` binding encodes as JSON `null`.
/// Inside lists an absent variable has no key to drop and encodes as `null` instead.
pub fn json_arguments<'a>(
    arguments: &Arguments<'a>,
    bindings: &VariableBindings<'a>,
) -> JSMap<String, JSValue> {
    let mut map = JSMap::new();
    for argument in arguments.children.iter() {
        if let Some(value) = resolve_argument(&argument.value, bindings) {
            map.insert(argument.name.to_string(), value);
        }
    }
    map
}

fn resolve_argument<'a>(
    value: &ArgumentValue<'a>,
    bindings: &VariableBindings<'a>,
) -> Option<JSValue> {
    match value {
        ArgumentValue::Variable(name) => match bindings.get(*name).map(Nullable::as_ref) {
            None | Some(Nullable::Absent) => None,
            Some(Nullable::Null) => Some(JSValue::Null),
            Some(Nullable::Value(value)) => Some(value.to_json()),
        },
        ArgumentValue::Null => Some(JSValue::Null),
        ArgumentValue::Boolean(value) => Some((*value).into()),
        ArgumentValue::Int(value) => Some((*value).into()),
        ArgumentValue::Float(value) => Some(
            serde_json::Number::from_f64(*value)
                .map(JSValue::Number)
                .unwrap_or(JSValue::Null),
        ),
        ArgumentValue::String(str) | ArgumentValue::Enum(str) => Some((*str).into()),
        ArgumentValue::List(list) => Some(
            list.iter()
                .map(|item| resolve_argument(item, bindings).unwrap_or(JSValue::Null))
                .collect::<Vec<JSValue>>()
                .into(),
        ),
        ArgumentValue::Object(fields) => {
            let mut map = JSMap::new();
            for field in fields.iter() {
                if let Some(value) = resolve_argument(&field.value, bindings) {
                    map.insert(field.name.to_string(), value);
                }
            }
            Some(map.into())
        }
    }
}
