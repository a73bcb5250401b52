//! # JSON Conversion
//!
//! The `graphql_response::json` module contains utilities to convert from and to
//! `serde_json` values. It is the boundary the excluded transport layer talks through: a
//! deserialized response body becomes a [`crate::response::Node`] tree via
//! [`node_from_json`], and an operation's variables and arguments are encoded back into the
//! request payload.
//!
//! The module otherwise only contains a handful of utility functions:
//!
//! - [`node_from_json`] is used to build a response value tree from any JSON value.
//! - [`json_from_node`] is used to convert a value tree back into a JSON value.
//! - [`json_variables`] encodes an operation's declared variables, omitting absent bindings
//!   and keeping explicit nulls, recursively through input objects.
//! - [`json_arguments`] resolves a field's argument values against variable bindings.
//! - [`ToJson`] allows conversion of input values using a `to_json` method.
//! - [`PersistedQueryExtension`] is the request extension a transport sends when attempting
//!   persisted-query short-circuiting.

mod conversion;
mod persisted;
mod values;

pub use conversion::*;
pub use persisted::*;
pub use values::*;
