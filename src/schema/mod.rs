//! # Generated Selection Schemas
//!
//! The `graphql_response::schema` module contains the static descriptions a code generator
//! emits for one operation: which fields are selected under which response keys, what their
//! declared types are, and which fragments apply under which type conditions.
//!
//! Everything in this module is fixed at generation time. A declared type is never inferred
//! from a response; the decode engine trusts the shapes it was generated with, since the
//! generator has already validated the document against the server schema.
//!
//! Its main parts are:
//! - [`TypeExpr`], the recursive declared-type composition of scalars, objects, lists, and
//!   nullable wrappers
//! - [`FieldDescriptor`], one requested field with its response key and arguments
//! - [`SelectionSetSchema`], an indexed group of selections over one parent type
//! - [`TypeCondition`], the set of concrete type names a fragment is gated on

#[allow(clippy::module_inception)]
mod schema;

pub use schema::*;
