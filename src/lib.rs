//! `graphql_response`
//! =========
//!
//! _Typed, zero-copy decoding of GraphQL responses._
//!
//! The **`graphql_response`** library is the runtime that generated GraphQL client code leans
//! on. A code generator turns a `.graphql` document into static descriptions of an operation:
//! which fields it selects, their declared types, which fragments apply under which type
//! conditions, and which variables the operation accepts. This crate takes those descriptions
//! and reconciles them with the dynamically-shaped JSON a server actually sent back, without
//! any runtime schema access.
//!
//! The crate follows two goals:
//!
//! - To expose typed, lazily-evaluated field accessors over an untyped response tree
//! - To never copy response data when projecting fields or reinterpreting fragments
//!
//! Decoding is a pure transform: a [`decode::SelectionSet`] borrows a read-only
//! [`response::Node`] tree and a static [`schema::SelectionSetSchema`], and every accessor is
//! an on-demand lookup plus coercion. Type-conditioned fragments are resolved by reading the
//! `__typename` discriminant once and comparing it against a static set of concrete type
//! names. Variables carry a tri-state [`operation::Nullable`] binding so that "not sent" and
//! "sent as null" are never conflated on the wire. Operation documents carry a stable
//! content-hash identifier for persisted-query protocols.
//!
//! Network transport, normalized caching, and the code generator itself are deliberately out
//! of scope; this crate only consumes the generator's output shape and a JSON-like value tree
//! the transport already delivered.
//!
//! ```
//! use graphql_response::response::*;
//! use graphql_response::schema::*;
//! use graphql_response::decode::SelectionSet;
//! use graphql_response::bumpalo::collections::Vec;
//!
//! // A context owns the memory for schemas and decoded response trees
//! let ctx = DocumentContext::new();
//!
//! // The shape a generated operation selects
//! let selections = Vec::from_iter_in(
//!     [Selection::Field(FieldDescriptor::new(
//!         &ctx,
//!         "name",
//!         TypeExpr::Scalar(ScalarKind::String),
//!     ))],
//!     &ctx.arena,
//! );
//! let schema = ctx.alloc(SelectionSetSchema::new_in(&ctx, selections));
//!
//! // Wrap a response tree in a typed view and project a field out of it
//! let mut data = ObjectNode::new_in(&ctx);
//! data.insert("name", Node::String("R2-D2"));
//! let root = SelectionSet::root(&ctx, ctx.alloc(data), schema);
//! assert_eq!(root.string("name").unwrap(), "R2-D2");
//! ```

pub mod decode;
pub mod error;
pub mod operation;
pub mod response;
pub mod schema;

pub use bumpalo;

#[cfg(feature = "json")]
pub mod json;
