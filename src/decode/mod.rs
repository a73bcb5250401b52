//! # Typed Selection-Set Decoding
//!
//! The `graphql_response::decode` module is the engine core: it reconciles a dynamically
//! shaped response tree with the statically declared selection schema, field by field, on
//! demand.
//!
//! A [`SelectionSet`] is a typed view over one object node of the tree. It borrows the node
//! and never mutates it, so it's cheap to create, copy, and discard; re-decoding the same
//! tree with the same schema yields identical results. Field accessors look up the response
//! key, coerce the node against the declared type, and fail with a path-carrying error on
//! any structural disagreement.
//!
//! Fragments reinterpret the same backing node under another schema rather than copying it:
//! inline fragments and type-conditioned fragment documents read the `__typename`
//! discriminant once and resolve to an absent view when the concrete type doesn't match,
//! which is valid GraphQL and never an error.
//!
//! The following shows the minimum done with a decoded operation:
//!
//! ```ignore
//! let ctx = DocumentContext::new();
//! let data = node_from_json(&ctx, &response_body);
//! let hero = operation.decode(&ctx, ctx.alloc(data))?.object("hero")?;
//! let name = hero.string("name")?;
//! ```

mod fragments;
mod path;
mod projection;

pub use fragments::*;
pub use path::*;
pub use projection::*;
