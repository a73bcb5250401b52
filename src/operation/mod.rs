//! # Operation Documents & Variables
//!
//! The `graphql_response::operation` module contains the immutable, generation-time
//! description of one named operation: its source text, the fragments it spreads, its root
//! selection schema, and the variables it accepts. An [`OperationDocument`] is constructed
//! once by generated code and shared across every invocation of that operation.
//!
//! Documents carry a stable [`OperationDocument::persisted_query_id`], the lowercase hex
//! SHA-256 of the full document text. Transports implementing the persisted-query protocol
//! first send the identifier alone and fall back to the full body text on a server cache
//! miss; this crate only supplies the two representations, never the retry.
//!
//! Variables are bound through the tri-state [`Nullable`] wrapper: an `Absent` binding is
//! omitted from the encoded variables object while a `Null` binding is sent as JSON `null`.
//! Servers treat "not provided" and "provided as null" differently, so the distinction must
//! survive encoding, recursively through nested input objects.

mod document;
mod variables;

pub use document::*;
pub use variables::*;
