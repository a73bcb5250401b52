//! # Response Value Tree
//!
//! The `graphql_response::response` module contains the untyped value tree that backs every
//! decode. A tree is what the transport layer hands over after deserializing a response body:
//! nulls, scalars, lists, and order-preserving objects with unique keys.
//!
//! Its three main parts are:
//! - [`DocumentContext`], a context containing an arena that defines the lifetime of a tree
//!   and everything projected out of it
//! - [`Node`], the tagged union of JSON-like values
//! - [`ObjectNode`], an insertion-ordered, key-unique mapping with constant-time lookup
//!
//! Trees are read-only once built. Any number of selection sets and fragment views may borrow
//! the same subtree concurrently; none of them may mutate it.

mod values;

pub use values::*;
