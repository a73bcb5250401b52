use std::fmt;

use crate::response::DocumentContext;

/// One segment of a field path: an object key or a list index.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PathSegment<'a> {
    Key(&'a str),
    Index(usize),
}

/// The path from the response root to one decoded field, e.g. `hero.friends.1.name`.
///
/// Paths are parent-linked and arena-allocated, so extending a path while descending into a
/// nested selection is a single allocation and never copies the prefix. They only get
/// rendered to a string when an error is raised.
#[derive(Debug, Clone, Copy)]
pub struct FieldPath<'a> {
    pub(crate) parent: Option<&'a FieldPath<'a>>,
    pub(crate) segment: PathSegment<'a>,
}

impl<'a> FieldPath<'a> {
    /// Extends `parent` with an object key segment.
    pub(crate) fn key_in(
        ctx: &'a DocumentContext,
        parent: Option<&'a FieldPath<'a>>,
        key: &'a str,
    ) -> &'a FieldPath<'a> {
        ctx.alloc(FieldPath {
            parent,
            segment: PathSegment::Key(key),
        })
    }

    /// Extends `parent` with a list index segment.
    pub(crate) fn index_in(
        ctx: &'a DocumentContext,
        parent: Option<&'a FieldPath<'a>>,
        index: usize,
    ) -> &'a FieldPath<'a> {
        ctx.alloc(FieldPath {
            parent,
            segment: PathSegment::Index(index),
        })
    }
}

impl fmt::Display for FieldPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut segments = Vec::new();
        let mut current = Some(self);
        while let Some(path) = current {
            segments.push(path.segment);
            current = path.parent;
        }
        for (position, segment) in segments.iter().rev().enumerate() {
            if position > 0 {
                write!(f, ".")?;
            }
            match segment {
                PathSegment::Key(key) => write!(f, "{key}")?,
                PathSegment::Index(index) => write!(f, "{index}")?,
            }
        }
        Ok(())
    }
}
