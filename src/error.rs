//! # Error and Result for this crate
//!
//! This crate defines a common [Error] structure that every failing decode operation is
//! surfaced through.

use std::{error, fmt, result};

/// This crate's result type using the [Error] structure.
pub type Result<T> = result::Result<T, Error>;

/// This crate's error structure, carried by every failing decode.
///
/// The error is split into a general message, the kind of shape error that occurred, and the
/// originating field path within the response, e.g. `hero.friends.1.name`. A decode aborts on
/// the first error it encounters, so an [Error] always describes a single field.
///
/// The Error implements both the [`fmt::Display`] and [`fmt::Debug`] traits. It also implements
/// [`error::Error`] so that it can be used with existing patterns for error handling.
#[derive(PartialEq, Eq, Clone)]
pub struct Error {
    pub(crate) message: String,
    pub(crate) path: Option<String>,
    pub(crate) kind: ErrorKind,
}

/// The kinds of shape errors a decode can run into.
///
/// Fragment absence due to a non-matching type condition is never an error; only structural
/// disagreements between the response tree and the generated schema are.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorKind {
    /// A required (non-nullable) field's key is absent from the response object, or the
    /// response sent `null` where the declared type forbids it.
    FieldMissing,
    /// The response node's runtime tag disagrees with the declared type, e.g. an object was
    /// expected but a scalar was found.
    TypeMismatch,
    /// The value is present and scalar-shaped but cannot be coerced to the declared scalar
    /// kind, e.g. a non-numeric string where an `Int` was declared.
    ScalarCoercion,
    /// A selection contains type-conditioned fragments but the backing object carries no
    /// `__typename` discriminant.
    MissingDiscriminant,
    /// A response key was requested that the generated selection set never declared. This is
    /// a caller or generation bug, not a server shape problem.
    UndeclaredField,
}

impl Error {
    /// Create a new Error with only a main message from an input string.
    pub fn new<S: Into<String>>(message: S, kind: ErrorKind) -> Self {
        Self {
            message: message.into(),
            path: None,
            kind,
        }
    }

    /// Create a new Error carrying the originating field path within the response.
    pub fn with_path<S: Into<String>>(message: S, path: String, kind: ErrorKind) -> Self {
        Self {
            message: message.into(),
            path: Some(path),
            kind,
        }
    }

    /// Returns the message of the current error. The field path is discarded.
    pub fn message(&self) -> &str {
        self.message.as_ref()
    }

    /// Returns the originating field path of the current error, if known.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Returns the kind of shape error that occurred.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Formats this error, with the option to include the field path as well, which will
    /// cause the string to be multi-line.
    pub fn print(&self, include_path: bool) -> String {
        let formatted = format!("Decode Error: {}", self.message);
        match self.path {
            Some(ref path) if include_path => format!("{formatted}\n  at {path}"),
            _ => formatted,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.print(true))
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n{}\n", self)
    }
}

impl error::Error for Error {}
