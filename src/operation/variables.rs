use hashbrown::{hash_map::DefaultHashBuilder, HashMap};

use crate::response::DocumentContext;
use crate::schema::TypeExpr;

/// The three legal states of an optional GraphQL variable or input-object field.
///
/// `Absent` serializes to "key omitted", `Null` to "key present with JSON null". Servers
/// may apply defaults for omitted variables but not for explicit nulls, so conflating the
/// two silently changes request semantics.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Nullable<T> {
    /// The variable is not sent at all.
    Absent,
    /// The variable is sent as an explicit `null`.
    Null,
    /// The variable is sent with a concrete value.
    Value(T),
}

impl<T> Nullable<T> {
    /// Checks whether this binding is omitted entirely.
    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Nullable::Absent)
    }

    /// Checks whether this binding is an explicit `null`.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Nullable::Null)
    }

    /// Returns the concrete value, if one is bound.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Nullable::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Converts from `&Nullable<T>` to `Nullable<&T>`.
    #[inline]
    pub fn as_ref(&self) -> Nullable<&T> {
        match self {
            Nullable::Absent => Nullable::Absent,
            Nullable::Null => Nullable::Null,
            Nullable::Value(value) => Nullable::Value(value),
        }
    }

    /// Maps the bound value, preserving `Absent` and `Null`.
    #[inline]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Nullable<U> {
        match self {
            Nullable::Absent => Nullable::Absent,
            Nullable::Null => Nullable::Null,
            Nullable::Value(value) => Nullable::Value(f(value)),
        }
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    /// Treats `None` as an omitted binding. Callers that mean an explicit `null` construct
    /// [`Nullable::Null`] directly.
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Nullable::Value(value),
            None => Nullable::Absent,
        }
    }
}

/// A concrete value bound to a variable or nested inside one.
///
/// Unlike [`crate::schema::ArgumentValue`] this carries no variable references; it is what
/// the caller actually passes. Input-object fields hold [`Nullable`] values so that the
/// omit/null distinction applies recursively.
#[derive(Debug, PartialEq, Clone)]
pub enum InputValue<'a> {
    Null,
    Boolean(bool),
    Int(i32),
    Float(f64),
    String(&'a str),
    Enum(&'a str),
    List(bumpalo::collections::Vec<'a, InputValue<'a>>),
    Object(bumpalo::collections::Vec<'a, InputField<'a>>),
}

/// A single keyed field of an input-object value.
#[derive(Debug, PartialEq, Clone)]
pub struct InputField<'a> {
    pub name: &'a str,
    pub value: Nullable<InputValue<'a>>,
}

/// Map of tri-state bindings for an operation's declared variables.
pub type VariableBindings<'a> =
    HashMap<&'a str, Nullable<InputValue<'a>>, DefaultHashBuilder, &'a bumpalo::Bump>;

/// The generation-time declaration of one operation variable.
#[derive(Debug, PartialEq, Clone)]
pub struct VariableDescriptor<'a> {
    /// The variable's name, without the `$` prefix it carries in the document text.
    pub name: &'a str,
    /// The declared input type of the variable.
    pub of_type: TypeExpr<'a>,
}

/// The list of variables an operation declares.
///
/// Encoding walks this list, not the caller's bindings, so that undeclared bindings are
/// never sent and absent declared ones are omitted.
#[derive(Debug, PartialEq, Clone)]
pub struct VariableDescriptors<'a> {
    pub children: bumpalo::collections::Vec<'a, VariableDescriptor<'a>>,
}

impl<'a> VariableDescriptors<'a> {
    /// Creates an empty list of variable declarations in the given arena.
    #[inline]
    pub fn default_in(arena: &'a bumpalo::Bump) -> Self {
        VariableDescriptors {
            children: bumpalo::collections::Vec::new_in(arena),
        }
    }

    /// Checks whether the operation declares any variables.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns a `Map` keyed by all variable names mapped to their declarations.
    pub fn as_map(
        &'a self,
        ctx: &'a DocumentContext,
    ) -> HashMap<&str, &'a VariableDescriptor<'a>, DefaultHashBuilder, &'a bumpalo::Bump> {
        let mut map = HashMap::new_in(&ctx.arena);
        for descriptor in self.children.iter() {
            map.insert(descriptor.name, descriptor);
        }
        map
    }
}
