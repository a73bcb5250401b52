use hashbrown::{hash_map::DefaultHashBuilder, HashMap};

/// A context for generated documents and decoded responses which holds an arena allocator.
///
/// For the duration of building a schema, wrapping a response tree, and projecting typed
/// values out of it, it's performant and convenient to allocate memory in one chunk. This
/// context represents the lifetime of a tree and its derivatives.
///
/// Generated operation documents are typically built once into a long-lived context and
/// shared across invocations, while each decoded response gets its own short-lived context
/// that is dropped wholesale once the caller is done with the typed result. It's inadvisable
/// to reuse a response's context across multiple incoming responses.
pub struct DocumentContext {
    /// An arena allocator that holds the memory allocated for this context's lifetime
    pub arena: bumpalo::Bump,
}

impl DocumentContext {
    /// Create a new context with a preallocated arena.
    pub fn new() -> Self {
        let arena = bumpalo::Bump::new();
        DocumentContext { arena }
    }

    /// Put the value of `item` onto the arena and return a reference to it.
    #[inline]
    pub fn alloc<T>(&self, item: T) -> &T {
        self.arena.alloc(item)
    }

    /// Allocate an `&str` slice onto the arena and return a reference to it.
    ///
    /// This is useful when the original slice has an undefined lifetime.
    /// This is typically unnecessary for static slices (`&'static str`) whose lifetimes are as
    /// long as the running program and don't need to be allocated dynamically.
    #[inline]
    pub fn alloc_str(&self, str: &str) -> &str {
        self.arena.alloc_str(str)
    }

    /// Puts a `String` onto the arena and returns a reference to it to tie the `String`'s
    /// lifetime to this context without reallocating or copying it.
    #[inline]
    pub fn alloc_string(&self, str: String) -> &str {
        self.arena.alloc(str)
    }
}

impl Default for DocumentContext {
    fn default() -> Self {
        Self::new()
    }
}

/// A node of the untyped response value tree.
///
/// This is the storage substrate every decode reads from. Node identity is structural rather
/// than referential; multiple selection sets may share read-only access to the same subtree
/// without copying it.
#[derive(Debug, PartialEq, Clone)]
pub enum Node<'a> {
    /// Representing JSON-like `null` values
    Null,
    Boolean(bool),
    Int(i64),
    Float(f64),
    String(&'a str),
    List(bumpalo::collections::Vec<'a, Node<'a>>),
    Object(ObjectNode<'a>),
}

impl<'a> Node<'a> {
    /// Checks whether this node is a JSON `null`.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    /// Helper method to return the [`ObjectNode`] if the node is an object.
    #[inline]
    pub fn object(&self) -> Option<&ObjectNode<'a>> {
        match self {
            Node::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Helper method to return the list of child nodes if the node is a list.
    #[inline]
    pub fn list(&self) -> Option<&bumpalo::collections::Vec<'a, Node<'a>>> {
        match self {
            Node::List(list) => Some(list),
            _ => None,
        }
    }

    /// Helper method to return the string slice if the node is a string.
    #[inline]
    pub fn string(&self) -> Option<&'a str> {
        match self {
            Node::String(str) => Some(*str),
            _ => None,
        }
    }

    /// Returns the name of this node's runtime tag, as used in error messages.
    pub fn tag(&self) -> &'static str {
        match self {
            Node::Null => "null",
            Node::Boolean(_) => "Boolean",
            Node::Int(_) => "Int",
            Node::Float(_) => "Float",
            Node::String(_) => "String",
            Node::List(_) => "List",
            Node::Object(_) => "Object",
        }
    }
}

/// A single keyed entry of an [`ObjectNode`].
#[derive(Debug, PartialEq, Clone)]
pub struct ObjectEntry<'a> {
    pub name: &'a str,
    pub value: Node<'a>,
}

/// An order-preserving, key-unique mapping of response object fields.
///
/// Entries iterate in insertion order, as they appeared in the response body, while lookups
/// by key go through a hash index and stay constant-time. Inserting a key that is already
/// present replaces the earlier value in place, since JSON object keys are unique.
#[derive(Debug, PartialEq, Clone)]
pub struct ObjectNode<'a> {
    fields: bumpalo::collections::Vec<'a, ObjectEntry<'a>>,
    index: HashMap<&'a str, usize, DefaultHashBuilder, &'a bumpalo::Bump>,
}

impl<'a> ObjectNode<'a> {
    /// Creates a new empty object node in the given context.
    pub fn new_in(ctx: &'a DocumentContext) -> Self {
        ObjectNode {
            fields: bumpalo::collections::Vec::new_in(&ctx.arena),
            index: HashMap::new_in(&ctx.arena),
        }
    }

    /// Inserts a field, replacing the value in place when the key is already present.
    pub fn insert(&mut self, name: &'a str, value: Node<'a>) {
        if let Some(&at) = self.index.get(name) {
            self.fields[at].value = value;
        } else {
            self.index.insert(name, self.fields.len());
            self.fields.push(ObjectEntry { name, value });
        }
    }

    /// Looks up a field's value by key.
    ///
    /// Keys present in the response but never selected by a schema are simply never looked
    /// up; their presence is not an error.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Node<'a>> {
        self.index.get(name).map(|&at| &self.fields[at].value)
    }

    /// Checks whether a field with the given key is present.
    #[inline]
    pub fn contains_key(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns the number of fields in this object.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Checks whether this object contains any fields.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates the object's entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ObjectEntry<'a>> {
        self.fields.iter()
    }
}
