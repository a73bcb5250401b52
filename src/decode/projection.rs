use std::fmt;

use crate::error::{Error, ErrorKind, Result};
use crate::response::{DocumentContext, Node, ObjectNode};
use crate::schema::{FieldDescriptor, ScalarKind, SelectionSetSchema, TypeExpr};

use super::path::FieldPath;

/// A typed view over one object node of a response tree.
///
/// A selection set borrows its backing node and the generated schema that describes it; it
/// never mutates either and copies nothing, so it's a `Copy` handle that is created per
/// decode, used for field access, and discarded. Every accessor performs its lookup and
/// coercion at call time, and repeated reads of the same field yield the same result since
/// the engine is side-effect-free.
#[derive(Clone, Copy)]
pub struct SelectionSet<'a> {
    pub(crate) ctx: &'a DocumentContext,
    pub(crate) node: &'a ObjectNode<'a>,
    pub(crate) schema: &'a SelectionSetSchema<'a>,
    pub(crate) path: Option<&'a FieldPath<'a>>,
}

/// A field value projected out of the tree against its declared type.
///
/// This is the untyped-but-checked middle layer the typed accessors are sugar over; callers
/// that decode lists of scalars or custom scalar positions work with it directly.
#[derive(Debug, Clone)]
pub enum Projected<'a> {
    /// A nullable field that was `null` or absent.
    None,
    Scalar(ScalarValue<'a>),
    Object(SelectionSet<'a>),
    List(bumpalo::collections::Vec<'a, Projected<'a>>),
}

/// A scalar coerced to its declared kind.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ScalarValue<'a> {
    Id(&'a str),
    String(&'a str),
    Int(i32),
    Float(f64),
    Boolean(bool),
    Enum(&'a str),
    /// A custom scalar, surfaced as the raw response node.
    Custom(&'a Node<'a>),
}

impl<'a> Projected<'a> {
    /// Returns a short description of this projection, as used in error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            Projected::None => "null",
            Projected::Scalar(ScalarValue::Id(_)) => "an ID",
            Projected::Scalar(ScalarValue::String(_)) => "a String",
            Projected::Scalar(ScalarValue::Int(_)) => "an Int",
            Projected::Scalar(ScalarValue::Float(_)) => "a Float",
            Projected::Scalar(ScalarValue::Boolean(_)) => "a Boolean",
            Projected::Scalar(ScalarValue::Enum(_)) => "an enum value",
            Projected::Scalar(ScalarValue::Custom(_)) => "a custom scalar",
            Projected::Object(_) => "an object",
            Projected::List(_) => "a list",
        }
    }
}

impl<'a> SelectionSet<'a> {
    pub(crate) fn new(
        ctx: &'a DocumentContext,
        node: &'a ObjectNode<'a>,
        schema: &'a SelectionSetSchema<'a>,
        path: Option<&'a FieldPath<'a>>,
    ) -> Self {
        SelectionSet {
            ctx,
            node,
            schema,
            path,
        }
    }

    /// Wraps the root object of a response tree in a typed view.
    ///
    /// [`crate::operation::OperationDocument::decode`] is the usual entry point and calls
    /// this with the operation's root schema.
    pub fn root(
        ctx: &'a DocumentContext,
        node: &'a ObjectNode<'a>,
        schema: &'a SelectionSetSchema<'a>,
    ) -> Self {
        SelectionSet::new(ctx, node, schema, None)
    }

    /// Returns the backing response node this view borrows.
    #[inline]
    pub fn response_node(&self) -> &'a ObjectNode<'a> {
        self.node
    }

    /// Returns the generated schema this view decodes against.
    #[inline]
    pub fn schema(&self) -> &'a SelectionSetSchema<'a> {
        self.schema
    }

    /// Renders the path from the response root to this selection set.
    pub fn path(&self) -> String {
        match self.path {
            Some(path) => path.to_string(),
            None => String::new(),
        }
    }

    fn descriptor(&self, response_key: &str) -> Result<&'a FieldDescriptor<'a>> {
        match self.schema.field(response_key) {
            Some(field) => Ok(field),
            None => {
                let path =
                    FieldPath::key_in(self.ctx, self.path, self.ctx.alloc_str(response_key));
                Err(Error::with_path(
                    format!("Field {response_key} is not part of this selection set"),
                    path.to_string(),
                    ErrorKind::UndeclaredField,
                ))
            }
        }
    }

    /// Projects one declared field out of the backing node.
    ///
    /// The lookup happens when this is called, not when the selection set is constructed,
    /// and fails with the first structural disagreement between the response and the
    /// declared type.
    pub fn field(&self, response_key: &str) -> Result<Projected<'a>> {
        let field = self.descriptor(response_key)?;
        let path = FieldPath::key_in(self.ctx, self.path, field.response_key());
        match self.node.get(field.response_key()) {
            Some(node) => decode_node(self.ctx, node, &field.of_type, path),
            None => decode_absent(&field.of_type, path),
        }
    }

    fn accessor_mismatch(&self, response_key: &str, expected: &str, found: &Projected<'a>) -> Error {
        let path = FieldPath::key_in(self.ctx, self.path, self.ctx.alloc_str(response_key));
        Error::with_path(
            format!(
                "Field {response_key} decoded to {} but the accessor expected {expected}",
                found.describe()
            ),
            path.to_string(),
            ErrorKind::TypeMismatch,
        )
    }

    /// Reads a required `String` field.
    pub fn string(&self, response_key: &str) -> Result<&'a str> {
        match self.field(response_key)? {
            Projected::Scalar(ScalarValue::String(value)) => Ok(value),
            other => Err(self.accessor_mismatch(response_key, "a String", &other)),
        }
    }

    /// Reads a nullable `String` field.
    pub fn optional_string(&self, response_key: &str) -> Result<Option<&'a str>> {
        match self.field(response_key)? {
            Projected::None => Ok(None),
            Projected::Scalar(ScalarValue::String(value)) => Ok(Some(value)),
            other => Err(self.accessor_mismatch(response_key, "a String", &other)),
        }
    }

    /// Reads a required `ID` field.
    pub fn id(&self, response_key: &str) -> Result<&'a str> {
        match self.field(response_key)? {
            Projected::Scalar(ScalarValue::Id(value)) => Ok(value),
            other => Err(self.accessor_mismatch(response_key, "an ID", &other)),
        }
    }

    /// Reads a nullable `ID` field.
    pub fn optional_id(&self, response_key: &str) -> Result<Option<&'a str>> {
        match self.field(response_key)? {
            Projected::None => Ok(None),
            Projected::Scalar(ScalarValue::Id(value)) => Ok(Some(value)),
            other => Err(self.accessor_mismatch(response_key, "an ID", &other)),
        }
    }

    /// Reads a required `Int` field.
    pub fn int(&self, response_key: &str) -> Result<i32> {
        match self.field(response_key)? {
            Projected::Scalar(ScalarValue::Int(value)) => Ok(value),
            other => Err(self.accessor_mismatch(response_key, "an Int", &other)),
        }
    }

    /// Reads a nullable `Int` field.
    pub fn optional_int(&self, response_key: &str) -> Result<Option<i32>> {
        match self.field(response_key)? {
            Projected::None => Ok(None),
            Projected::Scalar(ScalarValue::Int(value)) => Ok(Some(value)),
            other => Err(self.accessor_mismatch(response_key, "an Int", &other)),
        }
    }

    /// Reads a required `Float` field.
    pub fn float(&self, response_key: &str) -> Result<f64> {
        match self.field(response_key)? {
            Projected::Scalar(ScalarValue::Float(value)) => Ok(value),
            other => Err(self.accessor_mismatch(response_key, "a Float", &other)),
        }
    }

    /// Reads a nullable `Float` field.
    pub fn optional_float(&self, response_key: &str) -> Result<Option<f64>> {
        match self.field(response_key)? {
            Projected::None => Ok(None),
            Projected::Scalar(ScalarValue::Float(value)) => Ok(Some(value)),
            other => Err(self.accessor_mismatch(response_key, "a Float", &other)),
        }
    }

    /// Reads a required `Boolean` field.
    pub fn boolean(&self, response_key: &str) -> Result<bool> {
        match self.field(response_key)? {
            Projected::Scalar(ScalarValue::Boolean(value)) => Ok(value),
            other => Err(self.accessor_mismatch(response_key, "a Boolean", &other)),
        }
    }

    /// Reads a nullable `Boolean` field.
    pub fn optional_boolean(&self, response_key: &str) -> Result<Option<bool>> {
        match self.field(response_key)? {
            Projected::None => Ok(None),
            Projected::Scalar(ScalarValue::Boolean(value)) => Ok(Some(value)),
            other => Err(self.accessor_mismatch(response_key, "a Boolean", &other)),
        }
    }

    /// Reads a required enum field as its raw response string.
    ///
    /// Generated code matches the returned slice against its generated enum type.
    pub fn enum_value(&self, response_key: &str) -> Result<&'a str> {
        match self.field(response_key)? {
            Projected::Scalar(ScalarValue::Enum(value)) => Ok(value),
            other => Err(self.accessor_mismatch(response_key, "an enum value", &other)),
        }
    }

    /// Reads a nullable enum field as its raw response string.
    pub fn optional_enum_value(&self, response_key: &str) -> Result<Option<&'a str>> {
        match self.field(response_key)? {
            Projected::None => Ok(None),
            Projected::Scalar(ScalarValue::Enum(value)) => Ok(Some(value)),
            other => Err(self.accessor_mismatch(response_key, "an enum value", &other)),
        }
    }

    /// Reads a required custom scalar field as its raw response node.
    pub fn custom(&self, response_key: &str) -> Result<&'a Node<'a>> {
        match self.field(response_key)? {
            Projected::Scalar(ScalarValue::Custom(node)) => Ok(node),
            other => Err(self.accessor_mismatch(response_key, "a custom scalar", &other)),
        }
    }

    /// Reads a required object field as a child selection set over the sub-node.
    pub fn object(&self, response_key: &str) -> Result<SelectionSet<'a>> {
        match self.field(response_key)? {
            Projected::Object(selection) => Ok(selection),
            other => Err(self.accessor_mismatch(response_key, "an object", &other)),
        }
    }

    /// Reads a nullable object field as a child selection set over the sub-node.
    pub fn optional_object(&self, response_key: &str) -> Result<Option<SelectionSet<'a>>> {
        match self.field(response_key)? {
            Projected::None => Ok(None),
            Projected::Object(selection) => Ok(Some(selection)),
            other => Err(self.accessor_mismatch(response_key, "an object", &other)),
        }
    }

    /// Reads a required list field.
    ///
    /// Every element is decoded against the declared element type before the list is
    /// returned; a failure on any element fails the whole field, since a partially decoded
    /// list is not meaningful to callers.
    pub fn list(&self, response_key: &str) -> Result<bumpalo::collections::Vec<'a, Projected<'a>>> {
        match self.field(response_key)? {
            Projected::List(list) => Ok(list),
            other => Err(self.accessor_mismatch(response_key, "a list", &other)),
        }
    }

    /// Reads a nullable list field.
    pub fn optional_list(
        &self,
        response_key: &str,
    ) -> Result<Option<bumpalo::collections::Vec<'a, Projected<'a>>>> {
        match self.field(response_key)? {
            Projected::None => Ok(None),
            Projected::List(list) => Ok(Some(list)),
            other => Err(self.accessor_mismatch(response_key, "a list", &other)),
        }
    }

    /// Reads a required list field whose elements are required objects.
    pub fn objects(
        &self,
        response_key: &str,
    ) -> Result<bumpalo::collections::Vec<'a, SelectionSet<'a>>> {
        let list = self.list(response_key)?;
        let mut children = bumpalo::collections::Vec::with_capacity_in(list.len(), &self.ctx.arena);
        for projected in list {
            match projected {
                Projected::Object(selection) => children.push(selection),
                other => {
                    return Err(self.accessor_mismatch(response_key, "a list of objects", &other))
                }
            }
        }
        Ok(children)
    }
}

impl fmt::Debug for SelectionSet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionSet")
            .field("path", &self.path())
            .field("node", &self.node)
            .finish()
    }
}

fn decode_absent<'a>(of_type: &TypeExpr<'a>, path: &'a FieldPath<'a>) -> Result<Projected<'a>> {
    if of_type.is_nullable() {
        Ok(Projected::None)
    } else {
        Err(Error::with_path(
            "Required field is missing from the response object",
            path.to_string(),
            ErrorKind::FieldMissing,
        ))
    }
}

fn decode_node<'a>(
    ctx: &'a DocumentContext,
    node: &'a Node<'a>,
    of_type: &'a TypeExpr<'a>,
    path: &'a FieldPath<'a>,
) -> Result<Projected<'a>> {
    match *of_type {
        TypeExpr::Nullable(inner) => {
            if node.is_null() {
                Ok(Projected::None)
            } else {
                decode_node(ctx, node, inner, path)
            }
        }
        // Null for a required position is treated like a missing key rather than a shape
        // disagreement; only `Nullable` makes absence legal.
        _ if node.is_null() => Err(Error::with_path(
            "Received null for required field",
            path.to_string(),
            ErrorKind::FieldMissing,
        )),
        TypeExpr::Scalar(kind) => coerce_scalar(ctx, node, kind, path).map(Projected::Scalar),
        TypeExpr::Object(schema) => match node.object() {
            Some(object) => Ok(Projected::Object(SelectionSet::new(
                ctx,
                object,
                schema,
                Some(path),
            ))),
            None => Err(Error::with_path(
                format!("Expected an object but found {}", node.tag()),
                path.to_string(),
                ErrorKind::TypeMismatch,
            )),
        },
        TypeExpr::List(inner) => match node.list() {
            Some(list) => {
                let mut children =
                    bumpalo::collections::Vec::with_capacity_in(list.len(), &ctx.arena);
                for (index, element) in list.iter().enumerate() {
                    let element_path = FieldPath::index_in(ctx, Some(path), index);
                    children.push(decode_node(ctx, element, inner, element_path)?);
                }
                Ok(Projected::List(children))
            }
            None => Err(Error::with_path(
                format!("Expected a list but found {}", node.tag()),
                path.to_string(),
                ErrorKind::TypeMismatch,
            )),
        },
    }
}

fn coercion_failure<S: Into<String>>(message: S, path: &FieldPath<'_>) -> Error {
    Error::with_path(message, path.to_string(), ErrorKind::ScalarCoercion)
}

fn coerce_scalar<'a>(
    ctx: &'a DocumentContext,
    node: &'a Node<'a>,
    kind: ScalarKind<'a>,
    path: &'a FieldPath<'a>,
) -> Result<ScalarValue<'a>> {
    match (kind, node) {
        (ScalarKind::Boolean, Node::Boolean(value)) => Ok(ScalarValue::Boolean(*value)),

        (ScalarKind::Int, Node::Int(value)) => i32::try_from(*value)
            .map(ScalarValue::Int)
            .map_err(|_| coercion_failure(format!("Int value {value} is out of range"), path)),
        (ScalarKind::Int, Node::Float(_)) => {
            Err(coercion_failure("Received Float for Int type", path))
        }
        (ScalarKind::Int, Node::String(str)) => lexical_core::parse::<i32>(str.as_bytes())
            .map(ScalarValue::Int)
            .map_err(|_| {
                coercion_failure(format!("Received non-numeric String {str:?} for Int type"), path)
            }),

        (ScalarKind::Float, Node::Float(value)) => Ok(ScalarValue::Float(*value)),
        (ScalarKind::Float, Node::Int(value)) => Ok(ScalarValue::Float(*value as f64)),
        (ScalarKind::Float, Node::String(str)) => lexical_core::parse::<f64>(str.as_bytes())
            .map(ScalarValue::Float)
            .map_err(|_| {
                coercion_failure(
                    format!("Received non-numeric String {str:?} for Float type"),
                    path,
                )
            }),

        (ScalarKind::String, Node::String(str)) => Ok(ScalarValue::String(*str)),

        (ScalarKind::Id, Node::String(str)) => Ok(ScalarValue::Id(*str)),
        (ScalarKind::Id, Node::Int(value)) => {
            Ok(ScalarValue::Id(ctx.alloc_string(value.to_string())))
        }

        (ScalarKind::Enum, Node::String(str)) => Ok(ScalarValue::Enum(*str)),

        (ScalarKind::Custom(_), node) => Ok(ScalarValue::Custom(node)),

        (kind, node) => Err(Error::with_path(
            format!("Expected {} but found {}", kind.name(), node.tag()),
            path.to_string(),
            ErrorKind::TypeMismatch,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldDescriptor, Selection};
    use bumpalo::collections::Vec;

    fn hero_schema<'a>(ctx: &'a DocumentContext) -> &'a SelectionSetSchema<'a> {
        let hero_fields = Vec::from_iter_in(
            [
                Selection::Field(FieldDescriptor::new(
                    ctx,
                    "__typename",
                    TypeExpr::Scalar(ScalarKind::String),
                )),
                Selection::Field(FieldDescriptor::new(
                    ctx,
                    "name",
                    TypeExpr::Scalar(ScalarKind::String),
                )),
                Selection::Field(FieldDescriptor::new(
                    ctx,
                    "primaryFunction",
                    TypeExpr::Scalar(ScalarKind::String).into_nullable(ctx),
                )),
                Selection::Field(FieldDescriptor::new(
                    ctx,
                    "scores",
                    TypeExpr::Scalar(ScalarKind::Int)
                        .into_list(ctx)
                        .into_nullable(ctx),
                )),
            ],
            &ctx.arena,
        );
        let hero = ctx.alloc(SelectionSetSchema::new_in(ctx, hero_fields));
        let root_fields = Vec::from_iter_in(
            [Selection::Field(FieldDescriptor::new(
                ctx,
                "hero",
                TypeExpr::Object(hero),
            ))],
            &ctx.arena,
        );
        ctx.alloc(SelectionSetSchema::new_in(ctx, root_fields))
    }

    fn hero_data<'a>(ctx: &'a DocumentContext) -> &'a ObjectNode<'a> {
        let mut hero = ObjectNode::new_in(ctx);
        hero.insert("__typename", Node::String("Droid"));
        hero.insert("name", Node::String("R2-D2"));
        hero.insert("primaryFunction", Node::String("Astromech"));
        let mut data = ObjectNode::new_in(ctx);
        data.insert("hero", Node::Object(hero));
        ctx.alloc(data)
    }

    #[test]
    fn projects_scalar_fields() {
        let ctx = DocumentContext::new();
        let root = SelectionSet::root(&ctx, hero_data(&ctx), hero_schema(&ctx));
        let hero = root.object("hero").unwrap();
        assert_eq!(hero.string("name").unwrap(), "R2-D2");
        assert_eq!(
            hero.optional_string("primaryFunction").unwrap(),
            Some("Astromech")
        );
        assert!(hero.optional_list("scores").unwrap().is_none());
    }

    #[test]
    fn missing_required_field_carries_path() {
        let ctx = DocumentContext::new();
        let mut hero = ObjectNode::new_in(&ctx);
        hero.insert("__typename", Node::String("Droid"));
        let mut data = ObjectNode::new_in(&ctx);
        data.insert("hero", Node::Object(hero));

        let root = SelectionSet::root(&ctx, ctx.alloc(data), hero_schema(&ctx));
        let error = root.object("hero").unwrap().string("name").err().unwrap();
        assert_eq!(error.kind(), ErrorKind::FieldMissing);
        assert_eq!(error.path(), Some("hero.name"));
    }

    #[test]
    fn null_for_required_field_is_missing() {
        let ctx = DocumentContext::new();
        let mut hero = ObjectNode::new_in(&ctx);
        hero.insert("name", Node::Null);
        let mut data = ObjectNode::new_in(&ctx);
        data.insert("hero", Node::Object(hero));

        let root = SelectionSet::root(&ctx, ctx.alloc(data), hero_schema(&ctx));
        let error = root.object("hero").unwrap().string("name").err().unwrap();
        assert_eq!(error.kind(), ErrorKind::FieldMissing);
        assert_eq!(error.path(), Some("hero.name"));
    }

    #[test]
    fn nullable_field_accepts_null_and_absence() {
        let ctx = DocumentContext::new();
        let mut hero = ObjectNode::new_in(&ctx);
        hero.insert("name", Node::String("Luke"));
        hero.insert("primaryFunction", Node::Null);
        let mut data = ObjectNode::new_in(&ctx);
        data.insert("hero", Node::Object(hero));

        let root = SelectionSet::root(&ctx, ctx.alloc(data), hero_schema(&ctx));
        let hero = root.object("hero").unwrap();
        assert_eq!(hero.optional_string("primaryFunction").unwrap(), None);
        assert!(hero.optional_list("scores").unwrap().is_none());
    }

    #[test]
    fn extra_response_keys_are_ignored() {
        let ctx = DocumentContext::new();
        let mut hero = ObjectNode::new_in(&ctx);
        hero.insert("name", Node::String("Leia"));
        hero.insert("homePlanet", Node::String("Alderaan"));
        let mut data = ObjectNode::new_in(&ctx);
        data.insert("hero", Node::Object(hero));

        let root = SelectionSet::root(&ctx, ctx.alloc(data), hero_schema(&ctx));
        assert_eq!(root.object("hero").unwrap().string("name").unwrap(), "Leia");
    }

    #[test]
    fn undeclared_field_access_is_an_error() {
        let ctx = DocumentContext::new();
        let root = SelectionSet::root(&ctx, hero_data(&ctx), hero_schema(&ctx));
        let error = root.object("hero").unwrap().string("homePlanet").err().unwrap();
        assert_eq!(error.kind(), ErrorKind::UndeclaredField);
        assert_eq!(error.path(), Some("hero.homePlanet"));
    }

    #[test]
    fn list_decode_is_all_or_nothing() {
        let ctx = DocumentContext::new();
        let scores = Vec::from_iter_in(
            [Node::Int(1), Node::String("two"), Node::Int(3)],
            &ctx.arena,
        );
        let mut hero = ObjectNode::new_in(&ctx);
        hero.insert("name", Node::String("R2-D2"));
        hero.insert("scores", Node::List(scores));
        let mut data = ObjectNode::new_in(&ctx);
        data.insert("hero", Node::Object(hero));

        let root = SelectionSet::root(&ctx, ctx.alloc(data), hero_schema(&ctx));
        let error = root.object("hero").unwrap().list("scores").err().unwrap();
        assert_eq!(error.kind(), ErrorKind::ScalarCoercion);
        assert_eq!(error.path(), Some("hero.scores.1"));
    }

    #[test]
    fn repeated_decodes_are_idempotent() {
        let ctx = DocumentContext::new();
        let data = hero_data(&ctx);
        let schema = hero_schema(&ctx);

        let first = SelectionSet::root(&ctx, data, schema).object("hero").unwrap();
        let second = SelectionSet::root(&ctx, data, schema).object("hero").unwrap();
        assert_eq!(first.string("name").unwrap(), second.string("name").unwrap());
        assert_eq!(
            first.optional_string("primaryFunction").unwrap(),
            second.optional_string("primaryFunction").unwrap()
        );
        // Both views borrow the same subtree rather than copying it
        assert!(std::ptr::eq(first.response_node(), second.response_node()));
    }

    #[test]
    fn scalar_coercion_edges() {
        let ctx = DocumentContext::new();
        let fields = Vec::from_iter_in(
            [
                Selection::Field(FieldDescriptor::new(
                    &ctx,
                    "id",
                    TypeExpr::Scalar(ScalarKind::Id),
                )),
                Selection::Field(FieldDescriptor::new(
                    &ctx,
                    "count",
                    TypeExpr::Scalar(ScalarKind::Int),
                )),
                Selection::Field(FieldDescriptor::new(
                    &ctx,
                    "height",
                    TypeExpr::Scalar(ScalarKind::Float),
                )),
            ],
            &ctx.arena,
        );
        let schema = ctx.alloc(SelectionSetSchema::new_in(&ctx, fields));

        let mut data = ObjectNode::new_in(&ctx);
        data.insert("id", Node::Int(2001));
        data.insert("count", Node::String("42"));
        data.insert("height", Node::Int(2));
        let selection = SelectionSet::root(&ctx, ctx.alloc(data), schema);

        assert_eq!(selection.id("id").unwrap(), "2001");
        assert_eq!(selection.int("count").unwrap(), 42);
        assert_eq!(selection.float("height").unwrap(), 2.0);
    }

    #[test]
    fn scalar_type_mismatch() {
        let ctx = DocumentContext::new();
        let fields = Vec::from_iter_in(
            [Selection::Field(FieldDescriptor::new(
                &ctx,
                "count",
                TypeExpr::Scalar(ScalarKind::Int),
            ))],
            &ctx.arena,
        );
        let schema = ctx.alloc(SelectionSetSchema::new_in(&ctx, fields));

        let mut data = ObjectNode::new_in(&ctx);
        data.insert("count", Node::Boolean(true));
        let selection = SelectionSet::root(&ctx, ctx.alloc(data), schema);

        let error = selection.int("count").err().unwrap();
        assert_eq!(error.kind(), ErrorKind::TypeMismatch);
        assert_eq!(error.path(), Some("count"));
    }
}
