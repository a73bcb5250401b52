use hashbrown::{hash_map::DefaultHashBuilder, HashMap};

use crate::operation::FragmentDocument;
use crate::response::DocumentContext;

/// The kind of scalar a field was declared with at generation time.
///
/// `Id` and `Enum` both surface as string slices but keep their own kinds, since `Id` accepts
/// integer identifiers from lenient servers and enum values are matched against generated
/// enum types by the calling code. Scalars the schema defines itself are carried as `Custom`
/// with their schema type name and surface as raw response nodes.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ScalarKind<'a> {
    Id,
    String,
    Int,
    Float,
    Boolean,
    Enum,
    Custom(&'a str),
}

impl<'a> ScalarKind<'a> {
    /// Returns the scalar kind's name, as used in error messages.
    pub fn name(&self) -> &'a str {
        match self {
            ScalarKind::Id => "ID",
            ScalarKind::String => "String",
            ScalarKind::Int => "Int",
            ScalarKind::Float => "Float",
            ScalarKind::Boolean => "Boolean",
            ScalarKind::Enum => "Enum",
            ScalarKind::Custom(name) => name,
        }
    }
}

/// The declared type of a selected field.
///
/// A recursive composition of scalar kinds, nested object schemas, lists, and nullable
/// wrappers. GraphQL types are non-nullable here by default; the generator wraps a type in
/// [`TypeExpr::Nullable`] wherever the schema allows `null`, which is the inverse of the
/// query language's `!` notation and saves the decode engine a double negation.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum TypeExpr<'a> {
    /// A scalar leaf of the declared type tree.
    Scalar(ScalarKind<'a>),
    /// An object-typed field decoded through a nested selection set.
    Object(&'a SelectionSetSchema<'a>),
    /// A list node wrapper, which indicates the response will carry a list of the contained
    /// type in this position.
    List(&'a TypeExpr<'a>),
    /// A nullable node wrapper, which indicates the response may carry `null` or omit the
    /// key entirely in this position.
    Nullable(&'a TypeExpr<'a>),
}

impl<'a> TypeExpr<'a> {
    /// Wraps this type in a list, indicating that the response carries a list of the current
    /// type instead.
    #[inline]
    pub fn into_list(self, ctx: &'a DocumentContext) -> TypeExpr<'a> {
        TypeExpr::List(ctx.alloc(self))
    }

    /// Wraps this type in a nullable marker, indicating that the response may carry `null`
    /// in place of the current type.
    #[inline]
    pub fn into_nullable(self, ctx: &'a DocumentContext) -> TypeExpr<'a> {
        TypeExpr::Nullable(ctx.alloc(self))
    }

    /// Checks whether `null` or an absent key is legal for this type.
    #[inline]
    pub fn is_nullable(&self) -> bool {
        matches!(self, TypeExpr::Nullable(_))
    }
}

/// A literal or variable-referencing input value inside a generated document.
///
/// Fields accept these as arguments. A `Variable` is resolved against the caller's bindings
/// when a request payload is built; everything else is a literal baked into the document at
/// generation time.
#[derive(Debug, PartialEq, Clone)]
pub enum ArgumentValue<'a> {
    Variable(&'a str),
    String(&'a str),
    Int(i32),
    Float(f64),
    Boolean(bool),
    Enum(&'a str),
    List(bumpalo::collections::Vec<'a, ArgumentValue<'a>>),
    Object(bumpalo::collections::Vec<'a, ArgumentField<'a>>),
    Null,
}

/// A single keyed field of an input-object argument literal.
#[derive(Debug, PartialEq, Clone)]
pub struct ArgumentField<'a> {
    pub name: &'a str,
    pub value: ArgumentValue<'a>,
}

/// An argument, which carries a name and a literal or variable-referencing value.
#[derive(Debug, PartialEq, Clone)]
pub struct Argument<'a> {
    pub name: &'a str,
    pub value: ArgumentValue<'a>,
}

/// A list of arguments passed to a selected field.
#[derive(Debug, PartialEq, Clone)]
pub struct Arguments<'a> {
    pub children: bumpalo::collections::Vec<'a, Argument<'a>>,
}

impl<'a> Arguments<'a> {
    /// Creates an empty list of arguments in the given arena.
    #[inline]
    pub fn default_in(arena: &'a bumpalo::Bump) -> Self {
        Arguments {
            children: bumpalo::collections::Vec::new_in(arena),
        }
    }

    /// Checks whether this list of arguments contains any values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns a `Map` keyed by all arguments' names mapped to their values.
    pub fn as_map(
        &'a self,
        ctx: &'a DocumentContext,
    ) -> HashMap<&str, &ArgumentValue<'a>, DefaultHashBuilder, &'a bumpalo::Bump> {
        let mut map = HashMap::new_in(&ctx.arena);
        for argument in self.children.iter() {
            map.insert(argument.name, &argument.value);
        }
        map
    }
}

/// The static description of one requested field.
///
/// The response key is the field's alias when one was requested, otherwise its name; it is
/// the key the server echoes back in the response object. The declared type is fixed at
/// generation time and drives every lookup and coercion for this field.
#[derive(Debug, PartialEq, Clone)]
pub struct FieldDescriptor<'a> {
    /// A field's alias, under which the response carries the value when present.
    pub alias: Option<&'a str>,
    /// A field's name, as defined on the parent type in the server schema.
    pub name: &'a str,
    /// The declared type of this field's value.
    pub of_type: TypeExpr<'a>,
    /// Arguments that are passed to this field.
    ///
    /// When no arguments are passed, this will be an empty list, as can be checked using
    /// `Arguments::is_empty`.
    pub arguments: Arguments<'a>,
}

impl<'a> FieldDescriptor<'a> {
    /// Get the alias of the field, if present, otherwise get the name.
    #[inline]
    pub fn response_key(&self) -> &'a str {
        self.alias.unwrap_or(self.name)
    }

    /// Creates a new descriptor with the given `name` and declared type and no arguments.
    #[inline]
    pub fn new(ctx: &'a DocumentContext, name: &'a str, of_type: TypeExpr<'a>) -> Self {
        FieldDescriptor {
            alias: None,
            name,
            of_type,
            arguments: Arguments::default_in(&ctx.arena),
        }
    }

    /// Creates a new descriptor with the given `name`, `alias`, and declared type and no
    /// arguments.
    #[inline]
    pub fn new_aliased(
        ctx: &'a DocumentContext,
        alias: &'a str,
        name: &'a str,
        of_type: TypeExpr<'a>,
    ) -> Self {
        FieldDescriptor {
            alias: Some(alias),
            name,
            of_type,
            arguments: Arguments::default_in(&ctx.arena),
        }
    }
}

/// The set of concrete type names a fragment is conditioned on.
///
/// A fragment on an interface or union parent type only applies when the backing object's
/// `__typename` discriminant is a member of this set. The generator expands abstract type
/// conditions to the concrete object types implementing them, so membership is a plain
/// string comparison at decode time with no schema access.
#[derive(Debug, PartialEq, Clone)]
pub struct TypeCondition<'a> {
    pub concrete_types: bumpalo::collections::Vec<'a, &'a str>,
}

impl<'a> TypeCondition<'a> {
    /// Creates a type condition over the given concrete type names.
    pub fn new_in(ctx: &'a DocumentContext, concrete_types: &[&'a str]) -> Self {
        TypeCondition {
            concrete_types: bumpalo::collections::Vec::from_iter_in(
                concrete_types.iter().copied(),
                &ctx.arena,
            ),
        }
    }

    /// Checks whether the given discriminant is a member of this condition's type set.
    #[inline]
    pub fn matches(&self, type_name: &str) -> bool {
        self.concrete_types.iter().any(|name| *name == type_name)
    }

    /// Checks whether this condition lists any concrete types.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.concrete_types.is_empty()
    }
}

/// The static description of an inline fragment: a type condition and the selections that
/// apply once it matches.
#[derive(Debug, PartialEq, Clone)]
pub struct InlineFragmentSchema<'a> {
    pub condition: TypeCondition<'a>,
    pub selections: SelectionSetSchema<'a>,
}

/// One selection inside a [`SelectionSetSchema`].
///
/// Any given selection set may contain fields, spreads of named fragment documents, and
/// inline fragments.
#[derive(Debug, PartialEq, Clone)]
pub enum Selection<'a> {
    Field(FieldDescriptor<'a>),
    FragmentSpread(&'a FragmentDocument<'a>),
    InlineFragment(InlineFragmentSchema<'a>),
}

impl<'a> Selection<'a> {
    /// Helper method to return the [`FieldDescriptor`] if the selection is a field.
    #[inline]
    pub fn field(&self) -> Option<&FieldDescriptor<'a>> {
        match self {
            Selection::Field(field) => Some(field),
            Selection::FragmentSpread(_) => None,
            Selection::InlineFragment(_) => None,
        }
    }

    /// Helper method to return the [`FragmentDocument`] if the selection is a fragment
    /// spread.
    #[inline]
    pub fn fragment_spread(&self) -> Option<&'a FragmentDocument<'a>> {
        match self {
            Selection::FragmentSpread(spread) => Some(*spread),
            Selection::Field(_) => None,
            Selection::InlineFragment(_) => None,
        }
    }

    /// Helper method to return the [`InlineFragmentSchema`] if the selection is an inline
    /// fragment.
    #[inline]
    pub fn inline_fragment(&self) -> Option<&InlineFragmentSchema<'a>> {
        match self {
            Selection::InlineFragment(fragment) => Some(fragment),
            Selection::FragmentSpread(_) => None,
            Selection::Field(_) => None,
        }
    }
}

/// An indexed group of selections over one parent type.
///
/// Field descriptors are indexed by response key at construction, so decode-time lookups
/// stay constant-time no matter how a response interleaves its keys. The selections keep
/// their document order for introspection and printing.
#[derive(Debug, PartialEq, Clone)]
pub struct SelectionSetSchema<'a> {
    pub selections: bumpalo::collections::Vec<'a, Selection<'a>>,
    fields: HashMap<&'a str, usize, DefaultHashBuilder, &'a bumpalo::Bump>,
}

impl<'a> SelectionSetSchema<'a> {
    /// Creates a selection-set schema, indexing its field descriptors by response key.
    pub fn new_in(
        ctx: &'a DocumentContext,
        selections: bumpalo::collections::Vec<'a, Selection<'a>>,
    ) -> Self {
        let mut fields = HashMap::new_in(&ctx.arena);
        for (index, selection) in selections.iter().enumerate() {
            if let Selection::Field(field) = selection {
                fields.insert(field.response_key(), index);
            }
        }
        SelectionSetSchema { selections, fields }
    }

    /// Creates an empty selection-set schema, as used for scalar leaf positions.
    pub fn empty_in(ctx: &'a DocumentContext) -> Self {
        SelectionSetSchema {
            selections: bumpalo::collections::Vec::new_in(&ctx.arena),
            fields: HashMap::new_in(&ctx.arena),
        }
    }

    /// Looks up a field descriptor by its response key.
    #[inline]
    pub fn field(&self, response_key: &str) -> Option<&FieldDescriptor<'a>> {
        self.fields
            .get(response_key)
            .and_then(|&at| self.selections[at].field())
    }

    /// Iterates all inline fragments of this selection set in document order.
    pub fn inline_fragments(&self) -> impl Iterator<Item = &InlineFragmentSchema<'a>> {
        self.selections
            .iter()
            .filter_map(Selection::inline_fragment)
    }

    /// Iterates all spread fragment documents of this selection set in document order.
    pub fn fragment_spreads(&self) -> impl Iterator<Item = &'a FragmentDocument<'a>> + '_ {
        self.selections
            .iter()
            .filter_map(Selection::fragment_spread)
    }

    /// Checks whether this selection set contains any selections.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bumpalo::collections::Vec;

    #[test]
    fn field_lookup_by_response_key() {
        let ctx = DocumentContext::new();
        let selections = Vec::from_iter_in(
            [
                Selection::Field(FieldDescriptor::new(
                    &ctx,
                    "name",
                    TypeExpr::Scalar(ScalarKind::String),
                )),
                Selection::Field(FieldDescriptor::new_aliased(
                    &ctx,
                    "label",
                    "name",
                    TypeExpr::Scalar(ScalarKind::String),
                )),
            ],
            &ctx.arena,
        );
        let schema = SelectionSetSchema::new_in(&ctx, selections);

        assert_eq!(schema.field("name").unwrap().name, "name");
        assert_eq!(schema.field("label").unwrap().response_key(), "label");
        assert!(schema.field("unknown").is_none());
    }

    #[test]
    fn type_condition_membership() {
        let ctx = DocumentContext::new();
        let condition = TypeCondition::new_in(&ctx, &["Droid", "Human"]);
        assert!(condition.matches("Droid"));
        assert!(condition.matches("Human"));
        assert!(!condition.matches("Starship"));
    }

    #[test]
    fn type_expr_wrappers() {
        let ctx = DocumentContext::new();
        let of_type = TypeExpr::Scalar(ScalarKind::Int)
            .into_list(&ctx)
            .into_nullable(&ctx);
        assert!(of_type.is_nullable());
        assert!(matches!(
            of_type,
            TypeExpr::Nullable(TypeExpr::List(TypeExpr::Scalar(ScalarKind::Int)))
        ));
    }
}
