use crate::error::{Error, ErrorKind, Result};
use crate::operation::FragmentDocument;
use crate::response::{DocumentContext, Node, ObjectNode};
use crate::schema::InlineFragmentSchema;

use super::path::FieldPath;
use super::projection::SelectionSet;

/// The response key every polymorphic object carries its concrete type under.
pub const TYPENAME: &str = "__typename";

fn read_type_name<'a>(
    ctx: &'a DocumentContext,
    node: &'a ObjectNode<'a>,
    path: Option<&'a FieldPath<'a>>,
) -> Result<&'a str> {
    let discriminant_path = || FieldPath::key_in(ctx, path, TYPENAME).to_string();
    match node.get(TYPENAME) {
        Some(Node::String(type_name)) => Ok(*type_name),
        Some(node) => Err(Error::with_path(
            format!(
                "Discriminant {TYPENAME} must be a String but found {}",
                node.tag()
            ),
            discriminant_path(),
            ErrorKind::MissingDiscriminant,
        )),
        None => Err(Error::with_path(
            format!("Discriminant {TYPENAME} is missing from the response object"),
            discriminant_path(),
            ErrorKind::MissingDiscriminant,
        )),
    }
}

impl<'a> SelectionSet<'a> {
    /// Reads the `__typename` discriminant of the backing object.
    ///
    /// Type-conditioned projection hinges on this single field; a response object that
    /// backs a selection with inline fragments or interface/union-scoped fragments but
    /// lacks the discriminant cannot be decoded.
    pub fn type_name(&self) -> Result<&'a str> {
        read_type_name(self.ctx, self.node, self.path)
    }

    /// Resolves an inline fragment against the backing object's concrete type.
    ///
    /// Resolves to a present typed view iff the discriminant is a member of the fragment's
    /// type condition, and to `None` otherwise. A non-matching type is valid GraphQL that
    /// simply yields no data for the branch, so it is never an error. The view shares the
    /// backing node; nothing is re-decoded or copied.
    pub fn inline_fragment(
        &self,
        fragment: &'a InlineFragmentSchema<'a>,
    ) -> Result<Option<SelectionSet<'a>>> {
        let type_name = self.type_name()?;
        if fragment.condition.matches(type_name) {
            Ok(Some(SelectionSet::new(
                self.ctx,
                self.node,
                &fragment.selections,
                self.path,
            )))
        } else {
            Ok(None)
        }
    }

    /// Resolves a named fragment document against the backing object.
    ///
    /// A fragment without a type condition was written on the exact parent type and always
    /// resolves to a present view over the same backing node. A type-conditioned fragment
    /// is gated on the discriminant like an inline fragment. Overlapping conditions across
    /// fragments are legal; each resolves independently.
    pub fn fragment(
        &self,
        fragment: &'a FragmentDocument<'a>,
    ) -> Result<Option<SelectionSet<'a>>> {
        let reinterpret =
            || SelectionSet::new(self.ctx, self.node, &fragment.selections, self.path);
        match &fragment.type_condition {
            None => Ok(Some(reinterpret())),
            Some(condition) => {
                let type_name = self.type_name()?;
                if condition.matches(type_name) {
                    Ok(Some(reinterpret()))
                } else {
                    Ok(None)
                }
            }
        }
    }

    /// Returns a container exposing this object's named-fragment projections.
    pub fn fragments(&self) -> FragmentContainer<'a> {
        FragmentContainer {
            ctx: self.ctx,
            node: self.node,
            path: self.path,
        }
    }
}

/// A grouping of named-fragment views sharing one backing node.
///
/// Generated code wraps this in per-operation structs with one accessor per spread fragment;
/// each view is constructed lazily on access and reinterprets the same node under the
/// fragment's schema without re-fetching or re-decoding it.
#[derive(Clone, Copy)]
pub struct FragmentContainer<'a> {
    ctx: &'a DocumentContext,
    node: &'a ObjectNode<'a>,
    path: Option<&'a FieldPath<'a>>,
}

impl<'a> FragmentContainer<'a> {
    /// Resolves one named fragment over the shared backing node.
    pub fn get(&self, fragment: &'a FragmentDocument<'a>) -> Result<Option<SelectionSet<'a>>> {
        match &fragment.type_condition {
            None => Ok(Some(SelectionSet::new(
                self.ctx,
                self.node,
                &fragment.selections,
                self.path,
            ))),
            Some(condition) => {
                let type_name = read_type_name(self.ctx, self.node, self.path)?;
                if condition.matches(type_name) {
                    Ok(Some(SelectionSet::new(
                        self.ctx,
                        self.node,
                        &fragment.selections,
                        self.path,
                    )))
                } else {
                    Ok(None)
                }
            }
        }
    }

    /// Returns the backing response node this container borrows.
    #[inline]
    pub fn response_node(&self) -> &'a ObjectNode<'a> {
        self.node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{
        FieldDescriptor, ScalarKind, Selection, SelectionSetSchema, TypeCondition, TypeExpr,
    };
    use bumpalo::collections::Vec;

    fn details_selections<'a>(
        ctx: &'a DocumentContext,
        field: &'a str,
    ) -> SelectionSetSchema<'a> {
        let fields = Vec::from_iter_in(
            [
                Selection::Field(FieldDescriptor::new(
                    ctx,
                    "name",
                    TypeExpr::Scalar(ScalarKind::String),
                )),
                Selection::Field(FieldDescriptor::new(
                    ctx,
                    field,
                    TypeExpr::Scalar(ScalarKind::String).into_nullable(ctx),
                )),
            ],
            &ctx.arena,
        );
        SelectionSetSchema::new_in(ctx, fields)
    }

    fn droid_node<'a>(ctx: &'a DocumentContext) -> &'a ObjectNode<'a> {
        let mut node = ObjectNode::new_in(ctx);
        node.insert("__typename", Node::String("Droid"));
        node.insert("name", Node::String("R2-D2"));
        node.insert("primaryFunction", Node::String("Astromech"));
        ctx.alloc(node)
    }

    fn hero_view<'a>(ctx: &'a DocumentContext, node: &'a ObjectNode<'a>) -> SelectionSet<'a> {
        let selections = Vec::from_iter_in(
            [Selection::Field(FieldDescriptor::new(
                ctx,
                "__typename",
                TypeExpr::Scalar(ScalarKind::String),
            ))],
            &ctx.arena,
        );
        let schema = ctx.alloc(SelectionSetSchema::new_in(ctx, selections));
        SelectionSet::root(ctx, node, schema)
    }

    #[test]
    fn inline_fragments_gate_on_the_discriminant() {
        let ctx = DocumentContext::new();
        let as_droid = ctx.alloc(InlineFragmentSchema {
            condition: TypeCondition::new_in(&ctx, &["Droid"]),
            selections: details_selections(&ctx, "primaryFunction"),
        });
        let as_human = ctx.alloc(InlineFragmentSchema {
            condition: TypeCondition::new_in(&ctx, &["Human"]),
            selections: details_selections(&ctx, "homePlanet"),
        });

        let hero = hero_view(&ctx, droid_node(&ctx));
        assert_eq!(hero.type_name().unwrap(), "Droid");

        let droid = hero.inline_fragment(as_droid).unwrap().unwrap();
        assert_eq!(droid.string("name").unwrap(), "R2-D2");
        assert_eq!(
            droid.optional_string("primaryFunction").unwrap(),
            Some("Astromech")
        );
        assert!(hero.inline_fragment(as_human).unwrap().is_none());
    }

    #[test]
    fn gating_reverses_with_the_discriminant() {
        let ctx = DocumentContext::new();
        let as_droid = ctx.alloc(InlineFragmentSchema {
            condition: TypeCondition::new_in(&ctx, &["Droid"]),
            selections: details_selections(&ctx, "primaryFunction"),
        });
        let as_human = ctx.alloc(InlineFragmentSchema {
            condition: TypeCondition::new_in(&ctx, &["Human"]),
            selections: details_selections(&ctx, "homePlanet"),
        });

        let mut node = ObjectNode::new_in(&ctx);
        node.insert("__typename", Node::String("Human"));
        node.insert("name", Node::String("Luke"));
        let hero = hero_view(&ctx, ctx.alloc(node));

        assert!(hero.inline_fragment(as_droid).unwrap().is_none());
        let human = hero.inline_fragment(as_human).unwrap().unwrap();
        assert_eq!(human.string("name").unwrap(), "Luke");
        assert_eq!(human.optional_string("homePlanet").unwrap(), None);
    }

    #[test]
    fn overlapping_conditions_resolve_independently() {
        let ctx = DocumentContext::new();
        let as_character = ctx.alloc(InlineFragmentSchema {
            condition: TypeCondition::new_in(&ctx, &["Droid", "Human"]),
            selections: details_selections(&ctx, "primaryFunction"),
        });
        let as_droid = ctx.alloc(InlineFragmentSchema {
            condition: TypeCondition::new_in(&ctx, &["Droid"]),
            selections: details_selections(&ctx, "primaryFunction"),
        });

        let hero = hero_view(&ctx, droid_node(&ctx));
        assert!(hero.inline_fragment(as_character).unwrap().is_some());
        assert!(hero.inline_fragment(as_droid).unwrap().is_some());
    }

    #[test]
    fn missing_discriminant_is_an_error() {
        let ctx = DocumentContext::new();
        let as_droid = ctx.alloc(InlineFragmentSchema {
            condition: TypeCondition::new_in(&ctx, &["Droid"]),
            selections: details_selections(&ctx, "primaryFunction"),
        });

        let mut node = ObjectNode::new_in(&ctx);
        node.insert("name", Node::String("R2-D2"));
        let hero = hero_view(&ctx, ctx.alloc(node));

        let error = hero.inline_fragment(as_droid).err().unwrap();
        assert_eq!(error.kind(), ErrorKind::MissingDiscriminant);
        assert_eq!(error.path(), Some("__typename"));
    }

    #[test]
    fn unconditioned_fragments_always_resolve() {
        let ctx = DocumentContext::new();
        let character_details = ctx.alloc(FragmentDocument {
            name: "CharacterDetails",
            type_condition: None,
            selections: details_selections(&ctx, "primaryFunction"),
            body: "fragment CharacterDetails on Character {\n  name\n  primaryFunction\n}",
        });

        // No discriminant present; an unconditioned fragment must not need one
        let mut node = ObjectNode::new_in(&ctx);
        node.insert("name", Node::String("R2-D2"));
        let hero = hero_view(&ctx, ctx.alloc(node));

        let details = hero.fragment(character_details).unwrap().unwrap();
        assert_eq!(details.string("name").unwrap(), "R2-D2");
        assert!(std::ptr::eq(details.response_node(), hero.response_node()));
    }

    #[test]
    fn fragment_container_projects_lazily() {
        let ctx = DocumentContext::new();
        let droid_details = ctx.alloc(FragmentDocument {
            name: "DroidDetails",
            type_condition: Some(TypeCondition::new_in(&ctx, &["Droid"])),
            selections: details_selections(&ctx, "primaryFunction"),
            body: "fragment DroidDetails on Droid {\n  name\n  primaryFunction\n}",
        });
        let human_details = ctx.alloc(FragmentDocument {
            name: "HumanDetails",
            type_condition: Some(TypeCondition::new_in(&ctx, &["Human"])),
            selections: details_selections(&ctx, "homePlanet"),
            body: "fragment HumanDetails on Human {\n  name\n  homePlanet\n}",
        });

        let hero = hero_view(&ctx, droid_node(&ctx));
        let fragments = hero.fragments();

        let droid = fragments.get(droid_details).unwrap().unwrap();
        assert_eq!(
            droid.optional_string("primaryFunction").unwrap(),
            Some("Astromech")
        );
        assert!(fragments.get(human_details).unwrap().is_none());
        assert!(std::ptr::eq(fragments.response_node(), hero.response_node()));
    }
}
