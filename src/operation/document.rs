use sha2::{Digest, Sha256};

use crate::decode::SelectionSet;
use crate::error::{Error, ErrorKind, Result};
use crate::response::{DocumentContext, Node};
use crate::schema::{SelectionSetSchema, TypeCondition};

use super::variables::VariableDescriptors;

/// The kind of operation a document defines.
///
/// Subscription documents decode their per-event payloads exactly like query results; the
/// transport that carries the event stream is out of scope here.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

/// The generation-time description of one named fragment.
///
/// A fragment document is referenced both by the operations that spread it and by decode-time
/// fragment resolution, so a single definition is shared across operations rather than being
/// inlined into each.
#[derive(Debug, PartialEq, Clone)]
pub struct FragmentDocument<'a> {
    /// The fragment's name, as spread via `...Name` in the document text.
    pub name: &'a str,
    /// The concrete types this fragment is gated on.
    ///
    /// `None` when the fragment was written on the exact parent type and applies
    /// unconditionally; `Some` when it was written on an interface or union and the
    /// generator expanded the condition to concrete object types.
    pub type_condition: Option<TypeCondition<'a>>,
    /// The selections this fragment contributes once it applies.
    pub selections: SelectionSetSchema<'a>,
    /// The fragment's source text, appended to operation bodies that spread it.
    pub body: &'a str,
}

/// The immutable description of one named operation.
///
/// Constructed once by generated code, then shared across all invocations. Construction is a
/// pure function of the static description: the same operation text always produces the same
/// [`persisted_query_id`](OperationDocument::persisted_query_id), across processes and
/// across independently constructed documents.
#[derive(Debug, PartialEq, Clone)]
pub struct OperationDocument<'a> {
    /// The kind of operation this document defines.
    pub operation: OperationKind,
    /// The operation's name, as sent alongside the request payload.
    pub name: &'a str,
    /// The operation's own source text, without the fragments it spreads.
    pub body: &'a str,
    /// The fragment documents this operation spreads, in document order, unique by name.
    pub fragments: bumpalo::collections::Vec<'a, &'a FragmentDocument<'a>>,
    /// The variables this operation declares.
    pub variables: VariableDescriptors<'a>,
    /// The selection schema of the operation's root type.
    pub root: &'a SelectionSetSchema<'a>,
    persisted_query_id: &'a str,
}

impl<'a> OperationDocument<'a> {
    /// Creates an operation document, deduplicating spread fragments by name and computing
    /// the persisted-query identifier over the full document text.
    pub fn new_in(
        ctx: &'a DocumentContext,
        operation: OperationKind,
        name: &'a str,
        body: &'a str,
        fragments: bumpalo::collections::Vec<'a, &'a FragmentDocument<'a>>,
        variables: VariableDescriptors<'a>,
        root: &'a SelectionSetSchema<'a>,
    ) -> Self {
        let mut unique: bumpalo::collections::Vec<'a, &'a FragmentDocument<'a>> =
            bumpalo::collections::Vec::with_capacity_in(fragments.len(), &ctx.arena);
        for fragment in fragments {
            if !unique.iter().any(|seen| seen.name == fragment.name) {
                unique.push(fragment);
            }
        }
        let document = render_document(body, &unique);
        let persisted_query_id =
            ctx.alloc_string(hex::encode(Sha256::digest(document.as_bytes())));
        OperationDocument {
            operation,
            name,
            body,
            fragments: unique,
            variables,
            root,
            persisted_query_id,
        }
    }

    /// Renders the full document text: the operation body followed by every spread
    /// fragment's text.
    ///
    /// This is what a transport sends when the server doesn't know the persisted-query
    /// identifier yet.
    pub fn document(&self) -> String {
        render_document(self.body, &self.fragments)
    }

    /// Returns the stable content hash identifying this operation.
    ///
    /// The lowercase hex SHA-256 of [`document`](OperationDocument::document). A transport
    /// attempting persisted-query short-circuiting sends this first and falls back to the
    /// full text when the server signals a cache miss.
    #[inline]
    pub fn persisted_query_id(&self) -> &'a str {
        self.persisted_query_id
    }

    /// Wraps a delivered response tree in this operation's typed root selection set.
    ///
    /// The tree is borrowed, not consumed; decoding the same tree twice yields identical
    /// results.
    pub fn decode(&self, ctx: &'a DocumentContext, data: &'a Node<'a>) -> Result<SelectionSet<'a>> {
        match data.object() {
            Some(object) => Ok(SelectionSet::root(ctx, object, self.root)),
            None => Err(Error::new(
                format!(
                    "Expected response data to be an object but found {}",
                    data.tag()
                ),
                ErrorKind::TypeMismatch,
            )),
        }
    }
}

fn render_document(body: &str, fragments: &[&FragmentDocument<'_>]) -> String {
    let capacity = body.len()
        + fragments
            .iter()
            .map(|fragment| fragment.body.len() + 2)
            .sum::<usize>();
    let mut out = String::with_capacity(capacity);
    out.push_str(body);
    for fragment in fragments {
        out.push_str("\n\n");
        out.push_str(fragment.body);
    }
    out
}
