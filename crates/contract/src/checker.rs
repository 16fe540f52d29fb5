//! Compatibility comparison of one query across two type graphs.
//!
//! The walk visits the query once, in source order, and advances a
//! [`TraversalContext`] per schema at every node. Fields and arguments are
//! compared as they are entered; every difference is recorded and the walk
//! always runs to the end.

use crate::context::TraversalContext;
use crate::diagnostics::SourcePosition;
use crate::document::QueryDocument;
use crate::options::CheckOptions;
use crate::schema::TypeGraph;
use apollo_compiler::ast::{self, Definition, Selection};
use apollo_compiler::parser::SourceMap;
use apollo_compiler::{Name, Node};
use std::fmt;

/// What differs for one field or argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DiscrepancyKind {
    /// The field does not resolve in at least one of the schemas.
    UnknownFieldType,
    FieldTypeMismatch { old: String, current: String },
    /// The argument is not declared in one of the schemas although its
    /// field or directive exists in both.
    UnknownArgumentType,
    ArgumentTypeMismatch { old: String, current: String },
    /// The directive is defined in only one of the schemas.
    UnknownDirective,
}

/// A difference between the old and current resolution of one query node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Discrepancy {
    pub kind: DiscrepancyKind,
    /// Name of the field or argument.
    pub subject: String,
    /// Response keys from the enclosing operation or fragment down to the
    /// field (for arguments, down to the field that takes them).
    pub path: Vec<String>,
    pub position: Option<SourcePosition>,
}

impl fmt::Display for Discrepancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let subject = &self.subject;
        match &self.kind {
            DiscrepancyKind::UnknownFieldType => write!(f, "Unknown type for field {subject}"),
            DiscrepancyKind::FieldTypeMismatch { old, current } => {
                write!(f, "Different types for field {subject}: {old} vs {current}")
            }
            DiscrepancyKind::UnknownArgumentType => {
                write!(f, "Unknown type for argument {subject}")
            }
            DiscrepancyKind::ArgumentTypeMismatch { old, current } => write!(
                f,
                "Different argument types for argument {subject}: {old} vs {current}"
            ),
            DiscrepancyKind::UnknownDirective => write!(f, "Unknown directive @{subject}"),
        }
    }
}

/// Compares every field and argument of `document` between two graphs.
///
/// The query is expected to be valid against `current`; against `old` it
/// may reference anything. Discrepancies come back in pre-order: a field
/// before its arguments, arguments before directives, directives (and their
/// arguments) before sub-selections.
#[must_use]
#[tracing::instrument(skip_all, fields(definitions = document.ast().definitions.len()))]
pub fn check_compatibility(
    document: &QueryDocument,
    old: &TypeGraph,
    current: &TypeGraph,
    options: &CheckOptions,
) -> Vec<Discrepancy> {
    let mut walk = DualWalk {
        old: TraversalContext::new(old.schema()),
        current: TraversalContext::new(current.schema()),
        options,
        sources: &document.ast().sources,
        path: Vec::new(),
        discrepancies: Vec::new(),
    };

    for definition in &document.ast().definitions {
        walk.definition(definition);
    }

    debug_assert_eq!(walk.old.depth(), 0);
    debug_assert_eq!(walk.current.depth(), 0);
    tracing::debug!(
        discrepancies = walk.discrepancies.len(),
        "Compatibility walk complete"
    );
    walk.discrepancies
}

struct DualWalk<'a> {
    old: TraversalContext<'a>,
    current: TraversalContext<'a>,
    options: &'a CheckOptions,
    sources: &'a SourceMap,
    path: Vec<String>,
    discrepancies: Vec<Discrepancy>,
}

impl<'a> DualWalk<'a> {
    /// Advances both contexts with the same step.
    fn enter(&mut self, step: impl Fn(&mut TraversalContext<'a>)) {
        step(&mut self.old);
        step(&mut self.current);
    }

    fn leave(&mut self) {
        self.old.leave();
        self.current.leave();
    }

    fn definition(&mut self, definition: &Definition) {
        match definition {
            Definition::OperationDefinition(operation) => {
                self.enter(|cx| cx.enter_operation(operation.operation_type));
                self.directives(&operation.directives);
                self.selection_set(&operation.selection_set);
                self.leave();
            }
            Definition::FragmentDefinition(fragment) => {
                self.enter(|cx| cx.enter_fragment_definition(fragment.type_condition.as_str()));
                self.directives(&fragment.directives);
                self.selection_set(&fragment.selection_set);
                self.leave();
            }
            // Type system definitions fail validation before any walk.
            _ => {}
        }
    }

    fn selection_set(&mut self, selections: &[Selection]) {
        for selection in selections {
            match selection {
                Selection::Field(field) => self.field(field),
                Selection::InlineFragment(inline) => {
                    let type_condition = inline.type_condition.as_ref().map(Name::as_str);
                    self.enter(|cx| cx.enter_inline_fragment(type_condition));
                    self.directives(&inline.directives);
                    self.selection_set(&inline.selection_set);
                    self.leave();
                }
                // Spread fragments are compared where they are defined.
                Selection::FragmentSpread(spread) => self.directives(&spread.directives),
            }
        }
    }

    fn field(&mut self, field: &Node<ast::Field>) {
        self.enter(|cx| cx.enter_field(field.name.as_str()));

        let response_key = field.alias.as_ref().unwrap_or(&field.name);
        self.path.push(response_key.to_string());
        self.compare_field(field);

        for argument in &field.arguments {
            self.argument(argument);
        }
        self.directives(&field.directives);
        self.selection_set(&field.selection_set);

        self.path.pop();
        self.leave();
    }

    fn directives(&mut self, directives: &ast::DirectiveList) {
        for directive in directives.iter() {
            self.enter(|cx| cx.enter_directive(directive.name.as_str()));
            if self.old.is_resolved() != self.current.is_resolved() {
                let position = self.position(directive);
                self.record(
                    DiscrepancyKind::UnknownDirective,
                    directive.name.as_str(),
                    position,
                );
            }
            for argument in &directive.arguments {
                self.argument(argument);
            }
            self.leave();
        }
    }

    fn argument(&mut self, argument: &Node<ast::Argument>) {
        let owner_resolved = self.old.is_resolved() && self.current.is_resolved();
        self.enter(|cx| cx.enter_argument(argument.name.as_str()));
        self.compare_argument(argument, owner_resolved);
        self.leave();
    }

    fn compare_field(&mut self, field: &Node<ast::Field>) {
        let kind = match (self.old.current_output_type(), self.current.current_output_type()) {
            (Some(old), Some(current)) => {
                let old = self.options.describe(old);
                let current = self.options.describe(current);
                if old == current {
                    return;
                }
                DiscrepancyKind::FieldTypeMismatch { old, current }
            }
            _ => DiscrepancyKind::UnknownFieldType,
        };
        let position = self.position(field);
        self.record(kind, field.name.as_str(), position);
    }

    /// Arguments of a field or directive that is itself unresolved are not
    /// reported; the owner already carries an unknown-field or
    /// unknown-directive discrepancy.
    fn compare_argument(&mut self, argument: &Node<ast::Argument>, owner_resolved: bool) {
        let kind = match (
            self.old.current_argument_type(),
            self.current.current_argument_type(),
        ) {
            (Some(old), Some(current)) => {
                let old = self.options.describe(old);
                let current = self.options.describe(current);
                if old == current {
                    return;
                }
                DiscrepancyKind::ArgumentTypeMismatch { old, current }
            }
            _ if owner_resolved && self.options.report_unknown_arguments => {
                DiscrepancyKind::UnknownArgumentType
            }
            _ => return,
        };
        let position = self.position(argument);
        self.record(kind, argument.name.as_str(), position);
    }

    fn record(&mut self, kind: DiscrepancyKind, subject: &str, position: Option<SourcePosition>) {
        let discrepancy = Discrepancy {
            kind,
            subject: subject.to_string(),
            path: self.path.clone(),
            position,
        };
        tracing::trace!(%discrepancy, path = ?discrepancy.path, "Discrepancy");
        self.discrepancies.push(discrepancy);
    }

    fn position<T>(&self, node: &Node<T>) -> Option<SourcePosition> {
        node.location()?
            .line_column_range(self.sources)
            .map(|range| range.start.into())
    }
}
