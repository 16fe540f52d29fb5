//! Positional state of a query walk within one type graph.
//!
//! A [`TraversalContext`] mirrors the path of the walk as a stack of frames,
//! one frame per AST node currently entered. Lookups that fail in this
//! schema push an unresolved frame instead of failing, so two contexts
//! driven by the same walk always stay at the same depth even when their
//! schemas disagree.

use apollo_compiler::ast::{NamedType, OperationType, Type};
use apollo_compiler::schema::{Component, DirectiveDefinition, FieldDefinition, InputValueDefinition};
use apollo_compiler::{Node, Schema};

#[derive(Debug, Clone, Copy)]
enum Frame<'s> {
    /// Operation root, fragment type condition or inline fragment.
    Scope(Option<&'s NamedType>),
    Field(Option<&'s Component<FieldDefinition>>),
    Directive(Option<&'s Node<DirectiveDefinition>>),
    Argument(Option<&'s Node<InputValueDefinition>>),
}

impl Frame<'_> {
    const fn is_resolved(&self) -> bool {
        match self {
            Self::Scope(scope) => scope.is_some(),
            Self::Field(field) => field.is_some(),
            Self::Directive(directive) => directive.is_some(),
            Self::Argument(argument) => argument.is_some(),
        }
    }
}

/// Tracks where a query walk currently is within one schema.
///
/// Every `enter_*` call pushes exactly one frame and [`leave`](Self::leave)
/// pops one, so callers must pair them like the nodes they visit.
#[derive(Debug)]
pub struct TraversalContext<'s> {
    schema: &'s Schema,
    stack: Vec<Frame<'s>>,
}

impl<'s> TraversalContext<'s> {
    #[must_use]
    pub const fn new(schema: &'s Schema) -> Self {
        Self {
            schema,
            stack: Vec::new(),
        }
    }

    /// Number of nodes currently entered.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Enters an operation; its scope is this schema's root type for the
    /// operation kind, unresolved if the schema has no such root.
    pub fn enter_operation(&mut self, operation_type: OperationType) {
        let root = self.schema.root_operation(operation_type);
        self.stack.push(Frame::Scope(root));
    }

    pub fn enter_fragment_definition(&mut self, type_condition: &str) {
        let scope = self.named_type(type_condition);
        self.stack.push(Frame::Scope(scope));
    }

    /// Enters an inline fragment. Without a type condition the enclosing
    /// type stays in scope.
    pub fn enter_inline_fragment(&mut self, type_condition: Option<&str>) {
        let scope = match type_condition {
            Some(name) => self.named_type(name),
            None => self.enclosing_type(),
        };
        self.stack.push(Frame::Scope(scope));
    }

    /// Enters a field selection, resolving it on the enclosing type.
    pub fn enter_field(&mut self, name: &str) {
        let schema = self.schema;
        let definition = self
            .enclosing_type()
            .and_then(|parent| schema.type_field(parent.as_str(), name).ok());
        self.stack.push(Frame::Field(definition));
    }

    pub fn enter_directive(&mut self, name: &str) {
        let definition = self.schema.directive_definitions.get(name);
        self.stack.push(Frame::Directive(definition));
    }

    /// Enters an argument of the innermost field or directive.
    pub fn enter_argument(&mut self, name: &str) {
        let definition = match self.stack.last().copied() {
            Some(Frame::Field(Some(field))) => field.argument_by_name(name),
            Some(Frame::Directive(Some(directive))) => directive.argument_by_name(name),
            _ => None,
        };
        self.stack.push(Frame::Argument(definition));
    }

    /// Leaves the node entered last.
    pub fn leave(&mut self) {
        let frame = self.stack.pop();
        debug_assert!(frame.is_some(), "leave() without a matching enter");
    }

    /// Whether the node entered last resolved in this schema.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.stack.last().is_some_and(Frame::is_resolved)
    }

    /// Declared output type of the field entered last, if it resolved.
    #[must_use]
    pub fn current_output_type(&self) -> Option<&'s Type> {
        match self.stack.last().copied() {
            Some(Frame::Field(Some(field))) => {
                let ty: &'s Type = &field.ty;
                Some(ty)
            }
            _ => None,
        }
    }

    /// Declared type of the argument entered last, if it resolved.
    #[must_use]
    pub fn current_argument_type(&self) -> Option<&'s Type> {
        match self.stack.last().copied() {
            Some(Frame::Argument(Some(argument))) => {
                let ty: &'s Type = &argument.ty;
                Some(ty)
            }
            _ => None,
        }
    }

    /// Type whose fields a selection at the current position would select.
    fn enclosing_type(&self) -> Option<&'s NamedType> {
        match self.stack.last().copied()? {
            Frame::Scope(scope) => scope,
            Frame::Field(field) => field.map(|field| field.ty.inner_named_type()),
            Frame::Directive(_) | Frame::Argument(_) => None,
        }
    }

    fn named_type(&self, name: &str) -> Option<&'s NamedType> {
        self.schema.types.get_key_value(name).map(|(name, _)| name)
    }
}
