//! AST node types for executable document structure.

use smol_str::SmolStr;

use crate::ast::{Directive, Pos, SelectionSet, Value};

/// An identifier token together with its source position.
#[derive(Debug, Clone, PartialEq)]
pub struct Name {
    /// The identifier text.
    pub value: SmolStr,
    /// Position of the token in the original source.
    pub pos: Pos,
}

impl Name {
    /// Creates a new name token.
    pub fn new(value: impl Into<SmolStr>, pos: Pos) -> Self {
        Self {
            value: value.into(),
            pos,
        }
    }

    /// Returns the identifier text.
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

/// Root AST node representing a complete executable document.
///
/// Definitions keep their source order. The document is immutable once built;
/// validation never mutates it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub definitions: Vec<Definition>,
}

impl Document {
    /// Creates a document from its definitions.
    pub fn new(definitions: Vec<Definition>) -> Self {
        Self { definitions }
    }

    /// Iterates the operations in document order.
    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Operation(op) => Some(op),
            Definition::Fragment(_) => None,
        })
    }

    /// Iterates the fragment definitions in document order.
    pub fn fragments(&self) -> impl Iterator<Item = &FragmentDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Fragment(fragment) => Some(fragment),
            Definition::Operation(_) => None,
        })
    }
}

/// Top-level definition in an executable document.
#[derive(Debug, Clone, PartialEq)]
pub enum Definition {
    /// Operation definition (query, mutation, subscription)
    Operation(OperationDefinition),
    /// Named fragment definition
    Fragment(FragmentDefinition),
}

/// Operation type keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

/// Operation definition AST node.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationDefinition {
    pub kind: OperationKind,
    /// Anonymous shorthand operations carry no name, and with it no
    /// attribution location.
    pub name: Option<Name>,
    pub variable_definitions: Vec<VariableDefinition>,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
}

/// A `$name: Type = default` variable definition on an operation.
///
/// Names are unique within one operation.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDefinition {
    /// The `$name` token; the position points at the `$`.
    pub name: Name,
    pub var_type: TypeRef,
    pub default_value: Option<Value>,
}

/// A type reference in a variable definition.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeRef {
    /// Named type, e.g. `String`
    Named(SmolStr),
    /// List type, e.g. `[String]`
    List(Box<TypeRef>),
    /// Non-null type, e.g. `String!`
    NonNull(Box<TypeRef>),
}

/// Fragment definition AST node. Fragments are always named.
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentDefinition {
    pub name: Name,
    /// The `on Type` condition.
    pub type_condition: SmolStr,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
}
