//! Selection AST nodes: fields, fragment spreads, and inline fragments.

use smol_str::SmolStr;

use crate::ast::{Name, Value};

/// An ordered sequence of selections.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectionSet {
    pub items: Vec<Selection>,
}

impl SelectionSet {
    /// Creates a selection set from its items.
    pub fn new(items: Vec<Selection>) -> Self {
        Self { items }
    }

    /// Returns true if the set selects nothing.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A single selection.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// Field selection, possibly with arguments and a nested set
    Field(Field),
    /// `...FragmentName` reference to a named fragment
    FragmentSpread(FragmentSpread),
    /// `... on Type { ... }` inline fragment
    InlineFragment(InlineFragment),
}

/// Field selection AST node.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub alias: Option<Name>,
    pub name: Name,
    pub arguments: Vec<Argument>,
    pub directives: Vec<Directive>,
    /// Empty for leaf fields.
    pub selection_set: SelectionSet,
}

/// A `name: value` argument on a field or directive.
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    pub name: Name,
    pub value: Value,
}

/// A `...FragmentName` spread referencing a fragment definition by name.
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentSpread {
    pub fragment_name: Name,
    pub directives: Vec<Directive>,
}

/// An inline fragment with its own nested selection set.
#[derive(Debug, Clone, PartialEq)]
pub struct InlineFragment {
    /// The optional `on Type` condition.
    pub type_condition: Option<SmolStr>,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
}

/// A `@name(args)` directive annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct Directive {
    pub name: Name,
    pub arguments: Vec<Argument>,
}
