//! AST foundation types and node structures.

mod document;
mod pos;
mod selection;
mod value;

// Re-export position primitives
pub use pos::Pos;

// Re-export document structure
pub use document::{
    Definition, Document, FragmentDefinition, Name, OperationDefinition, OperationKind, TypeRef,
    VariableDefinition,
};

// Re-export selections and values
pub use selection::{
    Argument, Directive, Field, FragmentSpread, InlineFragment, Selection, SelectionSet,
};
pub use value::{Value, VariableRef};
