//! Operation variable validation for GraphQL documents.
//!
//! This library checks one thing about an already-parsed executable document:
//! that every variable an operation references, directly in its own argument
//! and directive values or through any chain of fragment spreads, is
//! declared among that operation's variable definitions. Each unresolved
//! reference becomes a structured diagnostic with exact source positions,
//! renderable through miette when the original source text is available.
//!
//! Fragment graphs may be arbitrarily deep and may contain cycles; traversal
//! always terminates, and per-fragment usage sequences are computed once and
//! shared across every operation that reaches them.
//!
//! # Example
//!
//! ```
//! use graphql_varcheck::ast::{
//!     Argument, Definition, Document, Field, Name, OperationDefinition, OperationKind, Pos,
//!     Selection, SelectionSet, Value, VariableRef,
//! };
//! use graphql_varcheck::check_document;
//!
//! // { field(a: $a) }  anonymous operation, `$a` is never declared
//! let document = Document::new(vec![Definition::Operation(OperationDefinition {
//!     kind: OperationKind::Query,
//!     name: None,
//!     variable_definitions: vec![],
//!     directives: vec![],
//!     selection_set: SelectionSet::new(vec![Selection::Field(Field {
//!         alias: None,
//!         name: Name::new("field", Pos::new(1, 3)),
//!         arguments: vec![Argument {
//!             name: Name::new("a", Pos::new(1, 9)),
//!             value: Value::Variable(VariableRef::new("a", Pos::new(1, 12))),
//!         }],
//!         directives: vec![],
//!         selection_set: SelectionSet::default(),
//!     })]),
//! })]);
//!
//! let diagnostics = check_document(&document);
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(diagnostics[0].message, "Variable \"$a\" is not defined.");
//! assert_eq!(diagnostics[0].locations(), vec![Pos::new(1, 12)]);
//! ```

pub mod ast;
pub mod diag;
pub mod semantic;

// Re-export the document model's foundation types.
pub use ast::{Document, Pos};

// Re-export diagnostic types for convenience.
pub use diag::{Diag, DiagLabel, DiagSeverity, LabelRole, SourceFile};

// Re-export the validation entry points.
pub use semantic::{VariableUsage, VariableValidator, check_document};
