//! Semantic validation for executable GraphQL documents.
//!
//! This module checks a parsed document beyond its syntactic shape. The one
//! rule implemented here is operation-variable validation:
//!
//! - every variable an operation uses, in its own argument and directive
//!   values or anywhere reachable through fragment spreads, must be
//!   declared among that operation's variable definitions;
//! - each unresolved usage produces one diagnostic, ordered by the
//!   operation's document-order traversal;
//! - usages reached through a fragment are attributed back to the owning
//!   operation when it is named.
//!
//! Findings are ordinary [`Diag`](crate::diag::Diag) values, never errors:
//! validation always runs to completion and returns a (possibly empty) list.
//! Cyclic fragment graphs are traversed safely and are not themselves
//! reported; detecting them is a different rule's concern, as is checking
//! that every spread resolves to an existing fragment.
//!
//! # Example
//!
//! ```ignore
//! use graphql_varcheck::semantic::VariableValidator;
//!
//! let document = build_document();
//! let mut validator = VariableValidator::new(&document);
//! for diag in validator.validate() {
//!     eprintln!("{}: {}", diag.severity, diag.message);
//! }
//! ```

pub mod diag;
pub mod validator;

pub use validator::{FragmentUsageIndex, VariableUsage, VariableValidator, check_document};
