//! Diagnostic constructors for variable validation findings.
//!
//! Both findings share one `Diag` shape; they differ only in the message
//! template and in whether a secondary label attributes the finding to the
//! owning operation's name token.

use crate::ast::{Name, Pos};
use crate::diag::Diag;

/// Diagnostic for a variable usage with no matching definition, reported
/// without operation attribution.
///
/// Used for usages found directly in an operation's own selections, and for
/// any usage owned by an anonymous operation.
pub fn undefined_variable(name: &str, usage: Pos) -> Diag {
    Diag::error(format!("Variable \"${}\" is not defined.", name))
        .with_primary_label(usage, "variable is not defined")
}

/// Diagnostic for a fragment-reached usage, attributed to the named operation
/// that owns the traversal.
///
/// Carries two locations in fixed order: the usage site (primary) and the
/// operation's name token (secondary).
pub fn undefined_variable_in_operation(name: &str, operation: &Name, usage: Pos) -> Diag {
    Diag::error(format!(
        "Variable \"${}\" is not defined by operation \"{}\".",
        name, operation.value
    ))
    .with_primary_label(usage, "variable is not defined")
    .with_secondary_label(operation.pos, "operation declared here")
}
