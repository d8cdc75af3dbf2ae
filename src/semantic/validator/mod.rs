//! Operation variable validation over executable documents.

mod fragment_usages;
mod operation;

pub use fragment_usages::{FragmentUsageIndex, VariableUsage};

use log::debug;

use crate::ast::Document;
use crate::diag::Diag;

/// Validates that every operation declares the variables it uses, directly or
/// through any chain of fragment spreads.
///
/// One validator instance corresponds to one validation run over one
/// document: the fragment usage cache it owns is shared by every
/// per-operation check of the run and discarded with the validator. The
/// document itself is never mutated.
pub struct VariableValidator<'doc> {
    document: &'doc Document,
    usage_index: FragmentUsageIndex<'doc>,
}

impl<'doc> VariableValidator<'doc> {
    /// Creates a validator for the given document.
    pub fn new(document: &'doc Document) -> Self {
        Self {
            document,
            usage_index: FragmentUsageIndex::new(document),
        }
    }

    /// Checks every operation in document order and returns the concatenated
    /// diagnostics.
    ///
    /// No deduplication is performed: a usage site inside a fragment shared
    /// by several operations is reported once per operation that reaches it,
    /// each with its own attribution. An empty result means the document
    /// passed the check.
    pub fn validate(&mut self) -> Vec<Diag> {
        let mut diagnostics = Vec::new();
        for operation in self.document.operations() {
            operation::check_operation(operation, &mut self.usage_index, &mut diagnostics);
        }
        debug!(
            "variable validation finished with {} diagnostic(s)",
            diagnostics.len()
        );
        diagnostics
    }
}

/// Checks a whole document in one call.
///
/// Convenience wrapper over [`VariableValidator`] for callers that do not
/// need to hold on to the validator.
pub fn check_document(document: &Document) -> Vec<Diag> {
    let mut validator = VariableValidator::new(document);
    validator.validate()
}
