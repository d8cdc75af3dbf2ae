//! Per-operation variable usage collection and checking.

use std::collections::HashSet;

use crate::ast::{OperationDefinition, Selection, SelectionSet};
use crate::diag::Diag;
use crate::semantic::diag;

use super::fragment_usages::{FragmentUsageIndex, VariableUsage, collect_directives, collect_value};

/// A usage gathered under one operation's expanded traversal, tagged with
/// whether it crossed a fragment boundary on the way in.
struct CollectedUsage {
    usage: VariableUsage,
    via_fragment: bool,
}

/// Checks one operation: collects every variable usage reachable from it in
/// document order, then emits one diagnostic per usage whose name the
/// operation does not declare.
///
/// A usage found in the operation's own directives or selections is reported
/// without attribution. A usage pulled in through a fragment spread, at any
/// depth, including fragments the operation spreads directly, is attributed
/// to the operation when it has a name; anonymous operations have no
/// attribution location and fall back to the unattributed shape.
pub(super) fn check_operation(
    operation: &OperationDefinition,
    index: &mut FragmentUsageIndex<'_>,
    diagnostics: &mut Vec<Diag>,
) {
    let mut collected = Vec::new();

    let mut own = Vec::new();
    collect_directives(&operation.directives, &mut own);
    push_direct(own, &mut collected);
    walk_selection_set(&operation.selection_set, index, &mut collected);

    let declared: HashSet<&str> = operation
        .variable_definitions
        .iter()
        .map(|def| def.name.as_str())
        .collect();

    for CollectedUsage {
        usage,
        via_fragment,
    } in collected
    {
        if declared.contains(usage.name.as_str()) {
            continue;
        }
        let diag = match &operation.name {
            Some(op_name) if via_fragment => {
                diag::undefined_variable_in_operation(&usage.name, op_name, usage.pos)
            }
            _ => diag::undefined_variable(&usage.name, usage.pos),
        };
        diagnostics.push(diag);
    }
}

/// Walks the operation's own selections in document order, tagging usages
/// found in place as direct and usages obtained through spread expansion as
/// via-fragment.
fn walk_selection_set(
    set: &SelectionSet,
    index: &mut FragmentUsageIndex<'_>,
    out: &mut Vec<CollectedUsage>,
) {
    for selection in &set.items {
        match selection {
            Selection::Field(field) => {
                let mut own = Vec::new();
                for argument in &field.arguments {
                    collect_value(&argument.value, &mut own);
                }
                collect_directives(&field.directives, &mut own);
                push_direct(own, out);
                walk_selection_set(&field.selection_set, index, out);
            }
            Selection::InlineFragment(inline) => {
                let mut own = Vec::new();
                collect_directives(&inline.directives, &mut own);
                push_direct(own, out);
                walk_selection_set(&inline.selection_set, index, out);
            }
            Selection::FragmentSpread(spread) => {
                // Directives written on the spread itself are part of the
                // operation's own text; only the expansion is via-fragment.
                let mut own = Vec::new();
                collect_directives(&spread.directives, &mut own);
                push_direct(own, out);
                for usage in index.usages_of(spread.fragment_name.as_str()).iter() {
                    out.push(CollectedUsage {
                        usage: usage.clone(),
                        via_fragment: true,
                    });
                }
            }
        }
    }
}

fn push_direct(own: Vec<VariableUsage>, out: &mut Vec<CollectedUsage>) {
    out.extend(own.into_iter().map(|usage| CollectedUsage {
        usage,
        via_fragment: false,
    }));
}
