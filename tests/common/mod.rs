//! Common test utilities
//!
//! Shared fixture builders and assertion helpers used across the integration
//! suites. The document model arrives pre-parsed from an external front end,
//! so fixtures construct nodes programmatically with explicit source
//! positions where a test asserts on them (and throwaway positions where it
//! does not).
#![allow(dead_code)]

use graphql_varcheck::ast::{
    Argument, Definition, Directive, Document, Field, FragmentDefinition, FragmentSpread,
    InlineFragment, Name, OperationDefinition, OperationKind, Pos, Selection, SelectionSet,
    TypeRef, Value, VariableDefinition, VariableRef,
};
use graphql_varcheck::diag::{Diag, DiagSeverity};

// ============================================================================
// Position and Token Helpers
// ============================================================================

/// Shorthand for a 1-indexed position.
pub fn pos(line: usize, column: usize) -> Pos {
    Pos::new(line, column)
}

/// A name token at a throwaway position, for tokens no assertion looks at.
pub fn name(value: &str) -> Name {
    Name::new(value, pos(1, 1))
}

/// A `$name` usage value at an explicit position.
pub fn var(var_name: &str, line: usize, column: usize) -> Value {
    Value::Variable(VariableRef::new(var_name, pos(line, column)))
}

/// A `name: value` argument.
pub fn arg(arg_name: &str, value: Value) -> Argument {
    Argument {
        name: name(arg_name),
        value,
    }
}

/// A `@name(args)` directive.
pub fn directive(directive_name: &str, arguments: Vec<Argument>) -> Directive {
    Directive {
        name: name(directive_name),
        arguments,
    }
}

// ============================================================================
// Selection Builders
// ============================================================================

/// A leaf field with no arguments.
pub fn leaf(field_name: &str) -> Selection {
    field(field_name, vec![])
}

/// A leaf field with arguments.
pub fn field(field_name: &str, arguments: Vec<Argument>) -> Selection {
    Selection::Field(Field {
        alias: None,
        name: name(field_name),
        arguments,
        directives: vec![],
        selection_set: SelectionSet::default(),
    })
}

/// A field with arguments and a nested selection set.
pub fn parent(field_name: &str, arguments: Vec<Argument>, children: Vec<Selection>) -> Selection {
    Selection::Field(Field {
        alias: None,
        name: name(field_name),
        arguments,
        directives: vec![],
        selection_set: SelectionSet::new(children),
    })
}

/// A field carrying directives.
pub fn directed_field(field_name: &str, directives: Vec<Directive>) -> Selection {
    Selection::Field(Field {
        alias: None,
        name: name(field_name),
        arguments: vec![],
        directives,
        selection_set: SelectionSet::default(),
    })
}

/// A `...Target` fragment spread.
pub fn spread(target: &str) -> Selection {
    Selection::FragmentSpread(FragmentSpread {
        fragment_name: name(target),
        directives: vec![],
    })
}

/// A `...Target @dir(...)` fragment spread with directives.
pub fn directed_spread(target: &str, directives: Vec<Directive>) -> Selection {
    Selection::FragmentSpread(FragmentSpread {
        fragment_name: name(target),
        directives,
    })
}

/// A `... on T { ... }` inline fragment.
pub fn inline(children: Vec<Selection>) -> Selection {
    Selection::InlineFragment(InlineFragment {
        type_condition: Some("T".into()),
        directives: vec![],
        selection_set: SelectionSet::new(children),
    })
}

// ============================================================================
// Definition Builders
// ============================================================================

/// A `$name: String` variable definition.
pub fn var_def(var_name: &str) -> VariableDefinition {
    VariableDefinition {
        name: name(var_name),
        var_type: TypeRef::Named("String".into()),
        default_value: None,
    }
}

/// A named query operation; the name token sits at the given position.
pub fn query(
    op_name: &str,
    name_pos: Pos,
    variable_definitions: Vec<VariableDefinition>,
    selections: Vec<Selection>,
) -> Definition {
    Definition::Operation(OperationDefinition {
        kind: OperationKind::Query,
        name: Some(Name::new(op_name, name_pos)),
        variable_definitions,
        directives: vec![],
        selection_set: SelectionSet::new(selections),
    })
}

/// An anonymous query operation.
pub fn anonymous_query(
    variable_definitions: Vec<VariableDefinition>,
    selections: Vec<Selection>,
) -> Definition {
    Definition::Operation(OperationDefinition {
        kind: OperationKind::Query,
        name: None,
        variable_definitions,
        directives: vec![],
        selection_set: SelectionSet::new(selections),
    })
}

/// A fragment definition on type `T`.
pub fn fragment(fragment_name: &str, selections: Vec<Selection>) -> Definition {
    Definition::Fragment(FragmentDefinition {
        name: name(fragment_name),
        type_condition: "T".into(),
        directives: vec![],
        selection_set: SelectionSet::new(selections),
    })
}

/// A document from its definitions.
pub fn doc(definitions: Vec<Definition>) -> Document {
    Document::new(definitions)
}

// ============================================================================
// Diagnostic Assertion Helpers
// ============================================================================

/// Format diagnostics for display in assertion messages.
pub fn format_diagnostics(diags: &[Diag]) -> String {
    diags
        .iter()
        .map(|diag| format!("{:?}", diag))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Assert the unattributed shape: one location, template message.
pub fn assert_undefined(diag: &Diag, var_name: &str, usage: Pos) {
    assert_eq!(
        diag.message,
        format!("Variable \"${}\" is not defined.", var_name),
        "unexpected message in {:?}",
        diag
    );
    assert_eq!(diag.severity, DiagSeverity::Error);
    assert_eq!(
        diag.locations(),
        vec![usage],
        "unexpected locations in {:?}",
        diag
    );
}

/// Assert the attributed shape: [usage, operation-name] locations, template
/// message naming the operation.
pub fn assert_undefined_in_operation(
    diag: &Diag,
    var_name: &str,
    op_name: &str,
    usage: Pos,
    op_pos: Pos,
) {
    assert_eq!(
        diag.message,
        format!(
            "Variable \"${}\" is not defined by operation \"{}\".",
            var_name, op_name
        ),
        "unexpected message in {:?}",
        diag
    );
    assert_eq!(diag.severity, DiagSeverity::Error);
    assert_eq!(
        diag.locations(),
        vec![usage, op_pos],
        "unexpected locations in {:?}",
        diag
    );
}
