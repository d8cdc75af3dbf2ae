//! Fragment usage index: memoized variable-usage expansion per fragment.
//!
//! For each named fragment the index computes, lazily and at most once per
//! validation run, the ordered sequence of variable usages reachable from the
//! fragment's own content with nested spreads expanded inline. Cyclic
//! fragment graphs are traversed safely: a spread naming a fragment that is
//! already being expanded contributes nothing at that point.

use std::collections::HashMap;
use std::rc::Rc;

use log::trace;
use smol_str::SmolStr;

use crate::ast::{Directive, Document, FragmentDefinition, Pos, Selection, SelectionSet, Value};

/// A single variable-usage occurrence: the referenced name and the source
/// position of its `$` token.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableUsage {
    pub name: SmolStr,
    pub pos: Pos,
}

/// Memo slot for one fragment name.
///
/// `InProgress` marks names on the active expansion path; re-entering one is
/// a cycle and contributes no usages.
enum Slot {
    InProgress,
    Done(Rc<[VariableUsage]>),
}

/// Lazily computes and memoizes the variable usages reachable from each
/// fragment in a document.
///
/// The index is scoped to one validation run: it borrows the document, is
/// consulted by every per-operation check of that run, and is discarded with
/// the run. Each fragment's sequence is computed at most once and shared by
/// every operation that reaches it.
pub struct FragmentUsageIndex<'doc> {
    fragments: HashMap<&'doc str, &'doc FragmentDefinition>,
    cache: HashMap<SmolStr, Slot>,
}

impl<'doc> FragmentUsageIndex<'doc> {
    /// Builds the index over every fragment definition in the document.
    pub fn new(document: &'doc Document) -> Self {
        let fragments = document
            .fragments()
            .map(|fragment| (fragment.name.as_str(), fragment))
            .collect();
        Self {
            fragments,
            cache: HashMap::new(),
        }
    }

    /// Returns the ordered usage sequence reachable from the named fragment.
    ///
    /// The sequence matches what a full inline expansion of the fragment's
    /// content would produce, truncated at cyclic re-entries. Results are
    /// memoized; repeated queries return the same shared slice. A name that
    /// is currently being expanded, or that names no fragment in the
    /// document, yields an empty sequence.
    pub fn usages_of(&mut self, name: &str) -> Rc<[VariableUsage]> {
        match self.cache.get(name) {
            Some(Slot::Done(usages)) => {
                trace!("fragment usage cache hit: {}", name);
                return Rc::clone(usages);
            }
            Some(Slot::InProgress) => {
                trace!("cyclic spread of fragment {} short-circuited", name);
                return empty_usages();
            }
            None => {}
        }

        let Some(fragment) = self.fragments.get(name).copied() else {
            trace!("spread of unknown fragment {} contributes no usages", name);
            return empty_usages();
        };

        self.cache
            .insert(fragment.name.value.clone(), Slot::InProgress);

        let mut usages = Vec::new();
        collect_directives(&fragment.directives, &mut usages);
        self.collect_selection_set(&fragment.selection_set, &mut usages);

        let usages: Rc<[VariableUsage]> = usages.into();
        self.cache
            .insert(fragment.name.value.clone(), Slot::Done(Rc::clone(&usages)));
        usages
    }

    /// Walks a selection set in document order, appending every variable
    /// usage it can reach and expanding fragment spreads through the cache.
    fn collect_selection_set(&mut self, set: &SelectionSet, out: &mut Vec<VariableUsage>) {
        for selection in &set.items {
            match selection {
                Selection::Field(field) => {
                    for argument in &field.arguments {
                        collect_value(&argument.value, out);
                    }
                    collect_directives(&field.directives, out);
                    self.collect_selection_set(&field.selection_set, out);
                }
                Selection::InlineFragment(inline) => {
                    collect_directives(&inline.directives, out);
                    self.collect_selection_set(&inline.selection_set, out);
                }
                Selection::FragmentSpread(spread) => {
                    collect_directives(&spread.directives, out);
                    let nested = self.usages_of(spread.fragment_name.as_str());
                    out.extend(nested.iter().cloned());
                }
            }
        }
    }
}

/// Appends the variable references inside a value, in document order, at any
/// nesting depth.
pub(super) fn collect_value(value: &Value, out: &mut Vec<VariableUsage>) {
    match value {
        Value::Variable(var) => out.push(VariableUsage {
            name: var.name.clone(),
            pos: var.pos,
        }),
        Value::List(items) => {
            for item in items {
                collect_value(item, out);
            }
        }
        Value::Object(fields) => {
            for (_, field_value) in fields {
                collect_value(field_value, out);
            }
        }
        Value::Int(_)
        | Value::Float(_)
        | Value::String(_)
        | Value::Boolean(_)
        | Value::Null
        | Value::Enum(_) => {}
    }
}

/// Appends the variable references inside a directive list's argument values.
pub(super) fn collect_directives(directives: &[Directive], out: &mut Vec<VariableUsage>) {
    for directive in directives {
        for argument in &directive.arguments {
            collect_value(&argument.value, out);
        }
    }
}

fn empty_usages() -> Rc<[VariableUsage]> {
    Rc::from(Vec::new())
}
