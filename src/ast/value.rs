//! Input value AST nodes.
//!
//! Values appear in argument positions (field arguments and directive
//! arguments) and nest arbitrarily through lists and input objects. Variable
//! references can occur at any depth inside a value.

use smol_str::SmolStr;

use crate::ast::Pos;

/// A `$name` reference to an operation variable inside a value position.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableRef {
    /// The referenced variable name, without the `$` sigil.
    pub name: SmolStr,
    /// Position of the `$` token.
    pub pos: Pos,
}

impl VariableRef {
    /// Creates a new variable reference.
    pub fn new(name: impl Into<SmolStr>, pos: Pos) -> Self {
        Self {
            name: name.into(),
            pos,
        }
    }
}

/// An input value in an argument position.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// `$name` variable reference
    Variable(VariableRef),
    /// Integer literal
    Int(i64),
    /// Float literal
    Float(f64),
    /// String literal
    String(String),
    /// Boolean literal
    Boolean(bool),
    /// `null` literal
    Null,
    /// Enum value literal
    Enum(SmolStr),
    /// List constructor `[v1, v2, ...]`
    List(Vec<Value>),
    /// Input object constructor `{key: v, ...}`; entries keep source order
    Object(Vec<(SmolStr, Value)>),
}
