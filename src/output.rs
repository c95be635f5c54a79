//! JSON serialization for parsed uniql expressions.
//!
//! The serialized form is the wire contract consumed by downstream
//! evaluators: every node becomes an object with a `type` tag and an
//! `arguments` array holding either child nodes or, for leaves, the literal
//! text.
//!
//! ```text
//! { "type": <Tag>, "arguments": [ <node> | <string>, ... ] }
//! ```
//!
//! Recognized tags: `NUMBER`, `BOOLEAN`, `PRIMITIVE`, `STRING`, `SYMBOL`,
//! `ARRAY`, `-`, `&&`, `||`, `IN`, `!`, `==`, `!=`, `MATCH`, `<=`, `>=`,
//! `<`, `>`, `EXPRESSION`.
//!
//! # Examples
//!
//! ```
//! use uniql::{parse, to_json_string};
//!
//! let ast = parse("foo == 10").unwrap();
//! assert_eq!(
//!     to_json_string(&ast),
//!     r#"{"arguments":[{"arguments":["foo"],"type":"SYMBOL"},{"arguments":["10"],"type":"NUMBER"}],"type":"=="}"#
//! );
//! ```

use serde_json::{Value, json};

use crate::ast::Expr;

/// Converts an expression tree into its JSON wire shape.
pub fn to_json(expr: &Expr) -> Value {
    match expr {
        Expr::Number(text) => json!({ "type": "NUMBER", "arguments": [text] }),
        Expr::Boolean(text) => json!({ "type": "BOOLEAN", "arguments": [text] }),
        Expr::Primitive(text) => json!({ "type": "PRIMITIVE", "arguments": [text] }),
        Expr::String(text) => json!({ "type": "STRING", "arguments": [text] }),
        Expr::Symbol(text) => json!({ "type": "SYMBOL", "arguments": [text] }),
        Expr::Array(elements) => json!({
            "type": "ARRAY",
            "arguments": elements.iter().map(to_json).collect::<Vec<_>>(),
        }),
        Expr::UnaryOp { op, operand } => json!({
            "type": op.tag(),
            "arguments": [to_json(operand)],
        }),
        Expr::BinaryOp { op, left, right } => json!({
            "type": op.tag(),
            "arguments": [to_json(left), to_json(right)],
        }),
        Expr::Expression(inner) => json!({
            "type": "EXPRESSION",
            "arguments": [to_json(inner)],
        }),
    }
}

/// Compact JSON rendering of an expression tree.
pub fn to_json_string(expr: &Expr) -> String {
    to_json(expr).to_string()
}

/// Pretty-printed JSON rendering with 2-space indentation.
pub fn to_json_string_pretty(expr: &Expr) -> String {
    serde_json::to_string_pretty(&to_json(expr)).unwrap()
}
