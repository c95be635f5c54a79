// tests/ast_json_tests.rs
//
// The serialized AST is a wire contract consumed by downstream evaluators,
// so these tests pin the exact JSON shape produced for each construct.

use serde_json::json;
use uniql::{parse, to_json};

fn ast(expression: &str) -> serde_json::Value {
    to_json(&parse(expression).expect("expression should parse"))
}

// ============================================================================
// Comparisons
// ============================================================================

#[test]
fn comparison_lt() {
    assert_eq!(
        ast("foo < 10"),
        json!({
            "type": "<",
            "arguments": [
                { "type": "SYMBOL", "arguments": [ "foo" ] },
                { "type": "NUMBER", "arguments": [ "10" ] },
            ]
        })
    );
}

#[test]
fn comparison_le() {
    assert_eq!(
        ast("foo <= 10"),
        json!({
            "type": "<=",
            "arguments": [
                { "type": "SYMBOL", "arguments": [ "foo" ] },
                { "type": "NUMBER", "arguments": [ "10" ] },
            ]
        })
    );
}

#[test]
fn comparison_gt() {
    assert_eq!(
        ast("foo > 10"),
        json!({
            "type": ">",
            "arguments": [
                { "type": "SYMBOL", "arguments": [ "foo" ] },
                { "type": "NUMBER", "arguments": [ "10" ] },
            ]
        })
    );
}

#[test]
fn comparison_ge() {
    assert_eq!(
        ast("foo >= 10"),
        json!({
            "type": ">=",
            "arguments": [
                { "type": "SYMBOL", "arguments": [ "foo" ] },
                { "type": "NUMBER", "arguments": [ "10" ] },
            ]
        })
    );
}

#[test]
fn comparison_eq() {
    assert_eq!(
        ast("foo == 10"),
        json!({
            "type": "==",
            "arguments": [
                { "type": "SYMBOL", "arguments": [ "foo" ] },
                { "type": "NUMBER", "arguments": [ "10" ] },
            ]
        })
    );
}

#[test]
fn comparison_ne() {
    assert_eq!(
        ast("foo != 10"),
        json!({
            "type": "!=",
            "arguments": [
                { "type": "SYMBOL", "arguments": [ "foo" ] },
                { "type": "NUMBER", "arguments": [ "10" ] },
            ]
        })
    );
}

#[test]
fn comparison_match() {
    assert_eq!(
        ast(r#"foo ~= "hi""#),
        json!({
            "type": "MATCH",
            "arguments": [
                { "type": "SYMBOL", "arguments": [ "foo" ] },
                { "type": "STRING", "arguments": [ "hi" ] },
            ]
        })
    );
}

// ============================================================================
// Logical Operators
// ============================================================================

#[test]
fn logical_and() {
    assert_eq!(
        ast("foo and bar"),
        json!({
            "type": "&&",
            "arguments": [
                { "type": "SYMBOL", "arguments": [ "foo" ] },
                { "type": "SYMBOL", "arguments": [ "bar" ] },
            ]
        })
    );
}

#[test]
fn logical_or() {
    assert_eq!(
        ast("foo or bar"),
        json!({
            "type": "||",
            "arguments": [
                { "type": "SYMBOL", "arguments": [ "foo" ] },
                { "type": "SYMBOL", "arguments": [ "bar" ] },
            ]
        })
    );
}

#[test]
fn logical_and_is_left_associative() {
    assert_eq!(
        ast("a and b and c"),
        json!({
            "type": "&&",
            "arguments": [
                {
                    "type": "&&",
                    "arguments": [
                        { "type": "SYMBOL", "arguments": [ "a" ] },
                        { "type": "SYMBOL", "arguments": [ "b" ] },
                    ]
                },
                { "type": "SYMBOL", "arguments": [ "c" ] },
            ]
        })
    );
}

#[test]
fn logical_in() {
    assert_eq!(
        ast(r#""foo" in [ "foo", "bar", "baz", 1, 2, 3 ]"#),
        json!({
            "type": "IN",
            "arguments": [
                { "type": "STRING", "arguments": [ "foo" ] },
                {
                    "type": "ARRAY",
                    "arguments": [
                        { "type": "STRING", "arguments": [ "foo" ] },
                        { "type": "STRING", "arguments": [ "bar" ] },
                        { "type": "STRING", "arguments": [ "baz" ] },
                        { "type": "NUMBER", "arguments": [ "1" ] },
                        { "type": "NUMBER", "arguments": [ "2" ] },
                        { "type": "NUMBER", "arguments": [ "3" ] },
                    ]
                },
            ]
        })
    );
}

#[test]
fn logical_not() {
    assert_eq!(
        ast("foo and not bar"),
        json!({
            "type": "&&",
            "arguments": [
                { "type": "SYMBOL", "arguments": [ "foo" ] },
                {
                    "type": "!",
                    "arguments": [
                        { "type": "SYMBOL", "arguments": [ "bar" ] },
                    ]
                },
            ]
        })
    );
}

// ============================================================================
// Unary Minus
// ============================================================================

#[test]
fn minus_symbol_is_unary_minus() {
    assert_eq!(
        ast("-foo"),
        json!({
            "type": "-",
            "arguments": [
                { "type": "SYMBOL", "arguments": [ "foo" ] },
            ]
        })
    );
}

#[test]
fn minus_number_is_number() {
    assert_eq!(
        ast("-10"),
        json!({
            "type": "NUMBER",
            "arguments": [ "-10" ],
        })
    );
}

// ============================================================================
// Primitives and Arrays
// ============================================================================

#[test]
fn boolean_and_primitive_leaves() {
    assert_eq!(
        ast("foo == true"),
        json!({
            "type": "==",
            "arguments": [
                { "type": "SYMBOL", "arguments": [ "foo" ] },
                { "type": "BOOLEAN", "arguments": [ "true" ] },
            ]
        })
    );
    assert_eq!(
        ast("foo != null"),
        json!({
            "type": "!=",
            "arguments": [
                { "type": "SYMBOL", "arguments": [ "foo" ] },
                { "type": "PRIMITIVE", "arguments": [ "null" ] },
            ]
        })
    );
}

#[test]
fn empty_array() {
    assert_eq!(
        ast("[]"),
        json!({
            "type": "ARRAY",
            "arguments": [],
        })
    );
}

// ============================================================================
// Expressions
// ============================================================================

#[test]
fn expression_simple() {
    assert_eq!(
        ast("( foo )"),
        json!({
            "type": "EXPRESSION",
            "arguments": [
                { "type": "SYMBOL", "arguments": [ "foo" ] },
            ]
        })
    );
}

#[test]
fn expression_around_and() {
    assert_eq!(
        ast("( foo and bar )"),
        json!({
            "type": "EXPRESSION",
            "arguments": [
                {
                    "type": "&&",
                    "arguments": [
                        { "type": "SYMBOL", "arguments": [ "foo" ] },
                        { "type": "SYMBOL", "arguments": [ "bar" ] },
                    ]
                },
            ]
        })
    );
}

#[test]
fn expression_grouping_in_or() {
    assert_eq!(
        ast("( foo and bar ) or baz"),
        json!({
            "type": "||",
            "arguments": [
                {
                    "type": "EXPRESSION",
                    "arguments": [
                        {
                            "type": "&&",
                            "arguments": [
                                { "type": "SYMBOL", "arguments": [ "foo" ] },
                                { "type": "SYMBOL", "arguments": [ "bar" ] },
                            ]
                        },
                    ]
                },
                { "type": "SYMBOL", "arguments": [ "baz" ] },
            ]
        })
    );
}

#[test]
fn expression_nested_wrappers_are_preserved() {
    assert_eq!(
        ast("( ( foo and bar ) or baz )"),
        json!({
            "type": "EXPRESSION",
            "arguments": [
                {
                    "type": "||",
                    "arguments": [
                        {
                            "type": "EXPRESSION",
                            "arguments": [
                                {
                                    "type": "&&",
                                    "arguments": [
                                        { "type": "SYMBOL", "arguments": [ "foo" ] },
                                        { "type": "SYMBOL", "arguments": [ "bar" ] },
                                    ]
                                },
                            ]
                        },
                        { "type": "SYMBOL", "arguments": [ "baz" ] },
                    ]
                },
            ]
        })
    );
}

#[test]
fn expression_grouping_on_both_sides() {
    assert_eq!(
        ast("( ( foo and bar ) or ( baz and yak ) )"),
        json!({
            "type": "EXPRESSION",
            "arguments": [
                {
                    "type": "||",
                    "arguments": [
                        {
                            "type": "EXPRESSION",
                            "arguments": [
                                {
                                    "type": "&&",
                                    "arguments": [
                                        { "type": "SYMBOL", "arguments": [ "foo" ] },
                                        { "type": "SYMBOL", "arguments": [ "bar" ] },
                                    ]
                                },
                            ]
                        },
                        {
                            "type": "EXPRESSION",
                            "arguments": [
                                {
                                    "type": "&&",
                                    "arguments": [
                                        { "type": "SYMBOL", "arguments": [ "baz" ] },
                                        { "type": "SYMBOL", "arguments": [ "yak" ] },
                                    ]
                                },
                            ]
                        },
                    ]
                },
            ]
        })
    );
}
