pub mod ast;
pub mod lexer;
pub mod output;
pub mod parser;

#[cfg(feature = "cli")]
pub mod cli;

pub use ast::{BinOp, Expr, Token, UnaryOp};
pub use lexer::{LexError, Lexer, tokenize};
pub use output::{to_json, to_json_string, to_json_string_pretty};
pub use parser::{ParseError, Parser, SyntaxError};

/// Parses a filter expression into its AST.
///
/// This is the single entry point: it composes [`Lexer`] and [`Parser`] and
/// either returns the root node or fails with the first error encountered.
/// There is no partial result.
///
/// # Examples
///
/// ```
/// use uniql::{Expr, parse};
///
/// let ast = parse("foo and not bar").unwrap();
/// assert!(matches!(ast, Expr::BinaryOp { .. }));
///
/// assert!(parse("foo <").is_err());
/// ```
pub fn parse(expression: &str) -> Result<Expr, ParseError> {
    let lexer = Lexer::new(expression);
    let mut parser = Parser::new(lexer)?;
    parser.parse()
}
