//! Parse uniql expressions and surface their AST

use super::CliError;
use crate::{Lexer, Parser, output};

/// Options for the parse/check commands
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The expression to parse
    pub expression: String,
    /// Only validate syntax, don't produce the AST
    pub syntax_only: bool,
}

/// Result of a check operation
#[derive(Debug)]
pub enum CheckResult {
    /// Syntax validation passed
    SyntaxValid,
    /// Expression parsed successfully, with the AST in its JSON wire shape
    Success(serde_json::Value),
}

/// Execute a uniql check operation
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let lexer = Lexer::new(&options.expression);
    let mut parser = Parser::new(lexer).map_err(CliError::Parse)?;
    let expr = parser.parse().map_err(CliError::Parse)?;

    if options.syntax_only {
        return Ok(CheckResult::SyntaxValid);
    }

    Ok(CheckResult::Success(output::to_json(&expr)))
}
