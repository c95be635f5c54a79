use std::fmt;
use std::mem;

use crate::{
    ast::{BinOp, Expr, Token, UnaryOp},
    lexer::{LexError, Lexer},
};

/// Syntactic error: the token stream does not match any grammar production
/// at the point reached.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxError {
    /// The token that could not start or continue a production.
    pub token: Token,
    /// Character offset of the offending token.
    pub position: usize,
    /// What would have been accepted instead.
    pub expected: &'static str,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unexpected token {:?} at position {}: expected {}",
            self.token, self.position, self.expected
        )
    }
}

impl std::error::Error for SyntaxError {}

/// Errors surfaced by [`parse`](crate::parse): either the lexer or the
/// parser rejected the input.
///
/// The first error aborts the whole parse. There is no partial AST and no
/// multi-error collection; parsing is deterministic, so retrying the same
/// input fails identically.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Lexical error
    Lex(LexError),
    /// Grammar error
    Syntax(SyntaxError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Lex(e) => write!(f, "{}", e),
            ParseError::Syntax(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Lex(e) => Some(e),
            ParseError::Syntax(e) => Some(e),
        }
    }
}

impl From<LexError> for ParseError {
    fn from(e: LexError) -> Self {
        ParseError::Lex(e)
    }
}

impl From<SyntaxError> for ParseError {
    fn from(e: SyntaxError) -> Self {
        ParseError::Syntax(e)
    }
}

pub struct Parser {
    lexer: Lexer,
    current_token: Token,
    current_position: usize,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Result<Self, ParseError> {
        let current_token = lexer.next_token()?;
        let current_position = lexer.token_start();
        Ok(Parser {
            lexer,
            current_token,
            current_position,
        })
    }

    fn advance(&mut self) -> Result<(), ParseError> {
        self.current_token = self.lexer.next_token()?;
        self.current_position = self.lexer.token_start();
        Ok(())
    }

    fn check(&self, token: &Token) -> bool {
        mem::discriminant(&self.current_token) == mem::discriminant(token)
    }

    fn expect(&mut self, expected: Token, description: &'static str) -> Result<(), ParseError> {
        if !self.check(&expected) {
            return Err(self.syntax_error(description));
        }
        self.advance()
    }

    fn syntax_error(&self, expected: &'static str) -> ParseError {
        ParseError::Syntax(SyntaxError {
            token: self.current_token.clone(),
            position: self.current_position,
            expected,
        })
    }

    /// Parse primary expressions (atoms): literal values, arrays, and
    /// parenthesized sub-expressions.
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        match mem::replace(&mut self.current_token, Token::Eof) {
            // Literals
            Token::Number(text) => {
                self.advance()?;
                Ok(Expr::Number(text))
            }
            Token::Boolean(text) => {
                self.advance()?;
                Ok(Expr::Boolean(text))
            }
            Token::Primitive(text) => {
                self.advance()?;
                Ok(Expr::Primitive(text))
            }
            Token::String(text) => {
                self.advance()?;
                Ok(Expr::String(text))
            }
            Token::Symbol(text) => {
                self.advance()?;
                Ok(Expr::Symbol(text))
            }

            // Grouping is kept in the tree, not just used for precedence
            Token::LParen => {
                self.advance()?;
                let inner = self.parse_expression()?;
                self.expect(Token::RParen, "')'")?;
                Ok(Expr::Expression(Box::new(inner)))
            }

            // Array literals
            Token::LBracket => {
                self.advance()?;
                self.parse_array()
            }

            token => {
                // Put the token back so the error names what was actually seen
                self.current_token = token;
                Err(self.syntax_error("a value, '-', 'not', '(' or '['"))
            }
        }
    }

    /// Array elements must reduce to a literal VALUE production: no nested
    /// arrays, no operators, no parenthesized expressions.
    fn parse_value(&mut self) -> Result<Expr, ParseError> {
        match mem::replace(&mut self.current_token, Token::Eof) {
            Token::Number(text) => {
                self.advance()?;
                Ok(Expr::Number(text))
            }
            Token::Boolean(text) => {
                self.advance()?;
                Ok(Expr::Boolean(text))
            }
            Token::Primitive(text) => {
                self.advance()?;
                Ok(Expr::Primitive(text))
            }
            Token::String(text) => {
                self.advance()?;
                Ok(Expr::String(text))
            }
            Token::Symbol(text) => {
                self.advance()?;
                Ok(Expr::Symbol(text))
            }
            token => {
                self.current_token = token;
                Err(self.syntax_error("a literal value"))
            }
        }
    }

    fn parse_array(&mut self) -> Result<Expr, ParseError> {
        let mut elements = vec![];

        if !self.check(&Token::RBracket) {
            loop {
                elements.push(self.parse_value()?);

                if self.check(&Token::Comma) {
                    self.advance()?;
                } else {
                    break;
                }
            }
        }

        self.expect(Token::RBracket, "']' or ','")?;
        Ok(Expr::Array(elements))
    }

    /// Prefix operators bind tightest: `not a == b` parses as
    /// `(not a) == b`.
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        match &self.current_token {
            Token::Not => {
                self.advance()?;
                let operand = self.parse_unary()?;
                Ok(Expr::UnaryOp {
                    op: UnaryOp::Not,
                    operand: Box::new(operand),
                })
            }
            Token::Minus => {
                self.advance()?;
                let operand = self.parse_unary()?;
                Ok(Expr::UnaryOp {
                    op: UnaryOp::Neg,
                    operand: Box::new(operand),
                })
            }
            _ => self.parse_primary(),
        }
    }

    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;

        loop {
            let op = match &self.current_token {
                Token::LtEq => BinOp::LessEqual,
                Token::GtEq => BinOp::GreaterEqual,
                Token::Match => BinOp::Match,
                Token::Lt => BinOp::LessThan,
                Token::Gt => BinOp::GreaterThan,
                _ => break,
            };

            self.advance()?;
            let right = self.parse_unary()?;

            left = Expr::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_equality(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_comparison()?;

        loop {
            let op = match &self.current_token {
                Token::EqEq => BinOp::Equal,
                Token::NotEq => BinOp::NotEqual,
                _ => break,
            };

            self.advance()?;
            let right = self.parse_comparison()?;

            left = Expr::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_in(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_equality()?;

        while self.check(&Token::In) {
            self.advance()?;
            let right = self.parse_equality()?;

            left = Expr::BinaryOp {
                op: BinOp::In,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_in()?;

        while self.check(&Token::And) {
            self.advance()?;
            let right = self.parse_in()?;

            left = Expr::BinaryOp {
                op: BinOp::And,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_or(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_and()?;

        while self.check(&Token::Or) {
            self.advance()?;
            let right = self.parse_and()?;

            left = Expr::BinaryOp {
                op: BinOp::Or,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    pub fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_or()
    }

    /// Parse a complete expression, consuming the input through end of
    /// file. Trailing tokens are a syntax error.
    pub fn parse(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_expression()?;
        if !self.check(&Token::Eof) {
            return Err(self.syntax_error("end of input"));
        }
        Ok(expr)
    }
}
