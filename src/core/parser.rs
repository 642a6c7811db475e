//! Tokenizer and recursive descent parser for keypad expressions.
//!
//! Deliberately narrow: numeric literals and the four binary operators are
//! the whole input language. Anything else is a parse error, never an
//! escape hatch into a general-purpose evaluator.

use crate::core::{CalcError, CalcResult, Operation};

/// Token types from lexical analysis
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeric literal
    Number(f64),
    /// Binary operator
    Operator(Operation),
}

/// Abstract Syntax Tree node
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    /// Numeric literal
    Number(f64),
    /// Binary operation
    BinaryOp {
        /// Left operand
        left: Box<AstNode>,
        /// Operator
        op: Operation,
        /// Right operand
        right: Box<AstNode>,
    },
    /// Unary negation
    Negate(Box<AstNode>),
}

impl AstNode {
    /// Creates a new number node
    #[must_use]
    pub fn number(value: f64) -> Self {
        Self::Number(value)
    }

    /// Creates a new binary operation node
    #[must_use]
    pub fn binary(left: AstNode, op: Operation, right: AstNode) -> Self {
        Self::BinaryOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Creates a new negation node
    #[must_use]
    pub fn negate(inner: AstNode) -> Self {
        Self::Negate(Box::new(inner))
    }
}

/// Tokenizer for converting expression strings to tokens
#[derive(Debug)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    /// Creates a new tokenizer for the given input
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Tokenizes the entire input
    pub fn tokenize(&mut self) -> CalcResult<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Returns the next token, or None if at end of input
    pub fn next_token(&mut self) -> CalcResult<Option<Token>> {
        self.skip_whitespace();

        let Some(ch) = self.current_char() else {
            return Ok(None);
        };

        let token = match ch {
            '0'..='9' | '.' => self.read_number()?,
            _ => {
                if let Some(op) = Operation::from_char(ch) {
                    self.advance();
                    Token::Operator(op)
                } else {
                    return Err(CalcError::ParseError(format!(
                        "Unexpected character: '{ch}'"
                    )));
                }
            }
        };

        Ok(Some(token))
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.pos += ch.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_number(&mut self) -> CalcResult<Token> {
        let start = self.pos;
        let mut has_dot = false;

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                self.advance();
            } else if ch == '.' && !has_dot {
                has_dot = true;
                self.advance();
            } else {
                break;
            }
        }

        let num_str = &self.input[start..self.pos];
        let value: f64 = num_str
            .parse()
            .map_err(|_| CalcError::ParseError(format!("Invalid number: '{num_str}'")))?;

        Ok(Token::Number(value))
    }
}

/// Recursive descent parser for expressions
///
/// Grammar:
/// ```text
/// expression ::= term (('+' | '-') term)*
/// term       ::= factor (('*' | '/') factor)*
/// factor     ::= '-' factor | NUMBER
/// ```
#[derive(Debug)]
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Creates a new parser from tokens
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parses a string expression into an AST
    pub fn parse_str(input: &str) -> CalcResult<AstNode> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(CalcError::EmptyExpression);
        }

        let mut tokenizer = Tokenizer::new(trimmed);
        let tokens = tokenizer.tokenize()?;

        if tokens.is_empty() {
            return Err(CalcError::EmptyExpression);
        }

        let mut parser = Self::new(tokens);
        let ast = parser.parse_expression()?;

        // Ensure all tokens consumed
        if parser.pos < parser.tokens.len() {
            return Err(CalcError::ParseError(format!(
                "Unexpected token at position {}",
                parser.pos
            )));
        }

        Ok(ast)
    }

    /// Parses tokens into an AST
    pub fn parse(&mut self) -> CalcResult<AstNode> {
        if self.tokens.is_empty() {
            return Err(CalcError::EmptyExpression);
        }
        self.parse_expression()
    }

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn parse_expression(&mut self) -> CalcResult<AstNode> {
        let mut left = self.parse_term()?;

        while let Some(token) = self.current() {
            let op = match token {
                Token::Operator(Operation::Add) => Operation::Add,
                Token::Operator(Operation::Subtract) => Operation::Subtract,
                _ => break,
            };
            self.advance();
            let right = self.parse_term()?;
            left = AstNode::binary(left, op, right);
        }

        Ok(left)
    }

    fn parse_term(&mut self) -> CalcResult<AstNode> {
        let mut left = self.parse_factor()?;

        while let Some(token) = self.current() {
            let op = match token {
                Token::Operator(Operation::Multiply) => Operation::Multiply,
                Token::Operator(Operation::Divide) => Operation::Divide,
                _ => break,
            };
            self.advance();
            let right = self.parse_factor()?;
            left = AstNode::binary(left, op, right);
        }

        Ok(left)
    }

    fn parse_factor(&mut self) -> CalcResult<AstNode> {
        // Handle unary minus
        if matches!(self.current(), Some(Token::Operator(Operation::Subtract))) {
            self.advance();
            let inner = self.parse_factor()?;
            return Ok(AstNode::negate(inner));
        }

        match self.advance() {
            Some(Token::Number(n)) => Ok(AstNode::number(*n)),
            Some(t) => Err(CalcError::ParseError(format!("Unexpected token: {t:?}"))),
            None => Err(CalcError::ParseError("Unexpected end of expression".into())),
        }
    }
}
