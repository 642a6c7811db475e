//! Expression editor state machine.
//!
//! Keypad symbols arrive one at a time and the editor keeps the expression
//! string well-formed after every press. The guards are tokenized and
//! deterministic, applied in a fixed order per symbol kind:
//!
//! - digit: if the current numeric run is exactly `"0"`, the zero is
//!   replaced before the digit is appended
//! - decimal point: a run that already contains `.` ignores the press;
//!   a point at the start of a run becomes `0.`
//! - operator: a press after another operator collapses the pending
//!   operator, except that `-` after `+`, `*`, or `/` is kept as the sign
//!   of the next operand
//!
//! Evaluation failures move the editor into [`EditorState::Error`]. The
//! error state renders the `Error` token and ignores every input except
//! [`ExpressionEditor::clear`].

use crate::core::evaluator::{Evaluator, ExpressionEvaluator};
use crate::core::history::History;
use crate::core::{format_number, CalcError, CalcResult, Operation};

/// One keypad input symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// A digit 0-9
    Digit(u8),
    /// The decimal point
    Dot,
    /// A binary operator
    Op(Operation),
}

impl Symbol {
    /// Parses a symbol from its character form
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '0'..='9' => Some(Self::Digit(ch as u8 - b'0')),
            '.' => Some(Self::Dot),
            _ => match Operation::from_char(ch) {
                Some(op) => Some(Self::Op(op)),
                None => None,
            },
        }
    }

    /// Returns the character form of this symbol
    ///
    /// Digits above 9 have no character form and map to `'?'`.
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Digit(d) if d <= 9 => (b'0' + d) as char,
            Self::Digit(_) => '?',
            Self::Dot => '.',
            Self::Op(op) => op.symbol(),
        }
    }
}

/// Lifecycle of the expression under edit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorState {
    /// Nothing typed yet (or just cleared)
    #[default]
    Empty,
    /// Symbols accepted, no evaluation since the last input
    Building,
    /// The expression ends in `=` and the output holds its result
    PostEquals,
    /// Evaluation failed; only clear leaves this state
    Error,
}

/// The `Error` token rendered on the output line while in the error state
pub const ERROR_TOKEN: &str = "Error";

/// Keypad-driven expression editor
///
/// Owns the expression string, the output line, and the evaluation history.
/// The evaluator is a type parameter so tests can substitute canned results.
#[derive(Debug)]
pub struct ExpressionEditor<E = Evaluator> {
    expression: String,
    output: String,
    state: EditorState,
    last_error: Option<CalcError>,
    evaluator: E,
    history: History,
}

impl ExpressionEditor {
    /// Creates an editor backed by the built-in evaluator
    #[must_use]
    pub fn new() -> Self {
        Self::with_evaluator(Evaluator::new())
    }
}

impl Default for ExpressionEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ExpressionEvaluator> ExpressionEditor<E> {
    /// Creates an editor backed by the given evaluator
    #[must_use]
    pub fn with_evaluator(evaluator: E) -> Self {
        Self {
            expression: String::new(),
            output: "0".to_string(),
            state: EditorState::Empty,
            last_error: None,
            evaluator,
            history: History::new(),
        }
    }

    /// Returns the current expression string
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Returns the output line
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Returns the current editor state
    #[must_use]
    pub const fn state(&self) -> EditorState {
        self.state
    }

    /// Returns the error from the most recent failed evaluation
    #[must_use]
    pub const fn last_error(&self) -> Option<&CalcError> {
        self.last_error.as_ref()
    }

    /// Returns the evaluation history
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Discards the evaluation history without touching the expression
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Appends one symbol, subject to the guard rules
    ///
    /// In the error state every symbol is ignored. After an equals press a
    /// digit or point starts a fresh expression while an operator continues
    /// from the previous result.
    pub fn append(&mut self, symbol: Symbol) {
        match self.state {
            EditorState::Error => return,
            EditorState::PostEquals => self.start_from_result(symbol),
            EditorState::Empty | EditorState::Building => match symbol {
                Symbol::Digit(d) => self.append_digit(d),
                Symbol::Dot => self.append_dot(),
                Symbol::Op(op) => self.append_operator(op),
            },
        }
        self.refresh_display();
    }

    /// Evaluates the current expression
    ///
    /// On success the output shows the formatted result, the expression
    /// gains a trailing `=`, and the calculation is recorded in the history.
    /// Pressing equals again re-evaluates without recording a duplicate.
    /// On failure the editor enters the error state.
    pub fn evaluate(&mut self) -> CalcResult<f64> {
        if self.state == EditorState::Error {
            return Err(self
                .last_error
                .clone()
                .unwrap_or(CalcError::EmptyExpression));
        }

        let expr = self.expression.trim_end_matches('=').to_string();
        if expr.is_empty() {
            return Err(CalcError::EmptyExpression);
        }

        match self.evaluator.evaluate_expression(&expr) {
            Ok(value) => {
                if self.state != EditorState::PostEquals {
                    self.history.record(&expr, value);
                }
                self.output = format_number(value);
                if !self.expression.ends_with('=') {
                    self.expression.push('=');
                }
                self.state = EditorState::PostEquals;
                self.last_error = None;
                Ok(value)
            }
            Err(e) => {
                self.state = EditorState::Error;
                self.output = ERROR_TOKEN.to_string();
                self.last_error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Removes the last character of the expression and resets the output
    /// line to `0`
    ///
    /// Ignored in the error state. After an equals press this removes the
    /// trailing `=` and returns to editing.
    pub fn backspace(&mut self) {
        if self.state == EditorState::Error {
            return;
        }
        self.expression.pop();
        self.state = if self.expression.is_empty() {
            EditorState::Empty
        } else {
            EditorState::Building
        };
        self.output = "0".to_string();
    }

    /// Resets the expression, output, and error state
    ///
    /// The history is kept; use [`Self::clear_history`] to drop it.
    pub fn clear(&mut self) {
        self.expression.clear();
        self.last_error = None;
        self.refresh_display();
    }

    /// Starts a new expression after an equals press
    fn start_from_result(&mut self, symbol: Symbol) {
        match symbol {
            Symbol::Digit(d) if d <= 9 => {
                self.expression = ((b'0' + d) as char).to_string();
            }
            Symbol::Digit(_) => {}
            Symbol::Dot => {
                self.expression = "0.".to_string();
            }
            Symbol::Op(op) => {
                self.expression = format!("{}{}", self.output, op.symbol());
            }
        }
    }

    fn append_digit(&mut self, digit: u8) {
        let Some(ch) = char::from_digit(u32::from(digit), 10) else {
            return;
        };
        if last_run(&self.expression) == "0" {
            self.expression.pop();
        }
        self.expression.push(ch);
    }

    fn append_dot(&mut self) {
        let after_operator = match self.expression.chars().last() {
            None => true,
            Some(ch) => is_operator_char(ch),
        };
        if after_operator {
            self.expression.push_str("0.");
            return;
        }
        if last_run(&self.expression).contains('.') {
            return;
        }
        self.expression.push('.');
    }

    fn append_operator(&mut self, op: Operation) {
        let Some(last) = self.expression.chars().last() else {
            // Only a leading minus makes sense on an empty expression
            if op == Operation::Subtract {
                self.expression.push('-');
            }
            return;
        };

        if !is_operator_char(last) {
            self.expression.push(op.symbol());
            return;
        }

        // Minus after +, *, or / is the sign of the next operand
        if op == Operation::Subtract && last != '-' {
            self.expression.push('-');
            return;
        }

        // Collapse the pending operator (and any sign) with the new one
        while self
            .expression
            .chars()
            .last()
            .is_some_and(is_operator_char)
        {
            self.expression.pop();
        }
        if self.expression.is_empty() {
            if op == Operation::Subtract {
                self.expression.push('-');
            }
        } else {
            self.expression.push(op.symbol());
        }
    }

    /// Syncs output and state with the expression after an edit
    fn refresh_display(&mut self) {
        if self.expression.is_empty() {
            self.state = EditorState::Empty;
            self.output = "0".to_string();
        } else {
            self.state = EditorState::Building;
            self.output = self.expression.clone();
        }
    }
}

fn is_operator_char(ch: char) -> bool {
    matches!(ch, '+' | '-' | '*' | '/')
}

/// Returns the numeric run after the last operator (the whole expression
/// when no operator is present)
fn last_run(expr: &str) -> &str {
    match expr.rfind(is_operator_char) {
        Some(i) => &expr[i + 1..],
        None => expr,
    }
}
