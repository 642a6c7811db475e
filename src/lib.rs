//! Keypad Calculator
//!
//! A keypad-driven arithmetic calculator engine: an expression editor that
//! keeps the typed expression well-formed symbol by symbol, a narrowly-scoped
//! infix evaluator (four operators, numeric literals, nothing else), and a
//! mock-DOM presentation layer with a two-line display and a light/dark
//! theme toggle.
//!
//! The editor is the interesting part. Digits, a decimal point, and the four
//! binary operators arrive one at a time from button presses; guard rules
//! reject duplicate decimal points inside a numeric run, collapse consecutive
//! operators (while still allowing `-` to introduce a negative operand),
//! insert the implicit zero before a leading decimal point, and normalize
//! leading zeros. Evaluation errors put the editor into an explicit error
//! state that only `clear` leaves.
//!
//! # Example
//!
//! ```rust
//! use keypad_calc::prelude::*;
//!
//! let mut editor = ExpressionEditor::new();
//! for ch in "12+7".chars() {
//!     editor.append(Symbol::from_char(ch).unwrap());
//! }
//! assert_eq!(editor.evaluate().unwrap(), 19.0);
//! assert_eq!(editor.expression(), "12+7=");
//! assert_eq!(editor.output(), "19");
//! ```

// Allow common test patterns in this crate
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod app;
pub mod core;
pub mod editor;
pub mod ui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::app::CalculatorApp;
    pub use crate::core::evaluator::{Evaluator, ExpressionEvaluator};
    pub use crate::core::history::{History, HistoryEntry};
    pub use crate::core::parser::{AstNode, Parser, Token, Tokenizer};
    pub use crate::core::{format_number, CalcError, CalcResult, Operation};
    pub use crate::editor::{EditorState, ExpressionEditor, Symbol};
    pub use crate::ui::dom::{DomElement, DomEvent, MockDom};
    pub use crate::ui::keypad::{ButtonAction, Keypad, KeypadButton};
    pub use crate::ui::theme::ThemeMode;
}
