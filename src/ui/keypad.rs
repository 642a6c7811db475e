//! Keypad layout and button-to-action mapping.

use crate::core::Operation;
use crate::editor::Symbol;
use crate::ui::dom::DomElement;

/// What a button press means to the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Append a symbol to the expression
    Symbol(Symbol),
    /// Evaluate the expression
    Evaluate,
    /// Clear the expression and any error
    Clear,
    /// Remove the last character
    Backspace,
    /// Switch between light and dark theme
    ToggleTheme,
}

/// One button in the keypad grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    /// Element ID the button renders with
    pub id: &'static str,
    /// Visible label
    pub label: &'static str,
    /// Action fired on click
    pub action: ButtonAction,
    /// Grid row, top to bottom
    pub row: u8,
    /// Grid column, left to right
    pub col: u8,
}

impl KeypadButton {
    const fn new(id: &'static str, label: &'static str, action: ButtonAction, row: u8, col: u8) -> Self {
        Self {
            id,
            label,
            action,
            row,
            col,
        }
    }

    /// Builds the DOM element for this button
    #[must_use]
    pub fn element(&self) -> DomElement {
        DomElement::new("button")
            .with_id(self.id)
            .with_text(self.label)
            .with_class("keypad-button")
    }
}

const fn digit(id: &'static str, label: &'static str, d: u8, row: u8, col: u8) -> KeypadButton {
    KeypadButton::new(id, label, ButtonAction::Symbol(Symbol::Digit(d)), row, col)
}

const fn op(id: &'static str, label: &'static str, o: Operation, row: u8, col: u8) -> KeypadButton {
    KeypadButton::new(id, label, ButtonAction::Symbol(Symbol::Op(o)), row, col)
}

/// The full keypad, top row first:
///
/// ```text
/// AC  C   /   *
/// 7   8   9   -
/// 4   5   6   +
/// 1   2   3   =
/// 0   .   ◐
/// ```
const BUTTONS: &[KeypadButton] = &[
    KeypadButton::new("btn-clear", "AC", ButtonAction::Clear, 0, 0),
    KeypadButton::new("btn-backspace", "C", ButtonAction::Backspace, 0, 1),
    op("btn-divide", "/", Operation::Divide, 0, 2),
    op("btn-times", "*", Operation::Multiply, 0, 3),
    digit("btn-7", "7", 7, 1, 0),
    digit("btn-8", "8", 8, 1, 1),
    digit("btn-9", "9", 9, 1, 2),
    op("btn-minus", "-", Operation::Subtract, 1, 3),
    digit("btn-4", "4", 4, 2, 0),
    digit("btn-5", "5", 5, 2, 1),
    digit("btn-6", "6", 6, 2, 2),
    op("btn-plus", "+", Operation::Add, 2, 3),
    digit("btn-1", "1", 1, 3, 0),
    digit("btn-2", "2", 2, 3, 1),
    digit("btn-3", "3", 3, 3, 2),
    KeypadButton::new("btn-equals", "=", ButtonAction::Evaluate, 3, 3),
    digit("btn-0", "0", 0, 4, 0),
    KeypadButton::new(
        "btn-decimal",
        ".",
        ButtonAction::Symbol(Symbol::Dot),
        4,
        1,
    ),
    KeypadButton::new("btn-theme", "◐", ButtonAction::ToggleTheme, 4, 2),
];

/// The calculator keypad
#[derive(Debug, Clone, Copy, Default)]
pub struct Keypad;

impl Keypad {
    /// Creates the keypad
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns every button in layout order
    #[must_use]
    pub const fn buttons(&self) -> &'static [KeypadButton] {
        BUTTONS
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&'static KeypadButton> {
        BUTTONS.iter().find(|b| b.id == id)
    }

    /// Finds a button by grid position
    ///
    /// The bottom row is ragged, so positions are matched against the
    /// buttons rather than computed from an index.
    #[must_use]
    pub fn get_button_at(&self, row: u8, col: u8) -> Option<&'static KeypadButton> {
        BUTTONS.iter().find(|b| b.row == row && b.col == col)
    }

    /// Resolves a click on an element ID to its action
    #[must_use]
    pub fn handle_click(&self, id: &str) -> Option<ButtonAction> {
        self.find(id).map(|b| b.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_buttons_have_unique_ids() {
        let keypad = Keypad::new();
        let mut ids: Vec<&str> = keypad.buttons().iter().map(|b| b.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), keypad.buttons().len());
    }

    #[test]
    fn test_digit_buttons() {
        let keypad = Keypad::new();
        for d in 0..=9u8 {
            let id = format!("btn-{d}");
            let button = keypad.find(&id).unwrap();
            assert_eq!(button.action, ButtonAction::Symbol(Symbol::Digit(d)));
        }
    }

    #[test]
    fn test_operator_buttons() {
        let keypad = Keypad::new();
        let cases = [
            ("btn-plus", Operation::Add),
            ("btn-minus", Operation::Subtract),
            ("btn-times", Operation::Multiply),
            ("btn-divide", Operation::Divide),
        ];
        for (id, op) in cases {
            assert_eq!(
                keypad.handle_click(id),
                Some(ButtonAction::Symbol(Symbol::Op(op)))
            );
        }
    }

    #[test]
    fn test_control_buttons() {
        let keypad = Keypad::new();
        assert_eq!(keypad.handle_click("btn-equals"), Some(ButtonAction::Evaluate));
        assert_eq!(keypad.handle_click("btn-clear"), Some(ButtonAction::Clear));
        assert_eq!(
            keypad.handle_click("btn-backspace"),
            Some(ButtonAction::Backspace)
        );
        assert_eq!(
            keypad.handle_click("btn-decimal"),
            Some(ButtonAction::Symbol(Symbol::Dot))
        );
        assert_eq!(
            keypad.handle_click("btn-theme"),
            Some(ButtonAction::ToggleTheme)
        );
    }

    #[test]
    fn test_unknown_id_returns_none() {
        let keypad = Keypad::new();
        assert_eq!(keypad.handle_click("btn-percent"), None);
        assert_eq!(keypad.handle_click(""), None);
    }

    #[test]
    fn test_grid_positions() {
        let keypad = Keypad::new();
        assert_eq!(keypad.get_button_at(0, 0).unwrap().id, "btn-clear");
        assert_eq!(keypad.get_button_at(1, 0).unwrap().id, "btn-7");
        assert_eq!(keypad.get_button_at(3, 3).unwrap().id, "btn-equals");
        assert_eq!(keypad.get_button_at(4, 0).unwrap().id, "btn-0");
        // Bottom row has no fourth column
        assert!(keypad.get_button_at(4, 3).is_none());
        assert!(keypad.get_button_at(5, 0).is_none());
    }

    #[test]
    fn test_button_element() {
        let keypad = Keypad::new();
        let elem = keypad.find("btn-7").unwrap().element();
        assert_eq!(elem.tag, "button");
        assert_eq!(elem.id, "btn-7");
        assert_eq!(elem.text_content, "7");
        assert!(elem.has_class("keypad-button"));
    }
}
