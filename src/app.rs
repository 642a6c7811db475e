//! Calculator application shell.
//!
//! Wires the expression editor, keypad, and theme state to the mock DOM.
//! Every handled event ends with a full display sync, so the DOM always
//! reflects the editor verbatim.

use crate::core::history::HistoryEntry;
use crate::editor::ExpressionEditor;
use crate::ui::dom::{DomElement, DomEvent, MockDom, EXPRESSION_ID, HISTORY_ID, OUTPUT_ID};
use crate::ui::keypad::{ButtonAction, Keypad};
use crate::ui::theme::ThemeMode;
use tracing::debug;

/// The assembled calculator: editor, keypad, theme, and document
#[derive(Debug)]
pub struct CalculatorApp {
    editor: ExpressionEditor,
    keypad: Keypad,
    theme: ThemeMode,
    dom: MockDom,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates the calculator with its document mounted and synced
    #[must_use]
    pub fn new() -> Self {
        let keypad = Keypad::new();
        let mut dom = MockDom::calculator();
        for button in keypad.buttons() {
            let element = button.element();
            dom.root.children.push(element.clone());
            dom.register_element(element);
        }

        let mut app = Self {
            editor: ExpressionEditor::new(),
            keypad,
            theme: ThemeMode::default(),
            dom,
        };
        app.sync_dom();
        app
    }

    /// Routes a DOM event through the calculator
    ///
    /// The event is recorded in the document's event log whether or not it
    /// lands on a known button.
    pub fn dispatch(&mut self, event: &DomEvent) {
        self.dom.dispatch_event(event.clone());
        match event {
            DomEvent::Click { element_id } => {
                self.handle_button(element_id);
            }
        }
    }

    /// Handles a click on a button by element ID
    ///
    /// Returns false when the ID does not belong to the keypad.
    pub fn handle_button(&mut self, id: &str) -> bool {
        let Some(action) = self.keypad.handle_click(id) else {
            debug!(id, "click on unknown element ignored");
            return false;
        };
        debug!(id, ?action, "button pressed");
        self.apply(action);
        true
    }

    /// Applies a keypad action to the calculator state
    pub fn apply(&mut self, action: ButtonAction) {
        match action {
            ButtonAction::Symbol(symbol) => self.editor.append(symbol),
            ButtonAction::Evaluate => {
                if let Err(e) = self.editor.evaluate() {
                    debug!(error = %e, "evaluation failed");
                }
            }
            ButtonAction::Clear => self.editor.clear(),
            ButtonAction::Backspace => self.editor.backspace(),
            ButtonAction::ToggleTheme => {
                self.theme = self.theme.toggled();
                debug!(dark = self.theme.is_dark(), "theme toggled");
            }
        }
        self.sync_dom();
    }

    /// Pushes editor and theme state into the document
    fn sync_dom(&mut self) {
        self.dom
            .set_element_text(EXPRESSION_ID, self.editor.expression());
        self.dom.set_element_text(OUTPUT_ID, self.editor.output());

        // History panel shows newest entries first
        self.dom.clear_children(HISTORY_ID);
        for (i, entry) in self.editor.history().iter_rev().enumerate() {
            let item = DomElement::new("li")
                .with_id(&format!("history-{i}"))
                .with_class("history-entry")
                .with_text(&entry.display());
            self.dom.append_child(HISTORY_ID, item);
        }

        if self.theme.is_dark() {
            self.dom.root.add_class(ThemeMode::CLASS);
        } else {
            self.dom.root.remove_class(ThemeMode::CLASS);
        }
    }

    /// Returns the current expression string
    #[must_use]
    pub fn expression(&self) -> &str {
        self.editor.expression()
    }

    /// Returns the output line
    #[must_use]
    pub fn output(&self) -> &str {
        self.editor.output()
    }

    /// Returns the active theme
    #[must_use]
    pub const fn theme(&self) -> ThemeMode {
        self.theme
    }

    /// Returns the document
    #[must_use]
    pub const fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Returns the editor
    #[must_use]
    pub const fn editor(&self) -> &ExpressionEditor {
        &self.editor
    }

    /// Returns the most recent history entry, if any
    #[must_use]
    pub fn last_calculation(&self) -> Option<&HistoryEntry> {
        self.editor.history().last()
    }
}
