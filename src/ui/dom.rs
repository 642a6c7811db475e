//! Mock DOM the calculator renders into.
//!
//! A small in-memory stand-in for the document tree: elements with ids,
//! text, classes, and children, plus a recorded event stream. Tests assert
//! against this structure instead of a real browser.

use std::collections::HashMap;

/// An element in the mock document tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// CSS classes
    pub classes: Vec<String>,
    /// Child elements
    pub children: Vec<DomElement>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates a new element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets the element ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// Adds a child element
    #[must_use]
    pub fn with_child(mut self, child: DomElement) -> Self {
        self.children.push(child);
        self
    }

    /// Sets the text content in place
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Adds a class if not already present
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Removes a class
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Checks whether the element carries a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// Events the calculator UI reacts to
///
/// Only clicks exist here; the keypad is the sole input surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click on an element
    Click {
        /// ID of the clicked element
        element_id: String,
    },
}

impl DomEvent {
    /// Creates a click event for the given element
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }
}

/// ID of the expression display line
pub const EXPRESSION_ID: &str = "calc-expression";
/// ID of the output display line
pub const OUTPUT_ID: &str = "calc-output";
/// ID of the history list element
pub const HISTORY_ID: &str = "calc-history";

/// In-memory document tree with an event log
#[derive(Debug, Clone)]
pub struct MockDom {
    /// Root element; theme classes live here
    pub root: DomElement,
    elements: HashMap<String, DomElement>,
    event_history: Vec<DomEvent>,
}

impl Default for MockDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDom {
    /// Creates an empty document with a bare root
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: DomElement::new("div").with_id("root"),
            elements: HashMap::new(),
            event_history: Vec::new(),
        }
    }

    /// Creates the calculator document: a two-line display and an empty
    /// history list under a `calculator-app` root
    #[must_use]
    pub fn calculator() -> Self {
        let mut dom = Self::new();

        let expression = DomElement::new("div")
            .with_id(EXPRESSION_ID)
            .with_class("expression-line");

        let output = DomElement::new("div")
            .with_id(OUTPUT_ID)
            .with_class("output-line")
            .with_text("0");

        let history = DomElement::new("ul")
            .with_id(HISTORY_ID)
            .with_class("history-list");

        dom.root = DomElement::new("div")
            .with_id("calculator")
            .with_class("calculator-app")
            .with_child(expression.clone())
            .with_child(output.clone())
            .with_child(history.clone());

        dom.register_element(expression);
        dom.register_element(output);
        dom.register_element(history);

        dom
    }

    /// Registers an element for ID lookup
    pub fn register_element(&mut self, element: DomElement) {
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
    }

    /// Looks up an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Looks up a mutable element by ID
    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.elements.get_mut(id)
    }

    /// Records an event in the log
    pub fn dispatch_event(&mut self, event: DomEvent) {
        self.event_history.push(event);
    }

    /// Returns the recorded event stream
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Clears the event log
    pub fn clear_event_history(&mut self) {
        self.event_history.clear();
    }

    /// Sets the text of an element by ID
    ///
    /// The registry holds clones of elements mounted under the root, so
    /// mutations are applied to both to keep the trees consistent.
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_text(text);
        }
        if let Some(elem) = find_in_tree(&mut self.root, id) {
            elem.set_text(text);
        }
    }

    /// Returns the text of an element by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }

    /// Appends a child to a parent and registers it for lookup
    pub fn append_child(&mut self, parent_id: &str, child: DomElement) {
        if let Some(parent) = self.elements.get_mut(parent_id) {
            parent.children.push(child.clone());
        }
        if let Some(parent) = find_in_tree(&mut self.root, parent_id) {
            parent.children.push(child.clone());
        }
        self.register_element(child);
    }

    /// Removes all children of an element, dropping their registrations
    pub fn clear_children(&mut self, id: &str) {
        let child_ids: Vec<String> = self
            .elements
            .get(id)
            .map(|elem| elem.children.iter().map(|c| c.id.clone()).collect())
            .unwrap_or_default();

        for child_id in child_ids {
            if !child_id.is_empty() {
                self.elements.remove(&child_id);
            }
        }
        if let Some(elem) = self.elements.get_mut(id) {
            elem.children.clear();
        }
        if let Some(elem) = find_in_tree(&mut self.root, id) {
            elem.children.clear();
        }
    }
}

/// Depth-first lookup of an element by ID within a subtree
fn find_in_tree<'a>(elem: &'a mut DomElement, id: &str) -> Option<&'a mut DomElement> {
    if elem.id == id {
        return Some(elem);
    }
    elem.children
        .iter_mut()
        .find_map(|child| find_in_tree(child, id))
}
