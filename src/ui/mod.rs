//! Presentation layer: mock DOM, keypad layout, and theme handling.
//!
//! The calculator renders into a [`dom::MockDom`] so the whole interaction
//! loop stays observable in plain tests. No browser bindings are involved;
//! the DOM here is the assertion surface.

pub mod dom;
pub mod keypad;
pub mod theme;

pub use dom::{DomElement, DomEvent, MockDom};
pub use keypad::{ButtonAction, Keypad, KeypadButton};
pub use theme::ThemeMode;
