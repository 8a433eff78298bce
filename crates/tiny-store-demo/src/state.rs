//! Application state for the title/content page

use std::rc::Rc;

/// One text block on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub text: String,
    pub color: String,
}

impl Section {
    pub fn new(text: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: color.into(),
        }
    }
}

/// Whole page state
///
/// Both sections sit behind their own `Rc` so the renderer can tell which
/// one changed by pointer comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub title: Rc<Section>,
    pub content: Rc<Section>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            title: Rc::new(Section::new("Initial Text", "red")),
            content: Rc::new(Section::new("Initial Content", "blue")),
        }
    }
}
