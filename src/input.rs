//! Keyboard input as seen by the controller.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// Keys the page reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowUp,
    ArrowDown,
    Other,
}

impl Key {
    /// Map a `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Self::Escape,
            "ArrowUp" => Self::ArrowUp,
            "ArrowDown" => Self::ArrowDown,
            _ => Self::Other,
        }
    }
}

/// A key press plus the context needed to decide whether to handle it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    /// Focus is in a text field, select, or contenteditable region.
    pub in_editable: bool,
    /// Alt, Ctrl, or Meta is held.
    pub with_modifier: bool,
}

impl KeyPress {
    /// A bare key press with no focus or modifier context.
    #[must_use]
    pub fn plain(key: Key) -> Self {
        Self { key, in_editable: false, with_modifier: false }
    }

    /// Whether arrow-key section stepping may take this press.
    ///
    /// Presses aimed at editable widgets or chorded with a modifier keep their
    /// native behaviour (caret movement, browser shortcuts).
    #[must_use]
    pub fn steps_sections(&self) -> bool {
        matches!(self.key, Key::ArrowUp | Key::ArrowDown) && !self.in_editable && !self.with_modifier
    }
}

/// Whether focus on an element with this tag and editability takes typed input.
#[must_use]
pub fn is_editable_target(tag_name: &str, content_editable: bool) -> bool {
    content_editable || matches!(tag_name.to_ascii_lowercase().as_str(), "input" | "textarea" | "select")
}
