//! Transient UI state shared by every handler.
//!
//! The only durable value, the explicit theme preference, lives in the
//! [`PreferenceStore`](crate::page::PreferenceStore); everything here is
//! rebuilt on page load.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use crate::theme::Theme;
use crate::throttle::FrameGate;

#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Mobile menu is showing.
    pub menu_open: bool,
    pub theme: Theme,
    /// OS asked for reduced motion; programmatic scrolls jump instantly.
    pub reduced_motion: bool,
    pub scroll_frame: FrameGate,
}
