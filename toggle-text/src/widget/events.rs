//! Event handling for the toggle widget.

use crate::event::{Event, Key, MouseButton};

use super::ToggleWidget;

/// Whether the widget handled an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The event activated the widget
    Consumed,
    /// The event was not for this widget
    Ignored,
}

impl EventResult {
    pub fn is_consumed(self) -> bool {
        self == Self::Consumed
    }
}

impl ToggleWidget {
    /// Handle one host event.
    ///
    /// A left click on the button, or Enter/Space on the focused button,
    /// activates the widget exactly once.
    pub fn dispatch(&mut self, event: &Event) -> EventResult {
        if self.is_activation(event) {
            self.activate();
            EventResult::Consumed
        } else {
            log::trace!("Toggle '{}' ignored {:?}", self.id(), event);
            EventResult::Ignored
        }
    }

    fn is_activation(&self, event: &Event) -> bool {
        if event.target() != Some(self.button_id()) {
            return false;
        }

        match event {
            Event::Click { button, .. } => *button == MouseButton::Left,
            Event::Key { key, modifiers, .. } => {
                // Only handle keys without modifiers
                modifiers.none() && matches!(key, Key::Enter | Key::Char(' '))
            }
            _ => false,
        }
    }
}
