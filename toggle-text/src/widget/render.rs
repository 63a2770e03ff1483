//! Toggle widget rendering.

use crate::element::Element;

use super::ToggleWidget;

impl ToggleWidget {
    /// Build the element tree for the current state.
    ///
    /// The button is always present; the text follows it only while visible.
    /// Pure: the same state always yields the same tree.
    pub fn render(&self) -> Element {
        let config = self.config();
        let button = Element::text(self.button_id(), &config.label)
            .focusable(true)
            .clickable(true);

        let mut container = Element::col(self.id()).child(button);

        if self.is_visible() {
            container = container.child(Element::text(self.text_id(), &config.text));
        }

        container
    }
}
