//! Toggle widget - a button that shows and hides a line of text.
//!
//! The widget renders a column holding the button and, while visible, the
//! text below it. Activating the button flips the visibility and requests a
//! redraw from the host.
//!
//! # Example
//!
//! ```
//! use toggle_text::{Event, ToggleWidget, find_element, wakeup};
//!
//! let (tx, mut rx) = wakeup::channel();
//! let mut widget = ToggleWidget::new().with_wakeup(tx);
//!
//! let button = widget.button_id().to_string();
//! widget.dispatch(&Event::click(button));
//!
//! assert!(rx.try_recv());
//! assert!(find_element(&widget.render(), widget.text_id()).is_none());
//! ```

mod events;
mod render;
mod state;

pub use events::EventResult;
pub use state::{ToggleWidget, Visibility};
