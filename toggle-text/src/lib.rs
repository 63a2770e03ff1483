//! A button that toggles the visibility of an adjacent text node.
//!
//! The widget owns a single [`Visibility`] value and renders it into an
//! [`Element`] tree for the host. Activation events flip the value and ask
//! the host to redraw through a [`wakeup`] channel.

pub mod config;
pub mod element;
pub mod error;
pub mod event;
pub mod logging;
pub mod wakeup;
pub mod widget;

pub use config::ToggleConfig;
pub use element::{Content, Element, find_element, outline};
pub use error::{ConfigError, LoggingError};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use widget::{EventResult, ToggleWidget, Visibility};
