//! Widget configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Per-instance configuration, fixed for the lifetime of the widget.
///
/// Deserializes from a partial map; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToggleConfig {
    /// Container element id. The button and text ids derive from it.
    pub id: String,

    /// Button label.
    pub label: String,

    /// Content of the toggled text node.
    pub text: String,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            id: "toggle".into(),
            label: "Toggle Text".into(),
            text: "This text is toggleable".into(),
        }
    }
}

impl ToggleConfig {
    /// Create the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the container id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the button label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the toggled text.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Check the config can produce distinct, addressable elements.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.id.is_empty() {
            return Err(ConfigError::EmptyId);
        }
        if self.id.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidId(self.id.clone()));
        }
        if self.label.trim().is_empty() {
            return Err(ConfigError::EmptyLabel);
        }
        Ok(())
    }

    pub(crate) fn button_id(&self) -> String {
        format!("{}-button", self.id)
    }

    pub(crate) fn text_id(&self) -> String {
        format!("{}-text", self.id)
    }
}
