//! Toggle widget state.

use crate::config::ToggleConfig;
use crate::error::ConfigError;
use crate::wakeup::WakeupSender;

/// Whether the toggled text is part of the render output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
}

impl Visibility {
    /// The other state.
    pub fn toggled(self) -> Self {
        match self {
            Self::Visible => Self::Hidden,
            Self::Hidden => Self::Visible,
        }
    }

    pub fn is_visible(self) -> bool {
        self == Self::Visible
    }
}

impl From<bool> for Visibility {
    fn from(visible: bool) -> Self {
        if visible { Self::Visible } else { Self::Hidden }
    }
}

/// A button toggling the visibility of an adjacent text node.
///
/// The instance owns its visibility; only [`activate`](Self::activate)
/// (directly or through [`dispatch`](Self::dispatch)) changes it. Every new
/// instance starts [`Visibility::Visible`].
#[derive(Debug)]
pub struct ToggleWidget {
    config: ToggleConfig,
    button_id: String,
    text_id: String,
    visibility: Visibility,
    /// Set on every transition, cleared by the host after redrawing
    dirty: bool,
    wakeup: Option<WakeupSender>,
}

impl ToggleWidget {
    /// Create a widget with the default config.
    pub fn new() -> Self {
        Self::build(ToggleConfig::default())
    }

    /// Create a widget from a validated config.
    pub fn with_config(config: ToggleConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: ToggleConfig) -> Self {
        log::debug!("Creating toggle widget '{}'", config.id);
        Self {
            button_id: config.button_id(),
            text_id: config.text_id(),
            config,
            visibility: Visibility::Visible,
            dirty: false,
            wakeup: None,
        }
    }

    /// Attach the host's wakeup channel. Each activation sends one signal.
    pub fn with_wakeup(mut self, sender: WakeupSender) -> Self {
        log::debug!("Attaching wakeup sender to '{}'", self.config.id);
        self.wakeup = Some(sender);
        self
    }

    /// Remove the widget from its host, ending the life of its state.
    pub fn unmount(self) {
        log::debug!(
            "Unmounting toggle widget '{}' ({:?})",
            self.config.id,
            self.visibility
        );
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn config(&self) -> &ToggleConfig {
        &self.config
    }

    /// Container element id
    pub fn id(&self) -> &str {
        &self.config.id
    }

    /// Button element id, the target of activation events
    pub fn button_id(&self) -> &str {
        &self.button_id
    }

    /// Text element id
    pub fn text_id(&self) -> &str {
        &self.text_id
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Flip the visibility and schedule a redraw.
    pub fn activate(&mut self) {
        let next = self.visibility.toggled();
        log::debug!(
            "Toggle '{}': {:?} -> {:?}",
            self.config.id,
            self.visibility,
            next
        );
        self.visibility = next;
        self.dirty = true;
        if let Some(wakeup) = &self.wakeup {
            wakeup.send();
        }
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the widget changed since the last redraw
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}

impl Default for ToggleWidget {
    fn default() -> Self {
        Self::new()
    }
}
