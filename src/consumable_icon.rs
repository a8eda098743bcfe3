//! Button state of a single consumable item card.
//!
//! Pressing the card flips the sell and use panels. The use button stays
//! visible while the consumable isn't useable, it just gets disabled.

use crate::trace::TraceSink;
use bevy::prelude::*;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsumableIcon {
    is_useable: bool,
    sell_panel_armed: bool,
    use_panel_armed: bool,
    sell_button_visible: bool,
    use_button_visible: bool,
    use_button_disabled: bool,
}

/// Every field of a [`ConsumableIcon`] at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSnapshot {
    pub is_useable: bool,
    pub sell_panel_armed: bool,
    pub use_panel_armed: bool,
    pub sell_button_visible: bool,
    pub use_button_visible: bool,
    pub use_button_disabled: bool,
}

impl Default for ConsumableIcon {
    fn default() -> Self {
        Self {
            is_useable: false,
            sell_panel_armed: false,
            use_panel_armed: false,
            sell_button_visible: false,
            use_button_visible: false,
            use_button_disabled: true,
        }
    }
}

impl ConsumableIcon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Card was pressed, toggle both button panels.
    pub fn on_pressed(&mut self, trace: &mut dyn TraceSink) {
        trace.record(&format!(
            "Before press: sell_visible={}, use_visible={}",
            self.sell_panel_armed, self.use_panel_armed
        ));

        // flip the panels
        self.sell_panel_armed = !self.sell_panel_armed;
        self.use_panel_armed = !self.use_panel_armed;

        self.sell_button_visible = self.sell_panel_armed;

        // recomputed on every press, even when this press hides the button
        self.use_button_visible = self.use_panel_armed;
        self.use_button_disabled = !self.is_useable;

        trace.record(&format!(
            "After press: sell_visible={}, use_visible={}",
            self.sell_panel_armed, self.use_panel_armed
        ));
        trace.record(&format!(
            "Button states: sell_visible={}, use_visible={}, use_disabled={}",
            self.sell_button_visible, self.use_button_visible, self.use_button_disabled
        ));

        log::debug!("consumable icon pressed: {:?}", self.snapshot());
    }

    /// Something outside the card decided whether the consumable can be used.
    pub fn set_useable(&mut self, useable: bool, trace: &mut dyn TraceSink) {
        trace.record(&format!("Setting useable to: {useable}"));
        self.is_useable = useable;

        // a hidden use button keeps whatever disabled state it had
        if self.use_panel_armed {
            self.use_button_disabled = !self.is_useable;
            trace.record(&format!(
                "Updated use button: visible={}, disabled={}",
                self.use_button_visible, self.use_button_disabled
            ));
        }

        log::debug!("consumable icon useable changed: {:?}", self.snapshot());
    }

    pub fn is_useable(&self) -> bool {
        self.is_useable
    }

    pub fn sell_panel_armed(&self) -> bool {
        self.sell_panel_armed
    }

    pub fn use_panel_armed(&self) -> bool {
        self.use_panel_armed
    }

    pub fn sell_button_visible(&self) -> bool {
        self.sell_button_visible
    }

    pub fn use_button_visible(&self) -> bool {
        self.use_button_visible
    }

    pub fn use_button_disabled(&self) -> bool {
        self.use_button_disabled
    }

    pub fn snapshot(&self) -> IconSnapshot {
        IconSnapshot {
            is_useable: self.is_useable,
            sell_panel_armed: self.sell_panel_armed,
            use_panel_armed: self.use_panel_armed,
            sell_button_visible: self.sell_button_visible,
            use_button_visible: self.use_button_visible,
            use_button_disabled: self.use_button_disabled,
        }
    }

    /// One line summary of the visible buttons.
    pub fn describe(&self) -> String {
        format!(
            "sell_visible={}, use_visible={}, use_disabled={}",
            self.sell_button_visible, self.use_button_visible, self.use_button_disabled
        )
    }
}
