//! Responsive layout: layers control docking and the collapsible sidebar.

use crate::layer::ControlPosition;

pub const TOGGLE_CLOSED_GLYPH: &str = "❯";
pub const TOGGLE_OPEN_GLYPH: &str = "❮";

/// Layers control sits bottom-right on narrow screens.
pub fn layers_control_position(width_px: u32, mobile_breakpoint_px: u32) -> ControlPosition {
    if width_px <= mobile_breakpoint_px {
        ControlPosition::BottomRight
    } else {
        ControlPosition::TopRight
    }
}

/// Sidebar open state and its toggle button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sidebar {
    closed: bool,
    toggle_visible: bool,
}

impl Sidebar {
    /// Narrow screens start closed with a visible toggle; wide screens
    /// start open and hide the toggle.
    pub fn for_width(width_px: u32, sidebar_breakpoint_px: u32) -> Self {
        let narrow = width_px < sidebar_breakpoint_px;
        Self {
            closed: narrow,
            toggle_visible: narrow,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn toggle_visible(&self) -> bool {
        self.toggle_visible
    }

    pub fn toggle(&mut self) {
        self.closed = !self.closed;
    }

    pub fn toggle_glyph(&self) -> &'static str {
        if self.closed {
            TOGGLE_CLOSED_GLYPH
        } else {
            TOGGLE_OPEN_GLYPH
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{layers_control_position, Sidebar, TOGGLE_CLOSED_GLYPH, TOGGLE_OPEN_GLYPH};
    use crate::layer::ControlPosition;

    #[test]
    fn control_moves_bottom_at_breakpoint() {
        assert_eq!(layers_control_position(800, 800), ControlPosition::BottomRight);
        assert_eq!(layers_control_position(801, 800), ControlPosition::TopRight);
    }

    #[test]
    fn narrow_sidebar_starts_closed_and_toggles() {
        let mut sidebar = Sidebar::for_width(1099, 1100);
        assert!(sidebar.is_closed());
        assert!(sidebar.toggle_visible());
        assert_eq!(sidebar.toggle_glyph(), TOGGLE_CLOSED_GLYPH);

        sidebar.toggle();
        assert!(!sidebar.is_closed());
        assert_eq!(sidebar.toggle_glyph(), TOGGLE_OPEN_GLYPH);
    }

    #[test]
    fn wide_sidebar_starts_open_with_hidden_toggle() {
        let sidebar = Sidebar::for_width(1100, 1100);
        assert!(!sidebar.is_closed());
        assert!(!sidebar.toggle_visible());
    }
}
