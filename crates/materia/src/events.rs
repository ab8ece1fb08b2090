//! Events delivered by the host to widgets
//!
//! Positions are always in the receiving widget's local coordinates, with the
//! origin at its top-left corner. Containers translate positions before
//! forwarding events to children.

use crate::{MouseButton, Point};

/// Pointer event targeted at a single widget
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WidgetEvent {
    /// Cursor entered the widget bounds
    MouseEnter,
    /// Cursor left the widget bounds
    MouseLeave,
    /// Mouse button pressed over the widget
    MouseDown {
        /// Which mouse button was pressed
        button: MouseButton,
        /// Position of the press
        position: Point,
    },
    /// Mouse button released (delivered to the widget that received the press)
    MouseUp {
        /// Which mouse button was released
        button: MouseButton,
        /// Position of the release
        position: Point,
    },
    /// Cursor moved over the widget
    MouseMove {
        /// Current cursor position
        position: Point,
    },
}

impl WidgetEvent {
    /// Position carried by the event, if any
    pub fn position(&self) -> Option<Point> {
        match self {
            WidgetEvent::MouseDown { position, .. }
            | WidgetEvent::MouseUp { position, .. }
            | WidgetEvent::MouseMove { position } => Some(*position),
            WidgetEvent::MouseEnter | WidgetEvent::MouseLeave => None,
        }
    }

    /// The same event with its position shifted by `(dx, dy)`
    pub fn translated(self, dx: f32, dy: f32) -> Self {
        match self {
            WidgetEvent::MouseDown { button, position } => WidgetEvent::MouseDown {
                button,
                position: position.offset(dx, dy),
            },
            WidgetEvent::MouseUp { button, position } => WidgetEvent::MouseUp {
                button,
                position: position.offset(dx, dy),
            },
            WidgetEvent::MouseMove { position } => WidgetEvent::MouseMove {
                position: position.offset(dx, dy),
            },
            other => other,
        }
    }
}
