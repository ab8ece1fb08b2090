//! Backend-agnostic mouse input types
//!
//! Windowing backends (winit, SDL, ...) convert their native events into these
//! types before handing them to widgets.

/// Backend-agnostic mouse button representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (scroll wheel click)
    Middle,
    /// Additional mouse buttons (back, forward, etc.)
    Other(u8),
}

/// Pointer state of a widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseState {
    /// Cursor is outside the widget
    #[default]
    Out,
    /// Cursor is over the widget, no button held
    Hover,
    /// A button was pressed over the widget and not yet released
    Down,
}

/// Cursor the host should display while the pointer is over a widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CursorIcon {
    #[default]
    Default,
    /// Hand cursor signalling a clickable area
    Pointer,
}
