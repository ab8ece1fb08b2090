//! Retained widget trait implemented by interactive controls.
//!
//! The host owns widgets across frames and drives them through four entry
//! points:
//!
//! 1. [`Widget::event`] for pointer input, in widget-local coordinates;
//! 2. [`Widget::tick`] (or [`Widget::update`]) from its animation timer;
//! 3. [`Widget::resize`] whenever the widget's bounds change;
//! 4. [`Widget::paint`] whenever [`Widget::needs_repaint`] reports true.
//!
//! # Example
//!
//! ```ignore
//! let mut radio = RadioButton::new("Option A");
//! radio.resize(Size::new(120.0, 30.0));
//! radio.event(&WidgetEvent::MouseEnter);
//!
//! while radio.tick() {}
//!
//! let mut output = FullOutput::new();
//! let mut measurer = MonospaceMeasurer::default();
//! radio.paint(&mut PaintCtx::new(&skin, &mut measurer, &mut output));
//! radio.clear_repaint();
//! ```

use crate::input::CursorIcon;
use crate::measure::ContentMeasurer;
use crate::output::FullOutput;
use crate::primitives::Size;
use crate::skin::Skin;
use crate::WidgetEvent;
use std::time::Duration;

/// Everything a widget needs while painting
pub struct PaintCtx<'a> {
    pub skin: &'a Skin,
    pub measurer: &'a mut dyn ContentMeasurer,
    pub output: &'a mut FullOutput,
}

impl<'a> PaintCtx<'a> {
    pub fn new(
        skin: &'a Skin,
        measurer: &'a mut dyn ContentMeasurer,
        output: &'a mut FullOutput,
    ) -> Self {
        Self {
            skin,
            measurer,
            output,
        }
    }
}

/// A stateful UI element owned by the host across frames
pub trait Widget {
    /// Handle a pointer event
    fn event(&mut self, event: &WidgetEvent);

    /// Advance animations by one timer step
    ///
    /// Returns `true` if anything visible changed.
    fn tick(&mut self) -> bool;

    /// Advance animations by elapsed wall time
    ///
    /// Returns `true` if anything visible changed.
    fn update(&mut self, elapsed: Duration) -> bool;

    /// Apply new bounds
    fn resize(&mut self, size: Size);

    /// Current bounds
    fn size(&self) -> Size;

    /// Size the widget would like given the skin's font
    fn preferred_size(&self, skin: &Skin, measurer: &mut dyn ContentMeasurer) -> Size;

    /// Paint into `ctx.output` in widget-local coordinates
    fn paint(&self, ctx: &mut PaintCtx<'_>);

    /// Whether state changed since the last [`Widget::clear_repaint`]
    fn needs_repaint(&self) -> bool;

    /// Acknowledge a repaint
    fn clear_repaint(&mut self);

    /// Cursor the host should show over this widget
    fn cursor(&self) -> CursorIcon {
        CursorIcon::Default
    }
}
