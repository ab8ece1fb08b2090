//! Material radio button with animated check transition and click ripples.

use materia::{
    css, hit_test_circle, lerp_color, AnimationConfig, AnimationDirection, AnimationManager,
    AnimationType, ContentMeasurer, CursorIcon, MeasureTextRequest, MouseButton, MouseState,
    PaintCtx, Point, Rect, Size, Skin, Widget, WidgetEvent,
};
use materia_macros::WithBuilders;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Outer diameter of the check circle
pub const RADIO_BUTTON_SIZE: f32 = 19.0;
/// Width of the outer ring
pub const RADIO_BUTTON_RING_WIDTH: f32 = 2.0;
/// Diameter of the cutout inside the ring
pub const RADIO_BUTTON_INNER_SIZE: f32 = RADIO_BUTTON_SIZE - 2.0 * RADIO_BUTTON_RING_WIDTH;

/// Height requested with ripples on (room for the splash)
pub const RIPPLE_HEIGHT: f32 = 30.0;
/// Height requested with ripples off
pub const COMPACT_HEIGHT: f32 = 20.0;
/// Outer margin used while ripples are off
pub const DEFAULT_MARGIN: f32 = 3.0;

/// Visual styling and pacing of a radio button
#[derive(Debug, Clone, Copy, PartialEq, WithBuilders)]
pub struct RadioButtonStyle {
    /// Outer diameter of the check circle
    pub size: f32,
    /// Width of the outer ring
    pub ring_width: f32,
    /// Diameter of the center dot when fully checked
    pub dot_size: f32,
    /// Horizontal distance from the check circle's left edge to the label
    pub label_offset: f32,
    /// Check animation step per tick
    pub check_increment: f32,
    /// Ripple growth step per tick
    pub ripple_increment: f32,
    /// Ripple fade step per tick once the button is released
    pub ripple_release_increment: f32,
    /// Ripple opacity at full progress
    pub ripple_alpha: f32,
}

impl RadioButtonStyle {
    pub fn inner_size(&self) -> f32 {
        self.size - 2.0 * self.ring_width
    }
}

impl Default for RadioButtonStyle {
    fn default() -> Self {
        Self {
            size: RADIO_BUTTON_SIZE,
            ring_width: RADIO_BUTTON_RING_WIDTH,
            dot_size: 9.0,
            label_offset: 22.0,
            check_increment: 0.06,
            ripple_increment: 0.10,
            ripple_release_increment: 0.08,
            ripple_alpha: 40.0 / 255.0,
        }
    }
}

/// A radio button
///
/// Clicking an unchecked button checks it; clicking a checked one does
/// nothing. Use [`crate::RadioGroup`] to make a set of buttons exclusive.
///
/// # Example
///
/// ```ignore
/// let mut radio = RadioButton::new("Dark mode")
///     .on_change(|checked| println!("Checked: {}", checked));
/// radio.resize(Size::new(140.0, 30.0));
/// ```
pub struct RadioButton {
    label: String,
    checked: bool,
    enabled: bool,
    ripple: bool,
    margin: f32,
    style: RadioButtonStyle,

    mouse_state: MouseState,
    mouse_location: Point,
    cursor: CursorIcon,
    pressed: bool,

    // Recomputed on resize
    size: Size,
    box_offset: f32,
    check_bounds: Rect,

    check_animation: AnimationManager,
    ripple_animation: AnimationManager<bool>,
    invalidated: Rc<Cell<bool>>,
    on_change: Option<Box<dyn FnMut(bool)>>,
}

impl RadioButton {
    /// Create an unchecked, enabled radio button with ripples on
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_style_internal(label.into(), RadioButtonStyle::default())
    }

    fn with_style_internal(label: String, style: RadioButtonStyle) -> Self {
        let invalidated = Rc::new(Cell::new(true));

        let mut check_animation = AnimationManager::new(
            true,
            AnimationConfig::default()
                .with_animation_type(AnimationType::EaseInOut)
                .with_increment(style.check_increment),
        );
        let mut ripple_animation = AnimationManager::new(
            false,
            AnimationConfig::default()
                .with_animation_type(AnimationType::Linear)
                .with_increment(style.ripple_increment)
                .with_secondary_increment(style.ripple_release_increment),
        );

        let flag = invalidated.clone();
        check_animation.on_progress(move || flag.set(true));
        let flag = invalidated.clone();
        ripple_animation.on_progress(move || flag.set(true));

        let mut radio = Self {
            label,
            checked: false,
            enabled: true,
            ripple: true,
            margin: 0.0,
            style,
            mouse_state: MouseState::Out,
            mouse_location: Point::outside(),
            cursor: CursorIcon::Default,
            pressed: false,
            size: Size::zero(),
            box_offset: 0.0,
            check_bounds: Rect::default(),
            check_animation,
            ripple_animation,
            invalidated,
            on_change: None,
        };
        radio.resize(Size::new(0.0, RIPPLE_HEIGHT));
        radio
    }

    /// Set the initial checked state without animating or notifying
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self.check_animation
            .set_progress(if checked { 1.0 } else { 0.0 });
        self
    }

    /// Set whether the radio button is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.enabled = !disabled;
        self
    }

    /// Enable or disable the click ripple
    pub fn ripple(mut self, ripple: bool) -> Self {
        self.set_ripple(ripple);
        self
    }

    /// Set a custom style; pacing changes apply to future animations
    pub fn with_style(self, style: RadioButtonStyle) -> Self {
        let mut radio = Self::with_style_internal(self.label, style)
            .checked(self.checked)
            .disabled(!self.enabled)
            .ripple(self.ripple);
        radio.on_change = self.on_change;
        radio.margin = self.margin;
        radio.resize(self.size);
        radio
    }

    /// Set a callback fired whenever the checked state changes
    pub fn on_change(mut self, f: impl FnMut(bool) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
        self.invalidate();
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Change the checked state, animating the transition
    pub fn set_checked(&mut self, checked: bool) {
        if self.checked == checked {
            return;
        }

        self.checked = checked;
        let direction = if checked {
            AnimationDirection::In
        } else {
            AnimationDirection::Out
        };
        self.check_animation.start_new_animation(direction);
        log::debug!("radio button {:?} checked -> {}", self.label, checked);
        self.invalidate();

        if let Some(ref mut on_change) = self.on_change {
            on_change(checked);
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        if !enabled {
            self.mouse_state = MouseState::Out;
            self.mouse_location = Point::outside();
            self.cursor = CursorIcon::Default;
            self.pressed = false;
        }
        self.invalidate();
    }

    pub fn has_ripple(&self) -> bool {
        self.ripple
    }

    /// Toggle the click ripple
    ///
    /// Turning ripples on drops the outer margin so the splash can use it.
    /// The height snaps to [`RadioButton::preferred_height`]; containers
    /// holding the button have to lay it out again.
    pub fn set_ripple(&mut self, ripple: bool) {
        self.ripple = ripple;
        if ripple {
            self.margin = 0.0;
        } else if self.margin == 0.0 {
            self.margin = DEFAULT_MARGIN;
        }
        self.resize(Size::new(self.size.width, self.preferred_height()));
    }

    /// Outer margin a container should leave around the button
    pub fn margin(&self) -> f32 {
        self.margin
    }

    /// Height the button asks for: taller while ripples are on
    pub fn preferred_height(&self) -> f32 {
        if self.ripple {
            RIPPLE_HEIGHT
        } else {
            COMPACT_HEIGHT
        }
    }

    pub fn style(&self) -> &RadioButtonStyle {
        &self.style
    }

    pub fn mouse_state(&self) -> MouseState {
        self.mouse_state
    }

    /// Last known cursor position, `(-1, -1)` while outside
    pub fn mouse_location(&self) -> Point {
        self.mouse_location
    }

    /// Distance of the check circle from the top-left corner
    pub fn box_offset(&self) -> f32 {
        self.box_offset
    }

    /// Bounds of the check circle
    pub fn check_bounds(&self) -> Rect {
        self.check_bounds
    }

    /// Eased progress of the check transition
    pub fn check_progress(&self) -> f32 {
        self.check_animation.current_progress()
    }

    /// Number of ripple splashes currently tracked
    pub fn ripple_count(&self) -> usize {
        self.ripple_animation.animation_count()
    }

    pub fn is_animating(&self) -> bool {
        self.check_animation.is_animating() || self.ripple_animation.is_animating()
    }

    /// Whether `point` lies inside the circular check area
    pub fn is_in_check_area(&self, point: Point) -> bool {
        hit_test_circle(&self.check_bounds, point)
    }

    fn is_mouse_in_check_area(&self) -> bool {
        self.is_in_check_area(self.mouse_location)
    }

    fn invalidate(&self) {
        self.invalidated.set(true);
    }

    fn box_offset_for_height(&self, height: f32) -> f32 {
        (height / 2.0).floor() - (self.style.size / 2.0).ceil()
    }

    /// Base ripple diameter: the widget height minus a small inset
    fn ripple_diameter(&self) -> f32 {
        let height = self.size.height.round() as i64;
        let diameter = if height % 2 == 0 { height - 3 } else { height - 2 };
        diameter.max(0) as f32
    }

    fn on_mouse_down(&mut self, button: MouseButton, position: Point) {
        self.mouse_location = position;
        self.mouse_state = MouseState::Down;

        if button == MouseButton::Left {
            self.pressed = true;
        }

        if self.ripple && button == MouseButton::Left && self.is_mouse_in_check_area() {
            // Hold every splash at full size until the button is released
            self.ripple_animation.set_secondary_increment(0.0);
            self.ripple_animation
                .start_with_data(AnimationDirection::InOutIn, self.checked);
            self.invalidate();
        }
    }

    fn on_mouse_up(&mut self, button: MouseButton, position: Point) {
        self.mouse_location = position;
        self.mouse_state = MouseState::Hover;
        self.ripple_animation
            .set_secondary_increment(self.style.ripple_release_increment);

        if button == MouseButton::Left && std::mem::take(&mut self.pressed) {
            let clicked = self.size.to_rect().contains(position);
            if clicked && !self.checked {
                self.set_checked(true);
            }
        }
    }
}

impl Widget for RadioButton {
    fn event(&mut self, event: &WidgetEvent) {
        if !self.enabled {
            return;
        }

        let previous = self.mouse_state;
        match *event {
            WidgetEvent::MouseEnter => {
                self.mouse_state = MouseState::Hover;
            }
            WidgetEvent::MouseLeave => {
                self.mouse_location = Point::outside();
                self.mouse_state = MouseState::Out;
                self.cursor = CursorIcon::Default;
            }
            WidgetEvent::MouseDown { button, position } => self.on_mouse_down(button, position),
            WidgetEvent::MouseUp { button, position } => self.on_mouse_up(button, position),
            WidgetEvent::MouseMove { position } => {
                self.mouse_location = position;
                self.cursor = if self.is_mouse_in_check_area() {
                    CursorIcon::Pointer
                } else {
                    CursorIcon::Default
                };
            }
        }

        if previous != self.mouse_state {
            log::debug!(
                "radio button {:?} mouse {:?} -> {:?}",
                self.label,
                previous,
                self.mouse_state
            );
        }
    }

    fn tick(&mut self) -> bool {
        let checked = self.check_animation.tick();
        let ripple = self.ripple_animation.tick();
        checked || ripple
    }

    fn update(&mut self, elapsed: Duration) -> bool {
        let checked = self.check_animation.update(elapsed);
        let ripple = self.ripple_animation.update(elapsed);
        checked || ripple
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
        self.box_offset = self.box_offset_for_height(size.height);
        self.check_bounds = Rect::from_min_size(
            [self.box_offset, self.box_offset],
            [self.style.size, self.style.size],
        );
        self.invalidate();
    }

    fn size(&self) -> Size {
        self.size
    }

    fn preferred_size(&self, skin: &Skin, measurer: &mut dyn ContentMeasurer) -> Size {
        let height = self.preferred_height();
        let label = measurer.measure_text(
            MeasureTextRequest::new(&self.label, skin.font.size).with_family(&skin.font.family),
        );
        let width = self.box_offset_for_height(height) + self.style.label_offset + label.width;
        Size::new(width.max(0.0), height)
    }

    fn paint(&self, ctx: &mut PaintCtx<'_>) {
        let skin = ctx.skin;
        let background = skin.background_color();
        let progress = self.check_animation.current_progress();
        let center = self.check_bounds.center();

        // Clear the control
        ctx.output.fill_rect(self.size.to_rect(), background);

        let brush = if self.enabled {
            skin.accent_color().with_alpha(progress)
        } else {
            skin.checkbox_off_disabled_color()
        };

        if self.ripple && self.ripple_animation.is_animating() {
            let base = self.ripple_diameter();
            for ripple in self.ripple_animation.iter() {
                // Black splash when the press happened on an already checked button
                let tint = if *ripple.data { css::BLACK } else { brush };
                let color = tint.with_alpha(ripple.progress * self.style.ripple_alpha);
                let diameter = if ripple.direction == AnimationDirection::InOutIn {
                    base * (0.8 + 0.2 * ripple.progress)
                } else {
                    base
                };
                ctx.output.fill_rounded_rect(
                    Rect::from_center_size(center, diameter),
                    diameter / 2.0,
                    color,
                );
            }
        }

        // Outer ring
        let ring_radius = self.style.size / 2.0;
        // Off color flattened onto the background, fading out as the check fills in
        let (off, weight) = if self.enabled {
            let off = skin.checkbox_off_color();
            (off, off.a * (1.0 - progress))
        } else {
            let off = skin.checkbox_off_disabled_color();
            (off, off.a)
        };
        let unchecked = lerp_color(background, off.with_alpha(1.0), weight);
        ctx.output
            .fill_rounded_rect(self.check_bounds, ring_radius, unchecked);
        if self.enabled {
            ctx.output
                .fill_rounded_rect(self.check_bounds, ring_radius, brush);
        }

        // Inner cutout
        ctx.output.fill_ellipse(
            Rect::from_center_size(center, self.style.inner_size()),
            background,
        );

        if self.checked {
            let dot = self.style.dot_size * progress;
            ctx.output
                .fill_rounded_rect(Rect::from_center_size(center, dot), dot / 2.0, brush);
        }

        if !self.label.is_empty() {
            let font = &skin.font;
            let text = ctx.measurer.measure_text(
                MeasureTextRequest::new(&self.label, font.size).with_family(&font.family),
            );
            let color = if self.enabled {
                skin.primary_text_color()
            } else {
                skin.disabled_or_hint_text_color()
            };
            let position = Point::new(
                self.box_offset + self.style.label_offset,
                self.size.height / 2.0 - text.height / 2.0,
            );
            ctx.output.draw_text(&self.label, font, position, color);
        }
    }

    fn needs_repaint(&self) -> bool {
        self.invalidated.get()
    }

    fn clear_repaint(&mut self) {
        self.invalidated.set(false);
    }

    fn cursor(&self) -> CursorIcon {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use materia::{FullOutput, MonospaceMeasurer, Shape};
    use std::cell::RefCell;

    fn radio(label: &str) -> RadioButton {
        let mut radio = RadioButton::new(label);
        radio.resize(Size::new(120.0, 30.0));
        radio
    }

    fn center(radio: &RadioButton) -> Point {
        radio.check_bounds().center()
    }

    fn press(radio: &mut RadioButton, position: Point) {
        radio.event(&WidgetEvent::MouseMove { position });
        radio.event(&WidgetEvent::MouseDown {
            button: MouseButton::Left,
            position,
        });
    }

    fn release(radio: &mut RadioButton, position: Point) {
        radio.event(&WidgetEvent::MouseUp {
            button: MouseButton::Left,
            position,
        });
    }

    fn paint(radio: &RadioButton) -> FullOutput {
        let skin = Skin::light();
        let mut measurer = MonospaceMeasurer::default();
        let mut output = FullOutput::new();
        radio.paint(&mut PaintCtx::new(&skin, &mut measurer, &mut output));
        output
    }

    #[test]
    fn test_geometry_follows_height() {
        let mut radio = radio("A");
        assert_eq!(radio.box_offset(), 5.0);
        assert_eq!(
            radio.check_bounds(),
            Rect::from_min_size([5.0, 5.0], [19.0, 19.0])
        );

        radio.resize(Size::new(120.0, 20.0));
        assert_eq!(radio.box_offset(), 0.0);
        assert_eq!(RADIO_BUTTON_INNER_SIZE, 15.0);
    }

    #[test]
    fn test_mouse_state_machine() {
        let mut radio = radio("A");
        assert_eq!(radio.mouse_state(), MouseState::Out);

        radio.event(&WidgetEvent::MouseEnter);
        assert_eq!(radio.mouse_state(), MouseState::Hover);

        press(&mut radio, Point::new(100.0, 15.0));
        assert_eq!(radio.mouse_state(), MouseState::Down);

        release(&mut radio, Point::new(100.0, 15.0));
        assert_eq!(radio.mouse_state(), MouseState::Hover);

        radio.event(&WidgetEvent::MouseLeave);
        assert_eq!(radio.mouse_state(), MouseState::Out);
        assert_eq!(radio.mouse_location(), Point::outside());
    }

    #[test]
    fn test_cursor_hint_follows_check_area() {
        let mut radio = radio("A");
        let inside = center(&radio);
        radio.event(&WidgetEvent::MouseMove { position: inside });
        assert_eq!(radio.cursor(), CursorIcon::Pointer);

        radio.event(&WidgetEvent::MouseMove {
            position: Point::new(80.0, 15.0),
        });
        assert_eq!(radio.cursor(), CursorIcon::Default);
    }

    #[test]
    fn test_click_checks_and_animates() {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let sink = changes.clone();
        let mut radio = radio("A").on_change(move |checked| sink.borrow_mut().push(checked));
        radio.resize(Size::new(120.0, 30.0));

        let position = Point::new(60.0, 15.0);
        press(&mut radio, position);
        release(&mut radio, position);

        assert!(radio.is_checked());
        assert_eq!(*changes.borrow(), vec![true]);
        assert_eq!(radio.check_progress(), 0.0);

        while radio.tick() {}
        assert!((radio.check_progress() - 1.0).abs() < 1e-6);

        // Clicking a checked radio button never unchecks it
        press(&mut radio, position);
        release(&mut radio, position);
        assert!(radio.is_checked());
        assert_eq!(changes.borrow().len(), 1);
    }

    #[test]
    fn test_release_outside_is_not_a_click() {
        let mut radio = radio("A");
        press(&mut radio, Point::new(60.0, 15.0));
        release(&mut radio, Point::new(500.0, 15.0));
        assert!(!radio.is_checked());
    }

    #[test]
    fn test_ripple_only_starts_in_check_area() {
        let mut radio = radio("A");

        press(&mut radio, Point::new(100.0, 15.0));
        release(&mut radio, Point::new(100.0, 15.0));
        assert_eq!(radio.ripple_count(), 0);

        let inside = center(&radio);
        press(&mut radio, inside);
        assert_eq!(radio.ripple_count(), 1);
    }

    #[test]
    fn test_ripple_holds_while_pressed_and_fades_after_release() {
        let mut radio = radio("A");
        let inside = center(&radio);
        press(&mut radio, inside);

        for _ in 0..100 {
            radio.tick();
        }
        assert_eq!(radio.ripple_count(), 1);

        release(&mut radio, inside);
        while radio.tick() {}
        assert_eq!(radio.ripple_count(), 0);
        assert!(!radio.is_animating());
    }

    #[test]
    fn test_ripple_disabled_never_splashes() {
        let mut radio = radio("A").ripple(false);
        radio.resize(Size::new(120.0, 30.0));
        let at = center(&radio);
        press(&mut radio, at);
        assert_eq!(radio.ripple_count(), 0);
        assert_eq!(radio.margin(), DEFAULT_MARGIN);
    }

    #[test]
    fn test_toggling_ripple_resizes() {
        let mut radio = RadioButton::new("A");
        radio.resize(Size::new(100.0, 30.0));

        radio.set_ripple(false);
        assert_eq!(radio.size(), Size::new(100.0, COMPACT_HEIGHT));
        assert_eq!(radio.box_offset(), 0.0);
        assert_eq!(radio.margin(), DEFAULT_MARGIN);

        radio.set_ripple(true);
        assert_eq!(radio.size(), Size::new(100.0, RIPPLE_HEIGHT));
        assert_eq!(radio.box_offset(), 5.0);
        assert_eq!(radio.margin(), 0.0);
    }

    #[test]
    fn test_held_ripple_stops_requesting_repaints() {
        let mut radio = radio("A");
        let at = center(&radio);
        press(&mut radio, at);

        for _ in 0..200 {
            radio.tick();
        }
        radio.clear_repaint();

        assert!(!radio.tick());
        assert!(!radio.needs_repaint());
        assert_eq!(radio.ripple_count(), 1);
        assert!(radio.is_animating());
    }

    #[test]
    fn test_zero_check_increment_jumps() {
        let style = RadioButtonStyle::default().with_check_increment(0.0);
        let mut radio = radio("A").with_style(style);
        radio.set_checked(true);
        assert!(radio.tick());
        assert!((radio.check_progress() - 1.0).abs() < 1e-6);
        assert!(!radio.is_animating());
    }

    #[test]
    fn test_label_and_enabled_setters_invalidate() {
        let mut radio = radio("A");
        radio.clear_repaint();
        radio.set_label("B");
        assert_eq!(radio.label(), "B");
        assert!(radio.needs_repaint());

        radio.clear_repaint();
        radio.event(&WidgetEvent::MouseEnter);
        radio.set_enabled(false);
        assert!(!radio.is_enabled());
        assert!(radio.needs_repaint());
        assert_eq!(radio.mouse_state(), MouseState::Out);
    }

    #[test]
    fn test_disabled_ignores_input() {
        let mut radio = radio("A").disabled(true);
        radio.resize(Size::new(120.0, 30.0));
        let inside = center(&radio);
        press(&mut radio, inside);
        release(&mut radio, inside);

        assert!(!radio.is_checked());
        assert_eq!(radio.mouse_state(), MouseState::Out);
        assert_eq!(radio.ripple_count(), 0);
    }

    #[test]
    fn test_unchecking_reverses_animation() {
        let mut radio = radio("A").checked(true);
        assert_eq!(radio.check_progress(), 1.0);

        radio.set_checked(false);
        assert!(radio.is_animating());
        radio.tick();
        assert!(radio.check_progress() < 1.0);

        while radio.tick() {}
        assert_eq!(radio.check_progress(), 0.0);
    }

    #[test]
    fn test_repaint_flag_tracks_progress() {
        let mut radio = radio("A");
        radio.clear_repaint();
        assert!(!radio.needs_repaint());

        radio.set_checked(true);
        assert!(radio.needs_repaint());
        radio.clear_repaint();

        assert!(radio.tick());
        assert!(radio.needs_repaint());
    }

    #[test]
    fn test_paint_unchecked_layers() {
        let output = paint(&radio("A"));

        // clear, ring, accent ring, cutout, label
        assert_eq!(output.len(), 5);
        assert!(matches!(output.shapes[0], Shape::Rect(_)));
        assert!(matches!(output.shapes[3], Shape::Ellipse(_)));
        let Shape::Text(text) = &output.shapes[4] else {
            panic!("expected label");
        };
        assert_eq!(text.text, "A");
        assert_eq!(text.position.x, 27.0);
        assert_eq!(text.color, Skin::light().primary_text_color());

        // Accent layer is fully transparent while unchecked
        assert_eq!(output.shapes[2].color().a, 0.0);
    }

    #[test]
    fn test_paint_checked_draws_dot() {
        let output = paint(&radio("A").checked(true));
        assert_eq!(output.len(), 6);

        let Shape::Rect(dot) = &output.shapes[4] else {
            panic!("expected dot");
        };
        assert_eq!(dot.rect.width(), 9.0);
        assert_eq!(dot.rect.center(), Point::new(14.5, 14.5));
        assert_eq!(dot.fill.a, 1.0);
    }

    #[test]
    fn test_paint_ripple_tint() {
        let mut radio = radio("A").checked(true);
        radio.resize(Size::new(120.0, 30.0));
        let at = center(&radio);
        press(&mut radio, at);
        radio.tick();

        let output = paint(&radio);
        let Shape::Rect(splash) = &output.shapes[1] else {
            panic!("expected ripple");
        };
        // Pressed while checked: black splash, growing from 80 % of 27 px
        assert_eq!(splash.fill.r, 0.0);
        assert!(splash.fill.a > 0.0);
        assert!(splash.rect.width() > 27.0 * 0.8 && splash.rect.width() < 27.0);
    }

    #[test]
    fn test_paint_disabled_uses_hint_color() {
        let output = paint(&radio("A").disabled(true));
        // No accent layer for disabled buttons
        assert_eq!(output.len(), 4);
        assert_eq!(
            output.shapes[3].color(),
            Skin::light().disabled_or_hint_text_color()
        );
    }

    #[test]
    fn test_preferred_size() {
        let skin = Skin::light().with_font(materia::Font::default().with_size(10.0));
        let mut measurer = MonospaceMeasurer::default();

        let radio = RadioButton::new("abcd");
        assert_eq!(
            radio.preferred_size(&skin, &mut measurer),
            Size::new(5.0 + 22.0 + 20.0, RIPPLE_HEIGHT)
        );

        let compact = RadioButton::new("abcd").ripple(false);
        assert_eq!(
            compact.preferred_size(&skin, &mut measurer),
            Size::new(22.0 + 20.0, COMPACT_HEIGHT)
        );
    }
}
