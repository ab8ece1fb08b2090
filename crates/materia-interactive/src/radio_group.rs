//! Vertical group of mutually exclusive radio buttons.

use crate::RadioButton;
use materia::{
    ContentMeasurer, CursorIcon, FullOutput, PaintCtx, Point, Rect, Size, Skin, Widget,
    WidgetEvent,
};
use std::time::Duration;

/// A column of radio buttons where at most one is checked
///
/// The group routes pointer events to the button under the cursor and keeps
/// the selection exclusive: when a click checks one button, every other
/// button is unchecked.
///
/// # Example
///
/// ```ignore
/// let mut group = RadioGroup::new(["Small", "Medium", "Large"])
///     .on_select(|index| println!("Selected: {}", index));
/// group.resize(Size::new(200.0, 90.0));
/// ```
pub struct RadioGroup {
    buttons: Vec<RadioButton>,
    origins: Vec<Point>,
    size: Size,
    hovered: Option<usize>,
    pressed: Option<usize>,
    selected: Option<usize>,
    on_select: Option<Box<dyn FnMut(usize)>>,
}

impl RadioGroup {
    /// Create a group with one unchecked button per label
    pub fn new(labels: impl IntoIterator<Item = impl Into<String>>) -> Self {
        labels.into_iter().fold(Self::empty(), |group, label| {
            group.with_button(RadioButton::new(label))
        })
    }

    /// Create a group without buttons
    pub fn empty() -> Self {
        Self {
            buttons: Vec::new(),
            origins: Vec::new(),
            size: Size::zero(),
            hovered: None,
            pressed: None,
            selected: None,
            on_select: None,
        }
    }

    /// Append a button
    ///
    /// The first checked button added becomes the selection; later checked
    /// buttons are added unchecked.
    pub fn with_button(mut self, button: RadioButton) -> Self {
        let button = match (button.is_checked(), self.selected) {
            (true, None) => {
                self.selected = Some(self.buttons.len());
                button
            }
            (true, Some(_)) => button.checked(false),
            (false, _) => button,
        };
        self.buttons.push(button);
        self.layout();
        self
    }

    /// Set a callback fired with the index of a newly selected button
    pub fn on_select(mut self, f: impl FnMut(usize) + 'static) -> Self {
        self.on_select = Some(Box::new(f));
        self
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    pub fn button(&self, index: usize) -> Option<&RadioButton> {
        self.buttons.get(index)
    }

    pub fn button_mut(&mut self, index: usize) -> Option<&mut RadioButton> {
        self.buttons.get_mut(index)
    }

    /// Toggle the ripple of the button at `index` and lay the group out again
    ///
    /// Returns `false` if `index` is out of range.
    pub fn set_ripple(&mut self, index: usize, ripple: bool) -> bool {
        let Some(button) = self.buttons.get_mut(index) else {
            return false;
        };
        button.set_ripple(ripple);
        self.layout();
        true
    }

    /// Index of the checked button, if any
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Check the button at `index` and uncheck all others
    ///
    /// Returns `false` if `index` is out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.buttons.len() {
            log::warn!(
                "radio group select({index}) out of range ({} buttons)",
                self.buttons.len()
            );
            return false;
        }

        for (i, button) in self.buttons.iter_mut().enumerate() {
            button.set_checked(i == index);
        }

        if self.selected != Some(index) {
            self.selected = Some(index);
            log::debug!("radio group selected {index}");
            if let Some(ref mut on_select) = self.on_select {
                on_select(index);
            }
        }
        true
    }

    /// Top-left corner of the button at `index` in group coordinates
    pub fn origin(&self, index: usize) -> Option<Point> {
        self.origins.get(index).copied()
    }

    fn layout(&mut self) {
        let mut y = 0.0;
        self.origins.clear();
        for button in &mut self.buttons {
            let margin = button.margin();
            let height = button.preferred_height();
            self.origins.push(Point::new(margin, y + margin));
            button.resize(Size::new((self.size.width - 2.0 * margin).max(0.0), height));
            y += height + 2.0 * margin;
        }
    }

    fn button_rect(&self, index: usize) -> Rect {
        let origin = self.origins[index];
        let size = self.buttons[index].size();
        Rect::from_min_size([origin.x, origin.y], [size.width, size.height])
    }

    fn button_at(&self, position: Point) -> Option<usize> {
        (0..self.buttons.len()).find(|&index| self.button_rect(index).contains(position))
    }

    fn forward(&mut self, index: usize, event: &WidgetEvent) {
        let origin = self.origins[index];
        let local = event.translated(-origin.x, -origin.y);
        self.buttons[index].event(&local);
    }

    fn set_hovered(&mut self, hovered: Option<usize>) {
        if self.hovered == hovered {
            return;
        }
        if let Some(previous) = self.hovered {
            self.forward(previous, &WidgetEvent::MouseLeave);
        }
        if let Some(next) = hovered {
            self.forward(next, &WidgetEvent::MouseEnter);
        }
        self.hovered = hovered;
    }

    /// Pick up a selection a child made on its own (a click)
    fn sync_selection(&mut self) {
        let newly_checked = self
            .buttons
            .iter()
            .enumerate()
            .find(|(index, button)| button.is_checked() && self.selected != Some(*index))
            .map(|(index, _)| index);

        if let Some(index) = newly_checked {
            self.select(index);
        }
    }
}

impl Widget for RadioGroup {
    fn event(&mut self, event: &WidgetEvent) {
        match *event {
            WidgetEvent::MouseEnter => {}
            WidgetEvent::MouseLeave => self.set_hovered(None),
            WidgetEvent::MouseMove { position } => {
                let target = self.button_at(position);
                self.set_hovered(target);
                if let Some(index) = target {
                    self.forward(index, event);
                }
            }
            WidgetEvent::MouseDown { position, .. } => {
                let target = self.button_at(position);
                self.set_hovered(target);
                self.pressed = target;
                if let Some(index) = target {
                    self.forward(index, event);
                }
            }
            WidgetEvent::MouseUp { .. } => {
                // The button that took the press receives the release
                if let Some(index) = self.pressed.take() {
                    self.forward(index, event);
                }
                self.sync_selection();
            }
        }
    }

    fn tick(&mut self) -> bool {
        self.buttons
            .iter_mut()
            .fold(false, |changed, button| button.tick() | changed)
    }

    fn update(&mut self, elapsed: Duration) -> bool {
        self.buttons
            .iter_mut()
            .fold(false, |changed, button| button.update(elapsed) | changed)
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
        self.layout();
    }

    fn size(&self) -> Size {
        self.size
    }

    fn preferred_size(&self, skin: &Skin, measurer: &mut dyn ContentMeasurer) -> Size {
        self.buttons.iter().fold(Size::zero(), |total, button| {
            let margin = button.margin();
            let preferred = button.preferred_size(skin, measurer);
            Size::new(
                total.width.max(preferred.width + 2.0 * margin),
                total.height + preferred.height + 2.0 * margin,
            )
        })
    }

    fn paint(&self, ctx: &mut PaintCtx<'_>) {
        ctx.output
            .fill_rect(self.size.to_rect(), ctx.skin.background_color());

        for (button, origin) in self.buttons.iter().zip(&self.origins) {
            let mut child = FullOutput::new();
            button.paint(&mut PaintCtx::new(ctx.skin, &mut *ctx.measurer, &mut child));
            ctx.output.extend_translated(child, origin.x, origin.y);
        }
    }

    fn needs_repaint(&self) -> bool {
        self.buttons.iter().any(|button| button.needs_repaint())
    }

    fn clear_repaint(&mut self) {
        for button in &mut self.buttons {
            button.clear_repaint();
        }
    }

    fn cursor(&self) -> CursorIcon {
        self.hovered
            .and_then(|index| self.buttons.get(index))
            .map(|button| button.cursor())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use materia::{MonospaceMeasurer, MouseButton, MouseState, Shape};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn group() -> RadioGroup {
        let mut group = RadioGroup::new(["Small", "Medium", "Large"]);
        group.resize(Size::new(200.0, 90.0));
        group
    }

    fn click(group: &mut RadioGroup, position: Point) {
        group.event(&WidgetEvent::MouseMove { position });
        group.event(&WidgetEvent::MouseDown {
            button: MouseButton::Left,
            position,
        });
        group.event(&WidgetEvent::MouseUp {
            button: MouseButton::Left,
            position,
        });
    }

    #[test]
    fn test_layout_stacks_buttons() {
        let group = group();
        assert_eq!(group.len(), 3);
        assert_eq!(group.origin(0), Some(Point::new(0.0, 0.0)));
        assert_eq!(group.origin(1), Some(Point::new(0.0, 30.0)));
        assert_eq!(group.origin(2), Some(Point::new(0.0, 60.0)));
        assert_eq!(group.button(2).map(|b| b.size()), Some(Size::new(200.0, 30.0)));
    }

    #[test]
    fn test_ripple_toggle_relayouts() {
        let mut group = group();
        assert!(group.set_ripple(0, false));

        assert_eq!(group.origin(0), Some(Point::new(3.0, 3.0)));
        assert_eq!(group.button(0).map(|b| b.size()), Some(Size::new(194.0, 20.0)));
        assert_eq!(group.origin(1), Some(Point::new(0.0, 26.0)));
        assert_eq!(group.origin(2), Some(Point::new(0.0, 56.0)));

        assert!(!group.set_ripple(7, false));
    }

    #[test]
    fn test_click_selects_exclusively() {
        let selections = Rc::new(RefCell::new(Vec::new()));
        let sink = selections.clone();
        let mut group = group().on_select(move |index| sink.borrow_mut().push(index));

        click(&mut group, Point::new(50.0, 45.0));
        assert_eq!(group.selected(), Some(1));

        click(&mut group, Point::new(50.0, 75.0));
        assert_eq!(group.selected(), Some(2));

        let checked: Vec<bool> = (0..3)
            .filter_map(|i| group.button(i).map(|b| b.is_checked()))
            .collect();
        assert_eq!(checked, vec![false, false, true]);
        assert_eq!(*selections.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_hover_moves_between_children() {
        let mut group = group();
        group.event(&WidgetEvent::MouseMove {
            position: Point::new(50.0, 10.0),
        });
        assert_eq!(group.button(0).map(|b| b.mouse_state()), Some(MouseState::Hover));

        group.event(&WidgetEvent::MouseMove {
            position: Point::new(50.0, 40.0),
        });
        assert_eq!(group.button(0).map(|b| b.mouse_state()), Some(MouseState::Out));
        assert_eq!(group.button(1).map(|b| b.mouse_state()), Some(MouseState::Hover));

        group.event(&WidgetEvent::MouseLeave);
        assert_eq!(group.button(1).map(|b| b.mouse_state()), Some(MouseState::Out));
    }

    #[test]
    fn test_cursor_from_hovered_child() {
        let mut group = group();
        let center = group.button(1).map(|b| b.check_bounds().center());
        let Some(center) = center else {
            panic!("missing button");
        };
        group.event(&WidgetEvent::MouseMove {
            position: center.offset(0.0, 30.0),
        });
        assert_eq!(group.cursor(), CursorIcon::Pointer);
    }

    #[test]
    fn test_first_checked_button_wins() {
        let group = RadioGroup::empty()
            .with_button(RadioButton::new("a"))
            .with_button(RadioButton::new("b").checked(true))
            .with_button(RadioButton::new("c").checked(true));

        assert_eq!(group.selected(), Some(1));
        assert_eq!(group.button(2).map(|b| b.is_checked()), Some(false));
    }

    #[test]
    fn test_select_out_of_range() {
        let mut group = group();
        assert!(!group.select(7));
        assert_eq!(group.selected(), None);
        assert!(group.select(0));
        assert_eq!(group.selected(), Some(0));
    }

    #[test]
    fn test_paint_offsets_children() {
        let group = group();
        let skin = Skin::light();
        let mut measurer = MonospaceMeasurer::default();
        let mut output = FullOutput::new();
        group.paint(&mut PaintCtx::new(&skin, &mut measurer, &mut output));

        let labels: Vec<(String, f32)> = output
            .shapes
            .iter()
            .filter_map(|shape| match shape {
                Shape::Text(text) => Some((text.text.clone(), text.position.y)),
                _ => None,
            })
            .collect();
        assert_eq!(labels.len(), 3);
        assert_eq!(labels[0].0, "Small");
        assert!((labels[2].1 - labels[0].1 - 60.0).abs() < 1e-4);
    }

    #[test]
    fn test_preferred_size_sums_heights() {
        let group = group();
        let skin = Skin::light();
        let mut measurer = MonospaceMeasurer::default();
        let size = group.preferred_size(&skin, &mut measurer);
        assert_eq!(size.height, 90.0);
    }
}
