//! Headless walk-through of a radio group.
//!
//! Simulates a click on the second option, drives the animation timer until
//! everything settles, and prints the shapes a renderer would draw.
//!
//! Run with `RUST_LOG=debug` to see the state transitions.

use materia::{
    ColorScheme, FullOutput, MouseButton, PaintCtx, Point, Shape, Skin, Widget, WidgetEvent,
    TICK_INTERVAL,
};
use materia_interactive::RadioGroup;
use std::time::Duration;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let skin = Skin::dark().with_color_scheme(ColorScheme::blue_grey());
    let mut measurer = materia_text::default_measurer();

    let mut group = RadioGroup::new(["Small", "Medium", "Large"])
        .on_select(|index| log::info!("selected option {index}"));
    let preferred = group.preferred_size(&skin, measurer.as_mut());
    group.resize(preferred);
    log::info!(
        "group laid out at {}x{}",
        preferred.width,
        preferred.height
    );

    let target = group
        .origin(1)
        .zip(group.button(1))
        .map(|(origin, button)| {
            let center = button.check_bounds().center();
            Point::new(origin.x + center.x, origin.y + center.y)
        })
        .unwrap_or_else(Point::zero);

    group.event(&WidgetEvent::MouseEnter);
    group.event(&WidgetEvent::MouseMove { position: target });
    group.event(&WidgetEvent::MouseDown {
        button: MouseButton::Left,
        position: target,
    });

    // Hold the button for a few frames so the splash reaches full size
    let mut elapsed = Duration::ZERO;
    for _ in 0..20 {
        group.tick();
        elapsed += TICK_INTERVAL;
    }

    group.event(&WidgetEvent::MouseUp {
        button: MouseButton::Left,
        position: target,
    });

    let mut frames = 0;
    while group.tick() {
        frames += 1;
        elapsed += TICK_INTERVAL;
    }
    log::info!("animations settled after {frames} ticks ({elapsed:?} total)");

    let mut output = FullOutput::new();
    group.paint(&mut PaintCtx::new(&skin, measurer.as_mut(), &mut output));
    group.clear_repaint();

    for shape in &output.shapes {
        match shape {
            Shape::Rect(rect) => println!(
                "rect    {:?} -> {:?} radius {:.1} {:?}",
                rect.rect.min,
                rect.rect.max,
                rect.corner_shape.extent(),
                rect.fill
            ),
            Shape::Ellipse(ellipse) => println!(
                "ellipse {:?} -> {:?} {:?}",
                ellipse.rect.min, ellipse.rect.max, ellipse.fill
            ),
            Shape::Text(text) => println!(
                "text    {:?} at ({:.1}, {:.1}) {:?}",
                text.text, text.position.x, text.position.y, text.color
            ),
        }
    }
}
