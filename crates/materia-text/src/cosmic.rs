use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use materia::{ContentMeasurer, IntrinsicSize, MeasureTextRequest};

/// Line height as a multiple of the font size
const LINE_HEIGHT: f32 = 1.2;

/// Width of the layout box; labels are single-line so this only has to be large
const MAX_WIDTH: f32 = 10_000.0;

/// [`ContentMeasurer`] backed by cosmic-text shaping
pub struct CosmicMeasurer {
    font_system: FontSystem,
}

impl CosmicMeasurer {
    /// Measurer using the fonts installed on the system
    pub fn new() -> Self {
        Self {
            font_system: FontSystem::new(),
        }
    }
}

impl Default for CosmicMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CosmicMeasurer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CosmicMeasurer").finish_non_exhaustive()
    }
}

impl ContentMeasurer for CosmicMeasurer {
    fn measure_text(&mut self, request: MeasureTextRequest<'_>) -> IntrinsicSize {
        if request.text.is_empty() || request.font_size <= 0.0 {
            return IntrinsicSize::zero();
        }

        let line_height = request.font_size * LINE_HEIGHT;
        let metrics = Metrics::new(request.font_size, line_height);
        let mut buffer = Buffer::new(&mut self.font_system, metrics);
        buffer.set_size(
            &mut self.font_system,
            Some(MAX_WIDTH),
            Some(line_height * 2.0),
        );

        let family = match request.family {
            Some(name) => Family::Name(name),
            None => Family::SansSerif,
        };
        buffer.set_text(
            &mut self.font_system,
            request.text,
            Attrs::new().family(family),
            Shaping::Advanced,
        );
        buffer.shape_until_scroll(&mut self.font_system, false);

        let mut width = 0.0f32;
        let mut lines = 0usize;
        for run in buffer.layout_runs() {
            lines += 1;
            for glyph in run.glyphs.iter() {
                width = width.max(glyph.x + glyph.w);
            }
        }

        if width == 0.0 {
            log::trace!("no glyphs shaped for {:?}", request.text);
        }

        IntrinsicSize::new(width, line_height * lines.max(1) as f32)
    }
}
