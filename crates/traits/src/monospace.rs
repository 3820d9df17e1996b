//! A deterministic oracle that sets text on a fixed character grid.

use crate::oracle::{Axis, Fragment, GeometryError, GeometryOracle};
use pageflow_style::{Length, Unit};
use pageflow_types::Extent;

/// Lays text out as if every glyph were `glyph_ratio` ems wide.
///
/// Words wrap greedily at spaces; a word longer than a whole line breaks
/// across as many lines as it needs. Empty text renders no lines, so a
/// fragment without text is only as tall as its vertical padding.
#[derive(Debug, Clone)]
pub struct MonospaceOracle {
    glyph_ratio: f32,
    viewport: Option<Extent>,
}

impl Default for MonospaceOracle {
    fn default() -> Self {
        Self {
            glyph_ratio: 0.5,
            viewport: None,
        }
    }
}

impl MonospaceOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the surface percentages resolve against.
    pub fn with_viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport = Some(Extent::new(width, height));
        self
    }

    pub fn with_glyph_ratio(mut self, glyph_ratio: f32) -> Self {
        self.glyph_ratio = glyph_ratio;
        self
    }

    fn line_pixels(&self, line_height: &Length, font_px: f32) -> Result<f32, GeometryError> {
        match line_height.unit {
            Unit::None => Ok(line_height.value * font_px),
            Unit::Percent => Ok(line_height.value * font_px / 100.0),
            _ => self.length_pixels(line_height, Axis::Vertical, font_px),
        }
    }

    /// Returns (line count, widest line in glyphs).
    fn wrap(text: &str, columns: usize) -> (usize, usize) {
        let mut lines = 0;
        let mut widest = 0;
        let mut current = 0;

        for word in text.split_whitespace() {
            let len = word.chars().count();
            if current > 0 && current + 1 + len <= columns {
                current += 1 + len;
                continue;
            }
            if current > 0 {
                lines += 1;
                widest = widest.max(current);
            }
            // Words wider than a line break across full lines.
            let full_lines = (len - 1) / columns;
            lines += full_lines;
            if full_lines > 0 {
                widest = columns;
            }
            current = len - full_lines * columns;
        }

        if current > 0 {
            lines += 1;
            widest = widest.max(current);
        }
        (lines, widest)
    }
}

impl GeometryOracle for MonospaceOracle {
    fn measure(&self, fragment: &Fragment<'_>) -> Result<Extent, GeometryError> {
        let style = fragment.style;
        let font_px = self.font_pixels(&style.font_size)?;
        let line_px = self.line_pixels(&style.line_height, font_px)?;
        let padding = self.padding_pixels(&style.padding, font_px)?;

        let glyph_px = font_px * self.glyph_ratio;
        let content_width = (fragment.max_width - padding.horizontal()).max(0.0);
        let columns = if glyph_px > 0.0 {
            ((content_width / glyph_px).floor() as usize).max(1)
        } else {
            usize::MAX
        };

        let (lines, widest) = Self::wrap(fragment.text, columns);
        log::trace!(
            target: "pageflow::oracle",
            "{} glyphs in {} columns -> {} lines",
            fragment.text.chars().count(),
            columns,
            lines
        );

        Ok(Extent::new(
            widest as f32 * glyph_px + padding.horizontal(),
            lines as f32 * line_px + padding.vertical(),
        ))
    }

    fn viewport(&self) -> Option<Extent> {
        self.viewport
    }
}
