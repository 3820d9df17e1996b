//! GeometryOracle trait for abstracting rendered-size measurement.
//!
//! The pagination engine never lays text out itself. Every height it packs
//! against comes from an oracle, which lets the engine run against:
//! - A live rendering surface
//! - A deterministic character grid (`MonospaceOracle`)
//! - A fixed lookup table for tests (`LookupOracle`)

use pageflow_style::convert::{self, PixelContext, UnitError};
use pageflow_style::{BoxSizing, EdgeLengths, FragmentStyle, FrameStyle, Length};
use pageflow_types::{EdgePixels, Extent, FrameMetrics};
use std::fmt::Debug;
use thiserror::Error;

/// Text measured to find the height of one line of body text.
pub const ROW_PROBE: &str = "M";

/// Error type for measurement operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error(transparent)]
    Unit(#[from] UnitError),

    #[error("Failed to measure '{text}': {message}")]
    MeasureFailed { text: String, message: String },
}

/// Which dimension a relative length refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// A styled run of text placed in a container `max_width` pixels wide.
#[derive(Debug, Clone, Copy)]
pub struct Fragment<'a> {
    pub text: &'a str,
    pub style: &'a FragmentStyle,
    pub max_width: f32,
}

impl<'a> Fragment<'a> {
    pub fn new(text: &'a str, style: &'a FragmentStyle, max_width: f32) -> Self {
        Self {
            text,
            style,
            max_width,
        }
    }
}

/// A source of rendered geometry.
///
/// Implementations must be idempotent: the same text, style and width always
/// produce the same extent. Answers may depend only on the declared font
/// size, line height, box sizing and padding.
///
/// Only [`measure`](GeometryOracle::measure) is required. The provided
/// methods implement the fixed conversion (96 px = 1 in = 72 pt) used when
/// no live surface is available; a live surface overrides them.
pub trait GeometryOracle: Debug {
    /// Rendered size of a fragment, padding included.
    fn measure(&self, fragment: &Fragment<'_>) -> Result<Extent, GeometryError>;

    /// Size that percentage page dimensions resolve against.
    fn viewport(&self) -> Option<Extent> {
        None
    }

    /// Rendered pixel size of a font size.
    fn font_pixels(&self, font_size: &Length) -> Result<f32, GeometryError> {
        Ok(convert::font_pixels(font_size)?)
    }

    /// Rendered pixel size of a general length.
    fn length_pixels(
        &self,
        length: &Length,
        axis: Axis,
        font_px: f32,
    ) -> Result<f32, GeometryError> {
        let base = self.viewport().map(|v| match axis {
            Axis::Horizontal => v.width,
            Axis::Vertical => v.height,
        });
        Ok(convert::length_pixels(
            length,
            &PixelContext::new(font_px, base),
        )?)
    }

    /// Rendered padding. Percentages refer to the horizontal axis on every edge.
    fn padding_pixels(
        &self,
        padding: &EdgeLengths,
        font_px: f32,
    ) -> Result<EdgePixels, GeometryError> {
        Ok(EdgePixels {
            top: self.length_pixels(&padding.top, Axis::Horizontal, font_px)?,
            right: self.length_pixels(&padding.right, Axis::Horizontal, font_px)?,
            bottom: self.length_pixels(&padding.bottom, Axis::Horizontal, font_px)?,
            left: self.length_pixels(&padding.left, Axis::Horizontal, font_px)?,
        })
    }

    /// Interior geometry of a fully configured, empty page frame.
    fn frame_metrics(&self, frame: &FrameStyle) -> Result<FrameMetrics, GeometryError> {
        measure_frame(self, frame)
    }
}

/// Computes frame geometry from the oracle's unit conversions and one
/// measured row of body text.
pub fn measure_frame<O: GeometryOracle + ?Sized>(
    oracle: &O,
    frame: &FrameStyle,
) -> Result<FrameMetrics, GeometryError> {
    let font_px = oracle.font_pixels(&frame.font_size)?;
    let width = oracle.length_pixels(&frame.width, Axis::Horizontal, font_px)?;
    let height = oracle.length_pixels(&frame.height, Axis::Vertical, font_px)?;
    let padding = oracle.padding_pixels(&frame.padding, font_px)?;

    let (inner_width, inner_height) = match frame.box_sizing {
        BoxSizing::ContentBox => (width, height),
        BoxSizing::BorderBox => (width - padding.horizontal(), height - padding.vertical()),
    };

    let text_style = frame.text_style();
    let row = oracle.measure(&Fragment::new(ROW_PROBE, &text_style, inner_width))?;
    Ok(FrameMetrics::new(inner_height, inner_width, row.height))
}

impl<O: GeometryOracle + ?Sized> GeometryOracle for &O {
    fn measure(&self, fragment: &Fragment<'_>) -> Result<Extent, GeometryError> {
        (**self).measure(fragment)
    }

    fn viewport(&self) -> Option<Extent> {
        (**self).viewport()
    }

    fn font_pixels(&self, font_size: &Length) -> Result<f32, GeometryError> {
        (**self).font_pixels(font_size)
    }

    fn length_pixels(
        &self,
        length: &Length,
        axis: Axis,
        font_px: f32,
    ) -> Result<f32, GeometryError> {
        (**self).length_pixels(length, axis, font_px)
    }

    fn padding_pixels(
        &self,
        padding: &EdgeLengths,
        font_px: f32,
    ) -> Result<EdgePixels, GeometryError> {
        (**self).padding_pixels(padding, font_px)
    }

    fn frame_metrics(&self, frame: &FrameStyle) -> Result<FrameMetrics, GeometryError> {
        (**self).frame_metrics(frame)
    }
}

impl<O: GeometryOracle + ?Sized> GeometryOracle for Box<O> {
    fn measure(&self, fragment: &Fragment<'_>) -> Result<Extent, GeometryError> {
        (**self).measure(fragment)
    }

    fn viewport(&self) -> Option<Extent> {
        (**self).viewport()
    }

    fn font_pixels(&self, font_size: &Length) -> Result<f32, GeometryError> {
        (**self).font_pixels(font_size)
    }

    fn length_pixels(
        &self,
        length: &Length,
        axis: Axis,
        font_px: f32,
    ) -> Result<f32, GeometryError> {
        (**self).length_pixels(length, axis, font_px)
    }

    fn padding_pixels(
        &self,
        padding: &EdgeLengths,
        font_px: f32,
    ) -> Result<EdgePixels, GeometryError> {
        (**self).padding_pixels(padding, font_px)
    }

    fn frame_metrics(&self, frame: &FrameStyle) -> Result<FrameMetrics, GeometryError> {
        (**self).frame_metrics(frame)
    }
}
