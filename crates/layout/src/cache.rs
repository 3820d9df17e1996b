//! Memoization of oracle measurements.
//!
//! Oracles are idempotent for identical text, style and width, so answers can
//! be reused within a run. The splitter re-measures growing prefixes and the
//! packer re-measures deferred blocks, which makes repeats common.

use pageflow_style::{EdgeLengths, FragmentStyle, FrameStyle, Length};
use pageflow_traits::{Axis, Fragment, GeometryError, GeometryOracle};
use pageflow_types::{EdgePixels, Extent, FrameMetrics};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

#[derive(Hash, PartialEq, Eq, Clone, Debug)]
pub struct MeasureCacheKey {
    pub text: String,
    pub style: FragmentStyle,
    pub max_width_bits: u32,
}

/// Wraps an oracle and answers repeated `measure` calls from memory.
#[derive(Debug)]
pub struct MeasureCache<O> {
    inner: O,
    measurements: RefCell<HashMap<MeasureCacheKey, Extent>>,
    hits: Cell<usize>,
    misses: Cell<usize>,
}

impl<O: GeometryOracle> MeasureCache<O> {
    pub fn new(inner: O) -> Self {
        Self {
            inner,
            measurements: RefCell::new(HashMap::new()),
            hits: Cell::new(0),
            misses: Cell::new(0),
        }
    }

    pub fn inner(&self) -> &O {
        &self.inner
    }

    pub fn hits(&self) -> usize {
        self.hits.get()
    }

    pub fn misses(&self) -> usize {
        self.misses.get()
    }

    pub fn clear(&self) {
        self.measurements.borrow_mut().clear();
        self.hits.set(0);
        self.misses.set(0);
    }
}

impl<O: GeometryOracle> GeometryOracle for MeasureCache<O> {
    fn measure(&self, fragment: &Fragment<'_>) -> Result<Extent, GeometryError> {
        let key = MeasureCacheKey {
            text: fragment.text.to_string(),
            style: fragment.style.clone(),
            max_width_bits: fragment.max_width.to_bits(),
        };
        if let Some(extent) = self.measurements.borrow().get(&key) {
            self.hits.set(self.hits.get() + 1);
            return Ok(*extent);
        }

        self.misses.set(self.misses.get() + 1);
        let extent = self.inner.measure(fragment)?;
        self.measurements.borrow_mut().insert(key, extent);
        Ok(extent)
    }

    fn viewport(&self) -> Option<Extent> {
        self.inner.viewport()
    }

    fn font_pixels(&self, font_size: &Length) -> Result<f32, GeometryError> {
        self.inner.font_pixels(font_size)
    }

    fn length_pixels(
        &self,
        length: &Length,
        axis: Axis,
        font_px: f32,
    ) -> Result<f32, GeometryError> {
        self.inner.length_pixels(length, axis, font_px)
    }

    fn padding_pixels(
        &self,
        padding: &EdgeLengths,
        font_px: f32,
    ) -> Result<EdgePixels, GeometryError> {
        self.inner.padding_pixels(padding, font_px)
    }

    fn frame_metrics(&self, frame: &FrameStyle) -> Result<FrameMetrics, GeometryError> {
        self.inner.frame_metrics(frame)
    }
}
