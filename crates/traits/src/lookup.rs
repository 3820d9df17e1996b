//! A table-driven oracle for deterministic tests and fixtures.

use crate::oracle::{Fragment, GeometryError, GeometryOracle, measure_frame};
use pageflow_style::FrameStyle;
use pageflow_types::{Extent, FrameMetrics};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// What a [`LookupOracle`] answers for text it has no entry for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LookupFallback {
    /// Report a measurement error.
    Fail,
    /// Every unknown fragment has this height.
    Fixed(f32),
    /// Height grows by this much per whitespace-separated word.
    PerWord(f32),
}

/// Answers heights from a table keyed by fragment text.
///
/// Frame geometry is either fixed up front with
/// [`with_frame`](LookupOracle::with_frame) or computed by the default
/// conversion. Every `measure` call is counted so tests can assert how often
/// (or whether) the oracle was consulted.
#[derive(Debug)]
pub struct LookupOracle {
    heights: HashMap<String, f32>,
    fallback: LookupFallback,
    frame: Option<FrameMetrics>,
    measurements: AtomicUsize,
}

impl Default for LookupOracle {
    fn default() -> Self {
        Self::new(LookupFallback::Fail)
    }
}

impl LookupOracle {
    pub fn new(fallback: LookupFallback) -> Self {
        Self {
            heights: HashMap::new(),
            fallback,
            frame: None,
            measurements: AtomicUsize::new(0),
        }
    }

    /// Registers the height of an exact text.
    pub fn with_height(mut self, text: impl Into<String>, height: f32) -> Self {
        self.heights.insert(text.into(), height);
        self
    }

    /// Fixes the geometry reported for every page frame.
    pub fn with_frame(mut self, inner_height: f32, inner_width: f32, row_height: f32) -> Self {
        self.frame = Some(FrameMetrics::new(inner_height, inner_width, row_height));
        self
    }

    /// Number of `measure` calls answered so far.
    pub fn measurements(&self) -> usize {
        self.measurements.load(Ordering::Relaxed)
    }

    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }
}

impl GeometryOracle for LookupOracle {
    fn measure(&self, fragment: &Fragment<'_>) -> Result<Extent, GeometryError> {
        self.measurements.fetch_add(1, Ordering::Relaxed);

        let height = match (self.heights.get(fragment.text), self.fallback) {
            (Some(height), _) => *height,
            (None, LookupFallback::Fixed(height)) => height,
            (None, LookupFallback::PerWord(height)) => {
                fragment.text.split_whitespace().count() as f32 * height
            }
            (None, LookupFallback::Fail) => {
                return Err(GeometryError::MeasureFailed {
                    text: fragment.text.to_string(),
                    message: "no height registered".to_string(),
                });
            }
        };
        Ok(Extent::new(fragment.max_width, height))
    }

    fn frame_metrics(&self, frame: &FrameStyle) -> Result<FrameMetrics, GeometryError> {
        match self.frame {
            Some(metrics) => Ok(metrics),
            None => measure_frame(self, frame),
        }
    }
}
