//! Page frame construction and interior-geometry measurement.
//!
//! Callers declare the *visible* page size, margin included. Padding in a
//! content-box grows outward, so the declared box is shrunk by the rendered
//! padding before measuring: box + padding then equals the declared size.

use crate::FlowError;
use crate::config::{FrameTemplate, ResolvedConfig};
use pageflow_style::{FrameStyle, Length};
use pageflow_traits::{Axis, GeometryOracle};
use pageflow_types::FrameMetrics;

/// A configured page container and its measured interior.
#[derive(Debug, Clone, PartialEq)]
pub struct PageFrame {
    pub style: FrameStyle,
    pub metrics: FrameMetrics,
}

/// Builds the page frame for `config` and measures it.
pub fn build_frame<O: GeometryOracle + ?Sized>(
    config: &ResolvedConfig,
    oracle: &O,
) -> Result<PageFrame, FlowError> {
    let style = match &config.page_template {
        Some(template) => {
            log::debug!(target: "pageflow::frame", "using page template dimensions as given");
            template_frame(template, config)
        }
        None => margin_adjusted_frame(config, oracle)?,
    };

    let metrics = oracle.frame_metrics(&style)?;
    log::debug!(
        target: "pageflow::frame",
        "interior {}px x {}px, row {}px",
        metrics.inner_width,
        metrics.inner_height,
        metrics.row_height
    );
    Ok(PageFrame { style, metrics })
}

fn template_frame(template: &FrameTemplate, config: &ResolvedConfig) -> FrameStyle {
    FrameStyle {
        width: template.width.clone(),
        height: template.height.clone(),
        padding: template.padding.clone(),
        box_sizing: template.box_sizing,
        font_size: config.font_size.clone(),
        line_height: config.line_height.clone(),
    }
}

/// Re-sizes the probe box so that its footprint, padding included, matches
/// the declared outer width and height.
fn margin_adjusted_frame<O: GeometryOracle + ?Sized>(
    config: &ResolvedConfig,
    oracle: &O,
) -> Result<FrameStyle, FlowError> {
    let probe = config.probe_frame();
    let font_px = config.font_pixels;

    let outer_width = oracle.length_pixels(&probe.width, Axis::Horizontal, font_px)?;
    let outer_height = oracle.length_pixels(&probe.height, Axis::Vertical, font_px)?;
    let padding = oracle.padding_pixels(&probe.padding, font_px)?;

    let inner_width = outer_width - padding.horizontal();
    let inner_height = outer_height - padding.vertical();
    log::trace!(
        target: "pageflow::frame",
        "outer {}x{} minus padding {:?} -> {}x{}",
        outer_width,
        outer_height,
        padding,
        inner_width,
        inner_height
    );

    Ok(FrameStyle {
        width: Length::px(inner_width),
        height: Length::px(inner_height),
        ..probe
    })
}
