//! The pagination entry point.

use crate::block::ContentBlock;
use crate::cache::MeasureCache;
use crate::config::{self, FlowOptions};
use crate::frame::build_frame;
use crate::packer::FlowPacker;
use crate::page::Flow;
use crate::FlowError;
use pageflow_traits::GeometryOracle;

/// Paginates content against an injected geometry oracle.
///
/// Each call owns its own page state, so one engine can serve any number of
/// sequential calls.
#[derive(Debug)]
pub struct FlowEngine<O> {
    oracle: O,
}

impl<O: GeometryOracle> FlowEngine<O> {
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Resolves `options`, measures the page frame and packs `content` into pages.
    ///
    /// An empty content root returns no pages and unmeasured (NaN) geometry
    /// without consulting the oracle.
    pub fn paginate(
        &self,
        content: Vec<ContentBlock>,
        options: &FlowOptions,
    ) -> Result<Flow, FlowError> {
        if content.is_empty() {
            log::debug!(target: "pageflow::packer", "empty content root");
            return Ok(Flow::empty(config::resolve(options)?));
        }

        let config = config::resolve_measured(options, &self.oracle)?;
        let frame = build_frame(&config, &self.oracle)?;

        let packer = FlowPacker::new(
            &self.oracle,
            frame.metrics,
            &config.content_style,
            config.on_unsupported_structure,
        )?;
        let block_count = content.len();
        let packed = packer.pack(content)?;

        log::info!(
            target: "pageflow::packer",
            "{} blocks -> {} pages",
            block_count,
            packed.pages.len()
        );
        Ok(Flow::new(packed.pages, frame.metrics, config, packed.skipped))
    }
}

impl<O: GeometryOracle> FlowEngine<MeasureCache<O>> {
    /// An engine whose oracle answers repeated measurements from memory.
    pub fn cached(oracle: O) -> Self {
        Self::new(MeasureCache::new(oracle))
    }
}
