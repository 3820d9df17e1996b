//! Pageflow splits a sequence of content blocks into pages whose interior
//! height is fixed, using an injected [`GeometryOracle`] for every
//! measurement.
//!
//! ```no_run
//! use pageflow::{ContentBlock, FlowOptions, MonospaceOracle};
//!
//! let oracle = MonospaceOracle::new().with_viewport(816.0, 1056.0);
//! let content = vec![ContentBlock::text("A short paragraph.")];
//! let flow = pageflow::paginate(&oracle, content, &FlowOptions::default())?;
//! assert_eq!(flow.pages.len(), 1);
//! # Ok::<(), pageflow::FlowError>(())
//! ```

mod error;

pub use error::PipelineError;

pub use pageflow_layout::{
    ContentBlock, ContentTemplate, Flow, FlowEngine, FlowError, FlowOptions, FrameTemplate,
    Inline, LineHeight, MeasureCache, Page, PageFragment, ResolvedConfig, SkippedBlock,
    StructurePolicy,
};
pub use pageflow_style::{BoxSizing, EdgeLengths, Length, Unit};
pub use pageflow_traits::{
    Fragment, GeometryError, GeometryOracle, LookupFallback, LookupOracle, MonospaceOracle,
};
pub use pageflow_types::{FrameMetrics, PageId};

/// Paginates `content` once with a borrowed oracle.
pub fn paginate<O: GeometryOracle + ?Sized>(
    oracle: &O,
    content: Vec<ContentBlock>,
    options: &FlowOptions,
) -> Result<Flow, FlowError> {
    FlowEngine::new(oracle).paginate(content, options)
}

/// Paginates a JSON array of blocks with optional JSON options.
///
/// Each block is either a string or an object with a `children` array whose
/// entries are strings or nested blocks.
pub fn paginate_json<O: GeometryOracle + ?Sized>(
    oracle: &O,
    content: &str,
    options: Option<&str>,
) -> Result<Flow, PipelineError> {
    let content: Vec<ContentBlock> = serde_json::from_str(content)?;
    let options: FlowOptions = match options {
        Some(json) => serde_json::from_str(json)?,
        None => FlowOptions::default(),
    };
    Ok(paginate(oracle, content, &options)?)
}
