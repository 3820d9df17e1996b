//! Measurement-driven pagination of block content.
//!
//! The engine never lays text out itself: page interiors and fragment
//! heights come from an injected [`GeometryOracle`], and this crate decides
//! what fits where.

mod error;

pub mod block;
pub mod cache;
pub mod config;
pub mod engine;
pub mod frame;
pub mod packer;
pub mod page;
pub mod splitter;

pub use self::block::{ContentBlock, Inline};
pub use self::cache::MeasureCache;
pub use self::config::{
    ContentTemplate, FlowOptions, FrameTemplate, LineHeight, ResolvedConfig, StructurePolicy,
};
pub use self::engine::FlowEngine;
pub use self::error::FlowError;
pub use self::frame::PageFrame;
pub use self::packer::{FlowPacker, Packed};
pub use self::page::{Flow, Page, PageFragment, SkippedBlock};
pub use self::splitter::{Split, TextSplitter};

pub use pageflow_traits::GeometryOracle;
pub use pageflow_types::FrameMetrics;

#[cfg(test)]
mod test_utils;
