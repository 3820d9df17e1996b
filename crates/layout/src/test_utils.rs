use crate::block::ContentBlock;
use crate::config::StructurePolicy;
use crate::page::{Flow, Page};
use crate::packer::{FlowPacker, Packed};
use crate::FlowError;
use pageflow_style::{FragmentStyle, Length};
use pageflow_traits::GeometryOracle;
use pageflow_types::FrameMetrics;
use std::collections::BTreeMap;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn body_style() -> FragmentStyle {
    FragmentStyle {
        font_size: Length::pt(12.0),
        line_height: Length::pt(18.0),
        ..Default::default()
    }
}

pub fn blocks(texts: &[&str]) -> Vec<ContentBlock> {
    texts.iter().map(|t| ContentBlock::text(*t)).collect()
}

/// Packs `content` directly, bypassing configuration and frame measurement.
pub fn pack_with<O: GeometryOracle + ?Sized>(
    oracle: &O,
    content: Vec<ContentBlock>,
    inner_height: f32,
    row_height: f32,
    policy: StructurePolicy,
) -> Result<Packed, FlowError> {
    let style = body_style();
    let metrics = FrameMetrics::new(inner_height, 400.0, row_height);
    FlowPacker::new(oracle, metrics, &style, policy)?.pack(content)
}

/// The fragment texts of each page.
pub fn page_texts(pages: &[Page]) -> Vec<Vec<String>> {
    pages
        .iter()
        .map(|page| page.fragments.iter().map(|f| f.text.clone()).collect())
        .collect()
}

/// Rebuilds each block's text from its fragments, joined by single spaces.
pub fn reassemble(flow: &Flow) -> BTreeMap<usize, String> {
    let mut out: BTreeMap<usize, String> = BTreeMap::new();
    for fragment in flow.fragments() {
        let text = out.entry(fragment.block_index).or_default();
        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(&fragment.text);
    }
    out
}

/// Collapses runs of whitespace to single spaces.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
