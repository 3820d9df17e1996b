//! Output types of a pagination run.

use crate::config::ResolvedConfig;
use pageflow_types::{FrameMetrics, PageId};
use serde::Serialize;

/// The part of one block placed on one page.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageFragment {
    /// Position of the source block in the content root.
    pub block_index: usize,
    pub text: String,
    /// Height reported by the oracle when the fragment was committed.
    pub height: f32,
    /// Whether the block began on an earlier page.
    pub continued: bool,
}

/// A sealed page. The sum of fragment heights never exceeds the page interior.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: PageId,
    pub fragments: Vec<PageFragment>,
    pub used_height: f32,
}

impl Page {
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

/// A block left out under the `skip` structure policy.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SkippedBlock {
    pub block_index: usize,
    pub remaining_height: f32,
}

/// The result of one pagination call.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Flow {
    pub pages: Vec<Page>,
    pub inner_height: f32,
    pub inner_width: f32,
    pub row_height: f32,
    pub config: ResolvedConfig,
    pub skipped: Vec<SkippedBlock>,
}

impl Flow {
    /// A flow with no pages and unmeasured geometry.
    pub fn empty(config: ResolvedConfig) -> Self {
        Self::new(Vec::new(), FrameMetrics::unmeasured(), config, Vec::new())
    }

    pub fn new(
        pages: Vec<Page>,
        metrics: FrameMetrics,
        config: ResolvedConfig,
        skipped: Vec<SkippedBlock>,
    ) -> Self {
        Self {
            pages,
            inner_height: metrics.inner_height,
            inner_width: metrics.inner_width,
            row_height: metrics.row_height,
            config,
            skipped,
        }
    }

    pub fn metrics(&self) -> FrameMetrics {
        FrameMetrics::new(self.inner_height, self.inner_width, self.row_height)
    }

    /// Every fragment, in page order.
    pub fn fragments(&self) -> impl Iterator<Item = &PageFragment> {
        self.pages.iter().flat_map(|page| page.fragments.iter())
    }
}
