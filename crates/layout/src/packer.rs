//! The flow packer: greedy, measurement-driven placement of blocks on pages.
//!
//! Blocks are consumed in order. Each one is measured whole; if it fits it is
//! committed to the current page, otherwise the text splitter places the
//! longest fitting prefix and the remainder is queued as the very next block.
//! A page is sealed once less than one row of space is left, once a block
//! had to be split or deferred, or once the input runs out.

use crate::block::ContentBlock;
use crate::config::StructurePolicy;
use crate::page::{Page, PageFragment, SkippedBlock};
use crate::splitter::TextSplitter;
use crate::FlowError;
use pageflow_style::FragmentStyle;
use pageflow_traits::{Fragment, GeometryOracle};
use pageflow_types::{FrameMetrics, PageId};

/// A block waiting to be placed.
#[derive(Debug, Clone)]
struct Pending {
    index: usize,
    block: ContentBlock,
    continued: bool,
}

/// Mutable state of one packing run.
///
/// `queue` is a stack holding the remaining blocks in reverse so that a
/// re-queued remainder is popped before any later block.
#[derive(Debug)]
struct PackerState {
    current: Vec<PageFragment>,
    used_height: f32,
    queue: Vec<Pending>,
    pages: Vec<Page>,
    skipped: Vec<SkippedBlock>,
}

impl PackerState {
    fn new(blocks: Vec<ContentBlock>) -> Self {
        let queue = blocks
            .into_iter()
            .enumerate()
            .rev()
            .map(|(index, block)| Pending {
                index,
                block,
                continued: false,
            })
            .collect();
        Self {
            current: Vec::new(),
            used_height: 0.0,
            queue,
            pages: Vec::new(),
            skipped: Vec::new(),
        }
    }

    fn commit(&mut self, fragment: PageFragment) {
        self.used_height += fragment.height;
        self.current.push(fragment);
    }

    /// Pushes the current page to the output and starts an empty one.
    /// An empty page is never emitted.
    fn seal(&mut self) {
        if self.current.is_empty() {
            return;
        }
        let page = Page {
            id: PageId::generate(),
            fragments: std::mem::take(&mut self.current),
            used_height: self.used_height,
        };
        log::debug!(
            target: "pageflow::packer",
            "sealed page {} with {} fragments ({}px)",
            self.pages.len() + 1,
            page.fragments.len(),
            page.used_height
        );
        self.pages.push(page);
        self.used_height = 0.0;
    }
}

/// Pages produced by a packing run.
#[derive(Debug, Clone)]
pub struct Packed {
    pub pages: Vec<Page>,
    pub skipped: Vec<SkippedBlock>,
}

/// Packs blocks into pages of uniform interior geometry.
#[derive(Debug)]
pub struct FlowPacker<'a, O: ?Sized> {
    oracle: &'a O,
    metrics: FrameMetrics,
    style: &'a FragmentStyle,
    policy: StructurePolicy,
}

impl<'a, O: GeometryOracle + ?Sized> FlowPacker<'a, O> {
    /// Fails with `UnmeasurableGeometry` unless the interior height is a
    /// positive number, so packing can never start on a page that holds nothing.
    pub fn new(
        oracle: &'a O,
        metrics: FrameMetrics,
        style: &'a FragmentStyle,
        policy: StructurePolicy,
    ) -> Result<Self, FlowError> {
        if !metrics.is_measurable() {
            return Err(FlowError::UnmeasurableGeometry {
                inner_height: metrics.inner_height,
            });
        }
        Ok(Self {
            oracle,
            metrics,
            style,
            policy,
        })
    }

    fn measure(&self, text: &str) -> Result<f32, FlowError> {
        Ok(self
            .oracle
            .measure(&Fragment::new(text, self.style, self.metrics.inner_width))?
            .height)
    }

    pub fn pack(&self, blocks: Vec<ContentBlock>) -> Result<Packed, FlowError> {
        let inner_height = self.metrics.inner_height;
        let mut state = PackerState::new(blocks);

        while let Some(pending) = state.queue.pop() {
            let text = pending.block.text_content();
            let height = self.measure(&text)?;

            if height == 0.0 {
                log::debug!(
                    target: "pageflow::packer",
                    "dropping block {}: renders with zero height",
                    pending.index
                );
                continue;
            }

            let remaining = inner_height - state.used_height;
            let fit_on_page = remaining - height > 0.0;

            if fit_on_page {
                state.commit(PageFragment {
                    block_index: pending.index,
                    text,
                    height,
                    continued: pending.continued,
                });
            } else if !self.place_split(&mut state, pending, &text, remaining)? {
                continue;
            }

            let remaining_after = inner_height - state.used_height;
            if remaining_after < self.metrics.row_height || !fit_on_page {
                state.seal();
            }
        }
        state.seal();

        Ok(Packed {
            pages: state.pages,
            skipped: state.skipped,
        })
    }

    /// Places the fitting prefix of a block that does not fit whole and
    /// queues the rest. A block that cannot be split is moved to a fresh page
    /// before it is rejected. Returns `false` if the block was skipped instead.
    fn place_split(
        &self,
        state: &mut PackerState,
        pending: Pending,
        text: &str,
        remaining: f32,
    ) -> Result<bool, FlowError> {
        if !pending.block.is_splittable() {
            if !state.current.is_empty() {
                log::debug!(
                    target: "pageflow::packer",
                    "block {} cannot be split, deferred to the next page",
                    pending.index
                );
                state.queue.push(pending);
                return Ok(true);
            }
            let error = FlowError::UnsupportedStructure {
                block_index: pending.index,
                remaining_height: remaining,
            };
            return match self.policy {
                StructurePolicy::Abort => Err(error),
                StructurePolicy::Skip => {
                    log::warn!(target: "pageflow::packer", "skipping block: {}", error);
                    state.skipped.push(SkippedBlock {
                        block_index: pending.index,
                        remaining_height: remaining,
                    });
                    Ok(false)
                }
            };
        }

        let words: Vec<&str> = text.split_whitespace().collect();
        let split = TextSplitter::new(self.oracle, self.style, self.metrics.inner_width)
            .split(&words, remaining)?;

        match split.head {
            Some(head) => {
                log::debug!(
                    target: "pageflow::packer",
                    "block {} split: {:?} stays, {:?} carries over",
                    pending.index,
                    head.text,
                    split.tail
                );
                state.commit(PageFragment {
                    block_index: pending.index,
                    text: head.text,
                    height: head.height,
                    continued: pending.continued,
                });
                if let Some(tail) = split.tail {
                    state.queue.push(Pending {
                        index: pending.index,
                        block: ContentBlock::text(tail),
                        continued: true,
                    });
                }
            }
            None if state.current.is_empty() => {
                return Err(FlowError::DegenerateBlock {
                    block_index: pending.index,
                    remaining_height: remaining,
                });
            }
            None => {
                log::debug!(
                    target: "pageflow::packer",
                    "block {} deferred to the next page",
                    pending.index
                );
                state.queue.push(pending);
            }
        }
        Ok(true)
    }
}
