pub mod geometry;
pub mod ids;

pub use geometry::{EdgePixels, Extent, FrameMetrics};
pub use ids::PageId;
