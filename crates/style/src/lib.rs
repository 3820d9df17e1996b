pub mod convert;
pub mod edges;
pub mod fragment;
pub mod length;
pub mod parsers;

pub use convert::{PixelContext, UnitError};
pub use edges::EdgeLengths;
pub use fragment::{BoxSizing, FragmentStyle, FrameStyle};
pub use length::{Length, Unit};
pub use parsers::StyleParseError;
