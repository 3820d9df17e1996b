//! Declared styles handed to a geometry oracle.
use crate::edges::EdgeLengths;
use crate::length::Length;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BoxSizing {
    #[default]
    ContentBox,
    BorderBox,
}

/// The style a text fragment is measured under.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub struct FragmentStyle {
    pub font_size: Length,
    pub line_height: Length,
    #[serde(default)]
    pub padding: EdgeLengths,
    #[serde(default)]
    pub box_sizing: BoxSizing,
}

/// The declared box of a page container.
///
/// `width` and `height` are the box's own size; whether `padding` is inside
/// or outside that size depends on `box_sizing`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FrameStyle {
    pub width: Length,
    pub height: Length,
    #[serde(default)]
    pub padding: EdgeLengths,
    #[serde(default)]
    pub box_sizing: BoxSizing,
    pub font_size: Length,
    pub line_height: Length,
}

impl FrameStyle {
    /// Style of a bare line of body text inside this frame.
    pub fn text_style(&self) -> FragmentStyle {
        FragmentStyle {
            font_size: self.font_size.clone(),
            line_height: self.line_height.clone(),
            padding: EdgeLengths::default(),
            box_sizing: BoxSizing::ContentBox,
        }
    }
}
