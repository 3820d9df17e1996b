use pageflow_style::{StyleParseError, UnitError};
use pageflow_traits::GeometryError;
use thiserror::Error;

/// Failures that abort a pagination call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlowError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Page interior height {inner_height} is not measurable; pagination aborted.")]
    UnmeasurableGeometry { inner_height: f32 },

    #[error(
        "Block {block_index} must be split with {remaining_height:.2}px remaining, but its first child is not plain text."
    )]
    UnsupportedStructure {
        block_index: usize,
        remaining_height: f32,
    },

    #[error(
        "Block {block_index} cannot fit a single word in the {remaining_height:.2}px of a fresh page."
    )]
    DegenerateBlock {
        block_index: usize,
        remaining_height: f32,
    },

    #[error("Geometry error: {0}")]
    Geometry(GeometryError),
}

impl From<GeometryError> for FlowError {
    fn from(e: GeometryError) -> Self {
        match e {
            GeometryError::Unit(unit) => FlowError::Configuration(unit.to_string()),
            other => FlowError::Geometry(other),
        }
    }
}

impl From<UnitError> for FlowError {
    fn from(e: UnitError) -> Self {
        FlowError::Configuration(e.to_string())
    }
}

impl From<StyleParseError> for FlowError {
    fn from(e: StyleParseError) -> Self {
        FlowError::Configuration(e.to_string())
    }
}
