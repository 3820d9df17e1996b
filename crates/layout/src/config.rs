//! Configuration resolution.
//!
//! Caller options are overlaid on fixed defaults, every linear dimension is
//! multiplied by `scale`, and the line height is turned into an absolute
//! length. Resolution is a pure function of the options plus the font-size
//! conversion, so resolving the same options twice gives identical results.

use crate::FlowError;
use pageflow_style::convert;
use pageflow_style::{BoxSizing, EdgeLengths, FragmentStyle, FrameStyle, Length, Unit};
use pageflow_traits::GeometryOracle;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_SCALE: f32 = 1.0;
pub const DEFAULT_LINE_HEIGHT: f32 = 1.5;

fn default_extent() -> Length {
    Length::new(100.0, Unit::Percent)
}

fn default_margin() -> EdgeLengths {
    EdgeLengths::all(Length::new(1.0, Unit::Rem))
}

fn default_font_size() -> Length {
    Length::pt(12.0)
}

/// Line height as a multiple of the font size, or as an absolute length.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum LineHeight {
    Multiplier(f32),
    Absolute(Length),
}

impl Default for LineHeight {
    fn default() -> Self {
        LineHeight::Multiplier(DEFAULT_LINE_HEIGHT)
    }
}

impl LineHeight {
    /// Resolves against an already scaled font size. A line height that is
    /// not a positive number would collapse or invert every fragment.
    pub fn resolve(&self, font_size: &Length, scale: f32) -> Result<Length, FlowError> {
        let value = match self {
            LineHeight::Multiplier(m) => *m,
            LineHeight::Absolute(length) => length.value,
        };
        if !(value.is_finite() && value > 0.0) {
            return Err(FlowError::Configuration(format!(
                "line height must be positive, got {}",
                self
            )));
        }
        Ok(match self {
            LineHeight::Multiplier(m) => font_size.scaled(*m),
            LineHeight::Absolute(length) => length.scaled(scale),
        })
    }
}

impl fmt::Display for LineHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineHeight::Multiplier(m) => write!(f, "{}", m),
            LineHeight::Absolute(length) => write!(f, "{}", length),
        }
    }
}

/// What to do with a block that needs splitting but is not a plain text run.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StructurePolicy {
    #[default]
    Abort,
    Skip,
}

/// A caller-supplied page box whose dimensions are used as given.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FrameTemplate {
    pub width: Length,
    pub height: Length,
    #[serde(default)]
    pub padding: EdgeLengths,
    #[serde(default)]
    pub box_sizing: BoxSizing,
}

impl FrameTemplate {
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            width: self.width.scaled(factor),
            height: self.height.scaled(factor),
            padding: self.padding.scaled(factor),
            box_sizing: self.box_sizing,
        }
    }
}

/// Style overrides applied to every measured fragment.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentTemplate {
    pub font_size: Option<Length>,
    pub line_height: Option<LineHeight>,
    pub padding: Option<EdgeLengths>,
    pub box_sizing: Option<BoxSizing>,
}

/// Partial pagination options. Unset fields take their defaults.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct FlowOptions {
    /// Outer page height including margin. Defaults to `100%`.
    pub height: Option<Length>,
    /// Outer page width including margin. Defaults to `100%`.
    pub width: Option<Length>,
    /// Page margin, CSS shorthand. Defaults to `1rem`.
    pub margin: Option<EdgeLengths>,
    /// Defaults to `12pt`.
    pub font_size: Option<Length>,
    /// Defaults to a multiplier of `1.5`.
    pub line_height: Option<LineHeight>,
    /// Uniform factor applied to every linear dimension. Defaults to `1`.
    pub scale: Option<f32>,
    pub page_template: Option<FrameTemplate>,
    pub content_template: Option<ContentTemplate>,
    pub on_unsupported_structure: Option<StructurePolicy>,
}

/// Fully resolved options. Immutable for the rest of a pagination call.
///
/// Every length is already multiplied by the scale factor, so the factor
/// itself is not kept.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
    pub height: Length,
    pub width: Length,
    pub margin: EdgeLengths,
    pub font_size: Length,
    pub line_height: Length,
    /// Rendered pixel size of `font_size`.
    pub font_pixels: f32,
    pub page_template: Option<FrameTemplate>,
    /// Style every fragment is measured with.
    pub content_style: FragmentStyle,
    pub on_unsupported_structure: StructurePolicy,
}

impl ResolvedConfig {
    /// Options that resolve back to this exact configuration.
    pub fn to_options(&self) -> FlowOptions {
        FlowOptions {
            height: Some(self.height.clone()),
            width: Some(self.width.clone()),
            margin: Some(self.margin.clone()),
            font_size: Some(self.font_size.clone()),
            line_height: Some(LineHeight::Absolute(self.line_height.clone())),
            scale: None,
            page_template: self.page_template.clone(),
            content_template: Some(ContentTemplate {
                font_size: Some(self.content_style.font_size.clone()),
                line_height: Some(LineHeight::Absolute(
                    self.content_style.line_height.clone(),
                )),
                padding: Some(self.content_style.padding.clone()),
                box_sizing: Some(self.content_style.box_sizing),
            }),
            on_unsupported_structure: Some(self.on_unsupported_structure),
        }
    }

    /// The page box before any margin adjustment.
    pub fn probe_frame(&self) -> FrameStyle {
        FrameStyle {
            width: self.width.clone(),
            height: self.height.clone(),
            padding: self.margin.clone(),
            box_sizing: BoxSizing::ContentBox,
            font_size: self.font_size.clone(),
            line_height: self.line_height.clone(),
        }
    }
}

/// Resolves options using the fixed font-size conversion.
///
/// Never consults an oracle, so it is safe to call when there is nothing to
/// measure.
pub fn resolve(options: &FlowOptions) -> Result<ResolvedConfig, FlowError> {
    resolve_with(options, |font_size| Ok(convert::font_pixels(font_size)?))
}

/// Resolves options, asking the oracle for the rendered font size.
pub fn resolve_measured<O: GeometryOracle + ?Sized>(
    options: &FlowOptions,
    oracle: &O,
) -> Result<ResolvedConfig, FlowError> {
    resolve_with(options, |font_size| Ok(oracle.font_pixels(font_size)?))
}

fn resolve_with<F>(options: &FlowOptions, font_pixels: F) -> Result<ResolvedConfig, FlowError>
where
    F: FnOnce(&Length) -> Result<f32, FlowError>,
{
    let scale = options.scale.unwrap_or(DEFAULT_SCALE);
    if !(scale.is_finite() && scale > 0.0) {
        return Err(FlowError::Configuration(format!(
            "scale must be a positive number, got {}",
            scale
        )));
    }

    let height = options.height.clone().unwrap_or_else(default_extent).scaled(scale);
    let width = options.width.clone().unwrap_or_else(default_extent).scaled(scale);
    let margin = options.margin.clone().unwrap_or_else(default_margin).scaled(scale);
    let font_size = options
        .font_size
        .clone()
        .unwrap_or_else(default_font_size)
        .scaled(scale);

    let base_line_height = options.line_height.clone().unwrap_or_default();
    let line_height = base_line_height.resolve(&font_size, scale)?;

    let content_style = match &options.content_template {
        Some(template) => {
            let template_font = template
                .font_size
                .as_ref()
                .map(|size| size.scaled(scale))
                .unwrap_or_else(|| font_size.clone());
            let template_line = template
                .line_height
                .as_ref()
                .unwrap_or(&base_line_height)
                .resolve(&template_font, scale)?;
            FragmentStyle {
                font_size: template_font,
                line_height: template_line,
                padding: template
                    .padding
                    .as_ref()
                    .map(|padding| padding.scaled(scale))
                    .unwrap_or_default(),
                box_sizing: template.box_sizing.unwrap_or_default(),
            }
        }
        None => FragmentStyle {
            font_size: font_size.clone(),
            line_height: line_height.clone(),
            padding: EdgeLengths::default(),
            box_sizing: BoxSizing::ContentBox,
        },
    };

    let font_pixels = font_pixels(&font_size)?;

    let resolved = ResolvedConfig {
        height,
        width,
        margin,
        font_size,
        line_height,
        font_pixels,
        page_template: options.page_template.as_ref().map(|t| t.scaled(scale)),
        content_style,
        on_unsupported_structure: options.on_unsupported_structure.unwrap_or_default(),
    };

    log::debug!(
        target: "pageflow::config",
        "resolved {} x {} page, margin {}, font {} ({}px) / {}",
        resolved.width,
        resolved.height,
        resolved.margin,
        resolved.font_size,
        resolved.font_pixels,
        resolved.line_height
    );
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pageflow_traits::{LookupFallback, LookupOracle};

    #[test]
    fn test_defaults() {
        let config = resolve(&FlowOptions::default()).unwrap();
        assert_eq!(config.height.to_string(), "100%");
        assert_eq!(config.width.to_string(), "100%");
        assert_eq!(config.margin.to_string(), "1rem");
        assert_eq!(config.font_size.to_string(), "12pt");
        assert_eq!(config.line_height.to_string(), "18pt");
        assert_eq!(config.font_pixels, 16.0);
        assert_eq!(config.on_unsupported_structure, StructurePolicy::Abort);
        assert!(config.page_template.is_none());
    }

    #[test]
    fn test_multiplier_line_height_uses_font_size() {
        let options = FlowOptions {
            line_height: Some(LineHeight::Multiplier(1.5)),
            font_size: Some(Length::pt(12.0)),
            scale: Some(1.0),
            ..Default::default()
        };
        let config = resolve(&options).unwrap();
        assert_eq!(config.line_height, Length::pt(18.0));
        assert_eq!(config.content_style.line_height, Length::pt(18.0));
    }

    #[test]
    fn test_scale_applies_to_every_linear_field() {
        let options = FlowOptions {
            height: Some(Length::px(1000.0)),
            width: Some(Length::px(500.0)),
            margin: Some(EdgeLengths::parse("10px 20px").unwrap()),
            font_size: Some(Length::pt(10.0)),
            line_height: Some(LineHeight::Absolute(Length::pt(14.0))),
            scale: Some(2.0),
            ..Default::default()
        };
        let config = resolve(&options).unwrap();
        assert_eq!(config.height, Length::px(2000.0));
        assert_eq!(config.width, Length::px(1000.0));
        assert_eq!(config.margin.to_string(), "20px 40px 20px 40px");
        assert_eq!(config.font_size, Length::pt(20.0));
        assert_eq!(config.line_height, Length::pt(28.0));
    }

    #[test]
    fn test_multiplier_is_not_scaled_twice() {
        let options = FlowOptions {
            font_size: Some(Length::pt(10.0)),
            scale: Some(2.0),
            ..Default::default()
        };
        let config = resolve(&options).unwrap();
        assert_eq!(config.line_height, Length::pt(30.0));
    }

    #[test]
    fn test_rejects_bad_scale() {
        for scale in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let options = FlowOptions {
                scale: Some(scale),
                ..Default::default()
            };
            assert!(matches!(
                resolve(&options),
                Err(FlowError::Configuration(_))
            ));
        }
    }

    #[test]
    fn test_rejects_non_positive_line_height() {
        let bad = [
            LineHeight::Multiplier(0.0),
            LineHeight::Multiplier(-1.0),
            LineHeight::Multiplier(f32::NAN),
            LineHeight::Absolute(Length::px(0.0)),
            LineHeight::Absolute(Length::pt(-4.0)),
        ];
        for line_height in bad {
            let options = FlowOptions {
                line_height: Some(line_height.clone()),
                ..Default::default()
            };
            assert!(
                matches!(resolve(&options), Err(FlowError::Configuration(_))),
                "accepted {}",
                line_height
            );

            let templated = FlowOptions {
                content_template: Some(ContentTemplate {
                    line_height: Some(line_height),
                    ..Default::default()
                }),
                ..Default::default()
            };
            assert!(matches!(
                resolve(&templated),
                Err(FlowError::Configuration(_))
            ));
        }
    }

    #[test]
    fn test_scaled_config_resolves_back_to_itself() {
        let options = FlowOptions {
            margin: Some(EdgeLengths::parse("1rem 2rem").unwrap()),
            line_height: Some(LineHeight::Absolute(Length::px(20.0))),
            scale: Some(2.0),
            ..Default::default()
        };
        let first = resolve(&options).unwrap();
        let again = resolve(&first.to_options()).unwrap();
        assert_eq!(first, again);
        assert_eq!(again.line_height, Length::px(40.0));
    }

    #[test]
    fn test_relative_font_size_is_a_configuration_error() {
        let options = FlowOptions {
            font_size: Some(Length::parse("1.2rem")),
            ..Default::default()
        };
        assert!(matches!(
            resolve(&options),
            Err(FlowError::Configuration(_))
        ));
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let options = FlowOptions {
            width: Some(Length::px(400.0)),
            margin: Some(EdgeLengths::parse("1in 2in 3in").unwrap()),
            font_size: Some(Length::pt(11.0)),
            scale: Some(1.5),
            content_template: Some(ContentTemplate {
                padding: Some(EdgeLengths::parse("2px").unwrap()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let first = resolve(&options).unwrap();
        let second = resolve(&options).unwrap();
        assert_eq!(first, second);

        let again = resolve(&first.to_options()).unwrap();
        assert_eq!(first, again);
    }

    #[test]
    fn test_content_template_overrides_fragment_style() {
        let options = FlowOptions {
            scale: Some(2.0),
            content_template: Some(ContentTemplate {
                font_size: Some(Length::pt(8.0)),
                padding: Some(EdgeLengths::parse("1px").unwrap()),
                box_sizing: Some(BoxSizing::BorderBox),
                ..Default::default()
            }),
            ..Default::default()
        };
        let config = resolve(&options).unwrap();
        assert_eq!(config.content_style.font_size, Length::pt(16.0));
        assert_eq!(config.content_style.line_height, Length::pt(24.0));
        assert_eq!(config.content_style.padding.to_string(), "2px");
        assert_eq!(config.content_style.box_sizing, BoxSizing::BorderBox);
        assert_eq!(config.font_size, Length::pt(24.0));
    }

    #[test]
    fn test_page_template_is_scaled() {
        let options = FlowOptions {
            scale: Some(0.5),
            page_template: Some(FrameTemplate {
                width: Length::px(600.0),
                height: Length::px(800.0),
                padding: EdgeLengths::parse("20px").unwrap(),
                box_sizing: BoxSizing::BorderBox,
            }),
            ..Default::default()
        };
        let template = resolve(&options).unwrap().page_template.unwrap();
        assert_eq!(template.width, Length::px(300.0));
        assert_eq!(template.padding.to_string(), "10px");
    }

    #[test]
    fn test_options_from_json() {
        let options: FlowOptions = serde_json::from_str(
            r#"{ "height": "11in", "margin": "0.5in 1in", "lineHeight": "20px",
                 "scale": 2, "onUnsupportedStructure": "skip" }"#,
        )
        .unwrap();
        assert_eq!(options.height, Some(Length::new(11.0, Unit::In)));
        assert_eq!(
            options.line_height,
            Some(LineHeight::Absolute(Length::px(20.0)))
        );
        assert_eq!(options.on_unsupported_structure, Some(StructurePolicy::Skip));

        let numeric: FlowOptions = serde_json::from_str(r#"{ "lineHeight": 1.25 }"#).unwrap();
        assert_eq!(numeric.line_height, Some(LineHeight::Multiplier(1.25)));
    }

    #[test]
    fn test_measured_resolution_asks_the_oracle() {
        let oracle = LookupOracle::new(LookupFallback::Fail);
        let config = resolve_measured(&FlowOptions::default(), &oracle).unwrap();
        assert_eq!(config.font_pixels, 16.0);
    }
}
