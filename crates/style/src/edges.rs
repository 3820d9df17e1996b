//! Per-edge lengths for margins and padding.
use crate::length::Length;
use crate::parsers::{StyleParseError, parse_shorthand_edges};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct EdgeLengths {
    pub top: Length,
    pub right: Length,
    pub bottom: Length,
    pub left: Length,
}

impl EdgeLengths {
    pub fn all(value: Length) -> Self {
        Self {
            top: value.clone(),
            right: value.clone(),
            bottom: value.clone(),
            left: value,
        }
    }

    /// Parse CSS-style shorthand (1, 2, 3 or 4 values).
    pub fn parse(input: &str) -> Result<Self, StyleParseError> {
        parse_shorthand_edges(input)
    }

    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            top: self.top.scaled(factor),
            right: self.right.scaled(factor),
            bottom: self.bottom.scaled(factor),
            left: self.left.scaled(factor),
        }
    }

    pub fn is_uniform(&self) -> bool {
        self.top == self.right && self.top == self.bottom && self.top == self.left
    }
}

impl fmt::Display for EdgeLengths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_uniform() {
            write!(f, "{}", self.top)
        } else {
            write!(
                f,
                "{} {} {} {}",
                self.top, self.right, self.bottom, self.left
            )
        }
    }
}

impl Serialize for EdgeLengths {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EdgeLengths {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EdgesVisitor;
        impl<'de> de::Visitor<'de> for EdgesVisitor {
            type Value = EdgeLengths;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string like '1rem' or '10pt 20pt' or a map")
            }

            fn visit_str<E>(self, value: &str) -> Result<EdgeLengths, E>
            where
                E: de::Error,
            {
                EdgeLengths::parse(value).map_err(E::custom)
            }

            fn visit_map<A>(self, mut map: A) -> Result<EdgeLengths, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut edges = EdgeLengths::default();
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "top" => edges.top = map.next_value()?,
                        "right" => edges.right = map.next_value()?,
                        "bottom" => edges.bottom = map.next_value()?,
                        "left" => edges.left = map.next_value()?,
                        _ => {
                            map.next_value::<de::IgnoredAny>()?;
                        }
                    }
                }
                Ok(edges)
            }
        }
        deserializer.deserialize_any(EdgesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::Unit;

    #[test]
    fn test_scaled_scales_every_edge() {
        let edges = EdgeLengths::parse("1rem 2px").unwrap().scaled(2.0);
        assert_eq!(edges.top, Length::new(2.0, Unit::Rem));
        assert_eq!(edges.right, Length::px(4.0));
        assert_eq!(edges.to_string(), "2rem 4px 2rem 4px");
    }

    #[test]
    fn test_uniform_edges_render_as_one_value() {
        let edges = EdgeLengths::parse("1rem").unwrap();
        assert_eq!(edges.to_string(), "1rem");
    }

    #[test]
    fn test_deserialize_from_map() {
        let edges: EdgeLengths =
            serde_json::from_str(r#"{ "top": "1pt", "left": 3, "color": "red" }"#).unwrap();
        assert_eq!(edges.top, Length::pt(1.0));
        assert_eq!(edges.left, Length::new(3.0, Unit::None));
        assert_eq!(edges.bottom, Length::default());
    }

    #[test]
    fn test_deserialize_rejects_bad_shorthand() {
        let result: Result<EdgeLengths, _> = serde_json::from_str("\"1 2 3 4 5\"");
        assert!(result.is_err());
    }
}
