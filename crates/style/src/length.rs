//! Numeric-with-unit values such as `12pt`, `1.5rem` or `100%`.
use crate::parsers::{parse_length, run_parser};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;
use std::hash::{Hash, Hasher};

/// The unit token trailing a length.
///
/// Unknown tokens are kept verbatim in `Other` so that every parsed length
/// renders back to its original unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Unit {
    Px,
    Pt,
    In,
    Cm,
    Mm,
    Pc,
    Rem,
    Em,
    Percent,
    #[default]
    None,
    Other(String),
}

impl Unit {
    /// Classifies a unit token. Matching is case-insensitive.
    pub fn from_token(token: &str) -> Self {
        match token.to_ascii_lowercase().as_str() {
            "px" => Unit::Px,
            "pt" => Unit::Pt,
            "in" => Unit::In,
            "cm" => Unit::Cm,
            "mm" => Unit::Mm,
            "pc" => Unit::Pc,
            "rem" => Unit::Rem,
            "em" => Unit::Em,
            "%" => Unit::Percent,
            "" => Unit::None,
            _ => Unit::Other(token.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Unit::Px => "px",
            Unit::Pt => "pt",
            Unit::In => "in",
            Unit::Cm => "cm",
            Unit::Mm => "mm",
            Unit::Pc => "pc",
            Unit::Rem => "rem",
            Unit::Em => "em",
            Unit::Percent => "%",
            Unit::None => "",
            Unit::Other(token) => token,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A number paired with a unit token.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Length {
    pub value: f32,
    pub unit: Unit,
}

impl Hash for Length {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.to_bits().hash(state);
        self.unit.hash(state);
    }
}

impl Eq for Length {}

impl Length {
    pub fn new(value: f32, unit: Unit) -> Self {
        Self { value, unit }
    }

    pub fn px(value: f32) -> Self {
        Self::new(value, Unit::Px)
    }

    pub fn pt(value: f32) -> Self {
        Self::new(value, Unit::Pt)
    }

    /// Parses an optional sign and numeral followed by any unit token.
    ///
    /// Parsing never fails: empty input yields `0` with no unit, and input
    /// without a numeral yields `0` with the whole input as its unit.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        run_parser(parse_length, trimmed)
            .unwrap_or_else(|_| Length::new(0.0, Unit::from_token(trimmed)))
    }

    /// Multiplies the value, leaving the unit untouched.
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            value: self.value * factor,
            unit: self.unit.clone(),
        }
    }
}

/// Reparses `input` and renders it with its value multiplied by `factor`.
pub fn scale(input: &str, factor: f32) -> String {
    Length::parse(input).scaled(factor).to_string()
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

impl From<&str> for Length {
    fn from(s: &str) -> Self {
        Length::parse(s)
    }
}

impl Serialize for Length {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Length {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LengthVisitor;
        impl de::Visitor<'_> for LengthVisitor {
            type Value = Length;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a length like '12pt' or a bare number")
            }

            fn visit_str<E>(self, value: &str) -> Result<Length, E>
            where
                E: de::Error,
            {
                Ok(Length::parse(value))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Length, E>
            where
                E: de::Error,
            {
                Ok(Length::new(value as f32, Unit::None))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Length, E>
            where
                E: de::Error,
            {
                Ok(Length::new(value as f32, Unit::None))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Length, E>
            where
                E: de::Error,
            {
                Ok(Length::new(value as f32, Unit::None))
            }
        }
        deserializer.deserialize_any(LengthVisitor)
    }
}
