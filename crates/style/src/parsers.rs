//! Low-level nom parser functions for numeric-with-unit values.
//!
//! This module provides the composable parsers behind [`Length::parse`] and
//! the margin/padding shorthand accepted by [`EdgeLengths::parse`].

use crate::edges::EdgeLengths;
use crate::length::{Length, Unit};
use nom::bytes::complete::take_while1;
use nom::character::complete::{one_of, space0, space1};
use nom::combinator::{map, map_res, opt, recognize, rest};
use nom::multi::separated_list1;
use nom::sequence::delimited;
use nom::{IResult, Parser};
use thiserror::Error;

/// Errors that can occur during style parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },
}

// --- Numeral & Unit Parsers ---

/// Parses an optionally signed integer or decimal numeral (`12`, `-1.5`, `.5`, `3.`).
///
/// The whole digit-and-dot run is recognized first and parsed as one span, so
/// a fraction at the very end of the input is never cut off.
pub fn parse_number(input: &str) -> IResult<&str, f32> {
    map_res(
        recognize((
            opt(one_of("+-")),
            take_while1(|c: char| c.is_ascii_digit() || c == '.'),
        )),
        |s: &str| s.parse::<f32>(),
    )
    .parse(input)
}

/// Consumes the rest of the input as a unit token.
pub fn parse_unit(input: &str) -> IResult<&str, Unit> {
    map(rest, |s: &str| Unit::from_token(s.trim())).parse(input)
}

/// Parses a length: optional numeral followed by an arbitrary unit token.
///
/// A missing numeral reads as `0`, so this parser only fails on inputs a
/// nom combinator cannot represent.
pub fn parse_length(input: &str) -> IResult<&str, Length> {
    let (input, _) = space0(input)?;
    let (input, value) = opt(parse_number).parse(input)?;
    let (input, unit) = parse_unit(input)?;
    Ok((input, Length::new(value.unwrap_or(0.0), unit)))
}

/// Parses one whitespace-free length token inside a shorthand list.
fn length_token(input: &str) -> IResult<&str, Length> {
    map(take_while1(|c: char| !c.is_whitespace()), Length::parse).parse(input)
}

/// Parses CSS shorthand edges (1, 2, 3 or 4 values).
pub fn parse_shorthand_edges(input: &str) -> Result<EdgeLengths, StyleParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(EdgeLengths::default());
    }

    let parts_res: IResult<&str, Vec<Length>> =
        delimited(space0, separated_list1(space1, length_token), space0).parse(trimmed);

    match parts_res {
        Ok(("", parts)) => match parts.as_slice() {
            [all] => Ok(EdgeLengths::all(all.clone())),
            [y, x] => Ok(EdgeLengths {
                top: y.clone(),
                right: x.clone(),
                bottom: y.clone(),
                left: x.clone(),
            }),
            [top, x, bottom] => Ok(EdgeLengths {
                top: top.clone(),
                right: x.clone(),
                bottom: bottom.clone(),
                left: x.clone(),
            }),
            [top, right, bottom, left] => Ok(EdgeLengths {
                top: top.clone(),
                right: right.clone(),
                bottom: bottom.clone(),
                left: left.clone(),
            }),
            _ => Err(StyleParseError::InvalidValue {
                property: "margin".to_string(),
                value: format!(
                    "'{}' has {} values, expected 1, 2, 3 or 4",
                    input,
                    parts.len()
                ),
            }),
        },
        _ => Err(StyleParseError::Parse(format!(
            "Failed to parse edge shorthand: '{}'",
            input
        ))),
    }
}

/// Helper to run a nom parser and convert its result to a `Result<T, StyleParseError>`.
pub fn run_parser<'a, T, F>(parser: F, input: &'a str) -> Result<T, StyleParseError>
where
    F: Fn(&'a str) -> IResult<&'a str, T>,
{
    match parser(input.trim()) {
        Ok(("", result)) => Ok(result),
        Ok((rem, _)) => Err(StyleParseError::Parse(format!(
            "Parser did not consume all input. Remainder: '{}'",
            rem
        ))),
        Err(e) => Err(StyleParseError::Parse(e.to_string())),
    }
}
