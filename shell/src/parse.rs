use std::num::IntErrorKind;

use liblife::cell::Cell;
use strum::Display;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

/// A line that doesn't spell out a cell as `(x,y)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordinateError {
    #[error("missing `{delimiter}` in {line:?}, expected `(x,y)`")]
    MissingDelimiter { delimiter: char, line: String },

    #[error("{axis} coordinate {text:?} is not an integer")]
    NotAnInteger { axis: Axis, text: String },

    #[error("{axis} coordinate {text:?} is out of range")]
    OutOfRange { axis: Axis, text: String },
}

/// A generation count that isn't a non-negative integer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountError {
    #[error("{0:?} is not a number")]
    NotANumber(String),

    #[error("{0:?} is negative")]
    Negative(String),

    #[error("{0:?} is too large")]
    TooLarge(String),
}

/// Parses `(x,y)`, allowing whitespace around the line and around either number.
pub fn parse_cell(line: &str) -> Result<Cell, CoordinateError> {
    let missing = |delimiter| CoordinateError::MissingDelimiter {
        delimiter,
        line: line.to_owned(),
    };

    let inner = line.trim().strip_prefix('(').ok_or_else(|| missing('('))?;
    let inner = inner.strip_suffix(')').ok_or_else(|| missing(')'))?;
    let (x, y) = inner.split_once(',').ok_or_else(|| missing(','))?;

    Ok(Cell::new(
        parse_coordinate(Axis::X, x)?,
        parse_coordinate(Axis::Y, y)?,
    ))
}

fn parse_coordinate(axis: Axis, text: &str) -> Result<i64, CoordinateError> {
    let text = text.trim();

    text.parse().map_err(|e: std::num::ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => CoordinateError::OutOfRange {
            axis,
            text: text.to_owned(),
        },
        _ => CoordinateError::NotAnInteger {
            axis,
            text: text.to_owned(),
        },
    })
}

pub fn parse_count(line: &str) -> Result<u64, CountError> {
    let text = line.trim();

    match text.parse::<u64>() {
        Ok(count) => Ok(count),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
            Err(CountError::TooLarge(text.to_owned()))
        }
        // Signed forms: `-0` is still zero, anything below it is negative.
        Err(_) => match text.parse::<i128>() {
            Ok(0) => Ok(0),
            Ok(value) if value < 0 => Err(CountError::Negative(text.to_owned())),
            _ => Err(CountError::NotANumber(text.to_owned())),
        },
    }
}
