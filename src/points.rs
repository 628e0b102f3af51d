//! Point-list codecs for the `points` attribute.
//!
//! Two textual projections exist over the same attribute text and are *not*
//! interchangeable:
//!
//! - the pairwise format ([`parse_pairs`]/[`write_pairs`]) splits on `,`
//!   alone, tolerating whitespace around each scalar, and regroups the flat
//!   token stream into `(x, y)` pairs;
//! - the flat format ([`parse_flat`]/[`write_flat`]) splits on the exact
//!   `", "` separator and yields one scalar per token, leaving the
//!   alternating x/y interpretation to the caller.
//!
//! Both writers emit the same shape of text (`x,y` pairs joined by `", "`
//! versus scalars joined by `", "`), but text produced by one format is not
//! guaranteed lossless under the other's reader. The pairwise writer's
//! output is lossless under its own reader, so it is the canonical storage
//! encoding; the flat format survives as a compatibility surface.

use itertools::Itertools;

use crate::error::ValueErrorKind;

/// A 2D coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// The horizontal coordinate.
    pub x: f64,
    /// The vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point from its coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Parses pairwise point-list text.
///
/// The text is split on `,` alone; each token is trimmed and parsed as one
/// scalar, and the resulting stream is grouped into `(x, y)` pairs. A
/// trailing unpaired scalar is dropped. Malformed scalars are an error.
pub fn parse_pairs(text: &str) -> Result<Vec<Point>, ValueErrorKind> {
    let mut points = Vec::new();
    let mut scalars = text.split(',').map(str::trim).filter(|t| !t.is_empty());
    while let Some(x) = scalars.next() {
        let x = parse_scalar(x)?;
        let Some(y) = scalars.next() else { break };
        points.push(Point::new(x, parse_scalar(y)?));
    }
    Ok(points)
}

/// Writes pairwise point-list text: `x,y` pairs joined by `", "`.
pub fn write_pairs(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .join(", ")
}

/// Parses flat point-list text.
///
/// The text is split on the literal `", "` separator only; each remaining
/// token must parse as one scalar. Text written without that exact separator
/// (e.g. `1,2,3,4`) stays a single token and fails to parse.
pub fn parse_flat(text: &str) -> Result<Vec<f64>, ValueErrorKind> {
    text.split(", ")
        .filter(|t| !t.is_empty())
        .map(parse_scalar)
        .collect()
}

/// Writes flat point-list text: scalars joined by `", "`.
pub fn write_flat(scalars: &[f64]) -> String {
    scalars.iter().map(f64::to_string).join(", ")
}

fn parse_scalar(token: &str) -> Result<f64, ValueErrorKind> {
    token.parse().map_err(|_| ValueErrorKind::Number)
}
