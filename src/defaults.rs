//! Default attribute values, per the SVG specification.
//!
//! These are the values the typed getters fall back to when the attribute is
//! absent; absence is never an error.

use crate::color::Color;
use crate::value::{FillRule, StrokeLineCap};

/// Default `fill` paint: black.
pub const FILL: Color = Color::Rgb(0, 0, 0);
/// Default `stroke` paint: no paint.
pub const STROKE: Color = Color::None;
/// Default `fill-opacity`.
pub const FILL_OPACITY: f64 = 1.0;
/// Default `stroke-opacity`.
pub const STROKE_OPACITY: f64 = 1.0;
/// Default `stroke-width`.
pub const STROKE_WIDTH: f64 = 1.0;
/// Default `stroke-linecap`.
pub const STROKE_LINECAP: StrokeLineCap = StrokeLineCap::Butt;
/// Default `fill-rule`.
pub const FILL_RULE: FillRule = FillRule::NonZero;
/// Default circle center x.
pub const CX: f64 = 0.0;
/// Default circle center y.
pub const CY: f64 = 0.0;
/// Default circle radius.
pub const R: f64 = 0.0;
