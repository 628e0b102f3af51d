//! Scalar codecs between typed values and attribute text.

use crate::error::ValueErrorKind;

/// A value convertible to and from an attribute's text form.
///
/// Implementations form a closed set (numbers, keyword enumerations, colors)
/// resolved at compile time by the generic accessors on
/// [`Element`](crate::element::Element).
///
/// Decoding the encoded form of any representable value must reproduce an
/// equal value. Text encodings are locale-invariant: `.` is the radix point
/// and there are no digit group separators.
pub trait AttrValue: Sized {
    /// Encodes the value as attribute text.
    ///
    /// Fails with [`ValueErrorKind::Unrepresentable`] when the value has no
    /// text form; the caller must not touch the attribute table in that case.
    fn encode(&self) -> Result<String, ValueErrorKind>;

    /// Decodes a value from attribute text.
    fn decode(text: &str) -> Result<Self, ValueErrorKind>;
}

impl AttrValue for f64 {
    fn encode(&self) -> Result<String, ValueErrorKind> {
        Ok(format!("{self}"))
    }

    fn decode(text: &str) -> Result<Self, ValueErrorKind> {
        text.trim().parse().map_err(|_| ValueErrorKind::Number)
    }
}

impl AttrValue for i32 {
    fn encode(&self) -> Result<String, ValueErrorKind> {
        Ok(format!("{self}"))
    }

    fn decode(text: &str) -> Result<Self, ValueErrorKind> {
        text.trim().parse().map_err(|_| ValueErrorKind::Number)
    }
}

/// The shape used to draw the endpoints of an open stroke.
///
/// [MDN | stroke-linecap](https://developer.mozilla.org/en-US/docs/Web/SVG/Attribute/stroke-linecap)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrokeLineCap {
    /// The stroke ends flat at the endpoint.
    #[default]
    Butt,
    /// The stroke ends with a semicircle.
    Round,
    /// The stroke ends with a half square.
    Square,
}

impl AttrValue for StrokeLineCap {
    fn encode(&self) -> Result<String, ValueErrorKind> {
        Ok(match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
        .to_string())
    }

    fn decode(text: &str) -> Result<Self, ValueErrorKind> {
        match text {
            "butt" => Ok(Self::Butt),
            "round" => Ok(Self::Round),
            "square" => Ok(Self::Square),
            _ => Err(ValueErrorKind::Keyword),
        }
    }
}

/// The algorithm deciding which regions count as the inside of a shape.
///
/// [MDN | fill-rule](https://developer.mozilla.org/en-US/docs/Web/SVG/Attribute/fill-rule)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillRule {
    /// Count crossings of the ray from the point; non-zero totals are inside.
    #[default]
    NonZero,
    /// Odd crossing counts are inside.
    EvenOdd,
}

impl AttrValue for FillRule {
    fn encode(&self) -> Result<String, ValueErrorKind> {
        Ok(match self {
            Self::NonZero => "nonzero",
            Self::EvenOdd => "evenodd",
        }
        .to_string())
    }

    fn decode(text: &str) -> Result<Self, ValueErrorKind> {
        match text {
            "nonzero" => Ok(Self::NonZero),
            "evenodd" => Ok(Self::EvenOdd),
            _ => Err(ValueErrorKind::Keyword),
        }
    }
}
