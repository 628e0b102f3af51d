//! Color type and hex codec.

use crate::{error::ValueErrorKind, value::AttrValue};

/// A paint color: a fully specified RGB triple or the `none` sentinel.
///
/// `none` encodes the absence of paint and is distinct from every RGB value.
/// No alpha channel is modeled; decoding keeps only the low 24 bits of the
/// hex text, so any alpha information is discarded rather than stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// No paint; serialized as the literal text `none`.
    #[default]
    None,
    /// A 24-bit RGB color, one byte per channel.
    Rgb(u8, u8, u8),
}

impl Color {
    /// Creates a color from the low 24 bits of a packed `0xRRGGBB` value.
    pub fn from_rgb24(packed: u32) -> Self {
        Self::Rgb(
            ((packed >> 16) & 0xFF) as u8,
            ((packed >> 8) & 0xFF) as u8,
            (packed & 0xFF) as u8,
        )
    }
}

impl AttrValue for Color {
    /// Encodes as `#RRGGBB`, or the literal `none` for the sentinel.
    fn encode(&self) -> Result<String, ValueErrorKind> {
        Ok(match self {
            Self::None => "none".to_string(),
            Self::Rgb(r, g, b) => format!("#{r:02X}{g:02X}{b:02X}"),
        })
    }

    /// Decodes from hex text.
    ///
    /// The input is trimmed and lowercased; empty text and `none` decode to
    /// the sentinel. Otherwise a leading `#` is stripped and the rest parsed
    /// as hexadecimal, keeping the low 24 bits as R/G/B.
    fn decode(text: &str) -> Result<Self, ValueErrorKind> {
        let text = text.trim().to_lowercase();
        if text.is_empty() || text == "none" {
            return Ok(Self::None);
        }
        let hex = text.strip_prefix('#').unwrap_or(&text);
        let packed = u32::from_str_radix(hex, 16).map_err(|_| ValueErrorKind::Color)?;
        Ok(Self::from_rgb24(packed))
    }
}
