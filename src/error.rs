//! Error types.

use thiserror::Error;

/// The reason a value failed to convert to or from attribute text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValueErrorKind {
    /// The text does not parse as a number.
    #[error("not a number")]
    Number,
    /// The text does not name a member of the expected keyword set.
    #[error("unknown keyword")]
    Keyword,
    /// The text is not a valid hex color or the `none` sentinel.
    #[error("invalid hex color")]
    Color,
    /// The value has no representation in the attribute's text form.
    #[error("value has no text representation")]
    Unrepresentable,
}

/// An error while marshalling a typed value to or from an attribute.
///
/// An *absent* attribute is never an error; it resolves to the caller's
/// default. Present-but-malformed text always surfaces here, carrying the
/// attribute name and the offending raw text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Attribute text is present but fails to decode for the requested type.
    #[error("malformed value {value:?} for attribute {name:?}: {kind}")]
    MalformedValue {
        /// The attribute's name.
        name: String,
        /// The raw attribute text that failed to decode.
        value: String,
        /// Why the text failed to decode.
        kind: ValueErrorKind,
    },
    /// A value cannot be encoded into the attribute's text form.
    ///
    /// No codec in this crate currently produces this; the category is kept
    /// so that unencodable values (e.g. an alpha color under the 24-bit hex
    /// codec) fail before the attribute table is touched.
    #[error("unrepresentable value for attribute {name:?}")]
    UnrepresentableValue {
        /// The attribute's name.
        name: String,
    },
}

impl Error {
    pub(crate) fn malformed(
        name: impl Into<String>,
        value: impl Into<String>,
        kind: ValueErrorKind,
    ) -> Self {
        Self::MalformedValue {
            name: name.into(),
            value: value.into(),
            kind,
        }
    }

    pub(crate) fn unrepresentable(name: impl Into<String>) -> Self {
        Self::UnrepresentableValue { name: name.into() }
    }
}
