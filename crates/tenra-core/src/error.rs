//! Conversion failure reporting.

use std::fmt;

use thiserror::Error;

use crate::dtype::DType;

/// Why a checked conversion rejected the value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CastFailure {
    /// The value falls outside the destination's representable range.
    OutOfRange,
    /// A fractional part would be lost.
    FractionalPart,
    /// A nonzero imaginary part would be discarded.
    NonZeroImaginary,
}

impl fmt::Display for CastFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            CastFailure::OutOfRange => "value out of range",
            CastFailure::FractionalPart => "fractional part would be lost",
            CastFailure::NonZeroImaginary => "nonzero imaginary part would be discarded",
        };
        f.write_str(msg)
    }
}

/// A scalar could not be represented exactly in the requested type.
///
/// Raised synchronously by the checked accessors; always recoverable — the
/// caller may retry with a wider destination type. The core itself never
/// retries, coerces, or truncates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[error("cannot represent {from} scalar as {to}: {kind}")]
pub struct ConversionError {
    /// Canonical tag of the source category.
    pub from: DType,
    /// Requested destination type.
    pub to: DType,
    pub kind: CastFailure,
}

impl ConversionError {
    pub(crate) fn new(from: DType, to: DType, kind: CastFailure) -> ConversionError {
        ConversionError { from, to, kind }
    }

    /// Same failure, reported against a different destination. Used when a
    /// conversion delegates to a component type.
    pub(crate) fn retarget(self, to: DType) -> ConversionError {
        ConversionError { to, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_source_and_destination() {
        let err = ConversionError::new(DType::Int64, DType::Int8, CastFailure::OutOfRange);
        assert_eq!(
            err.to_string(),
            "cannot represent int64 scalar as int8: value out of range"
        );
    }

    #[test]
    fn test_retarget_keeps_source_and_kind() {
        let err = ConversionError::new(DType::Complex128, DType::Float32, CastFailure::OutOfRange)
            .retarget(DType::Complex64);
        assert_eq!(err.from, DType::Complex128);
        assert_eq!(err.to, DType::Complex64);
        assert_eq!(err.kind, CastFailure::OutOfRange);
    }
}
