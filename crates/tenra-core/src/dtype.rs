//! Element type tags for kernel dispatch.
//!
//! `DType` identifies the element type a numeric kernel operates on. The
//! dispatch layer selects kernels by matching on this tag; a [`Scalar`]
//! reports the canonical tag of its active category through
//! [`Scalar::dtype`].
//!
//! [`Scalar`]: crate::Scalar
//! [`Scalar::dtype`]: crate::Scalar::dtype

use std::fmt;

/// Element type of a kernel operand.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DType {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float16,
    BFloat16,
    Float32,
    Float64,
    /// Complex with `f16` components.
    Complex32,
    /// Complex with `f32` components.
    Complex64,
    /// Complex with `f64` components.
    Complex128,
}

impl DType {
    pub fn name(&self) -> &'static str {
        match self {
            DType::Bool => "bool",
            DType::Int8 => "int8",
            DType::Int16 => "int16",
            DType::Int32 => "int32",
            DType::Int64 => "int64",
            DType::Uint8 => "uint8",
            DType::Uint16 => "uint16",
            DType::Uint32 => "uint32",
            DType::Uint64 => "uint64",
            DType::Float16 => "float16",
            DType::BFloat16 => "bfloat16",
            DType::Float32 => "float32",
            DType::Float64 => "float64",
            DType::Complex32 => "complex32",
            DType::Complex64 => "complex64",
            DType::Complex128 => "complex128",
        }
    }

    /// Element width in bytes.
    pub fn size_of(&self) -> usize {
        match self {
            DType::Bool | DType::Int8 | DType::Uint8 => 1,
            DType::Int16 | DType::Uint16 | DType::Float16 | DType::BFloat16 => 2,
            DType::Int32 | DType::Uint32 | DType::Float32 | DType::Complex32 => 4,
            DType::Int64 | DType::Uint64 | DType::Float64 | DType::Complex64 => 8,
            DType::Complex128 => 16,
        }
    }

    pub fn is_floating_point(&self) -> bool {
        matches!(
            self,
            DType::Float16 | DType::BFloat16 | DType::Float32 | DType::Float64
        )
    }

    /// True for the fixed-width integer types; `include_bool` also accepts
    /// `Bool`.
    pub fn is_integral(&self, include_bool: bool) -> bool {
        match self {
            DType::Int8
            | DType::Int16
            | DType::Int32
            | DType::Int64
            | DType::Uint8
            | DType::Uint16
            | DType::Uint32
            | DType::Uint64 => true,
            DType::Bool => include_bool,
            _ => false,
        }
    }

    pub fn is_complex(&self) -> bool {
        matches!(
            self,
            DType::Complex32 | DType::Complex64 | DType::Complex128
        )
    }

    /// True for types that can carry a negative value: signed integers,
    /// floats, and complex. `Bool` and the unsigned integers are not signed.
    pub fn is_signed(&self) -> bool {
        !matches!(self, DType::Bool) && !self.is_unsigned()
    }

    pub fn is_unsigned(&self) -> bool {
        matches!(
            self,
            DType::Uint8 | DType::Uint16 | DType::Uint32 | DType::Uint64
        )
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_of() {
        assert_eq!(DType::Bool.size_of(), 1);
        assert_eq!(DType::Int8.size_of(), 1);
        assert_eq!(DType::Uint16.size_of(), 2);
        assert_eq!(DType::Float16.size_of(), 2);
        assert_eq!(DType::BFloat16.size_of(), 2);
        assert_eq!(DType::Int32.size_of(), 4);
        assert_eq!(DType::Float64.size_of(), 8);
        assert_eq!(DType::Complex32.size_of(), 4);
        assert_eq!(DType::Complex64.size_of(), 8);
        assert_eq!(DType::Complex128.size_of(), 16);
    }

    #[test]
    fn test_classification() {
        assert!(DType::Float16.is_floating_point());
        assert!(!DType::Complex128.is_floating_point());

        assert!(DType::Uint64.is_integral(false));
        assert!(!DType::Bool.is_integral(false));
        assert!(DType::Bool.is_integral(true));
        assert!(!DType::Float32.is_integral(true));

        assert!(DType::Complex64.is_complex());
        assert!(!DType::Float64.is_complex());
    }

    #[test]
    fn test_signedness() {
        assert!(DType::Int8.is_signed());
        assert!(DType::Float64.is_signed());
        assert!(DType::Complex128.is_signed());
        assert!(!DType::Uint32.is_signed());
        assert!(!DType::Bool.is_signed());

        assert!(DType::Uint8.is_unsigned());
        assert!(!DType::Int8.is_unsigned());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(DType::BFloat16.to_string(), "bfloat16");
        assert_eq!(DType::Complex128.name(), "complex128");
        assert_eq!(DType::Int64.to_string(), "int64");
    }
}
