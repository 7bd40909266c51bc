//! The runtime scalar operand.
//!
//! [`Scalar`] represents a single number whose category — boolean, integer,
//! floating point, or complex — is only known at runtime. Kernel entry
//! points take it wherever "a tensor or a bare number" is accepted, and the
//! dispatch layer routes on [`Scalar::dtype`].
//!
//! The category is decided purely by the *static type* of the construction
//! source, never by the value: `Scalar::from(1.0)` is floating even though
//! the value is integral. Construction widens losslessly into the canonical
//! payload of the category; every validating conversion lives on the way
//! out, in [`crate::convert`].

use std::fmt;
use std::ops::Neg;

use half::{bf16, f16};
use num_complex::Complex;

use crate::convert::ScalarElem;
use crate::dtype::DType;
use crate::error::{CastFailure, ConversionError};

/// A single numeric value of runtime-determined category.
///
/// Fixed-size and allocation-free: the payload is always held at canonical
/// width (`i64`, `f64`, or a pair of `f64`s), copied by value, and immutable
/// after construction. Negation produces a new value rather than mutating.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Scalar {
    /// Boolean category.
    Bool(bool),
    /// Integer category, widened to `i64`.
    Int(i64),
    /// Floating category, widened to `f64`.
    Float(f64),
    /// Complex category, components widened to `f64`.
    Complex(Complex<f64>),
}

/// Integer zero, the operand an absent argument defaults to.
impl Default for Scalar {
    fn default() -> Scalar {
        Scalar::Int(0)
    }
}

impl From<bool> for Scalar {
    #[inline]
    fn from(v: bool) -> Scalar {
        Scalar::Bool(v)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),* $(,)?) => {
        $(impl From<$ty> for Scalar {
            #[inline]
            fn from(v: $ty) -> Scalar {
                Scalar::Int(v as i64)
            }
        })*
    };
}

macro_rules! impl_from_float {
    ($($ty:ty => |$v:ident| $widen:expr),* $(,)?) => {
        $(impl From<$ty> for Scalar {
            #[inline]
            fn from($v: $ty) -> Scalar {
                Scalar::Float($widen)
            }
        })*
    };
}

macro_rules! impl_from_complex {
    ($($ty:ty => |$z:ident| $re:expr, $im:expr);* $(;)?) => {
        $(impl From<$ty> for Scalar {
            #[inline]
            fn from($z: $ty) -> Scalar {
                Scalar::Complex(Complex::new($re, $im))
            }
        })*
    };
}

// The supported source types, one list per category. `u64` is absent here:
// it is the one source without a lossless widening (see TryFrom below).
impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl_from_float! {
    f16 => |v| v.to_f64(),
    bf16 => |v| v.to_f64(),
    f32 => |v| v as f64,
    f64 => |v| v,
}

impl_from_complex! {
    Complex<f16> => |z| z.re.to_f64(), z.im.to_f64();
    Complex<f32> => |z| z.re as f64, z.im as f64;
    Complex<f64> => |z| z.re, z.im
}

/// The canonical integer payload is signed, so `u64` values above
/// `i64::MAX` cannot be widened losslessly and are rejected rather than
/// wrapped.
impl TryFrom<u64> for Scalar {
    type Error = ConversionError;

    fn try_from(v: u64) -> Result<Scalar, ConversionError> {
        i64::try_from(v).map(Scalar::Int).map_err(|_| {
            ConversionError::new(DType::Uint64, DType::Int64, CastFailure::OutOfRange)
        })
    }
}

impl Scalar {
    /// True if the floating category is active.
    #[inline]
    pub fn is_floating_point(&self) -> bool {
        matches!(self, Scalar::Float(_))
    }

    /// True if the integer category is active; `include_bool` also accepts
    /// the boolean category.
    #[inline]
    pub fn is_integral(&self, include_bool: bool) -> bool {
        matches!(self, Scalar::Int(_)) || (include_bool && self.is_boolean())
    }

    /// True if the complex category is active.
    #[inline]
    pub fn is_complex(&self) -> bool {
        matches!(self, Scalar::Complex(_))
    }

    /// True if the boolean category is active.
    #[inline]
    pub fn is_boolean(&self) -> bool {
        matches!(self, Scalar::Bool(_))
    }

    /// Canonical element tag of the active category, for kernel dispatch.
    pub fn dtype(&self) -> DType {
        match self {
            Scalar::Complex(_) => DType::Complex128,
            Scalar::Float(_) => DType::Float64,
            Scalar::Int(_) => DType::Int64,
            Scalar::Bool(_) => DType::Bool,
        }
    }

    /// Converts the value into `T`, validating that the conversion is
    /// value-preserving. The supported destinations are the [`ScalarElem`]
    /// impls; any other `T` is rejected at compile time.
    #[inline]
    pub fn to<T: ScalarElem>(self) -> Result<T, ConversionError> {
        T::try_from_scalar(self)
    }
}

impl Neg for Scalar {
    type Output = Scalar;

    /// Arithmetic negation of the active payload, preserving category.
    ///
    /// A boolean is read through its 0/1 integer encoding and the result is
    /// integer-tagged, like any other integer construction.
    fn neg(self) -> Scalar {
        match self {
            // i64::MIN has no positive counterpart; keep the two's-complement wrap
            Scalar::Int(i) => Scalar::Int(i.wrapping_neg()),
            Scalar::Float(v) => Scalar::Float(-v),
            Scalar::Complex(z) => Scalar::Complex(-z),
            Scalar::Bool(b) => Scalar::Int(-(b as i64)),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::Float(v) => write!(f, "{}", v),
            Scalar::Complex(z) => write!(f, "{}", z),
        }
    }
}
