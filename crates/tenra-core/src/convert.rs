//! Checked conversion out of a [`Scalar`].
//!
//! Construction widens losslessly, so all validation lives here. Every
//! conversion either preserves the stored value or fails with a
//! [`ConversionError`]; nothing is coerced or truncated silently.
//!
//! The destination set is closed over the [`ScalarElem`] impls below.
//! Integer sources must convert with no information loss; float sources
//! narrow under IEEE round-to-nearest and fail only when a finite value
//! leaves the destination's finite range; a complex source must carry an
//! exactly-zero imaginary part before its real part is considered.

use half::{bf16, f16};
use num_complex::Complex;
use num_traits::NumCast;

use crate::dtype::DType;
use crate::error::{CastFailure, ConversionError};
use crate::scalar::Scalar;

mod sealed {
    pub trait Sealed {}
}

/// A concrete element type a [`Scalar`] can be converted into.
///
/// Sealed: the supported set is fixed, and `Scalar::to::<T>()` for any other
/// `T` fails to compile. Reduced-precision complex is a construction source
/// only and deliberately has no impl.
pub trait ScalarElem: sealed::Sealed + Copy {
    /// Dispatch tag of this element type.
    const DTYPE: DType;

    /// Extracts the scalar as `Self`, validating that the value survives.
    fn try_from_scalar(s: Scalar) -> Result<Self, ConversionError>;
}

// ============================================================================
// Shared validation helpers
// ============================================================================

/// Collapses a complex value with an exactly-zero imaginary part into its
/// real part; everything else passes through. Callers report the source
/// category from the original value, not the collapsed one.
fn strip_zero_imag(s: Scalar) -> Scalar {
    match s {
        Scalar::Complex(z) if z.im == 0.0 => Scalar::Float(z.re),
        other => other,
    }
}

/// Range-checked float→integer cast. The fractional-part check runs first
/// so the failure kind distinguishes truncation from overflow.
fn float_to_int<T: NumCast>(v: f64, from: DType, to: DType) -> Result<T, ConversionError> {
    if !v.is_finite() {
        return Err(ConversionError::new(from, to, CastFailure::OutOfRange));
    }
    if v.fract() != 0.0 {
        return Err(ConversionError::new(from, to, CastFailure::FractionalPart));
    }
    num_traits::cast(v).ok_or_else(|| ConversionError::new(from, to, CastFailure::OutOfRange))
}

/// `f64`→`f32` narrowing under IEEE round-to-nearest; only a finite value
/// leaving the destination's finite range fails.
fn narrow_f32(v: f64, from: DType, to: DType) -> Result<f32, ConversionError> {
    let h = v as f32;
    if h.is_infinite() && v.is_finite() {
        return Err(ConversionError::new(from, to, CastFailure::OutOfRange));
    }
    Ok(h)
}

// ============================================================================
// Integer destinations
// ============================================================================

macro_rules! int_elem {
    ($($ty:ty => $dtype:ident, $accessor:ident;)*) => {
        $(
            impl sealed::Sealed for $ty {}

            impl ScalarElem for $ty {
                const DTYPE: DType = DType::$dtype;

                fn try_from_scalar(s: Scalar) -> Result<$ty, ConversionError> {
                    let from = s.dtype();
                    match strip_zero_imag(s) {
                        Scalar::Bool(b) => Ok(b as $ty),
                        Scalar::Int(i) => <$ty>::try_from(i).map_err(|_| {
                            ConversionError::new(from, DType::$dtype, CastFailure::OutOfRange)
                        }),
                        Scalar::Float(v) => float_to_int(v, from, DType::$dtype),
                        Scalar::Complex(_) => Err(ConversionError::new(
                            from,
                            DType::$dtype,
                            CastFailure::NonZeroImaginary,
                        )),
                    }
                }
            }

            impl Scalar {
                #[doc = concat!("Checked conversion to `", stringify!($ty), "`; see [`Scalar::to`].")]
                #[inline]
                pub fn $accessor(self) -> Result<$ty, ConversionError> {
                    self.to::<$ty>()
                }
            }
        )*
    };
}

int_elem! {
    i8 => Int8, to_i8;
    i16 => Int16, to_i16;
    i32 => Int32, to_i32;
    i64 => Int64, to_i64;
    u8 => Uint8, to_u8;
    u16 => Uint16, to_u16;
    u32 => Uint32, to_u32;
    u64 => Uint64, to_u64;
}

// ============================================================================
// Float destinations
// ============================================================================

macro_rules! float_elem {
    ($($ty:ty => $dtype:ident, $accessor:ident, $narrow:expr, $widen:expr;)*) => {
        $(
            impl sealed::Sealed for $ty {}

            impl ScalarElem for $ty {
                const DTYPE: DType = DType::$dtype;

                fn try_from_scalar(s: Scalar) -> Result<$ty, ConversionError> {
                    let from = s.dtype();
                    match strip_zero_imag(s) {
                        Scalar::Bool(b) => Ok(($narrow)((b as u8) as f64)),
                        Scalar::Int(i) => {
                            // integer sources must survive without information loss
                            let h = ($narrow)(i as f64);
                            let back: f64 = ($widen)(h);
                            if back.is_finite() && back as i128 == i as i128 {
                                Ok(h)
                            } else {
                                Err(ConversionError::new(
                                    from,
                                    DType::$dtype,
                                    CastFailure::OutOfRange,
                                ))
                            }
                        }
                        Scalar::Float(v) => {
                            let h = ($narrow)(v);
                            let back: f64 = ($widen)(h);
                            if back.is_infinite() && v.is_finite() {
                                Err(ConversionError::new(
                                    from,
                                    DType::$dtype,
                                    CastFailure::OutOfRange,
                                ))
                            } else {
                                Ok(h)
                            }
                        }
                        Scalar::Complex(_) => Err(ConversionError::new(
                            from,
                            DType::$dtype,
                            CastFailure::NonZeroImaginary,
                        )),
                    }
                }
            }

            impl Scalar {
                #[doc = concat!("Checked conversion to `", stringify!($ty), "`; see [`Scalar::to`].")]
                #[inline]
                pub fn $accessor(self) -> Result<$ty, ConversionError> {
                    self.to::<$ty>()
                }
            }
        )*
    };
}

float_elem! {
    f16 => Float16, to_f16, f16::from_f64, f16::to_f64;
    bf16 => BFloat16, to_bf16, bf16::from_f64, bf16::to_f64;
    f32 => Float32, to_f32, |v: f64| v as f32, |h: f32| h as f64;
    f64 => Float64, to_f64, |v: f64| v, |h: f64| h;
}

// ============================================================================
// Boolean destination
// ============================================================================

impl sealed::Sealed for bool {}

impl ScalarElem for bool {
    const DTYPE: DType = DType::Bool;

    fn try_from_scalar(s: Scalar) -> Result<bool, ConversionError> {
        let from = s.dtype();
        match strip_zero_imag(s) {
            Scalar::Bool(b) => Ok(b),
            Scalar::Int(0) => Ok(false),
            Scalar::Int(1) => Ok(true),
            Scalar::Float(v) if v == 0.0 => Ok(false),
            Scalar::Float(v) if v == 1.0 => Ok(true),
            Scalar::Complex(_) => Err(ConversionError::new(
                from,
                DType::Bool,
                CastFailure::NonZeroImaginary,
            )),
            _ => Err(ConversionError::new(
                from,
                DType::Bool,
                CastFailure::OutOfRange,
            )),
        }
    }
}

// ============================================================================
// Complex destinations
// ============================================================================

impl sealed::Sealed for Complex<f32> {}

impl ScalarElem for Complex<f32> {
    const DTYPE: DType = DType::Complex64;

    fn try_from_scalar(s: Scalar) -> Result<Complex<f32>, ConversionError> {
        match s {
            // each component narrows independently under the float rules
            Scalar::Complex(z) => {
                let re = narrow_f32(z.re, DType::Complex128, DType::Complex64)?;
                let im = narrow_f32(z.im, DType::Complex128, DType::Complex64)?;
                Ok(Complex::new(re, im))
            }
            // real categories embed with a zero imaginary part
            _ => s
                .to::<f32>()
                .map(|re| Complex::new(re, 0.0))
                .map_err(|e| e.retarget(DType::Complex64)),
        }
    }
}

impl sealed::Sealed for Complex<f64> {}

impl ScalarElem for Complex<f64> {
    const DTYPE: DType = DType::Complex128;

    fn try_from_scalar(s: Scalar) -> Result<Complex<f64>, ConversionError> {
        match s {
            Scalar::Complex(z) => Ok(z),
            _ => s
                .to::<f64>()
                .map(|re| Complex::new(re, 0.0))
                .map_err(|e| e.retarget(DType::Complex128)),
        }
    }
}

impl Scalar {
    /// Checked conversion to `bool`; see [`Scalar::to`].
    #[inline]
    pub fn to_bool(self) -> Result<bool, ConversionError> {
        self.to::<bool>()
    }

    /// Checked conversion to `Complex<f32>`; see [`Scalar::to`].
    #[inline]
    pub fn to_complex64(self) -> Result<Complex<f32>, ConversionError> {
        self.to::<Complex<f32>>()
    }

    /// Checked conversion to `Complex<f64>`; see [`Scalar::to`].
    #[inline]
    pub fn to_complex128(self) -> Result<Complex<f64>, ConversionError> {
        self.to::<Complex<f64>>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elem_dtype_tags() {
        assert_eq!(<i8 as ScalarElem>::DTYPE, DType::Int8);
        assert_eq!(<u64 as ScalarElem>::DTYPE, DType::Uint64);
        assert_eq!(<bf16 as ScalarElem>::DTYPE, DType::BFloat16);
        assert_eq!(<Complex<f32> as ScalarElem>::DTYPE, DType::Complex64);
        assert_eq!(<bool as ScalarElem>::DTYPE, DType::Bool);
    }

    #[test]
    fn test_int_to_int_range() {
        assert_eq!(Scalar::from(100).to_i8(), Ok(100));
        assert_eq!(Scalar::from(-128).to_i8(), Ok(-128));

        let err = Scalar::from(300).to_i8().unwrap_err();
        assert_eq!(err.from, DType::Int64);
        assert_eq!(err.to, DType::Int8);
        assert_eq!(err.kind, CastFailure::OutOfRange);

        assert_eq!(Scalar::from(255).to_u8(), Ok(255));
        assert!(Scalar::from(256).to_u8().is_err());
        assert!(Scalar::from(-1).to_u8().is_err());
        assert!(Scalar::from(-1).to_u64().is_err());
    }

    #[test]
    fn test_bool_source_reads_as_zero_one() {
        assert_eq!(Scalar::from(true).to_i64(), Ok(1));
        assert_eq!(Scalar::from(false).to_i64(), Ok(0));
        assert_eq!(Scalar::from(true).to_u8(), Ok(1));
        assert_eq!(Scalar::from(true).to_f64(), Ok(1.0));
        assert_eq!(
            Scalar::from(true).to_complex128(),
            Ok(Complex::new(1.0, 0.0))
        );
    }

    #[test]
    fn test_float_to_int_requires_whole_value() {
        assert_eq!(Scalar::from(255.0).to_u8(), Ok(255));
        assert_eq!(Scalar::from(-4.0).to_i32(), Ok(-4));

        let err = Scalar::from(2.5).to_i32().unwrap_err();
        assert_eq!(err.kind, CastFailure::FractionalPart);

        let err = Scalar::from(1e300).to_i64().unwrap_err();
        assert_eq!(err.kind, CastFailure::OutOfRange);

        let err = Scalar::from(f64::NAN).to_i64().unwrap_err();
        assert_eq!(err.kind, CastFailure::OutOfRange);
    }

    #[test]
    fn test_int_to_float_requires_exact_representation() {
        // 2^24 is the last contiguous integer in f32
        assert_eq!(Scalar::from(16_777_216).to_f32(), Ok(16_777_216.0));
        assert!(Scalar::from(16_777_217).to_f32().is_err());

        // 2^53 is the last contiguous integer in f64
        assert_eq!(
            Scalar::from(1i64 << 53).to_f64(),
            Ok(9_007_199_254_740_992.0)
        );
        assert!(Scalar::from(i64::MAX).to_f64().is_err());
        assert_eq!(Scalar::from(i64::MIN).to_f64(), Ok(-9.223372036854776e18));

        assert_eq!(Scalar::from(2048).to_f16(), Ok(f16::from_f64(2048.0)));
        assert!(Scalar::from(2049).to_f16().is_err());
    }

    #[test]
    fn test_float_narrowing_rounds_but_never_overflows() {
        // rounding is fine
        let narrowed = Scalar::from(0.1f64).to_f32().unwrap();
        assert_eq!(narrowed, 0.1f32);

        // a finite value leaving the destination's finite range is not
        let err = Scalar::from(1e300).to_f32().unwrap_err();
        assert_eq!(err.from, DType::Float64);
        assert_eq!(err.to, DType::Float32);
        assert_eq!(err.kind, CastFailure::OutOfRange);

        assert!(Scalar::from(70000.0).to_f16().is_err());
        assert_eq!(Scalar::from(65504.0).to_f16(), Ok(f16::MAX));

        // infinities and NaN pass through
        assert_eq!(Scalar::from(f64::INFINITY).to_f32(), Ok(f32::INFINITY));
        assert!(Scalar::from(f64::NAN).to_f32().unwrap().is_nan());
    }

    #[test]
    fn test_complex_to_real_requires_zero_imaginary() {
        assert_eq!(Scalar::from(Complex::new(1.0, 0.0)).to_f64(), Ok(1.0));
        assert_eq!(Scalar::from(Complex::new(4.0, 0.0)).to_i32(), Ok(4));

        let err = Scalar::from(Complex::new(1.0, 2.0)).to_f64().unwrap_err();
        assert_eq!(err.from, DType::Complex128);
        assert_eq!(err.to, DType::Float64);
        assert_eq!(err.kind, CastFailure::NonZeroImaginary);

        assert!(Scalar::from(Complex::new(1.0, 2.0)).to_i64().is_err());
    }

    #[test]
    fn test_complex_destinations() {
        let z = Complex::new(1.5, -2.5);
        assert_eq!(Scalar::from(z).to_complex128(), Ok(z));
        assert_eq!(
            Scalar::from(z).to_complex64(),
            Ok(Complex::new(1.5f32, -2.5f32))
        );

        // component overflow fails even when the other component fits
        let err = Scalar::from(Complex::new(0.0, 1e300))
            .to_complex64()
            .unwrap_err();
        assert_eq!(err.to, DType::Complex64);
        assert_eq!(err.kind, CastFailure::OutOfRange);

        // real categories embed with zero imaginary part
        assert_eq!(Scalar::from(3).to_complex128(), Ok(Complex::new(3.0, 0.0)));
        assert_eq!(
            Scalar::from(2.5f64).to_complex64(),
            Ok(Complex::new(2.5f32, 0.0))
        );
        // integer exactness still applies to the embedded real part
        let err = Scalar::from(16_777_217).to_complex64().unwrap_err();
        assert_eq!(err.to, DType::Complex64);
    }

    #[test]
    fn test_bool_destination_accepts_exact_zero_one() {
        assert_eq!(Scalar::from(true).to_bool(), Ok(true));
        assert_eq!(Scalar::from(0).to_bool(), Ok(false));
        assert_eq!(Scalar::from(1).to_bool(), Ok(true));
        assert_eq!(Scalar::from(0.0).to_bool(), Ok(false));
        assert_eq!(Scalar::from(1.0).to_bool(), Ok(true));
        assert_eq!(Scalar::from(Complex::new(1.0, 0.0)).to_bool(), Ok(true));

        assert!(Scalar::from(2).to_bool().is_err());
        assert!(Scalar::from(0.5).to_bool().is_err());
        let err = Scalar::from(Complex::new(0.0, 1.0)).to_bool().unwrap_err();
        assert_eq!(err.kind, CastFailure::NonZeroImaginary);
    }

    #[test]
    fn test_generic_and_named_accessors_agree() {
        let s = Scalar::from(42);
        assert_eq!(s.to::<i16>(), s.to_i16());
        assert_eq!(s.to::<f64>(), s.to_f64());
        assert_eq!(s.to::<Complex<f64>>(), s.to_complex128());
    }
}
