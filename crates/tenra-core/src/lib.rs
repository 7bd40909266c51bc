//! # tenra-core
//!
//! Scalar operand core for the Tenra kernel-dispatch runtime.
//!
//! A [`Scalar`] holds a single number of unknown-until-runtime category —
//! boolean, integer, floating point, or complex — in a fixed-size,
//! allocation-free value, so kernel entry points can accept "a tensor or a
//! bare number" through one operand type:
//!
//! - construction widens any supported source type losslessly into the
//!   canonical payload of its category (`i64`, `f64`, or a pair of `f64`s);
//! - [`Scalar::to`] and the named accessors convert back out, validating
//!   that the conversion preserves the value exactly;
//! - [`Scalar::dtype`] reports the tag the dispatch layer selects kernels
//!   over.
//!
//! ```
//! use tenra_core::{DType, Scalar};
//!
//! let s = Scalar::from(300);
//! assert_eq!(s.dtype(), DType::Int64);
//! assert_eq!(s.to_i64(), Ok(300));
//! assert!(s.to_i8().is_err()); // 300 does not fit in i8
//! ```

pub mod convert;
pub mod dtype;
pub mod error;
pub mod scalar;

pub use convert::ScalarElem;
pub use dtype::DType;
pub use error::{CastFailure, ConversionError};
pub use scalar::Scalar;
