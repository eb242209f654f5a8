//! Immutable 2-, 3- and 4-component vectors generic over the scalar kind.
//!
//! ```
//! use numvec::{Vector2, Vector3};
//!
//! let a = Vector3::new(1.0, 0.0, 0.0);
//! let b = Vector3::new(0.0, 1.0, 0.0);
//! assert_eq!(a.cross(b), Vector3::new(0.0, 0.0, 1.0));
//! assert_eq!(a.xy(), Vector2::new(1.0, 0.0));
//!
//! let rounded = Vector2::new(1.2, -2.4).floor_to_int();
//! assert_eq!(rounded, Vector2::new(1, -3));
//! ```

#[macro_use]
mod macros;

pub mod color;
pub mod json;
pub mod num;
pub mod scalar;
pub mod vector2;
pub mod vector3;
pub mod vector4;

pub use color::{Color, Rgba8, Rgba16};
pub use json::{DecodeError, EncodeError};
pub use num::Number;
pub use vector2::Vector2;
pub use vector3::Vector3;
pub use vector4::Vector4;

/// Components with a magnitude below this value count as zero in
/// `near_zero`.
pub const NEAR_ZERO_THRESHOLD: f64 = 1e-8;

/// `angle` gives zero when the product of the lengths of the two vectors is
/// below this value.
pub const ANGLE_DENOMINATOR_THRESHOLD: f64 = 1e-15;
