//! Two-component vectors.

use crate::num::Number;
use rand::Rng;

/// A 2-dimensional vector over the scalar kind `T`.
///
/// Every operation returns a new vector; none modifies its receiver.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2<T> {
    x: T,
    y: T,
}

pub type Vector2F64 = Vector2<f64>;
pub type Vector2F32 = Vector2<f32>;
pub type Vector2I = Vector2<i64>;
pub type Vector2I64 = Vector2<i64>;
pub type Vector2I32 = Vector2<i32>;
pub type Vector2I16 = Vector2<i16>;
pub type Vector2I8 = Vector2<i8>;

impl_vector_common!(Vector2, Wire2, 2, [x, y]);

impl<T: Number> Vector2<T> {
    /// (0, 1)
    #[inline]
    pub const fn up() -> Self {
        Self::new(T::ZERO, T::ONE)
    }

    /// (0, -1)
    #[inline]
    pub const fn down() -> Self {
        Self::new(T::ZERO, T::NEG_ONE)
    }

    /// (-1, 0)
    #[inline]
    pub const fn left() -> Self {
        Self::new(T::NEG_ONE, T::ZERO)
    }

    /// (1, 0)
    #[inline]
    pub const fn right() -> Self {
        Self::new(T::ONE, T::ZERO)
    }

    /// Returns a copy of the vector with `dx` added to the x-component.
    #[inline]
    pub fn dx(self, dx: T) -> Self {
        self.with_x(self.x.wrapping_add(dx))
    }

    /// Returns a copy of the vector with `dy` added to the y-component.
    #[inline]
    pub fn dy(self, dy: T) -> Self {
        self.with_y(self.y.wrapping_add(dy))
    }

    /// The vector with its components swapped.
    #[inline]
    pub const fn yx(self) -> Self {
        Self::new(self.y, self.x)
    }

    /// The vector rotated by 90 degrees clockwise, `(y, -x)`. It has the same
    /// length as the original.
    #[inline]
    pub fn perpendicular(self) -> Self {
        Self::new(self.y, self.x.wrapping_neg())
    }

    /// Multiplies each component by `t` in `f32` and converts back.
    #[inline]
    pub fn scale_f32(self, t: f32) -> Self {
        self.mapped(|v| T::from_f32(v.to_f32() * t))
    }

    /// Multiplies each component in `f64` by the corresponding component of
    /// `factors`.
    #[inline]
    pub fn scale_by_vector(self, factors: Vector2<f64>) -> Self {
        Self::new(
            T::from_f64(self.x.to_f64() * factors.x),
            T::from_f64(self.y.to_f64() * factors.y),
        )
    }

    /// Multiplies each component in `f32` by the corresponding component of
    /// `factors`.
    #[inline]
    pub fn scale_by_vector_f32(self, factors: Vector2<f32>) -> Self {
        Self::new(
            T::from_f32(self.x.to_f32() * factors.x),
            T::from_f32(self.y.to_f32() * factors.y),
        )
    }
}

impl Vector2<f64> {
    /// Samples each component uniformly from `[0, 1)`.
    pub fn rand<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.random(), rng.random())
    }
}
