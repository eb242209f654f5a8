//! Three-component vectors.

use crate::{
    color::{self, Color},
    num::Number,
    vector2::Vector2,
};
use rand::Rng;

/// A 3-dimensional vector over the scalar kind `T`.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3<T> {
    x: T,
    y: T,
    z: T,
}

pub type Vector3F64 = Vector3<f64>;
pub type Vector3F32 = Vector3<f32>;
pub type Vector3I = Vector3<i64>;
pub type Vector3I64 = Vector3<i64>;
pub type Vector3I32 = Vector3<i32>;
pub type Vector3I16 = Vector3<i16>;
pub type Vector3I8 = Vector3<i8>;

impl_vector_common!(Vector3, Wire3, 3, [x, y, z]);

impl<T: Number> Vector3<T> {
    /// (0, 1, 0)
    #[inline]
    pub const fn up() -> Self {
        Self::new(T::ZERO, T::ONE, T::ZERO)
    }

    /// (0, -1, 0)
    #[inline]
    pub const fn down() -> Self {
        Self::new(T::ZERO, T::NEG_ONE, T::ZERO)
    }

    /// (-1, 0, 0)
    #[inline]
    pub const fn left() -> Self {
        Self::new(T::NEG_ONE, T::ZERO, T::ZERO)
    }

    /// (1, 0, 0)
    #[inline]
    pub const fn right() -> Self {
        Self::new(T::ONE, T::ZERO, T::ZERO)
    }

    /// (0, 0, 1)
    #[inline]
    pub const fn forward() -> Self {
        Self::new(T::ZERO, T::ZERO, T::ONE)
    }

    /// (0, 0, -1)
    #[inline]
    pub const fn backwards() -> Self {
        Self::new(T::ZERO, T::ZERO, T::NEG_ONE)
    }

    /// Computes the cross product of this and the given vector. Note that
    /// `a.cross(b) == -b.cross(a)`.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        let term = |a: T, b: T, c: T, d: T| a.wrapping_mul(b).wrapping_sub(c.wrapping_mul(d));
        Self::new(
            term(self.y, other.z, self.z, other.y),
            term(self.z, other.x, self.x, other.z),
            term(self.x, other.y, self.y, other.x),
        )
    }

    /// Returns some vector perpendicular to this one, obtained by crossing
    /// it with the right axis, or with the up axis if the vector lies along
    /// the x-axis. The result is nonzero for any nonzero vector.
    pub fn perpendicular(self) -> Self {
        if self.y != T::ZERO || self.z != T::ZERO {
            self.cross(Self::right())
        } else {
            self.cross(Self::up())
        }
    }

    /// Reflects the vector about the plane with the given unit normal.
    pub fn reflect(self, normal: Self) -> Self {
        self - normal.scale(2.0 * self.dot(normal))
    }

    /// Refracts the unit vector through a surface with the given unit
    /// normal, where `eta` is the ratio of the refractive index on the
    /// incoming side to that on the outgoing side.
    ///
    /// Total internal reflection is not handled, and gives a non-finite
    /// result.
    pub fn refract(self, normal: Self, eta: f64) -> Self {
        let cos_theta = f64::min(self.flip().dot(normal), 1.0);
        let perpendicular = (self + normal.scale(cos_theta)).scale(eta);
        let parallel = normal.scale(-(1.0 - perpendicular.length_squared()).sqrt());
        perpendicular + parallel
    }

    #[inline]
    pub const fn xzy(self) -> Self {
        Self::new(self.x, self.z, self.y)
    }

    #[inline]
    pub const fn zxy(self) -> Self {
        Self::new(self.z, self.x, self.y)
    }

    #[inline]
    pub const fn zyx(self) -> Self {
        Self::new(self.z, self.y, self.x)
    }

    #[inline]
    pub const fn yxz(self) -> Self {
        Self::new(self.y, self.x, self.z)
    }

    #[inline]
    pub const fn yzx(self) -> Self {
        Self::new(self.y, self.z, self.x)
    }

    /// The x- and y-components as a 2D vector.
    #[inline]
    pub const fn xy(self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }

    #[inline]
    pub const fn xz(self) -> Vector2<T> {
        Vector2::new(self.x, self.z)
    }

    #[inline]
    pub const fn yz(self) -> Vector2<T> {
        Vector2::new(self.y, self.z)
    }

    #[inline]
    pub const fn yx(self) -> Vector2<T> {
        Vector2::new(self.y, self.x)
    }

    #[inline]
    pub const fn zx(self) -> Vector2<T> {
        Vector2::new(self.z, self.x)
    }

    #[inline]
    pub const fn zy(self) -> Vector2<T> {
        Vector2::new(self.z, self.y)
    }

    /// Samples each component uniformly from `[min, max)`. For integer kinds
    /// the sampled offset from `min` is truncated, so every integer in the
    /// range is equally likely.
    pub fn rand_range<R: Rng + ?Sized>(rng: &mut R, min: T, max: T) -> Self {
        let min = min.to_f64();
        let span = max.to_f64() - min;
        let mut sample = || {
            let offset = rng.random::<f64>() * span;
            let offset = if T::IS_FLOAT { offset } else { offset.trunc() };
            T::from_f64(offset + min)
        };
        Self::new(sample(), sample(), sample())
    }
}

impl Vector3<f64> {
    /// Creates a vector from the red, green and blue channels of the given
    /// color, each in `[0, 1]`.
    pub fn from_color(color: &impl Color) -> Self {
        let [r, g, b, _] = color::normalized_channels(color);
        Self::new(r, g, b)
    }

    /// Samples each component uniformly from `[0, 1)`.
    pub fn rand<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.random(), rng.random(), rng.random())
    }

    /// Samples a point uniformly from the interior of the unit sphere by
    /// rejecting points of the enclosing cube that fall outside it.
    ///
    /// About half of the candidates are accepted, but the loop only
    /// terminates if `rng` eventually yields a point inside the sphere.
    pub fn rand_in_unit_sphere<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut rejected = 0_usize;
        loop {
            let candidate = Self::rand_range(rng, -1.0, 1.0);
            if candidate.length_squared() < 1.0 {
                log::trace!("Sampled point in unit sphere after {rejected} rejections");
                return candidate;
            }
            rejected += 1;
        }
    }

    /// Samples a point in `[-1, 1]^3` and projects it onto the unit sphere.
    ///
    /// The resulting directions are not uniformly distributed; they are
    /// denser towards the corners of the cube.
    pub fn rand_normal<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut sample = || -1.0 + rng.random::<f64>() * 2.0;
        Self::new(sample(), sample(), sample()).normalized()
    }
}
