//! Utility macros.

macro_rules! impl_binop {
    ($op:ident, $method:ident, $tl:ty, $tr:ty, $to:ty, |$lhs:ident, $rhs:ident| $body:block) => {
        impl<'a, T: $crate::num::Number> ::std::ops::$op<&'a $tr> for &'a $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl<T: $crate::num::Number> ::std::ops::$op<$tr> for &$tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                ::std::ops::$op::$method(self, &rhs)
            }
        }

        impl<'a, T: $crate::num::Number> ::std::ops::$op<&'a $tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                ::std::ops::$op::$method(&self, rhs)
            }
        }

        impl<T: $crate::num::Number> ::std::ops::$op<$tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                ::std::ops::$op::$method(&self, &rhs)
            }
        }
    };
}

macro_rules! impl_unary_op {
    ($op:ident, $method:ident, $t:ty, $to:ty, |$this:ident| $body:block) => {
        impl<T: $crate::num::Number> ::std::ops::$op for &$t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                let $this = self;
                $body
            }
        }

        impl<T: $crate::num::Number> ::std::ops::$op for $t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                ::std::ops::$op::$method(&self)
            }
        }
    };
}

macro_rules! impl_abs_diff_eq {
    ($t:ty, |$arg1:ident, $arg2:ident, $arg3:ident| $body:block) => {
        impl<T: $crate::num::Number> ::approx::AbsDiffEq for $t {
            type Epsilon = f64;

            fn default_epsilon() -> Self::Epsilon {
                <f64 as ::approx::AbsDiffEq>::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                let $arg1 = self;
                let $arg2 = other;
                let $arg3 = epsilon;
                $body
            }
        }
    };
}

macro_rules! impl_relative_eq {
    ($t:ty, |$arg1:ident, $arg2:ident, $arg3:ident, $arg4:ident| $body:block) => {
        impl<T: $crate::num::Number> ::approx::RelativeEq for $t {
            fn default_max_relative() -> Self::Epsilon {
                <f64 as ::approx::RelativeEq>::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                let $arg1 = self;
                let $arg2 = other;
                let $arg3 = epsilon;
                let $arg4 = max_relative;
                $body
            }
        }
    };
}

/// Implements accessors, copy-with-override setters, single-axis negation and
/// single-axis minimum/maximum for each named component of a vector type.
macro_rules! impl_component_accessors {
    ($vector:ident, [$($c:ident),+]) => {
        ::paste::paste! {
            impl<T: $crate::num::Number> $vector<T> {
                $(
                    #[doc = concat!("The ", stringify!($c), "-component.")]
                    #[inline]
                    pub const fn $c(&self) -> T {
                        self.$c
                    }

                    #[doc = concat!(
                        "Returns a copy of the vector with the ",
                        stringify!($c),
                        "-component replaced."
                    )]
                    #[inline]
                    pub const fn [<with_ $c>](self, $c: T) -> Self {
                        Self { $c, ..self }
                    }

                    #[doc = concat!(
                        "Returns a copy of the vector with the ",
                        stringify!($c),
                        "-component negated."
                    )]
                    #[inline]
                    pub fn [<flip_ $c>](self) -> Self {
                        Self {
                            $c: self.$c.wrapping_neg(),
                            ..self
                        }
                    }

                    #[doc = concat!(
                        "The smaller of the ",
                        stringify!($c),
                        "-components of the two vectors."
                    )]
                    #[inline]
                    pub fn [<min_ $c>](self, other: Self) -> T {
                        $crate::scalar::min(self.$c, other.$c)
                    }

                    #[doc = concat!(
                        "The larger of the ",
                        stringify!($c),
                        "-components of the two vectors."
                    )]
                    #[inline]
                    pub fn [<max_ $c>](self, other: Self) -> T {
                        $crate::scalar::max(self.$c, other.$c)
                    }
                )+
            }
        }
    };
}

/// Implements the operation set shared by all vector arities. The first
/// component is given separately so that reductions can be written without
/// an artificial starting value.
macro_rules! impl_vector_common {
    ($vector:ident, $wire:ident, $n:literal, [$c0:ident $(, $c:ident)*]) => {
        impl_component_accessors!($vector, [$c0 $(, $c)*]);

        impl<T: $crate::num::Number> $vector<T> {
            /// Creates a new vector with the given components.
            #[inline]
            pub const fn new($c0: T $(, $c: T)*) -> Self {
                Self { $c0 $(, $c)* }
            }

            /// Creates a new vector with the same value for all components.
            #[inline]
            pub const fn fill(value: T) -> Self {
                Self {
                    $c0: value,
                    $($c: value,)*
                }
            }

            /// Creates a new vector with all zeros.
            #[inline]
            pub const fn zeros() -> Self {
                Self::fill(T::ZERO)
            }

            /// Creates a new vector with all ones.
            #[inline]
            pub const fn ones() -> Self {
                Self::fill(T::ONE)
            }

            /// Builds a vector from as many leading values of the slice as
            /// there are components. Components without a corresponding
            /// value are zero, and values beyond the arity are ignored.
            pub fn from_array(data: &[T]) -> Self {
                let mut components = [T::ZERO; $n];
                for (component, &value) in components.iter_mut().zip(data) {
                    *component = value;
                }
                Self::from(components)
            }

            /// Returns the components as an array.
            #[inline]
            pub const fn to_array(self) -> [T; $n] {
                [self.$c0 $(, self.$c)*]
            }

            /// Sums the given vectors and divides the sum by their count.
            /// The result for an empty slice is the division of zero by
            /// zero.
            pub fn average(vectors: &[Self]) -> Self {
                let sum = vectors.iter().fold(Self::zeros(), |sum, v| sum + v);
                sum.div_by_constant(vectors.len() as f64)
            }

            /// Applies the given function to each component.
            #[inline]
            pub fn mapped(self, f: impl Fn(T) -> T) -> Self {
                Self {
                    $c0: f(self.$c0),
                    $($c: f(self.$c),)*
                }
            }

            /// Applies the given function to each component, producing a
            /// vector of another scalar kind.
            #[inline]
            pub fn mapped_to<U: $crate::num::Number>(self, f: impl Fn(T) -> U) -> $vector<U> {
                $vector {
                    $c0: f(self.$c0),
                    $($c: f(self.$c),)*
                }
            }

            /// Applies the given function to each pair of corresponding
            /// components.
            #[inline]
            pub fn zipped(self, other: Self, f: impl Fn(T, T) -> T) -> Self {
                Self {
                    $c0: f(self.$c0, other.$c0),
                    $($c: f(self.$c, other.$c),)*
                }
            }

            #[inline]
            fn mapped_f64(self, f: impl Fn(f64) -> f64) -> Self {
                self.mapped(|v| T::from_f64(f(v.to_f64())))
            }

            /// Linearly interpolates between `self` (at `t = 0`) and `other`
            /// (at `t = 1`) in `f64`. `t` is not clamped, so values outside
            /// `[0, 1]` extrapolate.
            #[inline]
            pub fn lerp(self, other: Self, t: f64) -> Self {
                self.zipped(other, |a, b| {
                    let a = a.to_f64();
                    T::from_f64((b.to_f64() - a) * t + a)
                })
            }

            /// The point halfway between the two vectors, computed in `f64`
            /// as `(a + b) * 0.5`.
            #[inline]
            pub fn midpoint(self, other: Self) -> Self {
                self.zipped(other, |a, b| T::from_f64((a.to_f64() + b.to_f64()) * 0.5))
            }

            /// The componentwise minimum of the two vectors.
            #[inline]
            pub fn min(self, other: Self) -> Self {
                self.zipped(other, $crate::scalar::min)
            }

            /// The componentwise maximum of the two vectors.
            #[inline]
            pub fn max(self, other: Self) -> Self {
                self.zipped(other, $crate::scalar::max)
            }

            /// The smallest component.
            #[inline]
            pub fn min_component(self) -> T {
                let min = self.$c0;
                $(let min = $crate::scalar::min(min, self.$c);)*
                min
            }

            /// The largest component.
            #[inline]
            pub fn max_component(self) -> T {
                let max = self.$c0;
                $(let max = $crate::scalar::max(max, self.$c);)*
                max
            }

            /// Whether every component is strictly smaller than the
            /// corresponding component of `other`. This is a partial order.
            #[inline]
            pub fn less(self, other: Self) -> bool {
                self.$c0 < other.$c0 $(&& self.$c < other.$c)*
            }

            /// Whether every component is smaller than or equal to the
            /// corresponding component of `other`.
            #[inline]
            pub fn less_eq(self, other: Self) -> bool {
                self.$c0 <= other.$c0 $(&& self.$c <= other.$c)*
            }

            /// Whether every component is strictly larger than the
            /// corresponding component of `other`.
            #[inline]
            pub fn greater(self, other: Self) -> bool {
                self.$c0 > other.$c0 $(&& self.$c > other.$c)*
            }

            /// Whether every component is larger than or equal to the
            /// corresponding component of `other`.
            #[inline]
            pub fn greater_eq(self, other: Self) -> bool {
                self.$c0 >= other.$c0 $(&& self.$c >= other.$c)*
            }

            /// The absolute value of each component. For integer kinds `MIN`
            /// wraps to itself.
            #[inline]
            pub fn abs(self) -> Self {
                self.mapped(T::wrapping_abs)
            }

            /// Rounds each component toward negative infinity.
            #[inline]
            pub fn floor(self) -> Self {
                self.mapped($crate::scalar::floor)
            }

            /// Rounds each component toward positive infinity.
            #[inline]
            pub fn ceil(self) -> Self {
                self.mapped($crate::scalar::ceil)
            }

            /// Rounds each component to the nearest whole number, with
            /// halfway cases rounded away from zero.
            #[inline]
            pub fn round(self) -> Self {
                self.mapped($crate::scalar::round)
            }

            /// Rounds each component and converts the result to `i64`.
            #[inline]
            pub fn round_to_int(self) -> $vector<i64> {
                self.mapped_to(|v| $crate::scalar::round(v).to_i64())
            }

            /// Floors each component and converts the result to `i64`.
            #[inline]
            pub fn floor_to_int(self) -> $vector<i64> {
                self.mapped_to(|v| $crate::scalar::floor(v).to_i64())
            }

            /// Ceils each component and converts the result to `i64`.
            #[inline]
            pub fn ceil_to_int(self) -> $vector<i64> {
                self.mapped_to(|v| $crate::scalar::ceil(v).to_i64())
            }

            /// The square root of each component. Negative components give
            /// NaN, which is zero after conversion to an integer kind.
            #[inline]
            pub fn sqrt(self) -> Self {
                self.mapped_f64(f64::sqrt)
            }

            /// Restricts each component to `[min, max]`. See
            /// [`scalar::clamp`](crate::scalar::clamp) for inverted bounds.
            #[inline]
            pub fn clamp(self, min: T, max: T) -> Self {
                self.mapped(|v| $crate::scalar::clamp(v, min, max))
            }

            /// The natural logarithm of each component.
            #[inline]
            pub fn ln(self) -> Self {
                self.mapped_f64(f64::ln)
            }

            /// The base 2 logarithm of each component.
            #[inline]
            pub fn log2(self) -> Self {
                self.mapped_f64(f64::log2)
            }

            /// The base 10 logarithm of each component.
            #[inline]
            pub fn log10(self) -> Self {
                self.mapped_f64(f64::log10)
            }

            /// `e^v` for each component `v`.
            #[inline]
            pub fn exp(self) -> Self {
                self.mapped_f64(f64::exp)
            }

            /// `2^v` for each component `v`.
            #[inline]
            pub fn exp2(self) -> Self {
                self.mapped_f64(f64::exp2)
            }

            /// `e^v - 1` for each component `v`, accurate also for `v` near
            /// zero.
            #[inline]
            pub fn exp_m1(self) -> Self {
                self.mapped_f64(f64::exp_m1)
            }

            /// Negates every component.
            #[inline]
            pub fn flip(self) -> Self {
                self.mapped(T::wrapping_neg)
            }

            /// Multiplies each component by `t` in `f64` and converts back.
            #[inline]
            pub fn scale(self, t: f64) -> Self {
                self.mapped_f64(|v| v * t)
            }

            /// Divides each component by `t` in `f64` and converts back.
            #[inline]
            pub fn div_by_constant(self, t: f64) -> Self {
                self.mapped_f64(|v| v / t)
            }

            /// Componentwise (Hadamard) product.
            #[inline]
            pub fn mult_by_vector(self, other: Self) -> Self {
                self.zipped(other, T::wrapping_mul)
            }

            /// Componentwise quotient.
            ///
            /// # Panics
            /// For integer kinds, if any component of `other` is zero.
            #[inline]
            pub fn div_by_vector(self, other: Self) -> Self {
                self.zipped(other, T::wrapping_div)
            }

            /// Offsets the vector by `size` scaled componentwise by `anchor`,
            /// i.e. `self - size * anchor`.
            #[inline]
            pub fn pivot(self, anchor: Self, size: Self) -> Self {
                Self {
                    $c0: self.$c0.wrapping_sub(size.$c0.wrapping_mul(anchor.$c0)),
                    $($c: self.$c.wrapping_sub(size.$c.wrapping_mul(anchor.$c)),)*
                }
            }

            /// The product of all components.
            #[inline]
            pub fn product(self) -> T {
                self.$c0 $(.wrapping_mul(self.$c))*
            }

            /// The dot product, computed in `f64`.
            #[inline]
            pub fn dot(self, other: Self) -> f64 {
                self.$c0.to_f64() * other.$c0.to_f64()
                    $(+ self.$c.to_f64() * other.$c.to_f64())*
            }

            /// The squared Euclidean length, computed in `f64`.
            #[inline]
            pub fn length_squared(self) -> f64 {
                self.dot(self)
            }

            /// The Euclidean length (norm) of the vector.
            #[inline]
            pub fn length(self) -> f64 {
                self.length_squared().sqrt()
            }

            /// Divides the vector by its length. A zero vector gives
            /// non-finite components.
            #[inline]
            pub fn normalized(self) -> Self {
                self.div_by_constant(self.length())
            }

            /// The squared Euclidean distance, computed in `f64`.
            #[inline]
            pub fn distance_squared(self, other: Self) -> f64 {
                let d = other.$c0.to_f64() - self.$c0.to_f64();
                let sum = d * d;
                $(
                    let d = other.$c.to_f64() - self.$c.to_f64();
                    let sum = sum + d * d;
                )*
                sum
            }

            /// The Euclidean distance between the two vectors.
            #[inline]
            pub fn distance(self, other: Self) -> f64 {
                self.distance_squared(other).sqrt()
            }

            /// The angle in radians between the two vectors, or zero if
            /// either vector is (nearly) zero.
            pub fn angle(self, other: Self) -> f64 {
                let denominator = (self.length_squared() * other.length_squared()).sqrt();
                if denominator < $crate::ANGLE_DENOMINATOR_THRESHOLD {
                    return 0.0;
                }
                $crate::scalar::clamp(self.dot(other) / denominator, -1.0, 1.0).acos()
            }

            /// Whether the magnitude of every component is below
            /// [`NEAR_ZERO_THRESHOLD`](crate::NEAR_ZERO_THRESHOLD).
            #[inline]
            pub fn near_zero(self) -> bool {
                self.$c0.to_f64().abs() < $crate::NEAR_ZERO_THRESHOLD
                    $(&& self.$c.to_f64().abs() < $crate::NEAR_ZERO_THRESHOLD)*
            }

            /// Whether any component is NaN. Always `false` for integer
            /// kinds.
            #[inline]
            pub fn contains_nan(self) -> bool {
                self.$c0.is_nan() $(|| self.$c.is_nan())*
            }

            /// Converts to the default integer kind (`i64`) by truncation
            /// toward zero.
            #[inline]
            pub fn to_int(self) -> $vector<i64> {
                self.to_i64()
            }

            #[inline]
            pub fn to_i64(self) -> $vector<i64> {
                self.mapped_to(T::to_i64)
            }

            #[inline]
            pub fn to_i32(self) -> $vector<i32> {
                self.mapped_to(T::to_i32)
            }

            #[inline]
            pub fn to_f32(self) -> $vector<f32> {
                self.mapped_to(T::to_f32)
            }

            #[inline]
            pub fn to_f64(self) -> $vector<f64> {
                self.mapped_to(T::to_f64)
            }

            /// Encodes the vector as a JSON object with `f64` fields.
            ///
            /// # Errors
            /// Returns an error if any component is NaN or infinite.
            pub fn to_json(&self) -> $crate::json::Result<String, $crate::json::EncodeError> {
                let wire = self.to_wire();
                wire.ensure_finite()?;
                $crate::json::encode(stringify!($vector), &wire)
            }

            /// Decodes a vector from a JSON object with `f64` fields,
            /// truncating them to the scalar kind.
            ///
            /// # Errors
            /// Returns an error if the input is not a JSON object with
            /// numeric component fields.
            pub fn from_json(data: &str) -> $crate::json::Result<Self> {
                $crate::json::decode::<$crate::json::$wire>(stringify!($vector), data)
                    .map(Self::from_wire)
            }

            /// Replaces this vector with the one decoded from the given JSON.
            /// On failure the vector is left unchanged.
            ///
            /// # Errors
            /// See [`Self::from_json`].
            pub fn decode_json(&mut self, data: &str) -> $crate::json::Result<()> {
                *self = Self::from_json(data)?;
                Ok(())
            }

            fn to_wire(self) -> $crate::json::$wire {
                $crate::json::$wire {
                    $c0: self.$c0.to_f64(),
                    $($c: self.$c.to_f64(),)*
                }
            }

            fn from_wire(wire: $crate::json::$wire) -> Self {
                Self {
                    $c0: T::from_f64(wire.$c0),
                    $($c: T::from_f64(wire.$c),)*
                }
            }
        }

        impl<T: $crate::num::Number> From<[T; $n]> for $vector<T> {
            #[inline]
            fn from([$c0 $(, $c)*]: [T; $n]) -> Self {
                Self { $c0 $(, $c)* }
            }
        }

        impl<T: $crate::num::Number> From<$vector<T>> for [T; $n] {
            #[inline]
            fn from(vector: $vector<T>) -> Self {
                vector.to_array()
            }
        }

        impl_binop!(Add, add, $vector<T>, $vector<T>, $vector<T>, |a, b| {
            $vector {
                $c0: a.$c0.wrapping_add(b.$c0),
                $($c: a.$c.wrapping_add(b.$c),)*
            }
        });

        impl_binop!(Sub, sub, $vector<T>, $vector<T>, $vector<T>, |a, b| {
            $vector {
                $c0: a.$c0.wrapping_sub(b.$c0),
                $($c: a.$c.wrapping_sub(b.$c),)*
            }
        });

        impl_binop!(Mul, mul, $vector<T>, f64, $vector<T>, |a, b| { a.scale(*b) });

        impl_binop!(Div, div, $vector<T>, f64, $vector<T>, |a, b| {
            a.div_by_constant(*b)
        });

        impl_unary_op!(Neg, neg, $vector<T>, $vector<T>, |val| { val.flip() });

        impl_abs_diff_eq!($vector<T>, |a, b, epsilon| {
            ::approx::AbsDiffEq::abs_diff_eq(&a.$c0.to_f64(), &b.$c0.to_f64(), epsilon)
                $(&& ::approx::AbsDiffEq::abs_diff_eq(&a.$c.to_f64(), &b.$c.to_f64(), epsilon))*
        });

        impl_relative_eq!($vector<T>, |a, b, epsilon, max_relative| {
            ::approx::RelativeEq::relative_eq(
                &a.$c0.to_f64(),
                &b.$c0.to_f64(),
                epsilon,
                max_relative,
            ) $(&& ::approx::RelativeEq::relative_eq(
                &a.$c.to_f64(),
                &b.$c.to_f64(),
                epsilon,
                max_relative,
            ))*
        });

        impl<T: $crate::num::Number> ::std::fmt::Display for $vector<T> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "({}", self.$c0)?;
                $(write!(f, ", {}", self.$c)?;)*
                write!(f, ")")
            }
        }

        impl<T: $crate::num::Number> ::serde::Serialize for $vector<T> {
            fn serialize<S: ::serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::std::result::Result<S::Ok, S::Error> {
                let wire = self.to_wire();
                wire.ensure_finite().map_err(<S::Error as ::serde::ser::Error>::custom)?;
                ::serde::Serialize::serialize(&wire, serializer)
            }
        }

        impl<'de, T: $crate::num::Number> ::serde::Deserialize<'de> for $vector<T> {
            fn deserialize<D: ::serde::Deserializer<'de>>(
                deserializer: D,
            ) -> ::std::result::Result<Self, D::Error> {
                <$crate::json::$wire as ::serde::Deserialize<'de>>::deserialize(deserializer)
                    .map(Self::from_wire)
            }
        }
    };
}
