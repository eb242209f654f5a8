//! Four-component vectors.

use crate::color::{self, Color};

/// A 4-dimensional vector over the scalar kind `T`.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector4<T> {
    x: T,
    y: T,
    z: T,
    w: T,
}

pub type Vector4F64 = Vector4<f64>;
pub type Vector4F32 = Vector4<f32>;
pub type Vector4I = Vector4<i64>;
pub type Vector4I64 = Vector4<i64>;
pub type Vector4I32 = Vector4<i32>;
pub type Vector4I16 = Vector4<i16>;
pub type Vector4I8 = Vector4<i8>;

impl_vector_common!(Vector4, Wire4, 4, [x, y, z, w]);

impl Vector4<f64> {
    /// Creates a vector from the red, green, blue and alpha channels of the
    /// given color, each in `[0, 1]`.
    pub fn from_color(color: &impl Color) -> Self {
        Self::from(color::normalized_channels(color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{color::Rgba8, json::EncodeError};
    use approx::assert_abs_diff_eq;

    const EPSILON: f64 = 1e-6;

    #[test]
    fn zeros_and_ones_fill_all_components() {
        assert_eq!(Vector4::<f64>::zeros(), Vector4::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(Vector4::<f64>::ones(), Vector4::new(1.0, 1.0, 1.0, 1.0));
        assert_eq!(Vector4::<i16>::default(), Vector4::zeros());
    }

    #[test]
    fn copy_setters_replace_single_component() {
        let start = Vector4::new(1.2, -2.4, 3.7, 4.9);
        assert_eq!(start.with_x(4.0), Vector4::new(4.0, -2.4, 3.7, 4.9));
        assert_eq!(start.with_y(4.0), Vector4::new(1.2, 4.0, 3.7, 4.9));
        assert_eq!(start.with_z(4.0), Vector4::new(1.2, -2.4, 4.0, 4.9));
        assert_eq!(start.with_w(4.0), Vector4::new(1.2, -2.4, 3.7, 4.0));
        assert_eq!(start.x(), 1.2);
        assert_eq!(start.w(), 4.9);
    }

    #[test]
    fn arithmetic_on_vector4_works() {
        let start = Vector4::new(1.2, -2.4, 3.7, 4.9);
        let other = Vector4::new(1.0, -2.0, 3.0, 4.0);
        assert_abs_diff_eq!(start + other, Vector4::new(2.2, -4.4, 6.7, 8.9), epsilon = EPSILON);
        assert_abs_diff_eq!(start - other, Vector4::new(0.2, -0.4, 0.7, 0.9), epsilon = EPSILON);
        assert_abs_diff_eq!(
            start.div_by_constant(2.0),
            Vector4::new(0.6, -1.2, 1.85, 2.45),
            epsilon = EPSILON
        );
    }

    #[test]
    fn scaling_vector4_works() {
        let v = Vector4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.scale(2.0), Vector4::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(v.scale(0.0), Vector4::zeros());
        assert_eq!(v * -2.0, Vector4::new(-2.0, -4.0, -6.0, -8.0));
    }

    #[test]
    fn encoding_vector4_to_json_uses_float_fields() {
        let encoded = Vector4::new(1.2, 2.3, 3.4, 5.6).to_json().unwrap();
        assert_eq!(encoded, r#"{"x":1.2,"y":2.3,"z":3.4,"w":5.6}"#);

        let mut out = Vector4::new(0.0, 0.0, 0.0, 0.0);
        out.decode_json(&encoded).unwrap();
        assert_eq!(out, Vector4::new(1.2, 2.3, 3.4, 5.6));
    }

    #[test]
    fn averaging_identical_vector4s_gives_same_vector() {
        let v = Vector4::new(1.0, 2.0, 3.0, 4.0);
        assert_abs_diff_eq!(Vector4::average(&[v, v, v]), v, epsilon = EPSILON);
    }

    #[test]
    fn averaging_no_integer_vector4s_gives_zero() {
        assert_eq!(Vector4::<i32>::average(&[]), Vector4::zeros());
    }

    #[test]
    fn lerp_between_vector4s_works() {
        let a = Vector4::<f64>::zeros();
        let b = Vector4::new(1.0, 2.0, 3.0, 4.0);
        assert_abs_diff_eq!(a.lerp(a, 0.0), a);
        assert_abs_diff_eq!(a.lerp(b, 0.5), Vector4::new(0.5, 1.0, 1.5, 2.0), epsilon = EPSILON);
        assert_abs_diff_eq!(a.lerp(b, 1.0), b, epsilon = EPSILON);
    }

    #[test]
    fn componentwise_min_and_max_of_vector4s_work() {
        let a = Vector4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vector4::new(4.0, 3.0, 2.0, 1.0);
        assert_eq!(a.min(b), Vector4::new(1.0, 2.0, 2.0, 1.0));
        assert_eq!(a.max(b), Vector4::new(4.0, 3.0, 3.0, 4.0));
        assert_eq!(a.min_w(b), 1.0);
        assert_eq!(a.max_z(b), 3.0);
    }

    #[test]
    fn min_and_max_propagate_nan() {
        let a = Vector4::new(f64::NAN, 2.0, 3.0, 4.0);
        let b = Vector4::new(0.0, 3.0, 2.0, 1.0);
        assert!(a.min(b).x().is_nan());
        assert!(b.max(a).x().is_nan());
        assert!(a.min_component().is_nan());
    }

    #[test]
    fn converting_vector4_between_kinds_works() {
        let v = Vector4::new(1.2, 2.3, 3.4, 5.6);
        assert_eq!(v.to_int(), Vector4::new(1, 2, 3, 5));
        assert_eq!(v.to_i64(), Vector4::new(1, 2, 3, 5));
        assert_eq!(v.to_f32(), Vector4::new(1.2_f32, 2.3, 3.4, 5.6));
        assert_eq!(
            Vector4::new(1, 2, 3, 5).to_f64(),
            Vector4::new(1.0, 2.0, 3.0, 5.0)
        );
        assert_eq!(<[f64; 4]>::from(v), [1.2, 2.3, 3.4, 5.6]);
    }

    #[test]
    fn rounding_vector4_to_int_works() {
        let v = Vector4::new(-0.5, 0.5, 1.5, -1.2);
        assert_eq!(v.round_to_int(), Vector4::new(-1, 1, 2, -1));
        assert_eq!(v.floor_to_int(), Vector4::new(-1, 0, 1, -2));
        assert_eq!(v.ceil_to_int(), Vector4::new(0, 1, 2, -1));
    }

    #[test]
    fn clamping_with_inverted_bounds_gives_upper_bound() {
        assert_eq!(Vector4::new(-3, 0, 5, 10).clamp(4, 2), Vector4::fill(2));
        assert_eq!(Vector4::new(-3, 0, 5, 10).clamp(0, 5), Vector4::new(0, 0, 5, 5));
    }

    #[test]
    fn color_with_alpha_maps_to_unit_range() {
        assert_eq!(
            Vector4::from_color(&Rgba8::new(0xff, 0, 0xff, 0)),
            Vector4::new(1.0, 0.0, 1.0, 0.0)
        );
    }

    #[test]
    fn dot_product_of_integer_vector4s_is_f64() {
        let a = Vector4::new(1_i8, 2, 3, 4);
        assert_eq!(a.dot(a), 30.0);
        assert_abs_diff_eq!(a.length(), 30.0_f64.sqrt());
        assert_eq!(a.product(), 24);
    }

    #[test]
    fn building_vector4_from_array_pads_with_zeros() {
        assert_eq!(Vector4::<i16>::from_array(&[]), Vector4::zeros());
        assert_eq!(Vector4::from_array(&[1.0]), Vector4::new(1.0, 0.0, 0.0, 0.0));
        assert_eq!(Vector4::from_array(&[1, 2, 3]), Vector4::new(1, 2, 3, 0));
    }

    #[test]
    fn decoding_bad_json_leaves_vector4_unchanged() {
        let mut out = Vector4::new(0.0, 0.0, 0.0, 0.0);
        assert!(out.decode_json("bad json").is_err());
        assert!(out.decode_json("null").is_err());
        assert_eq!(out, Vector4::zeros());
    }

    #[test]
    fn small_kinds_round_trip_through_json() {
        let v = Vector4::new(i8::MIN, -1, 0, i8::MAX);
        assert_eq!(Vector4::<i8>::from_json(&v.to_json().unwrap()).unwrap(), v);
        let v = Vector4::new(0.1_f32, 0.2, -0.3, 4e-5);
        assert_eq!(Vector4::<f32>::from_json(&v.to_json().unwrap()).unwrap(), v);
    }

    #[test]
    fn encoding_non_finite_vector4_fails() {
        let result = Vector4::new(0.0, 1.0, 2.0, f64::INFINITY).to_json();
        assert!(matches!(
            result,
            Err(EncodeError::NonFinite {
                kind: "Vector4",
                component: "w",
                ..
            })
        ));
    }

    #[test]
    fn reductions_of_small_integer_vector4s_are_computed_in_f64() {
        let v = Vector4::new(i8::MAX, i8::MAX, i8::MAX, i8::MAX);
        assert_eq!(v.length_squared(), 4.0 * 127.0 * 127.0);
        assert_eq!(v.length(), 254.0);
        assert_eq!(
            Vector4::new(-30000_i16, 0, 0, 0).distance(Vector4::new(30000, 0, 0, 0)),
            60000.0
        );
        assert_eq!(v.product(), 1);
    }

    #[test]
    fn displaying_vector4_lists_components() {
        assert_eq!(Vector4::new(1, 2, 3, -4).to_string(), "(1, 2, 3, -4)");
    }
}
