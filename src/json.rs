//! JSON encoding of vectors.
//!
//! Every vector is encoded as a flat object of `f64` fields named after its
//! components, independently of the scalar kind of the vector. Integer
//! vectors are widened on encoding and narrowed (by truncation) on decoding.
//! JSON has no representation for NaN or infinity, so vectors with
//! non-finite components cannot be encoded.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use thiserror::Error;

pub type Result<T, E = DecodeError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Failed to decode {kind} from JSON")]
    Json {
        kind: &'static str,
        source: serde_json::Error,
    },

    #[error("Expected a JSON object when decoding {kind}, found {found}")]
    NotAnObject {
        kind: &'static str,
        found: &'static str,
    },
}

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("Cannot encode {kind} with non-finite {component}-component {value} as JSON")]
    NonFinite {
        kind: &'static str,
        component: &'static str,
        value: f64,
    },

    #[error("Failed to encode {kind} as JSON")]
    Json {
        kind: &'static str,
        source: serde_json::Error,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Wire2 {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Wire3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Wire4 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

macro_rules! impl_ensure_finite {
    ($wire:ident, $kind:literal, [$($c:ident),+]) => {
        impl $wire {
            pub(crate) fn ensure_finite(&self) -> Result<(), EncodeError> {
                ensure_finite($kind, &[$((stringify!($c), self.$c)),+])
            }
        }
    };
}

impl_ensure_finite!(Wire2, "Vector2", [x, y]);
impl_ensure_finite!(Wire3, "Vector3", [x, y, z]);
impl_ensure_finite!(Wire4, "Vector4", [x, y, z, w]);

/// Checks that every named component is finite.
fn ensure_finite(
    kind: &'static str,
    components: &[(&'static str, f64)],
) -> Result<(), EncodeError> {
    match components.iter().find(|(_, value)| !value.is_finite()) {
        Some(&(component, value)) => Err(EncodeError::NonFinite {
            kind,
            component,
            value,
        }),
        None => Ok(()),
    }
}

/// Encodes the given value as a JSON string.
pub(crate) fn encode<V: Serialize>(kind: &'static str, value: &V) -> Result<String, EncodeError> {
    serde_json::to_string(value).map_err(|source| EncodeError::Json { kind, source })
}

/// Decodes a value of the given type from a JSON string.
///
/// Only JSON objects are accepted; arrays and scalars are rejected even when
/// they could be mapped onto the fields.
pub(crate) fn decode<V: DeserializeOwned>(kind: &'static str, data: &str) -> Result<V> {
    let json_error = |source: serde_json::Error| {
        log::debug!("Could not decode {kind} from JSON: {source}");
        DecodeError::Json { kind, source }
    };

    let value: Value = serde_json::from_str(data).map_err(json_error)?;

    if !value.is_object() {
        let found = value_kind(&value);
        log::debug!("Could not decode {kind} from JSON {found}");
        return Err(DecodeError::NotAnObject { kind, found });
    }

    serde_json::from_value(value).map_err(json_error)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_fields_are_emitted_in_component_order() {
        let wire = Wire4 {
            x: 1.0,
            y: 2.5,
            z: -3.0,
            w: 0.25,
        };
        assert_eq!(
            encode("Vector4", &wire).unwrap(),
            r#"{"x":1.0,"y":2.5,"z":-3.0,"w":0.25}"#
        );
    }

    #[test]
    fn non_finite_components_are_rejected() {
        assert!(ensure_finite("Vector2", &[("x", 1.0), ("y", -2.0)]).is_ok());
        assert!(matches!(
            ensure_finite("Vector2", &[("x", 1.0), ("y", f64::INFINITY)]),
            Err(EncodeError::NonFinite {
                kind: "Vector2",
                component: "y",
                ..
            })
        ));
        assert!(matches!(
            ensure_finite("Vector3", &[("x", f64::NAN), ("y", 0.0), ("z", 0.0)]),
            Err(EncodeError::NonFinite { component: "x", .. })
        ));
    }

    #[test]
    fn missing_fields_decode_as_zero() {
        let wire: Wire3 = decode("Vector3", r#"{"y": 4}"#).unwrap();
        assert_eq!(
            wire,
            Wire3 {
                x: 0.0,
                y: 4.0,
                z: 0.0
            }
        );
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let wire: Wire2 = decode("Vector2", r#"{"x": 1, "y": 2, "q": 3}"#).unwrap();
        assert_eq!(wire, Wire2 { x: 1.0, y: 2.0 });
    }

    #[test]
    fn malformed_input_gives_decode_error() {
        let result: Result<Wire2> = decode("Vector2", "bad json");
        assert!(matches!(
            result,
            Err(DecodeError::Json {
                kind: "Vector2",
                ..
            })
        ));
    }

    #[test]
    fn shape_mismatch_gives_decode_error() {
        assert!(matches!(
            decode::<Wire2>("Vector2", "[1, 2]"),
            Err(DecodeError::NotAnObject {
                found: "an array",
                ..
            })
        ));
        assert!(matches!(
            decode::<Wire2>("Vector2", r#"{"x": "one"}"#),
            Err(DecodeError::Json { .. })
        ));
    }
}
