//! Byte-level serialization of fitted parameters.
//!
//! Fitted transformers and models expose plain-data parameter structs
//! (`Vec<f32>`, scalars, strings) that round-trip through bincode. Nothing
//! here knows about file paths; the pipeline owns the artifact layout.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Serialize a parameter struct into a byte buffer.
pub fn to_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, bincode::Error> {
    bincode::serialize(value)
}

/// Deserialize a parameter struct from a byte buffer.
pub fn from_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, bincode::Error> {
    bincode::deserialize(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, PartialEq, Debug)]
    struct Params {
        weights: Vec<f32>,
        bias: f32,
    }

    #[test]
    fn test_round_trip() {
        let params = Params {
            weights: vec![0.5, -1.25],
            bias: 3.0,
        };
        let bytes = to_bytes(&params).unwrap();
        let back: Params = from_bytes(&bytes).unwrap();
        assert_eq!(back, params);
    }

    #[test]
    fn test_garbage_bytes_fail() {
        let result: Result<Params, _> = from_bytes(&[0xff, 0xff, 0xff]);
        assert!(result.is_err());
    }
}
