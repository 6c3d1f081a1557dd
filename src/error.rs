//! Error types for dataset loading, preprocessing and pipeline persistence.

use std::fmt;

/// Error type shared across the forecasting pipeline.
#[derive(Debug)]
pub enum ForecastError {
    /// A row in the input file could not be parsed per the record schema.
    InvalidData(String),
    /// Empty data provided where non-empty was required.
    EmptyData(String),
    /// Invalid hyperparameter or configuration value.
    InvalidParameter(String),
    /// Feature dimension mismatch between schema and input.
    FeatureMismatch {
        expected_features: usize,
        got_features: usize,
    },
    /// Unknown category encountered with the `Error` handling strategy.
    UnknownCategory(String),
    /// Serialization or deserialization of a model artifact failed.
    SerializationError(String),
    /// Model artifact was written by an incompatible crate version.
    ArtifactVersion { expected: u32, got: u32 },
    /// I/O error during file operations.
    IoError(String),
}

impl fmt::Display for ForecastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForecastError::InvalidData(msg) => {
                write!(f, "Invalid data: {}", msg)
            }
            ForecastError::EmptyData(msg) => {
                write!(f, "Empty data: {}", msg)
            }
            ForecastError::InvalidParameter(msg) => {
                write!(f, "Invalid parameter: {}", msg)
            }
            ForecastError::FeatureMismatch {
                expected_features,
                got_features,
            } => {
                write!(
                    f,
                    "Feature mismatch: expected {} features, got {}",
                    expected_features, got_features
                )
            }
            ForecastError::UnknownCategory(name) => {
                write!(f, "Unknown category: {}", name)
            }
            ForecastError::SerializationError(msg) => {
                write!(f, "Serialization error: {}", msg)
            }
            ForecastError::ArtifactVersion { expected, got } => {
                write!(
                    f,
                    "Incompatible model artifact: format version {} (this build reads {})",
                    got, expected
                )
            }
            ForecastError::IoError(msg) => {
                write!(f, "I/O error: {}", msg)
            }
        }
    }
}

impl std::error::Error for ForecastError {}

impl From<std::io::Error> for ForecastError {
    fn from(err: std::io::Error) -> Self {
        ForecastError::IoError(err.to_string())
    }
}

impl From<bincode::Error> for ForecastError {
    fn from(err: bincode::Error) -> Self {
        ForecastError::SerializationError(err.to_string())
    }
}

impl From<csv::Error> for ForecastError {
    fn from(err: csv::Error) -> Self {
        ForecastError::InvalidData(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_data() {
        let err = ForecastError::InvalidData("row 3".to_string());
        assert!(err.to_string().contains("Invalid data"));
    }

    #[test]
    fn test_error_display_feature_mismatch() {
        let err = ForecastError::FeatureMismatch {
            expected_features: 5,
            got_features: 3,
        };
        assert!(err.to_string().contains("expected 5 features, got 3"));
    }

    #[test]
    fn test_error_display_artifact_version() {
        let err = ForecastError::ArtifactVersion {
            expected: 1,
            got: 2,
        };
        assert!(err.to_string().contains("format version 2"));
    }

    #[test]
    fn test_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err: ForecastError = io_err.into();
        assert!(matches!(err, ForecastError::IoError(_)));
    }

    #[test]
    fn test_error_from_bincode_error() {
        let bad_bytes: &[u8] = &[0xff, 0xff, 0xff, 0xff];
        let bincode_result: Result<String, bincode::Error> = bincode::deserialize(bad_bytes);
        if let Err(e) = bincode_result {
            let err: ForecastError = e.into();
            assert!(matches!(err, ForecastError::SerializationError(_)));
        }
    }

    #[test]
    fn test_error_is_std_error() {
        let err = ForecastError::UnknownCategory("Sushi".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
