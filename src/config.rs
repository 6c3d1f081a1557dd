//! Run configuration shared by the trainer and predictor.
//!
//! The original program kept the model path and runtime context in process
//! globals; here both procedures receive an explicitly constructed
//! [`ForecastConfig`] instead, with paths supplied by the caller.

use std::path::PathBuf;

use crate::model::SdcaConfig;

/// Default test fraction for the train/test split.
pub const DEFAULT_TEST_FRACTION: f64 = 0.1;

/// Configuration for a training or prediction run.
#[derive(Clone, Debug)]
pub struct ForecastConfig {
    /// Path to the input CSV dataset (training only).
    pub data_path: PathBuf,
    /// Path of the model artifact to write or read.
    pub model_path: PathBuf,
    /// Fraction of rows held out for evaluation.
    pub test_fraction: f64,
    /// Trainer hyperparameters.
    pub sdca: SdcaConfig,
}

impl ForecastConfig {
    pub fn new(data_path: impl Into<PathBuf>, model_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            model_path: model_path.into(),
            test_fraction: DEFAULT_TEST_FRACTION,
            sdca: SdcaConfig::default(),
        }
    }

    pub fn with_test_fraction(mut self, fraction: f64) -> Self {
        self.test_fraction = fraction;
        self
    }

    pub fn with_sdca(mut self, sdca: SdcaConfig) -> Self {
        self.sdca = sdca;
        self
    }
}
