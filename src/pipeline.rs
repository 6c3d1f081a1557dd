//! The complete forecasting pipeline: preprocessing plus model inference.
//!
//! [`SalesPipeline`] combines a fitted [`FittedFeatureAssembler`] with a
//! fitted [`SdcaRegressor`] and persists both, together with their schema,
//! as a single versioned artifact file. The predictor treats the file as an
//! opaque blob with a load/save contract; everything needed for inference
//! is embedded at save time.

use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::dataset::DishRecord;
use crate::error::ForecastError;
use crate::model::{Fitted, SdcaParams, SdcaRegressor};
use crate::preprocessing::{FeatureAssemblerParams, FittedFeatureAssembler};
use crate::serialization;

/// Bumped whenever the artifact layout changes.
pub const ARTIFACT_VERSION: u32 = 1;

/// Serializable form of a [`SalesPipeline`].
#[derive(Serialize, Deserialize)]
pub struct SalesPipelineParams {
    /// Artifact format version; checked on load.
    pub version: u32,
    /// Feature schema: encoder categories and normalization statistics.
    pub assembler: FeatureAssemblerParams,
    /// Regression weights and bias.
    pub model: SdcaParams,
}

/// Fitted pipeline ready for inference and persistence.
pub struct SalesPipeline {
    assembler: FittedFeatureAssembler,
    model: SdcaRegressor<Fitted>,
}

impl SalesPipeline {
    /// Combine a fitted assembler and model.
    ///
    /// # Errors
    /// Returns [`ForecastError::FeatureMismatch`] if the model was trained on
    /// a different feature width than the assembler produces.
    pub fn new(
        assembler: FittedFeatureAssembler,
        model: SdcaRegressor<Fitted>,
    ) -> Result<Self, ForecastError> {
        if assembler.n_features() != model.n_features() {
            return Err(ForecastError::FeatureMismatch {
                expected_features: assembler.n_features(),
                got_features: model.n_features(),
            });
        }
        Ok(Self { assembler, model })
    }

    pub fn assembler(&self) -> &FittedFeatureAssembler {
        &self.assembler
    }

    /// Forecast next-period sales for one input record.
    pub fn predict(&self, name: &str, past_sales: f32) -> Result<f32, ForecastError> {
        let features = self.assembler.assemble_one(name, past_sales)?;
        self.model.predict(&features)
    }

    /// Forecast next-period sales for a batch of records.
    pub fn predict_batch(&self, records: &[DishRecord]) -> Result<Vec<f32>, ForecastError> {
        records
            .iter()
            .map(|r| self.predict(&r.name, r.past_sales))
            .collect()
    }

    pub fn extract_params(&self) -> SalesPipelineParams {
        SalesPipelineParams {
            version: ARTIFACT_VERSION,
            assembler: self.assembler.extract_params(),
            model: self.model.extract_params(),
        }
    }

    pub fn from_params(params: SalesPipelineParams) -> Result<Self, ForecastError> {
        if params.version != ARTIFACT_VERSION {
            return Err(ForecastError::ArtifactVersion {
                expected: ARTIFACT_VERSION,
                got: params.version,
            });
        }
        let assembler = FittedFeatureAssembler::from_params(params.assembler)?;
        let model = SdcaRegressor::from_params(params.model)?;
        Self::new(assembler, model)
    }

    /// Save the pipeline to a single artifact file, overwriting any existing
    /// file at that path.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ForecastError> {
        let bytes = serialization::to_bytes(&self.extract_params())?;
        std::fs::write(path.as_ref(), bytes)?;
        info!("saved model artifact to {}", path.as_ref().display());
        Ok(())
    }

    /// Load a pipeline from an artifact file.
    ///
    /// # Errors
    /// A missing file, unreadable bytes, or a version mismatch are all fatal;
    /// there is no fallback.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ForecastError> {
        let bytes = std::fs::read(path.as_ref()).map_err(|e| {
            ForecastError::IoError(format!("{}: {}", path.as_ref().display(), e))
        })?;
        let params: SalesPipelineParams = serialization::from_bytes(&bytes)?;
        let pipeline = Self::from_params(params)?;
        info!(
            "loaded model artifact from {} ({} features)",
            path.as_ref().display(),
            pipeline.assembler.n_features()
        );
        Ok(pipeline)
    }
}
