//! Feature assembly: the fixed transform chain applied to every record.
//!
//! Concatenates the min-max-scaled past-sales value with the one-hot-encoded
//! dish name into a single feature vector. The fitted assembler owns the
//! training-time feature schema; the model artifact serializes it so that
//! inference sees exactly the columns the trainer saw.

use serde::{Deserialize, Serialize};

use crate::dataset::DishRecord;
use crate::error::ForecastError;
use crate::preprocessing::minmax::{FittedMinMaxScaler, MinMaxScaler, MinMaxScalerParams};
use crate::preprocessing::one_hot::{
    DishNameEncoder, DishNameEncoderParams, FittedDishNameEncoder, HandleUnknown,
};
use crate::preprocessing::traits::{FittedTransformer, Transformer};

/// Unfitted feature assembler.
///
/// Wraps the encoder and scaler hyperparameters; `fit` learns both from the
/// training partition in one pass over the records.
#[derive(Clone, Debug, Default)]
pub struct FeatureAssembler {
    encoder: DishNameEncoder,
    scaler: MinMaxScaler,
}

impl FeatureAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the unknown-name policy (default: all-zero encoding).
    pub fn with_handle_unknown(mut self, strategy: HandleUnknown) -> Self {
        self.encoder = self.encoder.with_handle_unknown(strategy);
        self
    }

    /// Fit encoder and scaler against the training records.
    pub fn fit(&self, records: &[DishRecord]) -> Result<FittedFeatureAssembler, ForecastError> {
        if records.is_empty() {
            return Err(ForecastError::EmptyData(
                "cannot fit FeatureAssembler on empty data".to_string(),
            ));
        }
        let names: Vec<String> = records.iter().map(|r| r.name.clone()).collect();
        let past_sales: Vec<f32> = records.iter().map(|r| r.past_sales).collect();

        let encoder = self.encoder.fit(&names)?;
        let scaler = self.scaler.fit(&past_sales)?;

        Ok(FittedFeatureAssembler { encoder, scaler })
    }
}

/// Serializable parameters for a fitted [`FeatureAssembler`].
#[derive(Clone, Serialize, Deserialize)]
pub struct FeatureAssemblerParams {
    pub encoder: DishNameEncoderParams,
    pub scaler: MinMaxScalerParams,
}

/// Fitted feature assembler: owns the feature schema.
#[derive(Clone, Debug)]
pub struct FittedFeatureAssembler {
    encoder: FittedDishNameEncoder,
    scaler: FittedMinMaxScaler,
}

impl FittedFeatureAssembler {
    /// Width of the assembled feature vector: scaled sales + one column per dish.
    pub fn n_features(&self) -> usize {
        1 + self.encoder.n_features_out()
    }

    pub fn encoder(&self) -> &FittedDishNameEncoder {
        &self.encoder
    }

    pub fn scaler(&self) -> &FittedMinMaxScaler {
        &self.scaler
    }

    /// Assemble the feature vector for one input record.
    pub fn assemble_one(&self, name: &str, past_sales: f32) -> Result<Vec<f32>, ForecastError> {
        let mut features = Vec::with_capacity(self.n_features());
        features.push(self.scaler.scale_one(past_sales));
        features.extend(self.encoder.encode_one(name)?);
        Ok(features)
    }

    /// Assemble the feature matrix for a batch of records.
    pub fn assemble(&self, records: &[DishRecord]) -> Result<Vec<Vec<f32>>, ForecastError> {
        records
            .iter()
            .map(|r| self.assemble_one(&r.name, r.past_sales))
            .collect()
    }

    pub fn extract_params(&self) -> FeatureAssemblerParams {
        FeatureAssemblerParams {
            encoder: self.encoder.extract_params(),
            scaler: self.scaler.extract_params(),
        }
    }

    pub fn from_params(params: FeatureAssemblerParams) -> Result<Self, ForecastError> {
        Ok(Self {
            encoder: FittedDishNameEncoder::from_params(params.encoder)?,
            scaler: FittedMinMaxScaler::from_params(params.scaler)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<DishRecord> {
        vec![
            DishRecord::new("Tacos", 75.0, 80.0),
            DishRecord::new("Pizza", 120.0, 110.0),
            DishRecord::new("Burger", 50.0, 55.0),
        ]
    }

    #[test]
    fn test_feature_layout() {
        let fitted = FeatureAssembler::new().fit(&sample_records()).unwrap();
        // 1 scaled numeric + 3 dish columns
        assert_eq!(fitted.n_features(), 4);

        let features = fitted.assemble_one("Tacos", 75.0).unwrap();
        assert_eq!(features.len(), 4);
        // Past sales 75 in observed range [50, 120]
        assert!((features[0] - (75.0 - 50.0) / 70.0).abs() < 1e-6);
        // Sorted categories: [Burger, Pizza, Tacos]
        assert_eq!(&features[1..], &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_assemble_batch_matches_one() {
        let records = sample_records();
        let fitted = FeatureAssembler::new().fit(&records).unwrap();
        let batch = fitted.assemble(&records).unwrap();
        for (row, record) in batch.iter().zip(records.iter()) {
            let single = fitted.assemble_one(&record.name, record.past_sales).unwrap();
            assert_eq!(row, &single);
        }
    }

    #[test]
    fn test_unknown_dish_zero_category_block() {
        let fitted = FeatureAssembler::new().fit(&sample_records()).unwrap();
        let features = fitted.assemble_one("Sushi", 60.0).unwrap();
        assert_eq!(&features[1..], &[0.0, 0.0, 0.0]);
        assert!(features[0].is_finite());
    }

    #[test]
    fn test_unknown_dish_error_strategy() {
        let fitted = FeatureAssembler::new()
            .with_handle_unknown(HandleUnknown::Error)
            .fit(&sample_records())
            .unwrap();
        assert!(fitted.assemble_one("Sushi", 60.0).is_err());
    }

    #[test]
    fn test_fit_empty_fails() {
        assert!(matches!(
            FeatureAssembler::new().fit(&[]),
            Err(ForecastError::EmptyData(_))
        ));
    }

    #[test]
    fn test_params_round_trip_preserves_schema() {
        let fitted = FeatureAssembler::new().fit(&sample_records()).unwrap();
        let restored = FittedFeatureAssembler::from_params(fitted.extract_params()).unwrap();
        assert_eq!(restored.n_features(), fitted.n_features());
        assert_eq!(
            restored.assemble_one("Pizza", 100.0).unwrap(),
            fitted.assemble_one("Pizza", 100.0).unwrap()
        );
    }
}
