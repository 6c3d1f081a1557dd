//! Min-max normalization of the past-sales column.
//!
//! The transformation is given by:
//! ```text
//! x_scaled = (x - x_min) / (x_max - x_min) * (max - min) + min
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ForecastError;
use crate::preprocessing::traits::{FittedTransformer, Transformer};

/// Min-max scaler for a single numeric column (unfitted).
#[derive(Clone, Debug)]
pub struct MinMaxScaler {
    range_min: f64,
    range_max: f64,
}

impl Default for MinMaxScaler {
    fn default() -> Self {
        Self::new()
    }
}

impl MinMaxScaler {
    /// Create a scaler targeting the default range [0, 1].
    pub fn new() -> Self {
        Self {
            range_min: 0.0,
            range_max: 1.0,
        }
    }

    /// Set the target range for scaling.
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        assert!(max > min, "max must be greater than min");
        self.range_min = min;
        self.range_max = max;
        self
    }
}

/// Serializable parameters for a fitted [`MinMaxScaler`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MinMaxScalerParams {
    /// Target range minimum.
    pub range_min: f64,
    /// Target range maximum.
    pub range_max: f64,
    /// Observed column minimum.
    pub data_min: f64,
    /// Observed column maximum.
    pub data_max: f64,
    /// Precomputed factor: (range_max - range_min) / (data_max - data_min).
    pub scale: f64,
}

/// Fitted min-max scaler ready for inference.
#[derive(Clone, Debug)]
pub struct FittedMinMaxScaler {
    params: MinMaxScalerParams,
}

impl FittedMinMaxScaler {
    /// Observed (min, max) of the fitted column.
    pub fn data_range(&self) -> (f64, f64) {
        (self.params.data_min, self.params.data_max)
    }

    /// Scale a single value using the statistics learned at fit time.
    ///
    /// Values outside the observed range extrapolate linearly; the scaler
    /// does not clamp.
    pub fn scale_one(&self, value: f32) -> f32 {
        let p = &self.params;
        ((value as f64 - p.data_min) * p.scale + p.range_min) as f32
    }
}

impl Transformer for MinMaxScaler {
    type Input = [f32];
    type Output = Vec<f32>;
    type Params = MinMaxScalerParams;
    type Fitted = FittedMinMaxScaler;

    fn fit(&self, data: &Self::Input) -> Result<Self::Fitted, ForecastError> {
        if data.is_empty() {
            return Err(ForecastError::EmptyData(
                "cannot fit MinMaxScaler on empty data".to_string(),
            ));
        }
        if data.iter().any(|v| !v.is_finite()) {
            return Err(ForecastError::InvalidData(
                "MinMaxScaler input contains non-finite values".to_string(),
            ));
        }

        let data_min = data.iter().copied().fold(f32::INFINITY, f32::min) as f64;
        let data_max = data.iter().copied().fold(f32::NEG_INFINITY, f32::max) as f64;

        let range = data_max - data_min;
        let scale = if range == 0.0 {
            // Constant column: map everything to range_min instead of dividing by zero.
            1.0
        } else {
            (self.range_max - self.range_min) / range
        };

        Ok(FittedMinMaxScaler {
            params: MinMaxScalerParams {
                range_min: self.range_min,
                range_max: self.range_max,
                data_min,
                data_max,
                scale,
            },
        })
    }
}

impl FittedTransformer for FittedMinMaxScaler {
    type Input = [f32];
    type Output = Vec<f32>;
    type Params = MinMaxScalerParams;

    fn transform(&self, data: &Self::Input) -> Result<Self::Output, ForecastError> {
        Ok(data.iter().map(|&v| self.scale_one(v)).collect())
    }

    fn extract_params(&self) -> Self::Params {
        self.params.clone()
    }

    fn from_params(params: Self::Params) -> Result<Self, ForecastError> {
        if !params.scale.is_finite() {
            return Err(ForecastError::InvalidParameter(
                "scaler params carry a non-finite scale".to_string(),
            ));
        }
        Ok(FittedMinMaxScaler { params })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_transform_unit_range() {
        let data = [10.0f32, 20.0, 30.0];
        let scaled = MinMaxScaler::new().fit_transform(&data).unwrap();
        assert!((scaled[0] - 0.0).abs() < 1e-6);
        assert!((scaled[1] - 0.5).abs() < 1e-6);
        assert!((scaled[2] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_custom_range() {
        let data = [0.0f32, 10.0];
        let fitted = MinMaxScaler::new().with_range(-1.0, 1.0).fit(&data).unwrap();
        assert!((fitted.scale_one(0.0) + 1.0).abs() < 1e-6);
        assert!((fitted.scale_one(5.0) - 0.0).abs() < 1e-6);
        assert!((fitted.scale_one(10.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_constant_column_no_division_by_zero() {
        let data = [5.0f32, 5.0, 5.0];
        let fitted = MinMaxScaler::new().fit(&data).unwrap();
        let scaled = fitted.transform(&data).unwrap();
        assert!(scaled.iter().all(|v| v.is_finite()));
        assert!((scaled[0] - 0.0).abs() < 1e-6);
    }

    #[test]
    fn test_out_of_range_value_extrapolates() {
        let data = [0.0f32, 100.0];
        let fitted = MinMaxScaler::new().fit(&data).unwrap();
        assert!((fitted.scale_one(200.0) - 2.0).abs() < 1e-6);
        assert!((fitted.scale_one(-100.0) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_fit_empty_fails() {
        let result = MinMaxScaler::new().fit(&[]);
        assert!(matches!(result, Err(ForecastError::EmptyData(_))));
    }

    #[test]
    fn test_fit_nan_fails() {
        let result = MinMaxScaler::new().fit(&[1.0, f32::NAN]);
        assert!(matches!(result, Err(ForecastError::InvalidData(_))));
    }

    #[test]
    fn test_params_round_trip() {
        let data = [10.0f32, 50.0];
        let fitted = MinMaxScaler::new().fit(&data).unwrap();
        let restored = FittedMinMaxScaler::from_params(fitted.extract_params()).unwrap();
        assert_eq!(restored.scale_one(30.0), fitted.scale_one(30.0));
        assert_eq!(restored.data_range(), (10.0, 50.0));
    }

    #[test]
    #[should_panic(expected = "max must be greater than min")]
    fn test_invalid_range_panics() {
        let _ = MinMaxScaler::new().with_range(1.0, 1.0);
    }

    #[test]
    fn test_fitted_scaler_debug_shows_stats() {
        let fitted = MinMaxScaler::new().fit(&[10.0f32, 50.0]).unwrap();
        let repr = format!("{:?}", fitted);
        assert!(repr.contains("data_min"));
        assert!(repr.contains("data_max"));
    }
}
