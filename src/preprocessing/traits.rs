//! Core traits for preprocessing transformers.
//!
//! Two central traits mirror the fit/transform split:
//! - [`Transformer`]: Used during fitting; has hyperparameters and can learn from data.
//! - [`FittedTransformer`]: After fitting; ready for inference and serialization.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ForecastError;

/// Trait for unfitted transformers with hyperparameters.
///
/// A transformer learns parameters from training data and can then transform
/// new data using those learned parameters. This trait represents the
/// configurable, unfitted state.
pub trait Transformer: Clone {
    /// Input data type for fitting and transformation.
    type Input: ?Sized;
    /// Output data type after transformation.
    type Output;
    /// Serializable representation of learned parameters.
    type Params: Serialize + DeserializeOwned;
    /// The corresponding fitted transformer type.
    type Fitted: FittedTransformer<
        Input = Self::Input,
        Output = Self::Output,
        Params = Self::Params,
    >;

    /// Fit the transformer to the training data.
    ///
    /// # Errors
    /// Returns [`ForecastError`] if the data is empty or invalid for this
    /// transformer.
    fn fit(&self, data: &Self::Input) -> Result<Self::Fitted, ForecastError>;

    /// Fit the transformer and transform the data in one step.
    fn fit_transform(&self, data: &Self::Input) -> Result<Self::Output, ForecastError> {
        let fitted = self.fit(data)?;
        fitted.transform(data)
    }
}

/// Trait for fitted transformers ready for inference.
///
/// A fitted transformer contains learned parameters (e.g., observed min/max
/// for [`crate::preprocessing::MinMaxScaler`]) and can transform new data.
/// `extract_params()` + `from_params()` is a round trip, which is what the
/// model artifact relies on: the schema learned at training time is embedded
/// in the artifact, never re-derived at inference time.
pub trait FittedTransformer: Clone {
    /// Input data type for transformation.
    type Input: ?Sized;
    /// Output data type after transformation.
    type Output;
    /// Serializable representation of learned parameters.
    type Params: Serialize + DeserializeOwned;

    /// Transform data using learned parameters.
    ///
    /// # Errors
    /// Returns [`ForecastError`] if the input does not match the schema seen
    /// during fitting.
    fn transform(&self, data: &Self::Input) -> Result<Self::Output, ForecastError>;

    /// Extract learned parameters as a serializable representation.
    fn extract_params(&self) -> Self::Params;

    /// Reconstruct a fitted transformer from parameters.
    fn from_params(params: Self::Params) -> Result<Self, ForecastError>
    where
        Self: Sized;
}
