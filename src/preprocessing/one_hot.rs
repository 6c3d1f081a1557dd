//! One-hot encoding of dish names.
//!
//! Converts dish names (strings) to one-hot vectors. The encoder learns the
//! set of distinct names during fitting; categories are kept sorted so the
//! encoding is independent of row order in the input file.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::ForecastError;
use crate::preprocessing::traits::{FittedTransformer, Transformer};

/// Strategy for handling names unseen at fit time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum HandleUnknown {
    /// Encode an unknown name as the all-zero vector.
    ///
    /// This is the default: a loaded model must be able to score a brand-new
    /// dish without crashing, it just gets no categorical signal.
    #[default]
    Ignore,
    /// Raise an error when an unknown name is encountered.
    Error,
}

/// One-hot encoder for dish names (unfitted).
#[derive(Clone, Debug, Default)]
pub struct DishNameEncoder {
    handle_unknown: HandleUnknown,
}

impl DishNameEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the strategy for handling unknown names during transform.
    pub fn with_handle_unknown(mut self, strategy: HandleUnknown) -> Self {
        self.handle_unknown = strategy;
        self
    }
}

/// Serializable parameters for a fitted [`DishNameEncoder`].
#[derive(Clone, Serialize, Deserialize)]
pub struct DishNameEncoderParams {
    /// Distinct names seen during fit, sorted.
    pub categories: Vec<String>,
    /// Handle-unknown strategy.
    pub handle_unknown: HandleUnknown,
}

/// Fitted one-hot encoder ready for inference.
#[derive(Clone, Debug)]
pub struct FittedDishNameEncoder {
    categories: Vec<String>,
    handle_unknown: HandleUnknown,
}

impl FittedDishNameEncoder {
    /// The names learned during fit, sorted.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Width of the encoded vector.
    pub fn n_features_out(&self) -> usize {
        self.categories.len()
    }

    /// Encode a single name.
    ///
    /// Unknown names yield the all-zero vector under [`HandleUnknown::Ignore`]
    /// and [`ForecastError::UnknownCategory`] under [`HandleUnknown::Error`].
    pub fn encode_one(&self, name: &str) -> Result<Vec<f32>, ForecastError> {
        let mut row = vec![0.0f32; self.categories.len()];
        match self.categories.binary_search_by(|c| c.as_str().cmp(name)) {
            Ok(idx) => row[idx] = 1.0,
            Err(_) => {
                if self.handle_unknown == HandleUnknown::Error {
                    return Err(ForecastError::UnknownCategory(name.to_string()));
                }
            }
        }
        Ok(row)
    }
}

impl Transformer for DishNameEncoder {
    type Input = [String];
    type Output = Vec<Vec<f32>>;
    type Params = DishNameEncoderParams;
    type Fitted = FittedDishNameEncoder;

    fn fit(&self, data: &Self::Input) -> Result<Self::Fitted, ForecastError> {
        if data.is_empty() {
            return Err(ForecastError::EmptyData(
                "cannot fit DishNameEncoder on empty data".to_string(),
            ));
        }

        let categories: Vec<String> = data
            .iter()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        Ok(FittedDishNameEncoder {
            categories,
            handle_unknown: self.handle_unknown,
        })
    }
}

impl FittedTransformer for FittedDishNameEncoder {
    type Input = [String];
    type Output = Vec<Vec<f32>>;
    type Params = DishNameEncoderParams;

    fn transform(&self, data: &Self::Input) -> Result<Self::Output, ForecastError> {
        data.iter().map(|name| self.encode_one(name)).collect()
    }

    fn extract_params(&self) -> Self::Params {
        DishNameEncoderParams {
            categories: self.categories.clone(),
            handle_unknown: self.handle_unknown,
        }
    }

    fn from_params(params: Self::Params) -> Result<Self, ForecastError> {
        if params.categories.is_empty() {
            return Err(ForecastError::EmptyData(
                "encoder params carry no categories".to_string(),
            ));
        }
        Ok(FittedDishNameEncoder {
            categories: params.categories,
            handle_unknown: params.handle_unknown,
        })
    }
}
