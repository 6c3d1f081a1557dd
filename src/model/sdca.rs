//! Linear regression fitted by stochastic dual coordinate ascent.
//!
//! Minimizes the L2-regularized least-squares objective
//!
//! ```text
//! P(w) = (1/n) * sum_i (w . x_i - y_i)^2  +  (lambda/2) * ||w||^2
//! ```
//!
//! by maintaining one dual variable per training sample and applying the
//! closed-form coordinate update for squared loss. Each epoch visits the
//! samples in a fresh random order; training stops when the largest dual
//! step of an epoch falls below the tolerance.
//!
//! The bias term is carried as an implicit constant feature, so the stored
//! weight vector has `n_features + 1` entries during optimization.

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

use crate::error::ForecastError;
use crate::model::{Fitted, Unfitted};

/// Hyperparameters for the SDCA trainer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SdcaConfig {
    /// L2 regularization strength (lambda). Must be positive.
    pub l2: f64,
    /// Upper bound on training epochs.
    pub max_epochs: usize,
    /// Convergence threshold on the largest dual step per epoch.
    pub tolerance: f64,
    /// Seed for the per-epoch sample permutation. `None` draws from entropy,
    /// so exact training-to-training reproducibility is not guaranteed.
    pub seed: Option<u64>,
}

impl Default for SdcaConfig {
    fn default() -> Self {
        Self {
            l2: 1e-4,
            max_epochs: 500,
            tolerance: 1e-8,
            seed: None,
        }
    }
}

impl SdcaConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_l2(mut self, l2: f64) -> Self {
        self.l2 = l2;
        self
    }

    pub fn with_max_epochs(mut self, max_epochs: usize) -> Self {
        self.max_epochs = max_epochs;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Serializable parameters of a fitted regressor.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SdcaParams {
    /// One weight per input feature.
    pub weights: Vec<f32>,
    /// Intercept.
    pub bias: f32,
}

/// Linear regressor with state encoded at the type level.
///
/// - `S = Unfitted`: construct via [`SdcaRegressor::new`], then call `fit`.
/// - `S = Fitted`: returned by `fit` or [`SdcaRegressor::from_params`];
///   exposes `predict` and parameter extraction.
pub struct SdcaRegressor<S> {
    weights: Vec<f64>,
    bias: f64,
    config: SdcaConfig,
    _state: PhantomData<S>,
}

impl SdcaRegressor<Unfitted> {
    /// Create an untrained regressor for `n_features` input features.
    pub fn new(n_features: usize, config: SdcaConfig) -> Self {
        Self {
            weights: vec![0.0; n_features],
            bias: 0.0,
            config,
            _state: PhantomData,
        }
    }

    /// Fit against a feature matrix and target vector.
    ///
    /// # Errors
    /// Returns [`ForecastError`] if the matrix is empty, row lengths disagree
    /// with the declared feature count, targets are misaligned, or the
    /// configuration is invalid.
    pub fn fit(
        self,
        x: &[Vec<f32>],
        y: &[f32],
    ) -> Result<SdcaRegressor<Fitted>, ForecastError> {
        if self.config.l2 <= 0.0 {
            return Err(ForecastError::InvalidParameter(format!(
                "l2 must be positive, got {}",
                self.config.l2
            )));
        }
        if x.is_empty() {
            return Err(ForecastError::EmptyData(
                "cannot fit on an empty feature matrix".to_string(),
            ));
        }
        if x.len() != y.len() {
            return Err(ForecastError::InvalidData(format!(
                "feature matrix has {} rows but target has {} entries",
                x.len(),
                y.len()
            )));
        }
        let n_features = self.weights.len();
        for row in x {
            if row.len() != n_features {
                return Err(ForecastError::FeatureMismatch {
                    expected_features: n_features,
                    got_features: row.len(),
                });
            }
        }

        let n = x.len();
        let lambda_n = self.config.l2 * n as f64;

        // Augment with the constant bias feature; index n_features holds the bias.
        let dim = n_features + 1;
        let mut w = vec![0.0f64; dim];
        let mut alpha = vec![0.0f64; n];

        // Squared row norms of the augmented samples, fixed across epochs.
        let row_norms: Vec<f64> = x
            .iter()
            .map(|row| row.iter().map(|&v| (v as f64) * (v as f64)).sum::<f64>() + 1.0)
            .collect();

        let mut rng = match self.config.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        let mut order: Vec<usize> = (0..n).collect();

        for epoch in 0..self.config.max_epochs {
            order.shuffle(&mut rng);
            let mut max_step = 0.0f64;

            for &i in &order {
                let row = &x[i];
                let mut margin = w[n_features];
                for (j, &v) in row.iter().enumerate() {
                    margin += w[j] * v as f64;
                }

                // Exact coordinate maximizer for squared loss.
                let numerator = y[i] as f64 - margin - 0.5 * alpha[i];
                let denominator = 0.5 + row_norms[i] / lambda_n;
                let delta = numerator / denominator;

                alpha[i] += delta;
                let step = delta / lambda_n;
                for (j, &v) in row.iter().enumerate() {
                    w[j] += step * v as f64;
                }
                w[n_features] += step;

                max_step = max_step.max(delta.abs());
            }

            debug!("sdca epoch {}: max dual step {:.3e}", epoch, max_step);
            if max_step < self.config.tolerance {
                debug!("sdca converged after {} epochs", epoch + 1);
                break;
            }
        }

        let bias = w.pop().unwrap_or(0.0);
        Ok(SdcaRegressor {
            weights: w,
            bias,
            config: self.config,
            _state: PhantomData,
        })
    }
}

impl SdcaRegressor<Fitted> {
    /// Predict on a single feature vector.
    ///
    /// # Errors
    /// Returns [`ForecastError::FeatureMismatch`] if the input width differs
    /// from the trained schema.
    pub fn predict(&self, features: &[f32]) -> Result<f32, ForecastError> {
        if features.len() != self.weights.len() {
            return Err(ForecastError::FeatureMismatch {
                expected_features: self.weights.len(),
                got_features: features.len(),
            });
        }
        let dot: f64 = self
            .weights
            .iter()
            .zip(features.iter())
            .map(|(&w, &v)| w * v as f64)
            .sum();
        Ok((dot + self.bias) as f32)
    }

    /// Number of input features the model was trained on.
    pub fn n_features(&self) -> usize {
        self.weights.len()
    }

    pub fn extract_params(&self) -> SdcaParams {
        SdcaParams {
            weights: self.weights.iter().map(|&w| w as f32).collect(),
            bias: self.bias as f32,
        }
    }

    /// Reconstruct a fitted regressor from stored parameters.
    pub fn from_params(params: SdcaParams) -> Result<Self, ForecastError> {
        if params.weights.iter().any(|w| !w.is_finite()) || !params.bias.is_finite() {
            return Err(ForecastError::InvalidParameter(
                "model params carry non-finite weights".to_string(),
            ));
        }
        Ok(Self {
            weights: params.weights.iter().map(|&w| w as f64).collect(),
            bias: params.bias as f64,
            config: SdcaConfig::default(),
            _state: PhantomData,
        })
    }
}
