//! Regression model with compile-time state tracking.
//!
//! The regressor carries its training state in the type system:
//! [`SdcaRegressor<Unfitted>`] exposes only `fit`, [`SdcaRegressor<Fitted>`]
//! only `predict`. You cannot call `predict()` on an untrained model.

pub mod sdca;

/// Marker type for a model that has not been trained yet.
pub struct Unfitted;

/// Marker type for a trained, inference-ready model.
pub struct Fitted;

pub use sdca::{SdcaConfig, SdcaParams, SdcaRegressor};
