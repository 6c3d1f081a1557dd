//! # dish-forecast
//!
//! Forecasts a dish's next-period sales from its name and past-period sales.
//!
//! Two linear procedures compose the whole system:
//!
//! - **Trainer**: load a CSV dataset, split into train/test partitions, fit
//!   the fixed transform chain (one-hot dish name, min-max past sales,
//!   concatenate) plus an SDCA linear regression, report RMSE on the held-out
//!   partition, and persist the fitted pipeline as one artifact file.
//! - **Predictor**: load a saved artifact and run one record through the
//!   embedded schema to produce a single forecast.
//!
//! ## Core design
//!
//! - **Stateful type safety**: the regressor carries its training state in
//!   the type system (`Unfitted` vs `Fitted`), so inference on an untrained
//!   model does not compile.
//! - **Schema embedded in the artifact**: encoder categories and
//!   normalization statistics learned at training time are serialized with
//!   the weights; the predictor never re-derives them.
//! - **Explicit unknown-category policy**: a dish name unseen at training
//!   time encodes to the all-zero vector by default (see
//!   [`preprocessing::HandleUnknown`]).
//!
//! ## Quick start
//!
//! ```
//! use dish_forecast::config::ForecastConfig;
//! use dish_forecast::dataset::{DishRecord, SalesDataset};
//! use dish_forecast::pipeline::SalesPipeline;
//! use dish_forecast::trainer::train_and_evaluate;
//!
//! let dataset = SalesDataset::from_records(vec![
//!     DishRecord::new("Tacos", 75.0, 80.0),
//!     DishRecord::new("Pizza", 120.0, 110.0),
//!     DishRecord::new("Burger", 50.0, 55.0),
//! ]);
//!
//! let model_path = std::env::temp_dir().join("quickstart_model.bin");
//! let config = ForecastConfig::new("./data.csv", &model_path);
//! let (_, report) = train_and_evaluate(&config, &dataset).unwrap();
//! assert!(report.rmse.is_finite());
//!
//! let pipeline = SalesPipeline::load(&model_path).unwrap();
//! let forecast = pipeline.predict("Tacos", 75.0).unwrap();
//! assert!(forecast.is_finite());
//! # std::fs::remove_file(model_path).ok();
//! ```

/// Run configuration passed into both procedures.
pub mod config;

/// Dish sales records, CSV loading, train/test splitting.
pub mod dataset;

/// Crate-wide error type.
pub mod error;

/// Regression accuracy metrics.
pub mod metrics;

/// SDCA linear regression with typestate fitting.
pub mod model;

/// The fitted pipeline: preprocessing, inference, persistence.
pub mod pipeline;

/// Preprocessing transformers and the feature assembly chain.
pub mod preprocessing;

/// Byte-level parameter serialization.
pub mod serialization;

/// Training orchestration.
pub mod trainer;

pub use config::ForecastConfig;
pub use dataset::{DishRecord, SalesDataset};
pub use error::ForecastError;
pub use pipeline::SalesPipeline;
pub use trainer::{train_and_evaluate, TrainReport};
