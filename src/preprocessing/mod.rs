//! Data preprocessing transformers for the forecasting pipeline.
//!
//! Transformers follow a fit/transform split with serializable fitted state:
//!
//! - [`Transformer`]: unfitted, carries hyperparameters
//! - [`FittedTransformer`]: fitted, ready for inference and serialization
//!
//! # Available transformers
//!
//! - [`DishNameEncoder`]: one-hot encoding over dish names
//! - [`MinMaxScaler`]: scale the past-sales column to [0, 1] or a custom range
//! - [`FeatureAssembler`]: the full chain — scale, encode, concatenate
//!
//! # Example
//!
//! ```
//! use dish_forecast::dataset::DishRecord;
//! use dish_forecast::preprocessing::FeatureAssembler;
//!
//! let records = vec![
//!     DishRecord::new("Tacos", 75.0, 80.0),
//!     DishRecord::new("Pizza", 120.0, 110.0),
//! ];
//! let fitted = FeatureAssembler::new().fit(&records).unwrap();
//! let features = fitted.assemble_one("Tacos", 75.0).unwrap();
//! assert_eq!(features.len(), fitted.n_features());
//! ```

pub mod assemble;
pub mod minmax;
pub mod one_hot;
pub mod traits;

pub use assemble::{FeatureAssembler, FeatureAssemblerParams, FittedFeatureAssembler};
pub use minmax::{FittedMinMaxScaler, MinMaxScaler, MinMaxScalerParams};
pub use one_hot::{
    DishNameEncoder, DishNameEncoderParams, FittedDishNameEncoder, HandleUnknown,
};
pub use traits::{FittedTransformer, Transformer};
