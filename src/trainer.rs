//! Training orchestration: split, fit, evaluate, persist.

use log::{info, warn};

use crate::config::ForecastConfig;
use crate::dataset::SalesDataset;
use crate::error::ForecastError;
use crate::metrics::Metrics;
use crate::model::{SdcaRegressor, Unfitted};
use crate::pipeline::SalesPipeline;
use crate::preprocessing::FeatureAssembler;

/// Summary of one training run.
#[derive(Clone, Debug)]
pub struct TrainReport {
    /// Root-mean-squared-error on the held-out partition (in-sample when the
    /// split leaves no held-out rows).
    pub rmse: f32,
    /// Rows used for fitting.
    pub n_train: usize,
    /// Rows used for evaluation.
    pub n_test: usize,
}

/// Train a pipeline on the dataset and save the artifact to
/// `config.model_path`, overwriting any existing file.
///
/// The transform chain is fixed: designate next-period sales as the label,
/// one-hot encode the dish name, min-max normalize past-period sales,
/// concatenate, and fit SDCA regression against the label.
///
/// # Errors
/// Any failure (unsplittable dataset, fit error, unwritable artifact path)
/// aborts the run; there are no retry or partial-success semantics.
pub fn train_and_evaluate(
    config: &ForecastConfig,
    dataset: &SalesDataset,
) -> Result<(SalesPipeline, TrainReport), ForecastError> {
    let (train, test) = dataset.train_test_split(config.test_fraction, config.sdca.seed)?;
    info!(
        "split {} rows into {} train / {} test",
        dataset.len(),
        train.len(),
        test.len()
    );

    let assembler = FeatureAssembler::new().fit(train.records())?;
    let x = assembler.assemble(train.records())?;
    let y = train.targets();

    let model = SdcaRegressor::<Unfitted>::new(assembler.n_features(), config.sdca.clone())
        .fit(&x, &y)?;
    let pipeline = SalesPipeline::new(assembler, model)?;

    // Tiny datasets can round the held-out partition down to nothing; fall
    // back to in-sample error rather than reporting RMSE over zero rows.
    let (eval_set, n_test) = if test.is_empty() {
        warn!("held-out partition is empty, reporting in-sample RMSE");
        (&train, 0)
    } else {
        (&test, test.len())
    };

    let predictions = pipeline.predict_batch(eval_set.records())?;
    let rmse = Metrics::rmse(&eval_set.targets(), &predictions);
    info!("root mean squared error: {}", rmse);

    pipeline.save(&config.model_path)?;

    Ok((
        pipeline,
        TrainReport {
            rmse,
            n_train: train.len(),
            n_test,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DishRecord;
    use crate::model::SdcaConfig;

    // Sales follow an exact linear pattern per dish so the model can get close.
    fn linear_dataset() -> SalesDataset {
        let dishes = ["Tacos", "Pizza", "Burger"];
        let mut records = Vec::new();
        for (d, name) in dishes.iter().enumerate() {
            for k in 0..8 {
                let past = 40.0 + 10.0 * k as f32 + 5.0 * d as f32;
                let next = 1.1 * past + 4.0 * d as f32;
                records.push(DishRecord::new(*name, past, next));
            }
        }
        SalesDataset::from_records(records)
    }

    fn temp_config(name: &str) -> ForecastConfig {
        ForecastConfig::new("unused.csv", std::env::temp_dir().join(name))
            .with_sdca(SdcaConfig::new().with_seed(3).with_max_epochs(3000))
    }

    #[test]
    fn test_train_reports_reasonable_rmse() {
        let config = temp_config("dish_forecast_trainer_rmse.bin");
        let (_, report) = train_and_evaluate(&config, &linear_dataset()).unwrap();

        assert!(report.n_train > 0);
        assert!(report.rmse < 20.0, "rmse = {}", report.rmse);
        std::fs::remove_file(&config.model_path).ok();
    }

    #[test]
    fn test_artifact_written_and_loadable() {
        let config = temp_config("dish_forecast_trainer_artifact.bin");
        let (pipeline, _) = train_and_evaluate(&config, &linear_dataset()).unwrap();

        let loaded = SalesPipeline::load(&config.model_path).unwrap();
        assert_eq!(
            loaded.predict("Tacos", 75.0).unwrap(),
            loaded.predict("Tacos", 75.0).unwrap()
        );
        assert!(
            (loaded.predict("Pizza", 100.0).unwrap() - pipeline.predict("Pizza", 100.0).unwrap())
                .abs()
                < 1e-3
        );
        std::fs::remove_file(&config.model_path).ok();
    }

    #[test]
    fn test_retrain_overwrites_artifact() {
        let config = temp_config("dish_forecast_trainer_overwrite.bin");
        train_and_evaluate(&config, &linear_dataset()).unwrap();
        // Second run against the pre-existing file must not error.
        train_and_evaluate(&config, &linear_dataset()).unwrap();
        std::fs::remove_file(&config.model_path).ok();
    }

    #[test]
    fn test_tiny_dataset_falls_back_to_in_sample_rmse() {
        let config = temp_config("dish_forecast_trainer_tiny.bin");
        let ds = SalesDataset::from_records(vec![
            DishRecord::new("Tacos", 75.0, 80.0),
            DishRecord::new("Pizza", 120.0, 110.0),
        ]);
        let (_, report) = train_and_evaluate(&config, &ds).unwrap();
        assert_eq!(report.n_test, 0);
        assert!(report.rmse.is_finite());
        std::fs::remove_file(&config.model_path).ok();
    }

    #[test]
    fn test_empty_dataset_fails() {
        let config = temp_config("dish_forecast_trainer_empty.bin");
        let result = train_and_evaluate(&config, &SalesDataset::default());
        assert!(matches!(result, Err(ForecastError::EmptyData(_))));
    }
}
