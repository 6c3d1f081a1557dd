//! Command-line entry point: train a sales model or load it for one forecast.

use std::path::PathBuf;

use clap::Parser;
use log::info;

use dish_forecast::config::ForecastConfig;
use dish_forecast::dataset::SalesDataset;
use dish_forecast::error::ForecastError;
use dish_forecast::pipeline::SalesPipeline;
use dish_forecast::trainer::train_and_evaluate;

const USAGE: &str =
    "Please provide a command. Use '1' (or 'train') to train the model or '2' (or 'predict') to make a prediction.";

#[derive(Parser)]
#[command(
    name = "dish-forecast",
    about = "Trains a dish sales regression model and makes single-record forecasts"
)]
struct Cli {
    /// Command: '1'/'train' to train, '2'/'predict' to forecast.
    mode: Option<String>,

    /// Input CSV dataset (training).
    #[arg(long, default_value = "./data.csv")]
    data: PathBuf,

    /// Model artifact path.
    #[arg(long, default_value = "./model.bin")]
    model: PathBuf,

    /// Dish name to forecast (prediction).
    #[arg(long, default_value = "Tacos")]
    name: String,

    /// Past-period sales for the forecast input (prediction).
    #[arg(long, default_value_t = 75.0)]
    past_sales: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Mode {
    Train,
    Predict,
}

/// Map the positional command to a mode. Anything unrecognized (including a
/// missing argument) falls back to the usage message, without a distinct
/// exit code.
fn parse_mode(arg: Option<&str>) -> Option<Mode> {
    match arg {
        Some("1") | Some("train") => Some(Mode::Train),
        Some("2") | Some("predict") => Some(Mode::Predict),
        _ => None,
    }
}

fn run_train(config: &ForecastConfig) -> Result<(), ForecastError> {
    let dataset = SalesDataset::load_csv(&config.data_path)?;
    info!("loaded {} rows from {}", dataset.len(), config.data_path.display());

    let (_, report) = train_and_evaluate(config, &dataset)?;
    println!("Root Mean Squared Error: {}", report.rmse);
    println!("Model training completed.");
    Ok(())
}

fn run_predict(config: &ForecastConfig, name: &str, past_sales: f32) -> Result<(), ForecastError> {
    let pipeline = SalesPipeline::load(&config.model_path)?;
    let forecast = pipeline.predict(name, past_sales)?;
    println!("Predicted sales for next period: {}", forecast);
    Ok(())
}

fn main() -> Result<(), ForecastError> {
    env_logger::init();
    let cli = Cli::parse();
    let config = ForecastConfig::new(&cli.data, &cli.model);

    match parse_mode(cli.mode.as_deref()) {
        Some(Mode::Train) => run_train(&config),
        Some(Mode::Predict) => run_predict(&config, &cli.name, cli.past_sales),
        None => {
            println!("{}", USAGE);
            Ok(())
        }
    }
}
