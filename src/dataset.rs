//! Dish sales dataset: CSV loading and train/test splitting.
//!
//! The input file is comma-separated with a header row and three columns:
//! dish name (text), past-period sales (number), next-period sales (number).
//! Quoted fields are permitted; sparse rows are not.
//!
//! # Example
//!
//! ```no_run
//! use dish_forecast::dataset::SalesDataset;
//!
//! let dataset = SalesDataset::load_csv("./data.csv").unwrap();
//! let (train, test) = dataset.train_test_split(0.1, None).unwrap();
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::ForecastError;

/// One observed dish row. Immutable once loaded.
#[derive(Clone, Debug, PartialEq)]
pub struct DishRecord {
    /// Dish name, the categorical feature.
    pub name: String,
    /// Sales over the past period, the numeric feature.
    pub past_sales: f32,
    /// Sales over the next period, the training target.
    pub next_sales: f32,
}

impl DishRecord {
    pub fn new(name: impl Into<String>, past_sales: f32, next_sales: f32) -> Self {
        Self {
            name: name.into(),
            past_sales,
            next_sales,
        }
    }
}

/// An ordered sequence of [`DishRecord`]s.
#[derive(Clone, Debug, Default)]
pub struct SalesDataset {
    records: Vec<DishRecord>,
}

impl SalesDataset {
    pub fn from_records(records: Vec<DishRecord>) -> Self {
        Self { records }
    }

    /// Load a dataset from a comma-separated file with a header row.
    ///
    /// # Errors
    /// Returns [`ForecastError`] if the file cannot be opened, a row fails to
    /// parse per the record schema, or the file contains no data rows. There
    /// are no partial-success semantics: the first bad row aborts the load.
    pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Self, ForecastError> {
        let file = File::open(path.as_ref()).map_err(|e| {
            ForecastError::IoError(format!("{}: {}", path.as_ref().display(), e))
        })?;
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(BufReader::new(file));

        let mut records = Vec::new();
        for (i, result) in rdr.records().enumerate() {
            let row = result?;
            if row.len() != 3 {
                return Err(ForecastError::InvalidData(format!(
                    "row {}: expected 3 columns, got {}",
                    i + 1,
                    row.len()
                )));
            }
            let past_sales: f32 = row[1].parse().map_err(|_| {
                ForecastError::InvalidData(format!(
                    "row {}: past sales '{}' is not a number",
                    i + 1,
                    &row[1]
                ))
            })?;
            let next_sales: f32 = row[2].parse().map_err(|_| {
                ForecastError::InvalidData(format!(
                    "row {}: next sales '{}' is not a number",
                    i + 1,
                    &row[2]
                ))
            })?;
            records.push(DishRecord::new(row[0].to_string(), past_sales, next_sales));
        }

        if records.is_empty() {
            return Err(ForecastError::EmptyData(
                "dataset file contains no data rows".to_string(),
            ));
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[DishRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Dish names column.
    pub fn names(&self) -> Vec<String> {
        self.records.iter().map(|r| r.name.clone()).collect()
    }

    /// Past-period sales column.
    pub fn past_sales(&self) -> Vec<f32> {
        self.records.iter().map(|r| r.past_sales).collect()
    }

    /// Next-period sales column (the label).
    pub fn targets(&self) -> Vec<f32> {
        self.records.iter().map(|r| r.next_sales).collect()
    }

    /// Split into disjoint train and held-out partitions.
    ///
    /// Rows are shuffled before splitting. `seed` pins the shuffle for tests;
    /// `None` draws from entropy, so repeated training runs over the same file
    /// are not guaranteed to produce identical partitions.
    ///
    /// # Errors
    /// Returns [`ForecastError::InvalidParameter`] unless `0.0 <= test_fraction < 1.0`,
    /// and [`ForecastError::EmptyData`] on an empty dataset.
    pub fn train_test_split(
        &self,
        test_fraction: f64,
        seed: Option<u64>,
    ) -> Result<(SalesDataset, SalesDataset), ForecastError> {
        if !(0.0..1.0).contains(&test_fraction) {
            return Err(ForecastError::InvalidParameter(format!(
                "test_fraction must be in [0, 1), got {}",
                test_fraction
            )));
        }
        if self.records.is_empty() {
            return Err(ForecastError::EmptyData(
                "cannot split an empty dataset".to_string(),
            ));
        }

        let mut shuffled = self.records.clone();
        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        shuffled.shuffle(&mut rng);

        let n_test = (self.records.len() as f64 * test_fraction).round() as usize;
        // Never let the test partition swallow the whole dataset.
        let n_test = n_test.min(self.records.len() - 1);
        let test = shuffled.split_off(shuffled.len() - n_test);

        Ok((
            SalesDataset::from_records(shuffled),
            SalesDataset::from_records(test),
        ))
    }
}
