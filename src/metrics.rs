//! Metrics for evaluating the regression model.

/// Regression accuracy metrics over paired slices.
pub struct Metrics;

impl Metrics {
    /// Mean Squared Error: `mean((y_true - y_pred)^2)`.
    ///
    /// # Panics
    /// Panics if the slices differ in length.
    pub fn mse(y_true: &[f32], y_pred: &[f32]) -> f32 {
        assert_eq!(
            y_true.len(),
            y_pred.len(),
            "Arrays must have the same length"
        );

        if y_true.is_empty() {
            return 0.0;
        }

        let sum_sq: f32 = y_true
            .iter()
            .zip(y_pred.iter())
            .map(|(&t, &p)| (t - p).powi(2))
            .sum();

        sum_sq / y_true.len() as f32
    }

    /// Root Mean Squared Error: `sqrt(MSE)`, in the same units as the target.
    pub fn rmse(y_true: &[f32], y_pred: &[f32]) -> f32 {
        Self::mse(y_true, y_pred).sqrt()
    }

    /// Mean Absolute Error: `mean(|y_true - y_pred|)`.
    pub fn mae(y_true: &[f32], y_pred: &[f32]) -> f32 {
        assert_eq!(
            y_true.len(),
            y_pred.len(),
            "Arrays must have the same length"
        );

        if y_true.is_empty() {
            return 0.0;
        }

        let sum_abs: f32 = y_true
            .iter()
            .zip(y_pred.iter())
            .map(|(&t, &p)| (t - p).abs())
            .sum();

        sum_abs / y_true.len() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mse_perfect_prediction() {
        let y = [1.0, 2.0, 3.0];
        assert_eq!(Metrics::mse(&y, &y), 0.0);
    }

    #[test]
    fn test_mse_known_value() {
        let y_true = [0.0, 0.0];
        let y_pred = [1.0, 3.0];
        // (1 + 9) / 2 = 5
        assert!((Metrics::mse(&y_true, &y_pred) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_rmse_is_sqrt_of_mse() {
        let y_true = [0.0, 0.0];
        let y_pred = [3.0, 4.0];
        // MSE = 12.5, RMSE = sqrt(12.5)
        assert!((Metrics::rmse(&y_true, &y_pred) - 12.5f32.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_mae_known_value() {
        let y_true = [1.0, -1.0];
        let y_pred = [2.0, 1.0];
        assert!((Metrics::mae(&y_true, &y_pred) - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_empty_slices() {
        assert_eq!(Metrics::mse(&[], &[]), 0.0);
        assert_eq!(Metrics::rmse(&[], &[]), 0.0);
        assert_eq!(Metrics::mae(&[], &[]), 0.0);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn test_length_mismatch_panics() {
        Metrics::mse(&[1.0], &[1.0, 2.0]);
    }
}
