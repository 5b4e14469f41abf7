//! Summary statistics over return series.

use ndarray::ArrayView1;

/// Monthly periods per year, used to annualize monthly ratios.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Arithmetic mean, `NaN` for an empty slice.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    ArrayView1::from(values).mean().unwrap_or(f64::NAN)
}

/// Sample standard deviation (divides by `n - 1`), `NaN` below two values.
#[must_use]
pub fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    ArrayView1::from(values).std(1.0)
}

/// Annualized mean-over-deviation ratio of periodic returns.
///
/// Computes `mean / sample_std * sqrt(periods_per_year)` with a zero
/// risk-free rate.
///
/// # Returns
/// `NaN` when fewer than two observations are given or the deviation is zero.
#[must_use]
pub fn risk_adjusted_ratio(returns: &[f64], periods_per_year: f64) -> f64 {
    let std = sample_std(returns);
    if !std.is_finite() || std == 0.0 {
        return f64::NAN;
    }
    mean(returns) / std * periods_per_year.sqrt()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn mean_basic() {
        assert_relative_eq!(mean(&[0.1, 0.2, 0.3]), 0.2, epsilon = 1e-12);
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn sample_std_divides_by_n_minus_one() {
        // deviations -1, 0, 1 -> sum of squares 2 over 2
        assert_relative_eq!(sample_std(&[1.0, 2.0, 3.0]), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn ratio_annualizes_by_sqrt_twelve() {
        // mean 0.02, sample std sqrt(0.0002)
        assert_relative_eq!(
            risk_adjusted_ratio(&[0.01, 0.03], MONTHS_PER_YEAR),
            0.02 / 0.0002_f64.sqrt() * 12.0_f64.sqrt(),
            epsilon = 1e-9
        );
    }

    #[rstest]
    #[case(&[])]
    #[case(&[0.05])]
    #[case(&[0.0, 0.0, 0.0])]
    #[case(&[0.02, 0.02, 0.02, 0.02])]
    fn ratio_nan_when_degenerate(#[case] returns: &[f64]) {
        assert!(risk_adjusted_ratio(returns, MONTHS_PER_YEAR).is_nan());
    }

    #[test]
    fn ratio_negative_for_losses() {
        assert!(risk_adjusted_ratio(&[-0.02, -0.01, -0.03], MONTHS_PER_YEAR) < 0.0);
    }
}
