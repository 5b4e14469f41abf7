//! Compounding of periodic returns.

/// Net compounded return of a sequence of period returns.
///
/// Computes `prod(1 + r) - 1`. An empty sequence compounds to zero.
#[must_use]
pub fn net_compounded_return(returns: &[f64]) -> f64 {
    returns.iter().fold(1.0, |acc, r| acc * (1.0 + r)) - 1.0
}

/// Per-year rate that compounds to `net` over `years` years.
///
/// # Returns
/// `NaN` when `years` is zero.
#[must_use]
pub fn annualized_return(net: f64, years: usize) -> f64 {
    if years == 0 {
        return f64::NAN;
    }
    (1.0 + net).powf(1.0 / years as f64) - 1.0
}

/// Growth of one unit invested before the first period.
///
/// The result has one more element than `returns` and starts at 1.0.
/// A missing period (`None`) leaves the value unchanged.
#[must_use]
pub fn growth_index(returns: &[Option<f64>]) -> Vec<f64> {
    let mut index = Vec::with_capacity(returns.len() + 1);
    let mut value = 1.0;
    index.push(value);
    for r in returns {
        if let Some(r) = r {
            value *= 1.0 + r;
        }
        index.push(value);
    }
    index
}
