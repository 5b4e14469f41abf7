//! Cross-ticker aggregation of return series.

use ndarray::{Array2, Axis};

/// Mean of several return series taken position by position.
///
/// Element `i` of the result is the mean of element `i` of every series.
/// Series are aligned by sequence position, not by calendar month. When
/// lengths differ, position `i` averages only the series long enough to have
/// one, and the result is as long as the longest series.
#[must_use]
pub fn positional_mean<S: AsRef<[f64]>>(series: &[S]) -> Vec<f64> {
    let width = series.iter().map(|s| s.as_ref().len()).max().unwrap_or(0);
    if width == 0 {
        return Vec::new();
    }

    let mut values = Array2::<f64>::zeros((series.len(), width));
    let mut counts = Array2::<f64>::zeros((series.len(), width));
    for (row, s) in series.iter().enumerate() {
        for (col, &v) in s.as_ref().iter().enumerate() {
            values[[row, col]] = v;
            counts[[row, col]] = 1.0;
        }
    }

    let sums = values.sum_axis(Axis(0));
    let present = counts.sum_axis(Axis(0));
    (&sums / &present).to_vec()
}
