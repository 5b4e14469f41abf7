//! Value formatting shared by every output.

/// Percentage with sign and two decimals, `n/a` when undefined.
#[must_use]
pub fn format_percent(value: f64) -> String {
    if value.is_finite() { format!("{:+.2}%", value * 100.0) } else { "n/a".to_string() }
}

/// Plain ratio with two decimals, `n/a` when undefined.
#[must_use]
pub fn format_ratio(value: f64) -> String {
    if value.is_finite() { format!("{value:.2}") } else { "n/a".to_string() }
}

/// Escape text for HTML and SVG content.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0.1234, "+12.34%")]
    #[case(-0.05, "-5.00%")]
    #[case(0.0, "+0.00%")]
    #[case(f64::NAN, "n/a")]
    #[case(f64::INFINITY, "n/a")]
    fn percent(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_percent(value), expected);
    }

    #[rstest]
    #[case(1.456, "1.46")]
    #[case(-0.2, "-0.20")]
    #[case(f64::NAN, "n/a")]
    fn ratio(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_ratio(value), expected);
    }

    #[test]
    fn escapes_benchmark_label() {
        assert_eq!(escape_html("S&P 500 <idx>"), "S&amp;P 500 &lt;idx&gt;");
    }
}
