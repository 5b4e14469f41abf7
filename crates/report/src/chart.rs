//! Standalone SVG charts.

use brandreturns_math::growth_index;
use brandreturns_model::StudyResult;
use brandreturns_primitives::{SeriesKind, SeriesResult};

use crate::escape_html;

const WIDTH: f64 = 720.0;
const HEIGHT: f64 = 360.0;
const PADDING: f64 = 48.0;
const TITLE_HEIGHT: f64 = 24.0;
const Y_TICKS: usize = 5;
const PALETTE: [&str; 6] = ["#348dc1", "#2ca02c", "#9467bd", "#ff9933", "#d62728", "#8c564b"];
const GRID_COLOR: &str = "#e5e5e5";

struct LegendEntry<'a> {
    label: &'a str,
    color: &'static str,
    dash: bool,
}

fn series_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

fn dash_attr(dash: bool) -> &'static str {
    if dash { "5 3" } else { "0" }
}

fn svg_header(title: &str) -> String {
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}"><style>text{{font-family:Arial,sans-serif;font-size:11px;fill:#444}}.title{{font-size:14px;font-weight:bold;fill:#222}}</style><rect width="{w}" height="{h}" fill="#fff" /><text class="title" x="{x:.2}" y="18">{title}</text>"##,
        w = WIDTH,
        h = HEIGHT,
        x = PADDING,
        title = escape_html(title),
    )
}

const fn svg_footer() -> &'static str {
    "</svg>"
}

/// Lower and upper bound of the plotted values, always containing `anchor`.
fn extent(values: impl IntoIterator<Item = f64>, anchor: f64) -> (f64, f64) {
    let (min_v, max_v) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((anchor, anchor), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if (max_v - min_v).abs() < f64::EPSILON {
        let pad = if anchor == 0.0 { 0.01 } else { anchor.abs() * 0.05 };
        (min_v - pad, max_v + pad)
    } else {
        (min_v, max_v)
    }
}

fn scale_value(value: f64, min_v: f64, max_v: f64) -> f64 {
    let top = PADDING + TITLE_HEIGHT;
    let inner_height = HEIGHT - PADDING - top;
    let norm = (value - min_v) / (max_v - min_v);
    top + (1.0 - norm) * inner_height
}

fn x_positions(len: usize) -> Vec<f64> {
    match len {
        0 => Vec::new(),
        1 => vec![WIDTH / 2.0],
        _ => {
            let step = (WIDTH - 2.0 * PADDING) / (len - 1) as f64;
            (0..len).map(|i| PADDING + i as f64 * step).collect()
        }
    }
}

fn draw_y_axis(svg: &mut String, min_v: f64, max_v: f64, label: impl Fn(f64) -> String) {
    for i in 0..=Y_TICKS {
        let value = min_v + (max_v - min_v) * i as f64 / Y_TICKS as f64;
        let y = scale_value(value, min_v, max_v);
        svg.push_str(&format!(
            r#"<line x1="{x1:.2}" y1="{y:.2}" x2="{x2:.2}" y2="{y:.2}" stroke="{GRID_COLOR}" stroke-width="1" />"#,
            x1 = PADDING,
            x2 = WIDTH - PADDING,
        ));
        svg.push_str(&format!(
            r#"<text x="{x:.2}" y="{y:.2}" text-anchor="end">{label}</text>"#,
            x = PADDING - 6.0,
            y = y + 4.0,
            label = label(value),
        ));
    }
}

fn draw_year_labels(svg: &mut String, years: &[i32], xs: &[f64]) {
    let y = HEIGHT - PADDING + 18.0;
    for (year, x) in years.iter().zip(xs) {
        svg.push_str(&format!(r#"<text x="{x:.2}" y="{y:.2}" text-anchor="middle">{year}</text>"#));
    }
}

fn draw_horizontal(svg: &mut String, y: f64, color: &str, dash: bool) {
    svg.push_str(&format!(
        r#"<line x1="{x1:.2}" y1="{y:.2}" x2="{x2:.2}" y2="{y:.2}" stroke="{color}" stroke-width="1" stroke-dasharray="{dash}" />"#,
        x1 = PADDING,
        x2 = WIDTH - PADDING,
        dash = dash_attr(dash),
    ));
}

fn draw_legend(svg: &mut String, entries: &[LegendEntry<'_>]) {
    let x = PADDING + 10.0;
    let mut y = PADDING + TITLE_HEIGHT + 4.0;
    for entry in entries {
        svg.push_str(&format!(
            r#"<line x1="{x:.2}" y1="{ly:.2}" x2="{x2:.2}" y2="{ly:.2}" stroke="{color}" stroke-width="2" stroke-dasharray="{dash}" />"#,
            ly = y - 4.0,
            x2 = x + 20.0,
            color = entry.color,
            dash = dash_attr(entry.dash),
        ));
        svg.push_str(&format!(
            r#"<text x="{tx:.2}" y="{y:.2}" text-anchor="start">{label}</text>"#,
            tx = x + 26.0,
            label = escape_html(entry.label),
        ));
        y += 16.0;
    }
}

fn no_data(svg: &mut String) {
    svg.push_str(&format!(
        r#"<text x="{x:.2}" y="{y:.2}" text-anchor="middle">No data</text>"#,
        x = WIDTH / 2.0,
        y = HEIGHT / 2.0,
    ));
}

/// Value of one unit invested in `series` at the end of `start_year - 1`.
///
/// The result has one entry per year from `start_year - 1` to `end_year`.
/// A year without a recorded result leaves the value unchanged.
#[must_use]
pub fn growth_values(series: &SeriesResult, start_year: i32, end_year: i32) -> Vec<f64> {
    let returns: Vec<Option<f64>> =
        (start_year..=end_year).map(|year| series.get(year).map(|r| r.yearly_return)).collect();
    growth_index(&returns)
}

/// Cumulative-growth line chart, one line per series, indexed from 1.0.
#[must_use]
pub fn growth_chart(result: &StudyResult) -> String {
    let years: Vec<i32> = (result.start_year - 1..=result.end_year).collect();
    let xs = x_positions(years.len());
    let lines: Vec<Vec<f64>> = result
        .series
        .iter()
        .map(|s| growth_values(s, result.start_year, result.end_year))
        .collect();

    let mut svg = svg_header("Cumulative growth of 1.0");
    if lines.is_empty() {
        no_data(&mut svg);
        svg.push_str(svg_footer());
        return svg;
    }

    let (min_v, max_v) = extent(lines.iter().flatten().copied(), 1.0);
    draw_y_axis(&mut svg, min_v, max_v, |v| format!("{v:.2}"));
    draw_horizontal(&mut svg, scale_value(1.0, min_v, max_v), "#999999", true);

    let mut legend = Vec::with_capacity(lines.len());
    for (i, (series, values)) in result.series.iter().zip(&lines).enumerate() {
        let color = series_color(i);
        let dash = series.kind == SeriesKind::Benchmark;
        let points = xs
            .iter()
            .zip(values)
            .map(|(x, v)| format!("{x:.2},{y:.2}", y = scale_value(*v, min_v, max_v)))
            .collect::<Vec<_>>()
            .join(" ");
        svg.push_str(&format!(
            r#"<polyline fill="none" stroke="{color}" stroke-width="2" stroke-dasharray="{dash}" points="{points}" />"#,
            dash = dash_attr(dash),
        ));
        legend.push(LegendEntry { label: &series.label, color, dash });
    }

    draw_year_labels(&mut svg, &years, &xs);
    draw_legend(&mut svg, &legend);
    svg.push_str(svg_footer());
    svg
}

/// Grouped bar chart of yearly returns, one group per year.
///
/// A series without a result for a year has no bar in that group.
#[must_use]
pub fn yearly_returns_chart(result: &StudyResult) -> String {
    let years: Vec<i32> = (result.start_year..=result.end_year).collect();
    let mut svg = svg_header("Yearly returns");
    if result.series.is_empty() || years.is_empty() {
        no_data(&mut svg);
        svg.push_str(svg_footer());
        return svg;
    }

    let values = result.series.iter().flat_map(|s| s.years.iter().map(|y| y.yearly_return));
    let (min_v, max_v) = extent(values, 0.0);
    draw_y_axis(&mut svg, min_v, max_v, |v| format!("{:.0}%", v * 100.0));
    let zero_y = scale_value(0.0, min_v, max_v);
    draw_horizontal(&mut svg, zero_y, "#999999", false);

    let group_width = (WIDTH - 2.0 * PADDING) / years.len() as f64;
    let bar_width = group_width * 0.8 / result.series.len() as f64;
    let mut centers = Vec::with_capacity(years.len());

    for (g, year) in years.iter().enumerate() {
        let group_left = PADDING + g as f64 * group_width + group_width * 0.1;
        centers.push(PADDING + (g as f64 + 0.5) * group_width);

        for (i, series) in result.series.iter().enumerate() {
            let Some(value) = series.get(*year).map(|r| r.yearly_return).filter(|v| v.is_finite())
            else {
                continue;
            };
            let y_val = scale_value(value, min_v, max_v);
            let (top, bottom) = if value >= 0.0 { (y_val, zero_y) } else { (zero_y, y_val) };
            svg.push_str(&format!(
                r#"<rect x="{x:.2}" y="{top:.2}" width="{w:.2}" height="{h:.2}" fill="{color}"><title>{label} {year}: {pct:.2}%</title></rect>"#,
                x = group_left + i as f64 * bar_width,
                w = bar_width,
                h = (bottom - top).abs(),
                color = series_color(i),
                label = escape_html(&series.label),
                pct = value * 100.0,
            ));
        }
    }

    let legend: Vec<LegendEntry<'_>> = result
        .series
        .iter()
        .enumerate()
        .map(|(i, s)| LegendEntry { label: &s.label, color: series_color(i), dash: false })
        .collect();
    draw_year_labels(&mut svg, &years, &centers);
    draw_legend(&mut svg, &legend);
    svg.push_str(svg_footer());
    svg
}
