use crate::core::model::StatsTable;
use anyhow::{Result, anyhow};
use plotters::coord::Shift;
use plotters::element::Polygon;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::path::Path;

const X_MAX: f64 = 0.0020;
const Y_MAX: f64 = 750.0;
const CAPTION: &str = "DeepVStripes query execution time (N=311168)";
const X_LABEL: &str = "Width of stripes (\u{03b4} / \u{00b0} lon)";
const Y_LABEL: &str = "Query time (t / ns)";
const NOTE_LINE1: &str = "100,000 queries, averaged 10 runs,";
const NOTE_LINE2: &str = "8-points exponential moving average";

const BAND_FILL: RGBAColor = RGBAColor(253, 184, 19, 0.75);
const QUARTILE_LINE: RGBColor = RGBColor(196, 145, 22);
const MIN_LINE: RGBColor = RGBColor(102, 102, 102);

// 10 x 6 in at 600 DPI.
const PNG_DIMS: (u32, u32) = (6000, 3600);
const SVG_DIMS: (u32, u32) = (1000, 600);

pub fn write_png(path: &Path, derived: &StatsTable) -> Result<()> {
    let root = BitMapBackend::new(path, PNG_DIMS).into_drawing_area();
    draw(&root, derived, 6)?;
    root.present()
        .map_err(|e| anyhow!("present {} failed: {e}", path.display()))
}

pub fn write_svg(path: &Path, derived: &StatsTable) -> Result<()> {
    let root = SVGBackend::new(path, SVG_DIMS).into_drawing_area();
    draw(&root, derived, 1)?;
    root.present()
        .map_err(|e| anyhow!("present {} failed: {e}", path.display()))
}

// Single figure, single axes, drawn identically to both backends. `scale`
// keeps strokes and fonts proportional across the two output sizes.
pub fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    derived: &StatsTable,
    scale: u32,
) -> Result<()> {
    root.fill(&WHITE)
        .map_err(|e| anyhow!("chart fill failed: {e}"))?;

    let s = scale as i32;
    let mut chart = ChartBuilder::on(root)
        .caption(CAPTION, ("sans-serif", 22 * s))
        .margin(12 * s)
        .x_label_area_size(48 * s)
        .y_label_area_size(64 * s)
        .build_cartesian_2d(0.0..X_MAX, 0.0..Y_MAX)
        .map_err(|e| anyhow!("chart layout failed: {e}"))?;

    chart
        .configure_mesh()
        .x_desc(X_LABEL)
        .y_desc(Y_LABEL)
        .label_style(("sans-serif", 13 * s))
        .axis_desc_style(("sans-serif", 16 * s))
        .x_label_formatter(&|x| format!("{x:.4}"))
        .y_label_formatter(&|y| format!("{y:.0}"))
        .draw()
        .map_err(|e| anyhow!("mesh draw failed: {e}"))?;

    let pts = |ys: &[f64]| -> Vec<(f64, f64)> {
        derived
            .index
            .iter()
            .copied()
            .zip(ys.iter().copied())
            .collect()
    };

    // Interquartile band: q1 boundary forward, q3 boundary reversed. Drawn
    // first; plotters paints in call order and the band must sit below the
    // median and mean lines.
    let mut band = pts(&derived.q1);
    band.extend(
        derived
            .index
            .iter()
            .copied()
            .zip(derived.q3.iter().copied())
            .rev(),
    );
    chart
        .draw_series(std::iter::once(Polygon::new(band, BAND_FILL.filled())))
        .map_err(|e| anyhow!("quartile band failed: {e}"))?;

    chart
        .draw_series(LineSeries::new(
            pts(&derived.median),
            BLACK.stroke_width(scale),
        ))
        .map_err(|e| anyhow!("median series failed: {e}"))?;

    chart
        .draw_series(DashedLineSeries::new(
            pts(&derived.mean),
            6 * s,
            5 * s,
            BLACK.stroke_width(scale.div_ceil(2)),
        ))
        .map_err(|e| anyhow!("mean series failed: {e}"))?;

    chart
        .draw_series(LineSeries::new(
            pts(&derived.min),
            MIN_LINE.stroke_width(scale),
        ))
        .map_err(|e| anyhow!("min series failed: {e}"))?;

    for quartile in [&derived.q1, &derived.q3] {
        chart
            .draw_series(LineSeries::new(
                pts(quartile),
                QUARTILE_LINE.stroke_width(scale),
            ))
            .map_err(|e| anyhow!("quartile series failed: {e}"))?;
    }

    // Sampling methodology note in the bottom-left figure margin.
    let (_, h) = root.dim_in_pixel();
    let note_style = TextStyle::from(("sans-serif", 11 * s).into_font()).color(&BLACK);
    root.draw(&Text::new(
        NOTE_LINE1,
        (8 * s, h as i32 - 30 * s),
        note_style.clone(),
    ))
    .map_err(|e| anyhow!("note draw failed: {e}"))?;
    root.draw(&Text::new(
        NOTE_LINE2,
        (8 * s, h as i32 - 16 * s),
        note_style,
    ))
    .map_err(|e| anyhow!("note draw failed: {e}"))?;

    Ok(())
}
