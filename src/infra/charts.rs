// ============================================================
// Layer 5 — Chart Renderer
// ============================================================
// Draws the five PNG charts from the typed metric columns.
//
// Artifacts, all with step on the x-axis:
//   loss_curve.png       Training Loss Curve      (blue)
//   lr_curve.png         Learning Rate Curve      (green)
//   grad_norm_curve.png  Gradient Norm Curve      (orange)
//   tokens_curve.png     Total Tokens Processed   (purple)
//   all_metrics.png      3x2 composite: loss, lr, grad norm,
//                        tokens, samples (brown), last panel
//                        left blank
//
// Every chart has gridlines, a title, and axis labels. The four
// single charts also carry a legend; composite panels do not.
//
// Font handling:
//   plotters is built without native font discovery, so text
//   rendering needs a typeface registered by hand. A DejaVu Sans
//   TTF is bundled into the binary and registered once under the
//   "sans-serif" family, which is also what the default mesh
//   styles resolve to.
//
// Rendering with zero rows is a precondition violation and
// returns an error instead of drawing empty axes.
//
// Reference: plotters crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use plotters::prelude::*;
use plotters::style::full_palette::{BROWN, ORANGE, PURPLE};
use plotters::style::FontStyle;
use std::{
    fs,
    ops::Range,
    path::PathBuf,
};

use crate::data::columns::MetricColumns;

/// Chart file names inside the output directory
pub const LOSS_CURVE_FILE: &str = "loss_curve.png";
pub const LR_CURVE_FILE: &str = "lr_curve.png";
pub const GRAD_NORM_CURVE_FILE: &str = "grad_norm_curve.png";
pub const TOKENS_CURVE_FILE: &str = "tokens_curve.png";
pub const ALL_METRICS_FILE: &str = "all_metrics.png";

/// Pixel sizes: 1000x500 per single chart, 1400x1000 composite
const SINGLE_SIZE: (u32, u32) = (1000, 500);
const COMPOSITE_SIZE: (u32, u32) = (1400, 1000);

/// Bundled typeface for titles, labels, and legends
static DEJAVU_SANS: &[u8] = include_bytes!("../../assets/DejaVuSans.ttf");

/// Renders the five chart artifacts into the output directory.
pub struct ChartRenderer {
    /// Directory the PNG files are written to
    out_dir: PathBuf,
}

impl ChartRenderer {
    /// Create a ChartRenderer for the given output directory.
    /// Creates the directory if needed and registers the bundled
    /// font (safe to repeat, re-registration just overwrites).
    pub fn new(out_dir: impl Into<PathBuf>) -> Result<Self> {
        let out_dir = out_dir.into();
        fs::create_dir_all(&out_dir).with_context(|| {
            format!("Cannot create output directory '{}'", out_dir.display())
        })?;

        plotters::style::register_font("sans-serif", FontStyle::Normal, DEJAVU_SANS)
            .map_err(|_| anyhow::anyhow!("Bundled font data is not a valid TTF"))?;

        Ok(Self { out_dir })
    }

    /// Draw all five charts. The column set must be non-empty.
    pub fn render_all(&self, cols: &MetricColumns) -> Result<()> {
        if cols.is_empty() {
            anyhow::bail!(
                "No metric rows to plot. Extract a log with matching lines first."
            );
        }

        let steps: Vec<f64> = cols.step.iter().map(|&v| v as f64).collect();
        let tokens: Vec<f64> = cols.consumed_tokens.iter().map(|&v| v as f64).collect();
        let samples: Vec<f64> = cols.consumed_samples.iter().map(|&v| v as f64).collect();

        self.render_single(
            LOSS_CURVE_FILE,
            "Training Loss Curve",
            "Loss",
            "Training Loss",
            BLUE,
            &steps,
            &cols.loss,
        )?;
        self.render_single(
            LR_CURVE_FILE,
            "Learning Rate Curve",
            "Learning Rate",
            "Learning Rate",
            GREEN,
            &steps,
            &cols.lr,
        )?;
        self.render_single(
            GRAD_NORM_CURVE_FILE,
            "Gradient Norm Curve",
            "Grad Norm",
            "Gradient Norm",
            ORANGE,
            &steps,
            &cols.grad_norm,
        )?;
        self.render_single(
            TOKENS_CURVE_FILE,
            "Total Tokens Processed",
            "Tokens",
            "Consumed Tokens",
            PURPLE,
            &steps,
            &tokens,
        )?;
        self.render_composite(cols, &steps, &tokens, &samples)?;

        tracing::info!(
            "Wrote 5 charts covering {} steps to '{}'",
            cols.len(),
            self.out_dir.display()
        );
        Ok(())
    }

    /// Draw one full-size single-series chart with a legend.
    fn render_single(
        &self,
        file_name: &str,
        title:     &str,
        y_desc:    &str,
        label:     &str,
        color:     RGBColor,
        xs:        &[f64],
        ys:        &[f64],
    ) -> Result<()> {
        let path = self.out_dir.join(file_name);
        let root = BitMapBackend::new(&path, SINGLE_SIZE).into_drawing_area();
        root.fill(&WHITE)
            .with_context(|| format!("Cannot draw chart '{}'", path.display()))?;

        draw_line_chart(&root, title, y_desc, Some(label), color, xs, ys)?;

        root.present()
            .with_context(|| format!("Cannot write chart '{}'", path.display()))?;
        tracing::debug!("Wrote '{}'", path.display());
        Ok(())
    }

    /// Draw the 3x2 composite. Panels fill row-major; the sixth
    /// panel stays blank because there are only five series.
    fn render_composite(
        &self,
        cols:    &MetricColumns,
        steps:   &[f64],
        tokens:  &[f64],
        samples: &[f64],
    ) -> Result<()> {
        let path = self.out_dir.join(ALL_METRICS_FILE);
        let root = BitMapBackend::new(&path, COMPOSITE_SIZE).into_drawing_area();
        root.fill(&WHITE)
            .with_context(|| format!("Cannot draw chart '{}'", path.display()))?;

        let panels = root.split_evenly((3, 2));
        draw_line_chart(&panels[0], "Training Loss", "Loss", None, BLUE, steps, &cols.loss)?;
        draw_line_chart(&panels[1], "Learning Rate", "Learning Rate", None, GREEN, steps, &cols.lr)?;
        draw_line_chart(&panels[2], "Gradient Norm", "Grad Norm", None, ORANGE, steps, &cols.grad_norm)?;
        draw_line_chart(&panels[3], "Consumed Tokens", "Tokens", None, PURPLE, steps, tokens)?;
        draw_line_chart(&panels[4], "Consumed Samples", "Samples", None, BROWN, steps, samples)?;

        root.present()
            .with_context(|| format!("Cannot write chart '{}'", path.display()))?;
        tracing::debug!("Wrote '{}'", path.display());
        Ok(())
    }
}

/// Draw a single line series with mesh, title, and axis labels
/// into the given drawing area. `legend` adds a series label box
/// when present (the single charts); composite panels pass None.
fn draw_line_chart(
    area:   &DrawingArea<BitMapBackend<'_>, plotters::coord::Shift>,
    title:  &str,
    y_desc: &str,
    legend: Option<&str>,
    color:  RGBColor,
    xs:     &[f64],
    ys:     &[f64],
) -> Result<()> {
    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(padded_range(xs), padded_range(ys))?;

    chart
        .configure_mesh()
        .x_desc("Step")
        .y_desc(y_desc)
        .draw()?;

    let series = chart.draw_series(LineSeries::new(
        xs.iter().zip(ys.iter()).map(|(&x, &y)| (x, y)),
        &color,
    ))?;

    if let Some(label) = legend {
        series
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }

    Ok(())
}

/// Pad a data range so the series doesn't sit on the plot border.
/// A degenerate range (all values equal) pads by a fixed 1.0 each
/// side so single-row datasets still produce a drawable axis.
fn padded_range(values: &[f64]) -> Range<f64> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if min > max {
        // Empty input; render_all guards against this upstream
        return 0.0..1.0;
    }
    let span = max - min;
    if span == 0.0 {
        (min - 1.0)..(max + 1.0)
    } else {
        let pad = span * 0.05;
        (min - pad)..(max + pad)
    }
}
