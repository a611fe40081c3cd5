//! # Comparison figure
//!
//! One panel per [`VelocityTransform`], side by side, each with a
//! logarithmic x-axis. Every panel shows
//! - the viscous sublayer and log law (black),
//! - the profile computed from the DNS data (red),
//! - the profile stored in the DNS file, every third sample (blue circles).
use crate::curve::Curve;
use crate::error::{Error, Result};
use crate::io::read_dns::DnsData;
use crate::reference::ReferenceCurves;
use crate::transform::VelocityTransform;
use plotters::coord::Shift;
use plotters::prelude::IntoLogRange;
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;

/// Figure size in pixels
pub const FIGURE_SIZE: (u32, u32) = (1600, 500);

/// Only every n-th sample of the DNS file is drawn
pub const DNS_SAMPLE_STRIDE: usize = 3;

const FONT_FAMILY: &str = "sans-serif";
const FONT_SIZE_LABEL: i32 = 16;
const FONT_SIZE_AXIS_DESC: i32 = 22;
const FONT_SIZE_LEGEND: i32 = 16;
const LINE_WIDTH_COMPUTED: u32 = 3;
const MARKER_SIZE: i32 = 4;
const LEGEND_LINE_LENGTH: i32 = 20;

/// Data of a single panel
#[derive(Debug, Clone)]
pub struct Panel {
    /// Label of the x-axis
    pub x_label: &'static str,
    /// Label of the y-axis
    pub y_label: &'static str,
    /// Profile computed from the DNS data
    pub computed: Curve,
    /// Profile stored in the DNS file
    pub dns: Curve,
}

impl Panel {
    /// Apply `transform` to a case
    ///
    /// # Errors
    /// Transform fails
    pub fn new<T: VelocityTransform>(transform: &T, data: &DnsData) -> Result<Self> {
        let (x_label, y_label) = transform.axis_labels();
        let computed = transform.apply(&data.table, &data.params)?;
        log::debug!(
            "{}: {} points, {} at the outermost sample",
            transform.name(),
            computed.len(),
            computed.y[computed.len() - 1]
        );
        Ok(Self {
            x_label,
            y_label,
            computed,
            dns: transform.dns_reference(&data.table),
        })
    }

    /// Largest difference between the computed and the stored profile
    ///
    /// # Errors
    /// Profiles differ in length
    pub fn deviation(&self) -> Result<f64> {
        self.computed.max_deviation(&self.dns)
    }
}

fn plot_error<E: std::fmt::Display>(e: E) -> Error {
    Error::Plot(e.to_string())
}

/// Axis ranges enclosing all points: x from the smallest to the
/// largest abscissa, y from `min(0, y_min)` to 5% above `y_max`.
/// Returns `None` without any points.
pub fn axis_ranges(series: &[&[(f64, f64)]]) -> Option<(Range<f64>, Range<f64>)> {
    let mut points = series.iter().flat_map(|s| s.iter());
    let &(x0, y0) = points.next()?;
    let (mut x_min, mut x_max, mut y_min, mut y_max) = (x0, x0, y0, y0);
    for &(x, y) in points {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    if x_max <= x_min {
        x_max = x_min * 10.;
    }
    let y_min = y_min.min(0.);
    let y_max = if y_max > y_min {
        y_max + 0.05 * (y_max - y_min)
    } else {
        y_min + 1.
    };
    Some((x_min..x_max, y_min..y_max))
}

/// Draw all panels into a png file
///
/// # Errors
/// No panels, nothing to draw, or backend failure
pub fn render_figure<P: AsRef<Path>>(
    path: P,
    panels: &[Panel],
    reference: &ReferenceCurves,
) -> Result<()> {
    if panels.is_empty() {
        return Err(Error::Plot("no panels to draw".to_owned()));
    }
    let path = path.as_ref();
    let root = BitMapBackend::new(path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_error)?;
    let areas = root.split_evenly((1, panels.len()));
    for (i, (area, panel)) in areas.iter().zip(panels.iter()).enumerate() {
        draw_panel(area, panel, reference, i == 0)?;
    }
    root.present().map_err(plot_error)?;
    log::info!("Figure written to {:?}", path);
    Ok(())
}

fn draw_panel(
    area: &DrawingArea<BitMapBackend, Shift>,
    panel: &Panel,
    reference: &ReferenceCurves,
    show_legend: bool,
) -> Result<()> {
    let sublayer = reference.sublayer.log_x_points();
    let log_law = reference.log_law.log_x_points();
    let computed = panel.computed.log_x_points();
    let dns = panel.dns.every(DNS_SAMPLE_STRIDE).log_x_points();
    let (x_range, y_range) = axis_ranges(&[&sublayer[..], &log_law[..], &computed[..], &dns[..]])
        .ok_or_else(|| Error::Plot(format!("nothing to draw for {}", panel.y_label)))?;

    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range.log_scale(), y_range)
        .map_err(plot_error)?;

    chart
        .configure_mesh()
        .x_desc(panel.x_label)
        .y_desc(panel.y_label)
        .label_style((FONT_FAMILY, FONT_SIZE_LABEL))
        .axis_desc_style((FONT_FAMILY, FONT_SIZE_AXIS_DESC))
        .draw()
        .map_err(plot_error)?;

    chart
        .draw_series(LineSeries::new(sublayer, BLACK.stroke_width(1)))
        .map_err(plot_error)?
        .label("y+")
        .legend(|(x, y)| {
            PathElement::new(
                vec![(x, y), (x + LEGEND_LINE_LENGTH, y)],
                BLACK.stroke_width(1),
            )
        });
    chart
        .draw_series(LineSeries::new(log_law, BLACK.stroke_width(1)))
        .map_err(plot_error)?
        .label("log")
        .legend(|(x, y)| {
            PathElement::new(
                vec![(x, y), (x + LEGEND_LINE_LENGTH, y)],
                BLACK.stroke_width(1),
            )
        });
    chart
        .draw_series(LineSeries::new(computed, RED.stroke_width(LINE_WIDTH_COMPUTED)))
        .map_err(plot_error)?
        .label("calc from DNS")
        .legend(|(x, y)| {
            PathElement::new(
                vec![(x, y), (x + LEGEND_LINE_LENGTH, y)],
                RED.stroke_width(LINE_WIDTH_COMPUTED),
            )
        });
    chart
        .draw_series(
            dns.iter()
                .map(|&point| Circle::new(point, MARKER_SIZE, BLUE.stroke_width(2))),
        )
        .map_err(plot_error)?
        .label("from DNS file")
        .legend(|(x, y)| {
            Circle::new((x + LEGEND_LINE_LENGTH / 2, y), MARKER_SIZE, BLUE.filled())
        });

    if show_legend {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .label_font((FONT_FAMILY, FONT_SIZE_LEGEND))
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(plot_error)?;
    }
    Ok(())
}
