//! SVG rendering of a [`Figure`] through `plotters`.
//!
//! The SVG backend writes into an in-memory string and the crate is built
//! without a font backend, so rendering touches neither the disk nor system
//! fonts.

use super::figure::{Aspect, Figure, Orientation, Panel};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters_svg::SVGBackend;
use thiserror::Error;

const FONT_FAMILY: &str = "sans-serif";
const X_LABEL_AREA: u32 = 40;
const Y_LABEL_AREA: u32 = 55;
const GRID_COLOR: RGBColor = RGBColor(0xe3, 0xe3, 0xe3);
const REFERENCE_COLOR: RGBColor = RGBColor(0x7f, 0x7f, 0x7f);

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to draw figure: {0}")]
    Drawing(String),
    #[error("Invalid color '{0}', expected #rrggbb")]
    InvalidColor(String),
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for RenderError {
    fn from(e: DrawingAreaErrorKind<E>) -> Self {
        RenderError::Drawing(e.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct SvgOptions {
    pub width: u32,
    pub height: u32,
    /// Margin around each chart, in pixels.
    pub padding_px: u32,
    pub panel_gap_px: u32,
    pub background: String,
    pub font_size: f64,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            width: 1500,
            height: 520,
            padding_px: 15,
            panel_gap_px: 30,
            background: "#ffffff".to_string(),
            font_size: 14.0,
        }
    }
}

type Area<'a> = DrawingArea<SVGBackend<'a>, Shift>;

/// Forwards to `WithKeyPoints`, whose format option otherwise keeps it from
/// satisfying the `ValueFormatter` bound of `configure_mesh`. Tick labels are
/// always produced by the explicit label formatters.
struct KeyPointAxis(
    plotters::coord::combinators::WithKeyPoints<plotters::coord::types::RangedCoordf64>,
);

impl Ranged for KeyPointAxis {
    type ValueType = f64;
    type FormatOption = plotters::coord::ranged1d::DefaultFormatting;

    fn range(&self) -> std::ops::Range<f64> {
        self.0.range()
    }

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        self.0.map(value, limit)
    }

    fn key_points<Hint: plotters::coord::ranged1d::KeyPointHint>(&self, hint: Hint) -> Vec<f64> {
        self.0.key_points(hint)
    }

    fn axis_pixel_range(&self, limit: (i32, i32)) -> std::ops::Range<i32> {
        self.0.axis_pixel_range(limit)
    }
}

impl Figure {
    /// Renders the figure as a standalone SVG document.
    ///
    /// Panels are laid out left to right in equal-width cells. Output depends
    /// only on the figure and options.
    pub fn render_svg(&self, options: &SvgOptions) -> Result<String, RenderError> {
        let background = parse_color(&options.background)?;
        let mut buffer = String::new();
        {
            let root =
                SVGBackend::with_string(&mut buffer, (options.width, options.height)).into_drawing_area();
            root.fill(&background)?;

            let titled;
            let body = match &self.title {
                Some(title) => {
                    titled = root.titled(title, (FONT_FAMILY, options.font_size * 1.5))?;
                    &titled
                }
                None => &root,
            };

            if !self.panels.is_empty() {
                let cells = body.split_evenly((1, self.panels.len()));
                let half_gap = options.panel_gap_px / 2;
                for (panel, cell) in self.panels.iter().zip(&cells) {
                    draw_panel(panel, &cell.margin(0, 0, half_gap, half_gap), options)?;
                }
            }
            root.present()?;
        }
        Ok(buffer)
    }
}

fn draw_panel(panel: &Panel, cell: &Area<'_>, options: &SvgOptions) -> Result<(), RenderError> {
    let titled = cell.titled(&panel.title, (FONT_FAMILY, options.font_size * 1.15))?;
    let (trim_x, trim_y) = aspect_trim(panel, titled.dim_in_pixel(), options);
    let area = titled.margin(
        trim_y / 2,
        trim_y - trim_y / 2,
        trim_x / 2,
        trim_x - trim_x / 2,
    );

    let mut chart = ChartBuilder::on(&area)
        .margin(options.padding_px)
        .x_label_area_size(X_LABEL_AREA)
        .y_label_area_size(Y_LABEL_AREA)
        .build_cartesian_2d(
            KeyPointAxis((panel.x_axis.min..panel.x_axis.max).with_key_points(panel.x_axis.ticks.clone())),
            KeyPointAxis((panel.y_axis.min..panel.y_axis.max).with_key_points(panel.y_axis.ticks.clone())),
        )?;

    chart
        .configure_mesh()
        .bold_line_style(GRID_COLOR.stroke_width(1))
        .x_desc(panel.x_axis.label.as_str())
        .y_desc(panel.y_axis.label.as_str())
        .x_label_formatter(&format_tick)
        .y_label_formatter(&format_tick)
        .label_style((FONT_FAMILY, options.font_size))
        .axis_desc_style((FONT_FAMILY, options.font_size))
        .draw()?;

    for line in &panel.reference_lines {
        let ends = match line.orientation {
            Orientation::Vertical => [
                (line.value, panel.y_axis.min),
                (line.value, panel.y_axis.max),
            ],
            Orientation::Horizontal => [
                (panel.x_axis.min, line.value),
                (panel.x_axis.max, line.value),
            ],
        };
        chart.draw_series(LineSeries::new(ends, REFERENCE_COLOR.stroke_width(1)))?;
    }

    for series in &panel.series {
        if series.marker_radius <= 0.0 {
            continue;
        }
        let color = parse_color(&series.color)?;
        let radius = series.marker_radius.round().max(1.0) as u32;
        chart.draw_series(
            series
                .points
                .iter()
                .filter(|(x, y)| panel.x_axis.contains(*x) && panel.y_axis.contains(*y))
                .map(|&(x, y)| Circle::new((x, y), radius, color.filled())),
        )?;
    }

    Ok(())
}

/// Pixels to remove horizontally and vertically from a panel area so that its
/// plotting region keeps the panel's aspect.
fn aspect_trim(panel: &Panel, (width, height): (u32, u32), options: &SvgOptions) -> (u32, u32) {
    let (x_span, y_span) = (panel.x_axis.span(), panel.y_axis.span());
    if panel.aspect != Aspect::Equal || x_span <= 0.0 || y_span <= 0.0 {
        return (0, 0);
    }
    let plot_width = width.saturating_sub(2 * options.padding_px + Y_LABEL_AREA) as f64;
    let plot_height = height.saturating_sub(2 * options.padding_px + X_LABEL_AREA) as f64;
    let scale = (plot_width / x_span).min(plot_height / y_span);
    (
        (plot_width - x_span * scale).round() as u32,
        (plot_height - y_span * scale).round() as u32,
    )
}

fn format_tick(value: &f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", *value as i64)
    } else {
        format!("{:.2}", value)
    }
}

fn parse_color(value: &str) -> Result<RGBColor, RenderError> {
    let invalid = || RenderError::InvalidColor(value.to_string());
    let hex = value
        .strip_prefix('#')
        .filter(|hex| hex.len() == 6 && hex.is_ascii())
        .ok_or_else(invalid)?;
    let channel = |start: usize| u8::from_str_radix(&hex[start..start + 2], 16).map_err(|_| invalid());
    Ok(RGBColor(channel(0)?, channel(2)?, channel(4)?))
}
