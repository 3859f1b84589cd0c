/// A complete figure: an ordered row of panels.
///
/// Figures are plain values. Nothing is drawn until a renderer such as
/// [`Figure::render_svg`](super::svg) is called, and nothing is written to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub title: Option<String>,
    pub panels: Vec<Panel>,
}

/// How a panel's plot area relates its two data ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Aspect {
    /// Stretch each axis to the available space.
    #[default]
    Auto,
    /// One data unit has the same length on both axes.
    Equal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub ticks: Vec<f64>,
}

impl Axis {
    pub fn new(label: &str, min: f64, max: f64) -> Self {
        Self {
            label: label.to_string(),
            min,
            max,
            ticks: Vec::new(),
        }
    }

    pub fn with_ticks(mut self, ticks: Vec<f64>) -> Self {
        self.ticks = ticks;
        self
    }

    #[inline]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// A line at a fixed x value.
    Vertical,
    /// A line at a fixed y value.
    Horizontal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceLine {
    pub orientation: Orientation,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub label: String,
    pub points: Vec<(f64, f64)>,
    pub color: String,
    pub marker_radius: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub title: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub aspect: Aspect,
    pub series: Vec<ScatterSeries>,
    pub reference_lines: Vec<ReferenceLine>,
}

impl Panel {
    pub fn new(title: &str, x_axis: Axis, y_axis: Axis) -> Self {
        Self {
            title: title.to_string(),
            x_axis,
            y_axis,
            aspect: Aspect::Auto,
            series: Vec::new(),
            reference_lines: Vec::new(),
        }
    }

    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

/// Ticks at multiples of `step` covering `[min, max]`.
pub fn ticks_every(min: f64, max: f64, step: f64) -> Vec<f64> {
    if step <= 0.0 || max < min {
        return Vec::new();
    }
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last).map(|i| i as f64 * step).collect()
}

/// A 1-2-5 step giving roughly `target` intervals over `span`.
pub fn nice_step(span: f64, target: usize) -> f64 {
    if span <= 0.0 || target == 0 {
        return 1.0;
    }
    let raw = span / target as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let factor = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    factor * magnitude
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_cover_the_range_at_multiples_of_the_step() {
        assert_eq!(
            ticks_every(-180.0, 180.0, 90.0),
            vec![-180.0, -90.0, 0.0, 90.0, 180.0]
        );
        assert_eq!(ticks_every(0.0, 9.0, 2.0), vec![0.0, 2.0, 4.0, 6.0, 8.0]);
        assert!(ticks_every(1.0, 0.0, 1.0).is_empty());
    }

    #[test]
    fn nice_step_uses_one_two_five_multiples() {
        assert_eq!(nice_step(10.0, 5), 2.0);
        assert_eq!(nice_step(99.0, 5), 20.0);
        assert_eq!(nice_step(30.0, 5), 10.0);
        assert_eq!(nice_step(0.0, 5), 1.0);
    }

    #[test]
    fn axis_contains_its_bounds() {
        let axis = Axis::new("phi (deg)", -180.0, 180.0);
        assert!(axis.contains(-180.0));
        assert!(axis.contains(180.0));
        assert!(!axis.contains(180.5));
        assert_eq!(axis.span(), 360.0);
    }
}
