use super::figure::{
    Aspect, Axis, Figure, Orientation, Panel, ReferenceLine, ScatterSeries, nice_step, ticks_every,
};
use crate::engine::series::AngleSeries;
use thiserror::Error;
use tracing::debug;

const ANGLE_MIN_DEG: f64 = -180.0;
const ANGLE_MAX_DEG: f64 = 180.0;
const ANGLE_TICK_DEG: f64 = 90.0;
const FRAME_TICK_TARGET: usize = 5;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PresentationError {
    #[error("Phi and psi series differ in length ({phi} vs {psi})")]
    DimensionMismatch { phi: usize, psi: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PresenterStyle {
    pub title: Option<String>,
    pub marker_radius: f64,
    pub scatter_color: String,
    pub phi_color: String,
    pub psi_color: String,
}

impl Default for PresenterStyle {
    fn default() -> Self {
        Self {
            title: Some("Ramachandran analysis".to_string()),
            marker_radius: 2.5,
            scatter_color: "#1f77b4".to_string(),
            phi_color: "#d62728".to_string(),
            psi_color: "#2ca02c".to_string(),
        }
    }
}

/// Builds the composite Ramachandran figure from a pair of angle series.
///
/// The figure has three panels: ψ against φ on a square [−180°, 180°] grid with
/// reference lines through the origin, then φ and ψ against frame index.
#[derive(Debug, Clone, Default)]
pub struct AnglePresenter {
    style: PresenterStyle,
}

impl AnglePresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(style: PresenterStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &PresenterStyle {
        &self.style
    }

    pub fn present(
        &self,
        phi: &AngleSeries,
        psi: &AngleSeries,
    ) -> Result<Figure, PresentationError> {
        if phi.len() != psi.len() {
            return Err(PresentationError::DimensionMismatch {
                phi: phi.len(),
                psi: psi.len(),
            });
        }

        let phi_deg = phi.degrees();
        let psi_deg = psi.degrees();
        debug!("Presenting {} phi/psi pairs", phi_deg.len());

        let panels = vec![
            self.ramachandran_panel(&phi_deg, &psi_deg),
            self.frame_panel("phi vs frame", "phi (deg)", &phi_deg, &self.style.phi_color),
            self.frame_panel("psi vs frame", "psi (deg)", &psi_deg, &self.style.psi_color),
        ];

        Ok(Figure {
            title: self.style.title.clone(),
            panels,
        })
    }

    fn ramachandran_panel(&self, phi_deg: &[f64], psi_deg: &[f64]) -> Panel {
        let mut panel = Panel::new("Ramachandran plot", angle_axis("phi (deg)"), angle_axis("psi (deg)"));
        panel.aspect = Aspect::Equal;
        panel.reference_lines = vec![
            ReferenceLine {
                orientation: Orientation::Vertical,
                value: 0.0,
            },
            ReferenceLine {
                orientation: Orientation::Horizontal,
                value: 0.0,
            },
        ];
        panel.series.push(ScatterSeries {
            label: "psi vs phi".to_string(),
            points: phi_deg.iter().copied().zip(psi_deg.iter().copied()).collect(),
            color: self.style.scatter_color.clone(),
            marker_radius: self.style.marker_radius,
        });
        panel
    }

    fn frame_panel(&self, title: &str, label: &str, values_deg: &[f64], color: &str) -> Panel {
        let mut panel = Panel::new(title, frame_axis(values_deg.len()), angle_axis(label));
        panel.series.push(ScatterSeries {
            label: label.to_string(),
            points: values_deg
                .iter()
                .enumerate()
                .map(|(frame, &value)| (frame as f64, value))
                .collect(),
            color: color.to_string(),
            marker_radius: self.style.marker_radius,
        });
        panel
    }
}

/// Presents φ and ψ with the default style.
pub fn present_ramachandran(
    phi: &AngleSeries,
    psi: &AngleSeries,
) -> Result<Figure, PresentationError> {
    AnglePresenter::new().present(phi, psi)
}

fn angle_axis(label: &str) -> Axis {
    Axis::new(label, ANGLE_MIN_DEG, ANGLE_MAX_DEG).with_ticks(ticks_every(
        ANGLE_MIN_DEG,
        ANGLE_MAX_DEG,
        ANGLE_TICK_DEG,
    ))
}

fn frame_axis(frame_count: usize) -> Axis {
    let max = frame_count.saturating_sub(1).max(1) as f64;
    let step = nice_step(max, FRAME_TICK_TARGET).max(1.0);
    Axis::new("frame", 0.0, max).with_ticks(ticks_every(0.0, max, step))
}
