use super::scan::ScanError;
use crate::core::models::trajectory::Trajectory;
use crate::engine::config::ExtractionConfig;
use crate::engine::error::ExtractionError;
use crate::engine::extractor::AngleExtractor;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::series::AngleSeries;
use crate::plot::figure::Figure;
use crate::plot::presenter::{AnglePresenter, PresentationError};
use thiserror::Error;
use tracing::{info, instrument};

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Angle extraction failed: {0}")]
    Extraction(#[from] ExtractionError),
    #[error("Figure presentation failed: {0}")]
    Presentation(#[from] PresentationError),
    #[error("Torsion scan failed: {0}")]
    Scan(#[from] ScanError),
}

#[derive(Debug, Clone)]
pub struct RamachandranResult {
    pub phi: AngleSeries,
    pub psi: AngleSeries,
    pub figure: Figure,
}

/// Extracts φ/ψ from `trajectory` and presents them as a Ramachandran figure.
#[instrument(skip_all, name = "ramachandran_workflow")]
pub fn run(
    trajectory: &Trajectory,
    config: &ExtractionConfig,
    presenter: &AnglePresenter,
    reporter: &ProgressReporter,
) -> Result<RamachandranResult, WorkflowError> {
    reporter.report(Progress::PhaseStart { name: "Extraction" });
    let extractor = AngleExtractor::new(config.clone());
    let (phi, psi) = extractor.extract_with_progress(trajectory, reporter)?;
    reporter.report(Progress::PhaseFinish);

    reporter.report(Progress::PhaseStart {
        name: "Presentation",
    });
    let figure = presenter.present(&phi, &psi)?;
    reporter.report(Progress::PhaseFinish);

    info!(
        "Ramachandran analysis complete: {} frames, {} panels",
        phi.len(),
        figure.panels.len()
    );
    Ok(RamachandranResult { phi, psi, figure })
}
