use super::config::ExtractionConfig;
use super::error::{ExtractionError, SelectionError};
use super::progress::{Progress, ProgressReporter};
use super::selection::{self, AtomSelector};
use super::series::AngleSeries;
use crate::core::models::frame::Frame;
use crate::core::models::ids::ResidueId;
use crate::core::models::topology::Topology;
use crate::core::models::trajectory::{Trajectory, check_frame_size};
use crate::core::naming::convention::DihedralKind;
use crate::core::utils::geometry::dihedral_angle;
use tracing::{debug, info};

/// Frame indices of the φ and ψ quadruplets of one residue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedDihedrals {
    pub residue: ResidueId,
    pub phi: [usize; 4],
    pub psi: [usize; 4],
}

/// The φ and ψ series of one residue, as returned by
/// [`AngleExtractor::extract_per_residue`].
#[derive(Debug, Clone, PartialEq)]
pub struct ResidueAngles {
    pub residue: ResidueId,
    pub label: String,
    pub phi: AngleSeries,
    pub psi: AngleSeries,
}

/// Computes backbone dihedral time series from a trajectory.
///
/// Selectors are resolved once against the topology; each frame then costs two
/// dihedral evaluations. Extraction is pure over its inputs.
#[derive(Debug, Clone, Default)]
pub struct AngleExtractor {
    config: ExtractionConfig,
}

impl AngleExtractor {
    pub fn new(config: ExtractionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Resolves the configured selectors on the target residue.
    pub fn resolve(&self, topology: &Topology) -> Result<ResolvedDihedrals, SelectionError> {
        let residue = selection::resolve_target(topology, &self.config.target)?;
        self.resolve_residue(topology, residue)
    }

    fn resolve_residue(
        &self,
        topology: &Topology,
        residue: ResidueId,
    ) -> Result<ResolvedDihedrals, SelectionError> {
        let resolve = |kind: DihedralKind| {
            selection::resolve_dihedral(
                topology,
                residue,
                kind,
                self.config.selector(kind),
                &self.config.convention,
            )
        };
        Ok(ResolvedDihedrals {
            residue,
            phi: resolve(DihedralKind::Phi)?,
            psi: resolve(DihedralKind::Psi)?,
        })
    }

    pub fn extract(
        &self,
        trajectory: &Trajectory,
    ) -> Result<(AngleSeries, AngleSeries), ExtractionError> {
        self.extract_with_progress(trajectory, &ProgressReporter::new())
    }

    pub fn extract_with_progress(
        &self,
        trajectory: &Trajectory,
        reporter: &ProgressReporter,
    ) -> Result<(AngleSeries, AngleSeries), ExtractionError> {
        if trajectory.is_empty() {
            return Err(ExtractionError::EmptyTrajectory);
        }
        let topology = trajectory.topology();
        let resolved = self.resolve(topology)?;
        info!(
            "Extracting phi/psi of {} over {} frames",
            selection::residue_label(topology, resolved.residue),
            trajectory.frame_count()
        );

        reporter.report(Progress::TaskStart {
            total_steps: trajectory.frame_count() as u64,
        });
        let (phi, psi) = measure(topology, trajectory.frames(), &resolved, reporter)?;
        reporter.report(Progress::TaskFinish);
        Ok((phi, psi))
    }

    /// Extracts from any sequence of frames sharing `topology`, one frame at a time.
    ///
    /// Frames whose size does not match the topology fail with
    /// [`ExtractionError::Trajectory`]; an empty sequence fails with
    /// [`ExtractionError::EmptyTrajectory`].
    pub fn extract_frames<'f, I>(
        &self,
        topology: &Topology,
        frames: I,
    ) -> Result<(AngleSeries, AngleSeries), ExtractionError>
    where
        I: IntoIterator<Item = &'f Frame>,
    {
        let mut frames = frames.into_iter().peekable();
        if frames.peek().is_none() {
            return Err(ExtractionError::EmptyTrajectory);
        }
        let resolved = self.resolve(topology)?;
        measure(topology, frames, &resolved, &ProgressReporter::new())
    }

    /// Measures every candidate residue that the selectors resolve on.
    ///
    /// Residues where selection fails (termini without caps, for instance) are
    /// skipped. Fails with [`SelectionError::NoMeasurableResidue`] when none remain.
    pub fn extract_per_residue(
        &self,
        trajectory: &Trajectory,
    ) -> Result<Vec<ResidueAngles>, ExtractionError> {
        if trajectory.is_empty() {
            return Err(ExtractionError::EmptyTrajectory);
        }
        let topology = trajectory.topology();

        let mut resolved = Vec::new();
        let mut last_error = None;
        for residue in selection::candidate_residues(topology) {
            match self.resolve_residue(topology, residue) {
                Ok(dihedrals) => resolved.push(dihedrals),
                Err(e) => {
                    debug!(
                        "Skipping {}: {}",
                        selection::residue_label(topology, residue),
                        e
                    );
                    last_error = Some(e);
                }
            }
        }

        if resolved.is_empty() {
            let reason = last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "topology contains no amino-acid residue".to_string());
            return Err(SelectionError::NoMeasurableResidue(reason).into());
        }

        let reporter = ProgressReporter::new();
        resolved
            .iter()
            .map(|dihedrals| {
                let (phi, psi) = measure(topology, trajectory.frames(), dihedrals, &reporter)?;
                Ok(ResidueAngles {
                    residue: dihedrals.residue,
                    label: selection::residue_label(topology, dihedrals.residue),
                    phi,
                    psi,
                })
            })
            .collect()
    }
}

/// Extracts φ and ψ with the default naming convention and automatic residue choice.
pub fn extract_angles(
    trajectory: &Trajectory,
    phi_selector: &AtomSelector,
    psi_selector: &AtomSelector,
) -> Result<(AngleSeries, AngleSeries), ExtractionError> {
    let config = ExtractionConfig {
        phi: phi_selector.clone(),
        psi: psi_selector.clone(),
        ..Default::default()
    };
    AngleExtractor::new(config).extract(trajectory)
}

fn measure<'f, I>(
    topology: &Topology,
    frames: I,
    resolved: &ResolvedDihedrals,
    reporter: &ProgressReporter,
) -> Result<(AngleSeries, AngleSeries), ExtractionError>
where
    I: IntoIterator<Item = &'f Frame>,
{
    let mut phi = Vec::new();
    let mut psi = Vec::new();
    for (index, frame) in frames.into_iter().enumerate() {
        check_frame_size(topology, index, frame)?;
        phi.push(frame_dihedral(frame, &resolved.phi));
        psi.push(frame_dihedral(frame, &resolved.psi));
        reporter.report(Progress::TaskIncrement);
    }
    Ok((AngleSeries::from_radians(phi), AngleSeries::from_radians(psi)))
}

#[inline]
fn frame_dihedral(frame: &Frame, indices: &[usize; 4]) -> f64 {
    let p = frame.positions();
    dihedral_angle(
        &p[indices[0]],
        &p[indices[1]],
        &p[indices[2]],
        &p[indices[3]],
    )
}
