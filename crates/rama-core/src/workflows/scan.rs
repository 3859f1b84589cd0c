use super::ramachandran::{self, RamachandranResult, WorkflowError};
use crate::core::models::builder::{BuildError, TopologyBuilder};
use crate::core::models::chain::ChainType;
use crate::core::models::frame::Frame;
use crate::core::models::residue::ResidueType;
use crate::core::models::topology::Topology;
use crate::core::models::trajectory::{Trajectory, TrajectoryError};
use crate::core::utils::geometry::{dihedral_angle, place_from_internal, rotate_about_bond, wrap_angle};
use crate::core::utils::identifiers;
use crate::engine::config::ExtractionConfig;
use crate::engine::progress::ProgressReporter;
use crate::plot::presenter::AnglePresenter;
use nalgebra::{Point3, Vector3};
use std::f64::consts::PI;
use thiserror::Error;
use tracing::{debug, info, instrument};

// Ideal peptide geometry (Angstrom, degrees).
const CH3_C: f64 = 1.52;
const C_O: f64 = 1.23;
const C_N: f64 = 1.33;
const N_CA: f64 = 1.46;
const CA_C: f64 = 1.52;
const CA_CB: f64 = 1.53;
const N_CH3: f64 = 1.46;

const ANGLE_CA_C_N: f64 = 116.2;
const ANGLE_CA_C_O: f64 = 120.5;
const ANGLE_C_N_CA: f64 = 121.7;
const ANGLE_N_CA_C: f64 = 111.2;
const ANGLE_C_CA_CB: f64 = 110.9;
const TORSION_N_C_CA_CB: f64 = 122.69;
const OMEGA: f64 = 180.0;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("'{0}' is not a standard amino-acid residue name")]
    UnknownResidue(String),
    #[error("{axis} range must contain at least one step")]
    EmptyRange { axis: &'static str },
    #[error("Failed to build dipeptide topology: {0}")]
    Build(#[from] BuildError),
    #[error(transparent)]
    Trajectory(#[from] TrajectoryError),
}

/// Evenly spaced angles from `start_deg` to `end_deg`, both included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleRange {
    pub start_deg: f64,
    pub end_deg: f64,
    pub steps: usize,
}

impl AngleRange {
    pub fn new(start_deg: f64, end_deg: f64, steps: usize) -> Self {
        Self {
            start_deg,
            end_deg,
            steps,
        }
    }

    pub fn values(&self) -> Vec<f64> {
        match self.steps {
            0 => Vec::new(),
            1 => vec![self.start_deg],
            n => {
                let step = (self.end_deg - self.start_deg) / (n - 1) as f64;
                (0..n).map(|i| self.start_deg + i as f64 * step).collect()
            }
        }
    }
}

impl Default for AngleRange {
    /// A 30° grid over one full turn.
    fn default() -> Self {
        Self::new(-180.0, 150.0, 12)
    }
}

/// The (φ, ψ) grid of a torsion scan, φ varying slowest.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScanGrid {
    pub phi: AngleRange,
    pub psi: AngleRange,
}

impl ScanGrid {
    pub fn pairs(&self) -> Result<Vec<(f64, f64)>, ScanError> {
        let phis = self.phi.values();
        let psis = self.psi.values();
        if phis.is_empty() {
            return Err(ScanError::EmptyRange { axis: "phi" });
        }
        if psis.is_empty() {
            return Err(ScanError::EmptyRange { axis: "psi" });
        }
        Ok(phis
            .iter()
            .flat_map(|&phi| psis.iter().map(move |&psi| (phi, psi)))
            .collect())
    }
}

/// Atom indices moved by each backbone rotation.
#[derive(Debug, Clone)]
struct RotationGroups {
    n: usize,
    ca: usize,
    c: usize,
    phi_moving: Vec<usize>,
    psi_moving: Vec<usize>,
}

/// A capped dipeptide (ACE-X-NME) in ideal geometry, posed at arbitrary
/// backbone torsions by rigid rotation about the N-CA and CA-C bonds.
#[derive(Debug, Clone)]
pub struct DipeptideScan {
    topology: Topology,
    reference: Vec<Point3<f64>>,
    groups: RotationGroups,
    reference_phi: f64,
    reference_psi: f64,
}

impl DipeptideScan {
    pub fn new(residue_name: &str) -> Result<Self, ScanError> {
        let residue_type = identifiers::amino_acid_from_name(residue_name)
            .ok_or_else(|| ScanError::UnknownResidue(residue_name.to_string()))?;
        let residue_name = residue_type.to_three_letter();
        let has_beta_carbon = residue_type != ResidueType::Glycine;

        // Extended conformation (phi = psi = 180) built from internal coordinates.
        let ace_ch3 = Point3::new(0.0, 0.0, 0.0);
        let ace_c = Point3::new(CH3_C, 0.0, 0.0);
        let theta = ANGLE_CA_C_N.to_radians();
        let n = ace_c + Vector3::new(-theta.cos(), theta.sin(), 0.0) * C_N;
        let ace_o = place_from_internal(&n, &ace_ch3, &ace_c, C_O, ANGLE_CA_C_O.to_radians(), PI);
        let ca = place_from_internal(&ace_ch3, &ace_c, &n, N_CA, ANGLE_C_N_CA.to_radians(), OMEGA.to_radians());
        let c = place_from_internal(&ace_c, &n, &ca, CA_C, ANGLE_N_CA_C.to_radians(), PI);
        let cb = place_from_internal(&n, &c, &ca, CA_CB, ANGLE_C_CA_CB.to_radians(), TORSION_N_C_CA_CB.to_radians());
        let o = place_from_internal(&n, &ca, &c, C_O, ANGLE_CA_C_O.to_radians(), 0.0);
        let nme_n = place_from_internal(&n, &ca, &c, C_N, ANGLE_CA_C_N.to_radians(), PI);
        let nme_ch3 = place_from_internal(&ca, &c, &nme_n, N_CH3, ANGLE_C_N_CA.to_radians(), OMEGA.to_radians());

        let mut builder = TopologyBuilder::new();
        let mut reference = Vec::new();
        let mut serial = 0;
        let mut add = |builder: &mut TopologyBuilder, name: &str, element: &str, position: Point3<f64>| {
            serial += 1;
            reference.push(position);
            builder.add_atom(serial, name, Some(element)).map(|_| serial)
        };

        builder.start_chain('A', ChainType::Protein);
        builder.start_residue(1, "ACE")?;
        let s_ace_ch3 = add(&mut builder, "CH3", "C", ace_ch3)?;
        let s_ace_c = add(&mut builder, "C", "C", ace_c)?;
        let s_ace_o = add(&mut builder, "O", "O", ace_o)?;

        builder.start_residue(2, residue_name)?;
        let s_n = add(&mut builder, "N", "N", n)?;
        let s_ca = add(&mut builder, "CA", "C", ca)?;
        let s_cb = if has_beta_carbon {
            Some(add(&mut builder, "CB", "C", cb)?)
        } else {
            None
        };
        let s_c = add(&mut builder, "C", "C", c)?;
        let s_o = add(&mut builder, "O", "O", o)?;

        builder.start_residue(3, "NME")?;
        let s_nme_n = add(&mut builder, "N", "N", nme_n)?;
        let s_nme_ch3 = add(&mut builder, "CH3", "C", nme_ch3)?;

        let mut bonds = vec![
            (s_ace_ch3, s_ace_c),
            (s_ace_c, s_ace_o),
            (s_ace_c, s_n),
            (s_n, s_ca),
            (s_ca, s_c),
            (s_c, s_o),
            (s_c, s_nme_n),
            (s_nme_n, s_nme_ch3),
        ];
        if let Some(s_cb) = s_cb {
            bonds.push((s_ca, s_cb));
        }
        for (a, b) in bonds {
            builder.add_bond(a, b)?;
        }
        let topology = builder.build();

        // Serials are 1-based insertion order, so index = serial - 1.
        let index = |s: usize| s - 1;
        let mut phi_moving: Vec<usize> = [s_c, s_o, s_nme_n, s_nme_ch3].map(index).to_vec();
        if let Some(s_cb) = s_cb {
            phi_moving.push(index(s_cb));
        }
        let groups = RotationGroups {
            n: index(s_n),
            ca: index(s_ca),
            c: index(s_c),
            phi_moving,
            psi_moving: [s_o, s_nme_n, s_nme_ch3].map(index).to_vec(),
        };

        let reference_phi = dihedral_angle(&ace_c, &n, &ca, &c);
        let reference_psi = dihedral_angle(&n, &ca, &c, &nme_n);
        debug!(
            "Built ACE-{}-NME with {} atoms",
            residue_name,
            topology.atom_count()
        );

        Ok(Self {
            topology,
            reference,
            groups,
            reference_phi,
            reference_psi,
        })
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Coordinates of the dipeptide at the given backbone torsions.
    pub fn frame(&self, phi_deg: f64, psi_deg: f64) -> Frame {
        let mut positions = self.reference.clone();
        let g = &self.groups;

        let delta_phi = wrap_angle(phi_deg.to_radians() - self.reference_phi);
        let (n, ca) = (positions[g.n], positions[g.ca]);
        for &i in &g.phi_moving {
            positions[i] = rotate_about_bond(&positions[i], &n, &ca, delta_phi);
        }

        let delta_psi = wrap_angle(psi_deg.to_radians() - self.reference_psi);
        let (ca, c) = (positions[g.ca], positions[g.c]);
        for &i in &g.psi_moving {
            positions[i] = rotate_about_bond(&positions[i], &ca, &c, delta_psi);
        }

        Frame::new(positions)
    }

    pub fn trajectory(&self, pairs: &[(f64, f64)]) -> Result<Trajectory, ScanError> {
        let frames = pairs
            .iter()
            .map(|&(phi, psi)| self.frame(phi, psi))
            .collect();
        Ok(Trajectory::new(self.topology.clone(), frames)?)
    }
}

/// Scans a capped dipeptide over `grid` and runs the Ramachandran workflow on
/// the generated trajectory.
#[instrument(skip_all, name = "scan_workflow", fields(residue = residue_name))]
pub fn run(
    residue_name: &str,
    grid: &ScanGrid,
    config: &ExtractionConfig,
    presenter: &AnglePresenter,
    reporter: &ProgressReporter,
) -> Result<RamachandranResult, WorkflowError> {
    let scan = DipeptideScan::new(residue_name)?;
    let pairs = grid.pairs()?;
    info!("Generating {} scan frames", pairs.len());
    let trajectory = scan.trajectory(&pairs)?;
    ramachandran::run(&trajectory, config, presenter, reporter)
}
