use crate::core::models::trajectory::TrajectoryError;
use crate::core::naming::convention::DihedralKind;
use crate::core::naming::reference::{AtomRef, ParseAtomRefError};
use thiserror::Error;

/// Failure to locate the atoms defining a dihedral.
///
/// Never retried: the caller must supply a corrected (usually explicit) selector
/// or name the residue to measure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("An explicit selector must name exactly 4 atoms, got {found}")]
    WrongAtomCount { found: usize },

    #[error("Invalid atom reference: {0}")]
    InvalidAtomRef(#[from] ParseAtomRefError),

    #[error("Residue {residue} not found in topology")]
    ResidueNotFound { residue: String },

    #[error("Topology contains no residue to measure")]
    NoCandidateResidue,

    #[error(
        "Topology contains {count} candidate residues ({candidates}); name the residue to measure"
    )]
    AmbiguousResidue { count: usize, candidates: String },

    #[error(
        "Default {kind} detection failed for residue {residue}: {detail}. The topology does not follow the assumed backbone naming; supply an explicit {kind} selector"
    )]
    ConventionMismatch {
        kind: DihedralKind,
        residue: String,
        detail: String,
    },

    #[error("{kind} selector: residue {residue} has no neighbouring residue for atom '{atom}'")]
    MissingNeighbor {
        kind: DihedralKind,
        residue: String,
        atom: AtomRef,
    },

    #[error("{kind} selector: atom '{atom}' not found in residue {residue}")]
    MissingAtom {
        kind: DihedralKind,
        residue: String,
        atom: AtomRef,
    },

    #[error("{kind} selector: atom '{atom}' is selected more than once")]
    DuplicateAtom { kind: DihedralKind, atom: AtomRef },

    #[error("{kind} selector: atoms '{first}' and '{second}' are not bonded")]
    NotBonded {
        kind: DihedralKind,
        first: AtomRef,
        second: AtomRef,
    },

    #[error("No residue could be measured: {0}")]
    NoMeasurableResidue(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("Trajectory contains no frames; refusing to produce empty angle series")]
    EmptyTrajectory,

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Trajectory(#[from] TrajectoryError),
}
