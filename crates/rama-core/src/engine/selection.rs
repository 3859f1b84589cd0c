use super::config::ResidueTarget;
use super::error::SelectionError;
use crate::core::models::ids::{AtomId, ResidueId};
use crate::core::models::residue::Residue;
use crate::core::models::topology::Topology;
use crate::core::naming::convention::{BackboneConvention, BackboneRole, DihedralKind};
use crate::core::naming::reference::{AtomRef, ResidueOffset};
use tracing::debug;

/// How the four atoms of a dihedral are found.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AtomSelector {
    /// Detect the backbone atoms through the naming convention.
    #[default]
    Default,
    /// Use exactly these four atoms, in bonding order.
    Explicit([AtomRef; 4]),
}

impl AtomSelector {
    /// Parses an explicit selector from exactly four atom references.
    pub fn explicit<S: AsRef<str>>(names: &[S]) -> Result<Self, SelectionError> {
        let [a, b, c, d] = names else {
            return Err(SelectionError::WrongAtomCount { found: names.len() });
        };
        Ok(AtomSelector::Explicit([
            a.as_ref().parse()?,
            b.as_ref().parse()?,
            c.as_ref().parse()?,
            d.as_ref().parse()?,
        ]))
    }

    pub fn is_default(&self) -> bool {
        matches!(self, AtomSelector::Default)
    }
}

/// Human-readable residue label such as `ALA2:A`, used in error messages.
pub fn residue_label(topology: &Topology, residue_id: ResidueId) -> String {
    let Some(residue) = topology.residue(residue_id) else {
        return "<unknown>".to_string();
    };
    let chain = topology
        .chain(residue.chain_id)
        .map_or('?', |chain| chain.id);
    format!("{}{}:{}", residue.name, residue.number, chain)
}

/// Residues measured when no residue is named: every standard amino acid, or
/// the only residue of a topology without amino acids.
pub fn candidate_residues(topology: &Topology) -> Vec<ResidueId> {
    let amino_acids: Vec<ResidueId> = topology
        .residues_iter()
        .filter(|(_, residue)| residue.is_amino_acid())
        .map(|(id, _)| id)
        .collect();
    if !amino_acids.is_empty() {
        return amino_acids;
    }
    if topology.residue_count() == 1 {
        return topology.residues_iter().map(|(id, _)| id).collect();
    }
    Vec::new()
}

pub fn resolve_target(
    topology: &Topology,
    target: &ResidueTarget,
) -> Result<ResidueId, SelectionError> {
    match target {
        ResidueTarget::Residue(specifier) => topology
            .find_chain_by_id(specifier.chain_id)
            .and_then(|chain_id| topology.find_residue_by_id(chain_id, specifier.residue_number))
            .ok_or_else(|| SelectionError::ResidueNotFound {
                residue: specifier.to_string(),
            }),
        ResidueTarget::Auto => {
            let candidates = candidate_residues(topology);
            match candidates.as_slice() {
                [] => Err(SelectionError::NoCandidateResidue),
                [single] => Ok(*single),
                many => Err(SelectionError::AmbiguousResidue {
                    count: many.len(),
                    candidates: many
                        .iter()
                        .map(|&id| residue_label(topology, id))
                        .collect::<Vec<_>>()
                        .join(", "),
                }),
            }
        }
    }
}

/// Resolves a selector against one residue into the frame indices of its four atoms.
pub fn resolve_dihedral(
    topology: &Topology,
    residue_id: ResidueId,
    kind: DihedralKind,
    selector: &AtomSelector,
    convention: &BackboneConvention,
) -> Result<[usize; 4], SelectionError> {
    let (located, refs) = match selector {
        AtomSelector::Explicit(refs) => {
            let mut located = [(AtomId::default(), 0); 4];
            for (slot, atom_ref) in located.iter_mut().zip(refs.iter()) {
                *slot = locate_explicit(topology, residue_id, kind, atom_ref)?;
            }
            (located, refs.clone())
        }
        AtomSelector::Default => locate_by_convention(topology, residue_id, kind, convention)?,
    };
    let atom_ids = located.map(|(id, _)| id);
    let indices = located.map(|(_, index)| index);

    for i in 0..4 {
        if atom_ids[i + 1..].contains(&atom_ids[i]) {
            return Err(SelectionError::DuplicateAtom {
                kind,
                atom: refs[i].clone(),
            });
        }
    }

    if !topology.has_bonds() {
        debug!(
            "Topology has no bonds; skipping {} connectivity check for {}",
            kind,
            residue_label(topology, residue_id)
        );
    } else {
        for pair in 0..3 {
            if !topology.are_bonded(atom_ids[pair], atom_ids[pair + 1]) {
                return Err(SelectionError::NotBonded {
                    kind,
                    first: refs[pair].clone(),
                    second: refs[pair + 1].clone(),
                });
            }
        }
    }

    debug!(
        "Resolved {} for {} to frame indices {:?}",
        kind,
        residue_label(topology, residue_id),
        indices
    );
    Ok(indices)
}

fn locate_explicit(
    topology: &Topology,
    residue_id: ResidueId,
    kind: DihedralKind,
    atom_ref: &AtomRef,
) -> Result<(AtomId, usize), SelectionError> {
    let target = topology
        .neighbor_residue(residue_id, atom_ref.offset.delta())
        .ok_or_else(|| SelectionError::MissingNeighbor {
            kind,
            residue: residue_label(topology, residue_id),
            atom: atom_ref.clone(),
        })?;
    topology
        .residue(target)
        .and_then(|residue| atom_by_name(topology, residue, &atom_ref.name))
        .ok_or_else(|| SelectionError::MissingAtom {
            kind,
            residue: residue_label(topology, target),
            atom: atom_ref.clone(),
        })
}

fn locate_by_convention(
    topology: &Topology,
    residue_id: ResidueId,
    kind: DihedralKind,
    convention: &BackboneConvention,
) -> Result<([(AtomId, usize); 4], [AtomRef; 4]), SelectionError> {
    let mismatch = |detail: String| SelectionError::ConventionMismatch {
        kind,
        residue: residue_label(topology, residue_id),
        detail,
    };

    let mut located = [(AtomId::default(), 0); 4];
    let mut refs: [AtomRef; 4] = Default::default();
    for (i, (offset, role)) in kind.backbone_chain().into_iter().enumerate() {
        let target = topology
            .neighbor_residue(residue_id, offset.delta())
            .ok_or_else(|| mismatch(describe_missing_neighbor(offset, role)))?;
        let residue = topology
            .residue(target)
            .ok_or_else(|| mismatch("dangling residue ID".to_string()))?;
        let name = convention.atom_name(&residue.name, role);
        refs[i] = AtomRef::new(offset, name);
        located[i] = atom_by_name(topology, residue, name).ok_or_else(|| {
            mismatch(format!(
                "no atom named '{}' in residue {}",
                name,
                residue_label(topology, target)
            ))
        })?;
    }
    Ok((located, refs))
}

/// The ID and frame index of the atom called `name` in `residue`.
fn atom_by_name(topology: &Topology, residue: &Residue, name: &str) -> Option<(AtomId, usize)> {
    let id = residue.get_atom_id_by_name(name)?;
    topology.atom(id).map(|atom| (id, atom.index()))
}

fn describe_missing_neighbor(offset: ResidueOffset, role: BackboneRole) -> String {
    let direction = match offset {
        ResidueOffset::Previous => "preceding",
        ResidueOffset::Next => "following",
        ResidueOffset::Current => "current",
    };
    format!(
        "no {} residue to provide the {:?} atom (terminal residue)",
        direction, role
    )
}
