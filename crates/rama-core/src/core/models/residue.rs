use super::ids::{AtomId, ChainId};
use crate::core::utils::identifiers;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResidueType {
    // --- Aliphatic, Nonpolar ---
    Alanine,    // Alanine (ALA)
    Glycine,    // Glycine (GLY)
    Isoleucine, // Isoleucine (ILE)
    Leucine,    // Leucine (LEU)
    Proline,    // Proline (PRO)
    Valine,     // Valine (VAL)

    // --- Aromatic ---
    Phenylalanine, // Phenylalanine (PHE)
    Tryptophan,    // Tryptophan (TRP)
    Tyrosine,      // Tyrosine (TYR)

    // --- Polar, Uncharged ---
    Asparagine, // Asparagine (ASN)
    Cysteine,   // Cysteine (CYS)
    Glutamine,  // Glutamine (GLN)
    Serine,     // Serine (SER)
    Threonine,  // Threonine (THR)
    Methionine, // Methionine (MET)

    // --- Positively Charged (Basic) ---
    Arginine,  // Arginine (ARG)
    Lysine,    // Lysine (LYS)
    Histidine, // Histidine (HIS), including protonation-state aliases

    // --- Negatively Charged (Acidic) ---
    AsparticAcid, // Aspartic Acid (ASP)
    GlutamicAcid, // Glutamic Acid (GLU)
}

impl ResidueType {
    /// Returns the canonical three-letter code.
    pub fn to_three_letter(&self) -> &'static str {
        match self {
            ResidueType::Alanine => "ALA",
            ResidueType::Glycine => "GLY",
            ResidueType::Isoleucine => "ILE",
            ResidueType::Leucine => "LEU",
            ResidueType::Proline => "PRO",
            ResidueType::Valine => "VAL",
            ResidueType::Phenylalanine => "PHE",
            ResidueType::Tryptophan => "TRP",
            ResidueType::Tyrosine => "TYR",
            ResidueType::Asparagine => "ASN",
            ResidueType::Cysteine => "CYS",
            ResidueType::Glutamine => "GLN",
            ResidueType::Serine => "SER",
            ResidueType::Threonine => "THR",
            ResidueType::Methionine => "MET",
            ResidueType::Arginine => "ARG",
            ResidueType::Lysine => "LYS",
            ResidueType::Histidine => "HIS",
            ResidueType::AsparticAcid => "ASP",
            ResidueType::GlutamicAcid => "GLU",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown amino acid residue name: '{0}'")]
pub struct ParseResidueTypeError(pub String);

impl FromStr for ResidueType {
    type Err = ParseResidueTypeError;

    /// Parses a residue name, accepting force-field protonation variants
    /// (e.g., "HIE", "HSD", "CYX", "ASH") as their parent amino acid.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        identifiers::amino_acid_from_name(s).ok_or_else(|| ParseResidueTypeError(s.to_string()))
    }
}

impl fmt::Display for ResidueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_three_letter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Residue {
    pub number: isize,                      // Residue sequence number from the source topology
    pub name: String,                       // Name of the residue (e.g., "ALA", "ACE")
    pub residue_type: Option<ResidueType>,  // Standard amino acid type, if any
    pub chain_id: ChainId,                  // ID of the parent chain
    pub(crate) atoms: Vec<AtomId>,          // Atoms in insertion order
    atom_name_map: HashMap<String, AtomId>, // Map from atom name to its stable ID
}

impl Residue {
    pub(crate) fn new(number: isize, name: &str, chain_id: ChainId) -> Self {
        Self {
            number,
            name: name.to_string(),
            residue_type: name.parse().ok(),
            chain_id,
            atoms: Vec::new(),
            atom_name_map: HashMap::new(),
        }
    }

    /// Registers an atom under `atom_name`.
    ///
    /// Returns `false` without modifying the residue if the name is already taken.
    pub(crate) fn add_atom(&mut self, atom_name: &str, atom_id: AtomId) -> bool {
        if self.atom_name_map.contains_key(atom_name) {
            return false;
        }
        self.atoms.push(atom_id);
        self.atom_name_map.insert(atom_name.to_string(), atom_id);
        true
    }

    pub fn atoms(&self) -> &[AtomId] {
        &self.atoms
    }

    pub fn get_atom_id_by_name(&self, name: &str) -> Option<AtomId> {
        self.atom_name_map.get(name).copied()
    }

    /// Returns `true` for standard amino acids, the residues whose backbone
    /// dihedrals are measured by default.
    pub fn is_amino_acid(&self) -> bool {
        self.residue_type.is_some()
    }
}
