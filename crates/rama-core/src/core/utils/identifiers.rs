use crate::core::models::residue::ResidueType;
use phf::{Map, phf_map};

static AMINO_ACID_NAMES: Map<&'static str, ResidueType> = phf_map! {
    "ALA" => ResidueType::Alanine,
    "GLY" => ResidueType::Glycine,
    "ILE" => ResidueType::Isoleucine,
    "LEU" => ResidueType::Leucine,
    "PRO" => ResidueType::Proline,
    "VAL" => ResidueType::Valine,
    "PHE" => ResidueType::Phenylalanine,
    "TRP" => ResidueType::Tryptophan,
    "TYR" => ResidueType::Tyrosine,
    "ASN" => ResidueType::Asparagine,
    "CYS" => ResidueType::Cysteine, "CYX" => ResidueType::Cysteine, "CYM" => ResidueType::Cysteine,
    "GLN" => ResidueType::Glutamine,
    "SER" => ResidueType::Serine,
    "THR" => ResidueType::Threonine,
    "MET" => ResidueType::Methionine,
    "ARG" => ResidueType::Arginine,
    "LYS" => ResidueType::Lysine, "LYN" => ResidueType::Lysine,
    "HIS" => ResidueType::Histidine, "HIE" => ResidueType::Histidine, "HID" => ResidueType::Histidine,
    "HIP" => ResidueType::Histidine, "HSE" => ResidueType::Histidine, "HSD" => ResidueType::Histidine,
    "HSP" => ResidueType::Histidine,
    "ASP" => ResidueType::AsparticAcid, "ASH" => ResidueType::AsparticAcid,
    "GLU" => ResidueType::GlutamicAcid, "GLH" => ResidueType::GlutamicAcid,
};

pub fn amino_acid_from_name(residue_name: &str) -> Option<ResidueType> {
    AMINO_ACID_NAMES
        .get(residue_name.trim().to_ascii_uppercase().as_str())
        .copied()
}
