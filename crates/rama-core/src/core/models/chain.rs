use super::ids::ResidueId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainType {
    Protein,
    Ligand,
    Solvent,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    pub id: char,                        // Chain identifier (e.g., 'A', 'B')
    pub chain_type: ChainType,           // Type of the chain
    pub(crate) residues: Vec<ResidueId>, // Residue IDs in sequence order
}

impl Chain {
    pub(crate) fn new(id: char, chain_type: ChainType) -> Self {
        Self {
            id,
            chain_type,
            residues: Vec::new(),
        }
    }

    pub fn residues(&self) -> &[ResidueId] {
        &self.residues
    }

    /// Returns the residue `offset` positions away from `residue_id` in sequence order.
    pub fn neighbor(&self, residue_id: ResidueId, offset: isize) -> Option<ResidueId> {
        let position = self.residues.iter().position(|&id| id == residue_id)?;
        let target = position.checked_add_signed(offset)?;
        self.residues.get(target).copied()
    }
}
