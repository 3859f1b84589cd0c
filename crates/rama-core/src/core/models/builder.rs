use super::atom::Atom;
use super::chain::ChainType;
use super::ids::{AtomId, ChainId, ResidueId};
use super::topology::Topology;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("A chain must be started before a residue")]
    NoCurrentChain,
    #[error("A residue must be started before an atom")]
    NoCurrentResidue,
    #[error("Duplicate atom serial: {0}")]
    DuplicateSerial(usize),
    #[error("Duplicate atom name '{name}' in residue {residue_number}")]
    DuplicateAtomName { name: String, residue_number: isize },
    #[error("Bond references unknown atom serial: {0}")]
    UnknownSerial(usize),
}

/// Builds a [`Topology`] from a stream of chain/residue/atom records, the way
/// a structure-file reader encounters them.
///
/// Atoms are addressed by the serial number of the source record so bonds can
/// be declared after all atoms are known.
#[derive(Default)]
pub struct TopologyBuilder {
    topology: Topology,

    // --- Builder-specific state for streaming construction ---
    atom_serial_map: HashMap<usize, AtomId>,
    current_chain: Option<ChainId>,
    current_residue: Option<ResidueId>,
}

impl TopologyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_chain(&mut self, id: char, chain_type: ChainType) -> &mut Self {
        self.current_chain = Some(self.topology.add_chain(id, chain_type));
        self.current_residue = None;
        self
    }

    pub fn start_residue(&mut self, number: isize, name: &str) -> Result<&mut Self, BuildError> {
        let chain_id = self.current_chain.ok_or(BuildError::NoCurrentChain)?;
        let residue_id = self
            .topology
            .add_residue(chain_id, number, name)
            .ok_or(BuildError::NoCurrentChain)?;
        self.current_residue = Some(residue_id);
        Ok(self)
    }

    pub fn add_atom(
        &mut self,
        serial: usize,
        name: &str,
        element: Option<&str>,
    ) -> Result<&mut Self, BuildError> {
        let residue_id = self.current_residue.ok_or(BuildError::NoCurrentResidue)?;
        if self.atom_serial_map.contains_key(&serial) {
            return Err(BuildError::DuplicateSerial(serial));
        }

        let mut atom = Atom::new(name, residue_id);
        if let Some(element) = element {
            atom = atom.with_element(element);
        }

        let atom_id = self
            .topology
            .add_atom_to_residue(residue_id, atom)
            .ok_or_else(|| BuildError::DuplicateAtomName {
                name: name.to_string(),
                residue_number: self
                    .topology
                    .residue(residue_id)
                    .map_or(0, |residue| residue.number),
            })?;
        self.atom_serial_map.insert(serial, atom_id);
        Ok(self)
    }

    pub fn add_bond(&mut self, serial1: usize, serial2: usize) -> Result<&mut Self, BuildError> {
        let id1 = self.lookup(serial1)?;
        let id2 = self.lookup(serial2)?;
        // Self-bonds carry no connectivity; the topology ignores them.
        let _ = self.topology.add_bond(id1, id2);
        Ok(self)
    }

    pub fn build(self) -> Topology {
        self.topology
    }

    fn lookup(&self, serial: usize) -> Result<AtomId, BuildError> {
        self.atom_serial_map
            .get(&serial)
            .copied()
            .ok_or(BuildError::UnknownSerial(serial))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_streams_records_into_a_topology() -> Result<(), BuildError> {
        let mut builder = TopologyBuilder::new();
        builder.start_chain('A', ChainType::Protein);
        builder.start_residue(1, "ACE")?.add_atom(1, "C", Some("C"))?;
        builder
            .start_residue(2, "ALA")?
            .add_atom(2, "N", Some("N"))?
            .add_atom(3, "CA", Some("C"))?;
        builder.add_bond(1, 2)?.add_bond(2, 3)?;
        let topology = builder.build();

        assert_eq!(topology.atom_count(), 3);
        assert_eq!(topology.residue_count(), 2);
        assert_eq!(topology.bonds().len(), 2);
        let (_, atom) = topology.atom_at(2).unwrap();
        assert_eq!(atom.name, "CA");
        assert_eq!(atom.element.as_deref(), Some("C"));
        Ok(())
    }

    #[test]
    fn residue_without_chain_is_an_error() {
        let mut builder = TopologyBuilder::new();
        assert_eq!(
            builder.start_residue(1, "ALA").err(),
            Some(BuildError::NoCurrentChain)
        );
    }

    #[test]
    fn atom_without_residue_is_an_error() {
        let mut builder = TopologyBuilder::new();
        builder.start_chain('A', ChainType::Protein);
        assert_eq!(
            builder.add_atom(1, "N", None).err(),
            Some(BuildError::NoCurrentResidue)
        );
    }

    #[test]
    fn duplicate_serials_and_names_are_rejected() -> Result<(), BuildError> {
        let mut builder = TopologyBuilder::new();
        builder.start_chain('A', ChainType::Protein);
        builder.start_residue(1, "ALA")?.add_atom(1, "N", None)?;

        assert_eq!(
            builder.add_atom(1, "CA", None).err(),
            Some(BuildError::DuplicateSerial(1))
        );
        assert_eq!(
            builder.add_atom(2, "N", None).err(),
            Some(BuildError::DuplicateAtomName {
                name: "N".to_string(),
                residue_number: 1
            })
        );
        Ok(())
    }

    #[test]
    fn bond_to_unknown_serial_is_an_error() -> Result<(), BuildError> {
        let mut builder = TopologyBuilder::new();
        builder.start_chain('A', ChainType::Protein);
        builder.start_residue(1, "ALA")?.add_atom(1, "N", None)?;
        assert_eq!(
            builder.add_bond(1, 7).err(),
            Some(BuildError::UnknownSerial(7))
        );
        Ok(())
    }
}
