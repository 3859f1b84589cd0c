use super::atom::Atom;
use super::bond::Bond;
use super::chain::{Chain, ChainType};
use super::ids::{AtomId, ChainId, ResidueId};
use super::residue::Residue;
use slotmap::{SecondaryMap, SlotMap};
use std::collections::HashMap;

/// The fixed description of atoms, residues, chains and bonds shared by every
/// frame of a trajectory.
///
/// Atoms receive a dense frame index in insertion order; a [`Frame`](super::frame::Frame)
/// stores one coordinate per atom at that index. A topology only grows, so the
/// indices stay stable for its whole lifetime.
#[derive(Debug, Clone, Default)]
pub struct Topology {
    /// Primary storage for atoms using a slot map for efficient ID management.
    atoms: SlotMap<AtomId, Atom>,
    /// Primary storage for residues using a slot map for efficient ID management.
    residues: SlotMap<ResidueId, Residue>,
    /// Primary storage for chains using a slot map for efficient ID management.
    chains: SlotMap<ChainId, Chain>,
    /// Chains in the order they were added.
    chain_order: Vec<ChainId>,
    /// Atom IDs indexed by frame position.
    atom_order: Vec<AtomId>,
    /// List of all bonds in the topology.
    bonds: Vec<Bond>,
    /// Lookup map for finding residues by chain ID and residue number.
    residue_id_map: HashMap<(ChainId, isize), ResidueId>,
    /// Lookup map for finding chains by their single-character identifier.
    chain_id_map: HashMap<char, ChainId>,
    /// Cached adjacency list for bond connectivity, indexed by atom ID.
    bond_adjacency: SecondaryMap<AtomId, Vec<AtomId>>,
}

impl Topology {
    /// Creates a new, empty topology.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn atom(&self, id: AtomId) -> Option<&Atom> {
        self.atoms.get(id)
    }

    pub fn residue(&self, id: ResidueId) -> Option<&Residue> {
        self.residues.get(id)
    }

    pub fn chain(&self, id: ChainId) -> Option<&Chain> {
        self.chains.get(id)
    }

    /// Returns the number of atoms, which is also the required size of every frame.
    pub fn atom_count(&self) -> usize {
        self.atom_order.len()
    }

    pub fn residue_count(&self) -> usize {
        self.residues.len()
    }

    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    /// Returns `true` if connectivity information is available.
    pub fn has_bonds(&self) -> bool {
        !self.bonds.is_empty()
    }

    /// Returns the atom stored at `index` within each frame.
    pub fn atom_at(&self, index: usize) -> Option<(AtomId, &Atom)> {
        let id = *self.atom_order.get(index)?;
        self.atoms.get(id).map(|atom| (id, atom))
    }

    /// Iterates atoms in frame order.
    pub fn atoms_iter(&self) -> impl Iterator<Item = (AtomId, &Atom)> {
        self.atom_order.iter().map(|&id| (id, &self.atoms[id]))
    }

    /// Iterates chains in the order they were added.
    pub fn chains_iter(&self) -> impl Iterator<Item = (ChainId, &Chain)> {
        self.chain_order.iter().map(|&id| (id, &self.chains[id]))
    }

    /// Iterates residues chain by chain, in sequence order.
    pub fn residues_iter(&self) -> impl Iterator<Item = (ResidueId, &Residue)> {
        self.chains_iter().flat_map(move |(_, chain)| {
            chain
                .residues()
                .iter()
                .map(move |&id| (id, &self.residues[id]))
        })
    }

    pub fn find_chain_by_id(&self, id: char) -> Option<ChainId> {
        self.chain_id_map.get(&id).copied()
    }

    pub fn find_residue_by_id(
        &self,
        chain_id: ChainId,
        residue_number: isize,
    ) -> Option<ResidueId> {
        self.residue_id_map
            .get(&(chain_id, residue_number))
            .copied()
    }

    /// Returns the residue `offset` positions away from `residue_id` within its chain.
    pub fn neighbor_residue(&self, residue_id: ResidueId, offset: isize) -> Option<ResidueId> {
        let residue = self.residues.get(residue_id)?;
        self.chains.get(residue.chain_id)?.neighbor(residue_id, offset)
    }

    /// Adds a new chain or returns the existing one with the same identifier.
    pub fn add_chain(&mut self, id: char, chain_type: ChainType) -> ChainId {
        if let Some(&existing) = self.chain_id_map.get(&id) {
            return existing;
        }
        let chain_id = self.chains.insert(Chain::new(id, chain_type));
        self.chain_id_map.insert(id, chain_id);
        self.chain_order.push(chain_id);
        chain_id
    }

    /// Adds a new residue to a chain or returns the existing one.
    ///
    /// # Return
    ///
    /// Returns `None` if the chain does not exist.
    pub fn add_residue(
        &mut self,
        chain_id: ChainId,
        residue_number: isize,
        name: &str,
    ) -> Option<ResidueId> {
        let chain = self.chains.get_mut(chain_id)?;
        let key = (chain_id, residue_number);

        let residue_id = *self.residue_id_map.entry(key).or_insert_with(|| {
            let residue = Residue::new(residue_number, name, chain_id);
            self.residues.insert(residue)
        });

        if !chain.residues.contains(&residue_id) {
            chain.residues.push(residue_id);
        }

        Some(residue_id)
    }

    /// Adds an atom to a residue and assigns it the next frame index.
    ///
    /// # Return
    ///
    /// Returns `None` if the residue does not exist or already holds an atom
    /// with the same name.
    pub fn add_atom_to_residue(&mut self, residue_id: ResidueId, mut atom: Atom) -> Option<AtomId> {
        let residue = self.residues.get(residue_id)?;
        if residue.get_atom_id_by_name(&atom.name).is_some() {
            return None;
        }

        atom.residue_id = residue_id;
        atom.index = self.atom_order.len();
        let name = atom.name.clone();

        let atom_id = self.atoms.insert(atom);
        self.atom_order.push(atom_id);
        self.bond_adjacency.insert(atom_id, Vec::new());
        self.residues[residue_id].add_atom(&name, atom_id);

        Some(atom_id)
    }

    /// Adds a bond between two atoms. Adding an existing bond is a no-op.
    ///
    /// # Return
    ///
    /// Returns `None` if either atom does not exist or both IDs are the same.
    pub fn add_bond(&mut self, atom1_id: AtomId, atom2_id: AtomId) -> Option<()> {
        if atom1_id == atom2_id
            || !self.atoms.contains_key(atom1_id)
            || !self.atoms.contains_key(atom2_id)
        {
            return None;
        }

        if self.are_bonded(atom1_id, atom2_id) {
            return Some(());
        }

        self.bonds.push(Bond::new(atom1_id, atom2_id));
        self.bond_adjacency[atom1_id].push(atom2_id);
        self.bond_adjacency[atom2_id].push(atom1_id);
        Some(())
    }

    pub fn get_bonded_neighbors(&self, atom_id: AtomId) -> Option<&[AtomId]> {
        self.bond_adjacency.get(atom_id).map(|v| v.as_slice())
    }

    pub fn are_bonded(&self, atom1_id: AtomId, atom2_id: AtomId) -> bool {
        self.bond_adjacency
            .get(atom1_id)
            .is_some_and(|neighbors| neighbors.contains(&atom2_id))
    }
}
