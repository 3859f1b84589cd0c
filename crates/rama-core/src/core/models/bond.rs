use super::ids::AtomId;

/// An undirected covalent bond between two atoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bond {
    pub atom1_id: AtomId, // ID of the first atom
    pub atom2_id: AtomId, // ID of the second atom
}

impl Bond {
    pub fn new(atom1_id: AtomId, atom2_id: AtomId) -> Self {
        Self { atom1_id, atom2_id }
    }

    pub fn contains(&self, atom_id: AtomId) -> bool {
        self.atom1_id == atom_id || self.atom2_id == atom_id
    }

    /// Returns the partner of `atom_id` in this bond, if `atom_id` is part of it.
    pub fn partner(&self, atom_id: AtomId) -> Option<AtomId> {
        if self.atom1_id == atom_id {
            Some(self.atom2_id)
        } else if self.atom2_id == atom_id {
            Some(self.atom1_id)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::KeyData;

    fn dummy_atom_id(n: u64) -> AtomId {
        AtomId::from(KeyData::from_ffi(n))
    }

    #[test]
    fn bond_contains_returns_true_for_both_atoms() {
        let a1 = dummy_atom_id(10);
        let a2 = dummy_atom_id(20);
        let bond = Bond::new(a1, a2);
        assert!(bond.contains(a1));
        assert!(bond.contains(a2));
        assert!(!bond.contains(dummy_atom_id(30)));
    }

    #[test]
    fn partner_returns_the_other_atom() {
        let a1 = dummy_atom_id(1);
        let a2 = dummy_atom_id(2);
        let bond = Bond::new(a1, a2);
        assert_eq!(bond.partner(a1), Some(a2));
        assert_eq!(bond.partner(a2), Some(a1));
        assert_eq!(bond.partner(dummy_atom_id(3)), None);
    }
}
