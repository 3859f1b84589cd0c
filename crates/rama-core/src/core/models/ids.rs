use slotmap::new_key_type;

new_key_type! {
    /// Stable handle to an atom of a topology.
    pub struct AtomId;
    /// Stable handle to a residue of a topology.
    pub struct ResidueId;
    /// Stable handle to a chain of a topology.
    pub struct ChainId;
}
