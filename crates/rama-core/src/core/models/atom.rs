use super::ids::ResidueId;

/// Represents a named atom of a molecular topology.
///
/// An atom carries only identity information. Its coordinates live in each
/// [`Frame`](super::frame::Frame) of a trajectory, at the position given by
/// [`Atom::index`], so that one topology can be shared by any number of frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atom {
    /// The name of the atom (e.g., "CA", "N", "C").
    pub name: String,
    /// The element symbol, if the source topology provides one.
    pub element: Option<String>,
    /// The ID of the parent residue this atom belongs to.
    pub residue_id: ResidueId,
    /// Position of this atom's coordinates within every frame.
    pub(crate) index: usize,
}

impl Atom {
    /// Creates a new `Atom` without an element symbol.
    ///
    /// The frame index is assigned when the atom is inserted into a
    /// [`Topology`](super::topology::Topology).
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the atom.
    /// * `residue_id` - The ID of the residue this atom belongs to.
    pub fn new(name: &str, residue_id: ResidueId) -> Self {
        Self {
            name: name.to_string(),
            element: None,
            residue_id,
            index: 0,
        }
    }

    /// Sets the element symbol of the atom.
    pub fn with_element(mut self, element: &str) -> Self {
        self.element = Some(element.to_string());
        self
    }

    /// Returns the index of this atom's coordinates within a frame.
    pub fn index(&self) -> usize {
        self.index
    }
}
