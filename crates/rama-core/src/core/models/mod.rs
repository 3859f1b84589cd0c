//! # Core Models Module
//!
//! Data structures describing what a trajectory is made of.
//!
//! ## Overview
//!
//! A [`topology::Topology`] holds the fixed identity of every atom (name,
//! element, residue membership), the residues and chains they belong to, and
//! optional bond connectivity. A [`trajectory::Trajectory`] pairs one topology
//! with an ordered sequence of [`frame::Frame`]s, each holding one coordinate
//! per atom. Coordinates are kept out of the topology so that a single
//! topology serves every frame.
//!
//! ## Key Components
//!
//! - [`atom`] - Named atoms with their frame index
//! - [`residue`] - Residues and the standard amino acid types
//! - [`chain`] - Chains as ordered residue sequences
//! - [`bond`] - Covalent connectivity
//! - [`topology`] - The complete atom/residue/chain description
//! - [`builder`] - Streaming construction of a topology from file-like records
//! - [`frame`] - One snapshot of coordinates
//! - [`trajectory`] - Frames sharing one topology
//! - [`ids`] - Stable handles for atoms, residues, and chains
//!
//! ## Usage
//!
//! ```ignore
//! use ramakit::core::models::{atom::Atom, chain::ChainType, topology::Topology};
//!
//! let mut topology = Topology::new();
//! let chain_id = topology.add_chain('A', ChainType::Protein);
//! let residue_id = topology.add_residue(chain_id, 2, "ALA").unwrap();
//! topology.add_atom_to_residue(residue_id, Atom::new("CA", residue_id));
//! ```

pub mod atom;
pub mod bond;
pub mod builder;
pub mod chain;
pub mod frame;
pub mod ids;
pub mod residue;
pub mod topology;
pub mod trajectory;
