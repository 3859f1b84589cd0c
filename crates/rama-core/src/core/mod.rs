//! # Core Module
//!
//! The stateless foundation of the library: the data models describing
//! trajectories, the geometry used to measure them, and the naming rules used
//! to find backbone atoms.
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - Atoms, residues, chains, topologies, frames and trajectories
//! - **Naming Rules** ([`naming`]) - Atom references and the default backbone naming convention
//! - **Utilities** ([`utils`]) - Dihedral geometry and residue-name classification
//!
//! Nothing in this module depends on the extraction engine or on plotting.

pub mod models;
pub mod naming;
pub mod utils;
