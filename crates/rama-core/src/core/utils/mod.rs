//! Stateless helpers shared by the models and the engine: vector geometry and
//! residue/atom name classification.

pub mod geometry;
pub mod identifiers;
