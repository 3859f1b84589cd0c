//! # Workflows Module
//!
//! End-to-end entry points that tie the [`engine`](crate::engine) and
//! [`plot`](crate::plot) layers together.
//!
//! - **Ramachandran Workflow** ([`ramachandran`]) - Extraction followed by presentation, with phase reporting
//! - **Torsion Scan** ([`scan`]) - Synthetic trajectories of a capped dipeptide posed on a (φ, ψ) grid

pub mod ramachandran;
pub mod scan;
