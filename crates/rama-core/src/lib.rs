//! # ramakit
//!
//! Backbone dihedral (φ/ψ) extraction from molecular trajectories and
//! Ramachandran figure generation.
//!
//! ## Architecture
//!
//! The library follows a layered layout, each layer depending only on the ones
//! below it.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Topology`, `Frame`,
//!   `Trajectory`), geometry routines and the backbone naming convention.
//!
//! - **[`engine`]: The Logic Core.** Resolves atom selectors against a topology
//!   and computes one dihedral value per frame, producing `AngleSeries`.
//!
//! - **[`plot`]: Presentation.** Builds an explicit `Figure` from a pair of
//!   series and renders it as SVG text. Nothing here touches the filesystem.
//!
//! - **[`workflows`]: The Public API.** Complete procedures such as the
//!   Ramachandran workflow and the dipeptide torsion scan.
//!
//! ## Example
//!
//! ```no_run
//! use ramakit::{AtomSelector, Trajectory, extract_angles, present_ramachandran};
//!
//! # fn load() -> Trajectory { unimplemented!() }
//! let trajectory = load();
//! let (phi, psi) = extract_angles(&trajectory, &AtomSelector::Default, &AtomSelector::Default)?;
//! let figure = present_ramachandran(&phi, &psi)?;
//! let svg = figure.render_svg(&Default::default())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod core;
pub mod engine;
pub mod plot;
pub mod workflows;

pub use crate::core::models::frame::Frame;
pub use crate::core::models::topology::Topology;
pub use crate::core::models::trajectory::Trajectory;
pub use crate::engine::error::{ExtractionError, SelectionError};
pub use crate::engine::extractor::{AngleExtractor, extract_angles};
pub use crate::engine::selection::AtomSelector;
pub use crate::engine::series::AngleSeries;
pub use crate::plot::figure::Figure;
pub use crate::plot::presenter::{AnglePresenter, PresentationError, present_ramachandran};
