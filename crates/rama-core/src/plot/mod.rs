//! # Plot Module
//!
//! Presentation of angle series as an explicit [`Figure`](figure::Figure) value.
//!
//! The [`presenter`] builds the figure model (panels, axes, series, reference
//! lines) without any global plotting state, and [`svg`] renders a figure into
//! SVG text. Writing the text anywhere is left to the caller.

pub mod figure;
pub mod presenter;
pub mod svg;
