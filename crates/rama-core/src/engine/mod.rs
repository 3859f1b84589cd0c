//! # Engine Module
//!
//! Turns a [`Trajectory`](crate::core::models::trajectory::Trajectory) into
//! backbone dihedral time series.
//!
//! ## Overview
//!
//! Extraction happens in two stages. Selectors are first resolved against the
//! shared topology into four frame indices per dihedral, failing loudly when
//! the backbone naming does not match. Every frame is then measured with those
//! indices, producing one [`AngleSeries`](series::AngleSeries) value per frame.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Selectors, residue target and naming convention, built through [`config::ExtractionConfigBuilder`]
//! - **Selection** ([`selection`]) - Resolution of default and explicit selectors to atom indices
//! - **Extraction** ([`extractor`]) - The [`extractor::AngleExtractor`] and the [`extractor::extract_angles`] entry point
//! - **Series** ([`series`]) - Per-frame angle values in radians
//! - **Progress Monitoring** ([`progress`]) - Progress reporting for callers that display it
//! - **Error Handling** ([`error`]) - Selection and extraction error types

pub mod config;
pub mod error;
pub mod extractor;
pub mod progress;
pub mod selection;
pub mod series;
