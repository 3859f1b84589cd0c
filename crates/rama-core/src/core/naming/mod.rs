//! # Naming Module
//!
//! Rules that map backbone roles onto atom names.
//!
//! - [`reference`] - Atom references such as `CA`, `-C` or `+N`
//! - [`convention`] - The default backbone naming convention, loadable from TOML
//!
//! ```ignore
//! use ramakit::core::naming::convention::BackboneConvention;
//!
//! let convention = BackboneConvention::load(Path::new("charmm-termini.toml"))?;
//! ```

pub mod convention;
pub mod reference;
