use super::error::SelectionError;
use super::selection::AtomSelector;
use crate::core::naming::convention::{BackboneConvention, DihedralKind};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Invalid {kind} selector: {source}")]
    InvalidSelector {
        kind: DihedralKind,
        #[source]
        source: SelectionError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResidueSpecifier {
    pub chain_id: char,
    pub residue_number: isize,
}

impl fmt::Display for ResidueSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chain_id, self.residue_number)
    }
}

/// Which residue instance the extractor measures.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResidueTarget {
    /// The single standard amino acid of the topology, or its only residue
    /// when it contains no amino acid (a small molecule).
    #[default]
    Auto,
    Residue(ResidueSpecifier),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExtractionConfig {
    pub phi: AtomSelector,
    pub psi: AtomSelector,
    pub target: ResidueTarget,
    pub convention: BackboneConvention,
}

impl ExtractionConfig {
    pub fn selector(&self, kind: DihedralKind) -> &AtomSelector {
        match kind {
            DihedralKind::Phi => &self.phi,
            DihedralKind::Psi => &self.psi,
        }
    }
}

#[derive(Debug, Clone)]
enum SelectorInput {
    Names(Vec<String>),
    Parsed(AtomSelector),
}

#[derive(Default)]
pub struct ExtractionConfigBuilder {
    phi: Option<SelectorInput>,
    psi: Option<SelectorInput>,
    target: Option<ResidueTarget>,
    convention: Option<BackboneConvention>,
}

impl ExtractionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides phi detection with four atom references (e.g. `["-C", "N", "CA", "C"]`).
    pub fn phi_atoms<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.phi = Some(SelectorInput::Names(names.into_iter().map(Into::into).collect()));
        self
    }
    /// Overrides psi detection with four atom references (e.g. `["N", "CA", "C", "+N"]`).
    pub fn psi_atoms<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.psi = Some(SelectorInput::Names(names.into_iter().map(Into::into).collect()));
        self
    }
    pub fn phi_selector(mut self, selector: AtomSelector) -> Self {
        self.phi = Some(SelectorInput::Parsed(selector));
        self
    }
    pub fn psi_selector(mut self, selector: AtomSelector) -> Self {
        self.psi = Some(SelectorInput::Parsed(selector));
        self
    }
    pub fn target(mut self, target: ResidueTarget) -> Self {
        self.target = Some(target);
        self
    }
    pub fn residue(self, chain_id: char, residue_number: isize) -> Self {
        self.target(ResidueTarget::Residue(ResidueSpecifier {
            chain_id,
            residue_number,
        }))
    }
    pub fn convention(mut self, convention: BackboneConvention) -> Self {
        self.convention = Some(convention);
        self
    }

    pub fn build(self) -> Result<ExtractionConfig, ConfigError> {
        Ok(ExtractionConfig {
            phi: Self::finish_selector(DihedralKind::Phi, self.phi)?,
            psi: Self::finish_selector(DihedralKind::Psi, self.psi)?,
            target: self.target.unwrap_or_default(),
            convention: self.convention.unwrap_or_default(),
        })
    }

    fn finish_selector(
        kind: DihedralKind,
        input: Option<SelectorInput>,
    ) -> Result<AtomSelector, ConfigError> {
        match input {
            None => Ok(AtomSelector::Default),
            Some(SelectorInput::Parsed(selector)) => Ok(selector),
            Some(SelectorInput::Names(names)) => AtomSelector::explicit(&names)
                .map_err(|source| ConfigError::InvalidSelector { kind, source }),
        }
    }
}
