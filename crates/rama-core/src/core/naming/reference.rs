use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which residue of the chain an atom reference points into, relative to the
/// residue being measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResidueOffset {
    /// The preceding residue (`-` prefix, e.g. `-C`).
    Previous,
    /// The measured residue itself (no prefix).
    #[default]
    Current,
    /// The following residue (`+` prefix, e.g. `+N`).
    Next,
}

impl ResidueOffset {
    pub fn delta(&self) -> isize {
        match self {
            ResidueOffset::Previous => -1,
            ResidueOffset::Current => 0,
            ResidueOffset::Next => 1,
        }
    }
}

/// A reference to one atom by name, optionally in a neighbouring residue.
///
/// The textual form follows residue-topology files: a bare name (`CA`) refers
/// to the measured residue, `-C` to the previous residue and `+N` to the next.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct AtomRef {
    pub offset: ResidueOffset,
    pub name: String,
}

impl AtomRef {
    pub fn new(offset: ResidueOffset, name: &str) -> Self {
        Self {
            offset,
            name: name.to_string(),
        }
    }

    pub fn current(name: &str) -> Self {
        Self::new(ResidueOffset::Current, name)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseAtomRefError {
    #[error("Atom reference is empty")]
    Empty,
    #[error("Atom reference '{0}' has a residue prefix but no atom name")]
    MissingName(String),
    #[error("Atom reference '{0}' contains whitespace")]
    Whitespace(String),
}

impl FromStr for AtomRef {
    type Err = ParseAtomRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseAtomRefError::Empty);
        }
        let (offset, name) = match trimmed.as_bytes()[0] {
            b'-' => (ResidueOffset::Previous, &trimmed[1..]),
            b'+' => (ResidueOffset::Next, &trimmed[1..]),
            _ => (ResidueOffset::Current, trimmed),
        };
        if name.is_empty() {
            return Err(ParseAtomRefError::MissingName(trimmed.to_string()));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(ParseAtomRefError::Whitespace(trimmed.to_string()));
        }
        Ok(Self::new(offset, name))
    }
}

impl fmt::Display for AtomRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.offset {
            ResidueOffset::Previous => "-",
            ResidueOffset::Current => "",
            ResidueOffset::Next => "+",
        };
        write!(f, "{}{}", prefix, self.name)
    }
}
