use super::reference::ResidueOffset;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// The backbone dihedrals measured by the extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DihedralKind {
    /// C(i-1) - N(i) - CA(i) - C(i)
    Phi,
    /// N(i) - CA(i) - C(i) - N(i+1)
    Psi,
}

impl fmt::Display for DihedralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DihedralKind::Phi => "phi",
            DihedralKind::Psi => "psi",
        })
    }
}

/// The backbone atoms a default selector looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackboneRole {
    Nitrogen,
    AlphaCarbon,
    CarbonylCarbon,
}

impl DihedralKind {
    /// The four backbone positions defining this dihedral under the standard naming.
    pub fn backbone_chain(&self) -> [(ResidueOffset, BackboneRole); 4] {
        use BackboneRole::*;
        use ResidueOffset::*;
        match self {
            DihedralKind::Phi => [
                (Previous, CarbonylCarbon),
                (Current, Nitrogen),
                (Current, AlphaCarbon),
                (Current, CarbonylCarbon),
            ],
            DihedralKind::Psi => [
                (Current, Nitrogen),
                (Current, AlphaCarbon),
                (Current, CarbonylCarbon),
                (Next, Nitrogen),
            ],
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct ResidueNaming {
    pub nitrogen: Option<String>,
    pub alpha_carbon: Option<String>,
    pub carbonyl_carbon: Option<String>,
}

/// Atom naming rules used to detect backbone atoms when no explicit selector
/// is given.
///
/// The base names apply to every residue; `residues` overrides them per
/// residue name, which is how topologies with non-standard terminal naming
/// are described without falling back to explicit selectors.
///
/// ```toml
/// nitrogen = "N"
/// alpha-carbon = "CA"
/// carbonyl-carbon = "C"
///
/// [residues.NTER]
/// nitrogen = "NT"
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct BackboneConvention {
    #[serde(default = "default_nitrogen")]
    pub nitrogen: String,
    #[serde(default = "default_alpha_carbon")]
    pub alpha_carbon: String,
    #[serde(default = "default_carbonyl_carbon")]
    pub carbonyl_carbon: String,
    #[serde(default)]
    pub residues: HashMap<String, ResidueNaming>,
}

fn default_nitrogen() -> String {
    "N".to_string()
}

fn default_alpha_carbon() -> String {
    "CA".to_string()
}

fn default_carbonyl_carbon() -> String {
    "C".to_string()
}

impl Default for BackboneConvention {
    fn default() -> Self {
        Self {
            nitrogen: default_nitrogen(),
            alpha_carbon: default_alpha_carbon(),
            carbonyl_carbon: default_carbonyl_carbon(),
            residues: HashMap::new(),
        }
    }
}

impl BackboneConvention {
    pub fn load(path: &Path) -> Result<Self, ConventionLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConventionLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConventionLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }

    /// Returns the atom name playing `role` in a residue called `residue_name`.
    pub fn atom_name(&self, residue_name: &str, role: BackboneRole) -> &str {
        let override_name = self.residues.get(residue_name).and_then(|naming| match role {
            BackboneRole::Nitrogen => naming.nitrogen.as_deref(),
            BackboneRole::AlphaCarbon => naming.alpha_carbon.as_deref(),
            BackboneRole::CarbonylCarbon => naming.carbonyl_carbon.as_deref(),
        });
        override_name.unwrap_or(match role {
            BackboneRole::Nitrogen => self.nitrogen.as_str(),
            BackboneRole::AlphaCarbon => self.alpha_carbon.as_str(),
            BackboneRole::CarbonylCarbon => self.carbonyl_carbon.as_str(),
        })
    }
}

#[derive(Debug, Error)]
pub enum ConventionLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_convention_uses_standard_backbone_names() {
        let convention = BackboneConvention::default();
        assert_eq!(convention.atom_name("ALA", BackboneRole::Nitrogen), "N");
        assert_eq!(convention.atom_name("ALA", BackboneRole::AlphaCarbon), "CA");
        assert_eq!(convention.atom_name("ACE", BackboneRole::CarbonylCarbon), "C");
    }

    #[test]
    fn backbone_chains_follow_phi_and_psi_definitions() {
        let phi = DihedralKind::Phi.backbone_chain();
        assert_eq!(phi[0], (ResidueOffset::Previous, BackboneRole::CarbonylCarbon));
        assert_eq!(phi[3], (ResidueOffset::Current, BackboneRole::CarbonylCarbon));

        let psi = DihedralKind::Psi.backbone_chain();
        assert_eq!(psi[0], (ResidueOffset::Current, BackboneRole::Nitrogen));
        assert_eq!(psi[3], (ResidueOffset::Next, BackboneRole::Nitrogen));
    }

    #[test]
    fn load_reads_base_names_and_residue_overrides() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
alpha-carbon = "CA"

[residues.NME]
nitrogen = "NT"
"#
        )
        .unwrap();

        let convention = BackboneConvention::load(file.path()).unwrap();
        assert_eq!(convention.atom_name("ALA", BackboneRole::Nitrogen), "N");
        assert_eq!(convention.atom_name("NME", BackboneRole::Nitrogen), "NT");
        assert_eq!(convention.atom_name("NME", BackboneRole::AlphaCarbon), "CA");
    }

    #[test]
    fn load_rejects_unknown_fields() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "beta-carbon = \"CB\"\n").unwrap();
        assert!(matches!(
            BackboneConvention::load(file.path()),
            Err(ConventionLoadError::Toml { .. })
        ));
    }

    #[test]
    fn load_reports_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let result = BackboneConvention::load(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(ConventionLoadError::Io { .. })));
    }

    #[test]
    fn dihedral_kind_displays_lowercase_names() {
        assert_eq!(DihedralKind::Phi.to_string(), "phi");
        assert_eq!(DihedralKind::Psi.to_string(), "psi");
    }
}
