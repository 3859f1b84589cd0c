pub mod plot;
pub mod scan;

use crate::error::Result;
use std::path::Path;
use tracing::debug;

/// Writes `content` to `path`, creating missing parent directories.
pub(crate) fn write_output(path: &Path, content: &str) -> Result<()> {
    ensure_parent_dir(path)?;
    std::fs::write(path, content)?;
    debug!("Wrote {} bytes to {:?}", content.len(), path);
    Ok(())
}

pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}
