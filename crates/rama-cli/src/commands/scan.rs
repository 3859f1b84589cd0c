use super::{ensure_parent_dir, write_output};
use crate::angles::write_angles_csv;
use crate::cli::ScanArgs;
use crate::config::build_scan_config;
use crate::error::Result;
use crate::utils::progress::FrameProgressBar;
use ramakit::plot::presenter::AnglePresenter;
use ramakit::workflows;
use std::path::{Path, PathBuf};
use tracing::info;

pub fn run(args: ScanArgs, show_progress: bool) -> Result<()> {
    let config = build_scan_config(&args)?;
    info!(
        "Scanning ACE-{}-NME over {} x {} (phi, psi) values",
        config.residue, config.grid.phi.steps, config.grid.psi.steps
    );

    let progress = FrameProgressBar::new(show_progress);
    let reporter = progress.reporter();
    let presenter = AnglePresenter::with_style(config.style.clone());

    let result = workflows::scan::run(
        &config.residue,
        &config.grid,
        &config.extraction,
        &presenter,
        &reporter,
    )?;
    progress.finish();

    let csv_path = with_extension_suffix(&config.output_prefix, "csv");
    let svg_path = with_extension_suffix(&config.output_prefix, "svg");

    ensure_parent_dir(&csv_path)?;
    write_angles_csv(&csv_path, &result.phi, &result.psi)?;
    write_output(&svg_path, &result.figure.render_svg(&config.svg)?)?;

    println!(
        "✓ {} frames written to {} and {}",
        result.phi.len(),
        csv_path.display(),
        svg_path.display()
    );
    Ok(())
}

/// Appends `.ext` to a path prefix, keeping any dots already in it.
fn with_extension_suffix(prefix: &Path, ext: &str) -> PathBuf {
    let mut name = prefix.as_os_str().to_owned();
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}
