use super::write_output;
use crate::angles::read_angles_csv;
use crate::cli::PlotArgs;
use crate::config::build_plot_config;
use crate::error::Result;
use ramakit::plot::presenter::AnglePresenter;
use tracing::info;

pub fn run(args: PlotArgs) -> Result<()> {
    let config = build_plot_config(&args)?;

    info!("Reading angles from {:?}", config.input_path);
    let (phi, psi) = read_angles_csv(&config.input_path, config.radians)?;

    let figure = AnglePresenter::with_style(config.style).present(&phi, &psi)?;
    write_output(&config.output_path, &figure.render_svg(&config.svg)?)?;

    println!(
        "✓ Ramachandran figure of {} frames written to {}",
        phi.len(),
        config.output_path.display()
    );
    Ok(())
}
