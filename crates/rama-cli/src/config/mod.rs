mod builder;
mod defaults;
mod file;
mod models;

pub use builder::{build_plot_config, build_scan_config};
pub use models::{PlotAppConfig, ScanAppConfig};
