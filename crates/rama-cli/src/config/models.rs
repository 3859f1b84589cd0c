use ramakit::engine::config::ExtractionConfig;
use ramakit::plot::presenter::PresenterStyle;
use ramakit::plot::svg::SvgOptions;
use ramakit::workflows::scan::ScanGrid;
use std::path::PathBuf;

pub struct ScanAppConfig {
    pub output_prefix: PathBuf,
    pub residue: String,
    pub grid: ScanGrid,
    pub extraction: ExtractionConfig,
    pub style: PresenterStyle,
    pub svg: SvgOptions,
}

pub struct PlotAppConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub radians: bool,
    pub style: PresenterStyle,
    pub svg: SvgOptions,
}
