use ramakit::plot::presenter::PresenterStyle;
use ramakit::plot::svg::SvgOptions;
use ramakit::workflows::scan::AngleRange;

pub struct DefaultsConfig {
    pub scan_residue: String,
    pub phi_range: AngleRange,
    pub psi_range: AngleRange,
    pub style: PresenterStyle,
    pub svg: SvgOptions,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            scan_residue: "ALA".to_string(),
            phi_range: AngleRange::default(),
            psi_range: AngleRange::default(),
            style: PresenterStyle::default(),
            svg: SvgOptions::default(),
        }
    }
}
