use super::defaults::DefaultsConfig;
use super::file::{FileConfig, FileFigureConfig, FileResidueSpecifier, FileSelectionConfig};
use super::models::{PlotAppConfig, ScanAppConfig};
use crate::cli::{PlotArgs, ScanArgs};
use crate::error::{CliError, Result};
use ramakit::core::naming::convention::BackboneConvention;
use ramakit::engine::config as core_config;
use ramakit::plot::presenter::PresenterStyle;
use ramakit::plot::svg::SvgOptions;
use ramakit::workflows::scan::{AngleRange, ScanGrid};
use std::path::Path;
use std::str::FromStr;

pub fn build_scan_config(args: &ScanArgs) -> Result<ScanAppConfig> {
    let defaults = DefaultsConfig::default();
    let mut file_config = load_file_config(args.config.as_deref(), &args.set_values)?;

    let scan_file = file_config.scan.take().unwrap_or_default();
    let residue = args
        .residue
        .clone()
        .or(scan_file.residue)
        .unwrap_or(defaults.scan_residue);

    let phi = merge_range(
        "phi",
        (args.phi_start, args.phi_end, args.phi_steps),
        (scan_file.phi_start, scan_file.phi_end, scan_file.phi_steps),
        defaults.phi_range,
    )?;
    let psi = merge_range(
        "psi",
        (args.psi_start, args.psi_end, args.psi_steps),
        (scan_file.psi_start, scan_file.psi_end, scan_file.psi_steps),
        defaults.psi_range,
    )?;

    let extraction = build_extraction_config(&file_config)?;
    let (style, svg) = merge_figure(file_config.figure.take(), defaults.style, defaults.svg);

    Ok(ScanAppConfig {
        output_prefix: args.output.clone(),
        residue,
        grid: ScanGrid { phi, psi },
        extraction,
        style,
        svg,
    })
}

pub fn build_plot_config(args: &PlotArgs) -> Result<PlotAppConfig> {
    let defaults = DefaultsConfig::default();
    let mut file_config = load_file_config(args.config.as_deref(), &args.set_values)?;
    let (style, svg) = merge_figure(file_config.figure.take(), defaults.style, defaults.svg);

    Ok(PlotAppConfig {
        input_path: args.input.clone(),
        output_path: args.output.clone(),
        radians: args.radians,
        style,
        svg,
    })
}

fn load_file_config(path: Option<&Path>, set_values: &[String]) -> Result<FileConfig> {
    let file_config = if let Some(config_path) = path {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };
    apply_set_values(file_config, set_values)
}

type RangeParts<S> = (Option<f64>, Option<f64>, Option<S>);

fn merge_range(
    axis: &str,
    cli: RangeParts<u32>,
    file: RangeParts<usize>,
    default: AngleRange,
) -> Result<AngleRange> {
    let steps = cli
        .2
        .map(|s| s as usize)
        .or(file.2)
        .unwrap_or(default.steps);
    if steps == 0 {
        return Err(CliError::Config(format!(
            "`scan.{}-steps` must be at least 1",
            axis
        )));
    }
    Ok(AngleRange::new(
        cli.0.or(file.0).unwrap_or(default.start_deg),
        cli.1.or(file.1).unwrap_or(default.end_deg),
        steps,
    ))
}

fn build_extraction_config(file_config: &FileConfig) -> Result<core_config::ExtractionConfig> {
    let selection = file_config.selection.clone().unwrap_or_default();
    let FileSelectionConfig {
        phi_atoms,
        psi_atoms,
        residue,
        convention,
    } = selection;

    let mut builder = core_config::ExtractionConfigBuilder::new();
    if let Some(atoms) = phi_atoms {
        builder = builder.phi_atoms(atoms);
    }
    if let Some(atoms) = psi_atoms {
        builder = builder.psi_atoms(atoms);
    }
    if let Some(residue) = residue {
        builder = builder.target(core_config::ResidueTarget::Residue(residue.into()));
    }
    if let Some(path) = convention {
        let resolved = file_config.resolve_path(&path);
        builder = builder.convention(BackboneConvention::load(&resolved)?);
    }
    Ok(builder.build()?)
}

fn merge_figure(
    file_val: Option<FileFigureConfig>,
    default_style: PresenterStyle,
    default_svg: SvgOptions,
) -> (PresenterStyle, SvgOptions) {
    let Some(file_val) = file_val else {
        return (default_style, default_svg);
    };
    let style = PresenterStyle {
        title: file_val.title.or(default_style.title),
        marker_radius: file_val.marker_radius.unwrap_or(default_style.marker_radius),
        scatter_color: file_val.scatter_color.unwrap_or(default_style.scatter_color),
        phi_color: file_val.phi_color.unwrap_or(default_style.phi_color),
        psi_color: file_val.psi_color.unwrap_or(default_style.psi_color),
    };
    let svg = SvgOptions {
        width: file_val.width.unwrap_or(default_svg.width),
        height: file_val.height.unwrap_or(default_svg.height),
        ..default_svg
    };
    (style, svg)
}

fn parse_value<T: FromStr>(key: &str, value_str: &str, kind: &str) -> Result<T> {
    value_str.trim().parse().map_err(|_| {
        CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value_str))
    })
}

fn parse_atom_list(value_str: &str) -> Vec<String> {
    value_str
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_residue_specifier(key: &str, value_str: &str) -> Result<FileResidueSpecifier> {
    let invalid = || {
        CliError::Config(format!(
            "Invalid residue for {}: '{}'. Expected CHAIN:NUMBER (e.g. A:2).",
            key, value_str
        ))
    };
    let (chain, number) = value_str.trim().split_once(':').ok_or_else(invalid)?;
    let mut chars = chain.chars();
    let chain_id = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => return Err(invalid()),
    };
    Ok(FileResidueSpecifier {
        chain_id,
        residue_number: number.trim().parse().map_err(|_| invalid())?,
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    if set_values.is_empty() {
        return Ok(config);
    }
    for kv_pair in set_values {
        let parts: Vec<_> = kv_pair.splitn(2, '=').collect();
        if parts.len() != 2 {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        }
        let key = parts[0].trim();
        let value_str = parts[1];

        match key {
            "selection.phi-atoms" => {
                config
                    .selection
                    .get_or_insert_with(Default::default)
                    .phi_atoms = Some(parse_atom_list(value_str));
            }
            "selection.psi-atoms" => {
                config
                    .selection
                    .get_or_insert_with(Default::default)
                    .psi_atoms = Some(parse_atom_list(value_str));
            }
            "selection.residue" => {
                config.selection.get_or_insert_with(Default::default).residue =
                    Some(parse_residue_specifier(key, value_str)?);
            }
            "selection.convention" => {
                config
                    .selection
                    .get_or_insert_with(Default::default)
                    .convention = Some(value_str.trim().into());
            }
            "scan.residue" => {
                config.scan.get_or_insert_with(Default::default).residue =
                    Some(value_str.trim().to_string());
            }
            "scan.phi-start" => {
                config.scan.get_or_insert_with(Default::default).phi_start =
                    Some(parse_value(key, value_str, "float")?);
            }
            "scan.phi-end" => {
                config.scan.get_or_insert_with(Default::default).phi_end =
                    Some(parse_value(key, value_str, "float")?);
            }
            "scan.phi-steps" => {
                config.scan.get_or_insert_with(Default::default).phi_steps =
                    Some(parse_value(key, value_str, "integer")?);
            }
            "scan.psi-start" => {
                config.scan.get_or_insert_with(Default::default).psi_start =
                    Some(parse_value(key, value_str, "float")?);
            }
            "scan.psi-end" => {
                config.scan.get_or_insert_with(Default::default).psi_end =
                    Some(parse_value(key, value_str, "float")?);
            }
            "scan.psi-steps" => {
                config.scan.get_or_insert_with(Default::default).psi_steps =
                    Some(parse_value(key, value_str, "integer")?);
            }
            "figure.title" => {
                config.figure.get_or_insert_with(Default::default).title =
                    Some(value_str.to_string());
            }
            "figure.width" => {
                config.figure.get_or_insert_with(Default::default).width =
                    Some(parse_value(key, value_str, "integer")?);
            }
            "figure.height" => {
                config.figure.get_or_insert_with(Default::default).height =
                    Some(parse_value(key, value_str, "integer")?);
            }
            "figure.marker-radius" => {
                config
                    .figure
                    .get_or_insert_with(Default::default)
                    .marker_radius = Some(parse_value(key, value_str, "float")?);
            }
            "figure.scatter-color" => {
                config
                    .figure
                    .get_or_insert_with(Default::default)
                    .scatter_color = Some(value_str.trim().to_string());
            }
            "figure.phi-color" => {
                config.figure.get_or_insert_with(Default::default).phi_color =
                    Some(value_str.trim().to_string());
            }
            "figure.psi-color" => {
                config.figure.get_or_insert_with(Default::default).psi_color =
                    Some(value_str.trim().to_string());
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;
    use ramakit::core::naming::reference::AtomRef;
    use ramakit::engine::selection::AtomSelector;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::{TempDir, tempdir};

    static TEST_DIR: Lazy<TempDir> = Lazy::new(|| tempdir().expect("Failed to create temp dir"));

    fn write_config(name: &str, content: &str) -> PathBuf {
        let path = TEST_DIR.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn base_scan_args() -> ScanArgs {
        ScanArgs {
            output: PathBuf::from("out/scan"),
            config: None,
            residue: None,
            phi_start: None,
            phi_end: None,
            phi_steps: None,
            psi_start: None,
            psi_end: None,
            psi_steps: None,
            set_values: vec![],
        }
    }

    #[test]
    fn scan_config_falls_back_to_defaults() {
        let app = build_scan_config(&base_scan_args()).expect("build ok");
        let defaults = DefaultsConfig::default();

        assert_eq!(app.residue, defaults.scan_residue);
        assert_eq!(app.grid.phi, defaults.phi_range);
        assert_eq!(app.grid.psi, defaults.psi_range);
        assert_eq!(app.extraction, core_config::ExtractionConfig::default());
        assert_eq!(app.style, defaults.style);
        assert_eq!(app.svg.width, defaults.svg.width);
        assert_eq!(app.output_prefix, PathBuf::from("out/scan"));
    }

    #[test]
    fn scan_config_reads_file_and_merges() {
        let path = write_config(
            "scan.toml",
            r#"
            [selection]
            phi-atoms = ["-C", "N", "CA", "C"]
            residue = { chain-id = "A", residue-number = 2 }

            [scan]
            residue = "GLY"
            phi-start = -90.0
            phi-end = 90.0
            phi-steps = 7

            [figure]
            title = "Glycine scan"
            width = 900
            marker-radius = 1.5
            "#,
        );
        let mut args = base_scan_args();
        args.config = Some(path);

        let app = build_scan_config(&args).expect("build ok");
        assert_eq!(app.residue, "GLY");
        assert_eq!(app.grid.phi, AngleRange::new(-90.0, 90.0, 7));
        assert_eq!(app.grid.psi, DefaultsConfig::default().psi_range);
        assert!(matches!(app.extraction.phi, AtomSelector::Explicit(_)));
        assert_eq!(app.extraction.psi, AtomSelector::Default);
        assert_eq!(
            app.extraction.target,
            core_config::ResidueTarget::Residue(core_config::ResidueSpecifier {
                chain_id: 'A',
                residue_number: 2
            })
        );
        assert_eq!(app.style.title.as_deref(), Some("Glycine scan"));
        assert_eq!(app.style.marker_radius, 1.5);
        assert_eq!(app.svg.width, 900);
        assert_eq!(app.svg.height, DefaultsConfig::default().svg.height);
    }

    #[test]
    fn precedence_is_cli_then_set_then_file() {
        let path = write_config(
            "precedence.toml",
            r#"
            [scan]
            residue = "GLY"
            phi-steps = 4
            psi-steps = 5
            psi-start = 10.0
            "#,
        );
        let mut args = base_scan_args();
        args.config = Some(path);
        args.set_values = vec![
            "scan.phi-steps=8".to_string(),
            "scan.psi-steps=9".to_string(),
            "scan.residue=SER".to_string(),
        ];
        args.phi_steps = Some(16);

        let app = build_scan_config(&args).expect("build ok");
        assert_eq!(app.grid.phi.steps, 16);
        assert_eq!(app.grid.psi.steps, 9);
        assert_eq!(app.grid.psi.start_deg, 10.0);
        assert_eq!(app.residue, "SER");

        args.residue = Some("VAL".to_string());
        assert_eq!(build_scan_config(&args).unwrap().residue, "VAL");
    }

    #[test]
    fn set_values_cover_selection_keys() {
        let mut args = base_scan_args();
        args.set_values = vec![
            "selection.psi-atoms=N, CA, C, +N".to_string(),
            "selection.residue=B:7".to_string(),
        ];

        let app = build_scan_config(&args).expect("build ok");
        let AtomSelector::Explicit(atoms) = &app.extraction.psi else {
            panic!("expected explicit psi selector");
        };
        assert_eq!(atoms[3], "+N".parse::<AtomRef>().unwrap());
        assert_eq!(
            app.extraction.target,
            core_config::ResidueTarget::Residue(core_config::ResidueSpecifier {
                chain_id: 'B',
                residue_number: 7
            })
        );
    }

    #[test]
    fn invalid_set_values_are_rejected() {
        for bad in [
            "scan.phi-steps",
            "scan.phi-steps=many",
            "scan.unknown=1",
            "selection.residue=AB:1",
            "scan.psi-steps=0",
        ] {
            let mut args = base_scan_args();
            args.set_values = vec![bad.to_string()];
            assert!(
                matches!(build_scan_config(&args), Err(CliError::Config(_))),
                "expected config error for '{}'",
                bad
            );
        }
    }

    #[test]
    fn invalid_selector_fails_at_build() {
        let mut args = base_scan_args();
        args.set_values = vec!["selection.phi-atoms=N CA C".to_string()];
        assert!(matches!(
            build_scan_config(&args),
            Err(CliError::Selector(_))
        ));
    }

    #[test]
    fn unknown_file_keys_are_rejected() {
        let path = write_config("unknown.toml", "[scan]\nresolution = 5\n");
        let mut args = base_scan_args();
        args.config = Some(path);
        assert!(matches!(
            build_scan_config(&args),
            Err(CliError::FileParsing { .. })
        ));
    }

    #[test]
    fn convention_path_is_relative_to_config_file() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("naming.toml"),
            "[residues.NME]\nnitrogen = \"NT\"\n",
        )
        .unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "[selection]\nconvention = \"naming.toml\"\n").unwrap();

        let mut args = base_scan_args();
        args.config = Some(config_path);
        let app = build_scan_config(&args).expect("build ok");
        assert_eq!(
            app.extraction.convention.residues["NME"].nitrogen.as_deref(),
            Some("NT")
        );
    }

    #[test]
    fn plot_config_merges_figure_settings() {
        let path = write_config("plot.toml", "[figure]\nheight = 400\nphi-color = \"red\"\n");
        let args = PlotArgs {
            input: PathBuf::from("angles.csv"),
            output: PathBuf::from("fig.svg"),
            config: Some(path),
            radians: true,
            set_values: vec!["figure.title=Trajectory".to_string()],
        };

        let app = build_plot_config(&args).expect("build ok");
        assert!(app.radians);
        assert_eq!(app.svg.height, 400);
        assert_eq!(app.style.phi_color, "red");
        assert_eq!(app.style.title.as_deref(), Some("Trajectory"));
        assert_eq!(app.input_path, PathBuf::from("angles.csv"));
    }
}
