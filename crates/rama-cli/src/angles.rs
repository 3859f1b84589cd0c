use crate::error::{CliError, Result};
use anyhow::anyhow;
use csv::StringRecord;
use ramakit::AngleSeries;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// One row of a written angle CSV file, in degrees.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AngleRecord {
    pub frame: Option<usize>,
    pub phi_deg: f64,
    pub psi_deg: f64,
}

/// One row of an angle CSV file being read. The unit comes from the header.
#[derive(Debug, Deserialize)]
struct AngleRow {
    #[serde(alias = "phi_deg", alias = "phi_rad")]
    phi: f64,
    #[serde(alias = "psi_deg", alias = "psi_rad")]
    psi: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AngleUnit {
    Degrees,
    Radians,
}

impl AngleUnit {
    fn series(self, values: Vec<f64>) -> AngleSeries {
        match self {
            AngleUnit::Degrees => AngleSeries::from_degrees(values),
            AngleUnit::Radians => AngleSeries::from_radians(values),
        }
    }
}

/// Writes `frame,phi_deg,psi_deg` rows, one per frame.
pub fn write_angles_csv(path: &Path, phi: &AngleSeries, psi: &AngleSeries) -> Result<()> {
    if phi.len() != psi.len() {
        return Err(CliError::Argument(format!(
            "Cannot write angle series of different lengths ({} vs {})",
            phi.len(),
            psi.len()
        )));
    }
    let mut writer = csv::Writer::from_path(path)?;
    for (frame, (phi_deg, psi_deg)) in phi.degrees().into_iter().zip(psi.degrees()).enumerate() {
        writer.serialize(AngleRecord {
            frame: Some(frame),
            phi_deg,
            psi_deg,
        })?;
    }
    writer.flush()?;
    debug!("Wrote {} angle rows to {:?}", phi.len(), path);
    Ok(())
}

/// Reads φ and ψ series from a CSV file.
///
/// Columns named `phi_deg`/`phi_rad` (and the ψ equivalents) carry their own
/// unit. Bare `phi`/`psi` columns are degrees, or radians when `radians` is
/// set. Rows are taken in file order; a `frame` column, when present, is not
/// used for reordering. A file without data rows is rejected.
pub fn read_angles_csv(path: &Path, radians: bool) -> Result<(AngleSeries, AngleSeries)> {
    let parse_error = |source: anyhow::Error| CliError::FileParsing {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| parse_error(e.into()))?;
    let headers = reader.headers().map_err(|e| parse_error(e.into()))?.clone();
    let phi_unit = column_unit(&headers, "phi", radians).map_err(parse_error)?;
    let psi_unit = column_unit(&headers, "psi", radians).map_err(parse_error)?;

    let mut phi = Vec::new();
    let mut psi = Vec::new();
    for result in reader.deserialize::<AngleRow>() {
        let row = result.map_err(|e| parse_error(e.into()))?;
        phi.push(row.phi);
        psi.push(row.psi);
    }
    if phi.is_empty() {
        return Err(parse_error(anyhow!("no angle rows after the header")));
    }
    debug!(
        "Read {} angle rows from {:?} (phi in {:?}, psi in {:?})",
        phi.len(),
        path,
        phi_unit,
        psi_unit
    );

    Ok((phi_unit.series(phi), psi_unit.series(psi)))
}

fn column_unit(headers: &StringRecord, angle: &str, radians: bool) -> anyhow::Result<AngleUnit> {
    let has = |name: String| headers.iter().any(|h| h == name);
    if has(format!("{}_rad", angle)) {
        Ok(AngleUnit::Radians)
    } else if has(format!("{}_deg", angle)) {
        if radians {
            Err(anyhow!(
                "column '{}_deg' is in degrees but radians were requested",
                angle
            ))
        } else {
            Ok(AngleUnit::Degrees)
        }
    } else if has(angle.to_string()) {
        Ok(if radians {
            AngleUnit::Radians
        } else {
            AngleUnit::Degrees
        })
    } else {
        Err(anyhow!(
            "missing a {0}, {0}_deg or {0}_rad column",
            angle
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn written_file_has_expected_header_and_reads_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("angles.csv");
        let phi = AngleSeries::from_degrees([-60.0, 75.5]);
        let psi = AngleSeries::from_degrees([-45.0, 180.0]);

        write_angles_csv(&path, &phi, &psi).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("frame,phi_deg,psi_deg\n"));
        assert_eq!(content.lines().count(), 3);

        let (phi_back, psi_back) = read_angles_csv(&path, false).unwrap();
        for (a, b) in phi.iter().zip(phi_back.iter()).chain(psi.iter().zip(psi_back.iter())) {
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn reads_plain_phi_psi_columns_in_radians() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("radians.csv");
        fs::write(&path, "phi,psi\n1.0,-0.5\n0.25,3.0\n").unwrap();

        let (phi, psi) = read_angles_csv(&path, true).unwrap();
        assert_eq!(phi.radians(), &[1.0, 0.25]);
        assert_eq!(psi.radians(), &[-0.5, 3.0]);
    }

    #[test]
    fn malformed_rows_report_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "phi,psi\n1.0,abc\n").unwrap();

        let err = read_angles_csv(&path, false).unwrap_err();
        assert!(matches!(err, CliError::FileParsing { .. }));
        assert!(err.to_string().contains("bad.csv"));
    }

    #[test]
    fn radian_headers_are_converted_without_the_flag() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rad.csv");
        fs::write(&path, "phi_rad,psi_rad\n1.5707963,3.1415926\n").unwrap();

        let (phi, psi) = read_angles_csv(&path, false).unwrap();
        assert!((phi.degrees()[0] - 90.0).abs() < 1e-4);
        assert!((psi.degrees()[0] - 180.0).abs() < 1e-4);
    }

    #[test]
    fn degree_headers_conflict_with_radians_flag() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("deg.csv");
        fs::write(&path, "frame,phi_deg,psi_deg\n0,-60,-45\n").unwrap();

        let err = read_angles_csv(&path, true).unwrap_err();
        assert!(matches!(err, CliError::FileParsing { .. }));
        assert!(err.to_string().contains("phi_deg"));
    }

    #[test]
    fn missing_angle_column_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cols.csv");
        fs::write(&path, "frame,phi_deg\n0,-60\n").unwrap();

        let err = read_angles_csv(&path, false).unwrap_err();
        assert!(matches!(err, CliError::FileParsing { .. }));
    }

    #[test]
    fn header_only_file_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        fs::write(&path, "frame,phi_deg,psi_deg\n").unwrap();

        let err = read_angles_csv(&path, false).unwrap_err();
        assert!(matches!(err, CliError::FileParsing { .. }));
        assert!(err.to_string().contains("empty.csv"));
        assert!(err.to_string().contains("no angle rows"));
    }

    #[test]
    fn mismatched_series_are_not_written() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("never.csv");
        let result = write_angles_csv(
            &path,
            &AngleSeries::from_degrees([0.0]),
            &AngleSeries::default(),
        );
        assert!(matches!(result, Err(CliError::Argument(_))));
        assert!(!path.exists());
    }
}
