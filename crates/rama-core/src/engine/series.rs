/// An ordered series of angles in radians, one value per trajectory frame.
///
/// Values are stored exactly as measured, in (−π, π]. Degree conversion is
/// provided for display and never changes the stored values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AngleSeries {
    values: Vec<f64>,
}

impl AngleSeries {
    pub fn from_radians(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn from_degrees<I: IntoIterator<Item = f64>>(values: I) -> Self {
        Self {
            values: values.into_iter().map(f64::to_radians).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn radians(&self) -> &[f64] {
        &self.values
    }

    pub fn get(&self, frame: usize) -> Option<f64> {
        self.values.get(frame).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    pub fn degrees(&self) -> Vec<f64> {
        self.values.iter().map(|v| v.to_degrees()).collect()
    }
}

impl FromIterator<f64> for AngleSeries {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn degrees_do_not_modify_stored_radians() {
        let series = AngleSeries::from_radians(vec![0.0, PI / 2.0, -PI]);
        let degrees = series.degrees();

        assert!((degrees[1] - 90.0).abs() < 1e-12);
        assert!((degrees[2] + 180.0).abs() < 1e-12);
        assert_eq!(series.radians(), &[0.0, PI / 2.0, -PI]);
    }

    #[test]
    fn from_degrees_converts_to_radians() {
        let series = AngleSeries::from_degrees([45.0, -90.0]);
        assert_eq!(series.len(), 2);
        assert!((series.get(0).unwrap() - PI / 4.0).abs() < 1e-12);
        assert!((series.get(1).unwrap() + PI / 2.0).abs() < 1e-12);
        assert_eq!(series.get(2), None);
    }

    #[test]
    fn collects_from_iterator() {
        let series: AngleSeries = (0..3).map(|i| i as f64).collect();
        assert_eq!(series.iter().collect::<Vec<_>>(), vec![0.0, 1.0, 2.0]);
        assert!(!series.is_empty());
        assert!(AngleSeries::default().is_empty());
    }
}
