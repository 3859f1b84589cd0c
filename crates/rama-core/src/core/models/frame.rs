use nalgebra::Point3;

/// One snapshot of atomic coordinates, in Angstroms, ordered by atom frame index.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    positions: Vec<Point3<f64>>,
}

impl Frame {
    pub fn new(positions: Vec<Point3<f64>>) -> Self {
        Self { positions }
    }

    pub fn positions(&self) -> &[Point3<f64>] {
        &self.positions
    }

    pub fn position(&self, index: usize) -> Option<&Point3<f64>> {
        self.positions.get(index)
    }

    pub fn atom_count(&self) -> usize {
        self.positions.len()
    }
}

impl From<Vec<Point3<f64>>> for Frame {
    fn from(positions: Vec<Point3<f64>>) -> Self {
        Self::new(positions)
    }
}

impl AsRef<Frame> for Frame {
    fn as_ref(&self) -> &Frame {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_exposes_positions_by_index() {
        let frame = Frame::new(vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 2.0, 3.0)]);
        assert_eq!(frame.atom_count(), 2);
        assert_eq!(frame.position(1), Some(&Point3::new(1.0, 2.0, 3.0)));
        assert_eq!(frame.position(2), None);
    }

    #[test]
    fn frame_converts_from_positions() {
        let frame = Frame::from(vec![Point3::origin()]);
        assert_eq!(frame.positions(), &[Point3::origin()]);
    }
}
