use super::frame::Frame;
use super::topology::Topology;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrajectoryError {
    #[error("Frame {frame} has {found} atoms but the topology defines {expected}")]
    FrameSizeMismatch {
        frame: usize,
        expected: usize,
        found: usize,
    },
}

/// An ordered sequence of frames sharing one topology.
///
/// Every frame holds exactly [`Topology::atom_count`] coordinates; this is
/// checked on construction and on every [`Trajectory::push_frame`].
#[derive(Debug, Clone)]
pub struct Trajectory {
    topology: Topology,
    frames: Vec<Frame>,
}

impl Trajectory {
    pub fn new(topology: Topology, frames: Vec<Frame>) -> Result<Self, TrajectoryError> {
        for (index, frame) in frames.iter().enumerate() {
            check_frame_size(&topology, index, frame)?;
        }
        Ok(Self { topology, frames })
    }

    /// Creates a trajectory with no frames yet.
    pub fn empty(topology: Topology) -> Self {
        Self {
            topology,
            frames: Vec::new(),
        }
    }

    pub fn push_frame(&mut self, frame: Frame) -> Result<(), TrajectoryError> {
        check_frame_size(&self.topology, self.frames.len(), &frame)?;
        self.frames.push(frame);
        Ok(())
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

pub(crate) fn check_frame_size(
    topology: &Topology,
    index: usize,
    frame: &Frame,
) -> Result<(), TrajectoryError> {
    if frame.atom_count() != topology.atom_count() {
        return Err(TrajectoryError::FrameSizeMismatch {
            frame: index,
            expected: topology.atom_count(),
            found: frame.atom_count(),
        });
    }
    Ok(())
}
