// crates/retro-core/src/sampler/trajectory.rs

use crate::kinematics::vec2::Vec2;

/// Append-only trace of relative positions, one per emitted frame.
///
/// Only the owning `Sampler` can append or clear it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trajectory {
    points: Vec<Vec2>,
}

impl Trajectory {
    pub(crate) fn push(&mut self, p: Vec2) {
        self.points.push(p);
    }

    pub(crate) fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn last(&self) -> Option<Vec2> {
        self.points.last().copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vec2> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Vec2;
    type IntoIter = std::slice::Iter<'a, Vec2>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
