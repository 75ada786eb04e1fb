//! Core data types for recorded gestures.
//!
//! These are plain CPU-side values; voxel-specific types live in gesture-voxel.

use glam::DVec3;

/// A single recorded gesture sample in 3D space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3D {
    /// Position in the recording device's coordinate frame.
    pub position: DVec3,
}

impl Point3D {
    /// Create a point from its three coordinates.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            position: DVec3::new(x, y, z),
        }
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn z(&self) -> f64 {
        self.position.z
    }
}

impl From<DVec3> for Point3D {
    fn from(position: DVec3) -> Self {
        Self { position }
    }
}

impl From<[f64; 3]> for Point3D {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

/// A recorded gesture: points in the order they were sampled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    points: Vec<Point3D>,
}

impl Trajectory {
    pub fn new(points: Vec<Point3D>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point3D] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point3D> {
        self.points.iter()
    }

    /// Iterate over raw positions in recorded order.
    pub fn positions(&self) -> impl Iterator<Item = DVec3> + '_ {
        self.points.iter().map(|p| p.position)
    }
}

impl From<Vec<Point3D>> for Trajectory {
    fn from(points: Vec<Point3D>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Point3D> for Trajectory {
    fn from_iter<I: IntoIterator<Item = Point3D>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Point3D;
    type IntoIter = std::slice::Iter<'a, Point3D>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_creation() {
        let p = Point3D::new(1.0, 2.0, 3.0);
        assert_eq!(p.position, DVec3::new(1.0, 2.0, 3.0));
        assert_eq!((p.x(), p.y(), p.z()), (1.0, 2.0, 3.0));
        assert_eq!(Point3D::from([1.0, 2.0, 3.0]), p);
    }

    #[test]
    fn test_trajectory_preserves_order() {
        let trajectory: Trajectory = (0..5).map(|i| Point3D::new(i as f64, 0.0, 0.0)).collect();
        assert_eq!(trajectory.len(), 5);
        let xs: Vec<f64> = trajectory.positions().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_empty_trajectory() {
        let trajectory = Trajectory::default();
        assert!(trajectory.is_empty());
        assert_eq!(trajectory.iter().count(), 0);
    }
}
