//! Catmull-Rom path smoothing.
//!
//! Turns the cell-by-cell output of a grid search into a dense sequence of
//! waypoints along a uniform Catmull-Rom spline through the cell centres.
//! The curve is kept in the horizontal plane: every sample is pinned to a
//! caller-supplied reference height.

use glam::Vec3;
use log::trace;

use crate::core::with_height;
use crate::error::PathError;
use crate::grid::PathNode;

/// Path smoothing configuration
#[derive(Clone, Debug, PartialEq)]
pub struct SmoothingConfig {
    /// Samples emitted per node-to-node segment (>= 1)
    pub subdivisions_per_segment: usize,
    /// Append the final node's position as an extra waypoint
    pub include_destination: bool,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            subdivisions_per_segment: 50,
            include_destination: false,
        }
    }
}

impl SmoothingConfig {
    /// Config with the given subdivision count and default everything else
    pub fn with_subdivisions(subdivisions_per_segment: usize) -> Self {
        Self {
            subdivisions_per_segment,
            ..Default::default()
        }
    }

    /// Reject values the smoother cannot run with.
    pub fn validate(&self) -> Result<(), PathError> {
        if self.subdivisions_per_segment == 0 {
            return Err(PathError::invalid_config(
                "subdivisions_per_segment must be at least 1",
            ));
        }
        Ok(())
    }

    /// Number of waypoints produced for a path of `nodes` nodes
    pub fn output_len(&self, nodes: usize) -> usize {
        if nodes < 2 {
            return 0;
        }
        (nodes - 1) * self.subdivisions_per_segment + usize::from(self.include_destination)
    }
}

/// Catmull-Rom path smoother.
///
/// Stateless once built: the same input always gives bit-identical output.
#[derive(Clone, Debug)]
pub struct PathSmoother {
    config: SmoothingConfig,
}

impl PathSmoother {
    /// Create a smoother, validating the configuration
    pub fn new(config: SmoothingConfig) -> Result<Self, PathError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create with default configuration
    pub fn with_defaults() -> Self {
        Self {
            config: SmoothingConfig::default(),
        }
    }

    /// Active configuration
    pub fn config(&self) -> &SmoothingConfig {
        &self.config
    }

    /// Smooth an ordered search path.
    ///
    /// Returns `(N-1) * S` waypoints for `N` nodes and `S` subdivisions
    /// (plus one if `include_destination` is set). Paths shorter than two
    /// nodes have nothing to smooth and yield
    /// [`PathError::DegenerateSmoothingInput`].
    pub fn smooth(&self, path: &[PathNode], reference_height: f32) -> Result<Vec<Vec3>, PathError> {
        let positions: Vec<Vec3> = path.iter().map(|n| n.position).collect();
        self.smooth_points(&positions, reference_height)
    }

    /// Smooth a sequence of control points directly.
    pub fn smooth_points(
        &self,
        points: &[Vec3],
        reference_height: f32,
    ) -> Result<Vec<Vec3>, PathError> {
        let n = points.len();
        if n < 2 {
            return Err(PathError::DegenerateSmoothingInput { nodes: n });
        }

        let subdivisions = self.config.subdivisions_per_segment;
        let mut waypoints = Vec::with_capacity(self.config.output_len(n));

        for i in 0..n - 1 {
            // Duplicate the end points so the curve starts and ends without overshoot
            let p0 = if i == 0 { points[i] } else { points[i - 1] };
            let p1 = points[i];
            let p2 = points[i + 1];
            let p3 = if i == n - 2 { points[i + 1] } else { points[i + 2] };

            for j in 0..subdivisions {
                let t = j as f32 / subdivisions as f32;
                let point = catmull_rom(p0, p1, p2, p3, t);
                waypoints.push(with_height(point, reference_height));
            }
        }

        if self.config.include_destination {
            waypoints.push(with_height(points[n - 1], reference_height));
        }

        trace!(
            "[Smoother] {} nodes -> {} waypoints ({} per segment)",
            n,
            waypoints.len(),
            subdivisions
        );

        Ok(waypoints)
    }
}

/// Evaluate the uniform Catmull-Rom segment between `p1` and `p2` at `t` in [0, 1].
#[inline]
pub fn catmull_rom(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let t2 = t * t;
    let t3 = t2 * t;

    0.5 * ((2.0 * p1)
        + (-p0 + p2) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3)
}

/// Calculate total path length
pub fn path_length(path: &[Vec3]) -> f32 {
    if path.len() < 2 {
        return 0.0;
    }

    path.windows(2).map(|w| w[0].distance(w[1])).sum()
}
