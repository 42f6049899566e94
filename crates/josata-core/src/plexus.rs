//! Particle field simulation behind every page.
//!
//! A fixed set of points drifts inside an invisible box. Points close enough
//! to each other are joined by a line segment, the pointer exerts a mild
//! attraction on nearby points, and the whole assembly rotates slowly about
//! the vertical axis. Rendering is the caller's job: [`PlexusField::step`]
//! advances one frame and [`Camera::project`] flattens rotated points into
//! normalized device coordinates for whatever surface draws them.
//!
//! The pair scan is O(n²) on purpose. The point count is small and fixed,
//! there is no spatial index, and there is no adaptive degradation when the
//! host frame rate drops.

use glam::{Vec2, Vec3};
use rand::prelude::*;

use crate::error::{SiteError, SiteResult};

/// Tuning for the particle field.
///
/// The defaults are the site's background: 150 points spawned in a
/// 40x40x20 volume pushed back from the camera, bouncing inside a
/// 50x50x30 box, linked under a distance of 6 world units.
#[derive(Debug, Clone, PartialEq)]
pub struct PlexusConfig {
    /// Number of points in the field
    pub point_count: usize,
    /// Half-extents of the initial spawn volume
    pub spawn_extent: Vec3,
    /// Shift applied to initial z so the field sits behind the page plane
    pub spawn_z_offset: f32,
    /// Half-extents of the initial per-frame velocity
    pub velocity_extent: Vec3,
    /// Half-extents of the reflecting boundary box
    pub bounds: Vec3,
    /// Points closer than this are linked
    pub link_distance: f32,
    /// Pointer influence radius in world units (x/y plane)
    pub pointer_radius: f32,
    /// Fraction of the remaining pointer distance closed per frame
    pub pointer_pull: f32,
    /// Assembly rotation about the y axis, radians per second
    pub drift_rate: f32,
}

impl Default for PlexusConfig {
    fn default() -> Self {
        Self {
            point_count: 150,
            spawn_extent: Vec3::new(20.0, 20.0, 10.0),
            spawn_z_offset: -10.0,
            velocity_extent: Vec3::new(0.01, 0.01, 0.005),
            bounds: Vec3::new(25.0, 25.0, 15.0),
            link_distance: 6.0,
            pointer_radius: 8.0,
            pointer_pull: 0.005,
            drift_rate: 0.05,
        }
    }
}

impl PlexusConfig {
    fn validate(&self) -> SiteResult<()> {
        if self.point_count == 0 {
            return Err(SiteError::InvalidConfig(
                "point_count must be positive".into(),
            ));
        }
        if self.bounds.min_element() <= 0.0 {
            return Err(SiteError::InvalidConfig(
                "bounds half-extents must be positive".into(),
            ));
        }
        if self.link_distance <= 0.0 {
            return Err(SiteError::InvalidConfig(
                "link_distance must be positive".into(),
            ));
        }
        if self.pointer_radius < 0.0 || self.pointer_pull < 0.0 {
            return Err(SiteError::InvalidConfig(
                "pointer influence must not be negative".into(),
            ));
        }
        Ok(())
    }
}

/// One animated point: where it is and where it is going.
///
/// Points have no identity beyond their index and no lifecycle beyond the
/// field that owns them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub position: Vec3,
    pub velocity: Vec3,
}

/// The particle field. Owns every point plus the link set of the last frame.
#[derive(Debug, Clone)]
pub struct PlexusField {
    config: PlexusConfig,
    points: Vec<Point>,
    links: Vec<(usize, usize)>,
    rotation: f32,
}

impl PlexusField {
    /// Build a field from a seed. The same seed always yields the same field.
    pub fn new(config: PlexusConfig, seed: u64) -> SiteResult<Self> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(seed);
        let e = config.spawn_extent;
        let v = config.velocity_extent;
        let points = (0..config.point_count)
            .map(|_| Point {
                position: Vec3::new(
                    rng.random_range(-e.x..=e.x),
                    rng.random_range(-e.y..=e.y),
                    rng.random_range(-e.z..=e.z) + config.spawn_z_offset,
                ),
                velocity: Vec3::new(
                    rng.random_range(-v.x..=v.x),
                    rng.random_range(-v.y..=v.y),
                    rng.random_range(-v.z..=v.z),
                ),
            })
            .collect();

        let mut field = Self {
            config,
            points,
            links: Vec::new(),
            rotation: 0.0,
        };
        field.recompute_links();
        Ok(field)
    }

    /// Advance one frame.
    ///
    /// `elapsed_secs` is total time since the field was mounted; `pointer`
    /// is the pointer position in world coordinates, if known.
    pub fn step(&mut self, elapsed_secs: f32, pointer: Option<Vec2>) {
        let bounds = self.config.bounds;
        for point in &mut self.points {
            point.position += point.velocity;

            // Elastic reflection off the boundary box
            if point.position.x.abs() > bounds.x {
                point.velocity.x = -point.velocity.x;
            }
            if point.position.y.abs() > bounds.y {
                point.velocity.y = -point.velocity.y;
            }
            if point.position.z.abs() > bounds.z {
                point.velocity.z = -point.velocity.z;
            }

            // Mild attraction toward the pointer (x/y plane only). The nudge
            // is clamped to the boundary box so the reflection invariant
            // survives a pointer parked at the screen edge.
            if let Some(target) = pointer {
                let to_pointer = target - point.position.truncate();
                if to_pointer.length() < self.config.pointer_radius {
                    let nudge = to_pointer * self.config.pointer_pull;
                    point.position.x = (point.position.x + nudge.x).clamp(-bounds.x, bounds.x);
                    point.position.y = (point.position.y + nudge.y).clamp(-bounds.y, bounds.y);
                }
            }
        }

        self.recompute_links();
        self.rotation = elapsed_secs * self.config.drift_rate;
    }

    /// Pairwise proximity scan, rebuilt from scratch every frame.
    fn recompute_links(&mut self) {
        let threshold_sq = self.config.link_distance * self.config.link_distance;
        self.links.clear();
        for i in 0..self.points.len() {
            for j in (i + 1)..self.points.len() {
                let d_sq = self.points[i]
                    .position
                    .distance_squared(self.points[j].position);
                if d_sq < threshold_sq {
                    self.links.push((i, j));
                }
            }
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Links of the last stepped frame, as unordered index pairs with i < j.
    pub fn links(&self) -> &[(usize, usize)] {
        &self.links
    }

    /// Current assembly rotation about the y axis, in radians.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn config(&self) -> &PlexusConfig {
        &self.config
    }

    /// Project one point through `camera`, applying the assembly rotation.
    /// Returns `None` for points behind the camera.
    pub fn project(&self, index: usize, camera: &Camera) -> Option<Projected> {
        camera.project(rotate_y(self.points[index].position, self.rotation))
    }
}

/// Rotate `p` by `angle` radians about the y axis.
fn rotate_y(p: Vec3, angle: f32) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    Vec3::new(p.x * cos + p.z * sin, p.y, -p.x * sin + p.z * cos)
}

/// Perspective camera for the field: sitting at z = 20 with a 45 degree
/// vertical field of view, looking down the negative z axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position_z: f32,
    pub fov_y_radians: f32,
    pub aspect: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            position_z: 20.0,
            fov_y_radians: 45.0_f32.to_radians(),
            aspect: aspect.max(0.1),
        }
    }

    /// World point to normalized device coordinates plus camera-space depth.
    ///
    /// NDC x points right and y points up, with ±1 at the frustum edge.
    /// Points at or behind the near plane are culled.
    pub fn project(&self, world: Vec3) -> Option<Projected> {
        let depth = self.position_z - world.z;
        if depth <= 0.1 {
            return None;
        }
        let focal = 1.0 / (self.fov_y_radians / 2.0).tan();
        Some(Projected {
            ndc: Vec2::new(
                world.x * focal / (self.aspect * depth),
                world.y * focal / depth,
            ),
            depth,
        })
    }

    /// Inverse mapping used for pointer influence: the world-space x/y a
    /// normalized device coordinate lands on at the z = 0 plane.
    pub fn unproject(&self, ndc: Vec2) -> Vec2 {
        let focal = 1.0 / (self.fov_y_radians / 2.0).tan();
        Vec2::new(
            ndc.x * self.aspect * self.position_z / focal,
            ndc.y * self.position_z / focal,
        )
    }
}

/// A projected point: NDC position and distance from the camera, the latter
/// for depth-based styling (far points fade).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub ndc: Vec2,
    pub depth: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> PlexusConfig {
        PlexusConfig {
            point_count: 32,
            ..Default::default()
        }
    }

    #[test]
    fn test_zero_points_rejected() {
        let config = PlexusConfig {
            point_count: 0,
            ..Default::default()
        };
        assert!(matches!(
            PlexusField::new(config, 1),
            Err(SiteError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_negative_bounds_rejected() {
        let config = PlexusConfig {
            bounds: Vec3::new(25.0, -1.0, 15.0),
            ..Default::default()
        };
        assert!(PlexusField::new(config, 1).is_err());
    }

    #[test]
    fn test_same_seed_same_field() {
        let mut a = PlexusField::new(small_config(), 42).unwrap();
        let mut b = PlexusField::new(small_config(), 42).unwrap();
        for frame in 0..200 {
            let t = frame as f32 / 60.0;
            a.step(t, Some(Vec2::new(1.0, -2.0)));
            b.step(t, Some(Vec2::new(1.0, -2.0)));
        }
        assert_eq!(a.points(), b.points());
        assert_eq!(a.links(), b.links());
        assert_eq!(a.rotation(), b.rotation());
    }

    #[test]
    fn test_different_seed_different_field() {
        let a = PlexusField::new(small_config(), 1).unwrap();
        let b = PlexusField::new(small_config(), 2).unwrap();
        assert_ne!(a.points(), b.points());
    }

    #[test]
    fn test_points_stay_inside_bounds() {
        let mut field = PlexusField::new(small_config(), 7).unwrap();
        let bounds = field.config().bounds;
        let slack = field.config().velocity_extent;
        for frame in 0..5_000 {
            field.step(frame as f32 / 60.0, None);
            for point in field.points() {
                assert!(point.position.x.abs() <= bounds.x + slack.x);
                assert!(point.position.y.abs() <= bounds.y + slack.y);
                assert!(point.position.z.abs() <= bounds.z + slack.z);
            }
        }
    }

    #[test]
    fn test_links_are_exactly_the_close_pairs() {
        let mut field = PlexusField::new(small_config(), 99).unwrap();
        field.step(0.016, None);

        let threshold = field.config().link_distance;
        let points = field.points();
        let mut expected = Vec::new();
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                if points[i].position.distance(points[j].position) < threshold {
                    expected.push((i, j));
                }
            }
        }
        assert_eq!(field.links(), expected.as_slice());
    }

    #[test]
    fn test_pointer_pulls_nearby_points() {
        let mut pulled = PlexusField::new(small_config(), 5).unwrap();
        let mut free = pulled.clone();

        // Aim at wherever point 0 currently is so it falls inside the radius.
        let target = pulled.points()[0].position.truncate();
        pulled.step(0.016, Some(target));
        free.step(0.016, None);

        let d_pulled = (pulled.points()[0].position.truncate() - target).length();
        let d_free = (free.points()[0].position.truncate() - target).length();
        assert!(d_pulled < d_free);
    }

    #[test]
    fn test_far_pointer_has_no_effect() {
        let mut near = PlexusField::new(small_config(), 5).unwrap();
        let mut far = near.clone();
        near.step(0.016, None);
        far.step(0.016, Some(Vec2::new(1_000.0, 1_000.0)));
        assert_eq!(near.points(), far.points());
    }

    #[test]
    fn test_rotation_tracks_elapsed_time() {
        let mut field = PlexusField::new(small_config(), 3).unwrap();
        field.step(2.0, None);
        assert!((field.rotation() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_project_culls_behind_camera() {
        let camera = Camera::new(16.0 / 9.0);
        assert!(camera.project(Vec3::new(0.0, 0.0, 30.0)).is_none());
        assert!(camera.project(Vec3::new(0.0, 0.0, 0.0)).is_some());
    }

    #[test]
    fn test_unproject_then_project_roundtrips() {
        let camera = Camera::new(1.6);
        let ndc = Vec2::new(0.4, -0.7);
        let world = camera.unproject(ndc);
        let back = camera.project(Vec3::new(world.x, world.y, 0.0)).unwrap();
        assert!((back.ndc - ndc).length() < 1e-4);
    }
}
