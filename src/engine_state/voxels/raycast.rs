//! Block picking.
//!
//! Walks a ray through the voxel grid one cell at a time (Amanatides & Woo traversal)
//! and reports the first non-air block it enters, together with the face it entered
//! through. Breaking a block clears `hit.block`; placing a block fills
//! `hit.block + hit.normal`.

use cgmath::{InnerSpace, Point3, Vector3};

use super::world::World;

/// Default reach used by the engine's break/place helpers.
pub const MAX_REACH: f32 = 8.0;

/// Largest coordinate magnitude a ray may start at or travel. Past `2^24` an `f32` can no
/// longer tell neighboring cells apart.
pub const MAX_RAY_COORDINATE: f32 = 16_777_216.0;

/// The result of a successful raycast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastHit {
    /// The solid block that was hit
    pub block: Point3<i32>,
    /// Outward normal of the face the ray entered through. Zero if the ray started
    /// inside the block.
    pub normal: Vector3<i32>,
    /// Distance travelled along the ray to the entry point
    pub distance: f32,
}

impl RaycastHit {
    /// The empty cell in front of the hit face.
    pub fn adjacent(&self) -> Point3<i32> {
        self.block + self.normal
    }
}

/// Maps a continuous world position to the block containing it.
pub fn block_containing(position: Point3<f32>) -> Point3<i32> {
    Point3::new(
        position.x.floor() as i32,
        position.y.floor() as i32,
        position.z.floor() as i32,
    )
}

/// Casts a ray from `origin` along `direction` for at most `max_distance`.
///
/// # Returns
/// `None` if the direction is zero or not finite, the origin or `max_distance` is not
/// finite, the origin lies beyond [`MAX_RAY_COORDINATE`], or no solid block lies within
/// reach. `max_distance` is capped at [`MAX_RAY_COORDINATE`].
pub fn raycast(
    world: &World,
    origin: Point3<f32>,
    direction: Vector3<f32>,
    max_distance: f32,
) -> Option<RaycastHit> {
    let length = direction.magnitude();
    if length == 0.0 || !length.is_finite() || !max_distance.is_finite() {
        return None;
    }
    let in_range = |v: f32| v.is_finite() && v.abs() < MAX_RAY_COORDINATE;
    if !in_range(origin.x) || !in_range(origin.y) || !in_range(origin.z) {
        return None;
    }
    let max_distance = max_distance.min(MAX_RAY_COORDINATE);
    let dir = direction / length;
    let dir = [dir.x, dir.y, dir.z];
    let origin_arr = [origin.x, origin.y, origin.z];

    let start = block_containing(origin);
    let mut cell = [start.x, start.y, start.z];
    let mut step = [0i32; 3];
    let mut t_max = [f32::INFINITY; 3];
    let mut t_delta = [f32::INFINITY; 3];

    for axis in 0..3 {
        if dir[axis] > 0.0 {
            step[axis] = 1;
            t_max[axis] = ((cell[axis] as f32 + 1.0) - origin_arr[axis]) / dir[axis];
            t_delta[axis] = 1.0 / dir[axis];
        } else if dir[axis] < 0.0 {
            step[axis] = -1;
            t_max[axis] = (cell[axis] as f32 - origin_arr[axis]) / dir[axis];
            t_delta[axis] = -1.0 / dir[axis];
        }
    }

    let mut normal = [0i32; 3];
    let mut distance = 0.0;

    loop {
        let position = Point3::new(cell[0], cell[1], cell[2]);
        if world.get_block_at(position).is_solid() {
            return Some(RaycastHit {
                block: position,
                normal: Vector3::from(normal),
                distance,
            });
        }

        // Advance along whichever axis reaches its next cell boundary first
        let axis = if t_max[0] < t_max[1] {
            if t_max[0] < t_max[2] {
                0
            } else {
                2
            }
        } else if t_max[1] < t_max[2] {
            1
        } else {
            2
        };

        if t_max[axis] > max_distance {
            return None;
        }

        distance = t_max[axis];
        cell[axis] = cell[axis].checked_add(step[axis])?;
        t_max[axis] += t_delta[axis];
        normal = [0; 3];
        normal[axis] = -step[axis];
    }
}
