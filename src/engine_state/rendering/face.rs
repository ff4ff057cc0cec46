//! Per-face geometry tables.
//!
//! Every block face is a unit quad whose four corners are listed in a fixed winding
//! order. Each corner carries its texture coordinate and the two tangent directions
//! that point away from the face center towards that corner. The tangents drive the
//! ambient occlusion samples, so corner order, texture coordinates and sample cells
//! always stay in lockstep.

use cgmath::{Point3, Vector3};

use crate::engine_state::voxels::block::block_side::BlockSide;

/// One corner of a block face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceCorner {
    /// Corner position relative to the block's minimum corner, each component 0 or 1
    pub offset: [i32; 3],
    /// UV texture coordinate of this corner
    pub tex_coords: [f32; 2],
    /// The two in-plane unit directions pointing towards this corner
    pub tangents: [[i32; 3]; 2],
}

const fn corner(offset: [i32; 3], tex_coords: [f32; 2], tangents: [[i32; 3]; 2]) -> FaceCorner {
    FaceCorner {
        offset,
        tex_coords,
        tangents,
    }
}

const X_NEG: [i32; 3] = [-1, 0, 0];
const X_POS: [i32; 3] = [1, 0, 0];
const Y_NEG: [i32; 3] = [0, -1, 0];
const Y_POS: [i32; 3] = [0, 1, 0];
const Z_NEG: [i32; 3] = [0, 0, -1];
const Z_POS: [i32; 3] = [0, 0, 1];

// Lateral faces put the horizontal tangent first and the vertical one second.
const FRONT_CORNERS: [FaceCorner; 4] = [
    corner([0, 0, 1], [1.0, 1.0], [X_NEG, Y_NEG]),
    corner([1, 0, 1], [0.0, 1.0], [X_POS, Y_NEG]),
    corner([1, 1, 1], [0.0, 0.0], [X_POS, Y_POS]),
    corner([0, 1, 1], [1.0, 0.0], [X_NEG, Y_POS]),
];

const BACK_CORNERS: [FaceCorner; 4] = [
    corner([0, 0, 0], [0.0, 1.0], [X_NEG, Y_NEG]),
    corner([0, 1, 0], [0.0, 0.0], [X_NEG, Y_POS]),
    corner([1, 1, 0], [1.0, 0.0], [X_POS, Y_POS]),
    corner([1, 0, 0], [1.0, 1.0], [X_POS, Y_NEG]),
];

// Caps put the X tangent first and the Z tangent second.
const BOTTOM_CORNERS: [FaceCorner; 4] = [
    corner([0, 0, 0], [1.0, 1.0], [X_NEG, Z_NEG]),
    corner([1, 0, 0], [0.0, 1.0], [X_POS, Z_NEG]),
    corner([1, 0, 1], [0.0, 0.0], [X_POS, Z_POS]),
    corner([0, 0, 1], [1.0, 0.0], [X_NEG, Z_POS]),
];

const TOP_CORNERS: [FaceCorner; 4] = [
    corner([0, 1, 0], [1.0, 0.0], [X_NEG, Z_NEG]),
    corner([0, 1, 1], [1.0, 1.0], [X_NEG, Z_POS]),
    corner([1, 1, 1], [0.0, 1.0], [X_POS, Z_POS]),
    corner([1, 1, 0], [0.0, 0.0], [X_POS, Z_NEG]),
];

const LEFT_CORNERS: [FaceCorner; 4] = [
    corner([0, 0, 0], [1.0, 1.0], [Z_NEG, Y_NEG]),
    corner([0, 0, 1], [0.0, 1.0], [Z_POS, Y_NEG]),
    corner([0, 1, 1], [0.0, 0.0], [Z_POS, Y_POS]),
    corner([0, 1, 0], [1.0, 0.0], [Z_NEG, Y_POS]),
];

const RIGHT_CORNERS: [FaceCorner; 4] = [
    corner([1, 0, 0], [0.0, 1.0], [Z_NEG, Y_NEG]),
    corner([1, 1, 0], [0.0, 0.0], [Z_NEG, Y_POS]),
    corner([1, 1, 1], [1.0, 0.0], [Z_POS, Y_POS]),
    corner([1, 0, 1], [1.0, 1.0], [Z_POS, Y_NEG]),
];

/// Returns the corner table for a face, in winding order.
pub fn face_corners(side: BlockSide) -> &'static [FaceCorner; 4] {
    match side {
        BlockSide::FRONT => &FRONT_CORNERS,
        BlockSide::BACK => &BACK_CORNERS,
        BlockSide::BOTTOM => &BOTTOM_CORNERS,
        BlockSide::TOP => &TOP_CORNERS,
        BlockSide::LEFT => &LEFT_CORNERS,
        BlockSide::RIGHT => &RIGHT_CORNERS,
    }
}

/// A single face of the block at `block`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    /// World position of the block this face belongs to
    pub block: Point3<i32>,
    /// Which side of the block this face represents
    pub side: BlockSide,
}

impl Face {
    /// Creates a new face for the block at `block`.
    pub fn new(block: Point3<i32>, side: BlockSide) -> Self {
        Face { block, side }
    }

    /// The neighbor cell this face looks into.
    pub fn facing_cell(&self) -> Point3<i32> {
        self.block + self.side.normal()
    }

    /// World space positions of the four corners in winding order.
    pub fn corner_positions(&self) -> [Point3<f32>; 4] {
        face_corners(self.side).map(|c| {
            Point3::new(
                (self.block.x + c.offset[0]) as f32,
                (self.block.y + c.offset[1]) as f32,
                (self.block.z + c.offset[2]) as f32,
            )
        })
    }

    /// The cells sampled for ambient occlusion at corner `index`:
    /// `[edge1, edge2, diagonal]`, all one step out along the face normal.
    pub fn occlusion_samples(&self, index: usize) -> [Point3<i32>; 3] {
        let [t1, t2] = face_corners(self.side)[index].tangents;
        let t1 = Vector3::from(t1);
        let t2 = Vector3::from(t2);
        let base = self.facing_cell();
        [base + t1, base + t2, base + t1 + t2]
    }
}
