//! Shared unit-cube wireframe mesh.
//!
//! One cube, drawn once per tree node with a per-node transform and
//! color. Corners span [-1, 1]^3; edges index into the corner table.
//!
//! # Cube Topology
//!
//! ```text
//!       5──────6         Corners:
//!      /│     /│           0=(-1,-1,-1)  1=(-1,-1, 1)
//!     4─┼────7 │           2=( 1,-1, 1)  3=( 1,-1,-1)
//!     │ 1────┼─2           4=(-1, 1,-1)  5=(-1, 1, 1)
//!     │/     │/            6=( 1, 1, 1)  7=( 1, 1,-1)
//!     0──────3
//!                        +Y
//!                         │  +Z
//!                         │ /
//!                         └───+X
//! ```
//!
//! Edge order: the 4 vertical pillars first, then the bottom ring, then
//! the top ring.

/// The 8 corners of the unit wireframe cube, in [-1, 1]^3.
pub const CUBE_CORNERS: [[f32; 3]; 8] = [
  [-1.0, -1.0, -1.0], // 0
  [-1.0, -1.0, 1.0],  // 1
  [1.0, -1.0, 1.0],   // 2
  [1.0, -1.0, -1.0],  // 3
  [-1.0, 1.0, -1.0],  // 4
  [-1.0, 1.0, 1.0],   // 5
  [1.0, 1.0, 1.0],    // 6
  [1.0, 1.0, -1.0],   // 7
];

/// The 12 cube edges as corner index pairs.
pub const CUBE_EDGES: [[u8; 2]; 12] = [
  [0, 4], // pillar -X -Z
  [1, 5], // pillar -X +Z
  [2, 6], // pillar +X +Z
  [3, 7], // pillar +X -Z
  [0, 1], // bottom ring
  [1, 2],
  [2, 3],
  [0, 3],
  [4, 5], // top ring
  [5, 6],
  [6, 7],
  [4, 7],
];
