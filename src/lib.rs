/*!
This crate generates synthetic 2D triangular meshes and derives vertex
adjacency matrices from them.

# Overview

+ [`TriMesh`] couples an ordered vertex sequence with a triangle index
  sequence. Two generators are built in: [`TriMesh::grid`] for a regular
  lattice over the unit square, and [`TriMesh::disk`] for a Delaunay
  triangulation of points sampled uniformly over the unit disk.

+ Both the triangle order and the vertex order can be randomized after
  generation. Randomizing vertices remaps every triangle index in the same
  operation, so triangles always reference the same geometric points before
  and after.

+ [`AdjacencyMatrix`] records which vertex pairs share a triangle. It is
  symmetric with a zero diagonal, and is independent of triangle order and
  of any prior randomization.

+ All randomness flows through an injectable [`rand::Rng`], so seeded
  generators reproduce meshes exactly.

+ The `fem` feature (on by default) adds the [`fem`] module, which assembles
  and solves the Poisson problem −Δu = 1 over a generated mesh with linear
  elements.

# Basic Usage

```rust
use rand::{SeedableRng, rngs::StdRng};
use trigen::{Shape, generate_mesh};

let mut rng = StdRng::seed_from_u64(42);
let mesh = generate_mesh(3, Shape::Grid, false, false, &mut rng).unwrap();
assert_eq!(mesh.num_vertices(), 9);
assert_eq!(mesh.num_triangles(), 8);

let adjacency = mesh.adjacency().unwrap();
assert_eq!(adjacency.degree(4), 6); // The center vertex of the 3x3 grid.
```
*/

mod adjacency;
mod error;
mod grid;
mod macros;
mod mesh;
mod shuffle;
mod triangulate;

#[cfg(feature = "fem")]
pub mod fem;

pub use adjacency::AdjacencyMatrix;
pub use error::Error;
pub use mesh::{Shape, TriMesh, generate_mesh};
pub use triangulate::{Delaunator, Triangulator};
