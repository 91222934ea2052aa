use crate::{error::Error, mesh::Shape, mesh::TriMesh};

impl TriMesh {
    /// Create a regular triangulated grid over the unit square.
    ///
    /// The lattice has `nodes` points per side, evenly spaced from 0 to 1,
    /// in row-major order: the vertex at row `r`, column `c` has index
    /// `r * nodes + c`. Every cell is split along its `(r+1,c)-(r,c+1)`
    /// anti-diagonal, so a 3x3 grid triangulates as:
    ///
    ///  ```text
    ///    6-----7-----8
    ///    |    /|    /|
    ///    |   / |   / |
    ///    |  /  |  /  |
    ///    | /   | /   |
    ///    |/    |/    |
    ///    3-----4-----5
    ///    |    /|    /|
    ///    |   / |   / |
    ///    |  /  |  /  |
    ///    | /   | /   |
    ///    |/    |/    |
    ///    0-----1-----2
    ///  ```
    ///
    /// This always produces `nodes * nodes` vertices and
    /// `2 * (nodes - 1) * (nodes - 1)` triangles covering the square with no
    /// gaps or overlaps.
    pub fn grid(nodes: usize) -> Result<Self, Error> {
        if nodes < Shape::Grid.min_nodes() {
            return Err(Error::TooFewNodes(Shape::Grid, nodes));
        }
        // Coordinates by division, not by accumulating a precomputed step:
        // x / x == 1.0 in IEEE arithmetic, so the lattice endpoints land on
        // 0 and 1 exactly for every size.
        let side = (nodes - 1) as f64;
        let mut vertices = Vec::with_capacity(nodes * nodes);
        for r in 0..nodes {
            for c in 0..nodes {
                vertices.push(glam::dvec2(c as f64 / side, r as f64 / side));
            }
        }
        let mut triangles = Vec::with_capacity(2 * (nodes - 1) * (nodes - 1));
        for r in 0..(nodes - 1) {
            for c in 0..(nodes - 1) {
                let a = (r * nodes + c) as u32;
                let b = ((r + 1) * nodes + c) as u32;
                let d = (r * nodes + c + 1) as u32;
                let e = ((r + 1) * nodes + c + 1) as u32;
                triangles.push([a, b, d]);
                triangles.push([b, d, e]);
            }
        }
        Ok(TriMesh::from_parts(vertices, triangles))
    }
}
