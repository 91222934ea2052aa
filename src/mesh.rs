use std::fmt::Display;
use std::str::FromStr;

use rand::Rng;

use crate::{adjacency::AdjacencyMatrix, error::Error};

/**
 * The shape of a generated mesh.
 *
 * `Grid` meshes are regular lattices over the unit square. `Circle` meshes
 * are Delaunay triangulations of points sampled uniformly over the unit
 * disk.
 */
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Shape {
    Grid,
    Circle,
}

impl Shape {
    /// The smallest node count that produces a valid mesh of this shape.
    pub const fn min_nodes(self) -> usize {
        match self {
            Shape::Grid => 2,
            Shape::Circle => 3,
        }
    }
}

impl FromStr for Shape {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grid" => Ok(Shape::Grid),
            "circle" => Ok(Shape::Circle),
            _ => Err(Error::UnknownShape(s.to_string())),
        }
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Shape::Grid => write!(f, "grid"),
            Shape::Circle => write!(f, "circle"),
        }
    }
}

/**
 * A 2D triangular mesh.
 *
 * Vertices are an ordered sequence of coordinates; the position of a vertex
 * in this sequence is its identity. Triangles are triples of vertex indices
 * into that sequence. Both are produced once per generation call; the
 * shuffle operations in this crate always permute the vertex sequence and
 * rewrite the triangle indices atomically, so the two never desynchronize.
 */
#[derive(Clone, Debug)]
pub struct TriMesh {
    vertices: Vec<glam::DVec2>,
    triangles: Vec<[u32; 3]>,
}

impl TriMesh {
    pub(crate) fn from_parts(vertices: Vec<glam::DVec2>, triangles: Vec<[u32; 3]>) -> Self {
        TriMesh {
            vertices,
            triangles,
        }
    }

    /// Create a mesh from existing vertices and triangles.
    ///
    /// Returns an error if any triangle references a vertex that doesn't
    /// exist, or repeats a vertex.
    pub fn new(vertices: Vec<glam::DVec2>, triangles: Vec<[u32; 3]>) -> Result<Self, Error> {
        let mesh = Self::from_parts(vertices, triangles);
        mesh.check()?;
        Ok(mesh)
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    pub fn vertices(&self) -> &[glam::DVec2] {
        &self.vertices
    }

    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    pub(crate) fn vertices_mut(&mut self) -> &mut Vec<glam::DVec2> {
        &mut self.vertices
    }

    pub(crate) fn triangles_mut(&mut self) -> &mut Vec<[u32; 3]> {
        &mut self.triangles
    }

    /// The coordinates of the three corners of a triangle.
    pub fn triangle_points(&self, t: [u32; 3]) -> [glam::DVec2; 3] {
        [
            self.vertices[t[0] as usize],
            self.vertices[t[1] as usize],
            self.vertices[t[2] as usize],
        ]
    }

    /// Check the index invariants of this mesh.
    ///
    /// Every triangle index must be a valid vertex index, and the three
    /// indices of a triangle must be mutually distinct.
    pub fn check(&self) -> Result<(), Error> {
        let nverts = self.vertices.len();
        for t in &self.triangles {
            for &i in t {
                if i as usize >= nverts {
                    return Err(Error::VertexOutOfBounds(i, nverts));
                }
            }
            let [a, b, c] = *t;
            if a == b || b == c || a == c {
                return Err(Error::DegenerateTriangle(*t));
            }
        }
        Ok(())
    }

    /// Build the adjacency matrix of this mesh.
    pub fn adjacency(&self) -> Result<AdjacencyMatrix, Error> {
        AdjacencyMatrix::build(self.vertices.len(), &self.triangles)
    }
}

/// Generate a mesh of the requested shape and size, with optional
/// randomization of the triangle order and the vertex order.
///
/// `nodes` is the side length for grid meshes, and the number of sample
/// points for circle meshes. All randomness, both the circle shape's point
/// sampling and the two shuffle passes, is drawn from `rng`, so a seeded
/// generator reproduces the same mesh.
pub fn generate_mesh(
    nodes: usize,
    shape: Shape,
    randomize_triangles: bool,
    randomize_vertices: bool,
    rng: &mut impl Rng,
) -> Result<TriMesh, Error> {
    let mut mesh = match shape {
        Shape::Grid => TriMesh::grid(nodes)?,
        Shape::Circle => TriMesh::disk(nodes, false, rng)?,
    };
    if randomize_triangles {
        mesh.shuffle_triangles(rng);
    }
    if randomize_vertices {
        mesh.shuffle_vertices(rng);
    }
    Ok(mesh)
}
