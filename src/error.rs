use crate::mesh::Shape;

#[derive(Debug)]
pub enum Error {
    // Generation.
    UnknownShape(String),
    TooFewNodes(Shape, usize),
    TriangulationFailed,
    // Indexing.
    VertexOutOfBounds(u32, usize),
    /// A triangle repeats a vertex index and has zero area. Such triangles
    /// are rejected outright rather than partially inserted into an
    /// adjacency matrix or a stiffness matrix.
    DegenerateTriangle([u32; 3]),
    // Linear systems.
    #[cfg(feature = "fem")]
    SingularSystem,
}
