use std::fmt::Display;

use crate::error::Error;

/**
 * A symmetric vertex adjacency matrix with a zero diagonal.
 *
 * Entry `(i, j)` is true iff some triangle contains both vertex `i` and
 * vertex `j`, with `i != j`. The matrix is a pure function of the triangle
 * set: it does not depend on the order of the triangle sequence, nor on any
 * prior vertex shuffle, as long as the indices were remapped consistently.
 */
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    size: usize,
    entries: Vec<bool>,
}

impl AdjacencyMatrix {
    /// Build the adjacency matrix of a triangle set over `vertex_count`
    /// vertices.
    ///
    /// Every triangle index must be in `[0, vertex_count)`, and no triangle
    /// may repeat a vertex index; otherwise an error is returned and no
    /// matrix is produced.
    pub fn build(vertex_count: usize, triangles: &[[u32; 3]]) -> Result<Self, Error> {
        let mut matrix = AdjacencyMatrix {
            size: vertex_count,
            entries: vec![false; vertex_count * vertex_count],
        };
        for &t in triangles {
            for &i in &t {
                if i as usize >= vertex_count {
                    return Err(Error::VertexOutOfBounds(i, vertex_count));
                }
            }
            let [a, b, c] = t;
            if a == b || b == c || a == c {
                return Err(Error::DegenerateTriangle(t));
            }
            matrix.connect(a as usize, b as usize);
            matrix.connect(b as usize, c as usize);
            matrix.connect(a as usize, c as usize);
        }
        Ok(matrix)
    }

    fn connect(&mut self, i: usize, j: usize) {
        self.entries[i * self.size + j] = true;
        self.entries[j * self.size + i] = true;
    }

    /// The number of vertices, i.e. the side length of the matrix.
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Whether vertices `i` and `j` share a triangle.
    ///
    /// Panics if `i` or `j` is not below [`AdjacencyMatrix::len`].
    pub fn contains(&self, i: usize, j: usize) -> bool {
        self.entries[i * self.size + j]
    }

    /// One row of the matrix, i.e. the neighborhood indicator of vertex `i`.
    ///
    /// Panics if `i` is not below [`AdjacencyMatrix::len`].
    pub fn row(&self, i: usize) -> &[bool] {
        &self.entries[(i * self.size)..((i + 1) * self.size)]
    }

    /// The number of vertices adjacent to vertex `i`.
    ///
    /// Panics if `i` is not below [`AdjacencyMatrix::len`].
    pub fn degree(&self, i: usize) -> usize {
        self.row(i).iter().filter(|&&e| e).count()
    }
}

impl Display for AdjacencyMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for i in 0..self.size {
            for &e in self.row(i) {
                write!(f, "{}", if e { '1' } else { '0' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use rand::{SeedableRng, rngs::StdRng};

    use super::AdjacencyMatrix;
    use crate::{error::Error, mesh::TriMesh};

    fn assert_symmetric_zero_diagonal(adj: &AdjacencyMatrix) {
        for i in 0..adj.len() {
            assert!(!adj.contains(i, i));
            for j in 0..adj.len() {
                assert_eq!(adj.contains(i, j), adj.contains(j, i));
            }
        }
    }

    #[test]
    fn t_grid_adjacency_symmetric_zero_diagonal() {
        let mesh = TriMesh::grid(4).expect("Cannot create grid mesh");
        let adj = mesh.adjacency().expect("Cannot build adjacency");
        assert_eq!(adj.len(), 16);
        assert_symmetric_zero_diagonal(&adj);
    }

    #[test]
    fn t_disk_adjacency_symmetric_zero_diagonal() {
        let mut rng = StdRng::seed_from_u64(19);
        let mesh = TriMesh::disk(20, true, &mut rng).expect("Cannot create disk mesh");
        let adj = mesh.adjacency().expect("Cannot build adjacency");
        assert_eq!(adj.len(), 21);
        assert_symmetric_zero_diagonal(&adj);
    }

    #[test]
    fn t_grid3_degree_sequence() {
        // Fixed structure of the 3x3 lattice split along anti-diagonals: the
        // center vertex picks up its 4 lattice neighbors plus the 2
        // anti-diagonal neighbors, corners get 2 or 3 depending on whether
        // the anti-diagonal points at them.
        let mesh = TriMesh::grid(3).expect("Cannot create grid mesh");
        let adj = mesh.adjacency().expect("Cannot build adjacency");
        let degrees: Vec<usize> = (0..adj.len()).map(|i| adj.degree(i)).collect();
        assert_eq!(degrees, &[2, 4, 3, 4, 6, 4, 3, 4, 2]);
        // Center vertex neighborhood.
        for j in [1, 2, 3, 5, 6, 7] {
            assert!(adj.contains(4, j));
        }
        for j in [0, 4, 8] {
            assert!(!adj.contains(4, j));
        }
    }

    #[test]
    fn t_adjacency_order_independent() {
        let mesh = TriMesh::grid(4).expect("Cannot create grid mesh");
        let adj = mesh.adjacency().expect("Cannot build adjacency");
        let mut reversed = mesh.triangles().to_vec();
        reversed.reverse();
        let from_reversed = AdjacencyMatrix::build(mesh.num_vertices(), &reversed)
            .expect("Cannot build adjacency");
        assert_eq!(adj, from_reversed);
    }

    #[test]
    fn t_adjacency_out_of_bounds() {
        assert!(matches!(
            AdjacencyMatrix::build(3, &[[0, 1, 3]]),
            Err(Error::VertexOutOfBounds(3, 3))
        ));
    }

    #[test]
    fn t_adjacency_degenerate_triangle() {
        assert!(matches!(
            AdjacencyMatrix::build(3, &[[0, 1, 2], [2, 2, 0]]),
            Err(Error::DegenerateTriangle([2, 2, 0]))
        ));
    }

    #[test]
    #[should_panic]
    fn t_contains_panics_out_of_range() {
        let adj = AdjacencyMatrix::build(3, &[[0, 1, 2]]).expect("Cannot build adjacency");
        adj.contains(3, 0);
    }

    #[test]
    fn t_adjacency_display() {
        let adj = AdjacencyMatrix::build(3, &[[0, 1, 2]]).expect("Cannot build adjacency");
        assert_eq!(format!("{}", adj), "011\n101\n110\n");
    }
}
