/*!
Finite element solver for the Poisson problem over a generated mesh.

Assembles a global stiffness matrix and load vector for −Δu = 1 with linear
(P1) elements, constrains vertices with Dirichlet conditions, and solves the
resulting dense system. Requires the `fem` feature.
*/

use nalgebra::{DMatrix, DVector};

use crate::{error::Error, mesh::TriMesh};

/**
 * The assembled linear system of a Poisson problem.
 *
 * Created by [`PoissonSystem::assemble`]; constrain the boundary with
 * [`PoissonSystem::set_dirichlet`] before solving, otherwise the system is
 * singular up to an additive constant.
 */
pub struct PoissonSystem {
    matrix: DMatrix<f64>,
    rhs: DVector<f64>,
}

impl PoissonSystem {
    /// Assemble the global stiffness matrix and load vector of −Δu = 1 over
    /// `mesh` with linear elements.
    ///
    /// Each triangle contributes `area · BᵀB` to the stiffness matrix, where
    /// `B` holds the constant gradients of its three basis functions, and
    /// `area / 3` to the load of each of its corners. Zero-area triangles
    /// are rejected.
    pub fn assemble(mesh: &TriMesh) -> Result<Self, Error> {
        mesh.check()?;
        let nverts = mesh.num_vertices();
        let mut matrix = DMatrix::zeros(nverts, nverts);
        let mut rhs = DVector::zeros(nverts);
        for &t in mesh.triangles() {
            let [p, q, r] = mesh.triangle_points(t);
            let area = 0.5 * (q - p).perp_dot(r - p).abs();
            if area == 0.0 {
                return Err(Error::DegenerateTriangle(t));
            }
            // Basis function gradients scaled by 2 * area.
            let gx = [q.y - r.y, r.y - p.y, p.y - q.y];
            let gy = [r.x - q.x, p.x - r.x, q.x - p.x];
            let scale = 1.0 / (4.0 * area);
            for i in 0..3 {
                for j in 0..3 {
                    matrix[(t[i] as usize, t[j] as usize)] +=
                        (gx[i] * gx[j] + gy[i] * gy[j]) * scale;
                }
                rhs[t[i] as usize] += area / 3.0;
            }
        }
        Ok(PoissonSystem { matrix, rhs })
    }

    /// Constrain every vertex of `mesh` satisfying `on_boundary` to `value`.
    ///
    /// The vertex's row is replaced by the corresponding identity row and
    /// its load is set to `value`.
    pub fn set_dirichlet(
        &mut self,
        mesh: &TriMesh,
        value: f64,
        on_boundary: impl Fn(glam::DVec2) -> bool,
    ) {
        for (i, &point) in mesh.vertices().iter().enumerate() {
            if on_boundary(point) {
                self.matrix.row_mut(i).fill(0.0);
                self.matrix[(i, i)] = 1.0;
                self.rhs[i] = value;
            }
        }
    }

    /// Solve the system, consuming it. The result holds one value per
    /// vertex, in vertex order.
    pub fn solve(self) -> Result<Vec<f64>, Error> {
        let solution = self
            .matrix
            .lu()
            .solve(&self.rhs)
            .ok_or(Error::SingularSystem)?;
        Ok(solution.iter().copied().collect())
    }
}

/// Boundary predicate for meshes from [`TriMesh::grid`], which span the unit
/// square exactly.
pub fn unit_square_boundary(p: glam::DVec2) -> bool {
    p.x == 0.0 || p.x == 1.0 || p.y == 0.0 || p.y == 1.0
}
