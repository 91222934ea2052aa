use std::f64::consts::TAU;

use rand::Rng;

use crate::{error::Error, mesh::Shape, mesh::TriMesh};

/**
 * A triangulation backend.
 *
 * The circle mesh generator only needs one thing from a backend: turn a
 * point set into a list of triangle index triples. Any conforming Delaunay
 * implementation satisfies this contract; the default backend is
 * [`Delaunator`].
 */
pub trait Triangulator {
    /// Triangulate a point set into index triples, with every index
    /// referring to a position in `points`.
    fn triangulate(&self, points: &[glam::DVec2]) -> Result<Vec<[u32; 3]>, Error>;
}

/// The default [`Triangulator`], backed by the
/// [`delaunator`](https://crates.io/crates/delaunator) crate.
pub struct Delaunator;

impl Triangulator for Delaunator {
    fn triangulate(&self, points: &[glam::DVec2]) -> Result<Vec<[u32; 3]>, Error> {
        let points: Vec<delaunator::Point> = points
            .iter()
            .map(|p| delaunator::Point { x: p.x, y: p.y })
            .collect();
        let result = delaunator::triangulate(&points);
        // Fewer than 3 points, or all points collinear.
        if result.triangles.is_empty() {
            return Err(Error::TriangulationFailed);
        }
        Ok(result
            .triangles
            .chunks_exact(3)
            .map(|t| [t[0] as u32, t[1] as u32, t[2] as u32])
            .collect())
    }
}

impl TriMesh {
    /// Create a Delaunay mesh of `nodes` points sampled uniformly over the
    /// unit disk, using the default backend.
    ///
    /// With `include_center` the origin is appended as one extra vertex
    /// after the sampled points, so the mesh has `nodes + 1` vertices.
    /// Unlike the grid shape, randomness is intrinsic here: two calls with
    /// the same `nodes` produce different meshes unless `rng` is seeded.
    pub fn disk(nodes: usize, include_center: bool, rng: &mut impl Rng) -> Result<Self, Error> {
        Self::disk_with(nodes, include_center, rng, &Delaunator)
    }

    /// Same as [`TriMesh::disk`], with an explicit triangulation backend.
    pub fn disk_with(
        nodes: usize,
        include_center: bool,
        rng: &mut impl Rng,
        triangulator: &impl Triangulator,
    ) -> Result<Self, Error> {
        if nodes < Shape::Circle.min_nodes() {
            return Err(Error::TooFewNodes(Shape::Circle, nodes));
        }
        let mut vertices = Vec::with_capacity(nodes + 1);
        for _ in 0..nodes {
            // The square root makes the sampling uniform over the disk
            // rather than clustered at the center.
            let radius = rng.r#gen::<f64>().sqrt();
            let angle = rng.gen_range(0.0..TAU);
            vertices.push(glam::dvec2(radius * angle.cos(), radius * angle.sin()));
        }
        if include_center {
            vertices.push(glam::DVec2::ZERO);
        }
        let triangles = triangulator.triangulate(&vertices)?;
        Ok(TriMesh::from_parts(vertices, triangles))
    }
}

#[cfg(test)]
mod test {
    use rand::{SeedableRng, rngs::StdRng};

    use super::{Delaunator, Triangulator};
    use crate::{error::Error, mesh::Shape, mesh::TriMesh};

    /// Whether `d` lies strictly inside the circumcircle of the triangle
    /// `(a, b, c)`, via the standard incircle determinant.
    fn in_circumcircle(a: glam::DVec2, b: glam::DVec2, c: glam::DVec2, d: glam::DVec2) -> bool {
        let (ax, ay) = ((a - d).x, (a - d).y);
        let (bx, by) = ((b - d).x, (b - d).y);
        let (cx, cy) = ((c - d).x, (c - d).y);
        let det = (ax * ax + ay * ay) * (bx * cy - cx * by)
            - (bx * bx + by * by) * (ax * cy - cx * ay)
            + (cx * cx + cy * cy) * (ax * by - bx * ay);
        // The determinant test assumes (a, b, c) is counterclockwise.
        let orient = (b - a).perp_dot(c - a);
        det * orient.signum() > 1e-12
    }

    #[test]
    fn t_disk_counts() {
        let mut rng = StdRng::seed_from_u64(13);
        let mesh = TriMesh::disk(24, false, &mut rng).expect("Cannot create disk mesh");
        assert_eq!(mesh.num_vertices(), 24);
        assert!(mesh.num_triangles() > 0);
        mesh.check().expect("Disk mesh must be consistent");
    }

    #[test]
    fn t_disk_with_center_counts() {
        let mut rng = StdRng::seed_from_u64(13);
        let mesh = TriMesh::disk(24, true, &mut rng).expect("Cannot create disk mesh");
        assert_eq!(mesh.num_vertices(), 25);
        assert_eq!(mesh.vertices()[24], glam::DVec2::ZERO);
        mesh.check().expect("Disk mesh must be consistent");
    }

    #[test]
    fn t_disk_points_inside_unit_disk() {
        let mut rng = StdRng::seed_from_u64(101);
        let mesh = TriMesh::disk(64, false, &mut rng).expect("Cannot create disk mesh");
        for v in mesh.vertices() {
            assert!(v.length() <= 1.0 + 1e-12);
        }
    }

    #[test]
    fn t_disk_circumcircles_are_empty() {
        let mut rng = StdRng::seed_from_u64(29);
        let mesh = TriMesh::disk(32, false, &mut rng).expect("Cannot create disk mesh");
        for &t in mesh.triangles() {
            let [a, b, c] = mesh.triangle_points(t);
            for (i, &p) in mesh.vertices().iter().enumerate() {
                if t.contains(&(i as u32)) {
                    continue;
                }
                assert!(
                    !in_circumcircle(a, b, c, p),
                    "Vertex {} is inside the circumcircle of triangle {:?}",
                    i,
                    t
                );
            }
        }
    }

    #[test]
    fn t_disk_seeded_rng_is_reproducible() {
        let mesh_a = TriMesh::disk(20, false, &mut StdRng::seed_from_u64(5))
            .expect("Cannot create disk mesh");
        let mesh_b = TriMesh::disk(20, false, &mut StdRng::seed_from_u64(5))
            .expect("Cannot create disk mesh");
        assert_eq!(mesh_a.vertices(), mesh_b.vertices());
        assert_eq!(mesh_a.triangles(), mesh_b.triangles());
    }

    #[test]
    fn t_disk_too_few_nodes() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            TriMesh::disk(2, false, &mut rng),
            Err(Error::TooFewNodes(Shape::Circle, 2))
        ));
    }

    #[test]
    fn t_collinear_points_fail() {
        let points: Vec<glam::DVec2> = (0..4).map(|i| glam::dvec2(i as f64, 0.0)).collect();
        assert!(matches!(
            Delaunator.triangulate(&points),
            Err(Error::TriangulationFailed)
        ));
    }
}
