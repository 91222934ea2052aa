use rand::{Rng, seq::SliceRandom};

use crate::mesh::TriMesh;

impl TriMesh {
    /// Permute the order of the triangle sequence uniformly at random.
    ///
    /// Triangle contents are untouched; only their position in the sequence
    /// changes. This is a cosmetic reorder and does not affect adjacency.
    pub fn shuffle_triangles(&mut self, rng: &mut impl Rng) {
        self.triangles_mut().shuffle(rng);
    }

    /// Permute the order of the vertex sequence uniformly at random.
    ///
    /// Every triangle index is rewritten to the new position of the same
    /// geometric point, so each triangle still names the identical three
    /// points afterwards. The permutation is applied to the vertex sequence
    /// and the triangle indices in one operation; the two are never visible
    /// in a desynchronized state.
    pub fn shuffle_vertices(&mut self, rng: &mut impl Rng) {
        let nverts = self.num_vertices();
        // perm[k] is the old index of the vertex stored at new position k.
        let mut perm: Vec<u32> = (0..nverts as u32).collect();
        perm.shuffle(rng);
        let mut new_index = vec![0u32; nverts];
        for (k, &old) in perm.iter().enumerate() {
            new_index[old as usize] = k as u32;
        }
        let old_vertices = std::mem::take(self.vertices_mut());
        *self.vertices_mut() = perm
            .iter()
            .map(|&old| old_vertices[old as usize])
            .collect();
        for t in self.triangles_mut() {
            for i in t {
                *i = new_index[*i as usize];
            }
        }
    }
}
