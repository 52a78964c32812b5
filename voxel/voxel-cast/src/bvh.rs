//! Bounding volume hierarchy over a triangle set.

use cobble_types::{Aabb, Triangle};

use crate::ray::{Ray, RayHit, ray_aabb_intersect, ray_triangle_intersect};

/// Triangles per leaf before a node is split.
const LEAF_SIZE: usize = 8;

/// Margin added to triangle boxes so axis-aligned geometry never sits
/// exactly on a slab plane.
const AABB_MARGIN: f64 = 1e-8;

#[derive(Debug, Clone)]
enum NodeKind {
    Leaf { start: u32, count: u32 },
    Internal { left: u32, right: u32 },
}

#[derive(Debug, Clone)]
struct BvhNode {
    aabb: Aabb,
    kind: NodeKind,
}

/// A flat bounding volume hierarchy for ray queries.
///
/// Nodes live in one arena and reference each other by index; leaves
/// reference contiguous runs of a reordered triangle-index buffer. The
/// tree is built once per voxelise call and dropped when the call
/// returns.
///
/// # Example
///
/// ```
/// use cobble_types::{Point3, Triangle, Vector3};
/// use voxel_cast::{Bvh, Ray};
///
/// let triangles = vec![Triangle::new(
///     Point3::new(-1.0, -1.0, 0.0),
///     Point3::new(1.0, -1.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// )];
/// let (bvh, skipped) = Bvh::build(&triangles);
/// assert_eq!(skipped, 0);
///
/// let ray = Ray::new(Point3::new(0.0, 0.0, -5.0), Vector3::z());
/// assert_eq!(bvh.intersections(&ray, &triangles).len(), 1);
/// ```
#[derive(Debug)]
pub struct Bvh {
    nodes: Vec<BvhNode>,
    indices: Vec<u32>,
    root: Option<u32>,
}

impl Bvh {
    /// Build a hierarchy over the triangles.
    ///
    /// Triangles whose bounding box is not finite are left out of the
    /// tree; the second return value counts them so the caller can
    /// report the data-quality problem.
    #[must_use]
    pub fn build(triangles: &[Triangle]) -> (Self, usize) {
        let mut indices = Vec::with_capacity(triangles.len());
        let mut skipped = 0usize;
        for (index, triangle) in triangles.iter().enumerate() {
            if finite_aabb(&triangle.aabb()) {
                #[allow(clippy::cast_possible_truncation)]
                indices.push(index as u32);
            } else {
                skipped += 1;
            }
        }

        let mut bvh = Self {
            nodes: Vec::new(),
            indices,
            root: None,
        };
        if !bvh.indices.is_empty() {
            let root = bvh.build_node(triangles, 0, bvh.indices.len());
            bvh.root = Some(root);
        }
        (bvh, skipped)
    }

    /// Collect every ray/triangle intersection in the tree.
    ///
    /// `triangles` must be the slice the tree was built over. Hits are
    /// returned in traversal order, not sorted by distance.
    #[must_use]
    pub fn intersections(&self, ray: &Ray, triangles: &[Triangle]) -> Vec<RayHit> {
        let mut hits = Vec::new();
        let Some(root) = self.root else {
            return hits;
        };
        let mut stack = vec![root];
        while let Some(index) = stack.pop() {
            let node = &self.nodes[index as usize];
            if ray_aabb_intersect(ray, &node.aabb).is_none() {
                continue;
            }
            match node.kind {
                NodeKind::Leaf { start, count } => {
                    let run = &self.indices[start as usize..(start + count) as usize];
                    for &triangle_index in run {
                        let triangle = &triangles[triangle_index as usize];
                        if let Some(t) = ray_triangle_intersect(ray, triangle) {
                            hits.push(RayHit {
                                t,
                                triangle: triangle_index as usize,
                            });
                        }
                    }
                }
                NodeKind::Internal { left, right } => {
                    stack.push(left);
                    stack.push(right);
                }
            }
        }
        hits
    }

    /// Number of nodes in the arena.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of triangles indexed by the tree.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// Whether the tree indexes no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Build the subtree over `indices[start..end]` and return its arena
    /// index. The range must be non-empty.
    fn build_node(&mut self, triangles: &[Triangle], start: usize, end: usize) -> u32 {
        let count = end - start;
        let mut aabb = Aabb::empty();
        for &index in &self.indices[start..end] {
            aabb = aabb.union(&triangles[index as usize].aabb().padded(AABB_MARGIN));
        }

        if count <= LEAF_SIZE {
            #[allow(clippy::cast_possible_truncation)]
            let kind = NodeKind::Leaf {
                start: start as u32,
                count: count as u32,
            };
            return self.push_node(BvhNode { aabb, kind });
        }

        let axis = aabb.longest_axis();

        // Median split on sorted centroids keeps both halves non-empty
        // even when every centroid coincides.
        self.indices[start..end].sort_unstable_by(|&a, &b| {
            let ca = triangles[a as usize].centroid()[axis];
            let cb = triangles[b as usize].centroid()[axis];
            ca.partial_cmp(&cb).unwrap_or(std::cmp::Ordering::Equal)
        });
        let mid = start + count / 2;

        let left = self.build_node(triangles, start, mid);
        let right = self.build_node(triangles, mid, end);
        let merged = self.nodes[left as usize]
            .aabb
            .union(&self.nodes[right as usize].aabb);
        self.push_node(BvhNode {
            aabb: merged,
            kind: NodeKind::Internal { left, right },
        })
    }

    fn push_node(&mut self, node: BvhNode) -> u32 {
        self.nodes.push(node);
        #[allow(clippy::cast_possible_truncation)]
        let index = (self.nodes.len() - 1) as u32;
        index
    }
}

fn finite_aabb(aabb: &Aabb) -> bool {
    aabb.min.iter().all(|v| v.is_finite()) && aabb.max.iter().all(|v| v.is_finite())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use cobble_types::{Point3, Vector3};

    use super::*;

    /// Deterministic pseudo-random stream for soup generation.
    struct Lcg(u64);

    impl Lcg {
        fn next_f64(&mut self) -> f64 {
            self.0 = self.0.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
            #[allow(clippy::cast_precision_loss)]
            let unit = (self.0 >> 11) as f64 / (1u64 << 53) as f64;
            unit * 20.0 - 10.0
        }

        fn point(&mut self) -> Point3<f64> {
            Point3::new(self.next_f64(), self.next_f64(), self.next_f64())
        }
    }

    fn soup(count: usize, seed: u64) -> Vec<Triangle> {
        let mut rng = Lcg(seed);
        (0..count)
            .map(|_| {
                let base = rng.point();
                Triangle::new(
                    base,
                    base + Vector3::new(rng.next_f64() * 0.1, rng.next_f64() * 0.1, 0.3),
                    base + Vector3::new(0.3, rng.next_f64() * 0.1, rng.next_f64() * 0.1),
                )
            })
            .collect()
    }

    fn check_node(bvh: &Bvh, triangles: &[Triangle], index: u32) {
        let node = &bvh.nodes[index as usize];
        match node.kind {
            NodeKind::Leaf { start, count } => {
                assert!(count as usize <= LEAF_SIZE);
                let run = &bvh.indices[start as usize..(start + count) as usize];
                for &triangle_index in run {
                    let tri_aabb = triangles[triangle_index as usize].aabb();
                    assert!(node.aabb.contains_aabb(&tri_aabb));
                }
            }
            NodeKind::Internal { left, right } => {
                let left_aabb = bvh.nodes[left as usize].aabb;
                let right_aabb = bvh.nodes[right as usize].aabb;
                assert_eq!(node.aabb, left_aabb.union(&right_aabb));
                check_node(bvh, triangles, left);
                check_node(bvh, triangles, right);
            }
        }
    }

    #[test]
    fn invariants_on_random_soup() {
        for seed in [3, 17, 2024] {
            let triangles = soup(120, seed);
            let (bvh, skipped) = Bvh::build(&triangles);
            assert_eq!(skipped, 0);
            assert_eq!(bvh.triangle_count(), 120);
            let root = bvh.root.unwrap();
            check_node(&bvh, &triangles, root);

            // The root box covers every triangle box.
            let all = triangles
                .iter()
                .fold(Aabb::empty(), |acc, t| acc.union(&t.aabb()));
            assert!(bvh.nodes[root as usize].aabb.contains_aabb(&all));
        }
    }

    #[test]
    fn matches_brute_force_hits() {
        let triangles = soup(80, 99);
        let (bvh, _) = Bvh::build(&triangles);
        let mut rng = Lcg(7);
        for _ in 0..50 {
            let origin = Point3::new(rng.next_f64(), rng.next_f64(), -30.0);
            let ray = Ray::new(origin, Vector3::z());

            let mut expected: Vec<RayHit> = triangles
                .iter()
                .enumerate()
                .filter_map(|(i, tri)| {
                    ray_triangle_intersect(&ray, tri).map(|t| RayHit { t, triangle: i })
                })
                .collect();
            let mut actual = bvh.intersections(&ray, &triangles);

            let key = |h: &RayHit| (h.triangle, h.t);
            expected.sort_by(|a, b| key(a).partial_cmp(&key(b)).unwrap());
            actual.sort_by(|a, b| key(a).partial_cmp(&key(b)).unwrap());
            assert_eq!(expected, actual);
        }
    }

    #[test]
    fn skips_non_finite_triangles() {
        let mut triangles = soup(10, 5);
        triangles.push(Triangle::new(
            Point3::new(f64::NAN, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ));
        let (bvh, skipped) = Bvh::build(&triangles);
        assert_eq!(skipped, 1);
        assert_eq!(bvh.triangle_count(), 10);
    }

    #[test]
    fn empty_input_yields_empty_tree() {
        let (bvh, skipped) = Bvh::build(&[]);
        assert_eq!(skipped, 0);
        assert!(bvh.is_empty());
        assert_eq!(bvh.node_count(), 0);
        let ray = Ray::new(Point3::origin(), Vector3::z());
        assert!(bvh.intersections(&ray, &[]).is_empty());
    }

    #[test]
    fn single_leaf_for_small_sets() {
        let triangles = soup(LEAF_SIZE, 42);
        let (bvh, _) = Bvh::build(&triangles);
        assert_eq!(bvh.node_count(), 1);
    }
}
