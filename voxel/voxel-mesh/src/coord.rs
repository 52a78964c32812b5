//! Discrete voxel coordinates.

use nalgebra::{Point3, Vector3};

/// Offsets of the 26 Moore neighbours, in a fixed enumeration order.
///
/// Bit `i` of a voxel's neighbour mask refers to `MOORE_OFFSETS[i]`.
pub const MOORE_OFFSETS: [(i32, i32, i32); 26] = moore_offsets();

const fn moore_offsets() -> [(i32, i32, i32); 26] {
    let mut result = [(0, 0, 0); 26];
    let mut idx = 0;
    let mut dx = -1;
    while dx <= 1 {
        let mut dy = -1;
        while dy <= 1 {
            let mut dz = -1;
            while dz <= 1 {
                if !(dx == 0 && dy == 0 && dz == 0) {
                    result[idx] = (dx, dy, dz);
                    idx += 1;
                }
                dz += 1;
            }
            dy += 1;
        }
        dx += 1;
    }
    result
}

/// A discrete 3D coordinate in voxel/grid space.
///
/// Uses `i32` coordinates to support both positive and negative indices,
/// allowing the grid origin to be placed anywhere in world space.
///
/// # Example
///
/// ```
/// use voxel_mesh::VoxelCoord;
///
/// let coord = VoxelCoord::new(3, -1, 7);
/// assert_eq!(coord.y, -1);
/// assert_eq!(coord.moore_neighbours().len(), 26);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VoxelCoord {
    /// X coordinate (width axis).
    pub x: i32,
    /// Y coordinate (height axis).
    pub y: i32,
    /// Z coordinate (depth axis).
    pub z: i32,
}

impl VoxelCoord {
    /// Create a new voxel coordinate.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The coordinate at the origin.
    #[inline]
    #[must_use]
    pub const fn origin() -> Self {
        Self::new(0, 0, 0)
    }

    /// The coordinate as an array.
    #[inline]
    #[must_use]
    pub const fn as_array(self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }

    /// The voxel centre as a floating-point point in voxel space.
    #[must_use]
    pub fn to_point(self) -> Point3<f64> {
        Point3::new(f64::from(self.x), f64::from(self.y), f64::from(self.z))
    }

    /// The coordinate as a floating-point vector.
    #[must_use]
    pub fn to_vector(self) -> Vector3<f64> {
        Vector3::new(f64::from(self.x), f64::from(self.y), f64::from(self.z))
    }

    /// The nearest voxel coordinate to a voxel-space point.
    ///
    /// Components round to the nearest integer, so a voxel owns the
    /// half-open unit cube centred on its coordinate.
    ///
    /// # Example
    ///
    /// ```
    /// use nalgebra::Point3;
    /// use voxel_mesh::VoxelCoord;
    ///
    /// let coord = VoxelCoord::from_point(&Point3::new(1.4, -0.6, 2.5));
    /// assert_eq!(coord, VoxelCoord::new(1, -1, 3));
    /// ```
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_point(point: &Point3<f64>) -> Self {
        Self::new(
            point.x.round() as i32,
            point.y.round() as i32,
            point.z.round() as i32,
        )
    }

    /// The 6 face-adjacent neighbours (von Neumann neighbourhood).
    #[must_use]
    pub const fn face_neighbours(self) -> [Self; 6] {
        [
            Self::new(self.x.wrapping_add(1), self.y, self.z),
            Self::new(self.x.wrapping_sub(1), self.y, self.z),
            Self::new(self.x, self.y.wrapping_add(1), self.z),
            Self::new(self.x, self.y.wrapping_sub(1), self.z),
            Self::new(self.x, self.y, self.z.wrapping_add(1)),
            Self::new(self.x, self.y, self.z.wrapping_sub(1)),
        ]
    }

    /// All 26 neighbours (Moore neighbourhood), in [`MOORE_OFFSETS`]
    /// order.
    #[must_use]
    pub fn moore_neighbours(self) -> [Self; 26] {
        let mut result = [Self::origin(); 26];
        for (slot, (dx, dy, dz)) in result.iter_mut().zip(MOORE_OFFSETS) {
            *slot = Self::new(
                self.x.wrapping_add(dx),
                self.y.wrapping_add(dy),
                self.z.wrapping_add(dz),
            );
        }
        result
    }

    /// Offset by component deltas.
    #[inline]
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(
            self.x.wrapping_add(dx),
            self.y.wrapping_add(dy),
            self.z.wrapping_add(dz),
        )
    }
}

impl From<(i32, i32, i32)> for VoxelCoord {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<[i32; 3]> for VoxelCoord {
    fn from([x, y, z]: [i32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl std::ops::Add for VoxelCoord {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(
            self.x.wrapping_add(other.x),
            self.y.wrapping_add(other.y),
            self.z.wrapping_add(other.z),
        )
    }
}

impl std::ops::Sub for VoxelCoord {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(
            self.x.wrapping_sub(other.x),
            self.y.wrapping_sub(other.y),
            self.z.wrapping_sub(other.z),
        )
    }
}
