use crate::Mat4;

/// Bottom row of any affine transform in homogeneous coordinates.
pub const HOMOGENEOUS_ROW: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// A camera-to-world transform is legal iff its homogeneous row is exactly `[0, 0, 0, 1]`.
///
/// The comparison is exact: a row of `[0, 0, 0, 0.999999]` is illegal. NaN anywhere in the row
/// makes the pose illegal, a negative zero does not.
pub fn is_legal_pose(transform: &Mat4) -> bool {
    transform[3] == HOMOGENEOUS_ROW
}
