#![warn(missing_docs)]

//! Math types for the foldkit hinge engine.
//!
//! Thin wrappers around nalgebra providing the types the articulated
//! panel tree works in: points, vectors, principal rotation axes,
//! rigid transforms, and the fold interpolation helper.

use nalgebra::{Matrix4, Vector3, Vector4};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// One of the three principal rotation axes.
///
/// Every hinge in a panel tree rotates about a principal axis of its
/// parent panel's local frame; the fold direction is carried by the
/// sign of the hinge angle, so the axis itself is unsigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The X axis.
    X,
    /// The Y axis.
    Y,
    /// The Z axis.
    Z,
}

impl Axis {
    /// Unit vector along this axis.
    pub fn unit(&self) -> Vec3 {
        match self {
            Axis::X => Vec3::x(),
            Axis::Y => Vec3::y(),
            Axis::Z => Vec3::z(),
        }
    }
}

/// Linear interpolation between `a` and `b` by `t`.
///
/// `t` is not clamped here; callers that need a bounded parameter
/// clamp before interpolating.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// A 4x4 affine transformation matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// The underlying 4x4 matrix.
    pub matrix: Matrix4<f64>,
}

impl Transform {
    /// Identity transform.
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Translation by `(dx, dy, dz)`.
    pub fn translation(dx: f64, dy: f64, dz: f64) -> Self {
        let mut m = Matrix4::identity();
        m[(0, 3)] = dx;
        m[(1, 3)] = dy;
        m[(2, 3)] = dz;
        Self { matrix: m }
    }

    /// Translation by a vector.
    pub fn translation_vec(v: &Vec3) -> Self {
        Self::translation(v.x, v.y, v.z)
    }

    /// Rotation about the X axis by `angle` radians.
    pub fn rotation_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix4::identity();
        m[(1, 1)] = c;
        m[(1, 2)] = -s;
        m[(2, 1)] = s;
        m[(2, 2)] = c;
        Self { matrix: m }
    }

    /// Rotation about the Y axis by `angle` radians.
    pub fn rotation_y(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix4::identity();
        m[(0, 0)] = c;
        m[(0, 2)] = s;
        m[(2, 0)] = -s;
        m[(2, 2)] = c;
        Self { matrix: m }
    }

    /// Rotation about the Z axis by `angle` radians.
    pub fn rotation_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix4::identity();
        m[(0, 0)] = c;
        m[(0, 1)] = -s;
        m[(1, 0)] = s;
        m[(1, 1)] = c;
        Self { matrix: m }
    }

    /// Rotation about a principal axis by `angle` radians.
    pub fn rotation(axis: Axis, angle: f64) -> Self {
        match axis {
            Axis::X => Self::rotation_x(angle),
            Axis::Y => Self::rotation_y(angle),
            Axis::Z => Self::rotation_z(angle),
        }
    }

    /// Compose with a child-local transform.
    ///
    /// The result applies `local` first, then `self` — i.e. it places
    /// `local` inside this transform's frame, which is exactly the
    /// parent-to-child chaining a panel tree walks.
    pub fn compose(&self, local: &Transform) -> Self {
        Self {
            matrix: self.matrix * local.matrix,
        }
    }

    /// Transform a point.
    pub fn apply_point(&self, p: &Point3) -> Point3 {
        let v = self.matrix * Vector4::new(p.x, p.y, p.z, 1.0);
        Point3::new(v.x, v.y, v.z)
    }

    /// Transform a direction vector (rotation only, no translation).
    pub fn apply_vec(&self, v: &Vec3) -> Vec3 {
        let r = self.matrix * Vector4::new(v.x, v.y, v.z, 0.0);
        Vec3::new(r.x, r.y, r.z)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Linear distance tolerance.
    pub linear: f64,
    /// Angular tolerance in radians.
    pub angular: f64,
}

impl Tolerance {
    /// Default tolerances (1e-9 linear, 1e-12 rad angular).
    pub const DEFAULT: Self = Self {
        linear: 1e-9,
        angular: 1e-12,
    };

    /// Check if two points are coincident within tolerance.
    pub fn points_equal(&self, a: &Point3, b: &Point3) -> bool {
        (a - b).norm() < self.linear
    }

    /// Check if two angles are effectively equal (in radians).
    pub fn angles_equal(&self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.angular
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_identity_transform() {
        let t = Transform::identity();
        let p = Point3::new(1.0, 2.0, 3.0);
        let result = t.apply_point(&p);
        assert!((result - p).norm() < 1e-12);
    }

    #[test]
    fn test_translation() {
        let t = Transform::translation(10.0, 20.0, 30.0);
        let p = Point3::new(1.0, 2.0, 3.0);
        let result = t.apply_point(&p);
        assert!((result.x - 11.0).abs() < 1e-12);
        assert!((result.y - 22.0).abs() < 1e-12);
        assert!((result.z - 33.0).abs() < 1e-12);
    }

    #[test]
    fn test_rotation_z_90() {
        let t = Transform::rotation_z(FRAC_PI_2);
        let p = Point3::new(1.0, 0.0, 0.0);
        let result = t.apply_point(&p);
        assert!(result.x.abs() < 1e-12);
        assert!((result.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rotation_axis_dispatch() {
        // The Axis form must match the explicit per-axis constructors.
        for (axis, explicit) in [
            (Axis::X, Transform::rotation_x(0.7)),
            (Axis::Y, Transform::rotation_y(0.7)),
            (Axis::Z, Transform::rotation_z(0.7)),
        ] {
            let via_axis = Transform::rotation(axis, 0.7);
            assert_eq!(via_axis, explicit);
        }
    }

    #[test]
    fn test_hinge_fold_up() {
        // A point sitting +X of a Y-axis hinge swings up to +Z under a
        // negative quarter turn — the cube side fold.
        let t = Transform::rotation_y(-FRAC_PI_2);
        let p = Point3::new(2.0, 0.0, 0.0);
        let result = t.apply_point(&p);
        assert!(result.x.abs() < 1e-12);
        assert!((result.z - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_compose_parent_child() {
        // compose() applies the local transform first: a child offset
        // inside a translated parent frame lands at the sum.
        let parent = Transform::translation(1.0, 0.0, 0.0);
        let child = Transform::translation(0.0, 2.0, 0.0);
        let world = parent.compose(&child);
        let result = world.apply_point(&Point3::origin());
        assert!((result.x - 1.0).abs() < 1e-12);
        assert!((result.y - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_compose_hinge_chain() {
        // T(attach) . R(axis, angle) . T(offset): the standard hinge
        // chain. Attach at x=1, quarter turn about Y, panel centered
        // one unit beyond the hinge: the panel center ends above the
        // hinge line.
        let chain = Transform::translation(1.0, 0.0, 0.0)
            .compose(&Transform::rotation_y(-FRAC_PI_2))
            .compose(&Transform::translation(1.0, 0.0, 0.0));
        let center = chain.apply_point(&Point3::origin());
        assert!((center.x - 1.0).abs() < 1e-12);
        assert!((center.z - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_apply_vec_ignores_translation() {
        let t = Transform::translation(5.0, 5.0, 5.0);
        let v = t.apply_vec(&Vec3::z());
        assert!((v - Vec3::z()).norm() < 1e-12);
    }

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        assert!((lerp(FRAC_PI_2, 0.0, 0.0) - FRAC_PI_2).abs() < 1e-12);
        assert!(lerp(FRAC_PI_2, 0.0, 1.0).abs() < 1e-12);
        assert!((lerp(FRAC_PI_2, 0.0, 0.5) - PI / 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_lerp_signed_angles() {
        // Negative closed angles interpolate toward zero from below.
        let v = lerp(-FRAC_PI_2, 0.0, 0.25);
        assert!((v + 3.0 * PI / 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_axis_units() {
        assert_eq!(Axis::X.unit(), Vec3::x());
        assert_eq!(Axis::Y.unit(), Vec3::y());
        assert_eq!(Axis::Z.unit(), Vec3::z());
    }

    #[test]
    fn test_tolerance_angles_equal() {
        let tol = Tolerance::DEFAULT;
        assert!(tol.angles_equal(1.0, 1.0 + 1e-13));
        assert!(!tol.angles_equal(1.0, 1.0 + 1e-9));
    }
}
