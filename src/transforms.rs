//! Transform-matrix builders for camera and model placement.
//!
//! All angles are taken in degrees and all matrices target the OpenGL
//! clip volume (Z in `[-1, 1]`).

use glam::{Mat4, Vec3};

/// One of the three principal rotation axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationAxis {
    X,
    Y,
    Z,
}

/// Orthographic projection for the given view volume.
pub fn ortho_matrix(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    Mat4::orthographic_rh_gl(left, right, bottom, top, near, far)
}

/// Perspective projection with a vertical field of view in degrees.
pub fn perspective_matrix(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    Mat4::perspective_rh_gl(fov_y.to_radians(), aspect, near, far)
}

pub fn translation_matrix(offset: Vec3) -> Mat4 {
    Mat4::from_translation(offset)
}

/// Rotation about an arbitrary axis. A zero axis yields the identity.
pub fn rotation_matrix(degrees: f32, axis: Vec3) -> Mat4 {
    let axis = axis.normalize_or_zero();
    if axis == Vec3::ZERO {
        Mat4::IDENTITY
    } else {
        Mat4::from_axis_angle(axis, degrees.to_radians())
    }
}

/// Rotation about one of the principal axes.
pub fn axis_rotation_matrix(axis: RotationAxis, degrees: f32) -> Mat4 {
    let radians = degrees.to_radians();
    match axis {
        RotationAxis::X => Mat4::from_rotation_x(radians),
        RotationAxis::Y => Mat4::from_rotation_y(radians),
        RotationAxis::Z => Mat4::from_rotation_z(radians),
    }
}

pub fn scale_matrix(factors: Vec3) -> Mat4 {
    Mat4::from_scale(factors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_turn_about_y_carries_x_to_minus_z() {
        let m = rotation_matrix(90.0, Vec3::Y);
        let moved = m.transform_point3(Vec3::X);
        assert!(moved.distance(Vec3::new(0.0, 0.0, -1.0)) < 1e-6);
    }

    #[test]
    fn zero_axis_falls_back_to_identity() {
        assert_eq!(rotation_matrix(45.0, Vec3::ZERO), Mat4::IDENTITY);
    }

    #[test]
    fn principal_axis_rotation_matches_the_general_form() {
        let principal = axis_rotation_matrix(RotationAxis::Z, 30.0);
        let general = rotation_matrix(30.0, Vec3::Z);
        assert!(principal.abs_diff_eq(general, 1e-6));
    }

    #[test]
    fn perspective_takes_the_field_of_view_in_degrees() {
        let m = perspective_matrix(90.0, 1.0, 0.1, 100.0);
        // At a 90 degree vertical fov the focal length is exactly 1.
        assert!((m.col(1).y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn ortho_maps_the_volume_corners_to_clip_corners() {
        let m = ortho_matrix(-2.0, 2.0, -1.0, 1.0, 0.1, 10.0);
        let near_corner = m.transform_point3(Vec3::new(2.0, 1.0, -0.1));
        assert!(near_corner.distance(Vec3::new(1.0, 1.0, -1.0)) < 1e-6);
        let far_corner = m.transform_point3(Vec3::new(-2.0, -1.0, -10.0));
        assert!(far_corner.distance(Vec3::new(-1.0, -1.0, 1.0)) < 1e-6);
    }

    #[test]
    fn translation_and_scale_compose_in_order() {
        let m = translation_matrix(Vec3::new(1.0, 2.0, 3.0)) * scale_matrix(Vec3::splat(2.0));
        let moved = m.transform_point3(Vec3::ONE);
        assert_eq!(moved, Vec3::new(3.0, 4.0, 5.0));
    }
}
