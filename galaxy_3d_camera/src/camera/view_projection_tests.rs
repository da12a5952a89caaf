use glam::{Mat4, Quat, Vec3, Vec4};
use std::f32::consts::{FRAC_PI_2, FRAC_PI_3};
use super::*;

const EPSILON: f32 = 1e-4;

fn lens() -> CameraParameters {
    CameraParameters::new(FRAC_PI_3, 0.1, 100.0, 1.0, false)
}

fn ndc_z(projection: &Mat4, view_depth: f32) -> f32 {
    let clip = *projection * Vec4::new(0.0, 0.0, -view_depth, 1.0);
    clip.z / clip.w
}

// ============================================================================
// View matrix
// ============================================================================

#[test]
fn test_view_eye_and_forward_identity_rotation() {
    let vp = ViewProjection::derive(&lens(), 1.0, Vec3::new(0.0, 0.0, 5.0), Quat::IDENTITY);

    assert!(vp.eye().abs_diff_eq(Vec3::new(0.0, 0.0, 5.0), EPSILON));
    assert!(vp.forward().abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), EPSILON));
}

#[test]
fn test_view_moves_eye_to_origin() {
    let view = derive_view(Vec3::new(0.0, 0.0, 5.0), Quat::IDENTITY);
    let eye_in_view = view.transform_point3(Vec3::new(0.0, 0.0, 5.0));
    assert!(eye_in_view.abs_diff_eq(Vec3::ZERO, EPSILON));
}

#[test]
fn test_view_matches_look_at_for_identity_rotation() {
    let position = Vec3::new(1.0, 2.0, 3.0);
    let view = derive_view(position, Quat::IDENTITY);
    let expected = Mat4::look_at_rh(position, position + Vec3::NEG_Z, Vec3::Y);
    assert!(view.abs_diff_eq(expected, EPSILON));
}

#[test]
fn test_view_follows_rotation() {
    // Yaw 90 degrees left: -Z turns into -X
    let rotation = Quat::from_rotation_y(FRAC_PI_2);
    let vp = ViewProjection::derive(&lens(), 1.0, Vec3::ZERO, rotation);

    assert!(vp.forward().abs_diff_eq(Vec3::new(-1.0, 0.0, 0.0), EPSILON));
}

#[test]
fn test_view_up_follows_rotation() {
    // Roll 90 degrees: world +X becomes camera up, so it maps to view +Y
    let rotation = Quat::from_rotation_z(-FRAC_PI_2);
    let view = derive_view(Vec3::ZERO, rotation);
    let up_in_view = view.transform_vector3(rotation * Vec3::Y);
    assert!(up_in_view.abs_diff_eq(Vec3::Y, EPSILON));
}

// ============================================================================
// Projection matrix
// ============================================================================

#[test]
fn test_projection_near_maps_to_minus_one() {
    let projection = derive_projection(&lens(), 1.0);
    assert!((ndc_z(&projection, 0.1) - -1.0).abs() < EPSILON);
}

#[test]
fn test_projection_far_maps_to_plus_one() {
    let projection = derive_projection(&lens(), 1.0);
    assert!((ndc_z(&projection, 100.0) - 1.0).abs() < 1e-3);
}

#[test]
fn test_projection_uses_given_aspect() {
    let projection = derive_projection(&lens(), 1920.0 / 1080.0);
    let expected = Mat4::perspective_rh_gl(FRAC_PI_3, 1920.0 / 1080.0, 0.1, 100.0);
    assert_eq!(projection, expected);
    // x scale is y scale divided by aspect
    assert!((projection.x_axis.x - projection.y_axis.y / (1920.0 / 1080.0)).abs() < EPSILON);
}

// ============================================================================
// Combined
// ============================================================================

#[test]
fn test_view_projection_matrix() {
    let vp = ViewProjection::derive(&lens(), 1.0, Vec3::new(0.0, 0.0, 5.0), Quat::IDENTITY);
    assert_eq!(vp.view_projection_matrix(), *vp.projection_matrix() * *vp.view_matrix());
}

#[test]
fn test_new_keeps_matrices() {
    let vp = ViewProjection::new(Mat4::IDENTITY, Mat4::from_scale(Vec3::splat(2.0)));
    assert_eq!(*vp.view_matrix(), Mat4::IDENTITY);
    assert_eq!(*vp.projection_matrix(), Mat4::from_scale(Vec3::splat(2.0)));
}
