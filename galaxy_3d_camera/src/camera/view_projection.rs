/// ViewProjection: the matrices derived for the active camera each frame.
///
/// Conventions:
/// - right-handed, camera looks down -Z with +Y up in its local frame
/// - OpenGL clip depth: a point at `near_z` maps to NDC z = -1, at `far_z` to +1

use glam::{Mat4, Quat, Vec3};
use super::camera_parameters::CameraParameters;

/// Canonical forward axis of an unrotated camera
pub const CAMERA_FORWARD: Vec3 = Vec3::NEG_Z;

/// Canonical up axis of an unrotated camera
pub const CAMERA_UP: Vec3 = Vec3::Y;

/// Perspective projection for a lens at the given aspect ratio
pub fn derive_projection(parameters: &CameraParameters, aspect_ratio: f32) -> Mat4 {
    Mat4::perspective_rh_gl(parameters.fov, aspect_ratio, parameters.near_z, parameters.far_z)
}

/// Look-at view matrix for a camera at `position` with world `rotation`.
///
/// target = position + rotation * forward, up = rotation * up.
pub fn derive_view(position: Vec3, rotation: Quat) -> Mat4 {
    let forward = rotation * CAMERA_FORWARD;
    let up = rotation * CAMERA_UP;
    Mat4::look_at_rh(position, position + forward, up)
}

/// View and projection of one camera for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewProjection {
    view_matrix: Mat4,
    projection_matrix: Mat4,
}

impl ViewProjection {
    pub fn new(view: Mat4, projection: Mat4) -> Self {
        Self {
            view_matrix: view,
            projection_matrix: projection,
        }
    }

    /// Derive both matrices from lens parameters and a world transform
    pub fn derive(
        parameters: &CameraParameters,
        aspect_ratio: f32,
        position: Vec3,
        rotation: Quat,
    ) -> Self {
        Self::new(
            derive_view(position, rotation),
            derive_projection(parameters, aspect_ratio),
        )
    }

    /// View matrix (inverse of the camera's world transform).
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    /// Perspective projection matrix.
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }

    /// Camera position in world space
    pub fn eye(&self) -> Vec3 {
        self.view_matrix.inverse().w_axis.truncate()
    }

    /// Unit look direction in world space
    pub fn forward(&self) -> Vec3 {
        -self.view_matrix.inverse().z_axis.truncate().normalize()
    }
}

#[cfg(test)]
#[path = "view_projection_tests.rs"]
mod tests;
