/// CameraParameters: lens configuration copied into each camera instance.
///
/// Loaded from a camera resource on attach and on hot reload, and partially
/// overridden at runtime by the `SetCameraParameters` message.

use crate::error::{Error, Result};
use super::message::SetCameraParameters;

/// Lens parameters of a perspective camera.
///
/// `aspect_ratio` is ignored when `auto_aspect_ratio` is set; the viewport
/// dimensions are used instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraParameters {
    /// Vertical field of view in radians
    pub fov: f32,
    /// Near clip distance (> 0)
    pub near_z: f32,
    /// Far clip distance (> near_z)
    pub far_z: f32,
    /// Width / height (> 0)
    pub aspect_ratio: f32,
    /// Derive the aspect ratio from the viewport every frame
    pub auto_aspect_ratio: bool,
}

impl CameraParameters {
    pub fn new(fov: f32, near_z: f32, far_z: f32, aspect_ratio: f32, auto_aspect_ratio: bool) -> Self {
        Self { fov, near_z, far_z, aspect_ratio, auto_aspect_ratio }
    }

    /// Check the lens invariants.
    ///
    /// # Errors
    ///
    /// `InvalidParameters` unless all values are finite, `fov` is in (0, π),
    /// `0 < near_z < far_z`, and `aspect_ratio > 0` when not auto.
    pub fn validate(&self) -> Result<()> {
        if !(self.fov.is_finite() && self.near_z.is_finite()
            && self.far_z.is_finite() && self.aspect_ratio.is_finite())
        {
            return Err(Error::InvalidParameters(format!("non-finite lens value in {:?}", self)));
        }
        if self.fov <= 0.0 || self.fov >= std::f32::consts::PI {
            return Err(Error::InvalidParameters(format!("fov {} outside (0, pi)", self.fov)));
        }
        if self.near_z <= 0.0 {
            return Err(Error::InvalidParameters(format!("near_z {} must be > 0", self.near_z)));
        }
        if self.far_z <= self.near_z {
            return Err(Error::InvalidParameters(format!(
                "far_z {} must be > near_z {}", self.far_z, self.near_z
            )));
        }
        if !self.auto_aspect_ratio && self.aspect_ratio <= 0.0 {
            return Err(Error::InvalidParameters(format!(
                "aspect_ratio {} must be > 0", self.aspect_ratio
            )));
        }
        Ok(())
    }

    /// Apply a runtime override. The auto-aspect flag is not part of the
    /// message and is kept.
    pub fn with_override(&self, set: &SetCameraParameters) -> Self {
        Self {
            fov: set.fov,
            near_z: set.near_z,
            far_z: set.far_z,
            aspect_ratio: set.aspect_ratio,
            auto_aspect_ratio: self.auto_aspect_ratio,
        }
    }

    /// Aspect ratio to project with for a viewport of the given size.
    ///
    /// Falls back to the stored ratio when auto-aspect is set but the
    /// viewport is degenerate (zero width or height, e.g. a minimized window).
    pub fn effective_aspect_ratio(&self, viewport_width: u32, viewport_height: u32) -> f32 {
        if self.auto_aspect_ratio && viewport_width > 0 && viewport_height > 0 {
            viewport_width as f32 / viewport_height as f32
        } else {
            self.aspect_ratio
        }
    }
}

impl Default for CameraParameters {
    fn default() -> Self {
        Self {
            fov: std::f32::consts::FRAC_PI_4,
            near_z: 0.1,
            far_z: 1000.0,
            aspect_ratio: 16.0 / 9.0,
            auto_aspect_ratio: true,
        }
    }
}

#[cfg(test)]
#[path = "camera_parameters_tests.rs"]
mod tests;
