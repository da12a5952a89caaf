/// Resource-level camera type.
///
/// A CameraResource is the loaded form of a camera description: a name and
/// validated lens parameters. Instances copy the parameters on attach and
/// on reload, so a resource can be swapped without touching live cameras
/// until the host forwards the reload.

use crate::error::Result;
use crate::camera::CameraParameters;

// ===== DESCRIPTOR =====

/// Description used to create or reload a camera resource
#[derive(Debug, Clone, PartialEq)]
pub struct CameraResourceDesc {
    pub fov: f32,
    pub near_z: f32,
    pub far_z: f32,
    pub aspect_ratio: f32,
    pub auto_aspect_ratio: bool,
}

impl CameraResourceDesc {
    pub fn to_parameters(&self) -> CameraParameters {
        CameraParameters::new(self.fov, self.near_z, self.far_z, self.aspect_ratio, self.auto_aspect_ratio)
    }
}

impl From<CameraParameters> for CameraResourceDesc {
    fn from(p: CameraParameters) -> Self {
        Self {
            fov: p.fov,
            near_z: p.near_z,
            far_z: p.far_z,
            aspect_ratio: p.aspect_ratio,
            auto_aspect_ratio: p.auto_aspect_ratio,
        }
    }
}

// ===== RESOURCE =====

/// Loaded camera lens data
#[derive(Debug, Clone, PartialEq)]
pub struct CameraResource {
    name: String,
    parameters: CameraParameters,
}

impl CameraResource {
    /// Build a resource from its description.
    ///
    /// # Errors
    ///
    /// `InvalidParameters` if the lens values break the camera invariants.
    pub fn from_desc(name: &str, desc: &CameraResourceDesc) -> Result<Self> {
        let parameters = desc.to_parameters();
        parameters.validate()?;
        Ok(Self {
            name: name.to_string(),
            parameters,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &CameraParameters {
        &self.parameters
    }
}
