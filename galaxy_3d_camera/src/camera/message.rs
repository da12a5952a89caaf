/// Messages a camera instance accepts from the host framework.
///
/// A closed set, dispatched with a single match in `CameraSystem::on_message`.

/// Runtime override of the lens parameters (auto-aspect flag not included)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SetCameraParameters {
    pub fov: f32,
    pub near_z: f32,
    pub far_z: f32,
    pub aspect_ratio: f32,
}

/// Messages routed to a single camera instance
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraMessage {
    /// Replace fov, near, far and aspect ratio
    SetCameraParameters(SetCameraParameters),
    /// Push this camera on top of the focus stack
    AcquireFocus,
    /// Remove this camera from the focus stack
    ReleaseFocus,
}

impl CameraMessage {
    pub const SET_CAMERA: &'static str = "set_camera";
    pub const ACQUIRE_CAMERA_FOCUS: &'static str = "acquire_camera_focus";
    pub const RELEASE_CAMERA_FOCUS: &'static str = "release_camera_focus";

    /// Legacy message identifier, for hosts that still route by name
    pub fn name(&self) -> &'static str {
        match self {
            CameraMessage::SetCameraParameters(_) => Self::SET_CAMERA,
            CameraMessage::AcquireFocus => Self::ACQUIRE_CAMERA_FOCUS,
            CameraMessage::ReleaseFocus => Self::RELEASE_CAMERA_FOCUS,
        }
    }

    /// Parse a payload-less message from its legacy identifier.
    ///
    /// `set_camera` carries data and cannot be built from a name alone.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            Self::ACQUIRE_CAMERA_FOCUS => Some(CameraMessage::AcquireFocus),
            Self::RELEASE_CAMERA_FOCUS => Some(CameraMessage::ReleaseFocus),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;
