//! Camera module: camera worlds, focus stack, lens parameters and
//! view/projection derivation.
//!
//! A `CameraWorld` owns every camera of one scene partition and decides,
//! through its `FocusStack`, which one drives rendering.

mod camera_parameters;
mod camera_world;
mod focus_stack;
mod message;
mod view_projection;

pub use camera_parameters::CameraParameters;
pub use camera_world::{
    CameraInstance, CameraKey, CameraWorld, CameraWorldConfig, SceneObjectId,
};
pub use focus_stack::FocusStack;
pub use message::{CameraMessage, SetCameraParameters};
pub use view_projection::{
    ViewProjection, derive_projection, derive_view, CAMERA_FORWARD, CAMERA_UP,
};
