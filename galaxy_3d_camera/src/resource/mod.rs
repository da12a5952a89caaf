//! Resource management module
//!
//! Provides storage, access and hot reload of camera resources.

mod camera_resource;
mod resource_manager;

pub use camera_resource::{CameraResource, CameraResourceDesc};
pub use resource_manager::{ReloadCallback, ResourceManager};
