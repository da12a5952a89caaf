/// Central camera resource manager.
///
/// Stores named camera resources and supports hot reload: a reload replaces
/// the stored resource and notifies every registered reload callback, which
/// is how the host learns it must forward the new lens data to live cameras.

use std::sync::Arc;
use rustc_hash::FxHashMap;
use crate::error::Result;
use crate::{engine_bail, engine_err, engine_info};
use super::camera_resource::{CameraResource, CameraResourceDesc};

/// Callback invoked after a successful reload
pub type ReloadCallback = Box<dyn FnMut(&Arc<CameraResource>) + Send>;

pub struct ResourceManager {
    camera_resources: FxHashMap<String, Arc<CameraResource>>,
    reload_callbacks: Vec<ReloadCallback>,
}

impl ResourceManager {
    /// Create a new empty resource manager
    pub fn new() -> Self {
        Self {
            camera_resources: FxHashMap::default(),
            reload_callbacks: Vec::new(),
        }
    }

    /// Load a named camera resource
    ///
    /// # Errors
    ///
    /// Returns an error if the name is taken or the description is invalid.
    pub fn create_camera_resource(
        &mut self,
        name: &str,
        desc: &CameraResourceDesc,
    ) -> Result<Arc<CameraResource>> {
        if self.camera_resources.contains_key(name) {
            engine_bail!("galaxy3d::ResourceManager", AlreadyExists,
                "CameraResource '{}' already exists", name);
        }

        let resource = Arc::new(CameraResource::from_desc(name, desc)?);
        self.camera_resources.insert(name.to_string(), Arc::clone(&resource));
        Ok(resource)
    }

    /// Get a camera resource by name
    pub fn camera_resource(&self, name: &str) -> Option<Arc<CameraResource>> {
        self.camera_resources.get(name).cloned()
    }

    /// Replace a loaded camera resource and notify reload callbacks
    ///
    /// Handles previously returned by `camera_resource` keep the old data.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the resource was never loaded
    /// - `InvalidParameters` if the new description is invalid; the old
    ///   resource stays in place
    pub fn reload_camera_resource(
        &mut self,
        name: &str,
        desc: &CameraResourceDesc,
    ) -> Result<Arc<CameraResource>> {
        if !self.camera_resources.contains_key(name) {
            engine_bail!("galaxy3d::ResourceManager", NotFound,
                "{} could not be reloaded since it was never loaded before", name);
        }

        let resource = CameraResource::from_desc(name, desc).map_err(|err| {
            engine_err!("galaxy3d::ResourceManager", InvalidParameters,
                "{} has invalid format and could not be reloaded: {}", name, err)
        })?;
        let resource = Arc::new(resource);
        self.camera_resources.insert(name.to_string(), Arc::clone(&resource));

        for callback in self.reload_callbacks.iter_mut() {
            callback(&resource);
        }

        engine_info!("galaxy3d::ResourceManager", "{} was successfully reloaded", name);
        Ok(resource)
    }

    /// Register a callback run after every successful reload
    pub fn register_reload_callback(&mut self, callback: ReloadCallback) {
        self.reload_callbacks.push(callback);
    }

    /// Remove a camera resource by name
    ///
    /// Returns the removed resource, or None if not found.
    pub fn remove_camera_resource(&mut self, name: &str) -> Option<Arc<CameraResource>> {
        self.camera_resources.remove(name)
    }

    /// Get the number of camera resources
    pub fn camera_resource_count(&self) -> usize {
        self.camera_resources.len()
    }
}

impl Default for ResourceManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "resource_manager_tests.rs"]
mod tests;
