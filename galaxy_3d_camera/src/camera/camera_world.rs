/// CameraWorld: the bounded camera registry of one scene partition.
///
/// Uses a SlotMap so every camera is addressed by a generational key:
/// removing one camera never moves or invalidates another camera's key,
/// and a key kept after its camera is destroyed resolves to `NotFound`.
///
/// The world also owns the focus stack. Every key in the focus stack refers
/// to a live camera of this world.

use glam::{Quat, Vec3};
use slotmap::{new_key_type, SlotMap};
use crate::error::{Error, Result};
use crate::{engine_bail, engine_debug, engine_error, engine_warn};
use crate::system::{TransformProvider, ViewportProvider};
use super::camera_parameters::CameraParameters;
use super::focus_stack::FocusStack;
use super::view_projection::ViewProjection;

// ===== KEYS =====

new_key_type! {
    /// Stable key for a camera instance within a CameraWorld.
    ///
    /// Slot index plus generation: a key becomes invalid only when its own
    /// camera is destroyed, and is never reused for another camera.
    pub struct CameraKey;
}

/// Opaque, non-owning handle to the scene object a camera is attached to.
///
/// The host framework owns the object and resolves its transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SceneObjectId(pub u64);

// ===== CONFIG =====

/// Fixed capacities of a camera world, set at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraWorldConfig {
    /// Maximum number of live cameras
    pub max_cameras: usize,
    /// Maximum depth of the focus stack
    pub max_focus_stack: usize,
}

impl Default for CameraWorldConfig {
    fn default() -> Self {
        Self {
            max_cameras: 64,
            max_focus_stack: 8,
        }
    }
}

// ===== INSTANCE =====

/// One camera component attached to one scene object
#[derive(Debug, Clone)]
pub struct CameraInstance {
    owner: SceneObjectId,
    parameters: CameraParameters,
}

impl CameraInstance {
    /// Scene object this camera follows
    pub fn owner(&self) -> SceneObjectId {
        self.owner
    }

    /// Current lens parameters
    pub fn parameters(&self) -> &CameraParameters {
        &self.parameters
    }
}

// ===== WORLD =====

/// Registry of camera instances plus the focus stack deciding the active one
#[derive(Debug)]
pub struct CameraWorld {
    config: CameraWorldConfig,
    cameras: SlotMap<CameraKey, CameraInstance>,
    focus_stack: FocusStack,
}

impl CameraWorld {
    /// Create an empty world. Capacities never grow afterwards.
    pub fn new(config: CameraWorldConfig) -> Self {
        Self {
            config,
            cameras: SlotMap::with_capacity_and_key(config.max_cameras),
            focus_stack: FocusStack::new(config.max_focus_stack),
        }
    }

    pub fn config(&self) -> &CameraWorldConfig {
        &self.config
    }

    /// Maximum number of live cameras
    pub fn capacity(&self) -> usize {
        self.config.max_cameras
    }

    pub fn camera_count(&self) -> usize {
        self.cameras.len()
    }

    // ===== LIFECYCLE =====

    /// Register a camera for `owner` with a copy of `parameters`.
    ///
    /// # Errors
    ///
    /// `CapacityExceeded` if the world is full. The world is left unchanged.
    pub fn create_instance(
        &mut self,
        owner: SceneObjectId,
        parameters: CameraParameters,
    ) -> Result<CameraKey> {
        if self.cameras.len() >= self.config.max_cameras {
            engine_error!("galaxy3d::CameraWorld",
                "Camera buffer is full ({}), component disregarded", self.config.max_cameras);
            return Err(Error::CapacityExceeded {
                what: "camera world",
                capacity: self.config.max_cameras,
            });
        }

        let key = self.cameras.insert(CameraInstance { owner, parameters });
        engine_debug!("galaxy3d::CameraWorld", "Camera {:?} created for {:?}", key, owner);
        Ok(key)
    }

    /// Remove a camera. Its focus stack entry, if any, goes first.
    ///
    /// # Errors
    ///
    /// `NotFound` if `key` is not a live camera of this world.
    pub fn destroy_instance(&mut self, key: CameraKey) -> Result<()> {
        if !self.cameras.contains_key(key) {
            engine_bail!("galaxy3d::CameraWorld", NotFound, "Camera {:?} not found", key);
        }

        self.focus_stack.remove_if_present(key);
        self.cameras.remove(key);
        engine_debug!("galaxy3d::CameraWorld", "Camera {:?} destroyed", key);
        Ok(())
    }

    /// Replace the lens parameters of a camera (reload or override).
    ///
    /// Focus stack membership is not touched.
    pub fn update_instance_params(&mut self, key: CameraKey, parameters: CameraParameters) -> Result<()> {
        match self.cameras.get_mut(key) {
            Some(instance) => {
                instance.parameters = parameters;
                Ok(())
            }
            None => engine_bail!("galaxy3d::CameraWorld", NotFound, "Camera {:?} not found", key),
        }
    }

    // ===== ACCESS =====

    pub fn instance(&self, key: CameraKey) -> Option<&CameraInstance> {
        self.cameras.get(key)
    }

    pub fn contains(&self, key: CameraKey) -> bool {
        self.cameras.contains_key(key)
    }

    /// Iterate over all cameras (key, instance)
    pub fn instances(&self) -> impl Iterator<Item = (CameraKey, &CameraInstance)> {
        self.cameras.iter()
    }

    /// First camera attached to `owner`
    pub fn find_by_owner(&self, owner: SceneObjectId) -> Option<CameraKey> {
        self.cameras.iter().find(|(_, c)| c.owner == owner).map(|(k, _)| k)
    }

    // ===== FOCUS =====

    pub fn focus_stack(&self) -> &FocusStack {
        &self.focus_stack
    }

    /// Camera currently driving rendering
    pub fn active_camera(&self) -> Option<CameraKey> {
        self.focus_stack.top()
    }

    /// Push a camera on top of the focus stack.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown key; `CapacityExceeded` (logged as a warning)
    /// when the stack is full, in which case the current top keeps focus.
    pub fn acquire_focus(&mut self, key: CameraKey) -> Result<()> {
        if !self.cameras.contains_key(key) {
            engine_bail!("galaxy3d::CameraWorld", NotFound, "Camera {:?} not found", key);
        }

        self.focus_stack.acquire(key).inspect_err(|_| {
            engine_warn!("galaxy3d::FocusStack",
                "Could not acquire camera focus since the buffer is full ({})",
                self.focus_stack.capacity());
        })
    }

    /// Remove a camera from the focus stack. Not having focus is not an error.
    pub fn release_focus(&mut self, key: CameraKey) -> Result<()> {
        if !self.cameras.contains_key(key) {
            engine_bail!("galaxy3d::CameraWorld", NotFound, "Camera {:?} not found", key);
        }

        self.focus_stack.release(key);
        Ok(())
    }

    // ===== DERIVATION =====

    /// View and projection of the active camera, or None if nothing has focus
    pub fn derive_active(
        &self,
        transforms: &dyn TransformProvider,
        viewport: &dyn ViewportProvider,
    ) -> Option<ViewProjection> {
        let key = self.focus_stack.top()?;
        let instance = self.cameras.get(key)?;

        let aspect_ratio = instance.parameters.effective_aspect_ratio(
            viewport.viewport_width(),
            viewport.viewport_height(),
        );
        let position: Vec3 = transforms.world_position(instance.owner);
        let rotation: Quat = transforms.world_rotation(instance.owner);

        Some(ViewProjection::derive(&instance.parameters, aspect_ratio, position, rotation))
    }
}

impl Default for CameraWorld {
    fn default() -> Self {
        Self::new(CameraWorldConfig::default())
    }
}

#[cfg(test)]
#[path = "camera_world_tests.rs"]
mod tests;
