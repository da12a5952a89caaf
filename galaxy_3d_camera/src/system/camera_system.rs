/// CameraSystem: the hooks the host framework calls for camera components.
///
/// Holds one CameraWorld per scene partition. Worlds never reference each
/// other, so a host may drive different systems from different threads.
/// Within one world every hook is expected to be called from the same tick,
/// one call per event.
///
/// Lifecycle of a camera instance:
/// - `on_attach`: Uninitialized → Live
/// - `on_resource_reload` / `on_message`: Live → Live
/// - `on_detach`: Live → Destroyed

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use crate::error::{Error, Result};
use crate::{engine_debug, engine_err, engine_error, engine_info, engine_trace, engine_warn};
use crate::camera::{CameraKey, CameraMessage, CameraWorld, CameraWorldConfig, SceneObjectId};
use crate::resource::CameraResource;
use super::collaborators::FrameContext;

new_key_type! {
    /// Stable key for a CameraWorld within a CameraSystem.
    pub struct WorldId;
}

/// A world and the resource each of its cameras was loaded from
struct WorldEntry {
    world: CameraWorld,
    resource_bindings: FxHashMap<CameraKey, String>,
}

/// Host-facing camera component system
pub struct CameraSystem {
    worlds: SlotMap<WorldId, WorldEntry>,
}

impl CameraSystem {
    /// Create a system with no worlds
    pub fn new() -> Self {
        Self {
            worlds: SlotMap::with_key(),
        }
    }

    // ===== WORLDS =====

    /// Create the camera world of a new scene partition
    pub fn create_world(&mut self, config: CameraWorldConfig) -> WorldId {
        self.worlds.insert(WorldEntry {
            world: CameraWorld::new(config),
            resource_bindings: FxHashMap::default(),
        })
    }

    /// Delete a world and every camera in it
    ///
    /// Returns the removed world, or None if not found.
    pub fn delete_world(&mut self, id: WorldId) -> Option<CameraWorld> {
        self.worlds.remove(id).map(|entry| entry.world)
    }

    pub fn world(&self, id: WorldId) -> Option<&CameraWorld> {
        self.worlds.get(id).map(|entry| &entry.world)
    }

    pub fn world_mut(&mut self, id: WorldId) -> Option<&mut CameraWorld> {
        self.worlds.get_mut(id).map(|entry| &mut entry.world)
    }

    pub fn world_count(&self) -> usize {
        self.worlds.len()
    }

    fn entry_mut(&mut self, id: WorldId) -> Result<&mut WorldEntry> {
        self.worlds.get_mut(id).ok_or_else(|| {
            engine_err!("galaxy3d::CameraSystem", NotFound, "CameraWorld {:?} not found", id)
        })
    }

    // ===== HOOKS =====

    /// Attach a camera to `scene_object`, loading lens data from `resource`.
    ///
    /// # Errors
    ///
    /// `CapacityExceeded` if the world is full: the component is not attached
    /// and the scene object proceeds without a camera. `NotFound` if the
    /// world does not exist.
    pub fn on_attach(
        &mut self,
        world: WorldId,
        scene_object: SceneObjectId,
        resource: &CameraResource,
    ) -> Result<CameraKey> {
        let entry = self.entry_mut(world)?;
        let key = entry.world.create_instance(scene_object, *resource.parameters())?;
        entry.resource_bindings.insert(key, resource.name().to_string());
        Ok(key)
    }

    /// Detach a camera when its scene object is torn down.
    ///
    /// The camera loses focus first, then is removed from the world.
    ///
    /// # Errors
    ///
    /// `UnexpectedState` if the camera does not exist. This means the host
    /// and the camera world disagree about which cameras are alive, which is
    /// always a caller bug.
    pub fn on_detach(&mut self, world: WorldId, key: CameraKey) -> Result<()> {
        let entry = self.entry_mut(world)?;
        if !entry.world.contains(key) {
            engine_error!("galaxy3d::CameraSystem",
                "Destroyed camera {:?} could not be found, something is fishy", key);
            return Err(Error::UnexpectedState(format!(
                "camera {:?} detached but not registered in world {:?}", key, world
            )));
        }

        entry.world.destroy_instance(key)?;
        entry.resource_bindings.remove(&key);
        Ok(())
    }

    /// Derive and publish the active camera's matrices for this frame.
    ///
    /// With an empty focus stack nothing is published and the renderer keeps
    /// its previous state. A failed publish is logged and the frame goes on.
    pub fn on_tick(&self, world: WorldId, frame: &mut FrameContext<'_>) {
        let Some(entry) = self.worlds.get(world) else {
            engine_error!("galaxy3d::CameraSystem", "CameraWorld {:?} not found", world);
            return;
        };

        let Some(view_projection) = entry.world.derive_active(frame.transforms, frame.viewport) else {
            return;
        };

        engine_trace!("galaxy3d::CameraSystem", "Publishing camera {:?}",
            entry.world.active_camera());

        if let Err(err) = frame.publisher.publish_view_projection(&view_projection) {
            engine_warn!("galaxy3d::CameraSystem", "View/projection publish failed: {}", err);
        }
    }

    /// Handle a message addressed to one camera.
    ///
    /// Errors are reported through the log: an unknown camera at ERROR, a full
    /// focus stack or a rejected parameter override at WARN.
    pub fn on_message(&mut self, world: WorldId, key: CameraKey, message: CameraMessage) {
        let Ok(entry) = self.entry_mut(world) else {
            return;
        };
        let camera_world = &mut entry.world;

        match message {
            CameraMessage::SetCameraParameters(set) => {
                let Some(instance) = camera_world.instance(key) else {
                    engine_error!("galaxy3d::CameraSystem",
                        "'{}' sent to unknown camera {:?}", message.name(), key);
                    return;
                };
                let parameters = instance.parameters().with_override(&set);
                if let Err(err) = parameters.validate() {
                    engine_warn!("galaxy3d::CameraSystem",
                        "Ignoring camera parameters for {:?}: {}", key, err);
                    return;
                }
                if camera_world.update_instance_params(key, parameters).is_ok() {
                    engine_debug!("galaxy3d::CameraSystem", "Camera {:?} parameters updated", key);
                }
            }
            CameraMessage::AcquireFocus => {
                // Overflow and unknown keys are logged by the world
                if camera_world.acquire_focus(key).is_ok() {
                    engine_debug!("galaxy3d::CameraSystem", "Camera {:?} acquired focus", key);
                }
            }
            CameraMessage::ReleaseFocus => {
                if camera_world.release_focus(key).is_ok() {
                    engine_debug!("galaxy3d::CameraSystem", "Camera {:?} released focus", key);
                }
            }
        }
    }

    /// Copy reloaded lens data into one camera. Focus is not touched.
    pub fn on_resource_reload(&mut self, world: WorldId, key: CameraKey, resource: &CameraResource) {
        let Ok(entry) = self.entry_mut(world) else {
            return;
        };
        if entry.world.update_instance_params(key, *resource.parameters()).is_ok() {
            entry.resource_bindings.insert(key, resource.name().to_string());
        }
    }

    /// Forward a reloaded resource to every camera, in every world, that was
    /// attached or last reloaded from a resource of the same name.
    ///
    /// Returns the number of cameras updated.
    pub fn on_resource_reloaded(&mut self, resource: &CameraResource) -> usize {
        let mut updated = 0;
        for entry in self.worlds.values_mut() {
            let WorldEntry { world, resource_bindings } = entry;
            resource_bindings.retain(|key, _| world.contains(*key));
            for (key, name) in resource_bindings.iter() {
                if name == resource.name()
                    && world.update_instance_params(*key, *resource.parameters()).is_ok()
                {
                    updated += 1;
                }
            }
        }
        if updated > 0 {
            engine_info!("galaxy3d::CameraSystem",
                "Reloaded '{}' into {} camera(s)", resource.name(), updated);
        }
        updated
    }
}

impl Default for CameraSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "camera_system_tests.rs"]
mod tests;
