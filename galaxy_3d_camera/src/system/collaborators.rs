/// Interfaces of the collaborators the camera system talks to.
///
/// The host framework implements these: the scene graph supplies world
/// transforms, the window supplies viewport dimensions, and the render side
/// receives the derived matrices.

use glam::{Mat4, Quat, Vec3};
use crate::error::Result;
use crate::camera::{SceneObjectId, ViewProjection};

/// World transforms of scene objects
pub trait TransformProvider {
    fn world_position(&self, object: SceneObjectId) -> Vec3;
    fn world_rotation(&self, object: SceneObjectId) -> Quat;
}

/// Current output dimensions in pixels
pub trait ViewportProvider {
    fn viewport_width(&self) -> u32;
    fn viewport_height(&self) -> u32;
}

/// Payloads the camera system posts on the message transport
#[derive(Debug, Clone, PartialEq)]
pub enum MessagePayload {
    /// New matrices for the render pipeline identified by `target_id`
    SetViewProjection {
        target_id: u64,
        view: Mat4,
        projection: Mat4,
    },
}

/// Fire-and-forget message posting. No acknowledgment is awaited.
pub trait MessageTransport {
    /// # Errors
    ///
    /// `PublishFailure` when the destination is unknown or the message
    /// cannot be queued.
    fn post_message(&mut self, destination: &str, payload: MessagePayload) -> Result<()>;
}

/// Shared render state written synchronously
pub trait RenderContext {
    fn set_projection_matrix(&mut self, projection: Mat4);
    fn set_view_matrix(&mut self, view: Mat4);
}

/// The single entry point for handing derived matrices to the renderer.
///
/// Implementations decide how the renderer receives them.
pub trait ViewProjectionPublisher {
    fn publish_view_projection(&mut self, view_projection: &ViewProjection) -> Result<()>;
}

/// Collaborators needed for one tick of one camera world
pub struct FrameContext<'a> {
    pub transforms: &'a dyn TransformProvider,
    pub viewport: &'a dyn ViewportProvider,
    pub publisher: &'a mut dyn ViewProjectionPublisher,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        transforms: &'a dyn TransformProvider,
        viewport: &'a dyn ViewportProvider,
        publisher: &'a mut dyn ViewProjectionPublisher,
    ) -> Self {
        Self { transforms, viewport, publisher }
    }
}
