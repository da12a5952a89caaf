//! Camera system module
//!
//! Host-facing hooks (attach, detach, tick, message, reload), the
//! collaborator interfaces they consume, and matrix publication.

mod camera_system;
mod collaborators;
mod publisher;

pub use camera_system::{CameraSystem, WorldId};
pub use collaborators::{
    FrameContext, MessagePayload, MessageTransport, RenderContext,
    TransformProvider, ViewProjectionPublisher, ViewportProvider,
};
pub use publisher::{hash_string64, DualChannelPublisher, PublishConfig};
