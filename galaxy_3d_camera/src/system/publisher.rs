/// Dual-channel publication of view/projection matrices.
///
/// Each frame the matrices go out twice:
/// 1. a `SetViewProjection` message posted to the render socket, tagged with
///    the hashed target id (`"game"` by default), for render pipelines that
///    consume matrices through their message pass
/// 2. a direct write of the current projection and view on the render context
///
/// The direct write is the source of truth for the frame being built. The
/// message carries the same matrices and only reaches subscribers on their
/// next message pass, so it can never carry newer data than the context.
/// Both channels are attempted even if the first one fails.

use std::hash::{Hash, Hasher};
use rustc_hash::FxHasher;
use crate::error::{Error, Result};
use crate::camera::ViewProjection;
use super::collaborators::{MessagePayload, MessageTransport, RenderContext, ViewProjectionPublisher};

/// Stable 64-bit hash of a fixed identifier string
pub fn hash_string64(value: &str) -> u64 {
    let mut hasher = FxHasher::default();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Where and under which id matrices are published
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishConfig {
    /// Destination socket of the message channel
    pub render_socket: String,
    /// Logical render target the matrices belong to
    pub target_id: String,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            render_socket: "render".to_string(),
            target_id: "game".to_string(),
        }
    }
}

/// Publisher writing both the message channel and the render context
pub struct DualChannelPublisher<T: MessageTransport, C: RenderContext> {
    transport: T,
    render_context: C,
    config: PublishConfig,
    target_hash: u64,
}

impl<T: MessageTransport, C: RenderContext> DualChannelPublisher<T, C> {
    pub fn new(transport: T, render_context: C, config: PublishConfig) -> Self {
        let target_hash = hash_string64(&config.target_id);
        Self {
            transport,
            render_context,
            config,
            target_hash,
        }
    }

    pub fn config(&self) -> &PublishConfig {
        &self.config
    }

    /// Hashed target id carried by every message
    pub fn target_hash(&self) -> u64 {
        self.target_hash
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn render_context(&self) -> &C {
        &self.render_context
    }

    /// Release the collaborators
    pub fn into_parts(self) -> (T, C) {
        (self.transport, self.render_context)
    }
}

impl<T: MessageTransport, C: RenderContext> ViewProjectionPublisher for DualChannelPublisher<T, C> {
    fn publish_view_projection(&mut self, view_projection: &ViewProjection) -> Result<()> {
        let posted = self.transport.post_message(
            &self.config.render_socket,
            MessagePayload::SetViewProjection {
                target_id: self.target_hash,
                view: *view_projection.view_matrix(),
                projection: *view_projection.projection_matrix(),
            },
        );

        self.render_context.set_projection_matrix(*view_projection.projection_matrix());
        self.render_context.set_view_matrix(*view_projection.view_matrix());

        posted.map_err(|err| match err {
            Error::PublishFailure(_) => err,
            other => Error::PublishFailure(other.to_string()),
        })
    }
}

#[cfg(test)]
#[path = "publisher_tests.rs"]
mod tests;
