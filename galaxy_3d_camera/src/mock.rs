/// Mock collaborators for unit tests (no renderer or host framework required)
///
/// These stand in for the scene-graph transform system, the viewport,
/// the message transport and the render context, and capture log output.

use std::sync::{Arc, Mutex};
use glam::{Mat4, Quat, Vec3};
use rustc_hash::FxHashMap;
use crate::error::{Error, Result};
use crate::log::{Logger, LogEntry, LogSeverity};
use crate::camera::{SceneObjectId, ViewProjection};
use crate::system::{
    MessagePayload, MessageTransport, RenderContext, TransformProvider,
    ViewProjectionPublisher, ViewportProvider,
};

// ============================================================================
// Capturing Logger
// ============================================================================

/// Logger that records every entry for later inspection
#[derive(Clone, Default)]
pub struct CapturingLogger {
    entries: Arc<Mutex<Vec<(LogSeverity, String, String)>>>,
}

impl CapturingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an entry with this severity, source and message fragment was logged
    pub fn contains(&self, severity: LogSeverity, source: &str, fragment: &str) -> bool {
        self.entries.lock().unwrap().iter().any(|(s, src, msg)| {
            *s == severity && src == source && msg.contains(fragment)
        })
    }
}

impl Logger for CapturingLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push((entry.severity, entry.source.clone(), entry.message.clone()));
    }
}

// ============================================================================
// Mock Transform Provider
// ============================================================================

/// Scene-graph stand-in: world transforms keyed by scene object
#[derive(Default)]
pub struct MockTransformProvider {
    transforms: FxHashMap<SceneObjectId, (Vec3, Quat)>,
}

impl MockTransformProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, object: SceneObjectId, position: Vec3, rotation: Quat) {
        self.transforms.insert(object, (position, rotation));
    }
}

impl TransformProvider for MockTransformProvider {
    fn world_position(&self, object: SceneObjectId) -> Vec3 {
        self.transforms.get(&object).map(|t| t.0).unwrap_or(Vec3::ZERO)
    }

    fn world_rotation(&self, object: SceneObjectId) -> Quat {
        self.transforms.get(&object).map(|t| t.1).unwrap_or(Quat::IDENTITY)
    }
}

// ============================================================================
// Mock Viewport
// ============================================================================

pub struct MockViewport {
    pub width: u32,
    pub height: u32,
}

impl MockViewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl ViewportProvider for MockViewport {
    fn viewport_width(&self) -> u32 {
        self.width
    }

    fn viewport_height(&self) -> u32 {
        self.height
    }
}

// ============================================================================
// Mock Message Transport
// ============================================================================

/// Records posted messages; destinations outside `known_sockets` fail
pub struct MockMessageTransport {
    pub known_sockets: Vec<String>,
    pub posted: Vec<(String, MessagePayload)>,
}

impl MockMessageTransport {
    pub fn new(known_sockets: &[&str]) -> Self {
        Self {
            known_sockets: known_sockets.iter().map(|s| s.to_string()).collect(),
            posted: Vec::new(),
        }
    }
}

impl MessageTransport for MockMessageTransport {
    fn post_message(&mut self, destination: &str, payload: MessagePayload) -> Result<()> {
        if !self.known_sockets.iter().any(|s| s == destination) {
            return Err(Error::PublishFailure(format!("unknown socket '{}'", destination)));
        }
        self.posted.push((destination.to_string(), payload));
        Ok(())
    }
}

// ============================================================================
// Mock Render Context
// ============================================================================

#[derive(Default)]
pub struct MockRenderContext {
    pub projection: Option<Mat4>,
    pub view: Option<Mat4>,
    pub writes: usize,
}

impl RenderContext for MockRenderContext {
    fn set_projection_matrix(&mut self, projection: Mat4) {
        self.projection = Some(projection);
        self.writes += 1;
    }

    fn set_view_matrix(&mut self, view: Mat4) {
        self.view = Some(view);
        self.writes += 1;
    }
}

// ============================================================================
// Recording Publisher
// ============================================================================

/// Publisher that keeps every published frame, optionally failing
#[derive(Default)]
pub struct RecordingPublisher {
    pub published: Vec<ViewProjection>,
    pub fail: bool,
}

impl ViewProjectionPublisher for RecordingPublisher {
    fn publish_view_projection(&mut self, view_projection: &ViewProjection) -> Result<()> {
        if self.fail {
            return Err(Error::PublishFailure("recording publisher set to fail".to_string()));
        }
        self.published.push(view_projection.clone());
        Ok(())
    }
}
