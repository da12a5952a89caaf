/*!
# Galaxy 3D Camera

Camera component runtime for the Galaxy3D engine.

Turns a scene object's world transform and a set of lens parameters into
view/projection matrices for the renderer, and arbitrates which of many
cameras owns the output through a per-world focus stack.

## Architecture

- **CameraWorld**: bounded registry of camera instances for one scene partition
- **FocusStack**: order-preserving stack deciding the active camera
- **ViewProjection**: per-frame matrices derived for the active camera
- **CameraSystem**: attach/detach/tick/message/reload hooks called by the host
- **ResourceManager**: named camera resources with hot reload

The host implements the collaborator traits (`TransformProvider`,
`ViewportProvider`, `MessageTransport`, `RenderContext`) and drives the hooks.
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod camera;
pub mod resource;
pub mod system;

#[cfg(test)]
mod mock;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine logging hub
    pub use crate::engine::Engine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Resource sub-module
    pub mod resource {
        pub use crate::resource::*;
    }

    // System sub-module
    pub mod system {
        pub use crate::system::*;
    }
}

// Re-export math library at crate root
pub use glam;
