// crates/engine_core/src/error.rs

use thiserror::Error;

/// Failures while bringing the host up. Per-frame surface errors are
/// recovered inside the loop and never surface here.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("failed to create the event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to open the window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("failed to create a rendering surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no graphics adapter can present to this window")]
    NoAdapter,

    #[error("the surface reports no supported texture formats")]
    NoSurfaceFormat,

    #[error("failed to acquire a graphics device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
}
