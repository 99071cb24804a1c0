//! Platform hosts
//!
//! `window` drives the scene from a Win32 window and its message loop.
//! `snapshot` drives it headlessly and writes the final frame to disk, which
//! works on every platform.

pub mod snapshot;
#[cfg(windows)]
pub mod window;

/// Errors raised while hosting the scene on a platform surface
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("Failed to obtain module handle")]
    ModuleHandleFailed,

    #[error("Failed to register window class")]
    WindowClassRegistrationFailed,

    #[error("Failed to create window")]
    WindowCreationFailed,

    #[error("Interactive window is not supported on this platform")]
    Unsupported,
}
