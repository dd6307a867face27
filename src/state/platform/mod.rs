//! Platform-specific abstractions.
//!
//! - [`clipboard`] - Cross-platform clipboard access
//! - [`paths`] - Configuration and data directory paths

pub mod clipboard;
pub mod paths;

pub use clipboard::ClipboardManager;
pub use paths::AppPaths;
