//! Modal popups drawn over the main layout.

pub mod message;
pub mod network;
pub mod search;
