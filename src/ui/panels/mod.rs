//! Main content panels.

pub mod transactions;

pub use transactions::render_transactions;
