//! Modular dashboard implementation
//!
//! Split into logical modules for better maintainability

pub mod charts;
pub mod components;
pub mod renderer;
pub mod state;
pub mod sync;
pub mod table;
pub mod updaters;
pub mod utils;

// Re-export main types and functions for external use
pub use renderer::render_dashboard;
pub use state::{DashboardState, UIConfig};
pub use sync::ViewSynchronizer;
