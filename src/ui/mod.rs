// Module declarations
mod app;
pub mod dashboard;
pub mod navigation;
pub mod splash;
pub mod theme;
// Re-exports for external use
pub use app::{App, run};
