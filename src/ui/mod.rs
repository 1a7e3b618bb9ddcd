// Module declarations
mod app;
pub mod dashboard;
pub mod screen;
// Re-exports for external use
pub use app::{App, run};
