//! UI layer: app shell and the egui grid surface.

pub mod app;
pub mod surface;

pub use app::GridApp;
