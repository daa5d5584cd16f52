//! Rendering services.

mod model;
mod renderer;

pub use renderer::{DashboardRenderer, RenderError, RenderResult};
