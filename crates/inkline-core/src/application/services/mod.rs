//! Application services: the rendering engine and the color scope.

pub mod renderer;
pub mod scope;

pub use renderer::TemplateRenderer;
pub use scope::{ColorScope, with_colors};
