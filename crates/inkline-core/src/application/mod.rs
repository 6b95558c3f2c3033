//! Application layer: ports and rendering services.

pub mod error;
pub mod ports;
pub mod services;

pub use error::RenderError;
pub use ports::{Console, StreamKind};
pub use services::{ColorScope, TemplateRenderer, with_colors};
