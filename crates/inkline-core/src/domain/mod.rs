//! Domain layer: pure template and color logic, no I/O.

pub mod color;
pub mod error;
pub mod history;
pub mod template;
pub mod value;

pub use color::Color;
pub use error::TemplateError;
pub use history::ColorHistory;
pub use template::{Message, Segment, Template, scan};
pub use value::Value;
