//! Inkline Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Inkline
//! colored-console library, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        inkline (public surface)         │
//! │   (one-shot facade, fluent session)     │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (TemplateRenderer, ColorScope)       │
//! │     One engine for every entry point    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Port (Trait)          │
//! │        (Driven: Console)                │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    inkline-adapters (Infrastructure)    │
//! │      (AnsiConsole, MemoryConsole)       │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (Color, Value, Template, ColorHistory) │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use inkline_core::{
//!     application::{StreamKind, TemplateRenderer},
//!     domain::{Color, ColorHistory, Message, Template, Value},
//! };
//!
//! # fn demo(console: &dyn inkline_core::application::Console) -> inkline_core::error::InklineResult<()> {
//! // "error:" in red, then back to the previous foreground.
//! let template = Template::new("{0}error:{1} disk full", vec![
//!     Value::Color(Color::Red),
//!     Value::RestoreColor,
//! ]);
//!
//! let mut history = ColorHistory::new();
//! TemplateRenderer::new(console, &mut history)
//!     .render(StreamKind::Stderr, &Message::Template(template))?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//!
//! Everything is synchronous and single-threaded per call. The live
//! terminal color is process-wide mutable state; concurrent renders racing
//! on set/restore are explicitly unsupported. Serialize externally if you
//! must share a terminal.

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (rendering services)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        Console, StreamKind,
        services::{ColorScope, TemplateRenderer, with_colors},
    };
    pub use crate::domain::{Color, ColorHistory, Message, Template, Value};
    pub use crate::error::{InklineError, InklineResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
