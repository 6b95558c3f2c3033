//! Infrastructure adapters for Inkline.
//!
//! Implements the `Console` driven port defined in `inkline-core`:
//!
//! - [`console::AnsiConsole`]: a live terminal, driven with ANSI SGR
//!   escape sequences and environment-aware color detection.
//! - [`console::MemoryConsole`]: an in-memory fake that records writes,
//!   color mutations and scripted input, for tests.

pub mod console;

pub use console::{AnsiConsole, ColorChoice, ConsoleEvent, MemoryConsole};
