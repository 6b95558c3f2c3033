//! Console adapters implementing the core's driven port.

pub mod ansi;
pub mod memory;

pub use ansi::{AnsiConsole, ColorChoice};
pub use memory::{ConsoleEvent, MemoryConsole};
