//! Backend implementations

#[cfg(feature = "console")]
pub mod console;
pub mod file;
pub mod memory;

#[cfg(feature = "console")]
pub use console::ConsoleBackend;
pub use file::FileBackend;
pub use memory::MemoryBackend;

pub use crate::core::LogBackend;
