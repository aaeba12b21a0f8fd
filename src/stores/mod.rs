//! Store implementations

#[cfg(feature = "console")]
pub mod console;
pub mod memory;

#[cfg(feature = "console")]
pub use console::ConsoleStore;
pub use memory::MemoryStore;

pub use crate::core::Store;
