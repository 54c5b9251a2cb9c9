//! Memory and console collaborators.
//!
//! The execution engine only sees these through their narrow surfaces:
//! word load/store plus a size query for memory, and three blocking
//! operations for console-backed trap services.

/// Console seam for trap/syscall I/O.
pub mod console;

/// Flat word-addressable memory.
pub mod memory;

pub use console::{Console, StdConsole};
pub use memory::Memory;
