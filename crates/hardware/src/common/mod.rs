//! Common utilities and types used throughout the MIPS pipeline simulator.
//!
//! This module provides the fundamental building blocks shared by every
//! component of the simulator. It includes:
//! 1. **Constants:** Register indices, memory layout, and instruction field geometry.
//! 2. **Error Handling:** The fatal error kinds the simulation can halt with.
//! 3. **Register Management:** The architectural register file (GPRs plus hi/lo).

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for fatal simulation conditions.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use error::SimError;
pub use reg::RegisterFile;
