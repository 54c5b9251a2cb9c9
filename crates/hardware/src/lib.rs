//! MIPS pipeline simulator library.
//!
//! This crate implements an instruction-level simulator for a 32-bit MIPS
//! subset with the following:
//! 1. **Core:** Execution engine (fetch, decode, execute, memory, writeback), GPR and hi/lo state.
//! 2. **Stats:** Pipeline timing model reconstructing stall (bubble) and flush costs over an 8-slot track.
//! 3. **ISA:** Decoding and disassembly for the arithmetic, shift, branch, load/store, and trap subset.
//! 4. **SoC:** Flat word-addressable instruction/data memories and a console seam for trap I/O.
//! 5. **Simulation:** Program image loader, configuration, and final report.
//!
//! Instructions retire strictly in order, one per simulated cycle; the
//! pipeline stages are a cycle-accounting fiction maintained by
//! [`stats::PipeStats`], not concurrent work.

/// Common types and constants (registers, memory bases, instruction fields, errors).
pub mod common;
/// Simulator configuration (defaults, JSON deserialization).
pub mod config;
/// CPU core (execution engine and ALU).
pub mod core;
/// Instruction set (opcodes, function codes, decode, disassembly).
pub mod isa;
/// Program image loading and top-level simulation driver.
pub mod sim;
/// Memory and console collaborators.
pub mod soc;
/// Pipeline timing model: occupancy track, hazard accounting, derived metrics.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds architectural state, memories, and the timing model.
pub use crate::core::Cpu;
/// Top-level simulator; wires configuration, memories, and console together.
pub use crate::sim::Simulator;
/// Pipeline timing model; owns the occupancy track and all counters.
pub use crate::stats::PipeStats;
