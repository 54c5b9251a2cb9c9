//! Core processor implementation.
//!
//! Contains the execution engine that runs one instruction per step
//! through the five classical phases, and the ALU it dispatches to.

/// Arithmetic/logic unit with double-width multiply/divide.
pub mod alu;

/// The execution engine: fetch, decode, execute, memory, writeback.
pub mod cpu;

pub use self::cpu::Cpu;
