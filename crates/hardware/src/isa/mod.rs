//! Instruction Set Architecture (ISA) definitions.
//!
//! Contains opcode and function-code constants, the structured decoder,
//! and the disassembler for the simulated MIPS subset.

/// Instruction decoding: field extraction and the `Instr` sum type.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// SPECIAL-opcode function codes.
pub mod funct;

/// Primary opcodes and trap service codes.
pub mod opcodes;

pub use decode::{decode, Instr, InstructionBits};
