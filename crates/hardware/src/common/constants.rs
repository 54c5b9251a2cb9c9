//! Global simulator constants.
//!
//! This module defines system-wide constants used across the simulator. It includes:
//! 1. **Register Constants:** Register file size and well-known register indices.
//! 2. **Memory Layout:** Default text/data base addresses and pointer seeds.
//! 3. **Instruction Geometry:** Field masks and shifts for MIPS instruction encodings.

/// Number of general-purpose registers.
pub const NREGS: usize = 32;

/// Index of the hard-wired zero register (`$zero`).
///
/// Reads always return 0, writes are ignored, and reads never stall
/// the pipeline regardless of any pending write recorded for it.
pub const REG_ZERO: usize = 0;

/// Index of the global pointer register (`$gp`).
pub const REG_GP: usize = 28;

/// Index of the stack pointer register (`$sp`).
pub const REG_SP: usize = 29;

/// Index of the return address register (`$ra`), written by `jal`.
pub const REG_RA: usize = 31;

/// Size of one instruction or data word in bytes.
pub const WORD_SIZE: u32 = 4;

/// Base address of instruction memory (the text segment).
pub const TEXT_BASE: u32 = 0x0000_0000;

/// Base address of data memory.
pub const DATA_BASE: u32 = 0x1000_0000;

/// Initial value of the global pointer (`$gp`).
pub const GP_INIT: u32 = 0x1000_8000;

/// Bit position of the opcode field (bits 26-31).
pub const OPCODE_SHIFT: u32 = 26;

/// Bit position of the `rs` register field (bits 21-25).
pub const RS_SHIFT: u32 = 21;

/// Bit position of the `rt` register field (bits 16-20).
pub const RT_SHIFT: u32 = 16;

/// Bit position of the `rd` register field (bits 11-15).
pub const RD_SHIFT: u32 = 11;

/// Bit position of the shift-amount field (bits 6-10, R-type).
pub const SHAMT_SHIFT: u32 = 6;

/// Bit mask for a 5-bit register specifier.
pub const REG_MASK: u32 = 0x1f;

/// Bit mask for the funct field (bits 0-5, R-type).
pub const FUNCT_MASK: u32 = 0x3f;

/// Bit mask for the 16-bit immediate field (I-type).
pub const IMM_MASK: u32 = 0xffff;

/// Bit mask for the 26-bit jump target field (J-type).
pub const TARGET_MASK: u32 = 0x03ff_ffff;

/// Bit mask selecting the service code from a trap instruction's target field.
pub const TRAP_SERVICE_MASK: u32 = 0xf;

/// Region bits preserved from the program counter when forming a jump target.
pub const JUMP_REGION_MASK: u32 = 0xf000_0000;
