//! Function codes for the SPECIAL (R-type) opcode.
//!
//! The funct field occupies bits 0-5 of an R-type instruction word.

/// Shift left logical.
pub const SLL: u32 = 0x00;

/// Shift right arithmetic.
pub const SRA: u32 = 0x03;

/// Jump register.
pub const JR: u32 = 0x08;

/// Move from hi accumulator.
pub const MFHI: u32 = 0x10;

/// Move from lo accumulator.
pub const MFLO: u32 = 0x12;

/// Multiply (double-width result into hi/lo).
pub const MULT: u32 = 0x18;

/// Divide (quotient into lo, remainder into hi).
pub const DIV: u32 = 0x1a;

/// Add unsigned (no overflow trap).
pub const ADDU: u32 = 0x21;

/// Subtract unsigned (no overflow trap).
pub const SUBU: u32 = 0x23;

/// Set on less than (signed).
pub const SLT: u32 = 0x2a;
