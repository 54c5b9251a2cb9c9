//! Primary opcode and trap service code constants.
//!
//! Opcodes occupy bits 26-31 of a MIPS instruction word. The SPECIAL
//! opcode (0x00) selects an R-type instruction whose operation is given
//! by the funct field (see [`crate::isa::funct`]).

/// R-type instruction family; operation selected by the funct field.
pub const OP_SPECIAL: u32 = 0x00;

/// Unconditional jump.
pub const OP_J: u32 = 0x02;

/// Jump and link (writes the return address to `$ra`).
pub const OP_JAL: u32 = 0x03;

/// Branch on equal.
pub const OP_BEQ: u32 = 0x04;

/// Branch on not equal.
pub const OP_BNE: u32 = 0x05;

/// Add immediate unsigned (no overflow trap).
pub const OP_ADDIU: u32 = 0x09;

/// AND immediate (zero-extended).
pub const OP_ANDI: u32 = 0x0c;

/// Load upper immediate.
pub const OP_LUI: u32 = 0x0f;

/// Trap/syscall family; service selected by the low target bits.
pub const OP_TRAP: u32 = 0x1a;

/// Load word.
pub const OP_LW: u32 = 0x23;

/// Store word.
pub const OP_SW: u32 = 0x2b;

/// Trap service codes, taken from the low four bits of the trap
/// instruction's target field.
pub mod trap {
    /// Print a newline to the console.
    pub const PRINT_NEWLINE: u32 = 0x0;

    /// Print the signed value of `rs` to the console.
    pub const PRINT_INT: u32 = 0x1;

    /// Read one integer from the console into `rt` (blocking).
    pub const READ_INT: u32 = 0x5;

    /// Terminate the simulation.
    pub const STOP: u32 = 0xa;
}
