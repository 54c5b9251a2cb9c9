//! Fatal simulation error definitions.
//!
//! The simulator has no recoverable error path: every variant here halts
//! the run loop and is surfaced to the operator with the program counter
//! of the faulting instruction. It provides:
//! 1. **Decode Errors:** Opcodes or function codes outside the recognized set.
//! 2. **Trap Errors:** Trap service codes outside the recognized set.
//! 3. **Host Errors:** Console and file I/O failures, malformed program images.

use thiserror::Error;

/// Errors that terminate a simulation.
///
/// The decode and trap variants carry the address of the faulting
/// instruction (the fetch pc, not the already-incremented pc).
#[derive(Debug, Error)]
pub enum SimError {
    /// Opcode or function code not in the recognized instruction set.
    #[error("unimplemented instruction {word:#010x}: pc = {pc:#010x}")]
    UnsupportedInstruction {
        /// Address of the faulting instruction.
        pc: u32,
        /// The unrecognized instruction word.
        word: u32,
    },

    /// Trap service code not in the recognized set.
    ///
    /// Unlike a decode error this also sets the stop condition on the
    /// engine before being returned, matching the reporting surface's
    /// expectation that the final pc is observable afterwards.
    #[error("unimplemented trap {code:#x}: pc = {pc:#010x}")]
    UnsupportedTrap {
        /// Address of the faulting trap instruction.
        pc: u32,
        /// The unrecognized service code.
        code: u32,
    },

    /// Host I/O failure (console read, program file access).
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A program image line that is not a 32-bit hex word.
    #[error("malformed program image at line {line}: {reason}")]
    MalformedImage {
        /// 1-based line number within the image file.
        line: usize,
        /// Parse failure description.
        reason: String,
    },

    /// Configuration file that failed to deserialize.
    #[error("invalid configuration: {0}")]
    Config(String),
}
