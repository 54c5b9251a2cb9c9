//! MIPS instruction decoder.
//!
//! This module handles the classification of 32-bit MIPS instruction words
//! into the structured [`Instr`] sum type consumed uniformly by the
//! execution engine. It extracts register specifiers, shift amounts,
//! sign- and zero-extended immediates, and jump targets, and rejects any
//! encoding outside the simulated subset as a fatal decode error.

use crate::common::constants::{
    FUNCT_MASK, IMM_MASK, OPCODE_SHIFT, RD_SHIFT, REG_MASK, RS_SHIFT, RT_SHIFT, SHAMT_SHIFT,
    TARGET_MASK,
};
use crate::common::SimError;
use crate::isa::{funct, opcodes};

/// Trait for extracting instruction fields from encoded words.
///
/// Implemented on `u32` so field extraction reads as
/// `word.rs()`, `word.simm()`, and so on at the decode site.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 26-31).
    fn opcode(&self) -> u32;
    /// Extracts the `rs` register field (bits 21-25).
    fn rs(&self) -> usize;
    /// Extracts the `rt` register field (bits 16-20).
    fn rt(&self) -> usize;
    /// Extracts the `rd` register field (bits 11-15).
    fn rd(&self) -> usize;
    /// Extracts the shift-amount field (bits 6-10).
    fn shamt(&self) -> u32;
    /// Extracts the funct field (bits 0-5).
    fn funct(&self) -> u32;
    /// Extracts the 16-bit immediate, zero-extended.
    fn uimm(&self) -> u32;
    /// Extracts the 16-bit immediate, sign-extended.
    fn simm(&self) -> i32;
    /// Extracts the 26-bit jump target field.
    fn target(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline]
    fn opcode(&self) -> u32 {
        self >> OPCODE_SHIFT
    }

    #[inline]
    fn rs(&self) -> usize {
        ((self >> RS_SHIFT) & REG_MASK) as usize
    }

    #[inline]
    fn rt(&self) -> usize {
        ((self >> RT_SHIFT) & REG_MASK) as usize
    }

    #[inline]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline]
    fn shamt(&self) -> u32 {
        (self >> SHAMT_SHIFT) & REG_MASK
    }

    #[inline]
    fn funct(&self) -> u32 {
        self & FUNCT_MASK
    }

    #[inline]
    fn uimm(&self) -> u32 {
        self & IMM_MASK
    }

    #[inline]
    fn simm(&self) -> i32 {
        i32::from((self & IMM_MASK) as u16 as i16)
    }

    #[inline]
    fn target(&self) -> u32 {
        self & TARGET_MASK
    }
}

/// A decoded instruction.
///
/// One variant per recognized instruction; register fields are indices
/// into the register file, immediates are already extended, and branch
/// offsets are in words as encoded (scaling to bytes happens when the
/// engine resolves the target).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instr {
    /// Shift left logical: `rd = rs << shamt`.
    Sll {
        /// Destination register.
        rd: usize,
        /// Source register.
        rs: usize,
        /// Shift amount.
        shamt: u32,
    },
    /// Shift right arithmetic: `rd = rs >> shamt` (sign-filling).
    Sra {
        /// Destination register.
        rd: usize,
        /// Source register.
        rs: usize,
        /// Shift amount.
        shamt: u32,
    },
    /// Jump register: `pc = rs`.
    Jr {
        /// Register holding the jump target.
        rs: usize,
    },
    /// Move from hi accumulator: `rd = hi`.
    Mfhi {
        /// Destination register.
        rd: usize,
    },
    /// Move from lo accumulator: `rd = lo`.
    Mflo {
        /// Destination register.
        rd: usize,
    },
    /// Multiply: `(hi, lo) = rs * rt` (signed, double-width).
    Mult {
        /// First operand register.
        rs: usize,
        /// Second operand register.
        rt: usize,
    },
    /// Divide: `lo = rs / rt`, `hi = rs % rt` (signed).
    Div {
        /// Dividend register.
        rs: usize,
        /// Divisor register.
        rt: usize,
    },
    /// Add unsigned: `rd = rs + rt`.
    Addu {
        /// Destination register.
        rd: usize,
        /// First operand register.
        rs: usize,
        /// Second operand register.
        rt: usize,
    },
    /// Subtract unsigned: `rd = rs - rt`.
    Subu {
        /// Destination register.
        rd: usize,
        /// First operand register.
        rs: usize,
        /// Second operand register.
        rt: usize,
    },
    /// Set on less than: `rd = (rs < rt)` (signed compare).
    Slt {
        /// Destination register.
        rd: usize,
        /// First operand register.
        rs: usize,
        /// Second operand register.
        rt: usize,
    },
    /// Unconditional jump to a region-relative target.
    J {
        /// 26-bit word target.
        target: u32,
    },
    /// Jump and link: writes the return address to `$ra`.
    Jal {
        /// 26-bit word target.
        target: u32,
    },
    /// Branch on equal.
    Beq {
        /// First compare register.
        rs: usize,
        /// Second compare register.
        rt: usize,
        /// Signed word offset from the incremented pc.
        offset: i32,
    },
    /// Branch on not equal.
    Bne {
        /// First compare register.
        rs: usize,
        /// Second compare register.
        rt: usize,
        /// Signed word offset from the incremented pc.
        offset: i32,
    },
    /// Add immediate unsigned: `rt = rs + imm`.
    Addiu {
        /// Destination register.
        rt: usize,
        /// Source register.
        rs: usize,
        /// Sign-extended immediate.
        imm: i32,
    },
    /// AND immediate: `rt = rs & imm`.
    Andi {
        /// Destination register.
        rt: usize,
        /// Source register.
        rs: usize,
        /// Zero-extended immediate.
        imm: u32,
    },
    /// Load upper immediate: `rt = imm << 16`.
    Lui {
        /// Destination register.
        rt: usize,
        /// Sign-extended immediate (shifted at execute).
        imm: i32,
    },
    /// Load word: `rt = mem[rs + offset]`.
    Lw {
        /// Destination register.
        rt: usize,
        /// Base address register.
        rs: usize,
        /// Sign-extended byte offset.
        offset: i32,
    },
    /// Store word: `mem[rs + offset] = rt`.
    Sw {
        /// Source data register.
        rt: usize,
        /// Base address register.
        rs: usize,
        /// Sign-extended byte offset.
        offset: i32,
    },
    /// Trap/syscall; the service is in the low bits of `code`.
    Trap {
        /// Raw 26-bit target field carrying the service code.
        code: u32,
        /// Register printed by the print-int service.
        rs: usize,
        /// Register written by the read-int service.
        rt: usize,
    },
}

/// Decodes a MIPS instruction word.
///
/// `pc` is the address the word was fetched from and is only used for
/// the diagnostic when the encoding is not recognized.
///
/// # Errors
///
/// Returns [`SimError::UnsupportedInstruction`] for any opcode or
/// function code outside the simulated subset.
pub fn decode(word: u32, pc: u32) -> Result<Instr, SimError> {
    let instr = match word.opcode() {
        opcodes::OP_SPECIAL => match word.funct() {
            funct::SLL => Instr::Sll {
                rd: word.rd(),
                rs: word.rs(),
                shamt: word.shamt(),
            },
            funct::SRA => Instr::Sra {
                rd: word.rd(),
                rs: word.rs(),
                shamt: word.shamt(),
            },
            funct::JR => Instr::Jr { rs: word.rs() },
            funct::MFHI => Instr::Mfhi { rd: word.rd() },
            funct::MFLO => Instr::Mflo { rd: word.rd() },
            funct::MULT => Instr::Mult {
                rs: word.rs(),
                rt: word.rt(),
            },
            funct::DIV => Instr::Div {
                rs: word.rs(),
                rt: word.rt(),
            },
            funct::ADDU => Instr::Addu {
                rd: word.rd(),
                rs: word.rs(),
                rt: word.rt(),
            },
            funct::SUBU => Instr::Subu {
                rd: word.rd(),
                rs: word.rs(),
                rt: word.rt(),
            },
            funct::SLT => Instr::Slt {
                rd: word.rd(),
                rs: word.rs(),
                rt: word.rt(),
            },
            _ => return Err(SimError::UnsupportedInstruction { pc, word }),
        },
        opcodes::OP_J => Instr::J {
            target: word.target(),
        },
        opcodes::OP_JAL => Instr::Jal {
            target: word.target(),
        },
        opcodes::OP_BEQ => Instr::Beq {
            rs: word.rs(),
            rt: word.rt(),
            offset: word.simm(),
        },
        opcodes::OP_BNE => Instr::Bne {
            rs: word.rs(),
            rt: word.rt(),
            offset: word.simm(),
        },
        opcodes::OP_ADDIU => Instr::Addiu {
            rt: word.rt(),
            rs: word.rs(),
            imm: word.simm(),
        },
        opcodes::OP_ANDI => Instr::Andi {
            rt: word.rt(),
            rs: word.rs(),
            imm: word.uimm(),
        },
        opcodes::OP_LUI => Instr::Lui {
            rt: word.rt(),
            imm: word.simm(),
        },
        opcodes::OP_TRAP => Instr::Trap {
            code: word.target(),
            rs: word.rs(),
            rt: word.rt(),
        },
        opcodes::OP_LW => Instr::Lw {
            rt: word.rt(),
            rs: word.rs(),
            offset: word.simm(),
        },
        opcodes::OP_SW => Instr::Sw {
            rt: word.rt(),
            rs: word.rs(),
            offset: word.simm(),
        },
        _ => return Err(SimError::UnsupportedInstruction { pc, word }),
    };

    Ok(instr)
}
