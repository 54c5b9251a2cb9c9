//! Instruction disassembler for the simulated MIPS subset.
//!
//! Renders a decoded [`Instr`] as a human-readable mnemonic with ABI
//! register names, used for debug tracing and test diagnostics.
//!
//! Branch offsets are shown in bytes relative to the incremented pc and
//! jump targets as raw word targets; neither is resolved against a
//! concrete pc here.

use std::fmt;

use crate::common::reg::REG_NAMES;
use crate::isa::decode::Instr;

/// Returns the ABI name for a register index.
#[inline]
fn reg(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("$??")
}

impl fmt::Display for Instr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Sll { rd, rs, shamt } => write!(f, "sll {}, {}, {shamt}", reg(rd), reg(rs)),
            Self::Sra { rd, rs, shamt } => write!(f, "sra {}, {}, {shamt}", reg(rd), reg(rs)),
            Self::Jr { rs } => write!(f, "jr {}", reg(rs)),
            Self::Mfhi { rd } => write!(f, "mfhi {}", reg(rd)),
            Self::Mflo { rd } => write!(f, "mflo {}", reg(rd)),
            Self::Mult { rs, rt } => write!(f, "mult {}, {}", reg(rs), reg(rt)),
            Self::Div { rs, rt } => write!(f, "div {}, {}", reg(rs), reg(rt)),
            Self::Addu { rd, rs, rt } => {
                write!(f, "addu {}, {}, {}", reg(rd), reg(rs), reg(rt))
            }
            Self::Subu { rd, rs, rt } => {
                write!(f, "subu {}, {}, {}", reg(rd), reg(rs), reg(rt))
            }
            Self::Slt { rd, rs, rt } => write!(f, "slt {}, {}, {}", reg(rd), reg(rs), reg(rt)),
            Self::J { target } => write!(f, "j {target:#x}"),
            Self::Jal { target } => write!(f, "jal {target:#x}"),
            Self::Beq { rs, rt, offset } => {
                write!(f, "beq {}, {}, {}", reg(rs), reg(rt), offset << 2)
            }
            Self::Bne { rs, rt, offset } => {
                write!(f, "bne {}, {}, {}", reg(rs), reg(rt), offset << 2)
            }
            Self::Addiu { rt, rs, imm } => {
                write!(f, "addiu {}, {}, {imm}", reg(rt), reg(rs))
            }
            Self::Andi { rt, rs, imm } => write!(f, "andi {}, {}, {imm}", reg(rt), reg(rs)),
            Self::Lui { rt, imm } => write!(f, "lui {}, {imm}", reg(rt)),
            Self::Lw { rt, rs, offset } => {
                write!(f, "lw {}, {offset}({})", reg(rt), reg(rs))
            }
            Self::Sw { rt, rs, offset } => {
                write!(f, "sw {}, {offset}({})", reg(rt), reg(rs))
            }
            Self::Trap { code, .. } => write!(f, "trap {code:#x}"),
        }
    }
}
