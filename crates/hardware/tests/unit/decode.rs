//! Decoder tests: one case per instruction, raw-word spot checks, and
//! property tests over the field extractors.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use mipsim_core::common::SimError;
use mipsim_core::isa::{decode, Instr, InstructionBits};

use crate::common::asm;

#[rstest]
#[case(asm::sll(8, 9, 4), Instr::Sll { rd: 8, rs: 9, shamt: 4 })]
#[case(asm::sra(8, 9, 31), Instr::Sra { rd: 8, rs: 9, shamt: 31 })]
#[case(asm::jr(31), Instr::Jr { rs: 31 })]
#[case(asm::mfhi(10), Instr::Mfhi { rd: 10 })]
#[case(asm::mflo(10), Instr::Mflo { rd: 10 })]
#[case(asm::mult(8, 9), Instr::Mult { rs: 8, rt: 9 })]
#[case(asm::div(8, 9), Instr::Div { rs: 8, rt: 9 })]
#[case(asm::addu(8, 9, 10), Instr::Addu { rd: 8, rs: 9, rt: 10 })]
#[case(asm::subu(8, 9, 10), Instr::Subu { rd: 8, rs: 9, rt: 10 })]
#[case(asm::slt(8, 9, 10), Instr::Slt { rd: 8, rs: 9, rt: 10 })]
#[case(asm::j(0x40), Instr::J { target: 0x40 })]
#[case(asm::jal(0x40), Instr::Jal { target: 0x40 })]
#[case(asm::beq(8, 9, -3), Instr::Beq { rs: 8, rt: 9, offset: -3 })]
#[case(asm::bne(8, 9, 3), Instr::Bne { rs: 8, rt: 9, offset: 3 })]
#[case(asm::addiu(8, 9, -1), Instr::Addiu { rt: 8, rs: 9, imm: -1 })]
#[case(asm::andi(8, 9, 0xffff), Instr::Andi { rt: 8, rs: 9, imm: 0xffff })]
#[case(asm::lui(8, 0x1000), Instr::Lui { rt: 8, imm: 0x1000 })]
#[case(asm::lw(8, -4, 29), Instr::Lw { rt: 8, rs: 29, offset: -4 })]
#[case(asm::sw(8, 16, 29), Instr::Sw { rt: 8, rs: 29, offset: 16 })]
fn decodes_every_instruction(#[case] word: u32, #[case] expected: Instr) {
    assert_eq!(decode(word, 0).unwrap(), expected);
}

/// Hand-encoded words, independent of the test assembler.
#[rstest]
// addu $t0, $t1, $t2
#[case(0x012a_4021, Instr::Addu { rd: 8, rs: 9, rt: 10 })]
// addiu $t0, $zero, 5
#[case(0x2408_0005, Instr::Addiu { rt: 8, rs: 0, imm: 5 })]
// lw $t1, 4($gp)
#[case(0x8f89_0004, Instr::Lw { rt: 9, rs: 28, offset: 4 })]
fn decodes_raw_words(#[case] word: u32, #[case] expected: Instr) {
    assert_eq!(decode(word, 0).unwrap(), expected);
}

#[test]
fn trap_carries_service_code_and_operand_registers() {
    let word = asm::trap_rs(0x1, 4);
    match decode(word, 0).unwrap() {
        Instr::Trap { code, rs, .. } => {
            assert_eq!(code & 0xf, 0x1);
            assert_eq!(rs, 4);
        }
        other => panic!("decoded {other:?}"),
    }
}

#[test]
fn unknown_opcode_is_a_decode_error() {
    let word = 0x3f << 26;
    match decode(word, 0x40).unwrap_err() {
        SimError::UnsupportedInstruction { pc, word: w } => {
            assert_eq!(pc, 0x40);
            assert_eq!(w, word);
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn unknown_funct_is_a_decode_error() {
    // SPECIAL opcode with funct 0x3f (not in the subset).
    let word = 0x0000_003f;
    assert!(matches!(
        decode(word, 0),
        Err(SimError::UnsupportedInstruction { pc: 0, .. })
    ));
}

proptest! {
    /// Register and shamt fields survive an encode/extract cycle for
    /// any operand values.
    #[test]
    fn field_extraction_is_exact(
        rs in 0usize..32,
        rt in 0usize..32,
        rd in 0usize..32,
        shamt in 0u32..32,
    ) {
        let word = asm::addu(rd, rs, rt);
        prop_assert_eq!(word.rs(), rs);
        prop_assert_eq!(word.rt(), rt);
        prop_assert_eq!(word.rd(), rd);

        let word = asm::sll(rd, rs, shamt);
        prop_assert_eq!(word.shamt(), shamt);
    }

    /// The signed immediate extractor sign-extends exactly.
    #[test]
    fn signed_immediates_sign_extend(imm in any::<i16>()) {
        let word = asm::addiu(8, 9, imm);
        prop_assert_eq!(word.simm(), i32::from(imm));
        prop_assert_eq!(word.uimm(), u32::from(imm as u16));
    }

    /// Decoding never panics, whatever the word.
    #[test]
    fn decode_is_total(word in any::<u32>()) {
        let _ = decode(word, 0);
    }
}
