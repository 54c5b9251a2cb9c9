//! Register file tests.

use pretty_assertions::assert_eq;

use mipsim_core::common::reg::REG_NAMES;
use mipsim_core::common::RegisterFile;

#[test]
fn registers_start_at_zero() {
    let regs = RegisterFile::new();
    for i in 0..32 {
        assert_eq!(regs.read(i), 0);
    }
    assert_eq!(regs.hi(), 0);
    assert_eq!(regs.lo(), 0);
}

#[test]
fn writes_to_register_zero_are_ignored() {
    let mut regs = RegisterFile::new();
    regs.write(0, 0xdead_beef);
    assert_eq!(regs.read(0), 0);
}

#[test]
fn writes_land_in_the_named_register() {
    let mut regs = RegisterFile::new();
    regs.write(8, 42);
    assert_eq!(regs.read(8), 42);
    assert_eq!(regs.read(9), 0);
}

#[test]
fn accumulator_halves_commit_together() {
    let mut regs = RegisterFile::new();
    regs.set_hi_lo(0xffff_ffff, 0xffff_fff6);
    assert_eq!(regs.hi(), 0xffff_ffff);
    assert_eq!(regs.lo(), 0xffff_fff6);
}

#[test]
fn abi_names_cover_all_registers() {
    assert_eq!(REG_NAMES.len(), 32);
    assert_eq!(REG_NAMES[0], "$zero");
    assert_eq!(REG_NAMES[28], "$gp");
    assert_eq!(REG_NAMES[29], "$sp");
    assert_eq!(REG_NAMES[31], "$ra");
}
