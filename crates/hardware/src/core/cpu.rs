//! The execution engine.
//!
//! Runs one instruction per step through fetch, decode, execute, memory
//! access, and writeback, owning all architectural state (registers,
//! program counter, hi/lo accumulators, memories). During decode it
//! reports source reads, the pending destination, and control-transfer
//! resolution to the pipeline timing model as a side channel; that is
//! the only coupling between execution and cycle accounting.

use tracing::trace;

use crate::common::constants::{GP_INIT, JUMP_REGION_MASK, REG_GP, REG_RA, REG_SP, TRAP_SERVICE_MASK, WORD_SIZE};
use crate::common::{RegisterFile, SimError};
use crate::core::alu::{Alu, AluOp};
use crate::isa::opcodes::trap;
use crate::isa::{self, Instr};
use crate::soc::{Console, Memory};
use crate::stats::{HazardReg, PipeStats};

/// Pipeline slots discarded when a jump or branch resolves at decode:
/// the two fetch-stage instructions speculatively behind it.
const CONTROL_FLUSH_SLOTS: usize = 2;

/// Control signals derived by decode and consumed by the later phases.
#[derive(Debug, Clone, Copy, Default)]
struct ControlSignals {
    /// Commit the writeback result to `dest_reg`.
    write_dest: bool,
    dest_reg: usize,
    alu_op: AluOp,
    alu_src1: u32,
    alu_src2: u32,
    /// Read data memory at the ALU result during the memory phase.
    is_load: bool,
    /// Write `store_data` to data memory during the memory phase.
    is_store: bool,
    /// Commit both accumulator halves at writeback.
    is_mult_div: bool,
    /// Value latched at decode for a store.
    store_data: u32,
}

/// The execution engine and its architectural state.
///
/// Generic over the console used by the trap services, so tests can
/// script input and capture output.
#[derive(Debug)]
pub struct Cpu<C> {
    pc: u32,
    regs: RegisterFile,
    imem: Memory,
    dmem: Memory,
    alu: Alu,
    stats: PipeStats,
    console: C,
    ctrl: ControlSignals,
    alu_out: u32,
    write_data: u32,
    instructions: u64,
    stop: bool,
    dump_regs: bool,
}

impl<C: Console> Cpu<C> {
    /// Creates an engine with the given memories and console.
    ///
    /// Seeds `$gp` with the global pointer base and `$sp` with the top
    /// of data memory.
    pub fn new(pc: u32, imem: Memory, dmem: Memory, console: C) -> Self {
        let mut regs = RegisterFile::new();
        regs.write(REG_GP, GP_INIT);
        regs.write(REG_SP, dmem.base().wrapping_add(dmem.size()));
        Self {
            pc,
            regs,
            imem,
            dmem,
            alu: Alu::default(),
            stats: PipeStats::new(),
            console,
            ctrl: ControlSignals::default(),
            alu_out: 0,
            write_data: 0,
            instructions: 0,
            stop: false,
            dump_regs: false,
        }
    }

    /// Enables or disables the per-instruction register file dump.
    pub fn set_dump_regs(&mut self, dump: bool) {
        self.dump_regs = dump;
    }

    /// Runs instructions until the stop trap or a fatal error.
    ///
    /// # Errors
    ///
    /// Propagates the first [`SimError`] a step raises; the run loop
    /// never continues past a fatal decode or trap error.
    pub fn run(&mut self) -> Result<(), SimError> {
        while !self.stop {
            self.step()?;
        }
        Ok(())
    }

    /// Executes one instruction to completion.
    ///
    /// Advances the timing model by one slot, then runs the five phases
    /// in order. One retired instruction therefore costs one baseline
    /// cycle plus whatever bubbles and flushes its decode reported.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::UnsupportedInstruction`] or
    /// [`SimError::UnsupportedTrap`] for encodings outside the subset,
    /// and [`SimError::Io`] if the read-int trap service fails.
    pub fn step(&mut self) -> Result<(), SimError> {
        self.instructions += 1;
        self.stats.clock();

        let word = self.fetch();
        self.decode(word)?;
        self.execute();
        self.mem();
        self.writeback();

        if self.dump_regs {
            self.regs.dump();
        }
        Ok(())
    }

    /// Fetch: read the instruction word at pc and advance pc by one word.
    fn fetch(&mut self) -> u32 {
        let word = self.imem.load_word(self.pc);
        self.pc = self.pc.wrapping_add(WORD_SIZE);
        word
    }

    /// Decode: classify the word, report hazards, derive control signals,
    /// and resolve control transfers immediately.
    ///
    /// Source registers are reported in the order the instruction uses
    /// them, before the destination; this ordering is what the timing
    /// model's stall detection is defined over.
    fn decode(&mut self, word: u32) -> Result<(), SimError> {
        let pc = self.pc.wrapping_sub(WORD_SIZE);
        let instr = isa::decode(word, pc)?;
        trace!(target: "mipsim", "{pc:#010x}: {instr}");

        self.ctrl = ControlSignals::default();

        match instr {
            Instr::Sll { rd, rs, shamt } => {
                self.stats.register_src(HazardReg::Gpr(rs));
                self.stats.register_dest(HazardReg::Gpr(rd));
                self.ctrl.write_dest = true;
                self.ctrl.dest_reg = rd;
                self.ctrl.alu_op = AluOp::Sll;
                self.ctrl.alu_src1 = self.regs.read(rs);
                self.ctrl.alu_src2 = shamt;
            }
            Instr::Sra { rd, rs, shamt } => {
                self.stats.register_src(HazardReg::Gpr(rs));
                self.stats.register_dest(HazardReg::Gpr(rd));
                self.ctrl.write_dest = true;
                self.ctrl.dest_reg = rd;
                self.ctrl.alu_op = AluOp::Sra;
                self.ctrl.alu_src1 = self.regs.read(rs);
                self.ctrl.alu_src2 = shamt;
            }
            Instr::Jr { rs } => {
                self.stats.register_src(HazardReg::Gpr(rs));
                self.pc = self.regs.read(rs);
                self.stats.flush(CONTROL_FLUSH_SLOTS);
            }
            Instr::Mfhi { rd } => {
                self.stats.register_src(HazardReg::HiLo);
                self.stats.register_dest(HazardReg::Gpr(rd));
                self.ctrl.write_dest = true;
                self.ctrl.dest_reg = rd;
                self.ctrl.alu_op = AluOp::Add;
                self.ctrl.alu_src1 = self.regs.hi();
                self.ctrl.alu_src2 = 0;
            }
            Instr::Mflo { rd } => {
                self.stats.register_src(HazardReg::HiLo);
                self.stats.register_dest(HazardReg::Gpr(rd));
                self.ctrl.write_dest = true;
                self.ctrl.dest_reg = rd;
                self.ctrl.alu_op = AluOp::Add;
                self.ctrl.alu_src1 = self.regs.lo();
                self.ctrl.alu_src2 = 0;
            }
            Instr::Mult { rs, rt } => {
                self.stats.register_src(HazardReg::Gpr(rs));
                self.stats.register_src(HazardReg::Gpr(rt));
                self.stats.register_dest(HazardReg::HiLo);
                self.ctrl.is_mult_div = true;
                self.ctrl.alu_op = AluOp::Mult;
                self.ctrl.alu_src1 = self.regs.read(rs);
                self.ctrl.alu_src2 = self.regs.read(rt);
            }
            Instr::Div { rs, rt } => {
                self.stats.register_src(HazardReg::Gpr(rs));
                self.stats.register_src(HazardReg::Gpr(rt));
                self.stats.register_dest(HazardReg::HiLo);
                self.ctrl.is_mult_div = true;
                self.ctrl.alu_op = AluOp::Div;
                self.ctrl.alu_src1 = self.regs.read(rs);
                self.ctrl.alu_src2 = self.regs.read(rt);
            }
            Instr::Addu { rd, rs, rt } => {
                self.stats.register_src(HazardReg::Gpr(rs));
                self.stats.register_src(HazardReg::Gpr(rt));
                self.stats.register_dest(HazardReg::Gpr(rd));
                self.ctrl.write_dest = true;
                self.ctrl.dest_reg = rd;
                self.ctrl.alu_op = AluOp::Add;
                self.ctrl.alu_src1 = self.regs.read(rs);
                self.ctrl.alu_src2 = self.regs.read(rt);
            }
            Instr::Subu { rd, rs, rt } => {
                self.stats.register_src(HazardReg::Gpr(rs));
                self.stats.register_src(HazardReg::Gpr(rt));
                self.stats.register_dest(HazardReg::Gpr(rd));
                self.ctrl.write_dest = true;
                self.ctrl.dest_reg = rd;
                self.ctrl.alu_op = AluOp::Sub;
                self.ctrl.alu_src1 = self.regs.read(rs);
                self.ctrl.alu_src2 = self.regs.read(rt);
            }
            Instr::Slt { rd, rs, rt } => {
                self.stats.register_src(HazardReg::Gpr(rs));
                self.stats.register_src(HazardReg::Gpr(rt));
                self.stats.register_dest(HazardReg::Gpr(rd));
                self.ctrl.write_dest = true;
                self.ctrl.dest_reg = rd;
                self.ctrl.alu_op = AluOp::Slt;
                self.ctrl.alu_src1 = self.regs.read(rs);
                self.ctrl.alu_src2 = self.regs.read(rt);
            }
            Instr::J { target } => {
                self.pc = (self.pc & JUMP_REGION_MASK) | (target << 2);
                self.stats.flush(CONTROL_FLUSH_SLOTS);
            }
            Instr::Jal { target } => {
                self.stats.register_dest(HazardReg::Gpr(REG_RA));
                self.ctrl.write_dest = true;
                self.ctrl.dest_reg = REG_RA;
                self.ctrl.alu_op = AluOp::Add;
                self.ctrl.alu_src1 = self.pc;
                self.ctrl.alu_src2 = 0;
                self.pc = (self.pc & JUMP_REGION_MASK) | (target << 2);
                self.stats.flush(CONTROL_FLUSH_SLOTS);
            }
            Instr::Beq { rs, rt, offset } => {
                self.stats.register_src(HazardReg::Gpr(rs));
                self.stats.register_src(HazardReg::Gpr(rt));
                self.stats.count_branch();
                if self.regs.read(rs) == self.regs.read(rt) {
                    self.pc = self.pc.wrapping_add((offset << 2) as u32);
                    self.stats.count_taken();
                }
                self.stats.flush(CONTROL_FLUSH_SLOTS);
            }
            Instr::Bne { rs, rt, offset } => {
                self.stats.register_src(HazardReg::Gpr(rs));
                self.stats.register_src(HazardReg::Gpr(rt));
                self.stats.count_branch();
                if self.regs.read(rs) != self.regs.read(rt) {
                    self.pc = self.pc.wrapping_add((offset << 2) as u32);
                    self.stats.count_taken();
                }
                self.stats.flush(CONTROL_FLUSH_SLOTS);
            }
            Instr::Addiu { rt, rs, imm } => {
                self.stats.register_src(HazardReg::Gpr(rs));
                self.stats.register_dest(HazardReg::Gpr(rt));
                self.ctrl.write_dest = true;
                self.ctrl.dest_reg = rt;
                self.ctrl.alu_op = AluOp::Add;
                self.ctrl.alu_src1 = self.regs.read(rs);
                self.ctrl.alu_src2 = imm as u32;
            }
            Instr::Andi { rt, rs, imm } => {
                self.stats.register_src(HazardReg::Gpr(rs));
                self.stats.register_dest(HazardReg::Gpr(rt));
                self.ctrl.write_dest = true;
                self.ctrl.dest_reg = rt;
                self.ctrl.alu_op = AluOp::And;
                self.ctrl.alu_src1 = self.regs.read(rs);
                self.ctrl.alu_src2 = imm;
            }
            Instr::Lui { rt, imm } => {
                self.stats.register_dest(HazardReg::Gpr(rt));
                self.ctrl.write_dest = true;
                self.ctrl.dest_reg = rt;
                self.ctrl.alu_op = AluOp::Sll;
                self.ctrl.alu_src1 = imm as u32;
                self.ctrl.alu_src2 = 16;
            }
            Instr::Lw { rt, rs, offset } => {
                self.stats.count_mem_op();
                self.stats.register_src(HazardReg::Gpr(rs));
                self.stats.register_dest(HazardReg::Gpr(rt));
                self.ctrl.is_load = true;
                self.ctrl.write_dest = true;
                self.ctrl.dest_reg = rt;
                self.ctrl.alu_op = AluOp::Add;
                self.ctrl.alu_src1 = self.regs.read(rs);
                self.ctrl.alu_src2 = offset as u32;
            }
            Instr::Sw { rt, rs, offset } => {
                self.stats.count_mem_op();
                self.stats.register_src(HazardReg::Gpr(rt));
                self.stats.register_src(HazardReg::Gpr(rs));
                self.ctrl.is_store = true;
                self.ctrl.store_data = self.regs.read(rt);
                self.ctrl.alu_op = AluOp::Add;
                self.ctrl.alu_src1 = self.regs.read(rs);
                self.ctrl.alu_src2 = offset as u32;
            }
            Instr::Trap { code, rs, rt } => match code & TRAP_SERVICE_MASK {
                trap::PRINT_NEWLINE => self.console.print_newline(),
                trap::PRINT_INT => self.console.print_int(self.regs.read(rs) as i32),
                trap::READ_INT => {
                    let value = self.console.read_int()?;
                    self.regs.write(rt, value as u32);
                }
                trap::STOP => self.stop = true,
                service => {
                    self.stop = true;
                    return Err(SimError::UnsupportedTrap { pc, code: service });
                }
            },
        }
        Ok(())
    }

    /// Execute: one ALU application over the decoded operands.
    fn execute(&mut self) {
        self.alu_out = self
            .alu
            .op(self.ctrl.alu_op, self.ctrl.alu_src1, self.ctrl.alu_src2);
    }

    /// Memory access: loads read data memory at the computed address,
    /// stores write the latched value there; everything else passes the
    /// ALU result through.
    fn mem(&mut self) {
        self.write_data = if self.ctrl.is_load {
            self.dmem.load_word(self.alu_out)
        } else {
            self.alu_out
        };

        if self.ctrl.is_store {
            self.dmem.store_word(self.ctrl.store_data, self.alu_out);
        }
    }

    /// Writeback: commit the result (the register file ignores writes to
    /// register 0) and, for multiply/divide, both accumulator halves.
    fn writeback(&mut self) {
        if self.ctrl.write_dest {
            self.regs.write(self.ctrl.dest_reg, self.write_data);
        }
        if self.ctrl.is_mult_div {
            self.regs.set_hi_lo(self.alu.upper(), self.alu.lower());
        }
    }

    /// Current program counter.
    pub fn pc(&self) -> u32 {
        self.pc
    }

    /// Instructions retired so far.
    pub fn instructions(&self) -> u64 {
        self.instructions
    }

    /// Whether the stop condition has been set.
    pub fn stopped(&self) -> bool {
        self.stop
    }

    /// The pipeline timing model (read-only).
    pub fn stats(&self) -> &PipeStats {
        &self.stats
    }

    /// The architectural register file (read-only).
    pub fn regs(&self) -> &RegisterFile {
        &self.regs
    }

    /// Mutable register file access, for seeding initial state.
    pub fn regs_mut(&mut self) -> &mut RegisterFile {
        &mut self.regs
    }

    /// Data memory (read-only).
    pub fn dmem(&self) -> &Memory {
        &self.dmem
    }

    /// Mutable data memory access, for seeding initial state.
    pub fn dmem_mut(&mut self) -> &mut Memory {
        &mut self.dmem
    }

    /// The console collaborator.
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Prints the final report: pc, retired count, cycles, CPI, bubbles,
    /// flushes, and the memory-op/branch/taken percentages.
    pub fn print_final_stats(&self) {
        println!(
            "Program finished at pc = {:#x}  ({} instructions executed)",
            self.pc, self.instructions
        );
        println!("Cycles: {}", self.stats.cycles());
        println!("CPI: {:.2}", self.stats.cpi(self.instructions));
        println!("Bubbles: {}", self.stats.bubbles());
        println!("Flushes: {}", self.stats.flushes());
        println!(
            "Mem ops: {:.1}% of instructions",
            self.stats.mem_op_percent(self.instructions)
        );
        println!(
            "Branches: {:.1}% of instructions",
            self.stats.branch_percent(self.instructions)
        );
        println!("  % Taken: {:.1}", self.stats.taken_percent());
    }
}
