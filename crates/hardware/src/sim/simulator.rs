//! Top-level simulator wiring.
//!
//! Builds instruction and data memory from a configuration and loaded
//! images, hands them to the execution engine, and drives the run loop
//! to the final report.

use crate::common::SimError;
use crate::config::Config;
use crate::core::Cpu;
use crate::soc::{Console, Memory, StdConsole};

/// Top-level simulator: the execution engine plus its wiring.
#[derive(Debug)]
pub struct Simulator<C> {
    /// The execution engine (architectural state + timing model).
    pub cpu: Cpu<C>,
}

impl Simulator<StdConsole> {
    /// Creates a simulator over the process console.
    pub fn new(config: &Config, program: &[u32], data: &[u32]) -> Self {
        Self::with_console(config, program, data, StdConsole)
    }
}

impl<C: Console> Simulator<C> {
    /// Creates a simulator with an explicit console, for tests.
    ///
    /// Instruction memory is sized per the configuration (growing to fit
    /// a larger program image), data memory likewise.
    pub fn with_console(config: &Config, program: &[u32], data: &[u32], console: C) -> Self {
        let imem_words = config.imem_words.max(program.len());
        let dmem_words = config.dmem_words.max(data.len());

        let imem = Memory::with_image(config.start_pc, imem_words, program);
        let dmem = Memory::with_image(config.data_base, dmem_words, data);

        let mut cpu = Cpu::new(config.start_pc, imem, dmem, console);
        cpu.set_dump_regs(config.dump_regs);
        Self { cpu }
    }

    /// Runs the program to the stop trap.
    ///
    /// # Errors
    ///
    /// Propagates the fatal [`SimError`] that halted the run, if any.
    pub fn run(&mut self) -> Result<(), SimError> {
        self.cpu.run()
    }

    /// Prints the final report.
    pub fn report(&self) {
        self.cpu.print_final_stats();
    }
}
