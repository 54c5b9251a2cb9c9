//! Configuration for the simulator.
//!
//! This module defines the configuration structure used to parameterize
//! a simulation. It provides:
//! 1. **Defaults:** Baseline memory sizes and layout for course-style programs.
//! 2. **Deserialization:** JSON loading for CLI `--config` files; omitted fields keep their defaults.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::constants::{DATA_BASE, TEXT_BASE};
use crate::common::SimError;

/// Default instruction memory size in words (16 KiB of text).
const DEFAULT_IMEM_WORDS: usize = 4096;

/// Default data memory size in words (16 KiB of data; also sets the
/// initial stack pointer, one past the top).
const DEFAULT_DMEM_WORDS: usize = 4096;

/// Simulator configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Initial program counter.
    pub start_pc: u32,
    /// Instruction memory size in words.
    pub imem_words: usize,
    /// Data memory size in words.
    pub dmem_words: usize,
    /// Base address of data memory.
    pub data_base: u32,
    /// Dump the register file after every retired instruction.
    pub dump_regs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_pc: TEXT_BASE,
            imem_words: DEFAULT_IMEM_WORDS,
            dmem_words: DEFAULT_DMEM_WORDS,
            data_base: DATA_BASE,
            dump_regs: false,
        }
    }
}

impl Config {
    /// Loads a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Io`] if the file cannot be read and
    /// [`SimError::Config`] if it does not deserialize.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, SimError> {
        let text = fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|e| SimError::Config(e.to_string()))
    }
}
