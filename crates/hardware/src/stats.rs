//! Pipeline timing model and simulation statistics.
//!
//! This module reconstructs the cycle costs a real pipelined
//! implementation would exhibit, without executing anything out of
//! order. It provides:
//! 1. **Occupancy track:** Which pipeline slot currently owns a pending destination-register write.
//! 2. **Hazard accounting:** Read-after-write collisions converted into stall (bubble) cycles.
//! 3. **Control-flow accounting:** Taken branches and jumps converted into flush cycles.
//! 4. **Derived metrics:** CPI, memory-operation, branch, and taken-branch ratios.
//!
//! The model assumes a pipeline with no forwarding/bypass network: a
//! source register is hazardous until the instruction writing it reaches
//! writeback, and the bubble charge equals the remaining distance.

use std::fmt;

/// Number of pipeline slots: two micro-steps per classical stage,
/// except decode and writeback.
pub const PIPE_STAGES: usize = 8;

/// First fetch slot (front of the track).
pub const IF1: usize = 0;
/// Second fetch slot.
pub const IF2: usize = 1;
/// Decode slot; destination registers are injected here.
pub const ID: usize = 2;
/// First execute slot; start of the hazard scan window.
pub const EX1: usize = 3;
/// Second execute slot.
pub const EX2: usize = 4;
/// First memory slot.
pub const MEM1: usize = 5;
/// Second memory slot.
pub const MEM2: usize = 6;
/// Writeback slot; results are committed here and stop being hazardous.
pub const WB: usize = 7;

/// A register tracked for hazard purposes.
///
/// The hi/lo accumulator pair hazards as a single unit: a `mult` or
/// `div` in flight stalls both `mfhi` and `mflo` identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HazardReg {
    /// A general-purpose register, 0..32.
    Gpr(usize),
    /// The combined hi/lo accumulator pair.
    HiLo,
}

/// The pipeline timing model.
///
/// Owns the occupancy track and every counter; the execution engine
/// only calls the reporting operations and reads the derived metrics.
/// Counters are monotonically non-decreasing and are mutated only by
/// [`clock`](Self::clock), [`bubble`](Self::bubble),
/// [`flush`](Self::flush), and the three `count_*` hooks.
#[derive(Debug, Clone)]
pub struct PipeStats {
    /// Occupancy track, indexed IF1..=WB from just-fetched to retiring.
    track: [Option<HazardReg>; PIPE_STAGES],
    cycles: u64,
    bubbles: u64,
    flushes: u64,
    mem_ops: u64,
    branches: u64,
    taken: u64,
}

impl Default for PipeStats {
    fn default() -> Self {
        Self {
            track: [None; PIPE_STAGES],
            // Pipeline fill cost: the first instruction needs
            // PIPE_STAGES cycles to retire, of which one is its own
            // clock() call.
            cycles: (PIPE_STAGES - 1) as u64,
            bubbles: 0,
            flushes: 0,
            mem_ops: 0,
            branches: 0,
            taken: 0,
        }
    }
}

impl PipeStats {
    /// Creates a timing model with an empty track and the cycle counter
    /// seeded with the pipeline fill cost.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the pipeline by one slot.
    ///
    /// Called exactly once per retired instruction: increments the cycle
    /// counter, shifts every occupant one slot toward writeback, and
    /// injects an empty slot at the fetch end. This models steady-state
    /// one-instruction-per-cycle throughput.
    pub fn clock(&mut self) {
        self.cycles += 1;
        self.track.copy_within(IF1..WB, IF1 + 1);
        self.track[IF1] = None;
    }

    /// Reports a source-register read by the instruction being decoded.
    ///
    /// Register 0 is hard-wired to zero and never stalls. Otherwise each
    /// slot in the execute-to-memory window whose occupant matches `r`
    /// charges one bubble per remaining slot until that occupant reaches
    /// writeback: the cycles until its result becomes available in a
    /// pipeline with no forwarding. The scan observes the track as
    /// bubbles shift it.
    pub fn register_src(&mut self, r: HazardReg) {
        if r == HazardReg::Gpr(crate::common::constants::REG_ZERO) {
            return;
        }
        for i in EX1..WB {
            if self.track[i] == Some(r) {
                for _ in i..WB {
                    self.bubble();
                }
            }
        }
    }

    /// Records `r` as the pending write of the instruction currently in
    /// decode.
    pub fn register_dest(&mut self, r: HazardReg) {
        self.track[ID] = Some(r);
    }

    /// Stalls the back half of the pipeline for one cycle.
    ///
    /// The slots from the first execute slot through writeback shift by
    /// one with an empty slot injected at execute; decode and earlier
    /// are frozen. Charges one bubble and one cycle.
    pub fn bubble(&mut self) {
        self.bubbles += 1;
        self.cycles += 1;
        self.track.copy_within(EX1..WB, EX1 + 1);
        self.track[EX1] = None;
    }

    /// Discards `count` speculatively-fetched instructions after a
    /// control transfer.
    ///
    /// Each discarded instruction costs one cycle and one flush, with a
    /// full-track shift identical to [`clock`](Self::clock). Flushes
    /// never charge bubbles; the two are mutually exclusive cost
    /// categories.
    pub fn flush(&mut self, count: usize) {
        for _ in 0..count {
            self.cycles += 1;
            self.flushes += 1;
            self.track.copy_within(IF1..WB, IF1 + 1);
            self.track[IF1] = None;
        }
    }

    /// Counts one memory operation (load or store).
    pub fn count_mem_op(&mut self) {
        self.mem_ops += 1;
    }

    /// Counts one conditional branch, taken or not.
    pub fn count_branch(&mut self) {
        self.branches += 1;
    }

    /// Counts one genuinely-taken conditional branch.
    pub fn count_taken(&mut self) {
        self.taken += 1;
    }

    /// Total cycles, including the pipeline fill cost.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Total bubble (data-hazard stall) cycles.
    pub fn bubbles(&self) -> u64 {
        self.bubbles
    }

    /// Total flush (control-transfer discard) cycles.
    pub fn flushes(&self) -> u64 {
        self.flushes
    }

    /// Total memory operations counted.
    pub fn mem_ops(&self) -> u64 {
        self.mem_ops
    }

    /// Total conditional branches counted.
    pub fn branches(&self) -> u64 {
        self.branches
    }

    /// Total taken conditional branches counted.
    pub fn taken(&self) -> u64 {
        self.taken
    }

    /// Cycles per instruction for `instructions` retired instructions.
    pub fn cpi(&self, instructions: u64) -> f64 {
        if instructions == 0 {
            0.0
        } else {
            self.cycles as f64 / instructions as f64
        }
    }

    /// Memory operations as a percentage of retired instructions.
    pub fn mem_op_percent(&self, instructions: u64) -> f64 {
        percent(self.mem_ops, instructions)
    }

    /// Conditional branches as a percentage of retired instructions.
    pub fn branch_percent(&self, instructions: u64) -> f64 {
        percent(self.branches, instructions)
    }

    /// Taken branches as a percentage of counted branches.
    pub fn taken_percent(&self) -> f64 {
        percent(self.taken, self.branches)
    }

    /// Returns a debug snapshot of the raw occupancy track and the three
    /// pipeline cost counters.
    pub fn snapshot(&self) -> PipeSnapshot {
        PipeSnapshot {
            track: self.track,
            cycles: self.cycles,
            bubbles: self.bubbles,
            flushes: self.flushes,
        }
    }
}

fn percent(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        100.0 * count as f64 / total as f64
    }
}

/// Debug view of the occupancy track alongside the pipeline cost
/// counters, for tests and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipeSnapshot {
    /// The raw occupancy track, IF1 first.
    pub track: [Option<HazardReg>; PIPE_STAGES],
    /// Total cycles.
    pub cycles: u64,
    /// Total bubbles.
    pub bubbles: u64,
    /// Total flushes.
    pub flushes: u64,
}

impl fmt::Display for PipeSnapshot {
    /// Renders the track with one column per slot:
    /// `--` for empty, the register number for GPRs, `hl` for hi/lo.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IF1 IF2 *ID* EX1 EX2 MEM1 MEM2 WB |")?;
        for slot in &self.track {
            match slot {
                None => write!(f, " --")?,
                Some(HazardReg::Gpr(r)) => write!(f, " {r:2}")?,
                Some(HazardReg::HiLo) => write!(f, " hl")?,
            }
        }
        write!(
            f,
            " | C={} B={} F={}",
            self.cycles, self.bubbles, self.flushes
        )
    }
}
