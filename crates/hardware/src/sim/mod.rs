//! Program loading and top-level simulation driver.

/// Hex-word program image loader.
pub mod loader;

/// Top-level simulator wiring.
pub mod simulator;

pub use simulator::Simulator;
