
/// ABI register indices used throughout the tests.
pub mod regs {
    pub const ZERO: usize = 0;
    pub const A0: usize = 4;
    pub const A1: usize = 5;
    pub const T0: usize = 8;
    pub const T1: usize = 9;
    pub const T2: usize = 10;
    pub const T3: usize = 11;
    pub const S0: usize = 16;
    pub const RA: usize = 31;
}
