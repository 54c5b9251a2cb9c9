//! Arithmetic/logic unit.
//!
//! One operation per instruction, selected at decode. Multiply and
//! divide produce a double-width result split into upper and lower
//! halves, latched in the ALU until writeback commits them to hi/lo.

/// Operation the ALU applies to its two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AluOp {
    /// Wrapping addition (also used for moves with a zero operand).
    #[default]
    Add,
    /// Wrapping subtraction.
    Sub,
    /// Bitwise AND.
    And,
    /// Shift left logical.
    Sll,
    /// Shift right arithmetic (sign-filling).
    Sra,
    /// Set on less than, signed.
    Slt,
    /// Signed 32x32 -> 64 multiply; result split into hi/lo.
    Mult,
    /// Signed divide; quotient into lo, remainder into hi.
    Div,
}

/// The ALU. Holds the upper/lower halves of the last multiply or
/// divide result until the engine commits them.
#[derive(Debug, Clone, Copy, Default)]
pub struct Alu {
    upper: u32,
    lower: u32,
}

impl Alu {
    /// Applies `op` to `a` and `b`, returning the single-width result.
    ///
    /// For `Mult` and `Div` the returned value is the lower half; both
    /// halves are latched and readable via [`upper`](Self::upper) and
    /// [`lower`](Self::lower). Division by zero latches zero into both
    /// halves (the architecture leaves the result unpredictable; the
    /// simulator needs a deterministic one).
    pub fn op(&mut self, op: AluOp, a: u32, b: u32) -> u32 {
        match op {
            AluOp::Add => a.wrapping_add(b),
            AluOp::Sub => a.wrapping_sub(b),
            AluOp::And => a & b,
            AluOp::Sll => a.wrapping_shl(b),
            AluOp::Sra => ((a as i32).wrapping_shr(b)) as u32,
            AluOp::Slt => u32::from((a as i32) < (b as i32)),
            AluOp::Mult => {
                let product = i64::from(a as i32) * i64::from(b as i32);
                self.upper = (product >> 32) as u32;
                self.lower = product as u32;
                self.lower
            }
            AluOp::Div => {
                if b == 0 {
                    self.upper = 0;
                    self.lower = 0;
                } else {
                    let (a, b) = (a as i32, b as i32);
                    self.lower = a.wrapping_div(b) as u32;
                    self.upper = a.wrapping_rem(b) as u32;
                }
                self.lower
            }
        }
    }

    /// Upper half (hi) of the last multiply/divide result.
    pub fn upper(&self) -> u32 {
        self.upper
    }

    /// Lower half (lo) of the last multiply/divide result.
    pub fn lower(&self) -> u32 {
        self.lower
    }
}
