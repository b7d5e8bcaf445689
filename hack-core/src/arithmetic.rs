//! The 16-bit adder and the 6-control-line ALU built on top of it.

use crate::gates::{and, and16, mux2_16, not, or, xor, xor16};
use crate::signal::Signal;
use crate::word::Word;

/// `(a, b) -> (carry, sum)`.
pub fn half_adder(a: Signal, b: Signal) -> (Signal, Signal) {
    (and(a, b), xor(a, b))
}

/// Chains two half adders and OR-combines their carries.
pub fn full_adder(a: Signal, b: Signal, c: Signal) -> (Signal, Signal) {
    let (ac, s1) = half_adder(a, b);
    let (bc, sum) = half_adder(s1, c);
    (or(ac, bc), sum)
}

/// Ripple-carry 16-bit adder, bit 15 (least significant) to bit 0. The
/// final carry-out is discarded: wrapping two's-complement addition.
pub fn adder16(a: Word, b: Word) -> Word {
    let mut bits = [Signal::Inactive; 16];
    let mut carry = Signal::Inactive;
    for i in (0..16).rev() {
        let (c, sum) = full_adder(a.bit(i), b.bit(i), carry);
        bits[i] = sum;
        carry = c;
    }
    Word::from_bits(bits)
}

/// The six control lines that select an ALU operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AluControl {
    /// Zero x.
    pub zx: Signal,
    /// Negate x.
    pub nx: Signal,
    /// Zero y.
    pub zy: Signal,
    /// Negate y.
    pub ny: Signal,
    /// Add (active) vs. bitwise AND (inactive).
    pub f: Signal,
    /// Negate the output.
    pub no: Signal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AluOutput {
    pub out: Word,
    pub zr: Signal,
    pub ng: Signal,
}

/// Evaluates the ALU for the given operands and control lines. Total and
/// pure: there is no invalid control-line combination, only an
/// unsurprising result for ones a real program would never choose.
pub fn alu(x: Word, y: Word, ctrl: AluControl) -> AluOutput {
    let x = preprocess(x, ctrl.zx, ctrl.nx);
    let y = preprocess(y, ctrl.zy, ctrl.ny);

    let out = mux2_16(ctrl.f, and16(x, y), adder16(x, y));
    let out = negate_if(out, ctrl.no);

    let ng = out.bit(0);
    let zr = not(reduce_or(&out));

    AluOutput { out, zr, ng }
}

fn preprocess(w: Word, zero: Signal, negate: Signal) -> Word {
    let w = and16(w, Word::broadcast(not(zero)));
    negate_if(w, negate)
}

fn negate_if(w: Word, negate: Signal) -> Word {
    xor16(w, Word::broadcast(negate))
}

fn reduce_or(w: &Word) -> Signal {
    let mut acc = Signal::Inactive;
    for i in 0..16 {
        acc = or(acc, w.bit(i));
    }
    acc
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::signal::Signal::{Active, Inactive};

    #[test]
    fn half_adder_truth_table() {
        assert_eq!(half_adder(Inactive, Inactive), (Inactive, Inactive));
        assert_eq!(half_adder(Active, Inactive), (Inactive, Active));
        assert_eq!(half_adder(Inactive, Active), (Inactive, Active));
        assert_eq!(half_adder(Active, Active), (Active, Inactive));
    }

    #[test]
    fn full_adder_truth_table() {
        assert_eq!(full_adder(Active, Active, Active), (Active, Active));
        assert_eq!(full_adder(Inactive, Active, Active), (Active, Inactive));
        assert_eq!(full_adder(Inactive, Inactive, Active), (Inactive, Active));
    }

    #[test]
    fn adder16_wraps_mod_2_16() {
        assert_eq!(adder16(Word::from_u16(65535), Word::from_u16(2)).to_u16(), 1);
        assert_eq!(adder16(Word::from_u16(10000), Word::from_u16(10000)).to_u16(), 20000);
        assert_eq!(adder16(Word::from_u16(0), Word::from_u16(0)).to_u16(), 0);
    }

    fn ctrl(zx: u8, nx: u8, zy: u8, ny: u8, f: u8, no: u8) -> AluControl {
        AluControl {
            zx: Signal::from_bit(zx),
            nx: Signal::from_bit(nx),
            zy: Signal::from_bit(zy),
            ny: Signal::from_bit(ny),
            f: Signal::from_bit(f),
            no: Signal::from_bit(no),
        }
    }

    #[test]
    fn computes_x_plus_y() {
        let out = alu(Word::from_u16(512), Word::from_u16(512), ctrl(0, 0, 0, 0, 1, 0));
        assert_eq!(out.out.to_u16(), 1024);
    }

    #[test]
    fn computes_minus_one() {
        let out = alu(Word::from_u16(3124), Word::from_u16(45643), ctrl(1, 1, 1, 0, 1, 0));
        assert_eq!(out.out.to_u16(), 0xFFFF);
        assert_eq!(out.ng, Active);
    }

    #[test]
    fn computes_zero_and_sets_zr() {
        let out = alu(Word::from_u16(3124), Word::from_u16(45643), ctrl(1, 0, 1, 0, 1, 0));
        assert_eq!(out.out.to_u16(), 0);
        assert_eq!(out.zr, Active);
        assert_eq!(out.ng, Inactive);
    }

    #[test]
    fn computes_x_minus_y() {
        let out = alu(Word::from_u16(256), Word::from_u16(255), ctrl(0, 1, 0, 0, 1, 1));
        assert_eq!(out.out.to_u16(), 1);
    }

    #[test]
    fn computes_bitwise_and() {
        let out = alu(
            Word::from_u16(0b0111_0000_1000_1010),
            Word::from_u16(0b0000_0000_1100_1010),
            ctrl(0, 0, 0, 0, 0, 0),
        );
        assert_eq!(out.out.to_u16(), 0b0000_0000_1000_1010);
    }
}
