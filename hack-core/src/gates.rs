//! Combinational gates, all synthesised from a single primitive: [`nand`].
//!
//! Every function here is pure and total; there is no error state to
//! produce or propagate.

use crate::signal::Signal;
use crate::word::Word;

/// The single primitive. Active iff at least one input is inactive.
pub fn nand(a: Signal, b: Signal) -> Signal {
    if a.is_active() && b.is_active() {
        Signal::Inactive
    } else {
        Signal::Active
    }
}

pub fn not(a: Signal) -> Signal {
    nand(a, a)
}

pub fn and(a: Signal, b: Signal) -> Signal {
    not(nand(a, b))
}

pub fn or(a: Signal, b: Signal) -> Signal {
    nand(not(a), not(b))
}

pub fn xor(a: Signal, b: Signal) -> Signal {
    or(and(a, not(b)), and(not(a), b))
}

/// Short-circuits a broadcast-and when `s` is known at the call site: saves
/// allocating a broadcast Word when only its effect is needed.
pub fn and_bcast(s: Signal, w: Word) -> Word {
    match s {
        Signal::Active => w,
        Signal::Inactive => Word::ZERO,
    }
}

macro_rules! word_from_bitwise {
    ($name:ident, $scalar:path) => {
        pub fn $name(a: Word, b: Word) -> Word {
            let mut bits = [Signal::Inactive; 16];
            for i in 0..16 {
                bits[i] = $scalar(a.bit(i), b.bit(i));
            }
            Word::from_bits(bits)
        }
    };
}

word_from_bitwise!(nand16, nand);
word_from_bitwise!(and16, and);
word_from_bitwise!(or16, or);
word_from_bitwise!(xor16, xor);

pub fn not16(a: Word) -> Word {
    let mut bits = [Signal::Inactive; 16];
    for i in 0..16 {
        bits[i] = not(a.bit(i));
    }
    Word::from_bits(bits)
}

/// Two-way multiplexer: `b` when `s` is active, else `a`.
pub fn mux2(s: Signal, a: Signal, b: Signal) -> Signal {
    or(and(not(s), a), and(s, b))
}

pub fn mux2_16(s: Signal, a: Word, b: Word) -> Word {
    match s {
        Signal::Inactive => a,
        Signal::Active => b,
    }
}

/// Four-way multiplexer, `s[0]` the high selector bit.
pub fn mux4_16(s: [Signal; 2], a: Word, b: Word, c: Word, d: Word) -> Word {
    let ab = mux2_16(s[1], a, b);
    let cd = mux2_16(s[1], c, d);
    mux2_16(s[0], ab, cd)
}

/// Eight-way multiplexer, `s[0]` the highest selector bit.
#[allow(clippy::too_many_arguments)]
pub fn mux8_16(
    s: [Signal; 3],
    a: Word,
    b: Word,
    c: Word,
    d: Word,
    e: Word,
    f: Word,
    g: Word,
    h: Word,
) -> Word {
    let abcd = mux4_16([s[1], s[2]], a, b, c, d);
    let efgh = mux4_16([s[1], s[2]], e, f, g, h);
    mux2_16(s[0], abcd, efgh)
}

/// Two-way demultiplexer: routes `in` to the output selected by `s`, the
/// other output forced inactive.
pub fn demux2(s: Signal, input: Signal) -> (Signal, Signal) {
    (and(not(s), input), and(s, input))
}

pub fn demux2_16(s: Signal, input: Word) -> (Word, Word) {
    (and_bcast(not(s), input), and_bcast(s, input))
}

pub fn demux4(s: [Signal; 2], input: Signal) -> (Signal, Signal, Signal, Signal) {
    let (ab, cd) = demux2(s[0], input);
    let (a, b) = demux2(s[1], ab);
    let (c, d) = demux2(s[1], cd);
    (a, b, c, d)
}

pub fn demux8(s: [Signal; 3], input: Signal) -> (Signal, Signal, Signal, Signal, Signal, Signal, Signal, Signal) {
    let (abcd, efgh) = demux2(s[0], input);
    let (a, b, c, d) = demux4([s[1], s[2]], abcd);
    let (e, f, g, h) = demux4([s[1], s[2]], efgh);
    (a, b, c, d, e, f, g, h)
}
