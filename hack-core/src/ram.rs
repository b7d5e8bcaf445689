//! The RAM hierarchy: recursively composed registers, routed with demux/mux.

use crate::gates::{demux2, demux4, demux8, mux2_16, mux4_16, mux8_16};
use crate::register::Register;
use crate::signal::Signal;
use crate::word::Word;

/// Splits the `N` least-significant bits of `n` into an address bus, index 0
/// being the most significant of those `N` bits.
pub fn address_bits<const N: usize>(n: u16) -> [Signal; N] {
    let mut bits = [Signal::Inactive; N];
    for (i, bit) in bits.iter_mut().enumerate() {
        *bit = Signal::from_bit(((n >> (N - 1 - i)) & 1) as u8);
    }
    bits
}

/// 8 registers addressed by 3 bits.
#[derive(Debug)]
pub struct Ram8 {
    registers: [Register; 8],
}

impl Default for Ram8 {
    fn default() -> Ram8 {
        Ram8::new()
    }
}

impl Ram8 {
    pub fn new() -> Ram8 {
        Ram8 {
            registers: core::array::from_fn(|_| Register::new()),
        }
    }

    pub fn step(&mut self, load: Signal, addr: [Signal; 3], input: Word) -> Word {
        let (la, lb, lc, ld, le, lf, lg, lh) = demux8([addr[0], addr[1], addr[2]], load);
        mux8_16(
            [addr[0], addr[1], addr[2]],
            self.registers[0].step(la, input),
            self.registers[1].step(lb, input),
            self.registers[2].step(lc, input),
            self.registers[3].step(ld, input),
            self.registers[4].step(le, input),
            self.registers[5].step(lf, input),
            self.registers[6].step(lg, input),
            self.registers[7].step(lh, input),
        )
    }
}

macro_rules! ram_level {
    ($name:ident, $child:ty, $width:expr, $child_width:expr) => {
        #[derive(Debug)]
        pub struct $name {
            chips: [$child; 8],
        }

        impl Default for $name {
            fn default() -> $name {
                $name::new()
            }
        }

        impl $name {
            pub fn new() -> $name {
                $name {
                    chips: core::array::from_fn(|_| <$child>::new()),
                }
            }

            pub fn step(&mut self, load: Signal, addr: [Signal; $width], input: Word) -> Word {
                let (la, lb, lc, ld, le, lf, lg, lh) =
                    demux8([addr[0], addr[1], addr[2]], load);
                let mut next = [Signal::Inactive; $child_width];
                next.copy_from_slice(&addr[3..$width]);
                mux8_16(
                    [addr[0], addr[1], addr[2]],
                    self.chips[0].step(la, next, input),
                    self.chips[1].step(lb, next, input),
                    self.chips[2].step(lc, next, input),
                    self.chips[3].step(ld, next, input),
                    self.chips[4].step(le, next, input),
                    self.chips[5].step(lf, next, input),
                    self.chips[6].step(lg, next, input),
                    self.chips[7].step(lh, next, input),
                )
            }
        }
    };
}

ram_level!(Ram64, Ram8, 6, 3);
ram_level!(Ram512, Ram64, 9, 6);
ram_level!(Ram4k, Ram512, 12, 9);

/// 16 384 words addressed by 14 bits; the top level splits 2-way instead of
/// 8-way (only 4 sub-banks of `Ram4k`).
#[derive(Debug)]
pub struct Ram16k {
    chips: [Ram4k; 4],
}

impl Default for Ram16k {
    fn default() -> Ram16k {
        Ram16k::new()
    }
}

impl Ram16k {
    pub fn new() -> Ram16k {
        Ram16k {
            chips: core::array::from_fn(|_| Ram4k::new()),
        }
    }

    pub fn step(&mut self, load: Signal, addr: [Signal; 14], input: Word) -> Word {
        let (la, lb, lc, ld) = demux4([addr[0], addr[1]], load);
        let mut next = [Signal::Inactive; 12];
        next.copy_from_slice(&addr[2..14]);
        mux4_16(
            [addr[0], addr[1]],
            self.chips[0].step(la, next, input),
            self.chips[1].step(lb, next, input),
            self.chips[2].step(lc, next, input),
            self.chips[3].step(ld, next, input),
        )
    }
}

/// Two RAM4K banks selected by the high bit of a 13-bit address: used for
/// the 8192-word screen region.
#[derive(Debug)]
pub struct Ram8k {
    chips: [Ram4k; 2],
}

impl Default for Ram8k {
    fn default() -> Ram8k {
        Ram8k::new()
    }
}

impl Ram8k {
    pub fn new() -> Ram8k {
        Ram8k {
            chips: core::array::from_fn(|_| Ram4k::new()),
        }
    }

    pub fn step(&mut self, load: Signal, addr: [Signal; 13], input: Word) -> Word {
        let (la, lb) = demux2(addr[0], load);
        let mut next = [Signal::Inactive; 12];
        next.copy_from_slice(&addr[1..13]);
        mux2_16(
            addr[0],
            self.chips[0].step(la, next, input),
            self.chips[1].step(lb, next, input),
        )
    }
}
