//! The addressable memory unit: a façade that routes a 15-bit address into
//! RAM, the screen-mapped region, or the keyboard word.

use crate::gates::{demux4, mux4_16};
use crate::ram::{address_bits, Ram16k, Ram8k};
use crate::register::Register;
use crate::signal::Signal;
use crate::word::Word;

/// Address ranges of the three regions this unit routes between. Mirrors
/// spec.md's memory map table (§6).
pub mod memory_range {
    pub struct Range {
        pub min: u16,
        pub max: u16,
    }

    pub const RAM: Range = Range { min: 0x0000, max: 0x3FFF };
    pub const SCREEN: Range = Range { min: 0x4000, max: 0x5FFF };
    pub const KEYBOARD: Range = Range { min: 0x6000, max: 0x6000 };
}

/// Routes `load`/`addr`/`in` into RAM16K (0..16383), an 8192-word screen
/// bank (16384..24575), or a single keyboard register (24576). The same
/// `step(load, addr, in) -> current` contract as RAM.
#[derive(Debug, Default)]
pub struct Memory {
    ram: Ram16k,
    screen: Ram8k,
    keyboard: Register,
}

impl Memory {
    pub fn new() -> Memory {
        Memory::default()
    }

    pub fn step(&mut self, load: Signal, addr: u16, input: Word) -> Word {
        let bits15 = address_bits::<15>(addr);
        let (rla, rlb, sl, kl) = demux4([bits15[0], bits15[1]], load);

        let mut addr14 = [Signal::Inactive; 14];
        addr14.copy_from_slice(&bits15[1..15]);
        let mut addr13 = [Signal::Inactive; 13];
        addr13.copy_from_slice(&bits15[2..15]);

        let ram_lo = self.ram.step(rla, addr14, input);
        let ram_hi = self.ram.step(rlb, addr14, input);
        let screen_out = self.screen.step(sl, addr13, input);
        let keyboard_out = self.keyboard.step(kl, input);

        mux4_16([bits15[0], bits15[1]], ram_lo, ram_hi, screen_out, keyboard_out)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn writes_and_reads_general_ram() {
        let mut mem = Memory::new();
        mem.step(Signal::Active, 5, Word::from_u16(80));
        assert_eq!(mem.step(Signal::Inactive, 5, Word::ZERO).to_u16(), 80);
    }

    #[test]
    fn writes_and_reads_ram_high_half() {
        let mut mem = Memory::new();
        mem.step(Signal::Active, 16383, Word::from_u16(7));
        assert_eq!(mem.step(Signal::Inactive, 16383, Word::ZERO).to_u16(), 7);
    }

    #[test]
    fn writes_screen_region() {
        let mut mem = Memory::new();
        mem.step(Signal::Active, 16384, Word::from_u16(0xFFFF));
        assert_eq!(mem.step(Signal::Inactive, 16384, Word::ZERO).to_u16(), 0xFFFF);
        // Unrelated RAM cell is unaffected.
        assert_eq!(mem.step(Signal::Inactive, 5, Word::ZERO).to_u16(), 0);
    }

    #[test]
    fn keyboard_echoes_injected_key_code() {
        let mut mem = Memory::new();
        mem.step(Signal::Active, 24_576, Word::from_u16(65));
        assert_eq!(mem.step(Signal::Inactive, 24_576, Word::ZERO).to_u16(), 65);
    }
}
