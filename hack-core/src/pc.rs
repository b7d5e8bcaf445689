//! The program counter: a register wrapped in reset/load/inc priority logic.

use crate::arithmetic::adder16;
use crate::register::Register;
use crate::signal::Signal;
use crate::word::Word;

/// Exposes `step(load, inc, reset, in) -> current` with priority exactly
/// reset > load > inc > hold.
#[derive(Debug, Default)]
pub struct ProgramCounter {
    register: Register,
}

impl ProgramCounter {
    pub fn new() -> ProgramCounter {
        ProgramCounter::default()
    }

    pub fn step(&mut self, load: Signal, inc: Signal, reset: Signal, input: Word) -> Word {
        // Snapshot the current value without disturbing it.
        let current = self.register.step(Signal::Inactive, Word::ZERO);
        let incremented = adder16(current, Word::from_u16(1));
        let next = if reset.is_active() {
            Word::ZERO
        } else if load.is_active() {
            input
        } else if inc.is_active() {
            incremented
        } else {
            current
        };
        self.register.step(Signal::Active, next)
    }

    /// Reads the current value without mutating it.
    pub fn peek(&mut self) -> Word {
        self.register.step(Signal::Inactive, Word::ZERO)
    }
}
