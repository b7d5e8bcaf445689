//! Instruction decode and execute: the only component that interprets the
//! meaning of a 16-bit word rather than just routing or combining bits.

use crate::arithmetic::{alu, AluControl};
use crate::gates::{and, mux2_16, not, or};
use crate::pc::ProgramCounter;
use crate::register::Register;
use crate::signal::Signal;
use crate::word::Word;

/// What the CPU asks the rest of the machine to do this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuOutput {
    pub m_out: Word,
    pub write_m: Signal,
    pub addr_m: u16,
}

/// Registers A, D, and the program counter. The ALU itself carries no state
/// and is invoked fresh every step.
#[derive(Debug, Default)]
pub struct Cpu {
    a: Register,
    d: Register,
    pc: ProgramCounter,
}

impl Cpu {
    pub fn new() -> Cpu {
        Cpu::default()
    }

    /// `(instruction, m_in, reset) -> (m_out, write_m, addr_m)`. A- and
    /// C-instruction control bits are masked by `instr[0]` so an
    /// A-instruction's immediate bits never leak into ALU control,
    /// destinations, or jump flags.
    pub fn step(&mut self, instruction: Word, m_in: Word, reset: Signal) -> CpuOutput {
        let is_c = instruction.bit(0);
        let field = |i: usize| and(instruction.bit(i), is_c);

        let use_memory = field(3);
        let ctrl = AluControl {
            zx: field(4),
            nx: field(5),
            zy: field(6),
            ny: field(7),
            f: field(8),
            no: field(9),
        };
        let dest_a = field(10);
        let dest_d = field(11);
        let dest_m = field(12);
        let jump_lt = field(13);
        let jump_eq = field(14);
        let jump_gt = field(15);

        let a_current = self.a.peek();
        let d_current = self.d.peek();

        let y = mux2_16(use_memory, a_current, m_in);
        let result = alu(d_current, y, ctrl);

        let a_load = or(not(is_c), dest_a);
        let a_input = mux2_16(is_c, instruction, result.out);
        self.a.step(a_load, a_input);
        self.d.step(dest_d, result.out);

        let jump = or(
            or(
                and(jump_gt, and(not(result.zr), not(result.ng))),
                and(jump_eq, result.zr),
            ),
            and(jump_lt, result.ng),
        );
        let target = Word::from_u16(a_current.address());
        self.pc.step(jump, not(jump), reset, target);

        CpuOutput {
            m_out: result.out,
            write_m: dest_m,
            addr_m: a_current.address(),
        }
    }

    pub fn peek_pc(&mut self) -> Word {
        self.pc.peek()
    }

    pub fn peek_a(&mut self) -> Word {
        self.a.peek()
    }
}
