//! Instruction representation and the dense dispatch table.

use crate::bus::Bus;
use crate::processor::addressing_mode::AddressingMode;
use crate::processor::cpu::Cpu;
use crate::processor::operand::Operand;

pub mod ricoh2a03;

/// A single decoded instruction: its mnemonic (for diagnostics and trace
/// logs), its addressing mode, and its operation.
pub struct Instruction<B: Bus> {
    pub mnemonic: &'static str,
    pub mode: AddressingMode,
    pub execute: fn(&mut Cpu<B>, &mut B, Operand),
}

// fn pointers are Copy regardless of `B`, so spell the impls out instead of
// deriving a spurious `B: Copy` bound.
impl<B: Bus> Clone for Instruction<B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: Bus> Copy for Instruction<B> {}

/// 256-entry table mapping opcode bytes to instructions.
///
/// Undefined opcodes have no entry; fetching one halts execution with an
/// illegal-opcode diagnostic.
pub struct InstructionTable<B: Bus>([Option<Instruction<B>>; 256]);

impl<B: Bus> InstructionTable<B> {
    pub(crate) const fn new(entries: [Option<Instruction<B>>; 256]) -> Self {
        Self(entries)
    }

    /// Look up the instruction for an opcode byte.
    #[must_use]
    pub fn get(&self, opcode: u8) -> Option<Instruction<B>> {
        self.0[usize::from(opcode)]
    }

    /// Replace one entry, e.g. to patch an opcode.
    #[must_use]
    pub const fn with(mut self, opcode: u8, instruction: Instruction<B>) -> Self {
        self.0[opcode as usize] = Some(instruction);
        self
    }
}
