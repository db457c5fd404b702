//! 6502 CPU state and execution loop.

use crate::bus::Bus;
use crate::instruction::{InstructionTable, ricoh2a03};
use crate::processor::flags::Flags;
use crate::processor::operand::Operand;
use crate::processor::run::{RunConfig, RunOutcome, RunSummary};
use core::fmt;

/// RESET vector low byte address.
pub const RESET_VECTOR_LO: u16 = 0xFFFC;
/// RESET vector high byte address.
pub const RESET_VECTOR_HI: u16 = 0xFFFD;
/// Start of stack space (the 6502 stack grows downward from 0x01FF to 0x0100).
pub const STACK_SPACE_START: u16 = 0x0100;

/// Runtime halt: the fetched byte has no table entry.
///
/// The run is over but no state was corrupted; the caller may still inspect
/// registers and memory. `pc` is the address the byte was fetched from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct IllegalOpcode {
    pub opcode: u8,
    pub pc: u16,
}

impl fmt::Display for IllegalOpcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "illegal opcode ${:02X} at ${:04X}", self.opcode, self.pc)
    }
}

impl core::error::Error for IllegalOpcode {}

/// The 6502 CPU with registers and instruction table.
///
/// Maintains the CPU state over a generic [`Bus`] implementation to allow
/// custom memory maps.
///
/// # Examples
///
/// ```
/// use rp2a03::{Bus, Cpu, RESET_VECTOR_HI, RESET_VECTOR_LO, SimpleBus};
///
/// let mut bus = SimpleBus::default();
///
/// // Set up reset vector
/// bus.write(RESET_VECTOR_LO, 0x00);
/// bus.write(RESET_VECTOR_HI, 0x80);
///
/// // Reset the CPU (loads PC from reset vector)
/// let mut cpu = Cpu::new();
/// cpu.reset(&mut bus);
/// assert_eq!(cpu.pc, 0x8000);
///
/// // Execute an instruction
/// bus.write_block(0x8000, &[0xA9, 0x42]); // LDA #$42
/// let running = cpu.step(&mut bus).unwrap();
/// assert!(running);
/// assert_eq!(cpu.a, 0x42);
/// ```
pub struct Cpu<B: Bus> {
    /// Accumulator register.
    pub a: u8,
    /// X index register.
    pub x: u8,
    /// Y index register.
    pub y: u8,
    /// Processor status flags.
    pub p: Flags,
    /// Stack pointer (0x00-0xFF, actual stack is at 0x0100 + sp).
    pub sp: u8,
    /// Program counter.
    pub pc: u16,
    /// Opcode fetched by the most recent [`step`](Self::step) call.
    pub last_opcode: u8,
    /// Operand decoded by the most recent successful [`step`](Self::step) call.
    pub last_operand: Option<Operand>,
    table: InstructionTable<B>,
}

impl<B: Bus> fmt::Debug for Cpu<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Here only because the dispatch table is too noisy
        f.debug_struct("Cpu")
            .field("a", &self.a)
            .field("x", &self.x)
            .field("y", &self.y)
            .field("p", &self.p)
            .field("sp", &self.sp)
            .field("pc", &self.pc)
            .field("last_opcode", &self.last_opcode)
            .field("last_operand", &self.last_operand)
            .finish_non_exhaustive()
    }
}

impl<B: Bus> Cpu<B> {
    /// Create a new CPU in its power-on state:
    ///
    /// - A, X, Y = 0
    /// - SP = 0xFD
    /// - P = empty
    /// - PC = 0 (call [`reset`](Self::reset) to load it from the reset vector)
    #[must_use]
    pub fn new() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            p: Flags::empty(),
            sp: 0xFD,
            pc: 0,
            last_opcode: 0,
            last_operand: None,
            table: ricoh2a03::instruction_table(),
        }
    }

    /// Convenience constructor that sets the reset vector and resets the CPU
    /// in one call.
    ///
    /// # Examples
    ///
    /// ```
    /// use rp2a03::{Cpu, SimpleBus};
    ///
    /// let mut bus = SimpleBus::default();
    /// let cpu = Cpu::with_reset_vector(&mut bus, 0x9000);
    /// assert_eq!(cpu.pc, 0x9000);
    /// ```
    pub fn with_reset_vector(bus: &mut B, reset_vector: u16) -> Self {
        bus.set_reset_vector(reset_vector);
        let mut cpu = Self::new();
        cpu.reset(bus);
        cpu
    }

    /// Convenience constructor that loads a program, sets the reset vector,
    /// and resets the CPU.
    ///
    /// # Examples
    ///
    /// ```
    /// use rp2a03::{Cpu, SimpleBus};
    ///
    /// let mut bus = SimpleBus::default();
    /// let program = [0xEA, 0x00]; // NOP; BRK
    /// let cpu = Cpu::with_program(&mut bus, 0x8000, &program, 0x8000);
    /// assert_eq!(cpu.pc, 0x8000);
    /// ```
    pub fn with_program(
        bus: &mut B,
        load_address: u16,
        program: &[u8],
        reset_vector: u16,
    ) -> Self {
        bus.write_block(load_address, program);
        Self::with_reset_vector(bus, reset_vector)
    }

    /// Reset the CPU to its initial state and load PC from the reset vector
    /// at `$FFFC/$FFFD`, mimicking the hardware RESET line.
    pub fn reset(&mut self, bus: &mut B) {
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.p = Flags::empty();
        self.sp = 0xFD;
        self.last_opcode = 0;
        self.last_operand = None;
        self.pc = bus.read_word(RESET_VECTOR_LO);
    }

    /// Execute one instruction.
    ///
    /// Fetches the opcode at PC, decodes the operand per the instruction's
    /// addressing mode, and executes the operation. After `step` returns, PC
    /// points at the next opcode.
    ///
    /// Returns `Ok(false)` when the instruction was BRK, the program's halt
    /// signal; `Ok(true)` otherwise. A byte with no table entry yields
    /// [`IllegalOpcode`] and leaves PC on the offending byte.
    pub fn step(&mut self, bus: &mut B) -> Result<bool, IllegalOpcode> {
        let pc = self.pc;
        let opcode = bus.read(pc);
        self.last_opcode = opcode;
        let Some(instruction) = self.table.get(opcode) else {
            return Err(IllegalOpcode { opcode, pc });
        };
        self.pc = pc.wrapping_add(1);
        let operand = instruction.mode.fetch(self, bus);
        self.last_operand = Some(operand);
        log::trace!(
            "{pc:04X}  {opcode:02X}  {mnemonic} {operand:?}",
            mnemonic = instruction.mnemonic
        );
        (instruction.execute)(self, bus, operand);
        Ok(opcode != 0x00) // BRK halts
    }

    /// Drive the CPU until a stop condition occurs and return a summary.
    ///
    /// BRK and undefined opcodes always stop the run; [`RunConfig`] adds an
    /// optional instruction limit and predicate on top.
    pub fn run_until(&mut self, bus: &mut B, config: RunConfig<'_, B>) -> RunSummary {
        let RunConfig {
            instruction_limit,
            mut predicate,
        } = config;

        let mut summary = RunSummary::default();

        loop {
            if let Some(limit) = instruction_limit
                && summary.instructions_executed >= limit
            {
                summary.mark(RunOutcome::HitInstructionLimit);
                break;
            }

            match self.step(bus) {
                Err(halt) => {
                    summary.mark(RunOutcome::IllegalOpcode {
                        opcode: halt.opcode,
                        pc: halt.pc,
                    });
                    break;
                }
                Ok(false) => {
                    summary.instructions_executed += 1;
                    summary.mark(RunOutcome::HitBrk);
                    break;
                }
                Ok(true) => summary.instructions_executed += 1,
            }

            if let Some(predicate_cb) = predicate.as_mut()
                && predicate_cb.should_stop(self, bus)
            {
                summary.mark(RunOutcome::HitPredicate);
                break;
            }
        }

        summary
    }

    /// Push a byte onto the stack.
    ///
    /// The stack grows downward from 0x01FF; the stack pointer is decremented
    /// after the write and wraps within the stack page.
    pub fn push(&mut self, bus: &mut B, value: u8) {
        bus.write(STACK_SPACE_START | u16::from(self.sp), value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Pop a byte from the stack.
    ///
    /// Stack pointer is incremented before the read.
    pub fn pop(&mut self, bus: &mut B) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        bus.read(STACK_SPACE_START | u16::from(self.sp))
    }

    /// Consume one byte from the instruction stream.
    pub(crate) fn fetch_byte(&mut self, bus: &mut B) -> u8 {
        let value = bus.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    /// Consume a little-endian word from the instruction stream.
    pub(crate) fn fetch_word(&mut self, bus: &mut B) -> u16 {
        let lo = self.fetch_byte(bus);
        let hi = self.fetch_byte(bus);
        u16::from(lo) | u16::from(hi) << 8
    }
}

impl<B: Bus> Default for Cpu<B> {
    fn default() -> Self {
        Self::new()
    }
}
