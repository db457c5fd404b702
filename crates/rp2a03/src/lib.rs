//! A `no_std` interpreter for the NES's Ricoh 2A03 CPU core, a MOS 6502
//! without decimal mode.
//!
//! # Architecture
//!
//! The interpreter is built around three pieces:
//!
//! - **[`Bus`]**: byte-wise memory abstraction. Implement this trait to
//!   provide the system memory map: RAM mirrors, memory-mapped hardware,
//!   cartridge space.
//! - **[`instruction::InstructionTable`]**: a dense 256-entry decode table
//!   pairing each documented opcode with its addressing mode and operation.
//!   Undefined entries halt execution with an [`IllegalOpcode`] diagnostic.
//! - **[`Cpu`]**: the fetch-decode-execute core over a generic [`Bus`].
//!
//! Each addressing mode decodes to an [`Operand`], either an effective
//! address or an immediate value, so every operation is written once and
//! shared across modes.
//!
//! # Quick Start
//!
//! ```
//! use rp2a03::{Cpu, SimpleBus};
//!
//! let mut bus = SimpleBus::default();
//! let program = [0xA9, 0x42, 0x00]; // LDA #$42; BRK
//! let mut cpu = Cpu::with_program(&mut bus, 0x8000, &program, 0x8000);
//!
//! assert!(cpu.step(&mut bus).unwrap()); // LDA
//! assert_eq!(cpu.a, 0x42);
//! assert!(!cpu.step(&mut bus).unwrap()); // BRK halts the program
//! ```

#![no_std]
// 6502 math wraps and uses a sign bit
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
// Instruction table
#![allow(clippy::too_many_lines)]

extern crate alloc;

pub mod bus;
pub mod instruction;
pub mod processor;

pub use bus::{Bus, SimpleBus};
pub use instruction::{Instruction, InstructionTable};
pub use processor::addressing_mode::AddressingMode;
pub use processor::cpu::{
    Cpu, IllegalOpcode, RESET_VECTOR_HI, RESET_VECTOR_LO, STACK_SPACE_START,
};
pub use processor::flags::Flags;
pub use processor::operand::Operand;
pub use processor::run::{RunConfig, RunOutcome, RunPredicate, RunSummary};
