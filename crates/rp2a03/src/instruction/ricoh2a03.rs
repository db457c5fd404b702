//! The Ricoh 2A03 instruction set: the 151 documented MOS 6502
//! opcode/addressing-mode pairs.
//!
//! The 2A03 is a stock 6502 with decimal-mode arithmetic removed; `SED` and
//! `CLD` still toggle the flag bit, but ADC/SBC always work in binary.
//! Undocumented opcodes have no table entry and halt execution.

use crate::bus::Bus;
use crate::instruction::{Instruction, InstructionTable};
use crate::processor::addressing_mode::AddressingMode::{
    Absolute, AbsoluteX, AbsoluteY, Accumulator, Immediate, Implied, Indirect, IndirectX,
    IndirectY, Relative, ZeroPage, ZeroPageX, ZeroPageY,
};
use crate::processor::cpu::Cpu;
use crate::processor::flags::Flags;
use crate::processor::operand::Operand;

/// Build the 2A03 dispatch table.
///
/// One line per documented opcode, grouped by operation; every other byte
/// stays `None` and surfaces as an illegal-opcode halt at runtime.
#[must_use]
pub const fn instruction_table<B: Bus>() -> InstructionTable<B> {
    let mut t: [Option<Instruction<B>>; 256] = [None; 256];

    // Loads
    t[0xA9] = Some(Instruction { mnemonic: "LDA", mode: Immediate, execute: lda });
    t[0xA5] = Some(Instruction { mnemonic: "LDA", mode: ZeroPage, execute: lda });
    t[0xB5] = Some(Instruction { mnemonic: "LDA", mode: ZeroPageX, execute: lda });
    t[0xAD] = Some(Instruction { mnemonic: "LDA", mode: Absolute, execute: lda });
    t[0xBD] = Some(Instruction { mnemonic: "LDA", mode: AbsoluteX, execute: lda });
    t[0xB9] = Some(Instruction { mnemonic: "LDA", mode: AbsoluteY, execute: lda });
    t[0xA1] = Some(Instruction { mnemonic: "LDA", mode: IndirectX, execute: lda });
    t[0xB1] = Some(Instruction { mnemonic: "LDA", mode: IndirectY, execute: lda });
    t[0xA2] = Some(Instruction { mnemonic: "LDX", mode: Immediate, execute: ldx });
    t[0xA6] = Some(Instruction { mnemonic: "LDX", mode: ZeroPage, execute: ldx });
    t[0xB6] = Some(Instruction { mnemonic: "LDX", mode: ZeroPageY, execute: ldx });
    t[0xAE] = Some(Instruction { mnemonic: "LDX", mode: Absolute, execute: ldx });
    t[0xBE] = Some(Instruction { mnemonic: "LDX", mode: AbsoluteY, execute: ldx });
    t[0xA0] = Some(Instruction { mnemonic: "LDY", mode: Immediate, execute: ldy });
    t[0xA4] = Some(Instruction { mnemonic: "LDY", mode: ZeroPage, execute: ldy });
    t[0xB4] = Some(Instruction { mnemonic: "LDY", mode: ZeroPageX, execute: ldy });
    t[0xAC] = Some(Instruction { mnemonic: "LDY", mode: Absolute, execute: ldy });
    t[0xBC] = Some(Instruction { mnemonic: "LDY", mode: AbsoluteX, execute: ldy });

    // Stores
    t[0x85] = Some(Instruction { mnemonic: "STA", mode: ZeroPage, execute: sta });
    t[0x95] = Some(Instruction { mnemonic: "STA", mode: ZeroPageX, execute: sta });
    t[0x8D] = Some(Instruction { mnemonic: "STA", mode: Absolute, execute: sta });
    t[0x9D] = Some(Instruction { mnemonic: "STA", mode: AbsoluteX, execute: sta });
    t[0x99] = Some(Instruction { mnemonic: "STA", mode: AbsoluteY, execute: sta });
    t[0x81] = Some(Instruction { mnemonic: "STA", mode: IndirectX, execute: sta });
    t[0x91] = Some(Instruction { mnemonic: "STA", mode: IndirectY, execute: sta });
    t[0x86] = Some(Instruction { mnemonic: "STX", mode: ZeroPage, execute: stx });
    t[0x96] = Some(Instruction { mnemonic: "STX", mode: ZeroPageY, execute: stx });
    t[0x8E] = Some(Instruction { mnemonic: "STX", mode: Absolute, execute: stx });
    t[0x84] = Some(Instruction { mnemonic: "STY", mode: ZeroPage, execute: sty });
    t[0x94] = Some(Instruction { mnemonic: "STY", mode: ZeroPageX, execute: sty });
    t[0x8C] = Some(Instruction { mnemonic: "STY", mode: Absolute, execute: sty });

    // Transfers
    t[0xAA] = Some(Instruction { mnemonic: "TAX", mode: Implied, execute: tax });
    t[0xA8] = Some(Instruction { mnemonic: "TAY", mode: Implied, execute: tay });
    t[0xBA] = Some(Instruction { mnemonic: "TSX", mode: Implied, execute: tsx });
    t[0x8A] = Some(Instruction { mnemonic: "TXA", mode: Implied, execute: txa });
    t[0x9A] = Some(Instruction { mnemonic: "TXS", mode: Implied, execute: txs });
    t[0x98] = Some(Instruction { mnemonic: "TYA", mode: Implied, execute: tya });

    // Stack
    t[0x48] = Some(Instruction { mnemonic: "PHA", mode: Implied, execute: pha });
    t[0x08] = Some(Instruction { mnemonic: "PHP", mode: Implied, execute: php });
    t[0x68] = Some(Instruction { mnemonic: "PLA", mode: Implied, execute: pla });
    t[0x28] = Some(Instruction { mnemonic: "PLP", mode: Implied, execute: plp });

    // Arithmetic
    t[0x69] = Some(Instruction { mnemonic: "ADC", mode: Immediate, execute: adc });
    t[0x65] = Some(Instruction { mnemonic: "ADC", mode: ZeroPage, execute: adc });
    t[0x75] = Some(Instruction { mnemonic: "ADC", mode: ZeroPageX, execute: adc });
    t[0x6D] = Some(Instruction { mnemonic: "ADC", mode: Absolute, execute: adc });
    t[0x7D] = Some(Instruction { mnemonic: "ADC", mode: AbsoluteX, execute: adc });
    t[0x79] = Some(Instruction { mnemonic: "ADC", mode: AbsoluteY, execute: adc });
    t[0x61] = Some(Instruction { mnemonic: "ADC", mode: IndirectX, execute: adc });
    t[0x71] = Some(Instruction { mnemonic: "ADC", mode: IndirectY, execute: adc });
    t[0xE9] = Some(Instruction { mnemonic: "SBC", mode: Immediate, execute: sbc });
    t[0xE5] = Some(Instruction { mnemonic: "SBC", mode: ZeroPage, execute: sbc });
    t[0xF5] = Some(Instruction { mnemonic: "SBC", mode: ZeroPageX, execute: sbc });
    t[0xED] = Some(Instruction { mnemonic: "SBC", mode: Absolute, execute: sbc });
    t[0xFD] = Some(Instruction { mnemonic: "SBC", mode: AbsoluteX, execute: sbc });
    t[0xF9] = Some(Instruction { mnemonic: "SBC", mode: AbsoluteY, execute: sbc });
    t[0xE1] = Some(Instruction { mnemonic: "SBC", mode: IndirectX, execute: sbc });
    t[0xF1] = Some(Instruction { mnemonic: "SBC", mode: IndirectY, execute: sbc });

    // Compares
    t[0xC9] = Some(Instruction { mnemonic: "CMP", mode: Immediate, execute: cmp });
    t[0xC5] = Some(Instruction { mnemonic: "CMP", mode: ZeroPage, execute: cmp });
    t[0xD5] = Some(Instruction { mnemonic: "CMP", mode: ZeroPageX, execute: cmp });
    t[0xCD] = Some(Instruction { mnemonic: "CMP", mode: Absolute, execute: cmp });
    t[0xDD] = Some(Instruction { mnemonic: "CMP", mode: AbsoluteX, execute: cmp });
    t[0xD9] = Some(Instruction { mnemonic: "CMP", mode: AbsoluteY, execute: cmp });
    t[0xC1] = Some(Instruction { mnemonic: "CMP", mode: IndirectX, execute: cmp });
    t[0xD1] = Some(Instruction { mnemonic: "CMP", mode: IndirectY, execute: cmp });
    t[0xE0] = Some(Instruction { mnemonic: "CPX", mode: Immediate, execute: cpx });
    t[0xE4] = Some(Instruction { mnemonic: "CPX", mode: ZeroPage, execute: cpx });
    t[0xEC] = Some(Instruction { mnemonic: "CPX", mode: Absolute, execute: cpx });
    t[0xC0] = Some(Instruction { mnemonic: "CPY", mode: Immediate, execute: cpy });
    t[0xC4] = Some(Instruction { mnemonic: "CPY", mode: ZeroPage, execute: cpy });
    t[0xCC] = Some(Instruction { mnemonic: "CPY", mode: Absolute, execute: cpy });

    // Logical
    t[0x29] = Some(Instruction { mnemonic: "AND", mode: Immediate, execute: and });
    t[0x25] = Some(Instruction { mnemonic: "AND", mode: ZeroPage, execute: and });
    t[0x35] = Some(Instruction { mnemonic: "AND", mode: ZeroPageX, execute: and });
    t[0x2D] = Some(Instruction { mnemonic: "AND", mode: Absolute, execute: and });
    t[0x3D] = Some(Instruction { mnemonic: "AND", mode: AbsoluteX, execute: and });
    t[0x39] = Some(Instruction { mnemonic: "AND", mode: AbsoluteY, execute: and });
    t[0x21] = Some(Instruction { mnemonic: "AND", mode: IndirectX, execute: and });
    t[0x31] = Some(Instruction { mnemonic: "AND", mode: IndirectY, execute: and });
    t[0x09] = Some(Instruction { mnemonic: "ORA", mode: Immediate, execute: ora });
    t[0x05] = Some(Instruction { mnemonic: "ORA", mode: ZeroPage, execute: ora });
    t[0x15] = Some(Instruction { mnemonic: "ORA", mode: ZeroPageX, execute: ora });
    t[0x0D] = Some(Instruction { mnemonic: "ORA", mode: Absolute, execute: ora });
    t[0x1D] = Some(Instruction { mnemonic: "ORA", mode: AbsoluteX, execute: ora });
    t[0x19] = Some(Instruction { mnemonic: "ORA", mode: AbsoluteY, execute: ora });
    t[0x01] = Some(Instruction { mnemonic: "ORA", mode: IndirectX, execute: ora });
    t[0x11] = Some(Instruction { mnemonic: "ORA", mode: IndirectY, execute: ora });
    t[0x49] = Some(Instruction { mnemonic: "EOR", mode: Immediate, execute: eor });
    t[0x45] = Some(Instruction { mnemonic: "EOR", mode: ZeroPage, execute: eor });
    t[0x55] = Some(Instruction { mnemonic: "EOR", mode: ZeroPageX, execute: eor });
    t[0x4D] = Some(Instruction { mnemonic: "EOR", mode: Absolute, execute: eor });
    t[0x5D] = Some(Instruction { mnemonic: "EOR", mode: AbsoluteX, execute: eor });
    t[0x59] = Some(Instruction { mnemonic: "EOR", mode: AbsoluteY, execute: eor });
    t[0x41] = Some(Instruction { mnemonic: "EOR", mode: IndirectX, execute: eor });
    t[0x51] = Some(Instruction { mnemonic: "EOR", mode: IndirectY, execute: eor });
    t[0x24] = Some(Instruction { mnemonic: "BIT", mode: ZeroPage, execute: bit });
    t[0x2C] = Some(Instruction { mnemonic: "BIT", mode: Absolute, execute: bit });

    // Shifts / rotates
    t[0x0A] = Some(Instruction { mnemonic: "ASL", mode: Accumulator, execute: asl_a });
    t[0x06] = Some(Instruction { mnemonic: "ASL", mode: ZeroPage, execute: asl });
    t[0x16] = Some(Instruction { mnemonic: "ASL", mode: ZeroPageX, execute: asl });
    t[0x0E] = Some(Instruction { mnemonic: "ASL", mode: Absolute, execute: asl });
    t[0x1E] = Some(Instruction { mnemonic: "ASL", mode: AbsoluteX, execute: asl });
    t[0x4A] = Some(Instruction { mnemonic: "LSR", mode: Accumulator, execute: lsr_a });
    t[0x46] = Some(Instruction { mnemonic: "LSR", mode: ZeroPage, execute: lsr });
    t[0x56] = Some(Instruction { mnemonic: "LSR", mode: ZeroPageX, execute: lsr });
    t[0x4E] = Some(Instruction { mnemonic: "LSR", mode: Absolute, execute: lsr });
    t[0x5E] = Some(Instruction { mnemonic: "LSR", mode: AbsoluteX, execute: lsr });
    t[0x2A] = Some(Instruction { mnemonic: "ROL", mode: Accumulator, execute: rol_a });
    t[0x26] = Some(Instruction { mnemonic: "ROL", mode: ZeroPage, execute: rol });
    t[0x36] = Some(Instruction { mnemonic: "ROL", mode: ZeroPageX, execute: rol });
    t[0x2E] = Some(Instruction { mnemonic: "ROL", mode: Absolute, execute: rol });
    t[0x3E] = Some(Instruction { mnemonic: "ROL", mode: AbsoluteX, execute: rol });
    t[0x6A] = Some(Instruction { mnemonic: "ROR", mode: Accumulator, execute: ror_a });
    t[0x66] = Some(Instruction { mnemonic: "ROR", mode: ZeroPage, execute: ror });
    t[0x76] = Some(Instruction { mnemonic: "ROR", mode: ZeroPageX, execute: ror });
    t[0x6E] = Some(Instruction { mnemonic: "ROR", mode: Absolute, execute: ror });
    t[0x7E] = Some(Instruction { mnemonic: "ROR", mode: AbsoluteX, execute: ror });

    // Increments / decrements
    t[0xE6] = Some(Instruction { mnemonic: "INC", mode: ZeroPage, execute: inc });
    t[0xF6] = Some(Instruction { mnemonic: "INC", mode: ZeroPageX, execute: inc });
    t[0xEE] = Some(Instruction { mnemonic: "INC", mode: Absolute, execute: inc });
    t[0xFE] = Some(Instruction { mnemonic: "INC", mode: AbsoluteX, execute: inc });
    t[0xC6] = Some(Instruction { mnemonic: "DEC", mode: ZeroPage, execute: dec });
    t[0xD6] = Some(Instruction { mnemonic: "DEC", mode: ZeroPageX, execute: dec });
    t[0xCE] = Some(Instruction { mnemonic: "DEC", mode: Absolute, execute: dec });
    t[0xDE] = Some(Instruction { mnemonic: "DEC", mode: AbsoluteX, execute: dec });
    t[0xE8] = Some(Instruction { mnemonic: "INX", mode: Implied, execute: inx });
    t[0xC8] = Some(Instruction { mnemonic: "INY", mode: Implied, execute: iny });
    t[0xCA] = Some(Instruction { mnemonic: "DEX", mode: Implied, execute: dex });
    t[0x88] = Some(Instruction { mnemonic: "DEY", mode: Implied, execute: dey });

    // Branches
    t[0x90] = Some(Instruction { mnemonic: "BCC", mode: Relative, execute: bcc });
    t[0xB0] = Some(Instruction { mnemonic: "BCS", mode: Relative, execute: bcs });
    t[0xF0] = Some(Instruction { mnemonic: "BEQ", mode: Relative, execute: beq });
    t[0xD0] = Some(Instruction { mnemonic: "BNE", mode: Relative, execute: bne });
    t[0x30] = Some(Instruction { mnemonic: "BMI", mode: Relative, execute: bmi });
    t[0x10] = Some(Instruction { mnemonic: "BPL", mode: Relative, execute: bpl });
    t[0x50] = Some(Instruction { mnemonic: "BVC", mode: Relative, execute: bvc });
    t[0x70] = Some(Instruction { mnemonic: "BVS", mode: Relative, execute: bvs });

    // Jumps
    t[0x4C] = Some(Instruction { mnemonic: "JMP", mode: Absolute, execute: jmp });
    t[0x6C] = Some(Instruction { mnemonic: "JMP", mode: Indirect, execute: jmp });
    t[0x20] = Some(Instruction { mnemonic: "JSR", mode: Absolute, execute: jsr });
    t[0x60] = Some(Instruction { mnemonic: "RTS", mode: Implied, execute: rts });

    // Flag controls
    t[0x18] = Some(Instruction { mnemonic: "CLC", mode: Implied, execute: clc });
    t[0x38] = Some(Instruction { mnemonic: "SEC", mode: Implied, execute: sec });
    t[0xD8] = Some(Instruction { mnemonic: "CLD", mode: Implied, execute: cld });
    t[0xF8] = Some(Instruction { mnemonic: "SED", mode: Implied, execute: sed });
    t[0x58] = Some(Instruction { mnemonic: "CLI", mode: Implied, execute: cli });
    t[0x78] = Some(Instruction { mnemonic: "SEI", mode: Implied, execute: sei });
    t[0xB8] = Some(Instruction { mnemonic: "CLV", mode: Implied, execute: clv });

    // Interrupt return and halt
    t[0x40] = Some(Instruction { mnemonic: "RTI", mode: Implied, execute: rti });
    t[0x00] = Some(Instruction { mnemonic: "BRK", mode: Implied, execute: brk });
    t[0xEA] = Some(Instruction { mnemonic: "NOP", mode: Implied, execute: nop });

    InstructionTable::new(t)
}

pub fn lda<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B, operand: Operand) {
    cpu.a = operand.read(bus);
    cpu.p.set_zn(cpu.a);
}

pub fn ldx<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B, operand: Operand) {
    cpu.x = operand.read(bus);
    cpu.p.set_zn(cpu.x);
}

pub fn ldy<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B, operand: Operand) {
    cpu.y = operand.read(bus);
    cpu.p.set_zn(cpu.y);
}

pub fn sta<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B, operand: Operand) {
    bus.write(operand.address(), cpu.a);
}

pub fn stx<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B, operand: Operand) {
    bus.write(operand.address(), cpu.x);
}

pub fn sty<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B, operand: Operand) {
    bus.write(operand.address(), cpu.y);
}

pub fn tax<B: Bus>(cpu: &mut Cpu<B>, _bus: &mut B, _operand: Operand) {
    cpu.x = cpu.a;
    cpu.p.set_zn(cpu.x);
}

pub fn tay<B: Bus>(cpu: &mut Cpu<B>, _bus: &mut B, _operand: Operand) {
    cpu.y = cpu.a;
    cpu.p.set_zn(cpu.y);
}

pub fn tsx<B: Bus>(cpu: &mut Cpu<B>, _bus: &mut B, _operand: Operand) {
    cpu.x = cpu.sp;
    cpu.p.set_zn(cpu.x);
}

pub fn txa<B: Bus>(cpu: &mut Cpu<B>, _bus: &mut B, _operand: Operand) {
    cpu.a = cpu.x;
    cpu.p.set_zn(cpu.a);
}

// TXS is the one transfer that leaves the flags alone.
pub fn txs<B: Bus>(cpu: &mut Cpu<B>, _bus: &mut B, _operand: Operand) {
    cpu.sp = cpu.x;
}

pub fn tya<B: Bus>(cpu: &mut Cpu<B>, _bus: &mut B, _operand: Operand) {
    cpu.a = cpu.y;
    cpu.p.set_zn(cpu.a);
}

pub fn pha<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B, _operand: Operand) {
    cpu.push(bus, cpu.a);
}

pub fn php<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B, _operand: Operand) {
    let bits = cpu.p.bits();
    cpu.push(bus, bits);
}

pub fn pla<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B, _operand: Operand) {
    let value = cpu.pop(bus);
    cpu.a = value;
    cpu.p.set_zn(value);
}

// PLP restores P wholesale.
pub fn plp<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B, _operand: Operand) {
    cpu.p = Flags::from(cpu.pop(bus));
}

pub fn adc<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B, operand: Operand) {
    let value = operand.read(bus);
    add_with_carry(cpu, value);
}

/// Subtraction is addition of the one's complement: the carry doubles as the
/// inverted borrow and the overflow rule applies to the inverted operand.
pub fn sbc<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B, operand: Operand) {
    let value = operand.read(bus);
    add_with_carry(cpu, value ^ 0xFF);
}

fn add_with_carry<B: Bus>(cpu: &mut Cpu<B>, value: u8) {
    let sum = u16::from(cpu.a) + u16::from(value) + u16::from(cpu.p.bit(Flags::Carry));
    let result = (sum & 0x00FF) as u8;
    // overflow when both operands agree in sign and the result does not
    cpu.p
        .set_overflow((cpu.a ^ result) & (value ^ result) & 0x80 != 0);
    cpu.p.set_czn(sum);
    cpu.a = result;
}

pub fn cmp<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B, operand: Operand) {
    let value = operand.read(bus);
    let register = cpu.a;
    compare(cpu, register, value);
}

pub fn cpx<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B, operand: Operand) {
    let value = operand.read(bus);
    let register = cpu.x;
    compare(cpu, register, value);
}

pub fn cpy<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B, operand: Operand) {
    let value = operand.read(bus);
    let register = cpu.y;
    compare(cpu, register, value);
}

fn compare<B: Bus>(cpu: &mut Cpu<B>, register: u8, value: u8) {
    cpu.p.set_carry(register >= value);
    cpu.p.set_zn(register.wrapping_sub(value));
}

pub fn and<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B, operand: Operand) {
    cpu.a &= operand.read(bus);
    cpu.p.set_zn(cpu.a);
}

pub fn ora<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B, operand: Operand) {
    cpu.a |= operand.read(bus);
    cpu.p.set_zn(cpu.a);
}

pub fn eor<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B, operand: Operand) {
    cpu.a ^= operand.read(bus);
    cpu.p.set_zn(cpu.a);
}

pub fn bit<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B, operand: Operand) {
    let value = operand.read(bus);
    cpu.p.set_zero(cpu.a & value == 0);
    cpu.p.set_overflow(value & 0x40 != 0);
    cpu.p.set_signed(value & 0x80 != 0);
}

pub fn asl<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B, operand: Operand) {
    let addr = operand.address();
    let value = bus.read(addr);
    let result = shift_left(cpu, value);
    bus.write(addr, result);
}

pub fn asl_a<B: Bus>(cpu: &mut Cpu<B>, _bus: &mut B, _operand: Operand) {
    let value = cpu.a;
    cpu.a = shift_left(cpu, value);
}

pub fn lsr<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B, operand: Operand) {
    let addr = operand.address();
    let value = bus.read(addr);
    let result = shift_right(cpu, value);
    bus.write(addr, result);
}

pub fn lsr_a<B: Bus>(cpu: &mut Cpu<B>, _bus: &mut B, _operand: Operand) {
    let value = cpu.a;
    cpu.a = shift_right(cpu, value);
}

pub fn rol<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B, operand: Operand) {
    let addr = operand.address();
    let value = bus.read(addr);
    let result = rotate_left(cpu, value);
    bus.write(addr, result);
}

pub fn rol_a<B: Bus>(cpu: &mut Cpu<B>, _bus: &mut B, _operand: Operand) {
    let value = cpu.a;
    cpu.a = rotate_left(cpu, value);
}

pub fn ror<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B, operand: Operand) {
    let addr = operand.address();
    let value = bus.read(addr);
    let result = rotate_right(cpu, value);
    bus.write(addr, result);
}

pub fn ror_a<B: Bus>(cpu: &mut Cpu<B>, _bus: &mut B, _operand: Operand) {
    let value = cpu.a;
    cpu.a = rotate_right(cpu, value);
}

fn shift_left<B: Bus>(cpu: &mut Cpu<B>, value: u8) -> u8 {
    cpu.p.set_carry(value & 0x80 != 0);
    let result = value << 1;
    cpu.p.set_zn(result);
    result
}

fn shift_right<B: Bus>(cpu: &mut Cpu<B>, value: u8) -> u8 {
    cpu.p.set_carry(value & 0x01 != 0);
    let result = value >> 1;
    cpu.p.set_zn(result);
    result
}

fn rotate_left<B: Bus>(cpu: &mut Cpu<B>, value: u8) -> u8 {
    let carry_in = cpu.p.bit(Flags::Carry);
    cpu.p.set_carry(value & 0x80 != 0);
    let result = value << 1 | carry_in;
    cpu.p.set_zn(result);
    result
}

fn rotate_right<B: Bus>(cpu: &mut Cpu<B>, value: u8) -> u8 {
    let carry_in = cpu.p.bit(Flags::Carry) << 7;
    cpu.p.set_carry(value & 0x01 != 0);
    let result = carry_in | value >> 1;
    cpu.p.set_zn(result);
    result
}

pub fn inc<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B, operand: Operand) {
    let addr = operand.address();
    let value = bus.read(addr).wrapping_add(1);
    bus.write(addr, value);
    cpu.p.set_zn(value);
}

pub fn dec<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B, operand: Operand) {
    let addr = operand.address();
    let value = bus.read(addr).wrapping_sub(1);
    bus.write(addr, value);
    cpu.p.set_zn(value);
}

pub fn inx<B: Bus>(cpu: &mut Cpu<B>, _bus: &mut B, _operand: Operand) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.p.set_zn(cpu.x);
}

pub fn iny<B: Bus>(cpu: &mut Cpu<B>, _bus: &mut B, _operand: Operand) {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.p.set_zn(cpu.y);
}

pub fn dex<B: Bus>(cpu: &mut Cpu<B>, _bus: &mut B, _operand: Operand) {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.p.set_zn(cpu.x);
}

pub fn dey<B: Bus>(cpu: &mut Cpu<B>, _bus: &mut B, _operand: Operand) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.p.set_zn(cpu.y);
}

pub fn bcc<B: Bus>(cpu: &mut Cpu<B>, _bus: &mut B, operand: Operand) {
    if !cpu.p.contains(Flags::Carry) {
        cpu.pc = operand.address();
    }
}

pub fn bcs<B: Bus>(cpu: &mut Cpu<B>, _bus: &mut B, operand: Operand) {
    if cpu.p.contains(Flags::Carry) {
        cpu.pc = operand.address();
    }
}

pub fn beq<B: Bus>(cpu: &mut Cpu<B>, _bus: &mut B, operand: Operand) {
    if cpu.p.contains(Flags::Zero) {
        cpu.pc = operand.address();
    }
}

pub fn bne<B: Bus>(cpu: &mut Cpu<B>, _bus: &mut B, operand: Operand) {
    if !cpu.p.contains(Flags::Zero) {
        cpu.pc = operand.address();
    }
}

pub fn bmi<B: Bus>(cpu: &mut Cpu<B>, _bus: &mut B, operand: Operand) {
    if cpu.p.contains(Flags::Sign) {
        cpu.pc = operand.address();
    }
}

pub fn bpl<B: Bus>(cpu: &mut Cpu<B>, _bus: &mut B, operand: Operand) {
    if !cpu.p.contains(Flags::Sign) {
        cpu.pc = operand.address();
    }
}

pub fn bvc<B: Bus>(cpu: &mut Cpu<B>, _bus: &mut B, operand: Operand) {
    if !cpu.p.contains(Flags::Overflow) {
        cpu.pc = operand.address();
    }
}

pub fn bvs<B: Bus>(cpu: &mut Cpu<B>, _bus: &mut B, operand: Operand) {
    if cpu.p.contains(Flags::Overflow) {
        cpu.pc = operand.address();
    }
}

pub fn jmp<B: Bus>(cpu: &mut Cpu<B>, _bus: &mut B, operand: Operand) {
    cpu.pc = operand.address();
}

pub fn jsr<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B, operand: Operand) {
    // PC sits past the operand bytes here; the 6502 pushes the address of
    // the last byte of the JSR instruction, high byte first.
    let return_addr = cpu.pc.wrapping_sub(1);
    cpu.push(bus, (return_addr >> 8) as u8);
    cpu.push(bus, return_addr as u8);
    cpu.pc = operand.address();
}

pub fn rts<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B, _operand: Operand) {
    let lo = cpu.pop(bus);
    let hi = cpu.pop(bus);
    cpu.pc = (u16::from(lo) | u16::from(hi) << 8).wrapping_add(1);
}

pub fn rti<B: Bus>(cpu: &mut Cpu<B>, bus: &mut B, _operand: Operand) {
    cpu.p = Flags::from(cpu.pop(bus));
    let lo = cpu.pop(bus);
    let hi = cpu.pop(bus);
    cpu.pc = u16::from(lo) | u16::from(hi) << 8;
}

pub fn clc<B: Bus>(cpu: &mut Cpu<B>, _bus: &mut B, _operand: Operand) {
    cpu.p.set_carry(false);
}

pub fn sec<B: Bus>(cpu: &mut Cpu<B>, _bus: &mut B, _operand: Operand) {
    cpu.p.set_carry(true);
}

pub fn cld<B: Bus>(cpu: &mut Cpu<B>, _bus: &mut B, _operand: Operand) {
    cpu.p.set_decimal_mode(false);
}

pub fn sed<B: Bus>(cpu: &mut Cpu<B>, _bus: &mut B, _operand: Operand) {
    cpu.p.set_decimal_mode(true);
}

pub fn cli<B: Bus>(cpu: &mut Cpu<B>, _bus: &mut B, _operand: Operand) {
    cpu.p.set_interrupt_disabled(false);
}

pub fn sei<B: Bus>(cpu: &mut Cpu<B>, _bus: &mut B, _operand: Operand) {
    cpu.p.set_interrupt_disabled(true);
}

pub fn clv<B: Bus>(cpu: &mut Cpu<B>, _bus: &mut B, _operand: Operand) {
    cpu.p.set_overflow(false);
}

/// BRK is the program's halt signal: it touches no state of its own and
/// [`Cpu::step`] reports it through its return value. Interrupt entry is not
/// modeled.
pub fn brk<B: Bus>(_cpu: &mut Cpu<B>, _bus: &mut B, _operand: Operand) {}

pub fn nop<B: Bus>(_cpu: &mut Cpu<B>, _bus: &mut B, _operand: Operand) {}
