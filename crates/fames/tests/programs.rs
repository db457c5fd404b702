//! End-to-end programs run on a full system: blank cartridge, NES bus, CPU.
//!
//! Each test writes its program through the bus at $8000, points the reset
//! vector there, and runs until BRK.

use fames::{Cartridge, NesBus};
use rp2a03::{Bus, Cpu, Flags, RunConfig};

fn run_program(program: &[u8]) -> (Cpu<NesBus>, NesBus) {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut bus = NesBus::new(Cartridge::empty());
    let mut cpu = Cpu::with_program(&mut bus, 0x8000, program, 0x8000);

    let summary = cpu.run_until(
        &mut bus,
        RunConfig {
            instruction_limit: Some(10_000),
            ..RunConfig::default()
        },
    );
    assert!(
        summary.hit_brk(),
        "program did not halt on BRK: {:?}",
        summary.outcome
    );

    (cpu, bus)
}

#[test]
fn multiply_ten_by_three() {
    let (_cpu, mut bus) = run_program(&[
        0xA2, 0x0A, // LDX #10
        0x8E, 0x00, 0x00, // STX $0000
        0xA2, 0x03, // LDX #3
        0x8E, 0x01, 0x00, // STX $0001
        0xAC, 0x00, 0x00, // LDY $0000
        0xA9, 0x00, // LDA #0
        0x18, // CLC
        0x6D, 0x01, 0x00, // ADC $0001
        0x88, // DEY
        0xD0, 0xFA, // BNE back to the ADC
        0x8D, 0x02, 0x00, // STA $0002
        0xEA, 0xEA, 0xEA, // NOP NOP NOP
        0x00, // BRK
    ]);

    assert_eq!(bus.read(0x0002), 0x1E);
}

#[test]
fn adc_immediate_stores_sum_and_clears_flags() {
    let (cpu, mut bus) = run_program(&[
        0xA9, 0x0A, // LDA #10
        0x69, 0x03, // ADC #3
        0x8D, 0x00, 0x00, // STA $0000
        0x00, // BRK
    ]);

    assert_eq!(bus.read(0x0000), 0x0D);
    assert!(!cpu.p.contains(Flags::Carry));
    assert!(!cpu.p.contains(Flags::Zero));
    assert!(!cpu.p.contains(Flags::Overflow));
    assert!(!cpu.p.contains(Flags::Sign));
}

#[test]
fn cmp_sets_carry_for_greater_accumulator() {
    let (cpu, _bus) = run_program(&[
        0xA9, 0x28, // LDA #$28
        0x8D, 0x00, 0x00, // STA $0000
        0xA9, 0x2A, // LDA #$2A
        0xCD, 0x00, 0x00, // CMP $0000
        0x00, // BRK
    ]);

    assert!(cpu.p.contains(Flags::Carry));
    assert!(!cpu.p.contains(Flags::Zero));
    assert!(!cpu.p.contains(Flags::Sign));
}

#[test]
fn bne_taken_skips_the_overwrite() {
    let (cpu, mut bus) = run_program(&[
        0xA9, 0x2A, // LDA #$2A
        0x8D, 0x00, 0x00, // STA $0000
        0xD0, 0x06, // BNE +6 (over the overwrite)
        0xA9, 0x00, // LDA #0 (skipped)
        0x8D, 0x00, 0x00, // STA $0000 (skipped)
        0xEA, 0xEA, 0xEA, 0xEA, 0xEA, 0xEA, 0xEA, // NOP sled
        0x00, // BRK
    ]);

    assert_eq!(bus.read(0x0000), 0x2A);
    assert!(!cpu.p.contains(Flags::Zero));
}

#[test]
fn rol_accumulator_shifts_through_carry() {
    let (cpu, mut bus) = run_program(&[
        0xA9, 0xFA, // LDA #$FA
        0x2A, // ROL A
        0x85, 0x00, // STA $00
        0x00, // BRK
    ]);

    assert_eq!(bus.read(0x0000), 0xF4);
    assert!(cpu.p.contains(Flags::Carry));
    assert!(cpu.p.contains(Flags::Sign));
    assert!(!cpu.p.contains(Flags::Zero));
}

#[test]
fn stack_push_and_pull_through_page_one() {
    let (_cpu, mut bus) = run_program(&[
        0xA9, 0x0A, // LDA #$0A
        0x48, // PHA
        0xA9, 0x2A, // LDA #$2A
        0x48, // PHA
        0x68, // PLA
        0x68, // PLA
        0x85, 0x00, // STA $00
        0x00, // BRK
    ]);

    assert_eq!(bus.read(0x01FD), 0x0A);
    assert_eq!(bus.read(0x01FC), 0x2A);
    assert_eq!(bus.read(0x0000), 0x0A);
}

#[test]
fn execution_runs_off_the_program_into_blank_brk_bytes() {
    // No explicit BRK: the blank cartridge's zero fill terminates the run.
    let (cpu, _bus) = run_program(&[0xEA, 0xEA, 0xEA]);

    assert_eq!(cpu.last_opcode, 0x00);
    assert_eq!(cpu.pc, 0x8004);
}

#[test]
fn program_touching_peripheral_windows_keeps_running() {
    // Writes to the PPU/APU stubs are discarded; reads come back zero.
    let (cpu, mut bus) = run_program(&[
        0xA9, 0x55, // LDA #$55
        0x8D, 0x00, 0x20, // STA $2000 (PPU stub, dropped)
        0x8D, 0x15, 0x40, // STA $4015 (APU stub, dropped)
        0xAD, 0x02, 0x20, // LDA $2002 (PPU stub, reads 0)
        0x85, 0x10, // STA $10
        0x00, // BRK
    ]);

    assert_eq!(bus.read(0x0010), 0x00);
    assert!(cpu.p.contains(Flags::Zero));
}
