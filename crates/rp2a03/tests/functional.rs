//! Functional programs driven end to end through the public API.

use rp2a03::{Bus, Cpu, RunConfig, RunOutcome, RunPredicate, SimpleBus};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Sum the integers 1..=10 into $0000 with an ADC/CPX loop.
#[test]
fn sum_loop_runs_to_brk() {
    init_logger();

    let program = [
        0xA9, 0x00, // LDA #0
        0xA2, 0x00, // LDX #0
        0x18, // CLC
        0xE8, // loop: INX
        0x8E, 0x10, 0x00, // STX $0010
        0x6D, 0x10, 0x00, // ADC $0010
        0xE0, 0x0A, // CPX #10
        0xD0, 0xF5, // BNE loop
        0x85, 0x00, // STA $00
        0x00, // BRK
    ];

    let mut bus = SimpleBus::default();
    let mut cpu = Cpu::with_program(&mut bus, 0x8000, &program, 0x8000);

    let summary = cpu.run_until(
        &mut bus,
        RunConfig {
            instruction_limit: Some(10_000),
            ..RunConfig::default()
        },
    );

    assert!(summary.hit_brk());
    assert_eq!(bus.read(0x0000), 55);
}

#[test]
fn predicate_can_watch_memory_between_instructions() {
    init_logger();

    // Endless increment loop: INC $0020; JMP back
    let program = [0xE6, 0x20, 0x4C, 0x00, 0x80];

    let mut bus = SimpleBus::default();
    let mut cpu = Cpu::with_program(&mut bus, 0x8000, &program, 0x8000);

    let mut counter_reached_five =
        |_cpu: &Cpu<SimpleBus>, bus: &mut SimpleBus| bus.read(0x0020) >= 5;

    let summary = cpu.run_until(
        &mut bus,
        RunConfig {
            instruction_limit: Some(1_000),
            predicate: Some(RunPredicate::new(&mut counter_reached_five)),
        },
    );

    assert!(summary.hit_predicate());
    assert_eq!(bus.read(0x0020), 5);
}

#[test]
fn undefined_opcode_reports_its_location() {
    init_logger();

    // NOP; NOP; $02 has no table entry
    let program = [0xEA, 0xEA, 0x02];

    let mut bus = SimpleBus::default();
    let mut cpu = Cpu::with_program(&mut bus, 0x8000, &program, 0x8000);

    let summary = cpu.run_until(&mut bus, RunConfig::default());

    assert_eq!(
        summary.outcome,
        RunOutcome::IllegalOpcode {
            opcode: 0x02,
            pc: 0x8002
        }
    );
    assert_eq!(summary.instructions_executed, 2);
}
