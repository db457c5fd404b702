use std::env;
use std::process::ExitCode;

use fames::{Cartridge, NesBus};
use rp2a03::{Cpu, RunConfig, RunOutcome};

fn main() -> ExitCode {
    env_logger::init();

    let Some(path) = env::args().nth(1) else {
        eprintln!("usage: fames <rom.nes>");
        return ExitCode::FAILURE;
    };

    let cartridge = match Cartridge::from_file(&path) {
        Ok(cartridge) => cartridge,
        Err(err) => {
            log::error!("{path}: {err}");
            return ExitCode::FAILURE;
        }
    };
    log::info!(
        "{path}: {:?}, {} byte PRG, {} byte CHR",
        cartridge.header().version,
        cartridge.header().prg_size,
        cartridge.header().chr_size
    );

    let mut bus = NesBus::new(cartridge);
    let mut cpu = Cpu::new();
    cpu.reset(&mut bus);

    let summary = cpu.run_until(&mut bus, RunConfig::default());
    match summary.outcome {
        RunOutcome::HitBrk => {
            log::info!(
                "halted on BRK after {} instructions",
                summary.instructions_executed
            );
            ExitCode::SUCCESS
        }
        RunOutcome::IllegalOpcode { opcode, pc } => {
            log::error!("illegal opcode ${opcode:02X} at ${pc:04X}; state: {cpu:?}");
            ExitCode::FAILURE
        }
        // No limit or predicate is configured, so the run can only end on
        // BRK or an illegal opcode.
        outcome => {
            log::error!("run stopped unexpectedly: {outcome:?}");
            ExitCode::FAILURE
        }
    }
}
