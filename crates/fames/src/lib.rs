//! NES system emulation over the [`rp2a03`] CPU core.
//!
//! Three pieces make a runnable system: a [`Cartridge`] parsed from an iNES
//! file (or blank, for tests), the [`NesBus`] that routes the CPU's 16-bit
//! address space across RAM, peripheral stub windows, and the cartridge, and
//! the `rp2a03` CPU driving reads and writes through that bus.
//!
//! # Quick Start
//!
//! ```
//! use fames::{Cartridge, NesBus};
//! use rp2a03::{Bus, Cpu, RunConfig};
//!
//! let mut bus = NesBus::new(Cartridge::empty());
//! // LDA #$2A; STA $0000; BRK
//! let program = [0xA9, 0x2A, 0x8D, 0x00, 0x00, 0x00];
//! let mut cpu = Cpu::with_program(&mut bus, 0x8000, &program, 0x8000);
//!
//! let summary = cpu.run_until(&mut bus, RunConfig::default());
//! assert!(summary.hit_brk());
//! assert_eq!(bus.read(0x0000), 0x2A);
//! ```

pub mod bus;
pub mod cartridge;
pub mod rom;

pub use bus::NesBus;
pub use cartridge::Cartridge;
pub use rom::{Mirroring, Rom, RomError, RomHeader, RomVersion};
