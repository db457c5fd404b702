//! The NES CPU address space.

use rp2a03::Bus;

use crate::cartridge::Cartridge;

const RAM_LEN: usize = 0x800;
const RAM_MIRROR_MASK: u16 = 0x07FF;

/// The CPU-side memory map of the NES.
///
/// Owns the 2 KiB of internal RAM and the cartridge, and routes every 16-bit
/// address to one of them or to a peripheral window:
///
/// | Range           | Owner                                            |
/// |-----------------|--------------------------------------------------|
/// | `$0000-$1FFF`   | RAM, mirrored every 2 KiB                        |
/// | `$2000-$3FFF`   | PPU registers (stubbed: reads 0, writes dropped) |
/// | `$4000-$4017`   | APU and I/O (stubbed)                            |
/// | `$4018-$401F`   | Reserved (stubbed)                               |
/// | `$4020-$FFFF`   | Cartridge                                        |
///
/// No access fails; the stub windows exist so ordinary ROM code that pokes
/// the PPU or APU keeps running.
pub struct NesBus {
    ram: [u8; RAM_LEN],
    cartridge: Cartridge,
}

impl NesBus {
    #[must_use]
    pub fn new(cartridge: Cartridge) -> Self {
        Self {
            ram: [0; RAM_LEN],
            cartridge,
        }
    }

    #[must_use]
    pub fn cartridge(&self) -> &Cartridge {
        &self.cartridge
    }
}

impl Bus for NesBus {
    fn read(&mut self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x1FFF => self.ram[usize::from(addr & RAM_MIRROR_MASK)],
            0x2000..=0x3FFF => {
                log::trace!("read from PPU register window ${addr:04X}");
                0x00
            }
            0x4000..=0x4017 => {
                log::trace!("read from APU/IO window ${addr:04X}");
                0x00
            }
            0x4018..=0x401F => {
                log::trace!("read from reserved window ${addr:04X}");
                0x00
            }
            0x4020..=0xFFFF => self.cartridge.read(addr),
        }
    }

    fn write(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=0x1FFF => self.ram[usize::from(addr & RAM_MIRROR_MASK)] = value,
            0x2000..=0x3FFF => {
                log::trace!("discarded write of ${value:02X} to PPU register window ${addr:04X}");
            }
            0x4000..=0x4017 => {
                log::trace!("discarded write of ${value:02X} to APU/IO window ${addr:04X}");
            }
            0x4018..=0x401F => {
                log::trace!("discarded write of ${value:02X} to reserved window ${addr:04X}");
            }
            0x4020..=0xFFFF => self.cartridge.write(addr, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bus() -> NesBus {
        NesBus::new(Cartridge::empty())
    }

    #[test]
    fn ram_is_mirrored_every_two_kib() {
        let mut bus = bus();

        bus.write(0x0000, 0x11);
        assert_eq!(bus.read(0x0800), 0x11);
        assert_eq!(bus.read(0x1000), 0x11);
        assert_eq!(bus.read(0x1800), 0x11);

        bus.write(0x1FFF, 0x22);
        assert_eq!(bus.read(0x07FF), 0x22);
    }

    #[test]
    fn peripheral_windows_read_zero_and_drop_writes() {
        let mut bus = bus();

        for addr in [0x2000, 0x3FFF, 0x4000, 0x4017, 0x4018, 0x401F] {
            bus.write(addr, 0xFF);
            assert_eq!(bus.read(addr), 0x00, "window ${addr:04X}");
        }
    }

    #[test]
    fn cartridge_window_reaches_prg() {
        let mut bus = bus();

        bus.write(0x8000, 0xA9);

        assert_eq!(bus.read(0x8000), 0xA9);
        assert_eq!(bus.read(0xC000), 0xA9); // 16 KiB bank mirror
    }

    #[test]
    fn reset_vector_is_writable_through_the_bus() {
        let mut bus = bus();

        bus.set_reset_vector(0x8000);

        assert_eq!(bus.read(0xFFFC), 0x00);
        assert_eq!(bus.read(0xFFFD), 0x80);
        assert_eq!(bus.read_word(0xFFFC), 0x8000);
    }
}
