//! iNES ROM images.
//!
//! An iNES file is a 16-byte header, an optional 512-byte trainer, the
//! PRG-ROM bytes, and the CHR-ROM bytes, with no padding or trailer.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

const HEADER_LEN: usize = 16;
const TRAINER_LEN: usize = 512;
const PRG_BANK_LEN: usize = 16 * 1024;
const CHR_BANK_LEN: usize = 8 * 1024;

/// Which revision of the iNES format a header declares, per bits 2-3 of
/// header byte 7.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RomVersion {
    /// Pre-standard headers that predate the iNES 1.0 spec.
    Archaic,
    INes1,
    INes2,
    /// Both indicator bits set; no known revision.
    Unknown,
}

/// Nametable mirroring requested by the cartridge.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Mirroring {
    Horizontal,
    Vertical,
}

/// Decoded iNES header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomHeader {
    pub version: RomVersion,
    /// PRG-ROM size in bytes.
    pub prg_size: usize,
    /// CHR-ROM size in bytes.
    pub chr_size: usize,
    pub mirroring: Mirroring,
    /// Battery-backed PRG RAM is present.
    pub battery: bool,
    /// A 512-byte trainer sits between the header and PRG-ROM.
    pub trainer: bool,
    pub mapper: u16,
}

/// Why a ROM image failed to load.
#[derive(Debug)]
pub enum RomError {
    /// The file is too short, lacks the `NES\x1A` magic, or its banks are
    /// truncated.
    InvalidHeader,
    /// The header is well-formed but asks for something the linear mapper
    /// cannot provide.
    UnsupportedRom(String),
    Io(io::Error),
}

impl fmt::Display for RomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RomError::InvalidHeader => write!(f, "not a valid iNES ROM image"),
            RomError::UnsupportedRom(detail) => write!(f, "unsupported ROM: {detail}"),
            RomError::Io(err) => write!(f, "failed to read ROM image: {err}"),
        }
    }
}

impl std::error::Error for RomError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RomError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for RomError {
    fn from(err: io::Error) -> Self {
        RomError::Io(err)
    }
}

/// A parsed ROM image: the decoded header plus the PRG and CHR banks.
///
/// PRG contents are load-time data; the [`Cartridge`](crate::Cartridge)
/// write path exists so test setups can seed program bytes and the reset
/// vector through the bus.
#[derive(Debug, Clone)]
pub struct Rom {
    header: RomHeader,
    prg: Vec<u8>,
    chr: Vec<u8>,
}

impl Rom {
    /// Read and parse an iNES file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, RomError> {
        Self::parse(&fs::read(path)?)
    }

    /// Parse an iNES image from memory.
    ///
    /// Only the linear mapper (0) with power-of-two PRG banks is supported;
    /// anything else is [`RomError::UnsupportedRom`]. NES 2.0 exponent-form
    /// bank sizes (MSB nibble `$F`) are likewise unsupported.
    pub fn parse(data: &[u8]) -> Result<Self, RomError> {
        if data.len() < HEADER_LEN || &data[0..4] != b"NES\x1A" {
            return Err(RomError::InvalidHeader);
        }

        let version = match data[7] & 0x0C {
            0x08 => RomVersion::INes2,
            0x04 => RomVersion::Archaic,
            0x00 => RomVersion::INes1,
            _ => RomVersion::Unknown,
        };

        let (prg_units, chr_units) = if version == RomVersion::INes2 {
            let prg_msb = u16::from(data[9] & 0x0F);
            let chr_msb = u16::from(data[9] >> 4);
            if prg_msb == 0x0F || chr_msb == 0x0F {
                return Err(RomError::UnsupportedRom(
                    "NES 2.0 exponent-form bank sizes".into(),
                ));
            }
            (
                u16::from(data[4]) | prg_msb << 8,
                u16::from(data[5]) | chr_msb << 8,
            )
        } else {
            (u16::from(data[4]), u16::from(data[5]))
        };
        let prg_size = usize::from(prg_units) * PRG_BANK_LEN;
        let chr_size = usize::from(chr_units) * CHR_BANK_LEN;

        let flags6 = data[6];
        let mirroring = if flags6 & 0x01 != 0 {
            Mirroring::Vertical
        } else {
            Mirroring::Horizontal
        };
        let battery = flags6 & 0x02 != 0;
        let trainer = flags6 & 0x04 != 0;

        let mut mapper = u16::from(data[7] & 0xF0) | u16::from(flags6 >> 4);
        if version == RomVersion::INes2 {
            mapper |= u16::from(data[8] & 0x0F) << 8;
        }
        if mapper != 0 {
            return Err(RomError::UnsupportedRom(format!(
                "mapper {mapper} (only the linear mapper 0 is implemented)"
            )));
        }
        if !prg_size.is_power_of_two() {
            return Err(RomError::UnsupportedRom(format!(
                "{prg_size} byte PRG bank cannot be linearly mapped"
            )));
        }

        let prg_start = HEADER_LEN + if trainer { TRAINER_LEN } else { 0 };
        let chr_start = prg_start + prg_size;
        if data.len() < chr_start + chr_size {
            return Err(RomError::InvalidHeader);
        }

        Ok(Self {
            header: RomHeader {
                version,
                prg_size,
                chr_size,
                mirroring,
                battery,
                trainer,
                mapper,
            },
            prg: data[prg_start..chr_start].to_vec(),
            chr: data[chr_start..chr_start + chr_size].to_vec(),
        })
    }

    /// A blank image with zero-filled 16 KiB PRG and CHR banks and no
    /// backing file, for test setups that seed PRG through the bus.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            header: RomHeader {
                version: RomVersion::INes1,
                prg_size: PRG_BANK_LEN,
                chr_size: PRG_BANK_LEN,
                mirroring: Mirroring::Horizontal,
                battery: false,
                trainer: false,
                mapper: 0,
            },
            prg: vec![0; PRG_BANK_LEN],
            chr: vec![0; PRG_BANK_LEN],
        }
    }

    #[must_use]
    pub fn header(&self) -> &RomHeader {
        &self.header
    }

    #[must_use]
    pub fn prg(&self) -> &[u8] {
        &self.prg
    }

    pub(crate) fn prg_mut(&mut self) -> &mut [u8] {
        &mut self.prg
    }

    #[must_use]
    pub fn chr(&self) -> &[u8] {
        &self.chr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ines1_image(prg_units: u8, chr_units: u8, flags6: u8) -> Vec<u8> {
        let mut data = vec![0u8; HEADER_LEN];
        data[0..4].copy_from_slice(b"NES\x1A");
        data[4] = prg_units;
        data[5] = chr_units;
        data[6] = flags6;
        data.extend(vec![0xAA; usize::from(prg_units) * PRG_BANK_LEN]);
        data.extend(vec![0xBB; usize::from(chr_units) * CHR_BANK_LEN]);
        data
    }

    #[test]
    fn parses_an_ines1_image() {
        let rom = Rom::parse(&ines1_image(2, 1, 0x03)).unwrap();

        assert_eq!(rom.header().version, RomVersion::INes1);
        assert_eq!(rom.header().prg_size, 2 * PRG_BANK_LEN);
        assert_eq!(rom.header().chr_size, CHR_BANK_LEN);
        assert_eq!(rom.header().mirroring, Mirroring::Vertical);
        assert!(rom.header().battery);
        assert!(!rom.header().trainer);
        assert_eq!(rom.header().mapper, 0);
        assert_eq!(rom.prg().len(), 2 * PRG_BANK_LEN);
        assert_eq!(rom.prg()[0], 0xAA);
        assert_eq!(rom.chr().len(), CHR_BANK_LEN);
        assert_eq!(rom.chr()[0], 0xBB);
    }

    #[test]
    fn detects_version_from_byte_seven() {
        let mut data = ines1_image(1, 0, 0x00);
        data[7] = 0x08;
        assert_eq!(
            Rom::parse(&data).unwrap().header().version,
            RomVersion::INes2
        );

        data[7] = 0x04;
        assert_eq!(
            Rom::parse(&data).unwrap().header().version,
            RomVersion::Archaic
        );

        data[7] = 0x0C;
        assert_eq!(
            Rom::parse(&data).unwrap().header().version,
            RomVersion::Unknown
        );
    }

    #[test]
    fn ines2_prg_size_uses_byte_nine_low_nibble() {
        // 256 PRG units (4 MiB) declared via the byte-9 MSB nibble; the bank
        // data is far too short for that, so the arithmetic shows up as a
        // truncation rejection rather than a header one.
        let mut data = ines1_image(1, 0, 0x00);
        data[4] = 0x00;
        data[7] = 0x08;
        data[9] = 0x01;
        assert!(matches!(Rom::parse(&data), Err(RomError::InvalidHeader)));
    }

    #[test]
    fn ines2_exponent_form_is_unsupported() {
        let mut data = ines1_image(1, 0, 0x00);
        data[7] = 0x08;
        data[9] = 0x0F;
        assert!(matches!(
            Rom::parse(&data),
            Err(RomError::UnsupportedRom(_))
        ));
    }

    #[test]
    fn trainer_is_skipped_before_prg() {
        let mut data = vec![0u8; HEADER_LEN];
        data[0..4].copy_from_slice(b"NES\x1A");
        data[4] = 1;
        data[6] = 0x04; // trainer flag
        data.extend(vec![0x11; TRAINER_LEN]);
        data.extend(vec![0xAA; PRG_BANK_LEN]);

        let rom = Rom::parse(&data).unwrap();

        assert!(rom.header().trainer);
        assert_eq!(rom.prg()[0], 0xAA);
    }

    #[test]
    fn rejects_short_files_and_bad_magic() {
        assert!(matches!(Rom::parse(&[]), Err(RomError::InvalidHeader)));
        assert!(matches!(
            Rom::parse(&[0x4E, 0x45, 0x53]),
            Err(RomError::InvalidHeader)
        ));

        let mut data = ines1_image(1, 0, 0x00);
        data[3] = 0x00; // break the magic
        assert!(matches!(Rom::parse(&data), Err(RomError::InvalidHeader)));
    }

    #[test]
    fn rejects_truncated_banks() {
        let mut data = ines1_image(1, 1, 0x00);
        data.truncate(data.len() - 1);
        assert!(matches!(Rom::parse(&data), Err(RomError::InvalidHeader)));
    }

    #[test]
    fn rejects_nonzero_mappers() {
        let data = ines1_image(1, 0, 0x10); // mapper low nibble = 1
        match Rom::parse(&data) {
            Err(RomError::UnsupportedRom(detail)) => assert!(detail.contains("mapper 1")),
            other => panic!("expected UnsupportedRom, got {other:?}"),
        }
    }

    #[test]
    fn empty_rom_has_blank_banks() {
        let rom = Rom::empty();

        assert_eq!(rom.prg().len(), PRG_BANK_LEN);
        assert_eq!(rom.chr().len(), PRG_BANK_LEN);
        assert!(rom.prg().iter().all(|&byte| byte == 0));
        assert_eq!(rom.header().mapper, 0);
    }
}
