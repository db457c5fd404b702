//! Processor status register (P) flags.
//!
//! The 6502 status register packs 8 condition code and control bits:
//! Carry, Zero, Interrupt Disable, Decimal Mode, Break, Unused, Overflow, and Sign.

use bitflags::bitflags;

bitflags! {
    /// Processor status register (P register).
    ///
    /// Each bit represents a different condition code or control flag. Most
    /// instructions update one or more of them as a side effect of their result.
    ///
    /// # Bit Layout
    ///
    /// ```text
    /// 7 6 5 4 3 2 1 0
    /// N V U B D I Z C
    /// ```
    ///
    /// - N (Sign): set when a result has bit 7 set, i.e. is negative in two's complement
    /// - V (Overflow): set on signed overflow
    /// - U (Unused): bit 5, carries no meaning; no instruction depends on it
    /// - B (Break): distinguishes BRK from IRQ on the stack
    /// - D (Decimal): enables BCD arithmetic on CPUs that support it (the 2A03 does not)
    /// - I (Interrupt Disable): masks IRQ when set
    /// - Z (Zero): set when a result is zero
    /// - C (Carry): set on carry out / no borrow
    #[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
    pub struct Flags: u8 {
        const Carry = 0b0000_0001;              // C
        const Zero = 0b0000_0010;               // Z
        const InterruptDisabled = 0b0000_0100;  // I
        const DecimalMode = 0b0000_1000;        // D
        const Break = 0b0001_0000;              // B
        const Unused = 0b0010_0000;             // U
        const Overflow = 0b0100_0000;           // V
        const Sign = 0b1000_0000;               // N
    }
}

impl Flags {
    #[inline]
    pub fn set_carry(&mut self, carry: bool) {
        self.set(Flags::Carry, carry);
    }

    #[inline]
    pub fn set_zero(&mut self, zero: bool) {
        self.set(Flags::Zero, zero);
    }

    #[inline]
    pub fn set_signed(&mut self, signed: bool) {
        self.set(Flags::Sign, signed);
    }

    #[inline]
    pub fn set_overflow(&mut self, overflow: bool) {
        self.set(Flags::Overflow, overflow);
    }

    #[inline]
    pub fn set_interrupt_disabled(&mut self, disabled: bool) {
        self.set(Flags::InterruptDisabled, disabled);
    }

    #[inline]
    pub fn set_decimal_mode(&mut self, enabled: bool) {
        self.set(Flags::DecimalMode, enabled);
    }

    /// Set Zero and Sign from an 8-bit result.
    #[inline]
    pub fn set_zn(&mut self, value: u8) {
        self.set_zero(value == 0);
        self.set_signed(value & 0x80 != 0);
    }

    /// Set Zero and Sign from the low byte of a widened intermediate, and
    /// Carry from its overflow past 0xFF.
    #[inline]
    pub fn set_czn(&mut self, value: u16) {
        self.set_carry(value > 0xFF);
        self.set_zn((value & 0x00FF) as u8);
    }

    /// The flag's bit as 0 or 1, for arithmetic use.
    #[must_use]
    #[inline]
    pub fn bit(self, flag: Flags) -> u8 {
        u8::from(self.contains(flag))
    }
}

impl From<u8> for Flags {
    fn from(bits: u8) -> Self {
        Flags::from_bits_truncate(bits)
    }
}

impl From<Flags> for u8 {
    fn from(flags: Flags) -> Self {
        flags.bits()
    }
}
