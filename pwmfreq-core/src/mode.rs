//! Prescaler mode tables
//!
//! A mode table maps each divisor a timer supports to the clock-select
//! bits (`CSn2:0`, or `CS43:0` for the high-speed timer) that enable it.
//! Values are taken from the ATmega328P and ATmega32u4 datasheets.

/// Keep-mask for timers with a 3-bit clock-select field
pub const MASK_3BIT: u8 = 0b1111_1000;

/// Keep-mask for timers with a 4-bit clock-select field
pub const MASK_4BIT: u8 = 0b1111_0000;

/// Width of the clock-select field in the control register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModeWidth {
    /// Bits 2:0
    ThreeBit,
    /// Bits 3:0
    FourBit,
}

impl ModeWidth {
    /// Mask that keeps every bit outside the clock-select field
    pub const fn keep_mask(self) -> u8 {
        match self {
            ModeWidth::ThreeBit => MASK_3BIT,
            ModeWidth::FourBit => MASK_4BIT,
        }
    }

    /// Mask covering the clock-select field itself
    pub const fn field_mask(self) -> u8 {
        !self.keep_mask()
    }
}

/// Divisor to mode-code lookup for one kind of timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeTable {
    /// Width of the clock-select field
    pub width: ModeWidth,
    /// `(divisor, mode code)` pairs
    pub entries: &'static [(u16, u8)],
}

impl ModeTable {
    /// Mode code selecting `divisor`, if the timer supports it
    pub fn mode_for(&self, divisor: u16) -> Option<u8> {
        self.entries
            .iter()
            .find(|&&(d, _)| d == divisor)
            .map(|&(_, mode)| mode)
    }

    /// Check if the timer supports `divisor`
    pub fn supports(&self, divisor: u16) -> bool {
        self.mode_for(divisor).is_some()
    }

    /// Supported divisors, smallest first
    pub fn divisors(&self) -> impl Iterator<Item = u16> + 'static {
        self.entries.iter().map(|&(d, _)| d)
    }

    /// Keep-mask for this table's field width
    pub const fn keep_mask(&self) -> u8 {
        self.width.keep_mask()
    }
}

/// 8/16-bit timers with the synchronous prescaler (timers 0, 1 and 3)
pub const PRESCALER_MODES: ModeTable = ModeTable {
    width: ModeWidth::ThreeBit,
    entries: &[(1, 0x01), (8, 0x02), (64, 0x03), (256, 0x04), (1024, 0x05)],
};

/// ATmega328P timer 2, whose asynchronous prescaler adds /32 and /128
pub const TIMER2_PRESCALER_MODES: ModeTable = ModeTable {
    width: ModeWidth::ThreeBit,
    entries: &[
        (1, 0x01),
        (8, 0x02),
        (32, 0x03),
        (64, 0x04),
        (128, 0x05),
        (256, 0x06),
        (1024, 0x07),
    ],
};

/// ATmega32u4 high-speed timer 4: every power of two up to 16384
pub const TIMER4_PRESCALER_MODES: ModeTable = ModeTable {
    width: ModeWidth::FourBit,
    entries: &[
        (1, 0x01),
        (2, 0x02),
        (4, 0x03),
        (8, 0x04),
        (16, 0x05),
        (32, 0x06),
        (64, 0x07),
        (128, 0x08),
        (256, 0x09),
        (512, 0x0A),
        (1024, 0x0B),
        (2048, 0x0C),
        (4096, 0x0D),
        (8192, 0x0E),
        (16384, 0x0F),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masks_are_complementary() {
        for width in [ModeWidth::ThreeBit, ModeWidth::FourBit] {
            assert_eq!(width.keep_mask() | width.field_mask(), 0xFF);
            assert_eq!(width.keep_mask() & width.field_mask(), 0);
        }
        assert_eq!(ModeWidth::ThreeBit.field_mask(), 0b0000_0111);
        assert_eq!(ModeWidth::FourBit.field_mask(), 0b0000_1111);
    }

    #[test]
    fn test_modes_fit_their_field() {
        for table in [PRESCALER_MODES, TIMER2_PRESCALER_MODES, TIMER4_PRESCALER_MODES] {
            for &(_, mode) in table.entries {
                assert_eq!(mode & table.keep_mask(), 0);
                // Mode 0 stops the timer and must never be produced
                assert_ne!(mode, 0);
            }
        }
    }

    #[test]
    fn test_timer4_is_powers_of_two() {
        for (i, divisor) in TIMER4_PRESCALER_MODES.divisors().enumerate() {
            assert_eq!(divisor, 1 << i);
            assert_eq!(TIMER4_PRESCALER_MODES.mode_for(divisor), Some(i as u8 + 1));
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(PRESCALER_MODES.mode_for(256), Some(0x04));
        assert_eq!(PRESCALER_MODES.mode_for(32), None);
        assert_eq!(TIMER2_PRESCALER_MODES.mode_for(32), Some(0x03));
        assert_eq!(TIMER2_PRESCALER_MODES.mode_for(1024), Some(0x07));
        assert!(!TIMER2_PRESCALER_MODES.supports(3));
        assert_eq!(TIMER4_PRESCALER_MODES.mode_for(4096), Some(0x0D));
    }
}
