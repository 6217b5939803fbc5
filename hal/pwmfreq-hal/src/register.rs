//! Timer control register abstractions
//!
//! Identifies the timer/counter control registers (`TCCRnB`) whose low bits
//! select the clock prescaler, and provides the trait used to read and
//! write them.

/// Timer/counter control register B of one hardware timer
///
/// Not every chip has every register: the ATmega328P has `TCCR0B`,
/// `TCCR1B` and `TCCR2B`, the ATmega32u4 has `TCCR0B`, `TCCR1B`, `TCCR3B`
/// and `TCCR4B`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    /// Timer/Counter0 control register B
    Tccr0b = 0,
    /// Timer/Counter1 control register B
    Tccr1b = 1,
    /// Timer/Counter2 control register B
    Tccr2b = 2,
    /// Timer/Counter3 control register B
    Tccr3b = 3,
    /// Timer/Counter4 control register B
    Tccr4b = 4,
}

impl Register {
    /// Number of distinct registers
    pub const COUNT: usize = 5;

    /// All registers in index order
    pub const ALL: [Register; Register::COUNT] = [
        Register::Tccr0b,
        Register::Tccr1b,
        Register::Tccr2b,
        Register::Tccr3b,
        Register::Tccr4b,
    ];

    /// Get the register as an index into a register bank
    pub fn index(self) -> usize {
        self as usize
    }

    /// Create a register from its index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Datasheet name of the register
    pub fn name(self) -> &'static str {
        match self {
            Register::Tccr0b => "TCCR0B",
            Register::Tccr1b => "TCCR1B",
            Register::Tccr2b => "TCCR2B",
            Register::Tccr3b => "TCCR3B",
            Register::Tccr4b => "TCCR4B",
        }
    }
}

/// Byte-wide access to timer control registers
///
/// Implementations own the actual storage: memory-mapped I/O on the chip,
/// or a plain byte array on the host.
pub trait ControlRegisters {
    /// Read the current value of a register
    fn read(&self, reg: Register) -> u8;

    /// Overwrite a register
    fn write(&mut self, reg: Register, value: u8);

    /// Read `source`, keep the bits selected by `keep`, OR in `bits`, and
    /// write the result to `target`. Returns the value written.
    ///
    /// `source` and `target` are normally the same register. The default
    /// implementation is not atomic with respect to interrupts that touch
    /// the same register; hardware implementations may override it to run
    /// inside a critical section.
    fn read_modify_write(&mut self, source: Register, target: Register, keep: u8, bits: u8) -> u8 {
        let value = (self.read(source) & keep) | bits;
        self.write(target, value);
        value
    }
}

impl<T: ControlRegisters + ?Sized> ControlRegisters for &mut T {
    fn read(&self, reg: Register) -> u8 {
        (**self).read(reg)
    }

    fn write(&mut self, reg: Register, value: u8) {
        (**self).write(reg, value)
    }

    fn read_modify_write(&mut self, source: Register, target: Register, keep: u8, bits: u8) -> u8 {
        (**self).read_modify_write(source, target, keep, bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip() {
        for reg in Register::ALL {
            assert_eq!(Register::from_index(reg.index()), Some(reg));
        }
        assert_eq!(Register::from_index(Register::COUNT), None);
    }

    #[test]
    fn test_names() {
        assert_eq!(Register::Tccr0b.name(), "TCCR0B");
        assert_eq!(Register::Tccr4b.name(), "TCCR4B");
    }

    // Minimal mock that only records writes
    struct Recorder {
        value: u8,
        writes: u8,
    }

    impl ControlRegisters for Recorder {
        fn read(&self, _reg: Register) -> u8 {
            self.value
        }

        fn write(&mut self, _reg: Register, value: u8) {
            self.value = value;
            self.writes += 1;
        }
    }

    #[test]
    fn test_default_read_modify_write() {
        let mut regs = Recorder {
            value: 0b1100_0011,
            writes: 0,
        };
        let written = regs.read_modify_write(Register::Tccr0b, Register::Tccr0b, 0b1111_1000, 0x04);
        assert_eq!(written, 0b1100_0100);
        assert_eq!(regs.value, 0b1100_0100);
        assert_eq!(regs.writes, 1);
    }

    fn set_mode<R: ControlRegisters>(mut regs: R) -> u8 {
        regs.read_modify_write(Register::Tccr1b, Register::Tccr1b, 0b1111_1000, 0x05)
    }

    #[test]
    fn test_forwarding_through_mut_ref() {
        let mut regs = Recorder {
            value: 0b1000_0000,
            writes: 0,
        };
        assert_eq!(set_mode(&mut regs), 0b1000_0101);
        assert_eq!(regs.read(Register::Tccr1b), 0b1000_0101);
        assert_eq!(regs.writes, 1);
    }
}
