//! In-memory register bank
//!
//! Stands in for the chip's timer registers on the host so the prescaler
//! logic can be verified by inspecting register state directly.

use crate::register::{ControlRegisters, Register};

/// Inspectable bank holding one byte per [`Register`]
///
/// All registers start at zero, which matches their reset value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegisterFile {
    values: [u8; Register::COUNT],
}

impl RegisterFile {
    /// Create a bank with every register cleared
    pub const fn new() -> Self {
        Self {
            values: [0; Register::COUNT],
        }
    }

    /// Create a bank with every register set to `value`
    pub const fn filled(value: u8) -> Self {
        Self {
            values: [value; Register::COUNT],
        }
    }

    /// Builder-style seed of a single register
    pub fn with(mut self, reg: Register, value: u8) -> Self {
        self.values[reg.index()] = value;
        self
    }

    /// Current value of a register
    pub fn get(&self, reg: Register) -> u8 {
        self.values[reg.index()]
    }

    /// Set a register directly
    pub fn set(&mut self, reg: Register, value: u8) {
        self.values[reg.index()] = value;
    }

    /// Iterate over `(register, value)` pairs in index order
    pub fn iter(&self) -> impl Iterator<Item = (Register, u8)> + '_ {
        Register::ALL.iter().map(move |&reg| (reg, self.get(reg)))
    }
}

impl ControlRegisters for RegisterFile {
    fn read(&self, reg: Register) -> u8 {
        self.get(reg)
    }

    fn write(&mut self, reg: Register, value: u8) {
        self.set(reg, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_cleared() {
        let regs = RegisterFile::new();
        assert!(regs.iter().all(|(_, v)| v == 0));
        assert_eq!(regs, RegisterFile::default());
    }

    #[test]
    fn test_with_and_get() {
        let regs = RegisterFile::new()
            .with(Register::Tccr2b, 0b1100_0000)
            .with(Register::Tccr4b, 0x0F);
        assert_eq!(regs.get(Register::Tccr2b), 0b1100_0000);
        assert_eq!(regs.get(Register::Tccr4b), 0x0F);
        assert_eq!(regs.get(Register::Tccr0b), 0);
    }

    #[test]
    fn test_iter_order() {
        let regs = RegisterFile::filled(0xAA).with(Register::Tccr1b, 0x01);
        let mut iter = regs.iter();
        assert_eq!(iter.next(), Some((Register::Tccr0b, 0xAA)));
        assert_eq!(iter.next(), Some((Register::Tccr1b, 0x01)));
        assert_eq!(iter.count(), 3);
    }

    #[test]
    fn test_trait_write_touches_one_register() {
        let mut regs = RegisterFile::filled(0x11);
        regs.write(Register::Tccr3b, 0x22);
        for (reg, value) in regs.iter() {
            if reg == Register::Tccr3b {
                assert_eq!(value, 0x22);
            } else {
                assert_eq!(value, 0x11);
            }
        }
    }
}
