//! Timer control registers for AVR
//!
//! Owns the timer/counter peripherals that carry a prescaler-select field
//! in their `TCCRnB` register and exposes them through
//! [`pwmfreq_hal::ControlRegisters`].

use pwmfreq_core::{ActiveBoard, Applied, PrescalerError};
use pwmfreq_hal::{ControlRegisters, Register};

use crate::pac;

/// Timer peripherals with a prescaler field
#[cfg(feature = "atmega328p")]
pub struct TimerRegisters {
    tc0: pac::TC0,
    tc1: pac::TC1,
    tc2: pac::TC2,
}

/// Timer peripherals with a prescaler field
#[cfg(feature = "atmega32u4")]
pub struct TimerRegisters {
    tc0: pac::TC0,
    tc1: pac::TC1,
    tc3: pac::TC3,
    tc4: pac::TC4,
}

#[cfg(feature = "atmega328p")]
impl TimerRegisters {
    /// Take ownership of the timer peripherals
    pub fn new(tc0: pac::TC0, tc1: pac::TC1, tc2: pac::TC2) -> Self {
        Self { tc0, tc1, tc2 }
    }

    /// Split the timers out of the device peripherals
    pub fn from_peripherals(dp: pac::Peripherals) -> Self {
        Self::new(dp.TC0, dp.TC1, dp.TC2)
    }

    /// Release the owned peripherals
    pub fn free(self) -> (pac::TC0, pac::TC1, pac::TC2) {
        (self.tc0, self.tc1, self.tc2)
    }
}

#[cfg(feature = "atmega32u4")]
impl TimerRegisters {
    /// Take ownership of the timer peripherals
    pub fn new(tc0: pac::TC0, tc1: pac::TC1, tc3: pac::TC3, tc4: pac::TC4) -> Self {
        Self { tc0, tc1, tc3, tc4 }
    }

    /// Split the timers out of the device peripherals
    pub fn from_peripherals(dp: pac::Peripherals) -> Self {
        Self::new(dp.TC0, dp.TC1, dp.TC3, dp.TC4)
    }

    /// Release the owned peripherals
    pub fn free(self) -> (pac::TC0, pac::TC1, pac::TC3, pac::TC4) {
        (self.tc0, self.tc1, self.tc3, self.tc4)
    }
}

impl TimerRegisters {
    /// Conjure the timer peripherals without taking the singleton
    ///
    /// # Safety
    ///
    /// The caller must ensure no other code relies on exclusive ownership of
    /// the prescaler bits of these timers.
    pub unsafe fn steal() -> Self {
        Self::from_peripherals(pac::Peripherals::steal())
    }

    /// Set the prescaler for `pin`, ignoring invalid input
    pub fn set_prescaler(&mut self, pin: u8, divisor: u16) {
        pwmfreq_core::set_prescaler::<ActiveBoard, _>(self, pin, divisor);
    }

    /// Set the prescaler for `pin`, reporting what was written
    pub fn try_set_prescaler(&mut self, pin: u8, divisor: u16) -> Result<Applied, PrescalerError> {
        pwmfreq_core::try_set_prescaler::<ActiveBoard, _>(self, pin, divisor)
    }
}

impl ControlRegisters for TimerRegisters {
    #[cfg(feature = "atmega328p")]
    fn read(&self, reg: Register) -> u8 {
        match reg {
            Register::Tccr0b => self.tc0.tccr0b.read().bits(),
            Register::Tccr1b => self.tc1.tccr1b.read().bits(),
            Register::Tccr2b => self.tc2.tccr2b.read().bits(),
            // Not present on this chip
            Register::Tccr3b | Register::Tccr4b => 0,
        }
    }

    #[cfg(feature = "atmega32u4")]
    fn read(&self, reg: Register) -> u8 {
        match reg {
            Register::Tccr0b => self.tc0.tccr0b.read().bits(),
            Register::Tccr1b => self.tc1.tccr1b.read().bits(),
            Register::Tccr3b => self.tc3.tccr3b.read().bits(),
            Register::Tccr4b => self.tc4.tccr4b.read().bits(),
            // Not present on this chip
            Register::Tccr2b => 0,
        }
    }

    #[cfg(feature = "atmega328p")]
    fn write(&mut self, reg: Register, value: u8) {
        // SAFETY: every bit pattern is a valid TCCRnB value
        unsafe {
            match reg {
                Register::Tccr0b => self.tc0.tccr0b.write(|w| w.bits(value)),
                Register::Tccr1b => self.tc1.tccr1b.write(|w| w.bits(value)),
                Register::Tccr2b => self.tc2.tccr2b.write(|w| w.bits(value)),
                Register::Tccr3b | Register::Tccr4b => {}
            }
        }
    }

    #[cfg(feature = "atmega32u4")]
    fn write(&mut self, reg: Register, value: u8) {
        // SAFETY: every bit pattern is a valid TCCRnB value
        unsafe {
            match reg {
                Register::Tccr0b => self.tc0.tccr0b.write(|w| w.bits(value)),
                Register::Tccr1b => self.tc1.tccr1b.write(|w| w.bits(value)),
                Register::Tccr3b => self.tc3.tccr3b.write(|w| w.bits(value)),
                Register::Tccr4b => self.tc4.tccr4b.write(|w| w.bits(value)),
                Register::Tccr2b => {}
            }
        }
    }

    /// Read-modify-write with interrupts disabled
    ///
    /// Overflow and compare handlers may touch the same control register,
    /// so the whole sequence runs inside a critical section. The value
    /// written is the same as the default implementation's.
    fn read_modify_write(&mut self, source: Register, target: Register, keep: u8, bits: u8) -> u8 {
        avr_device::interrupt::free(|_cs| {
            let value = (self.read(source) & keep) | bits;
            self.write(target, value);
            value
        })
    }
}
