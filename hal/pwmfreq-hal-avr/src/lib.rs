//! AVR-specific HAL for pwmfreq
//!
//! This crate implements the `pwmfreq-hal` register trait on top of the
//! `avr-device` peripheral access crate, for the two supported chips:
//!
//! - ATmega328P (Uno, Nano, Pro Mini) - timers 0, 1 and 2
//! - ATmega32u4 (Leonardo, Micro) - timers 0, 1, 3 and the high-speed timer 4
//!
//! # Features
//!
//! - `atmega328p` - standard board register layout
//! - `atmega32u4` - enhanced board register layout
//! - `defmt` - Enable debug formatting support
//!
//! Exactly one chip feature must be enabled. The same feature selects the
//! matching pin tables in `pwmfreq-core`.
//!
//! # Usage
//!
//! ```ignore
//! let dp = pac::Peripherals::take().unwrap();
//! let mut timers = TimerRegisters::from_peripherals(dp);
//! timers.set_prescaler(9, 64);
//! ```

#![no_std]

#[cfg(all(feature = "atmega328p", feature = "atmega32u4"))]
compile_error!("features `atmega328p` and `atmega32u4` are mutually exclusive");

#[cfg(not(any(feature = "atmega328p", feature = "atmega32u4")))]
compile_error!("select a chip with feature `atmega328p` or `atmega32u4`");

#[cfg(feature = "atmega328p")]
pub use avr_device::atmega328p as pac;
#[cfg(feature = "atmega32u4")]
pub use avr_device::atmega32u4 as pac;

pub mod timers;

pub use timers::TimerRegisters;

// Re-export shared types from pwmfreq-hal and pwmfreq-core
pub use pwmfreq_core::{ActiveBoard, PrescalerError, TimerGroup};
pub use pwmfreq_hal::{ControlRegisters, Register};

/// Set the prescaler for a PWM pin on the running chip
///
/// Drop-in for the classic global `setPWMPrescaler(pin, divisor)`: the
/// timer peripherals are stolen for the duration of the call, so it can be
/// used after the application has taken the `Peripherals` singleton.
/// Invalid pins or divisors are ignored.
///
/// Changing a timer affects every pin on that timer. On the ATmega328P,
/// pins 3, 5, 6 and 11 share timers with `millis()`/`delay()`, and pins 9
/// and 10 share timer 1 with servo pulse generation.
pub fn set_pwm_prescaler(pin: u8, divisor: u16) {
    // SAFETY: only the prescaler bits of the TCCRnB registers are touched,
    // inside a critical section.
    let mut timers = unsafe { TimerRegisters::steal() };
    timers.set_prescaler(pin, divisor);
}
