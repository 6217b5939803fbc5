//! Board-agnostic PWM prescaler logic
//!
//! This crate maps a PWM pin and a frequency divisor to the timer control
//! register and clock-select bits that produce it, and performs the
//! register update through the `pwmfreq-hal` trait:
//!
//! - Board variants and their pin/timer tables
//! - Divisor to mode-code tables
//! - `set_prescaler` and its reporting variant `try_set_prescaler`
//! - PWM frequency queries
//! - Startup prescaler plans
//!
//! Postcard storage of plans sits behind the `serde` feature; its tests
//! run with `cargo test -p pwmfreq-core --features serde`.
//!
//! ```
//! use pwmfreq_core::{set_prescaler, Standard};
//! use pwmfreq_hal::{Register, RegisterFile};
//!
//! let mut regs = RegisterFile::new().with(Register::Tccr0b, 0b0000_0011);
//! set_prescaler::<Standard, _>(&mut regs, 5, 256);
//! assert_eq!(regs.get(Register::Tccr0b), 0b0000_0100);
//! ```

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod board;
pub mod config;
pub mod error;
pub mod frequency;
pub mod mode;
pub mod prescaler;
pub mod timer;

pub use board::{ActiveBoard, Board, Enhanced, Standard};
pub use config::{PinDivisor, PlanError, PrescalerPlan};
pub use error::PrescalerError;
pub use frequency::{base_frequency_hz, pwm_frequency_hz, timer_frequency_hz};
pub use prescaler::{
    paired_pins, resolve, set_prescaler, timer_group, try_set_prescaler, valid_divisors, Applied,
    PrescalerSetter, Resolved,
};
pub use timer::TimerGroup;
