//! pwmfreq Hardware Abstraction Layer
//!
//! This crate defines the register access trait that the prescaler logic in
//! `pwmfreq-core` writes through. Chip-specific crates implement it against
//! the real timer control registers; [`RegisterFile`] implements it in
//! memory so the same logic can be exercised on the host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  pwmfreq-core (tables, set_prescaler)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pwmfreq-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ pwmfreq-hal-  │       │ RegisterFile  │
//! │      avr      │       │   (host)      │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`register::ControlRegisters`] - byte-wide timer control register access

#![no_std]
#![deny(unsafe_code)]

pub mod register;
pub mod register_file;

// Re-export key types at crate root for convenience
pub use register::{ControlRegisters, Register};
pub use register_file::RegisterFile;
