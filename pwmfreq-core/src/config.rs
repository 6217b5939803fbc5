//! Startup prescaler configuration
//!
//! A [`PrescalerPlan`] lists the `(pin, divisor)` settings an application
//! wants applied at boot. With the `serde` feature it can be stored as
//! postcard binary data and decoded without allocation.

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use pwmfreq_hal::ControlRegisters;

use crate::board::Board;
use crate::error::PrescalerError;
use crate::prescaler::{set_prescaler, try_set_prescaler};

/// Maximum entries in a plan
pub const MAX_PLAN_ENTRIES: usize = 8;

/// One requested prescaler setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinDivisor {
    /// Board pin number
    pub pin: u8,
    /// Requested divisor
    pub divisor: u16,
}

/// Errors from building or decoding a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlanError {
    /// More than [`MAX_PLAN_ENTRIES`] entries
    Full,
    /// Stored bytes are not a valid plan
    Decode,
    /// Output buffer too small for the encoded plan
    Encode,
}

/// Ordered list of prescaler settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrescalerPlan {
    /// Settings, applied first to last
    pub entries: Vec<PinDivisor, MAX_PLAN_ENTRIES>,
}

impl PrescalerPlan {
    /// Create an empty plan
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a setting
    pub fn push(&mut self, pin: u8, divisor: u16) -> Result<(), PlanError> {
        self.entries
            .push(PinDivisor { pin, divisor })
            .map_err(|_| PlanError::Full)
    }

    /// Builder-style [`push`](Self::push)
    pub fn with(mut self, pin: u8, divisor: u16) -> Result<Self, PlanError> {
        self.push(pin, divisor)?;
        Ok(self)
    }

    /// Number of settings
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the plan has no settings
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check every setting against board `B` without writing anything
    pub fn validate<B: Board>(&self) -> Result<(), PrescalerError> {
        self.entries
            .iter()
            .try_for_each(|e| crate::prescaler::resolve::<B>(e.pin, e.divisor).map(|_| ()))
    }

    /// Apply every setting in order, silently skipping invalid ones
    ///
    /// Later settings for the same timer overwrite earlier ones.
    pub fn apply<B, R>(&self, regs: &mut R)
    where
        B: Board,
        R: ControlRegisters + ?Sized,
    {
        for e in &self.entries {
            set_prescaler::<B, R>(regs, e.pin, e.divisor);
        }
    }

    /// Apply every valid setting in order
    ///
    /// Returns the number of settings written, or the first error seen.
    /// Invalid settings do not stop later valid ones from being applied.
    pub fn apply_checked<B, R>(&self, regs: &mut R) -> Result<usize, PrescalerError>
    where
        B: Board,
        R: ControlRegisters + ?Sized,
    {
        let mut applied = 0;
        let mut first_error = None;
        for e in &self.entries {
            match try_set_prescaler::<B, R>(regs, e.pin, e.divisor) {
                Ok(_) => applied += 1,
                Err(err) => {
                    first_error.get_or_insert(err);
                }
            }
        }
        match first_error {
            Some(err) => Err(err),
            None => Ok(applied),
        }
    }

    /// Decode a plan stored as postcard bytes
    #[cfg(feature = "serde")]
    pub fn from_postcard(bytes: &[u8]) -> Result<Self, PlanError> {
        postcard::from_bytes(bytes).map_err(|_| PlanError::Decode)
    }

    /// Encode the plan as postcard bytes into `buffer`
    #[cfg(feature = "serde")]
    pub fn to_postcard<'a>(&self, buffer: &'a mut [u8]) -> Result<&'a mut [u8], PlanError> {
        postcard::to_slice(self, buffer).map_err(|_| PlanError::Encode)
    }
}
