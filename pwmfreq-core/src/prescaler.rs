//! Prescaler selection and register update
//!
//! Maps a `(pin, divisor)` request to a control register and clock-select
//! mode, then updates the register's low bits in place:
//!
//! ```text
//! new = (old & keep_mask) | mode
//! ```
//!
//! The write applies to the whole timer, so every pin sharing it changes
//! frequency too.

use core::marker::PhantomData;

use pwmfreq_hal::{ControlRegisters, Register};

use crate::board::{ActiveBoard, Board};
use crate::error::PrescalerError;
use crate::timer::TimerGroup;

/// Outcome of looking up a `(pin, divisor)` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Resolved {
    /// Requested pin
    pub pin: u8,
    /// Requested divisor
    pub divisor: u16,
    /// Timer whose prescaler changes
    pub group: TimerGroup,
    /// Register whose upper bits are kept
    pub source: Register,
    /// Register written
    pub target: Register,
    /// Bits of `source` carried into the new value
    pub keep_mask: u8,
    /// Clock-select bits
    pub mode: u8,
}

/// A completed register update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Applied {
    /// What was looked up
    pub resolved: Resolved,
    /// Value written to `resolved.target`
    pub value: u8,
}

/// Look up the register and mode for a request without touching hardware
pub fn resolve<B: Board>(pin: u8, divisor: u16) -> Result<Resolved, PrescalerError> {
    let entry = B::pin(pin).ok_or(PrescalerError::UnknownPin { pin })?;
    entry
        .routes
        .iter()
        .find_map(|route| {
            route.modes.mode_for(divisor).map(|mode| Resolved {
                pin,
                divisor,
                group: route.group,
                source: route.source,
                target: route.target,
                keep_mask: route.modes.keep_mask(),
                mode,
            })
        })
        .ok_or(PrescalerError::UnsupportedDivisor { pin, divisor })
}

/// Set the PWM prescaler for `pin` to `divisor`
///
/// Unknown pins and unsupported divisors are ignored: no register is read
/// or written and nothing is reported. Use [`try_set_prescaler`] to find
/// out what happened.
///
/// Changing a timer's prescaler also changes anything else clocked by it,
/// including `millis()`/`delay()` on timer 0 and servo pulses on timer 1.
pub fn set_prescaler<B, R>(regs: &mut R, pin: u8, divisor: u16)
where
    B: Board,
    R: ControlRegisters + ?Sized,
{
    if let Ok(resolved) = resolve::<B>(pin, divisor) {
        regs.read_modify_write(resolved.source, resolved.target, resolved.keep_mask, resolved.mode);
    }
}

/// Set the PWM prescaler for `pin`, reporting the outcome
///
/// Writes the same value as [`set_prescaler`]. On error no register is
/// touched.
pub fn try_set_prescaler<B, R>(regs: &mut R, pin: u8, divisor: u16) -> Result<Applied, PrescalerError>
where
    B: Board,
    R: ControlRegisters + ?Sized,
{
    let resolved = match resolve::<B>(pin, divisor) {
        Ok(resolved) => resolved,
        Err(e) => {
            #[cfg(feature = "defmt")]
            defmt::debug!("{}: prescaler rejected: {}", B::NAME, e);
            return Err(e);
        }
    };

    let value =
        regs.read_modify_write(resolved.source, resolved.target, resolved.keep_mask, resolved.mode);

    #[cfg(feature = "defmt")]
    defmt::trace!(
        "{}: pin {} /{} -> {} = {=u8:#x}",
        B::NAME,
        pin,
        divisor,
        resolved.target,
        value
    );

    Ok(Applied { resolved, value })
}

/// Primary timer driving `pin`
pub fn timer_group<B: Board>(pin: u8) -> Option<TimerGroup> {
    B::pin(pin)
        .and_then(|entry| entry.routes.first())
        .map(|route| route.group)
}

/// Pins that change together with `pin`, including `pin` itself
///
/// Empty if the pin has no PWM timer.
pub fn paired_pins<B: Board>(pin: u8) -> &'static [u8] {
    timer_group::<B>(pin)
        .map(B::group_pins)
        .unwrap_or(&[])
}

/// Every divisor accepted for `pin`, in route order without repeats
pub fn valid_divisors<B: Board>(pin: u8) -> impl Iterator<Item = u16> {
    let routes = B::pin(pin).map(|entry| entry.routes).unwrap_or(&[]);
    routes.iter().enumerate().flat_map(move |(i, route)| {
        route
            .modes
            .divisors()
            .filter(move |&d| !routes[..i].iter().any(|earlier| earlier.modes.supports(d)))
    })
}

/// Owns a register bank and sets prescalers on it for one board
///
/// `PrescalerSetter::new` uses the build's [`ActiveBoard`]; use
/// [`PrescalerSetter::for_board`] to pick a board explicitly.
pub struct PrescalerSetter<R, B = ActiveBoard> {
    regs: R,
    _board: PhantomData<B>,
}

impl<R: ControlRegisters> PrescalerSetter<R> {
    /// Create a setter for the active board
    pub fn new(regs: R) -> Self {
        Self::for_board(regs)
    }
}

impl<R: ControlRegisters, B: Board> PrescalerSetter<R, B> {
    /// Create a setter for board `B`
    pub fn for_board(regs: R) -> Self {
        Self {
            regs,
            _board: PhantomData,
        }
    }

    /// See [`set_prescaler`]
    pub fn set_prescaler(&mut self, pin: u8, divisor: u16) {
        set_prescaler::<B, R>(&mut self.regs, pin, divisor);
    }

    /// See [`try_set_prescaler`]
    pub fn try_set_prescaler(&mut self, pin: u8, divisor: u16) -> Result<Applied, PrescalerError> {
        try_set_prescaler::<B, R>(&mut self.regs, pin, divisor)
    }

    /// Get access to the underlying registers
    pub fn registers(&self) -> &R {
        &self.regs
    }

    /// Get mutable access to the underlying registers
    pub fn registers_mut(&mut self) -> &mut R {
        &mut self.regs
    }

    /// Consume the setter and return the registers
    pub fn into_inner(self) -> R {
        self.regs
    }
}
