//! Enhanced board (ATmega32u4: Leonardo, Micro)
//!
//! Pins 3 and 11 are on timer 0, pins 9 and 10 on timer 1, pin 5 alone on
//! timer 3. Pins 3 and 11 additionally accept the extended power-of-two
//! divisors of the high-speed timer 4; those divisors are written to
//! `TCCR4B` with its 4-bit clock-select field.
//!
//! Timer 0 also drives `millis()` and `delay()` on Arduino cores, so
//! changing pins 3 or 11 affects them.
//!
//! # Timer 0 quirk
//!
//! The register value written to `TCCR0B` for pins 3 and 11 keeps the upper
//! bits of `TCCR1B`, not of `TCCR0B`. Existing sketches depend on the exact
//! register contents this produces, so the behaviour is kept.

use pwmfreq_hal::Register;

use super::{Board, GroupEntry, PinEntry, Route};
use crate::mode::{PRESCALER_MODES, TIMER4_PRESCALER_MODES};
use crate::timer::TimerGroup;

const TIMER0: Route = Route {
    group: TimerGroup::Timer0,
    source: Register::Tccr1b,
    target: Register::Tccr0b,
    modes: &PRESCALER_MODES,
};
const TIMER1: Route = Route::direct(TimerGroup::Timer1, &PRESCALER_MODES);
const TIMER3: Route = Route::direct(TimerGroup::Timer3, &PRESCALER_MODES);
const TIMER4: Route = Route::direct(TimerGroup::Timer4, &TIMER4_PRESCALER_MODES);

/// ATmega32u4 board with the high-speed timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Enhanced;

impl Board for Enhanced {
    const NAME: &'static str = "enhanced";

    const PINS: &'static [PinEntry] = &[
        PinEntry { pin: 3, routes: &[TIMER0, TIMER4] },
        PinEntry { pin: 5, routes: &[TIMER3] },
        PinEntry { pin: 9, routes: &[TIMER1] },
        PinEntry { pin: 10, routes: &[TIMER1] },
        PinEntry { pin: 11, routes: &[TIMER0, TIMER4] },
    ];

    const GROUPS: &'static [GroupEntry] = &[
        GroupEntry { group: TimerGroup::Timer0, pins: &[3, 11] },
        GroupEntry { group: TimerGroup::Timer1, pins: &[9, 10] },
        GroupEntry { group: TimerGroup::Timer3, pins: &[5] },
        GroupEntry { group: TimerGroup::Timer4, pins: &[3, 11] },
    ];

    const BASE_FREQUENCIES: &'static [(TimerGroup, u32)] = &[
        (TimerGroup::Timer0, 64_500),
        (TimerGroup::Timer1, 31_250),
        (TimerGroup::Timer3, 31_250),
        (TimerGroup::Timer4, 125_000),
    ];
}
