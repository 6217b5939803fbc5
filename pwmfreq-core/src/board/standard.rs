//! Standard AVR board (ATmega328P: Uno, Nano, Pro Mini)
//!
//! Pins 5 and 6 are on timer 0, pins 9 and 10 on timer 1, pins 3 and 11 on
//! timer 2.
//!
//! Changing pins 3, 5, 6 or 11 can break `delay()` and `millis()`, which run
//! off the same hardware on Arduino cores. Changing pins 9 or 10 breaks
//! servo pulse generation on timer 1.

use super::{Board, GroupEntry, PinEntry, Route};
use crate::mode::{PRESCALER_MODES, TIMER2_PRESCALER_MODES};
use crate::timer::TimerGroup;

const TIMER0: Route = Route::direct(TimerGroup::Timer0, &PRESCALER_MODES);
const TIMER1: Route = Route::direct(TimerGroup::Timer1, &PRESCALER_MODES);
const TIMER2: Route = Route::direct(TimerGroup::Timer2, &TIMER2_PRESCALER_MODES);

/// Standard three-timer board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Standard;

impl Board for Standard {
    const NAME: &'static str = "standard";

    const PINS: &'static [PinEntry] = &[
        PinEntry { pin: 3, routes: &[TIMER2] },
        PinEntry { pin: 5, routes: &[TIMER0] },
        PinEntry { pin: 6, routes: &[TIMER0] },
        PinEntry { pin: 9, routes: &[TIMER1] },
        PinEntry { pin: 10, routes: &[TIMER1] },
        PinEntry { pin: 11, routes: &[TIMER2] },
    ];

    const GROUPS: &'static [GroupEntry] = &[
        GroupEntry { group: TimerGroup::Timer0, pins: &[5, 6] },
        GroupEntry { group: TimerGroup::Timer1, pins: &[9, 10] },
        GroupEntry { group: TimerGroup::Timer2, pins: &[3, 11] },
    ];

    // Timer 0 runs fast PWM, timers 1 and 2 phase-correct PWM
    const BASE_FREQUENCIES: &'static [(TimerGroup, u32)] = &[
        (TimerGroup::Timer0, 62_500),
        (TimerGroup::Timer1, 31_250),
        (TimerGroup::Timer2, 31_250),
    ];
}
