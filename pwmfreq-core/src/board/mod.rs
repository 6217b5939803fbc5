//! Board variants
//!
//! Each supported board is a zero-sized type carrying its pin tables as
//! associated constants. The variant is fixed at build time; the prescaler
//! functions are generic over [`Board`] and monomorphised, so there is no
//! runtime dispatch.
//!
//! | Feature      | [`ActiveBoard`] |
//! |--------------|-----------------|
//! | `atmega32u4` | [`Enhanced`]    |
//! | otherwise    | [`Standard`]    |

mod enhanced;
mod standard;

pub use enhanced::Enhanced;
pub use standard::Standard;

use pwmfreq_hal::Register;

use crate::mode::ModeTable;
use crate::timer::TimerGroup;

#[cfg(all(feature = "atmega328p", feature = "atmega32u4"))]
compile_error!("features `atmega328p` and `atmega32u4` are mutually exclusive");

/// Board selected by the build configuration
#[cfg(feature = "atmega32u4")]
pub type ActiveBoard = Enhanced;

/// Board selected by the build configuration
#[cfg(not(feature = "atmega32u4"))]
pub type ActiveBoard = Standard;

/// One way of setting a pin's prescaler
///
/// The new register value is computed from `source` and written to
/// `target`. The two differ only where a board reproduces a legacy quirk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    /// Timer affected by the write
    pub group: TimerGroup,
    /// Register whose upper bits are preserved
    pub source: Register,
    /// Register that receives the new value
    pub target: Register,
    /// Divisors accepted on this route
    pub modes: &'static ModeTable,
}

impl Route {
    /// Route that reads and writes the group's own control register
    pub const fn direct(group: TimerGroup, modes: &'static ModeTable) -> Self {
        Self {
            group,
            source: group.register(),
            target: group.register(),
            modes,
        }
    }
}

/// Routes for one PWM pin, tried in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinEntry {
    /// Board pin number
    pub pin: u8,
    /// First route whose table accepts the divisor wins
    pub routes: &'static [Route],
}

/// Pins driven by one timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupEntry {
    /// The timer
    pub group: TimerGroup,
    /// Pins whose frequency it sets
    pub pins: &'static [u8],
}

/// Static description of a board's PWM prescaler wiring
pub trait Board {
    /// Human-readable board name
    const NAME: &'static str;

    /// Every pin whose prescaler can be set
    const PINS: &'static [PinEntry];

    /// Pins belonging to each timer
    const GROUPS: &'static [GroupEntry];

    /// Undivided PWM frequency of each timer, in Hz
    const BASE_FREQUENCIES: &'static [(TimerGroup, u32)];

    /// Look up a pin's routes
    fn pin(pin: u8) -> Option<&'static PinEntry> {
        Self::PINS.iter().find(|entry| entry.pin == pin)
    }

    /// Look up the pins on a timer
    fn group_pins(group: TimerGroup) -> &'static [u8] {
        Self::GROUPS
            .iter()
            .find(|entry| entry.group == group)
            .map(|entry| entry.pins)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_consistent<B: Board>() {
        for entry in B::PINS {
            assert!(!entry.routes.is_empty(), "{} pin {} has no routes", B::NAME, entry.pin);
            for route in entry.routes {
                assert!(
                    B::group_pins(route.group).contains(&entry.pin),
                    "{} pin {} missing from {:?}",
                    B::NAME,
                    entry.pin,
                    route.group
                );
                assert_eq!(route.target, route.group.register());
            }
        }
        for group in B::GROUPS {
            assert!(
                B::BASE_FREQUENCIES.iter().any(|&(g, _)| g == group.group),
                "{} has no base frequency for {:?}",
                B::NAME,
                group.group
            );
        }
        for group in B::GROUPS {
            for &pin in group.pins {
                assert!(B::pin(pin).is_some(), "{} pin {} has no entry", B::NAME, pin);
            }
        }
    }

    #[test]
    fn test_boards_consistent() {
        check_consistent::<Standard>();
        check_consistent::<Enhanced>();
    }

    #[test]
    fn test_direct_route() {
        let route = Route::direct(TimerGroup::Timer1, &crate::mode::PRESCALER_MODES);
        assert_eq!(route.source, Register::Tccr1b);
        assert_eq!(route.target, Register::Tccr1b);
    }

    #[cfg(not(feature = "atmega32u4"))]
    #[test]
    fn test_active_board_defaults_to_standard() {
        assert_eq!(ActiveBoard::NAME, Standard::NAME);
    }
}
