//! PWM output frequency queries
//!
//! The resulting PWM frequency is the base frequency of the timer a request
//! resolves to, divided by the selected divisor. Base frequencies assume the
//! stock Arduino core timer setup on a 16 MHz part.
//!
//! On boards where a pin has more than one route, the divisor picks the
//! timer: on [`Enhanced`](crate::Enhanced), pins 3 and 11 use timer 0 for
//! the shared divisors and timer 4 for the extended ones.

use crate::board::Board;
use crate::error::PrescalerError;
use crate::prescaler::{resolve, timer_group};
use crate::timer::TimerGroup;

/// Undivided PWM frequency of `group` in Hz
pub fn timer_frequency_hz<B: Board>(group: TimerGroup) -> Option<u32> {
    B::BASE_FREQUENCIES
        .iter()
        .find(|&&(g, _)| g == group)
        .map(|&(_, hz)| hz)
}

/// Undivided PWM frequency of `pin`'s primary timer in Hz
pub fn base_frequency_hz<B: Board>(pin: u8) -> Option<u32> {
    timer_group::<B>(pin).and_then(timer_frequency_hz::<B>)
}

/// PWM frequency of `pin` after applying `divisor`, in whole Hz
///
/// Fails the same way [`try_set_prescaler`](crate::try_set_prescaler)
/// would for the same request.
pub fn pwm_frequency_hz<B: Board>(pin: u8, divisor: u16) -> Result<u32, PrescalerError> {
    let resolved = resolve::<B>(pin, divisor)?;
    let base = timer_frequency_hz::<B>(resolved.group).ok_or(PrescalerError::UnknownPin { pin })?;
    Ok(base / u32::from(resolved.divisor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Enhanced, Standard};

    #[test]
    fn test_standard_base_frequencies() {
        assert_eq!(base_frequency_hz::<Standard>(5), Some(62_500));
        assert_eq!(base_frequency_hz::<Standard>(6), Some(62_500));
        for pin in [3, 9, 10, 11] {
            assert_eq!(base_frequency_hz::<Standard>(pin), Some(31_250));
        }
        assert_eq!(base_frequency_hz::<Standard>(2), None);
    }

    #[test]
    fn test_enhanced_base_frequencies() {
        assert_eq!(base_frequency_hz::<Enhanced>(3), Some(64_500));
        assert_eq!(base_frequency_hz::<Enhanced>(11), Some(64_500));
        assert_eq!(base_frequency_hz::<Enhanced>(5), Some(31_250));
        assert_eq!(base_frequency_hz::<Enhanced>(6), None);
    }

    #[test]
    fn test_divided_frequency() {
        assert_eq!(pwm_frequency_hz::<Standard>(5, 64), Ok(976));
        assert_eq!(pwm_frequency_hz::<Standard>(9, 1), Ok(31_250));
        assert_eq!(pwm_frequency_hz::<Standard>(3, 32), Ok(976));
    }

    #[test]
    fn test_timer_frequencies() {
        assert_eq!(timer_frequency_hz::<Standard>(TimerGroup::Timer2), Some(31_250));
        assert_eq!(timer_frequency_hz::<Standard>(TimerGroup::Timer4), None);
        assert_eq!(timer_frequency_hz::<Enhanced>(TimerGroup::Timer4), Some(125_000));
    }

    #[test]
    fn test_extended_divisors_use_timer4() {
        // 64 is accepted by timer 0 first
        assert_eq!(pwm_frequency_hz::<Enhanced>(11, 64), Ok(1007));
        assert_eq!(pwm_frequency_hz::<Enhanced>(3, 2), Ok(62_500));
        assert_eq!(pwm_frequency_hz::<Enhanced>(11, 4096), Ok(30));
        assert_eq!(pwm_frequency_hz::<Enhanced>(3, 16384), Ok(7));
    }

    #[test]
    fn test_divided_frequency_errors() {
        assert_eq!(
            pwm_frequency_hz::<Standard>(9, 32),
            Err(PrescalerError::UnsupportedDivisor { pin: 9, divisor: 32 })
        );
        assert_eq!(
            pwm_frequency_hz::<Enhanced>(13, 1),
            Err(PrescalerError::UnknownPin { pin: 13 })
        );
    }
}
