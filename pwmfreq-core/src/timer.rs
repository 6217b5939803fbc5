//! Hardware timer groups

use pwmfreq_hal::Register;

/// A hardware timer and the PWM pins it drives
///
/// Every pin in a group shares one prescaler setting: changing it through
/// one pin changes the frequency of all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerGroup {
    /// Timer/Counter0, also the `millis()`/`delay()` time base on Arduino cores
    Timer0,
    /// Timer/Counter1 (16-bit), also used for servo pulse generation
    Timer1,
    /// Timer/Counter2 (ATmega328P only)
    Timer2,
    /// Timer/Counter3 (ATmega32u4 only)
    Timer3,
    /// High-speed Timer/Counter4 (ATmega32u4 only)
    Timer4,
}

impl TimerGroup {
    /// Control register holding this timer's clock-select bits
    pub const fn register(self) -> Register {
        match self {
            TimerGroup::Timer0 => Register::Tccr0b,
            TimerGroup::Timer1 => Register::Tccr1b,
            TimerGroup::Timer2 => Register::Tccr2b,
            TimerGroup::Timer3 => Register::Tccr3b,
            TimerGroup::Timer4 => Register::Tccr4b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registers() {
        assert_eq!(TimerGroup::Timer0.register(), Register::Tccr0b);
        assert_eq!(TimerGroup::Timer2.register(), Register::Tccr2b);
        assert_eq!(TimerGroup::Timer4.register(), Register::Tccr4b);
    }
}
