//! Prescaler lookup errors

/// Why a prescaler request was rejected
///
/// [`set_prescaler`](crate::set_prescaler) discards these; the `try_`
/// variants return them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PrescalerError {
    /// Pin has no settable PWM timer on this board
    UnknownPin { pin: u8 },
    /// Divisor not supported by the pin's timer
    UnsupportedDivisor { pin: u8, divisor: u16 },
}

impl core::fmt::Display for PrescalerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PrescalerError::UnknownPin { pin } => write!(f, "pin {} has no PWM timer", pin),
            PrescalerError::UnsupportedDivisor { pin, divisor } => {
                write!(f, "divisor {} not supported on pin {}", divisor, pin)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;
    use heapless::String;

    #[test]
    fn test_display() {
        let mut out: String<64> = String::new();
        write!(out, "{}", PrescalerError::UnknownPin { pin: 2 }).unwrap();
        assert_eq!(out.as_str(), "pin 2 has no PWM timer");

        out.clear();
        write!(out, "{}", PrescalerError::UnsupportedDivisor { pin: 9, divisor: 3 }).unwrap();
        assert_eq!(out.as_str(), "divisor 3 not supported on pin 9");
    }
}
