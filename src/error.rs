//! Error types for the LED driver.

use core::fmt;

/// Errors that can occur when driving the LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedError<E> {
    /// The pulse channel could not be configured at construction; the
    /// driver is inert and every send fails with this error.
    ChannelUnavailable,

    /// Underlying peripheral error during transmission.
    Transmit(E),
}

// Allow ergonomic `?` propagation from raw channel errors.
impl<E> From<E> for LedError<E> {
    fn from(error: E) -> Self {
        LedError::Transmit(error)
    }
}

impl<E: fmt::Debug> fmt::Display for LedError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LedError::ChannelUnavailable => write!(f, "pulse channel unavailable"),
            LedError::Transmit(e) => write!(f, "transmit error: {:?}", e),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for LedError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            LedError::ChannelUnavailable => defmt::write!(f, "pulse channel unavailable"),
            LedError::Transmit(e) => defmt::write!(f, "transmit error: {}", e),
        }
    }
}
