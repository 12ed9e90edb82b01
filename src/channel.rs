//! Hardware seam for the pulse-transmit channel.
//!
//! The driver never touches registers directly; it talks to whatever
//! implements [`PulseChannel`]. On real hardware that is a thin wrapper
//! over an acquired RMT TX channel (see the blink demo); in unit tests it
//! is a mock that records transmitted frames.

use crate::pulse::PulseCode;

/// An acquired pulse-encoding transmit channel.
///
/// Implementations are blocking: [`transmit`](PulseChannel::transmit)
/// returns once the waveform has been queued/sent by the peripheral.
pub trait PulseChannel {
    /// Error reported by the underlying peripheral.
    type Error;

    /// Configure the duration of one RMT tick in nanoseconds.
    ///
    /// Called once during driver construction. A failure here leaves the
    /// driver inert.
    fn set_tick_duration(&mut self, nanos: u32) -> Result<(), Self::Error>;

    /// Transmit a pulse code sequence, blocking until it is sent.
    fn transmit(&mut self, pulses: &[PulseCode]) -> Result<(), Self::Error>;
}
