//! RMT pulse code definitions and frame encoding.
//!
//! The RMT peripheral describes a waveform as a sequence of 32-bit pulse
//! codes, each holding two (level, duration) pairs:
//!
//! ```text
//! bit 31    | bits 30..16 | bit 15    | bits 14..0
//! level1    | duration1   | level0    | duration0
//! ```
//!
//! Durations are counted in RMT ticks. At the 100 ns tick this driver
//! configures, a WS2812-class LED bit becomes one pulse code: a "1" bit is
//! 800 ns high / 400 ns low, a "0" bit is 400 ns high / 800 ns low.

use rgb::RGB8;

/// Pulse codes per color frame: 3 channels (green, red, blue), 8 bits each.
pub const FRAME_BITS: usize = 24;

/// RMT tick duration in nanoseconds, applied at driver construction.
pub const TICK_DURATION_NS: u32 = 100;

/// A frame of pulse codes encoding one RGB triple.
pub type Frame = [PulseCode; FRAME_BITS];

/// One RMT waveform entry: two level/duration pairs packed into 32 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseCode(u32);

impl PulseCode {
    /// Pattern for a "1" data bit: 8 ticks high, 4 ticks low.
    pub const ONE: PulseCode = PulseCode::new(true, 8, false, 4);

    /// Pattern for a "0" data bit: 4 ticks high, 8 ticks low.
    pub const ZERO: PulseCode = PulseCode::new(true, 4, false, 8);

    /// Build a pulse code from two level/duration pairs.
    ///
    /// Durations are in RMT ticks and must fit in 15 bits.
    pub const fn new(level0: bool, duration0: u16, level1: bool, duration1: u16) -> Self {
        assert!(duration0 < (1 << 15));
        assert!(duration1 < (1 << 15));

        PulseCode(
            duration0 as u32
                | ((level0 as u32) << 15)
                | ((duration1 as u32) << 16)
                | ((level1 as u32) << 31),
        )
    }

    /// Raw 32-bit value in the peripheral's register layout.
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Pack an RGB triple into the lower 24 bits of a `u32`.
///
/// The LED expects green first on the wire, so the layout is
/// `(green << 16) | (red << 8) | blue`.
pub(crate) fn pack_channels(color: RGB8) -> u32 {
    ((color.g as u32) << 16) | ((color.r as u32) << 8) | color.b as u32
}

/// Expand a color into its pulse code frame, most significant bit first.
pub(crate) fn encode_frame(color: RGB8, frame: &mut Frame) {
    let packed = pack_channels(color);

    for (bit, code) in frame.iter_mut().enumerate() {
        *code = if packed & (1 << (FRAME_BITS - bit - 1)) != 0 {
            PulseCode::ONE
        } else {
            PulseCode::ZERO
        };
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────
