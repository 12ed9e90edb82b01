//! Driver for a single addressable RGB LED behind the ESP32 RMT peripheral.
//!
//! The RMT peripheral generates precisely timed pulse trains; this crate
//! repurposes it to emit the bit patterns a WS2812-class LED expects.
//!
//! # Architecture
//!
//! The crate is split into three layers:
//!
//! - **`pulse`** — Pulse code layout and the expansion of an RGB triple
//!   into its 24-entry waveform frame.
//! - **[`PulseChannel`]** — Hardware seam. The crate itself is
//!   hardware-free; a thin wrapper over an acquired RMT TX channel lives
//!   with the application (see the blink demo under `demos/`).
//! - **[`RmtLed`]** — Validated, high-level API: brightness clamping,
//!   the preset table, and the send operations.
//!
//! # Quick start
//!
//! ```ignore
//! use rmt_led::{Preset, RmtLed};
//!
//! // Construct with any `PulseChannel` implementation
//! let mut led = RmtLed::with_max_brightness(channel, 64);
//!
//! led.set_color((0, 20, 0))?;   // dim green
//! led.show_preset(Preset::Red)?;
//! led.clear()?;
//! ```
//!
//! # Features
//!
//! - **`defmt`** — Enable [`defmt::Format`] implementations on error and
//!   data types for embedded logging.

#![no_std]

pub use channel::PulseChannel;
pub use error::LedError;
pub use led::{Preset, RmtLed, PRESET_INTENSITY};
pub use pulse::{Frame, PulseCode, FRAME_BITS, TICK_DURATION_NS};
pub use rgb::RGB8;

mod channel;
mod error;
mod led;
mod pulse;
