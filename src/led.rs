//! High-level driver for a single addressable RGB LED.
//!
//! [`RmtLed`] owns one configured [`PulseChannel`], a brightness ceiling,
//! a reusable frame buffer, and a small table of precomputed color presets.

use rgb::RGB8;

use crate::channel::PulseChannel;
use crate::error::LedError;
use crate::pulse::{self, Frame, PulseCode, FRAME_BITS, TICK_DURATION_NS};

/// Per-channel intensity used for the canonical presets (out of 255).
pub const PRESET_INTENSITY: u8 = 5;

/// Named slots in the preset table.
///
/// The first three slots are free for application-defined colors; the rest
/// are populated at construction with the canonical presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Preset {
    User0 = 0,
    User1 = 1,
    User2 = 2,
    Red = 3,
    Green = 4,
    Blue = 5,
    White = 6,
    Clear = 7,
}

impl Preset {
    /// Number of slots in the preset table.
    pub const COUNT: usize = 8;

    /// Table index of this preset.
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Driver for a single addressable RGB LED behind an RMT-style pulse channel.
///
/// Construction configures the channel tick duration and precomputes the
/// canonical presets. If tick configuration fails, the channel is dropped
/// and the driver becomes inert: every send returns
/// [`LedError::ChannelUnavailable`].
///
/// # Example
///
/// ```ignore
/// use rmt_led::{Preset, RmtLed};
///
/// // `channel` is any `PulseChannel` implementation
/// let mut led = RmtLed::new(channel);
///
/// led.set_color((0, 20, 0))?;
/// led.show_preset(Preset::Red)?;
/// led.clear()?;
/// ```
pub struct RmtLed<CH> {
    channel: Option<CH>,
    max_brightness: u8,
    frame: Frame,
    presets: [Frame; Preset::COUNT],
}

impl<CH> RmtLed<CH>
where
    CH: PulseChannel,
{
    /// Create a driver with no brightness limit.
    ///
    /// # Arguments
    /// * `channel` — acquired pulse channel (takes ownership for exclusive
    ///   access)
    pub fn new(channel: CH) -> Self {
        Self::with_max_brightness(channel, u8::MAX)
    }

    /// Create a driver with a brightness ceiling.
    ///
    /// Every channel value passed to [`set_color`](Self::set_color) or
    /// [`set_preset`](Self::set_preset) that reaches `max_brightness` is
    /// clamped to exactly that ceiling.
    pub fn with_max_brightness(mut channel: CH, max_brightness: u8) -> Self {
        let channel = match channel.set_tick_duration(TICK_DURATION_NS) {
            Ok(()) => Some(channel),
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("tick configuration failed; LED driver is inert");
                None
            }
        };

        let mut led = Self {
            channel,
            max_brightness,
            frame: [PulseCode::ZERO; FRAME_BITS],
            presets: [[PulseCode::ZERO; FRAME_BITS]; Preset::COUNT],
        };

        if led.channel.is_some() {
            led.set_preset(Preset::Red, (PRESET_INTENSITY, 0, 0));
            led.set_preset(Preset::Green, (0, PRESET_INTENSITY, 0));
            led.set_preset(Preset::Blue, (0, 0, PRESET_INTENSITY));
            led.set_preset(
                Preset::White,
                (PRESET_INTENSITY, PRESET_INTENSITY, PRESET_INTENSITY),
            );
            led.set_preset(Preset::Clear, (0, 0, 0));
        }

        led
    }

    // -----------------------------------------------------------------------
    // Send operations
    // -----------------------------------------------------------------------

    /// Set the LED to an RGB color.
    ///
    /// Channel values are clamped to the brightness ceiling, encoded into
    /// the reusable frame buffer, and transmitted.
    ///
    /// # Errors
    /// * [`LedError::ChannelUnavailable`] if the driver is inert
    /// * [`LedError::Transmit`] on peripheral failure
    pub fn set_color(&mut self, color: impl Into<RGB8>) -> Result<(), LedError<CH::Error>> {
        let clamped = self.clamp(color.into());
        pulse::encode_frame(clamped, &mut self.frame);

        let channel = self.channel.as_mut().ok_or(LedError::ChannelUnavailable)?;
        channel.transmit(&self.frame)?;
        Ok(())
    }

    /// Set the LED to a stored preset.
    pub fn show_preset(&mut self, preset: Preset) -> Result<(), LedError<CH::Error>> {
        let channel = self.channel.as_mut().ok_or(LedError::ChannelUnavailable)?;
        channel.transmit(&self.presets[preset.index()])?;
        Ok(())
    }

    /// Turn the LED off by transmitting the clear preset.
    pub fn clear(&mut self) -> Result<(), LedError<CH::Error>> {
        self.show_preset(Preset::Clear)
    }

    // -----------------------------------------------------------------------
    // Preset management
    // -----------------------------------------------------------------------

    /// Overwrite a preset's frame without transmitting it.
    ///
    /// Channel values are clamped to the brightness ceiling before encoding,
    /// like [`set_color`](Self::set_color).
    pub fn set_preset(&mut self, preset: Preset, color: impl Into<RGB8>) {
        let clamped = self.clamp(color.into());
        pulse::encode_frame(clamped, &mut self.presets[preset.index()]);
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// Whether the driver holds a configured channel.
    ///
    /// An inert driver fails every send with
    /// [`LedError::ChannelUnavailable`].
    pub fn is_active(&self) -> bool {
        self.channel.is_some()
    }

    /// The configured brightness ceiling.
    pub fn max_brightness(&self) -> u8 {
        self.max_brightness
    }

    /// Release the underlying channel, consuming the driver.
    ///
    /// Returns `None` if the driver was inert.
    pub fn release(self) -> Option<CH> {
        self.channel
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    /// Clamp each channel to the brightness ceiling.
    ///
    /// Values at or above the ceiling become exactly the ceiling; values
    /// below pass through unchanged.
    fn clamp(&self, color: RGB8) -> RGB8 {
        RGB8::new(
            color.r.min(self.max_brightness),
            color.g.min(self.max_brightness),
            color.b.min(self.max_brightness),
        )
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct MockError;

    /// Pulse channel stand-in that records every transmitted frame.
    #[derive(Default)]
    struct MockChannel {
        fail_configure: bool,
        fail_transmit: bool,
        tick: Option<u32>,
        sent: Vec<Frame, 8>,
    }

    impl PulseChannel for MockChannel {
        type Error = MockError;

        fn set_tick_duration(&mut self, nanos: u32) -> Result<(), MockError> {
            if self.fail_configure {
                return Err(MockError);
            }
            self.tick = Some(nanos);
            Ok(())
        }

        fn transmit(&mut self, pulses: &[PulseCode]) -> Result<(), MockError> {
            if self.fail_transmit {
                return Err(MockError);
            }
            assert_eq!(pulses.len(), FRAME_BITS);

            let mut frame = [PulseCode::ZERO; FRAME_BITS];
            frame.copy_from_slice(pulses);
            self.sent.push(frame).expect("mock transmit log full");
            Ok(())
        }
    }

    /// Expected frame for a color, bypassing the driver.
    fn encoded(color: (u8, u8, u8)) -> Frame {
        let mut frame = [PulseCode::ZERO; FRAME_BITS];
        pulse::encode_frame(RGB8::from(color), &mut frame);
        frame
    }

    fn inert_led() -> RmtLed<MockChannel> {
        let channel = MockChannel {
            fail_configure: true,
            ..Default::default()
        };
        RmtLed::new(channel)
    }

    // ── Construction ─────────────────────────────────────────────────

    #[test]
    fn construction_configures_tick_duration() {
        let led = RmtLed::new(MockChannel::default());
        assert!(led.is_active());

        let channel = led.release().unwrap();
        assert_eq!(channel.tick, Some(TICK_DURATION_NS));
    }

    #[test]
    fn construction_sends_nothing() {
        let led = RmtLed::new(MockChannel::default());
        assert!(led.release().unwrap().sent.is_empty());
    }

    #[test]
    fn default_max_brightness_is_full_scale() {
        let led = RmtLed::new(MockChannel::default());
        assert_eq!(led.max_brightness(), 255);
    }

    #[test]
    fn failed_configuration_yields_inert_driver() {
        let led = inert_led();
        assert!(!led.is_active());
        assert!(led.release().is_none());
    }

    // ── Color transmission ───────────────────────────────────────────

    #[test]
    fn set_color_transmits_encoded_frame() {
        let mut led = RmtLed::new(MockChannel::default());
        led.set_color((1, 2, 3)).unwrap();

        let sent = &led.release().unwrap().sent;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0], encoded((1, 2, 3)));
    }

    #[test]
    fn set_color_reuses_frame_buffer() {
        let mut led = RmtLed::new(MockChannel::default());
        led.set_color((10, 0, 0)).unwrap();
        led.set_color((0, 0, 10)).unwrap();

        let sent = &led.release().unwrap().sent;
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0], encoded((10, 0, 0)));
        assert_eq!(sent[1], encoded((0, 0, 10)));
    }

    #[test]
    fn set_color_accepts_rgb8() {
        let mut led = RmtLed::new(MockChannel::default());
        led.set_color(RGB8::new(4, 5, 6)).unwrap();

        let sent = &led.release().unwrap().sent;
        assert_eq!(sent[0], encoded((4, 5, 6)));
    }

    // ── Brightness clamping ──────────────────────────────────────────

    #[test]
    fn channels_above_ceiling_clamp_to_ceiling() {
        let mut led = RmtLed::with_max_brightness(MockChannel::default(), 10);
        led.set_color((200, 11, 3)).unwrap();

        let sent = &led.release().unwrap().sent;
        assert_eq!(sent[0], encoded((10, 10, 3)));
    }

    #[test]
    fn channel_at_exact_ceiling_stays_at_ceiling() {
        let mut led = RmtLed::with_max_brightness(MockChannel::default(), 10);
        led.set_color((10, 9, 10)).unwrap();

        let sent = &led.release().unwrap().sent;
        assert_eq!(sent[0], encoded((10, 9, 10)));
    }

    #[test]
    fn zero_ceiling_forces_all_channels_dark() {
        let mut led = RmtLed::with_max_brightness(MockChannel::default(), 0);
        led.set_color((255, 255, 255)).unwrap();

        let sent = &led.release().unwrap().sent;
        assert_eq!(sent[0], encoded((0, 0, 0)));
    }

    // ── Presets ──────────────────────────────────────────────────────

    #[test]
    fn canonical_presets_are_initialized() {
        let mut led = RmtLed::new(MockChannel::default());

        led.show_preset(Preset::Red).unwrap();
        led.show_preset(Preset::Green).unwrap();
        led.show_preset(Preset::Blue).unwrap();
        led.show_preset(Preset::White).unwrap();

        let sent = &led.release().unwrap().sent;
        assert_eq!(sent[0], encoded((PRESET_INTENSITY, 0, 0)));
        assert_eq!(sent[1], encoded((0, PRESET_INTENSITY, 0)));
        assert_eq!(sent[2], encoded((0, 0, PRESET_INTENSITY)));
        assert_eq!(
            sent[3],
            encoded((PRESET_INTENSITY, PRESET_INTENSITY, PRESET_INTENSITY))
        );
    }

    #[test]
    fn clear_transmits_all_zero_frame() {
        let mut led = RmtLed::new(MockChannel::default());
        led.clear().unwrap();

        let sent = &led.release().unwrap().sent;
        assert_eq!(sent[0], encoded((0, 0, 0)));
        assert!(sent[0].iter().all(|c| *c == PulseCode::ZERO));
    }

    #[test]
    fn set_preset_does_not_transmit() {
        let mut led = RmtLed::new(MockChannel::default());
        led.set_preset(Preset::User0, (7, 8, 9));

        assert!(led.release().unwrap().sent.is_empty());
    }

    #[test]
    fn set_preset_overwrites_slot() {
        let mut led = RmtLed::new(MockChannel::default());
        led.set_preset(Preset::Red, (40, 0, 0));
        led.show_preset(Preset::Red).unwrap();

        let sent = &led.release().unwrap().sent;
        assert_eq!(sent[0], encoded((40, 0, 0)));
    }

    #[test]
    fn user_presets_default_to_dark() {
        let mut led = RmtLed::new(MockChannel::default());
        led.show_preset(Preset::User1).unwrap();

        let sent = &led.release().unwrap().sent;
        assert_eq!(sent[0], encoded((0, 0, 0)));
    }

    #[test]
    fn set_preset_clamps_to_ceiling() {
        let mut led = RmtLed::with_max_brightness(MockChannel::default(), 10);
        led.set_preset(Preset::User2, (200, 5, 200));
        led.show_preset(Preset::User2).unwrap();

        let sent = &led.release().unwrap().sent;
        assert_eq!(sent[0], encoded((10, 5, 10)));
    }

    #[test]
    fn preset_table_covers_all_slots() {
        assert_eq!(Preset::COUNT, 8);

        let slots = [
            Preset::User0,
            Preset::User1,
            Preset::User2,
            Preset::Red,
            Preset::Green,
            Preset::Blue,
            Preset::White,
            Preset::Clear,
        ];
        for (expected, preset) in slots.iter().enumerate() {
            assert_eq!(preset.index(), expected);
        }
    }

    // ── Failure semantics ────────────────────────────────────────────

    #[test]
    fn inert_driver_fails_every_send() {
        let mut led = inert_led();

        assert_eq!(led.set_color((1, 2, 3)), Err(LedError::ChannelUnavailable));
        assert_eq!(led.show_preset(Preset::Red), Err(LedError::ChannelUnavailable));
        assert_eq!(led.clear(), Err(LedError::ChannelUnavailable));
    }

    #[test]
    fn inert_driver_still_stores_presets() {
        // Storing does not touch the channel, so it works either way.
        let mut led = inert_led();
        led.set_preset(Preset::User0, (1, 1, 1));
        assert_eq!(led.show_preset(Preset::User0), Err(LedError::ChannelUnavailable));
    }

    #[test]
    fn transmit_failure_surfaces_peripheral_error() {
        let channel = MockChannel {
            fail_transmit: true,
            ..Default::default()
        };
        let mut led = RmtLed::new(channel);

        assert_eq!(led.set_color((1, 2, 3)), Err(LedError::Transmit(MockError)));
        assert_eq!(led.clear(), Err(LedError::Transmit(MockError)));
    }
}
