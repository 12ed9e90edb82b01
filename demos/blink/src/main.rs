//! Blink example
//!
//! Toggles the onboard addressable LED of an ESP32-S3 devkit (GPIO48)
//! between the red preset and off, once per second.

#![no_std]
#![no_main]

use esp_backtrace as _;
use esp_hal::delay::Delay;
use esp_hal::rmt::{Channel, Error as RmtError, Rmt, TxChannelConfig, TxChannelCreator};
use esp_hal::time::Rate;
use esp_hal::Blocking;
use log::{error, info};

use rmt_led::{Preset, PulseChannel, PulseCode, RmtLed, FRAME_BITS, TICK_DURATION_NS};

esp_bootloader_esp_idf::esp_app_desc!();

/// RMT source clock. With an 8:1 divider this gives the 100 ns tick the
/// driver expects.
const RMT_CLOCK: Rate = Rate::from_mhz(80);
const RMT_CLOCK_DIVIDER: u8 = 8;

/// [`PulseChannel`] binding for an acquired RMT TX channel.
///
/// The channel is held in an `Option` because the blocking transmit API
/// consumes the channel and hands it back when the transaction completes.
struct RmtPulseChannel {
    channel: Option<Channel<Blocking, 0>>,
    tick_ns: u32,
}

impl RmtPulseChannel {
    fn new(channel: Channel<Blocking, 0>, tick_ns: u32) -> Self {
        Self {
            channel: Some(channel),
            tick_ns,
        }
    }
}

impl PulseChannel for RmtPulseChannel {
    type Error = RmtError;

    fn set_tick_duration(&mut self, nanos: u32) -> Result<(), RmtError> {
        // The tick is fixed by the clock divider chosen at channel setup;
        // reject a driver that expects a different one.
        if nanos != self.tick_ns {
            return Err(RmtError::InvalidArgument);
        }
        Ok(())
    }

    fn transmit(&mut self, pulses: &[PulseCode]) -> Result<(), RmtError> {
        // The hardware needs a terminating end-marker entry, which the
        // trailing zero slot provides.
        let mut data = [0u32; FRAME_BITS + 1];
        for (slot, code) in data.iter_mut().zip(pulses) {
            *slot = code.raw();
        }

        let channel = self.channel.take().ok_or(RmtError::TransmissionError)?;
        match channel.transmit(&data[..pulses.len() + 1]) {
            Ok(transaction) => match transaction.wait() {
                Ok(channel) => {
                    self.channel = Some(channel);
                    Ok(())
                }
                Err((e, channel)) => {
                    self.channel = Some(channel);
                    Err(e)
                }
            },
            Err(e) => Err(e),
        }
    }
}

#[esp_hal::main]
fn main() -> ! {
    esp_println::logger::init_logger_from_env();

    let peripherals = esp_hal::init(esp_hal::Config::default());
    let delay = Delay::new();

    let rmt = Rmt::new(peripherals.RMT, RMT_CLOCK).expect("RMT initialization failed");
    let channel = rmt
        .channel0
        .configure_tx(
            peripherals.GPIO48,
            TxChannelConfig::default().with_clk_divider(RMT_CLOCK_DIVIDER),
        )
        .expect("RMT channel configuration failed");

    let mut led = RmtLed::new(RmtPulseChannel::new(channel, TICK_DURATION_NS));
    info!("blinking the red preset on GPIO48");

    let mut lit = false;
    loop {
        let result = if lit {
            led.show_preset(Preset::Red)
        } else {
            led.clear()
        };
        if let Err(e) = result {
            error!("LED update failed: {:?}", e);
        }

        lit = !lit;
        delay.delay_millis(1000);
    }
}
