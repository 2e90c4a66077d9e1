//! IIR filter demo firmware
//!
//! Runs a unit impulse through a DC blocker, lowpass cascade and allpass
//! chain on the target and logs the response over RTT.

#![no_std]
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use iir_filters::prelude::*;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("IIR filter demo v{}", env!("CARGO_PKG_VERSION"));

    let _p = embassy_stm32::init(embassy_stm32::Config::default());

    let lowpass: Cascade<DEMO_CASCADE_SECTIONS> =
        match Cascade::from_coeffs(&[DEMO_LOWPASS; 2]) {
            Ok(cascade) => cascade,
            Err(e) => {
                defmt::error!("Cascade setup failed: {}", e);
                Cascade::new()
            }
        };
    info!("Lowpass {} at {} Hz", lowpass, DEMO_SAMPLE_RATE);

    let mut chain = DcBlocker::default()
        .then(lowpass)
        .then(FirstOrderAllpass::new(DEMO_ALLPASS_COEFF));

    for n in 0..DEMO_IMPULSE_LEN {
        let x = if n == 0 { 1.0 } else { 0.0 };
        let y = chain.process(x);
        info!("h[{}] = {}", n, y);
    }

    chain.reset();
    info!("Chain reset, silent: {}", chain.is_silent());

    loop {
        Timer::after(Duration::from_secs(10)).await;
        info!("Main loop tick");
    }
}
