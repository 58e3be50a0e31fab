#![no_std]
#![no_main]

mod peripherals;
mod system;

// Panic handler and debugging
use defmt::unwrap;

use defmt_rtt as _;
use panic_probe as _;

// Device
use embassy_executor::Spawner;
use embassy_nrf::{
    bind_interrupts,
    gpio::{Level, Output, OutputDrive},
    peripherals::SPI2,
    spim,
};
use embassy_sync::{blocking_mutex::raw::ThreadModeRawMutex, signal::Signal};
use embassy_time::{Duration, Timer};

bind_interrupts!(struct Irqs {
    SPIM2_SPIS2_SPI2 => spim::InterruptHandler<SPI2>;
});

// Crate
use peripherals::{
    backlight::{Backlight, BacklightPins},
    display::Display,
};
use pinetime_watchface::{
    BundledResources, ClockStyle, DefaultWatchface, Event, WatchFaceState, Window,
};
use system::{
    config::{SystemConfig, BACKLIGHT_LEVEL, CLOCK_24H, TIMEZONE, WEEKDAY_NAMES},
    time::TimeManager,
};

// Others
use chrono::{NaiveDateTime, Timelike};

// Include current UTC epoch at compile time
include!(concat!(env!("OUT_DIR"), "/utc.rs"));

// Communication channels
static TIME: Signal<ThreadModeRawMutex, NaiveDateTime> = Signal::new();

fn watchface_state(time: NaiveDateTime) -> WatchFaceState {
    WatchFaceState::new(time, ClockStyle::from_24h_flag(CLOCK_24H))
        .with_weekday_names(WEEKDAY_NAMES)
}

/// Publish the local time once now and then at every full minute.
#[embassy_executor::task(pool_size = 1)]
async fn update_time(clock: TimeManager) {
    loop {
        let now = clock.get_time();
        defmt::info!("Time updated: {}:{}", now.hour(), now.minute());

        // Send time to channel
        TIME.signal(now);

        // Sleep until the next minute starts
        let remaining = 60 - now.second() as u64;
        Timer::after(Duration::from_secs(remaining)).await;
    }
}

/// Own the window and redraw it whenever a tick changed it.
#[embassy_executor::task(pool_size = 1)]
async fn update_lcd(mut display: Display<SPI2>) {
    let mut resources = BundledResources::new();
    let mut window: Window<DefaultWatchface> = Window::default();

    let time = TIME.wait().await;
    if let Err(err) = window.handle(Event::Load(watchface_state(time)), &mut resources) {
        // No fallback rendering without the bundled assets
        defmt::panic!("Failed to load watchface: {}", err);
    }

    loop {
        if window.is_dirty() && window.draw(display.lcd()).is_err() {
            defmt::error!("Failed to draw watchface");
        }

        let time = TIME.wait().await;
        if let Err(err) = window.handle(Event::Tick(watchface_state(time)), &mut resources) {
            defmt::error!("Failed to update watchface: {}", err);
        }
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(SystemConfig::new());
    defmt::info!("Initializing");

    // Initialize SPI
    let mut spim_config = spim::Config::default();
    // Use SPI at 8MHz (the fastest clock available on the nRF52832),
    // otherwise refreshing will be super slow.
    spim_config.frequency = spim::Frequency::M8;
    // SPI must be used in mode 3. Mode 0 (the default) won't work.
    spim_config.mode = spim::MODE_3;

    let spim = spim::Spim::new(p.SPI2, Irqs, p.P0_02, p.P0_04, p.P0_03, spim_config);

    // Initialize Backlight
    let backlight = Backlight::init(BacklightPins::init(
        Output::new(p.P0_14, Level::High, OutputDrive::Standard),
        Output::new(p.P0_22, Level::High, OutputDrive::Standard),
        Output::new(p.P0_23, Level::High, OutputDrive::Standard),
    ));

    // Initialize LCD
    let mut display = Display::init(
        spim,
        Output::new(p.P0_25, Level::Low, OutputDrive::Standard),
        Output::new(p.P0_18, Level::Low, OutputDrive::Standard),
        Output::new(p.P0_26, Level::Low, OutputDrive::Standard),
        backlight,
    );
    if display.set_brightness(BACKLIGHT_LEVEL).is_err() {
        defmt::warn!("Invalid backlight level {}", BACKLIGHT_LEVEL);
    }

    // Initialize clock from the build time
    let clock = TimeManager::init(UTC_EPOCH, TIMEZONE);

    defmt::info!("Initialization finished");

    // Schedule tasks
    unwrap!(spawner.spawn(update_lcd(display)));
    unwrap!(spawner.spawn(update_time(clock)));
}
