use crate::brightness::Brightness;
use crate::config;
use crate::sensor::Sensor;
use std::error::Error;
use std::thread;
use std::time::Duration;

const SLEEP_INTERVAL_MS: u64 = 3000;

// Brightness units understood by the display, distinct from the
// camera's 0-255 intensity scale.
const SCREEN_MIN: u64 = 1067;
const SCREEN_MAX: u64 = 21333;

pub struct Controller {
    sensor: Box<dyn Sensor>,
    brightness: Box<dyn Brightness>,
    cam_max: u64,
    edge_threshold: u64,
    last_value: u64,
}

impl Controller {
    pub fn new(
        sensor: Box<dyn Sensor>,
        brightness: Box<dyn Brightness>,
        config: config::app::Config,
    ) -> Self {
        Self {
            sensor,
            brightness,
            cam_max: config.cam_max,
            edge_threshold: config.edge_threshold,
            last_value: 0,
        }
    }

    pub fn run(&mut self) -> Result<(), Box<dyn Error>> {
        loop {
            thread::sleep(Duration::from_millis(SLEEP_INTERVAL_MS));
            self.step()?;
        }
    }

    fn step(&mut self) -> Result<(), Box<dyn Error>> {
        let sample = self.sensor.sample()?;

        if !outside_band(sample, self.last_value, self.edge_threshold) {
            log::trace!(
                "Sample '{}' is within the band around '{}', nothing to do",
                sample,
                self.last_value
            );
            return Ok(());
        }

        // The anchor moves as soon as the gate triggers, even if the
        // actuation below is skipped or fails.
        self.last_value = sample;
        self.apply(sample);

        Ok(())
    }

    fn apply(&mut self, sample: u64) {
        let brightness = self.to_brightness(sample);

        if !(SCREEN_MIN..=SCREEN_MAX).contains(&brightness) {
            log::error!(
                "Brightness value '{}' is outside of [{}, {}], skipping",
                brightness,
                SCREEN_MIN,
                SCREEN_MAX
            );
            return;
        }

        match self.brightness.set(brightness) {
            Ok(value) => log::debug!("Brightness set to '{}' (sample '{}')", value, sample),
            Err(err) => log::error!("Unable to set brightness to '{}': {:?}", brightness, err),
        };
    }

    // Truncating integer scaling; 0 and cam_max land exactly on the
    // ends of the screen range.
    fn to_brightness(&self, signal: u64) -> u64 {
        signal.min(self.cam_max) * (SCREEN_MAX - SCREEN_MIN) / self.cam_max + SCREEN_MIN
    }
}

// Written without subtraction so the band around small anchors cannot
// underflow; `last = 0` behaves as the band `[-threshold, threshold]`.
fn outside_band(sample: u64, last: u64, threshold: u64) -> bool {
    sample + threshold < last || sample > last + threshold
}
