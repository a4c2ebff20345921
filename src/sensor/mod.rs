#[cfg(test)]
use mockall::automock;
use std::error::Error;

pub mod webcam;

#[cfg_attr(test, automock)]
pub trait Sensor {
    /// Returns one fresh ambient light sample in `0..=255`.
    fn sample(&self) -> Result<u64, Box<dyn Error>>;
}
