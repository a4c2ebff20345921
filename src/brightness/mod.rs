#[cfg(test)]
use mockall::automock;
use std::error::Error;

pub mod qdbus;

#[cfg_attr(test, automock)]
pub trait Brightness {
    /// Applies the given value on the display and returns it back.
    fn set(&self, value: u64) -> Result<u64, Box<dyn Error>>;
}
