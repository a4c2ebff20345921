use itertools::Itertools;
use std::error::Error;
use v4l::buffer::Type;
use v4l::io::mmap::Stream;
use v4l::io::traits::CaptureStream;
use v4l::video::Capture;
use v4l::{Device, FourCC};

const VIDEO_DEVICE: usize = 0;

pub struct Webcam {}

impl Webcam {
    pub fn new() -> Self {
        Self {}
    }

    // The device handle is scoped to this call, nothing stays open
    // between cycles.
    fn frame(&self) -> Result<Vec<u8>, Box<dyn Error>> {
        let device = Device::new(VIDEO_DEVICE)
            .map_err(|e| format!("Unable to open video device {VIDEO_DEVICE}: {e}"))?;
        Self::setup(&device)?;

        let mut stream = Stream::new(&device, Type::VideoCapture)?;
        let (rgbs, _) = stream
            .next()
            .map_err(|e| format!("Unable to capture frame: {e}"))?;

        Ok(rgbs.to_vec())
    }

    fn setup(device: &Device) -> Result<(), Box<dyn Error>> {
        let mut format = device.format()?;
        format.fourcc = FourCC::new(b"RGB3");

        // The smallest advertised resolution is plenty for a mean.
        let (width, height) = device
            .enum_framesizes(format.fourcc)?
            .into_iter()
            .flat_map(|f| {
                f.size
                    .to_discrete()
                    .into_iter()
                    .map(|d| (d.width, d.height))
                    .collect_vec()
            })
            .min_by(|&(w1, h1), &(w2, h2)| h1.cmp(&h2).then(w1.cmp(&w2)))
            .ok_or("Unable to find minimum resolution")?;

        format.width = width;
        format.height = height;
        device.set_format(&format)?;

        Ok(())
    }
}

impl super::Sensor for Webcam {
    fn sample(&self) -> Result<u64, Box<dyn Error>> {
        let rgbs = self.frame()?;
        let intensity = mean_luminance(&rgbs);

        log::trace!("Sensor (webcam): {}", intensity);
        Ok(intensity)
    }
}

/// Mean Rec. 601 luma over all pixels of an RGB3 buffer, in `0..=255`.
fn mean_luminance(rgbs: &[u8]) -> u64 {
    let pixels = (rgbs.len() / 3) as u64;
    if pixels == 0 {
        return 0;
    }

    let total: u64 = rgbs
        .chunks_exact(3)
        .map(|px| (299 * px[0] as u64 + 587 * px[1] as u64 + 114 * px[2] as u64) / 1000)
        .sum();

    total / pixels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_luminance_of_empty_frame_is_zero() {
        assert_eq!(0, mean_luminance(&[]));
    }

    #[test]
    fn test_mean_luminance_of_uniform_gray_is_that_gray() {
        assert_eq!(128, mean_luminance(&[128; 3 * 10]));
    }

    #[test]
    fn test_mean_luminance_stays_within_camera_scale() {
        assert_eq!(255, mean_luminance(&[255; 3 * 4]));
    }

    #[test]
    fn test_mean_luminance_weights_channels_by_perception() {
        assert!(mean_luminance(&[0, 255, 0]) > mean_luminance(&[255, 0, 0]));
        assert!(mean_luminance(&[255, 0, 0]) > mean_luminance(&[0, 0, 255]));
    }
}
