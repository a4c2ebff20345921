#[derive(Debug, Clone, Copy)]
pub struct Config {
    /// Upper bound of the camera intensity range, always in `1..=255`.
    pub cam_max: u64,
    /// Half-width of the tolerance band around the last accepted sample.
    pub edge_threshold: u64,
}
