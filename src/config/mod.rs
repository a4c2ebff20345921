use std::error::Error;
use std::fs;

pub mod app;
pub mod file;

const CAM_ABSOLUTE_MAX: i64 = 255;

pub fn load() -> Result<app::Config, Box<dyn Error>> {
    let file_config = xdg::BaseDirectories::with_prefix("autolight")
        .ok()
        .and_then(|dirs| dirs.find_config_file("config.toml"))
        .and_then(|path| fs::read_to_string(path).ok())
        .unwrap_or_else(|| include_str!("../../config.toml").to_string());

    let config = toml::from_str(&file_config)?;
    validate(config)
}

fn validate(config: file::Config) -> Result<app::Config, Box<dyn Error>> {
    if config.max_value <= 0 {
        Err(format!(
            "'max_value' must be greater than 0, got {}",
            config.max_value
        ))?;
    }

    if config.edge_threshold < 0 {
        Err(format!(
            "'edge_threshold' must not be negative, got {}",
            config.edge_threshold
        ))?;
    }

    Ok(app::Config {
        cam_max: config.max_value.min(CAM_ABSOLUTE_MAX) as u64,
        edge_threshold: config.edge_threshold as u64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> Result<app::Config, Box<dyn Error>> {
        validate(toml::from_str(toml)?)
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() -> Result<(), Box<dyn Error>> {
        let config = parse("")?;

        assert_eq!(255, config.cam_max);
        assert_eq!(10, config.edge_threshold);
        Ok(())
    }

    #[test]
    fn test_shipped_default_config_is_valid() {
        assert!(parse(include_str!("../../config.toml")).is_ok());
    }

    #[test]
    fn test_max_value_above_camera_scale_is_clamped() -> Result<(), Box<dyn Error>> {
        let config = parse("max_value = 300")?;

        assert_eq!(255, config.cam_max);
        Ok(())
    }

    #[test]
    fn test_zero_max_value_is_rejected() {
        assert!(parse("max_value = 0").is_err());
    }

    #[test]
    fn test_negative_max_value_is_rejected() {
        assert!(parse("max_value = -5").is_err());
    }

    #[test]
    fn test_negative_edge_threshold_is_rejected() {
        assert!(parse("edge_threshold = -1").is_err());
    }

    #[test]
    fn test_zero_edge_threshold_is_allowed() -> Result<(), Box<dyn Error>> {
        let config = parse("edge_threshold = 0")?;

        assert_eq!(0, config.edge_threshold);
        Ok(())
    }
}
