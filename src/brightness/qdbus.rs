use std::error::Error;
use std::process::Command;

const QDBUS: &str = "/usr/bin/qdbus";
const SERVICE: &str = "org.kde.Solid.PowerManagement";
const OBJECT: &str = "/org/kde/Solid/PowerManagement/Actions/BrightnessControl";
const METHOD: &str = "org.kde.Solid.PowerManagement.Actions.BrightnessControl.setBrightnessSilent";

pub struct Qdbus {}

impl Qdbus {
    pub fn new() -> Self {
        Self {}
    }
}

impl super::Brightness for Qdbus {
    fn set(&self, value: u64) -> Result<u64, Box<dyn Error>> {
        let status = Command::new(QDBUS)
            .args([SERVICE, OBJECT, METHOD])
            .arg(value.to_string())
            .status()
            .map_err(|e| format!("Unable to run {QDBUS}: {e}"))?;

        if !status.success() {
            Err(format!("Command {QDBUS:?} failed: {status}"))?;
        }

        log::trace!("Brightness (qdbus): {}", value);
        Ok(value)
    }
}
