use serde::Deserialize;

// Raw values as they appear in the file; signed so that out-of-range
// values reach validation instead of failing deserialization.
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Config {
    pub max_value: i64,
    pub edge_threshold: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_value: 255,
            edge_threshold: 10,
        }
    }
}
