use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SinkConfig {
    pub control_program: String,
    /// Device tokens advertised in the help text.
    pub known_devices: Vec<String>,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            control_program: "pacmd".to_string(),
            known_devices: vec!["corsair".to_string(), "analog".to_string()],
        }
    }
}
