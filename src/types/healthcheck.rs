use serde::{Deserialize, Serialize};

/// Service availability as reported by `healthcheck`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct HealthcheckResult {
    #[serde(default)]
    pub maintenance_mode: bool,
    pub maintenance_message: Option<String>,
}
