//! External sensor sample consumed by the reweighting transform.

use serde::{Deserialize, Serialize};

/// One reading from the external sensor feed.
///
/// Only the dynamic weight transform consumes this; the algorithm engines
/// never see sensor data directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorSample {
    pub pressure1: f64,
    pub pressure2: f64,
    #[serde(rename = "flowRate")]
    pub flow_rate: f64,
}

impl SensorSample {
    pub fn new(pressure1: f64, pressure2: f64, flow_rate: f64) -> Self {
        Self {
            pressure1,
            pressure2,
            flow_rate,
        }
    }
}
