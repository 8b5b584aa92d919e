use std::fmt;

use serde::{Deserialize, Serialize};

/// Weather summary produced from a successful API response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    /// First token of the requested location.
    pub location_name: String,
    /// Fahrenheit temperature, truncated (not rounded) from the API value.
    pub temperature_f: i64,
}

impl fmt::Display for WeatherReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} weather:", self.location_name)?;
        write!(f, "{} degrees Fahrenheit", self.temperature_f)
    }
}
