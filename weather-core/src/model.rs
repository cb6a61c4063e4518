use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// One decoded `current.json` response. Replaced wholesale on every fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherData {
    pub location: Location,
    pub current: Current,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub country: String,
    /// Wall clock of the location, `yyyy-MM-dd HH:mm`.
    pub localtime: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Current {
    pub temp_c: f64,
    pub temp_f: f64,
    pub condition: Condition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub text: String,
    pub code: i64,
}

/// What to ask the API for: a city name or a pair of coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeatherQuery {
    City(String),
    Coordinates { lat: String, long: String },
}

impl WeatherQuery {
    pub fn city(name: impl Into<String>) -> Self {
        WeatherQuery::City(name.into())
    }

    pub fn coordinates(lat: impl Into<String>, long: impl Into<String>) -> Self {
        WeatherQuery::Coordinates { lat: lat.into(), long: long.into() }
    }
}

impl fmt::Display for WeatherQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeatherQuery::City(name) => f.write_str(name),
            WeatherQuery::Coordinates { lat, long } => write!(f, "{lat},{long}"),
        }
    }
}

/// Unit used for the headline temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Maps a unit selector position (0 = Celsius, 1 = Fahrenheit).
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(TemperatureUnit::Celsius),
            1 => Some(TemperatureUnit::Fahrenheit),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "c" | "celsius" => Ok(TemperatureUnit::Celsius),
            "f" | "fahrenheit" => Ok(TemperatureUnit::Fahrenheit),
            _ => Err(anyhow::anyhow!(
                "Unknown temperature unit '{value}'. Supported units: celsius, fahrenheit."
            )),
        }
    }
}
