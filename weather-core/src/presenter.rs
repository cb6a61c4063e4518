//! Turns a [`WeatherData`] snapshot into what the UI draws.
//!
//! Everything here is a pure function of its arguments: the day/night
//! decision reads the location's own `localtime` string and never the
//! system clock, and `now` is passed in by the caller.

use chrono::{DateTime, NaiveDateTime, Timelike, Utc};
use serde::Serialize;

use crate::{
    colors::SystemColor,
    icons::IconColorTable,
    model::{TemperatureUnit, WeatherData},
};

const LOCALTIME_FORMAT: &str = "%Y-%m-%d %H:%M";
const DAY_START_HOUR: u32 = 6;
const NIGHT_START_HOUR: u32 = 18;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresentationDescriptor {
    pub location_label: String,
    pub temperature_c: i64,
    pub temperature_f: i64,
    pub condition_text: String,
    pub icon_name: Option<String>,
    /// Symbolic color name, only set when it resolves to a known palette entry.
    pub color_name: Option<String>,
    #[serde(skip)]
    pub color: Option<SystemColor>,
    pub is_day: bool,
    pub updated_at: DateTime<Utc>,
}

impl PresentationDescriptor {
    /// Headline temperature in the unit picked by the caller.
    pub fn temperature(&self, unit: TemperatureUnit) -> i64 {
        match unit {
            TemperatureUnit::Celsius => self.temperature_c,
            TemperatureUnit::Fahrenheit => self.temperature_f,
        }
    }
}

pub fn present(
    data: &WeatherData,
    table: Option<&IconColorTable>,
    now: DateTime<Utc>,
) -> PresentationDescriptor {
    let is_day = is_day_time(&data.location.localtime);
    let code = data.current.condition.code;

    let mapping = table.and_then(|t| t.lookup(code));
    if mapping.is_none() {
        tracing::debug!(code, "No icon mapping for condition code");
    }

    let icon_name =
        mapping.map(|m| if is_day { m.icon_day.clone() } else { m.icon_night.clone() });

    let color = mapping.and_then(|m| {
        let name = if is_day { &m.color_day } else { &m.color_night };
        name.parse::<SystemColor>()
            .inspect_err(|e| tracing::debug!(code, "{e}, leaving background unchanged"))
            .ok()
    });

    PresentationDescriptor {
        location_label: format!("{}, {}", data.location.name, data.location.country),
        temperature_c: round_temperature(data.current.temp_c),
        temperature_f: round_temperature(data.current.temp_f),
        condition_text: data.current.condition.text.clone(),
        icon_name,
        color_name: color.map(|c| c.as_str().to_string()),
        color,
        is_day,
        updated_at: now,
    }
}

/// Day is 06:00 up to but excluding 18:00 local time. A `localtime` that is
/// not `yyyy-MM-dd HH:mm` counts as day.
pub fn is_day_time(localtime: &str) -> bool {
    match NaiveDateTime::parse_from_str(localtime.trim(), LOCALTIME_FORMAT) {
        Ok(dt) => (DAY_START_HOUR..NIGHT_START_HOUR).contains(&dt.hour()),
        Err(_) => true,
    }
}

/// Nearest integer, halves away from zero.
fn round_temperature(value: f64) -> i64 {
    value.round() as i64
}
