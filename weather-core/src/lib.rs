//! Core library for the `weather` client.
//!
//! This crate defines:
//! - The weatherapi.com data model and fetcher
//! - The condition code → icon/color table
//! - The presenter that derives what to draw from a weather snapshot
//! - Caller-side view state with request fencing
//! - Configuration & credentials handling
//!
//! It is used by `weather-cli`, but can also be reused by other front ends.

pub mod colors;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod icons;
pub mod location;
pub mod model;
pub mod presenter;
pub mod session;

pub use colors::SystemColor;
pub use config::Config;
pub use error::{FetchError, LoadError, LocationError};
pub use fetcher::{WeatherFetcher, WeatherSource};
pub use icons::{IconColorMapping, IconColorTable};
pub use location::{Coordinates, LocationReceiver, LocationSender, location_channel};
pub use model::{Condition, Current, Location, TemperatureUnit, WeatherData, WeatherQuery};
pub use presenter::{PresentationDescriptor, is_day_time, present};
pub use session::{Placeholder, RequestId, ViewState, WeatherSession};
