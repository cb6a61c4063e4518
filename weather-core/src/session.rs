//! Caller-side view state: `Idle -> Loading -> Displayed | Error`.
//!
//! The caller owns a [`WeatherSession`] and feeds it fetch results. Every
//! request is tagged with a [`RequestId`]; a result for anything but the most
//! recent request is dropped, so a slow response can't overwrite a newer one.

use chrono::{DateTime, Utc};

use crate::{
    error::{FetchError, LocationError},
    icons::IconColorTable,
    model::WeatherData,
    presenter::{PresentationDescriptor, present},
};

pub const LOADING_TEXT: &str = "Loading...";
pub const LOADING_ICON: &str = "arrow.triangle.2.circlepath.icloud";
pub const ERROR_ICON: &str = "exclamationmark.icloud";
pub const ERROR_CONDITION_TEXT: &str = "Oops";
pub const ERROR_TEMPERATURE_TEXT: &str = "--";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Displayed(PresentationDescriptor),
    Error(String),
}

/// Text shown instead of weather while loading or after a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub location_text: String,
    /// `None` hides the temperature row.
    pub temperature_text: Option<&'static str>,
    pub icon_name: &'static str,
    pub condition_text: &'static str,
}

#[derive(Debug, Default)]
pub struct WeatherSession {
    last_issued: u64,
    pending: Option<RequestId>,
    state: ViewState,
    data: Option<WeatherData>,
}

impl WeatherSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new request. Any request still in flight becomes stale.
    pub fn begin(&mut self) -> RequestId {
        self.last_issued += 1;
        let id = RequestId(self.last_issued);
        self.pending = Some(id);
        self.state = ViewState::Loading;
        id
    }

    fn accept(&mut self, id: RequestId) -> bool {
        if self.pending != Some(id) {
            tracing::debug!(?id, pending = ?self.pending, "Discarding stale weather result");
            return false;
        }
        self.pending = None;
        true
    }

    /// Applies the outcome of request `id`. Returns `false` if the result was
    /// stale and ignored.
    pub fn complete(
        &mut self,
        id: RequestId,
        result: Result<WeatherData, FetchError>,
        table: Option<&IconColorTable>,
        now: DateTime<Utc>,
    ) -> bool {
        if !self.accept(id) {
            return false;
        }

        match result {
            Ok(data) => {
                self.state = ViewState::Displayed(present(&data, table, now));
                self.data = Some(data);
            }
            Err(e) => {
                tracing::warn!("Weather request failed: {e}");
                self.data = None;
                self.state = ViewState::Error(e.user_message());
            }
        }
        true
    }

    pub fn location_failed(&mut self, id: RequestId, error: LocationError) -> bool {
        if !self.accept(id) {
            return false;
        }

        tracing::warn!("Location lookup failed: {error}");
        self.data = None;
        self.state = ViewState::Error(error.user_message());
        true
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// The snapshot behind the displayed descriptor, if any.
    pub fn data(&self) -> Option<&WeatherData> {
        self.data.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading)
    }

    pub fn placeholder(&self) -> Option<Placeholder> {
        match &self.state {
            ViewState::Loading => Some(Placeholder {
                location_text: LOADING_TEXT.to_string(),
                temperature_text: None,
                icon_name: LOADING_ICON,
                condition_text: "",
            }),
            ViewState::Error(message) => Some(Placeholder {
                location_text: message.clone(),
                temperature_text: Some(ERROR_TEMPERATURE_TEXT),
                icon_name: ERROR_ICON,
                condition_text: ERROR_CONDITION_TEXT,
            }),
            ViewState::Idle | ViewState::Displayed(_) => None,
        }
    }
}
