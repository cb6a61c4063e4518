//! One-shot hand-off from a location service to the query builder.

use tokio::sync::oneshot;

use crate::{error::LocationError, model::WeatherQuery};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<Coordinates> for WeatherQuery {
    fn from(c: Coordinates) -> Self {
        WeatherQuery::coordinates(c.latitude.to_string(), c.longitude.to_string())
    }
}

#[derive(Debug)]
pub struct LocationSender(oneshot::Sender<Result<Coordinates, LocationError>>);

#[derive(Debug)]
pub struct LocationReceiver(oneshot::Receiver<Result<Coordinates, LocationError>>);

pub fn location_channel() -> (LocationSender, LocationReceiver) {
    let (tx, rx) = oneshot::channel();
    (LocationSender(tx), LocationReceiver(rx))
}

impl LocationSender {
    pub fn resolve(self, coordinates: Coordinates) {
        self.send(Ok(coordinates));
    }

    pub fn fail(self, error: LocationError) {
        self.send(Err(error));
    }

    fn send(self, result: Result<Coordinates, LocationError>) {
        if self.0.send(result).is_err() {
            tracing::debug!("Location result dropped, receiver is gone");
        }
    }
}

impl LocationReceiver {
    /// Waits for the location service. A sender dropped without answering
    /// counts as an unavailable location.
    pub async fn recv(self) -> Result<WeatherQuery, LocationError> {
        match self.0.await {
            Ok(result) => result.map(WeatherQuery::from),
            Err(_) => Err(LocationError::Unavailable("location service went away".into())),
        }
    }
}
