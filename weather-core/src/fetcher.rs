use async_trait::async_trait;
use reqwest::{Client, Url};
use std::fmt::Debug;

use crate::{
    error::FetchError,
    model::{WeatherData, WeatherQuery},
};

pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";
const ENDPOINT: &str = "current.json";

/// Anything that can turn a query into a weather snapshot.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn fetch_weather(&self, query: &WeatherQuery) -> Result<WeatherData, FetchError>;
}

/// Client for weatherapi.com `current.json`. One attempt per call, no retries.
#[derive(Debug, Clone)]
pub struct WeatherFetcher {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherFetcher {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self { api_key: api_key.into(), base_url: DEFAULT_BASE_URL.to_string(), http: Client::new() }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn build_url(&self, query: &WeatherQuery) -> Result<Url, FetchError> {
        if self.api_key.trim().is_empty() {
            return Err(FetchError::InvalidQuery("API key is empty".into()));
        }

        match query {
            WeatherQuery::City(name) if name.trim().is_empty() => {
                return Err(FetchError::InvalidQuery("city is empty".into()));
            }
            WeatherQuery::Coordinates { lat, long }
                if lat.trim().is_empty() || long.trim().is_empty() =>
            {
                return Err(FetchError::InvalidQuery("coordinates are incomplete".into()));
            }
            _ => {}
        }

        let q = query.to_string();
        let raw = format!(
            "{}/{ENDPOINT}?key={}&q={}",
            self.base_url,
            urlencoding::encode(&self.api_key),
            urlencoding::encode(q.trim()),
        );

        Url::parse(&raw).map_err(|e| FetchError::InvalidQuery(format!("{e}: {q}")))
    }

    pub async fn fetch(&self, url: Url) -> Result<WeatherData, FetchError> {
        let host = url.host_str().unwrap_or_default().to_string();
        tracing::debug!(%host, path = url.path(), "Requesting current weather");

        let res = self.http.get(url).send().await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            tracing::warn!(%status, "Weather request failed");
            return Err(FetchError::NetworkError(format!(
                "request failed with status {}: {}",
                status,
                truncate_body(&body),
            )));
        }

        if body.trim().is_empty() {
            return Err(FetchError::EmptyResponse);
        }

        let data: WeatherData =
            serde_json::from_str(&body).map_err(|e| FetchError::ParseError(e.to_string()))?;

        tracing::info!(
            location = %data.location.name,
            code = data.current.condition.code,
            "Received current weather"
        );

        Ok(data)
    }
}

#[async_trait]
impl WeatherSource for WeatherFetcher {
    async fn fetch_weather(&self, query: &WeatherQuery) -> Result<WeatherData, FetchError> {
        let url = self.build_url(query)?;
        self.fetch(url).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}
