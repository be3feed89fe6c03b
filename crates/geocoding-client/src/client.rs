use tracing::debug;

use crate::components::ComponentFilter;
use crate::config::GeocodingConfig;
use crate::decode::decode_response;
use crate::error::{GeocodingError, Result};
use crate::request::GeocodeRequest;
use crate::types::{Address, LatLng};

/// Forward and reverse geocoding client
///
/// Each call is one request/response exchange; nothing is cached or
/// retried, so a client can be shared freely between tasks.
#[derive(Debug, Clone)]
pub struct GeocodingClient {
    http: reqwest::Client,
    config: GeocodingConfig,
}

impl GeocodingClient {
    /// Create a new client with default settings
    pub fn new() -> Result<Self> {
        Self::with_config(GeocodingConfig::default())
    }

    /// Create a new client against a custom service root
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Self::with_config(GeocodingConfig::default().with_base_url(base_url))
    }

    pub fn with_config(config: GeocodingConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(GeocodingError::HttpClient)?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &GeocodingConfig {
        &self.config
    }

    /// Geocode a free-text address, using the configured key if any
    pub async fn geocode(&self, address: &str) -> Result<Address> {
        self.send(self.with_default_key(GeocodeRequest::forward(address)))
            .await
    }

    pub async fn geocode_authenticated(&self, address: &str, api_key: &str) -> Result<Address> {
        self.geocode_authenticated_with_components(address, &ComponentFilter::default(), api_key)
            .await
    }

    pub async fn geocode_authenticated_with_components(
        &self,
        address: &str,
        components: &ComponentFilter,
        api_key: &str,
    ) -> Result<Address> {
        let request = GeocodeRequest::forward(address)
            .with_api_key(api_key)
            .with_components(components.clone());
        self.send(request).await
    }

    /// Reverse geocode a `"lat,lng"` string, using the configured key if any
    pub async fn reverse_geocode(&self, lat_lng: &str) -> Result<Address> {
        self.send(self.with_default_key(GeocodeRequest::reverse(lat_lng)))
            .await
    }

    pub async fn reverse_geocode_authenticated(
        &self,
        lat_lng: &str,
        api_key: &str,
    ) -> Result<Address> {
        self.send(GeocodeRequest::reverse(lat_lng).with_api_key(api_key))
            .await
    }

    pub async fn reverse_geocode_coordinates(&self, location: LatLng) -> Result<Address> {
        self.reverse_geocode(&location.to_string()).await
    }

    /// Run a prepared request through fetch and decode
    pub async fn send(&self, request: GeocodeRequest) -> Result<Address> {
        let url = request.url(&self.config.base_url);

        debug!(
            query = ?request.query(),
            authenticated = request.has_api_key(),
            "Sending geocode request"
        );

        let body = self.fetch(&url).await?;
        let address = decode_response(&body)?;

        debug!(
            address = %address.address,
            lat = address.lat,
            lng = address.lng,
            candidates = address.response.results.len(),
            "Geocoded"
        );

        Ok(address)
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .http
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(GeocodingError::Unreachable)?;

        if !response.status().is_success() {
            debug!(status = %response.status(), "Geocode endpoint returned non-success HTTP status");
        }

        let body = response.bytes().await.map_err(GeocodingError::BodyRead)?;
        Ok(body.to_vec())
    }

    fn with_default_key(&self, request: GeocodeRequest) -> GeocodeRequest {
        match &self.config.api_key {
            Some(key) => request.with_api_key(key.as_str()),
            None => request,
        }
    }
}
