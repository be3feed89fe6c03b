//! Geocoding Client
//!
//! A Rust client for the Google Maps [geocoding API](https://developers.google.com/maps/documentation/geocoding)
//! turning addresses into coordinates and coordinates back into addresses.
//!
//! # Example
//!
//! ```no_run
//! use geocoding_client::{ComponentFilter, GeocodingClient};
//!
//! # async fn example() -> Result<(), geocoding_client::GeocodingError> {
//! let client = GeocodingClient::new()?;
//!
//! let address = client.geocode("1600 Amphitheatre Parkway, Mountain View, CA").await?;
//! println!("{address}");
//!
//! let filter = ComponentFilter::new().with_country("US");
//! let address = client
//!     .geocode_authenticated_with_components("Santa Cruz", &filter, "my-api-key")
//!     .await?;
//! println!("{}", address.response.results.len());
//!
//! let address = client.reverse_geocode("40.714224,-73.961452").await?;
//! println!("{}", address.address);
//! # Ok(())
//! # }
//! ```
//!
//! A service status other than `OK` (including `ZERO_RESULTS`) is returned as
//! [`GeocodingError::Service`]; inspect [`GeocodingError::status`] to tell them apart.

mod client;
mod components;
mod config;
mod decode;
mod error;
mod request;
mod types;

pub use client::GeocodingClient;
pub use components::{Component, ComponentFilter};
pub use config::{GeocodingConfig, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
pub use decode::decode_response;
pub use error::{GeocodingError, Result};
pub use request::{GeocodeRequest, Query, GEOCODE_PATH};
pub use types::{
    Address, AddressComponent, Bounds, Candidate, GeocodeResponse, Geometry, LatLng, Status,
};

/// Geocode an address with a default client
pub async fn geocode(address: &str) -> Result<Address> {
    GeocodingClient::new()?.geocode(address).await
}

pub async fn geocode_authenticated(address: &str, api_key: &str) -> Result<Address> {
    GeocodingClient::new()?
        .geocode_authenticated(address, api_key)
        .await
}

pub async fn geocode_authenticated_with_components(
    address: &str,
    components: &ComponentFilter,
    api_key: &str,
) -> Result<Address> {
    GeocodingClient::new()?
        .geocode_authenticated_with_components(address, components, api_key)
        .await
}

/// Reverse geocode a `"lat,lng"` string with a default client
pub async fn reverse_geocode(lat_lng: &str) -> Result<Address> {
    GeocodingClient::new()?.reverse_geocode(lat_lng).await
}

pub async fn reverse_geocode_authenticated(lat_lng: &str, api_key: &str) -> Result<Address> {
    GeocodingClient::new()?
        .reverse_geocode_authenticated(lat_lng, api_key)
        .await
}
