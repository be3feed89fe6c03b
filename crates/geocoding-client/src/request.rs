//! Query construction for the geocode endpoint
//!
//! A request is an ordered mapping from parameter name to optional value.
//! Values are trimmed and percent-encoded here and nowhere else. Blank
//! values are dropped, except a supplied address that trims to nothing,
//! which is still sent so the service rejects it.

use crate::components::ComponentFilter;

/// Path of the JSON geocode endpoint, relative to the configured base URL
pub const GEOCODE_PATH: &str = "/geocode/json";

/// Trim and percent-encode a parameter value, dropping it if blank
pub(crate) fn encode_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(urlencoding::encode(trimmed).into_owned())
    }
}

/// Trim and percent-encode a value that is sent whenever the caller supplied one
fn encode_present(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(urlencoding::encode(value.trim()).into_owned())
    }
}

/// What is being looked up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Forward geocoding of a free-text address
    Address(String),
    /// Reverse geocoding of a `"lat,lng"` string
    LatLng(String),
}

/// A single geocode request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeocodeRequest {
    query: Query,
    api_key: Option<String>,
    components: ComponentFilter,
}

impl GeocodeRequest {
    pub fn forward(address: impl Into<String>) -> Self {
        Self::new(Query::Address(address.into()))
    }

    pub fn reverse(lat_lng: impl Into<String>) -> Self {
        Self::new(Query::LatLng(lat_lng.into()))
    }

    fn new(query: Query) -> Self {
        Self {
            query,
            api_key: None,
            components: ComponentFilter::default(),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Component filters only apply to forward geocoding and are ignored for reverse queries
    pub fn with_components(mut self, components: ComponentFilter) -> Self {
        self.components = components;
        self
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().and_then(encode_value).is_some()
    }

    /// Parameter names paired with their encoded values, in wire order
    fn params(&self) -> Vec<(&'static str, Option<String>)> {
        let key = self.api_key.as_deref().and_then(encode_value);
        match &self.query {
            Query::Address(address) => {
                let components = Some(self.components.to_string()).filter(|c| !c.is_empty());
                vec![
                    ("sensor", Some("false".to_string())),
                    ("key", key),
                    ("address", encode_present(address)),
                    ("components", components),
                ]
            }
            Query::LatLng(lat_lng) => vec![
                ("sensor", Some("false".to_string())),
                ("latlng", encode_value(lat_lng)),
                ("key", key),
            ],
        }
    }

    /// Encoded query string without the leading `?`
    pub fn query_string(&self) -> String {
        self.params()
            .into_iter()
            .filter_map(|(name, value)| value.map(|v| format!("{name}={v}")))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Full request URL against `base_url`
    pub fn url(&self, base_url: &str) -> String {
        format!(
            "{}{}?{}",
            base_url.trim_end_matches('/'),
            GEOCODE_PATH,
            self.query_string()
        )
    }
}
