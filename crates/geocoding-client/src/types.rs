use std::fmt;

use serde::{Deserialize, Serialize};

/// Result of a successful geocode: the most relevant match plus the full payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Address {
    pub lat: f64,
    pub lng: f64,
    pub address: String,
    pub response: GeocodeResponse,
}

impl Address {
    pub fn location(&self) -> LatLng {
        LatLng {
            lat: self.lat,
            lng: self.lng,
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (lat: {:.7}, lng: {:.7})",
            self.address, self.lat, self.lng
        )
    }
}

/// Full geocode payload as returned by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResponse {
    pub status: Status,
    #[serde(default)]
    pub results: Vec<Candidate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl GeocodeResponse {
    /// Most relevant candidate; the service orders results by relevance
    pub fn first(&self) -> Option<&Candidate> {
        self.results.first()
    }
}

/// One candidate match for a query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub formatted_address: String,
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
    #[serde(default)]
    pub geometry: Geometry,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
    #[serde(default)]
    pub partial_match: bool,
}

impl Candidate {
    /// First address component tagged with `type_tag` (e.g. "country", "locality")
    pub fn component(&self, type_tag: &str) -> Option<&AddressComponent> {
        self.address_components
            .iter()
            .find(|c| c.types.iter().any(|t| t == type_tag))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressComponent {
    #[serde(default)]
    pub long_name: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(default)]
    pub location: LatLng,
    #[serde(default)]
    pub location_type: String,
    #[serde(default)]
    pub viewport: Bounds,
    /// Omitted by the service for point results
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Bounds>,
}

/// Bounding box given by its southwest and northeast corners
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bounds {
    pub southwest: LatLng,
    pub northeast: LatLng,
}

/// Latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Formats as the `latlng` query value, e.g. `40.714224,-73.961452`
impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// Status code reported by the service
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    Ok,
    ZeroResults,
    OverQueryLimit,
    RequestDenied,
    InvalidRequest,
    UnknownError,
    /// Any status string not listed above
    Other(String),
}

impl Status {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ok => "OK",
            Self::ZeroResults => "ZERO_RESULTS",
            Self::OverQueryLimit => "OVER_QUERY_LIMIT",
            Self::RequestDenied => "REQUEST_DENIED",
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::UnknownError => "UNKNOWN_ERROR",
            Self::Other(s) => s,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl From<String> for Status {
    fn from(s: String) -> Self {
        match s.as_str() {
            "OK" => Self::Ok,
            "ZERO_RESULTS" => Self::ZeroResults,
            "OVER_QUERY_LIMIT" => Self::OverQueryLimit,
            "REQUEST_DENIED" => Self::RequestDenied,
            "INVALID_REQUEST" => Self::InvalidRequest,
            "UNKNOWN_ERROR" => Self::UnknownError,
            _ => Self::Other(s),
        }
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        match status {
            Status::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "results": [{
            "address_components": [
                {"long_name": "1600", "short_name": "1600", "types": ["street_number"]},
                {"long_name": "Mountain View", "short_name": "Mountain View", "types": ["locality", "political"]},
                {"long_name": "United States", "short_name": "US", "types": ["country", "political"]}
            ],
            "formatted_address": "1600 Amphitheatre Pkwy, Mountain View, CA 94043, USA",
            "geometry": {
                "location": {"lat": 37.4224764, "lng": -122.0842499},
                "location_type": "ROOFTOP",
                "viewport": {
                    "northeast": {"lat": 37.4238253802915, "lng": -122.0829009197085},
                    "southwest": {"lat": 37.4211274197085, "lng": -122.0855988802915}
                }
            },
            "place_id": "ChIJ2eUgeAK6j4ARbn5u_wAGqWA",
            "types": ["street_address"]
        }],
        "status": "OK"
    }"#;

    #[test]
    fn test_deserialize_full_response() {
        let response: GeocodeResponse = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(response.status, Status::Ok);
        assert_eq!(response.results.len(), 1);

        let first = response.first().unwrap();
        assert_eq!(first.types, vec!["street_address"]);
        assert_eq!(first.geometry.location_type, "ROOFTOP");
        assert_eq!(first.geometry.location.lat, 37.4224764);
        assert_eq!(first.geometry.viewport.southwest.lng, -122.0855988802915);
        assert!(first.geometry.bounds.is_none());
        assert!(!first.partial_match);
        assert_eq!(
            first.place_id.as_deref(),
            Some("ChIJ2eUgeAK6j4ARbn5u_wAGqWA")
        );
    }

    #[test]
    fn test_candidate_component_lookup() {
        let response: GeocodeResponse = serde_json::from_str(SAMPLE).unwrap();
        let first = response.first().unwrap();

        assert_eq!(first.component("country").unwrap().short_name, "US");
        assert_eq!(
            first.component("locality").unwrap().long_name,
            "Mountain View"
        );
        assert!(first.component("route").is_none());
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let body = r#"{
            "status": "OK",
            "results": [{
                "formatted_address": "Somewhere",
                "address_components": [{"long_name": "Somewhere", "types": ["locality"]}]
            }, {
                "geometry": {"location": {"lat": 1.5}, "viewport": {"southwest": {"lat": 1.0, "lng": 2.0}}}
            }]
        }"#;
        let response: GeocodeResponse = serde_json::from_str(body).unwrap();
        let first = response.first().unwrap();

        assert_eq!(first.address_components[0].short_name, "");
        assert_eq!(first.geometry.location, LatLng::default());
        assert_eq!(first.geometry.location_type, "");
        assert!(first.geometry.bounds.is_none());

        let second = &response.results[1];
        assert_eq!(second.geometry.location, LatLng::new(1.5, 0.0));
        assert_eq!(second.geometry.viewport.northeast, LatLng::default());
    }

    #[test]
    fn test_status_from_known_strings() {
        assert_eq!(Status::from("OK".to_string()), Status::Ok);
        assert_eq!(Status::from("ZERO_RESULTS".to_string()), Status::ZeroResults);
        assert_eq!(
            Status::from("OVER_QUERY_LIMIT".to_string()),
            Status::OverQueryLimit
        );
        assert_eq!(
            Status::from("REQUEST_DENIED".to_string()),
            Status::RequestDenied
        );
        assert_eq!(
            Status::from("INVALID_REQUEST".to_string()),
            Status::InvalidRequest
        );
    }

    #[test]
    fn test_status_unknown_string_is_preserved() {
        let status: Status = serde_json::from_str("\"OVER_DAILY_LIMIT\"").unwrap();
        assert_eq!(status, Status::Other("OVER_DAILY_LIMIT".to_string()));
        assert_eq!(status.as_str(), "OVER_DAILY_LIMIT");
        assert!(!status.is_ok());
        assert_eq!(
            serde_json::to_string(&status).unwrap(),
            "\"OVER_DAILY_LIMIT\""
        );
    }

    #[test]
    fn test_address_display() {
        let address = Address {
            lat: 37.4,
            lng: -122.1,
            address: "1600 Amphitheatre Pkwy".to_string(),
            response: GeocodeResponse {
                status: Status::Ok,
                results: vec![],
                error_message: None,
            },
        };
        assert_eq!(
            address.to_string(),
            "1600 Amphitheatre Pkwy (lat: 37.4000000, lng: -122.1000000)"
        );
        assert_eq!(address.location(), LatLng::new(37.4, -122.1));
    }

    #[test]
    fn test_lat_lng_display() {
        assert_eq!(
            LatLng::new(40.714224, -73.961452).to_string(),
            "40.714224,-73.961452"
        );
    }
}
