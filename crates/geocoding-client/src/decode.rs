//! Response decoding: JSON body to [`Address`] or a typed error

use crate::error::{GeocodingError, Result};
use crate::types::{Address, GeocodeResponse};

/// Decode a raw response body
pub fn decode_response(body: &[u8]) -> Result<Address> {
    let response: GeocodeResponse = serde_json::from_slice(body)?;
    Address::try_from(response)
}

impl TryFrom<GeocodeResponse> for Address {
    type Error = GeocodingError;

    fn try_from(response: GeocodeResponse) -> Result<Self> {
        if !response.status.is_ok() {
            return Err(GeocodingError::Service {
                status: response.status,
                message: response.error_message,
            });
        }

        let first = response.first().ok_or(GeocodingError::EmptyResults)?;
        let location = first.geometry.location;
        let address = first.formatted_address.clone();

        Ok(Address {
            lat: location.lat,
            lng: location.lng,
            address,
            response,
        })
    }
}
