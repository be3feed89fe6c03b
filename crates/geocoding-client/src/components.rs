//! Structured component filters for forward geocoding
//!
//! A filter serializes to the service's `components` parameter format:
//! `key:value` pairs joined by `|`, each value percent-encoded.

use std::fmt;
use std::str::FromStr;

use crate::error::GeocodingError;
use crate::request::encode_value;

/// Component keys the service recognizes as filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    AdministrativeArea,
    Country,
    Locality,
    PostalCode,
    Route,
}

impl Component {
    /// All keys, in serialization order
    pub const ALL: [Component; 5] = [
        Component::AdministrativeArea,
        Component::Country,
        Component::Locality,
        Component::PostalCode,
        Component::Route,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::AdministrativeArea => "administrative_area",
            Self::Country => "country",
            Self::Locality => "locality",
            Self::PostalCode => "postal_code",
            Self::Route => "route",
        }
    }
}

impl FromStr for Component {
    type Err = GeocodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Component::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| GeocodingError::InvalidComponentFilter(format!("unknown key '{s}'")))
    }
}

/// Restricts forward-geocode matches to an area, country, locality, postal code or route
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentFilter {
    pub administrative_area: Option<String>,
    pub country: Option<String>,
    pub locality: Option<String>,
    pub postal_code: Option<String>,
    pub route: Option<String>,
}

impl ComponentFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_administrative_area(mut self, value: impl Into<String>) -> Self {
        self.administrative_area = Some(value.into());
        self
    }

    pub fn with_country(mut self, value: impl Into<String>) -> Self {
        self.country = Some(value.into());
        self
    }

    pub fn with_locality(mut self, value: impl Into<String>) -> Self {
        self.locality = Some(value.into());
        self
    }

    pub fn with_postal_code(mut self, value: impl Into<String>) -> Self {
        self.postal_code = Some(value.into());
        self
    }

    pub fn with_route(mut self, value: impl Into<String>) -> Self {
        self.route = Some(value.into());
        self
    }

    pub fn get(&self, component: Component) -> Option<&str> {
        self.slot(component).as_deref()
    }

    pub fn set(&mut self, component: Component, value: Option<String>) {
        *self.slot_mut(component) = value;
    }

    /// True when no field would be serialized
    pub fn is_empty(&self) -> bool {
        self.pairs().next().is_none()
    }

    /// Present fields with their encoded values; blank values are skipped
    fn pairs(&self) -> impl Iterator<Item = (Component, String)> + '_ {
        Component::ALL.into_iter().filter_map(move |c| {
            self.get(c)
                .and_then(encode_value)
                .map(|encoded| (c, encoded))
        })
    }

    fn slot(&self, component: Component) -> &Option<String> {
        match component {
            Component::AdministrativeArea => &self.administrative_area,
            Component::Country => &self.country,
            Component::Locality => &self.locality,
            Component::PostalCode => &self.postal_code,
            Component::Route => &self.route,
        }
    }

    fn slot_mut(&mut self, component: Component) -> &mut Option<String> {
        match component {
            Component::AdministrativeArea => &mut self.administrative_area,
            Component::Country => &mut self.country,
            Component::Locality => &mut self.locality,
            Component::PostalCode => &mut self.postal_code,
            Component::Route => &mut self.route,
        }
    }
}

/// Serializes to `key:value|key:value`, or an empty string when no field is set
impl fmt::Display for ComponentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (component, value)) in self.pairs().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            write!(f, "{}:{}", component.as_str(), value)?;
        }
        Ok(())
    }
}

impl FromStr for ComponentFilter {
    type Err = GeocodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut filter = ComponentFilter::default();
        for part in s.split('|').filter(|p| !p.is_empty()) {
            let (key, value) = part.split_once(':').ok_or_else(|| {
                GeocodingError::InvalidComponentFilter(format!("missing ':' in '{part}'"))
            })?;
            let component: Component = key.parse()?;
            let value = urlencoding::decode(value)
                .map_err(|e| GeocodingError::InvalidComponentFilter(e.to_string()))?;
            filter.set(component, Some(value.into_owned()));
        }
        Ok(filter)
    }
}
