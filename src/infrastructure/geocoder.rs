//! Reverse geocoding collaborator

use crate::domain::Location;
use crate::error::Result;
use tracing::warn;

/// One reverse-geocoding result
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Placemark {
    pub name: Option<String>,
    pub street: Option<String>,
    pub district: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
}

impl Placemark {
    /// Non-empty parts from most to least specific, joined with ", "
    pub fn label(&self) -> String {
        [
            &self.name,
            &self.street,
            &self.district,
            &self.city,
            &self.region,
            &self.country,
        ]
        .into_iter()
        .filter_map(|part| part.as_deref())
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }
}

/// Turns coordinates into placemarks
pub trait ReverseGeocoder {
    fn reverse_geocode(&self, location: Location) -> Result<Vec<Placemark>>;
}

/// Geocoder with no place data; every lookup yields no placemark
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineGeocoder;

impl ReverseGeocoder for OfflineGeocoder {
    fn reverse_geocode(&self, _location: Location) -> Result<Vec<Placemark>> {
        Ok(Vec::new())
    }
}

/// Human-readable address for `location`.
///
/// Uses the first placemark's label; falls back to the raw coordinates
/// when the lookup fails or produces nothing usable.
pub fn resolve_address(geocoder: &dyn ReverseGeocoder, location: Location) -> String {
    match geocoder.reverse_geocode(location) {
        Ok(placemarks) => placemarks
            .first()
            .map(Placemark::label)
            .filter(|label| !label.is_empty())
            .unwrap_or_else(|| location.coordinates_label()),
        Err(e) => {
            warn!(error = %e, "reverse geocoding failed, using coordinates");
            location.coordinates_label()
        }
    }
}
