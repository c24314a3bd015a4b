//! Geo URI conversion
//! Turns a resolved placemark into a `geo:` URI (RFC 5870).

use serde::{Deserialize, Serialize};

use crate::error::{ActionError, ActionResult};

/// Decimal places used for latitude and longitude.
pub const COORDINATE_PRECISION: usize = 6;

/// A resolved geographic coordinate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinate {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Horizontal accuracy radius in meters. Negative means unknown.
    #[serde(default)]
    pub horizontal_accuracy: Option<f64>,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            horizontal_accuracy: None,
        }
    }

    pub fn with_accuracy(mut self, meters: f64) -> Self {
        self.horizontal_accuracy = Some(meters);
        self
    }

    /// Whether latitude and longitude describe a point on the globe.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// The accuracy, if it is a usable measurement.
    pub fn valid_accuracy(&self) -> Option<f64> {
        self.horizontal_accuracy
            .filter(|meters| meters.is_finite() && *meters >= 0.0)
    }

    /// Formats the coordinate as a geo URI.
    ///
    /// The accuracy is appended as the `u` parameter only when requested and
    /// known; otherwise it is silently left out.
    pub fn geo_uri(&self, include_accuracy: bool) -> String {
        let mut uri = format!(
            "geo:{:.prec$},{:.prec$}",
            self.latitude,
            self.longitude,
            prec = COORDINATE_PRECISION
        );

        if include_accuracy {
            if let Some(meters) = self.valid_accuracy() {
                uri.push_str(&format!(";u={}", meters));
            }
        }

        uri
    }
}

/// A place handed over by the location provider
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placemark {
    /// Display name of the place, if the provider supplied one
    #[serde(default)]
    pub name: Option<String>,
    /// The resolved location. Absent when the provider could not resolve it.
    #[serde(default)]
    pub location: Option<Coordinate>,
}

impl Placemark {
    pub fn new(location: Option<Coordinate>) -> Self {
        Self {
            name: None,
            location,
        }
    }

    /// Returns the coordinate of this place if it is resolvable.
    pub fn coordinate(&self) -> Option<Coordinate> {
        self.location.filter(Coordinate::is_valid)
    }
}

/// Converts a placemark to a geo URI.
pub fn geo_uri(place: &Placemark, include_accuracy: bool) -> ActionResult<String> {
    let coordinate = place.coordinate().ok_or(ActionError::UnresolvableLocation)?;
    let uri = coordinate.geo_uri(include_accuracy);
    log::debug!("Converted {:?} to {}", place.name, uri);
    Ok(uri)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn san_francisco() -> Coordinate {
        Coordinate::new(37.7749, -122.4194)
    }

    #[test]
    fn test_geo_uri_without_accuracy() {
        let place = Placemark::new(Some(san_francisco().with_accuracy(35.0)));
        assert_eq!(
            geo_uri(&place, false).unwrap(),
            "geo:37.774900,-122.419400"
        );
    }

    #[test]
    fn test_geo_uri_with_accuracy() {
        let place = Placemark::new(Some(san_francisco().with_accuracy(35.0)));
        assert_eq!(
            geo_uri(&place, true).unwrap(),
            "geo:37.774900,-122.419400;u=35"
        );

        let place = Placemark::new(Some(san_francisco().with_accuracy(12.5)));
        assert_eq!(
            geo_uri(&place, true).unwrap(),
            "geo:37.774900,-122.419400;u=12.5"
        );
    }

    #[test]
    fn test_missing_accuracy_matches_disabled() {
        let place = Placemark::new(Some(san_francisco()));
        assert_eq!(geo_uri(&place, true).unwrap(), geo_uri(&place, false).unwrap());
    }

    #[test]
    fn test_invalid_accuracy_is_omitted() {
        for meters in [-1.0, f64::NAN, f64::INFINITY] {
            let place = Placemark::new(Some(san_francisco().with_accuracy(meters)));
            assert_eq!(
                geo_uri(&place, true).unwrap(),
                "geo:37.774900,-122.419400"
            );
        }
    }

    #[test]
    fn test_unresolvable_location() {
        let place = Placemark::default();
        assert!(matches!(
            geo_uri(&place, true),
            Err(ActionError::UnresolvableLocation)
        ));

        let place = Placemark::new(Some(Coordinate::new(91.0, 0.0)));
        assert!(matches!(
            geo_uri(&place, false),
            Err(ActionError::UnresolvableLocation)
        ));

        let place = Placemark::new(Some(Coordinate::new(f64::NAN, 10.0)));
        assert!(geo_uri(&place, false).is_err());
    }

    #[test]
    fn test_placemark_from_json() {
        let place: Placemark = serde_json::from_str(
            r#"{"name":"Ferry Building","location":{"latitude":37.7955,"longitude":-122.3937,"horizontalAccuracy":8.0}}"#,
        )
        .unwrap();
        assert_eq!(place.name.as_deref(), Some("Ferry Building"));
        assert_eq!(geo_uri(&place, true).unwrap(), "geo:37.795500,-122.393700;u=8");
    }
}
