use serde::{Deserialize, Serialize};

use crate::global_constants::MAPS_SEARCH_URL;

/// Point-in-time reading of the simulated aircraft. Any field may be missing when the
/// simulator has no value for it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub altitude_meters: Option<f64>,
    #[serde(default)]
    pub speed_knots: Option<f64>,
}

impl TelemetrySnapshot {
    #[cfg(test)]
    pub fn at_position(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
            ..Self::default()
        }
    }

    pub fn has_gps_fix(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }

    pub fn maps_url(&self) -> Option<String> {
        let (latitude, longitude) = (self.latitude?, self.longitude?);

        Some(
            MAPS_SEARCH_URL
                .replace("{latitude}", &latitude.to_string())
                .replace("{longitude}", &longitude.to_string()),
        )
    }

    /// Returns the first field that is out of range or not finite.
    pub fn find_invalid_field(&self) -> Option<&'static str> {
        let out_of_range = |value: Option<f64>, limit: f64| {
            value.is_some_and(|v| !v.is_finite() || v.abs() > limit)
        };

        if out_of_range(self.latitude, 90.0) {
            return Some("latitude");
        }
        if out_of_range(self.longitude, 180.0) {
            return Some("longitude");
        }
        if out_of_range(self.altitude_meters, f64::MAX) {
            return Some("altitude_meters");
        }
        if self.speed_knots.is_some_and(|v| !v.is_finite() || v < 0.0) {
            return Some("speed_knots");
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_gps_fix_requires_both_coordinates() {
        assert!(TelemetrySnapshot::at_position(30.0, 30.0).has_gps_fix());

        let latitude_only = TelemetrySnapshot {
            latitude: Some(30.0),
            ..TelemetrySnapshot::default()
        };
        assert!(!latitude_only.has_gps_fix());
        assert!(!TelemetrySnapshot::default().has_gps_fix());
    }

    #[test]
    fn test_maps_url_contains_coordinates() {
        let snapshot = TelemetrySnapshot::at_position(47.25, -122.5);

        assert_eq!(
            snapshot.maps_url().unwrap(),
            "https://www.google.com/maps/search/?api=1&query=47.25,-122.5"
        );
    }

    #[test]
    fn test_maps_url_without_fix_is_none() {
        assert!(TelemetrySnapshot::default().maps_url().is_none());
    }

    #[test]
    fn test_find_invalid_field_flags_out_of_range_latitude() {
        let snapshot = TelemetrySnapshot::at_position(91.0, 0.0);

        assert_eq!(snapshot.find_invalid_field(), Some("latitude"));
    }

    #[test]
    fn test_find_invalid_field_flags_nan_altitude() {
        let snapshot = TelemetrySnapshot {
            altitude_meters: Some(f64::NAN),
            ..TelemetrySnapshot::at_position(10.0, 10.0)
        };

        assert_eq!(snapshot.find_invalid_field(), Some("altitude_meters"));
    }

    #[test]
    fn test_find_invalid_field_accepts_complete_snapshot() {
        let snapshot = TelemetrySnapshot {
            latitude: Some(-33.9),
            longitude: Some(151.2),
            altitude_meters: Some(-12.0),
            speed_knots: Some(140.0),
        };

        assert_eq!(snapshot.find_invalid_field(), None);
    }

    #[test]
    fn test_deserialize_with_missing_fields_defaults_to_none() {
        let snapshot: TelemetrySnapshot = serde_json::from_str(r#"{"latitude": 1.5}"#).unwrap();

        assert_eq!(snapshot.latitude, Some(1.5));
        assert_eq!(snapshot.longitude, None);
        assert_eq!(snapshot.speed_knots, None);
    }
}
