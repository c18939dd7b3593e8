use crate::utils::date;
use serde::{Deserialize, Serialize};

/// Coordinates delivered by a location provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Timestamped proof of presence. Coordinates are null when no position
/// was available (denied, timed out, or no provider at all).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckIn {
    #[serde(default)]
    pub ts: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
}

impl CheckIn {
    pub fn at(ts: impl Into<String>, position: Option<GeoPoint>) -> Self {
        Self {
            ts: ts.into(),
            lat: position.map(|p| p.lat),
            lon: position.map(|p| p.lon),
        }
    }

    /// Check-in stamped with the current UTC instant.
    pub fn now(position: Option<GeoPoint>) -> Self {
        Self::at(date::now_iso(), position)
    }

    pub fn has_position(&self) -> bool {
        self.lat.is_some() && self.lon.is_some()
    }
}
