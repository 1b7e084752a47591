//! Location projection.

use serde::{Deserialize, Serialize};

/// One point of a location stream, as returned by the engine.
///
/// The engine returns these as a flat array; chronological order is not
/// guaranteed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Position accuracy in meters.
    pub accuracy: f64,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Measurement timestamp, seconds since the epoch.
    pub timestamp: i64,
    /// Contact the location belongs to.
    pub contact_id: u32,
    /// Message the location is bound to, 0 for plain stream points.
    pub msg_id: u32,
    /// Chat the location was shared in.
    pub chat_id: u32,
    /// Whether this is an independent POI rather than a stream point.
    pub is_independent: bool,
    /// Marker character for POI locations, empty otherwise.
    pub marker: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_engine_output() {
        let locations: Vec<Location> = serde_json::from_value(serde_json::json!([{
            "accuracy": 5.0,
            "latitude": 52.52,
            "longitude": 13.405,
            "timestamp": 1_600_000_000_i64,
            "contactId": 12,
            "msgId": 0,
            "chatId": 1010,
            "isIndependent": false,
            "marker": "",
        }]))
        .unwrap();
        assert_eq!(locations.len(), 1);
        assert!(!locations[0].is_independent);
        assert!((locations[0].latitude - 52.52).abs() < f64::EPSILON);
    }
}
