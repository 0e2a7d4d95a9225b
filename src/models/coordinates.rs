use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(EngineError::InvalidCoordinates(format!(
                "latitude {} out of range (must be between -90 and 90)",
                lat
            )));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(EngineError::InvalidCoordinates(format!(
                "longitude {} out of range (must be between -180 and 180)",
                lng
            )));
        }
        Ok(Coordinates { lat, lng })
    }

    /// Whether the coordinate pair is a valid geographic position.
    /// Deserialized values bypass [`Coordinates::new`], so catalog loading
    /// re-checks them with this.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }

    /// Calculate distance between two coordinates using Haversine formula
    /// Returns distance in kilometers
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        const EARTH_RADIUS_KM: f64 = 6371.0;

        let lat1_rad = self.lat.to_radians();
        let lat2_rad = other.lat.to_radians();
        let delta_lat = (other.lat - self.lat).to_radians();
        let delta_lng = (other.lng - self.lng).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }

    /// Calculate perpendicular distance from this point to a line segment.
    /// Returns (distance_km, t) where t is the position along the segment [0,1].
    pub fn distance_to_segment(&self, p1: &Coordinates, p2: &Coordinates) -> (f64, f64) {
        let segment_length_sq = p1.distance_to(p2).powi(2);

        if segment_length_sq < 1e-10 {
            // Segment is essentially a point
            return (self.distance_to(p1), 0.0);
        }

        // Projection parameter t in lat/lng space (approximation, but good
        // enough for corridor queries over intercity distances)
        let dx = p2.lng - p1.lng;
        let dy = p2.lat - p1.lat;
        let t = ((self.lng - p1.lng) * dx + (self.lat - p1.lat) * dy) / (dx * dx + dy * dy);

        let t_clamped = t.clamp(0.0, 1.0);

        let closest = Coordinates {
            lat: p1.lat + t_clamped * dy,
            lng: p1.lng + t_clamped * dx,
        };

        (self.distance_to(&closest), t_clamped)
    }
}
