//! Real Las Vegas / Henderson locations for commute fixtures.
//!
//! Coordinates sourced from OpenStreetMap via Overpass API. These are real,
//! routable locations that work with OSRM Nevada data.

use carpool_match::Coordinate;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lng, self.lat)
    }

    /// `"lat,lng"`, as a client would send it.
    pub fn query(&self) -> String {
        format!("{},{}", self.lat, self.lng)
    }
}

pub const WYNN: Location = Location::new("Wynn Las Vegas", 36.1263781, -115.1658180);
pub const ENCORE: Location = Location::new("Encore at Wynn", 36.1289345, -115.1653620);
pub const MGM_GRAND: Location = Location::new("MGM Grand", 36.1023654, -115.1688720);
pub const BELLAGIO: Location = Location::new("Bellagio", 36.1126, -115.1767);
pub const GREEN_VALLEY: Location = Location::new("Green Valley Ranch Area", 36.0308, -115.0825);
pub const NORTH_VEGAS: Location =
    Location::new("Rivas Mexican Grill North", 36.1450055, -115.0482587);
