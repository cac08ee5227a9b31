use clap::ValueEnum;

pub const DEFAULT_ZOOM: u8 = 14;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLongLocation {
    pub lat: f64,
    pub lon: f64,
    pub zoom: u8,
}

impl LatLongLocation {
    /// Renders the `@lat,lon,zoomz` form expected by the `ll` parameter.
    pub fn to_ll(&self) -> String {
        format!("@{},{},{}z", self.lat, self.lon, self.zoom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LocationPreset {
    #[default]
    NewYork,
    Tokyo,
    SanFrancisco,
    LosAngeles,
}

impl LocationPreset {
    pub fn at_zoom(self, zoom: u8) -> LatLongLocation {
        let (lat, lon) = match self {
            LocationPreset::NewYork => (40.7455096, -74.0083012),
            LocationPreset::Tokyo => (35.6762, 139.6503),
            LocationPreset::SanFrancisco => (37.7749, -122.4194),
            LocationPreset::LosAngeles => (34.0522, -118.2437),
        };

        LatLongLocation { lat, lon, zoom }
    }
}

/// Smallest zoom level whose visible area still covers `radius_meters`.
pub fn radius_to_zoom(radius_meters: u32) -> u8 {
    match radius_meters {
        0..=500 => 16,
        501..=1_000 => 15,
        1_001..=2_000 => 14,
        2_001..=5_000 => 13,
        5_001..=10_000 => 12,
        10_001..=20_000 => 11,
        _ => 10,
    }
}
