//! Physical store locations.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::types::StoreId;

/// Marker used in opening hours for a day the store does not open.
pub const CLOSED: &str = "Closed";

/// A physical showroom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreLocation {
    pub id: StoreId,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub opening_hours: WeeklyHours,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
}

/// Latitude/longitude pair for the map widget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Opening hours per weekday as display strings (`"9:00 - 18:00"`, `"Closed"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WeeklyHours {
    pub monday: String,
    pub tuesday: String,
    pub wednesday: String,
    pub thursday: String,
    pub friday: String,
    pub saturday: String,
    pub sunday: String,
}

impl WeeklyHours {
    /// Hours for the given day.
    #[must_use]
    pub fn for_day(&self, day: Weekday) -> &str {
        match day {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }
}

impl StoreLocation {
    /// Whether the store opens on `day`.
    ///
    /// Only the literal `"Closed"` marks a closed day; any other value,
    /// including an empty one, counts as open.
    #[must_use]
    pub fn is_open_on(&self, day: Weekday) -> bool {
        self.opening_hours.for_day(day) != CLOSED
    }

    /// Whether the store offers every one of `services`.
    pub fn offers_all<'s>(&self, mut services: impl Iterator<Item = &'s str>) -> bool {
        services.all(|wanted| self.services.iter().any(|s| s == wanted))
    }
}
