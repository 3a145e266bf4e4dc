//! Company profile and headline statistics.

use serde::{Deserialize, Serialize};

/// The dealership's public profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Company {
    pub name: String,
    pub slogan: String,
    pub founded: i32,
    pub description: String,
    pub contact: Contact,
    pub social_media: SocialMedia,
    pub opening_hours: OpeningHours,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SocialMedia {
    pub facebook: String,
    pub instagram: String,
    pub twitter: String,
    pub linkedin: String,
}

/// Showroom opening hours as display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OpeningHours {
    pub weekdays: String,
    pub saturday: String,
    pub sunday: String,
}

/// Counters shown on the home and about pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Statistics {
    pub years_in_business: u32,
    #[serde(alias = "carsRepaired", alias = "itemsRepaired")]
    pub watches_repaired: u64,
    pub brands_available: u32,
    pub satisfied_customers: u64,
    pub visitors_count: u64,
}
