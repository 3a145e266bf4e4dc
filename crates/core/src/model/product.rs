//! Products and categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::{CategoryId, Discount, Price, ProductId};

/// What the catalog sells.
///
/// The watch and car variants of the site share one product shape; the kind
/// only changes how products are named to visitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    #[default]
    Watch,
    Car,
}

impl ProductKind {
    /// Lowercase identifier, as used in configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Watch => "watch",
            Self::Car => "car",
        }
    }

    /// Capitalized entity name for messages ("Watch with ID ...").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Watch => "Watch",
            Self::Car => "Car",
        }
    }
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown product kind string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown product kind: {0} (expected \"watch\" or \"car\")")]
pub struct ParseProductKindError(String);

impl FromStr for ProductKind {
    type Err = ParseProductKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "watch" | "watches" => Ok(Self::Watch),
            "car" | "cars" => Ok(Self::Car),
            other => Err(ParseProductKindError(other.to_string())),
        }
    }
}

/// Technical specifications of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Specifications {
    pub movement: String,
    pub case_size: String,
    pub water_resistance: String,
    pub material: String,
    pub features: Vec<String>,
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub category_id: CategoryId,
    pub price: Price,
    #[serde(default)]
    pub discount: Option<Discount>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub specifications: Specifications,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub in_stock: bool,
    #[serde(default)]
    pub warranty: String,
}

impl Product {
    /// Price after applying the product's discount, if any.
    #[must_use]
    pub fn discounted_price(&self) -> Price {
        self.price.discounted(self.discount)
    }
}

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub features: Vec<String>,
}
