//! The catalog document: every section the site reads, parsed once.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::LookupError;
use crate::model::{
    Category, Company, Faq, Product, Service, Statistics, StoreLocation, TeamMember, Technology,
    Testimonial,
};

/// Top-level sections of the catalog document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Products,
    Categories,
    Company,
    Statistics,
    Testimonials,
    Faqs,
    Services,
    Technologies,
    StoreLocations,
    TeamMembers,
}

impl Section {
    /// Every known section, in document order.
    pub const ALL: [Self; 10] = [
        Self::Products,
        Self::Categories,
        Self::Company,
        Self::Statistics,
        Self::Testimonials,
        Self::Faqs,
        Self::Services,
        Self::Technologies,
        Self::StoreLocations,
        Self::TeamMembers,
    ];

    /// The JSON key of the section.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Products => "products",
            Self::Categories => "categories",
            Self::Company => "company",
            Self::Statistics => "statistics",
            Self::Testimonials => "testimonials",
            Self::Faqs => "faqs",
            Self::Services => "services",
            Self::Technologies => "technologies",
            Self::StoreLocations => "storeLocations",
            Self::TeamMembers => "TeamMembers",
        }
    }

    /// Look up a section by JSON key.
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == key)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The parsed catalog document.
///
/// Every section is optional at parse time. A page that needs a section asks
/// for it through the accessor, which turns absence into
/// [`LookupError::MissingSection`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub products: Option<Vec<Product>>,
    #[serde(default)]
    pub categories: Option<Vec<Category>>,
    #[serde(default)]
    pub company: Option<Company>,
    #[serde(default)]
    pub statistics: Option<Statistics>,
    #[serde(default)]
    pub testimonials: Option<Vec<Testimonial>>,
    #[serde(default)]
    pub faqs: Option<Vec<Faq>>,
    #[serde(default)]
    pub services: Option<Vec<Service>>,
    #[serde(default)]
    pub technologies: Option<Vec<Technology>>,
    #[serde(default)]
    pub store_locations: Option<Vec<StoreLocation>>,
    #[serde(default, rename = "TeamMembers", alias = "teamMembers")]
    pub team_members: Option<Vec<TeamMember>>,
}

fn require<T: ?Sized>(value: Option<&T>, section: Section) -> Result<&T, LookupError> {
    value.ok_or(LookupError::MissingSection(section.as_str()))
}

impl Document {
    /// # Errors
    ///
    /// [`LookupError::MissingSection`] when the section is absent.
    pub fn products(&self) -> Result<&[Product], LookupError> {
        require(self.products.as_deref(), Section::Products)
    }

    /// # Errors
    ///
    /// [`LookupError::MissingSection`] when the section is absent.
    pub fn categories(&self) -> Result<&[Category], LookupError> {
        require(self.categories.as_deref(), Section::Categories)
    }

    /// # Errors
    ///
    /// [`LookupError::MissingSection`] when the section is absent.
    pub fn company(&self) -> Result<&Company, LookupError> {
        require(self.company.as_ref(), Section::Company)
    }

    /// # Errors
    ///
    /// [`LookupError::MissingSection`] when the section is absent.
    pub fn statistics(&self) -> Result<&Statistics, LookupError> {
        require(self.statistics.as_ref(), Section::Statistics)
    }

    /// # Errors
    ///
    /// [`LookupError::MissingSection`] when the section is absent.
    pub fn testimonials(&self) -> Result<&[Testimonial], LookupError> {
        require(self.testimonials.as_deref(), Section::Testimonials)
    }

    /// # Errors
    ///
    /// [`LookupError::MissingSection`] when the section is absent.
    pub fn faqs(&self) -> Result<&[Faq], LookupError> {
        require(self.faqs.as_deref(), Section::Faqs)
    }

    /// # Errors
    ///
    /// [`LookupError::MissingSection`] when the section is absent.
    pub fn services(&self) -> Result<&[Service], LookupError> {
        require(self.services.as_deref(), Section::Services)
    }

    /// # Errors
    ///
    /// [`LookupError::MissingSection`] when the section is absent.
    pub fn technologies(&self) -> Result<&[Technology], LookupError> {
        require(self.technologies.as_deref(), Section::Technologies)
    }

    /// Store locations; an absent section reads as no stores.
    #[must_use]
    pub fn store_locations_or_empty(&self) -> &[StoreLocation] {
        self.store_locations.as_deref().unwrap_or_default()
    }

    /// Team members; an absent section reads as nobody.
    #[must_use]
    pub fn team_members_or_empty(&self) -> &[TeamMember] {
        self.team_members.as_deref().unwrap_or_default()
    }
}
