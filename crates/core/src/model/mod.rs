//! Catalog data model.
//!
//! Every type mirrors one section of the catalog JSON document (camelCase
//! keys). Optional presentation fields default to empty so a sparse dataset
//! still loads.

pub mod company;
pub mod content;
pub mod product;
pub mod store;

pub use company::{Company, Contact, OpeningHours, SocialMedia, Statistics};
pub use content::{
    Faq, PricingTier, Service, ServicePricing, TeamMember, Technology, TechnologyType,
    Testimonial,
};
pub use product::{Category, ParseProductKindError, Product, ProductKind, Specifications};
pub use store::{CLOSED, Coordinates, StoreLocation, WeeklyHours};
