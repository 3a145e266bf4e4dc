//! Page data assembled from the loaded catalog document.
//!
//! Each function takes the shared [`Document`] and returns a serializable view
//! that borrows from it. Nothing here touches the network or the cache; route
//! handlers load the document first and pass it in.

use chrono::Weekday;
use rand::Rng;
use serde::Serialize;
use showroom_core::model::{
    Category, Company, Contact, Faq, OpeningHours, Product, ProductKind, Service, SocialMedia,
    Statistics, StoreLocation, TeamMember, Technology, Testimonial,
};
use showroom_core::pagination::{BrowseState, Page};
use showroom_core::query::{self, ALL_CATEGORIES, faq, stores::StoreFilter, technology as tech};
use showroom_core::{Document, LookupError, Price};

// =============================================================================
// Shared views
// =============================================================================

/// A product as shown on cards and detail pages, with its effective price.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard<'a> {
    #[serde(flatten)]
    pub product: &'a Product,
    pub discounted_price: Price,
}

impl<'a> From<&'a Product> for ProductCard<'a> {
    fn from(product: &'a Product) -> Self {
        Self {
            product,
            discounted_price: product.discounted_price(),
        }
    }
}

fn cards<'a>(products: impl IntoIterator<Item = &'a Product>) -> Vec<ProductCard<'a>> {
    products.into_iter().map(ProductCard::from).collect()
}

/// One page of product cards.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage<'a> {
    pub items: Vec<ProductCard<'a>>,
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<'a> From<Page<'_, &'a Product>> for ProductPage<'a> {
    fn from(page: Page<'_, &'a Product>) -> Self {
        Self {
            items: cards(page.items.iter().copied()),
            page: page.page,
            page_size: page.page_size,
            total_items: page.total_items,
            total_pages: page.total_pages,
        }
    }
}

/// Inclusive bounds on the discounted price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: Price,
    pub max: Price,
}

// =============================================================================
// Home
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePage<'a> {
    pub kind: ProductKind,
    pub featured: Vec<ProductCard<'a>>,
    pub categories: &'a [Category],
    pub company: &'a Company,
    pub statistics: &'a Statistics,
    pub testimonials: &'a [Testimonial],
    pub featured_testimonial: Option<&'a Testimonial>,
}

/// Home page: featured products, categories, company, statistics and
/// testimonials.
///
/// # Errors
///
/// [`LookupError::MissingSection`] if any of those sections is absent.
pub fn home(
    doc: &Document,
    kind: ProductKind,
    featured_limit: usize,
) -> Result<HomePage<'_>, LookupError> {
    let testimonials = doc.testimonials()?;
    Ok(HomePage {
        kind,
        featured: cards(query::featured_selection(doc.products()?, featured_limit)),
        categories: doc.categories()?,
        company: doc.company()?,
        statistics: doc.statistics()?,
        testimonials,
        featured_testimonial: query::testimonials::featured_testimonial(testimonials),
    })
}

// =============================================================================
// Product listing and detail
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductList<'a> {
    pub products: &'a [Product],
    pub categories: &'a [Category],
}

/// Every product and category, unfiltered.
///
/// # Errors
///
/// [`LookupError::MissingSection`] if products or categories are absent.
pub fn product_list(doc: &Document) -> Result<ProductList<'_>, LookupError> {
    Ok(ProductList {
        products: doc.products()?,
        categories: doc.categories()?,
    })
}

/// A filtered, paginated product listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing<'a> {
    pub kind: ProductKind,
    pub category: Option<String>,
    pub keyword: String,
    pub categories: &'a [Category],
    pub products: ProductPage<'a>,
}

/// Products narrowed by the view's category and keyword, then by price,
/// sliced to the view's current page.
///
/// A page that no longer exists after filtering resets to page 1.
///
/// # Errors
///
/// [`LookupError::MissingSection`] if products or categories are absent.
pub fn product_listing<'a>(
    doc: &'a Document,
    kind: ProductKind,
    state: &mut BrowseState,
    price: Option<PriceRange>,
) -> Result<Listing<'a>, LookupError> {
    let mut visible = state.filter(doc.products()?);
    if let Some(range) = price {
        visible = query::price_in_range(visible, range.min, range.max);
    }

    Ok(Listing {
        kind,
        category: state.category().map(str::to_owned),
        keyword: state.keyword().to_owned(),
        categories: doc.categories()?,
        products: state.page(&visible).into(),
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail<'a> {
    pub kind: ProductKind,
    pub product: ProductCard<'a>,
    pub category: Option<&'a Category>,
    pub related: Vec<ProductCard<'a>>,
}

/// One product with its category and related products.
///
/// # Errors
///
/// - [`LookupError::MissingSection`] if products are absent
/// - [`LookupError::NotFound`] (named after `kind`) for an unknown ID
pub fn product_detail<'a>(
    doc: &'a Document,
    kind: ProductKind,
    id: &str,
    related_limit: usize,
) -> Result<ProductDetail<'a>, LookupError> {
    let products = doc.products()?;
    let product = query::find_product(products, id)
        .ok_or_else(|| LookupError::not_found(kind.label(), id))?;
    let categories = doc.categories.as_deref().unwrap_or_default();

    Ok(ProductDetail {
        kind,
        product: product.into(),
        category: query::find_category(categories, product.category_id.as_str()),
        related: cards(query::related_items(products, id, related_limit)),
    })
}

/// Related products for `id`.
///
/// # Errors
///
/// [`LookupError::NotFound`] for an unknown ID.
pub fn related<'a>(
    doc: &'a Document,
    kind: ProductKind,
    id: &str,
    limit: usize,
) -> Result<Vec<ProductCard<'a>>, LookupError> {
    let products = doc.products()?;
    if query::find_product(products, id).is_none() {
        return Err(LookupError::not_found(kind.label(), id));
    }
    Ok(cards(query::related_items(products, id, limit)))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults<'a> {
    pub query: String,
    pub results: Vec<ProductCard<'a>>,
}

/// Free-text search over name, brand and description. A blank query finds
/// nothing.
///
/// # Errors
///
/// [`LookupError::MissingSection`] if products are absent.
pub fn search<'a>(doc: &'a Document, raw: &str) -> Result<SearchResults<'a>, LookupError> {
    Ok(SearchResults {
        query: raw.trim().to_string(),
        results: cards(query::search_catalog(doc.products()?, raw)),
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPage<'a> {
    pub category: &'a Category,
    pub products: Vec<ProductCard<'a>>,
}

/// A category and its products.
///
/// # Errors
///
/// [`LookupError::NotFound`] for an unknown category.
pub fn category<'a>(doc: &'a Document, id: &str) -> Result<CategoryPage<'a>, LookupError> {
    let category = query::find_category(doc.categories()?, id)
        .ok_or_else(|| LookupError::not_found("Category", id))?;
    Ok(CategoryPage {
        category,
        products: cards(query::filter_by_category(doc.products()?, Some(id))),
    })
}

// =============================================================================
// Gallery
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryPage<'a> {
    pub category: String,
    pub keyword: String,
    pub categories: &'a [Category],
    pub products: ProductPage<'a>,
}

/// Gallery grid. Absent product or category sections show as empty.
#[must_use]
pub fn gallery<'a>(doc: &'a Document, state: &mut BrowseState) -> GalleryPage<'a> {
    let products = doc.products.as_deref().unwrap_or_default();
    let visible = state.filter(products);

    GalleryPage {
        category: state.category().unwrap_or(ALL_CATEGORIES).to_owned(),
        keyword: state.keyword().to_owned(),
        categories: doc.categories.as_deref().unwrap_or_default(),
        products: state.page(&visible).into(),
    }
}

// =============================================================================
// Support
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportPage<'a> {
    pub faqs: Vec<&'a Faq>,
    pub topics: Vec<&'static str>,
    pub services: &'a [Service],
    pub company: &'a Company,
}

/// FAQ selection on the support page.
#[derive(Debug, Clone, Copy, Default)]
pub struct FaqFilter<'q> {
    pub topic: Option<&'q str>,
    pub keyword: &'q str,
}

/// Support page: FAQs, services and company details.
///
/// A non-blank keyword searches questions and answers; otherwise a topic
/// narrows by its keyword table; otherwise every FAQ is shown.
///
/// # Errors
///
/// [`LookupError::MissingSection`] if FAQs, services or company are absent.
pub fn support<'a>(doc: &'a Document, filter: FaqFilter<'_>) -> Result<SupportPage<'a>, LookupError> {
    let faqs = doc.faqs()?;
    let selected = if query::Keyword::parse(filter.keyword).is_some() {
        faq::search_faqs(faqs, filter.keyword)
    } else if let Some(topic) = filter.topic {
        faq::faqs_by_topic(faqs, topic)
    } else {
        faqs.iter().collect()
    };

    Ok(SupportPage {
        faqs: selected,
        topics: faq::topics().collect(),
        services: doc.services()?,
        company: doc.company()?,
    })
}

/// A single service.
///
/// # Errors
///
/// [`LookupError::NotFound`] for an unknown service.
pub fn service<'a>(doc: &'a Document, id: &str) -> Result<&'a Service, LookupError> {
    doc.services()?
        .iter()
        .find(|s| s.id.as_str() == id)
        .ok_or_else(|| LookupError::not_found("Service", id))
}

// =============================================================================
// Store locator
// =============================================================================

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreEntry<'a> {
    #[serde(flatten)]
    pub store: &'a StoreLocation,
    pub open_today: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreLocatorPage<'a> {
    pub stores: Vec<StoreEntry<'a>>,
    pub services: Vec<&'a str>,
    pub selected: Option<&'a StoreLocation>,
}

/// Stores matching the filter, the services to filter by and the selected
/// store. An absent section shows no stores.
///
/// The current selection is kept while it stays visible; otherwise the first
/// visible store is selected.
#[must_use]
pub fn store_locator<'a>(
    doc: &'a Document,
    filter: &StoreFilter,
    current: Option<&str>,
    today: Weekday,
) -> StoreLocatorPage<'a> {
    let all = doc.store_locations_or_empty();
    let visible = filter.apply(all);

    StoreLocatorPage {
        selected: query::stores::reselect(&visible, current),
        stores: visible
            .iter()
            .map(|&store| StoreEntry {
                store,
                open_today: store.is_open_on(today),
            })
            .collect(),
        services: query::stores::available_services(all),
    }
}

// =============================================================================
// Technology
// =============================================================================

#[derive(Debug, Serialize)]
pub struct TechnologyPage<'a> {
    pub technologies: &'a [Technology],
}

/// # Errors
///
/// [`LookupError::MissingSection`] if technologies are absent.
pub fn technology(doc: &Document) -> Result<TechnologyPage<'_>, LookupError> {
    Ok(TechnologyPage {
        technologies: doc.technologies()?,
    })
}

/// # Errors
///
/// [`LookupError::NotFound`] for an unknown technology.
pub fn technology_detail<'a>(doc: &'a Document, id: &str) -> Result<&'a Technology, LookupError> {
    tech::find_technology(doc.technologies()?, id)
}

#[derive(Debug, Serialize)]
pub struct Comparison<'a> {
    pub first: &'a Technology,
    pub second: &'a Technology,
}

/// # Errors
///
/// [`LookupError::NotFound`] naming the first ID that does not resolve.
pub fn compare<'a>(doc: &'a Document, a: &str, b: &str) -> Result<Comparison<'a>, LookupError> {
    let (first, second) = tech::compare_technologies(doc.technologies()?, a, b)?;
    Ok(Comparison { first, second })
}

// =============================================================================
// About, contact, testimonials
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutPage<'a> {
    pub company: &'a Company,
    pub statistics: &'a Statistics,
    pub team: &'a [TeamMember],
}

/// # Errors
///
/// [`LookupError::MissingSection`] if company or statistics are absent.
pub fn about(doc: &Document) -> Result<AboutPage<'_>, LookupError> {
    Ok(AboutPage {
        company: doc.company()?,
        statistics: doc.statistics()?,
        team: doc.team_members_or_empty(),
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPage<'a> {
    pub name: &'a str,
    pub contact: &'a Contact,
    pub opening_hours: &'a OpeningHours,
    pub social_media: &'a SocialMedia,
    pub stores: &'a [StoreLocation],
}

/// # Errors
///
/// [`LookupError::MissingSection`] if company is absent.
pub fn contact(doc: &Document) -> Result<ContactPage<'_>, LookupError> {
    let company = doc.company()?;
    Ok(ContactPage {
        name: &company.name,
        contact: &company.contact,
        opening_hours: &company.opening_hours,
        social_media: &company.social_media,
        stores: doc.store_locations_or_empty(),
    })
}

/// Up to `count` distinct testimonials in random order.
///
/// # Errors
///
/// [`LookupError::MissingSection`] if testimonials are absent.
pub fn random_testimonials<'a, R>(
    doc: &'a Document,
    count: usize,
    rng: &mut R,
) -> Result<Vec<&'a Testimonial>, LookupError>
where
    R: Rng + ?Sized,
{
    Ok(query::testimonials::random_testimonials(
        doc.testimonials()?,
        count,
        rng,
    ))
}
