//! Query engine over the in-memory product list.
//!
//! All functions are pure: they borrow products from the loaded document and
//! return new `Vec<&Product>` lists, leaving the document untouched. List
//! order is always the document's order.
//!
//! Composition order matters. Views narrow by category first and by keyword
//! second:
//!
//! ```rust
//! # use showroom_core::query::{filter_by_category, narrow_by_keyword};
//! # let products = Vec::new();
//! let in_category = filter_by_category(&products, Some("diver"));
//! let visible = narrow_by_keyword(in_category, "omega");
//! # assert!(visible.is_empty());
//! ```

pub mod faq;
pub mod stores;
pub mod technology;
pub mod testimonials;

use std::collections::HashSet;

use crate::model::{Category, Product};
use crate::types::{Discount, Price};

/// Category value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// A normalized search keyword: trimmed, lower-cased and never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword(String);

impl Keyword {
    /// Normalize raw input. Blank input yields `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_lowercase()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive substring match.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.0)
    }
}

/// Whether a category selection means "everything".
#[must_use]
pub fn is_all_categories(category: Option<&str>) -> bool {
    category.is_none_or(|c| c.is_empty() || c == ALL_CATEGORIES)
}

/// Keep products in `category`.
///
/// `None`, `""` and `"all"` select every product.
pub fn filter_by_category<'a, I>(products: I, category: Option<&str>) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    if is_all_categories(category) {
        return products.into_iter().collect();
    }
    let category = category.unwrap_or_default();
    products
        .into_iter()
        .filter(|p| p.category_id.as_str() == category)
        .collect()
}

/// Keep products whose name or brand contains `keyword`.
pub fn search_by_keyword<'a, I>(products: I, keyword: &Keyword) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    products
        .into_iter()
        .filter(|p| keyword.matches(&p.name) || keyword.matches(&p.brand))
        .collect()
}

/// Narrow an already-filtered list by a raw keyword.
///
/// A blank keyword leaves the list unchanged.
pub fn narrow_by_keyword<'a, I>(products: I, raw: &str) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    match Keyword::parse(raw) {
        Some(keyword) => search_by_keyword(products, &keyword),
        None => products.into_iter().collect(),
    }
}

/// Free-text search across the whole catalog: name, brand or description.
///
/// A blank query matches nothing.
pub fn search_catalog<'a, I>(products: I, raw: &str) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    let Some(keyword) = Keyword::parse(raw) else {
        return Vec::new();
    };
    products
        .into_iter()
        .filter(|p| {
            keyword.matches(&p.name) || keyword.matches(&p.brand) || keyword.matches(&p.description)
        })
        .collect()
}

/// Price after an optional discount; a zero discount adjusts nothing.
#[must_use]
pub fn discounted_price(price: Price, discount: Option<Discount>) -> Price {
    price.discounted(discount)
}

/// Keep products whose discounted price lies in `min..=max`.
pub fn price_in_range<'a, I>(products: I, min: Price, max: Price) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    products
        .into_iter()
        .filter(|p| {
            let actual = p.discounted_price();
            min <= actual && actual <= max
        })
        .collect()
}

/// Products to suggest next to `target_id`.
///
/// Same category first, then same brand, then anything else, each group in
/// document order. The target is never included and the result never
/// exceeds `limit`; an unknown target yields an empty list.
#[must_use]
pub fn related_items<'a>(
    products: &'a [Product],
    target_id: &str,
    limit: usize,
) -> Vec<&'a Product> {
    let Some(target) = find_product(products, target_id) else {
        return Vec::new();
    };

    let others = || products.iter().filter(|p| p.id != target.id);

    let mut related: Vec<&Product> = others()
        .filter(|p| p.category_id == target.category_id)
        .collect();
    if related.len() >= limit {
        related.truncate(limit);
        return related;
    }

    let mut selected: HashSet<&str> = related.iter().copied().map(|p| p.id.as_str()).collect();
    for product in others().filter(|p| p.brand == target.brand) {
        if selected.insert(product.id.as_str()) {
            related.push(product);
        }
    }

    if related.len() < limit {
        for product in others() {
            if related.len() >= limit {
                break;
            }
            if selected.insert(product.id.as_str()) {
                related.push(product);
            }
        }
    }

    related.truncate(limit);
    related
}

/// Products to feature on the home page.
///
/// Products carrying a discount come first (a zero discount still counts),
/// topped up with undiscounted products, until `limit` is reached.
#[must_use]
pub fn featured_selection(products: &[Product], limit: usize) -> Vec<&Product> {
    let (discounted, regular): (Vec<&Product>, Vec<&Product>) =
        products.iter().partition(|p| p.discount.is_some());
    discounted.into_iter().chain(regular).take(limit).collect()
}

/// Find a product by ID.
#[must_use]
pub fn find_product<'a>(products: &'a [Product], id: &str) -> Option<&'a Product> {
    products.iter().find(|p| p.id.as_str() == id)
}

/// Find a category by ID. Dangling references simply yield `None`.
#[must_use]
pub fn find_category<'a>(categories: &'a [Category], id: &str) -> Option<&'a Category> {
    categories.iter().find(|c| c.id.as_str() == id)
}


#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::fixtures::{catalog, ids, priced, product};
    use super::*;
    use crate::pagination::paginate;

    #[test]
    fn test_filter_by_category_preserves_order() {
        let products = catalog();
        let sport = filter_by_category(&products, Some("sport"));
        assert_eq!(ids(&sport), ["s1", "s2", "s3", "s4", "s5"]);
    }

    #[test]
    fn test_filter_by_category_all_is_identity() {
        let products = catalog();
        for selector in [None, Some(""), Some("all")] {
            assert_eq!(filter_by_category(&products, selector).len(), products.len());
        }
    }

    #[test]
    fn test_filter_by_unknown_category_is_empty() {
        let products = catalog();
        assert!(filter_by_category(&products, Some("pocket")).is_empty());
    }

    #[test]
    fn test_search_by_keyword_matches_name_or_brand() {
        let products = catalog();
        let keyword = Keyword::parse("  OMEGA ").unwrap();
        let found = search_by_keyword(&products, &keyword);
        assert_eq!(ids(&found), ["s2", "s3"]);

        for p in &found {
            assert!(
                p.name.to_lowercase().contains(keyword.as_str())
                    || p.brand.to_lowercase().contains(keyword.as_str())
            );
        }
    }

    #[test]
    fn test_search_by_keyword_ignores_description() {
        let mut products = catalog();
        products[0].description = "A dress watch with omega-like finishing".to_string();
        let keyword = Keyword::parse("omega").unwrap();
        assert_eq!(ids(&search_by_keyword(&products, &keyword)), ["s2", "s3"]);
    }

    #[test]
    fn test_blank_keyword() {
        assert!(Keyword::parse("   ").is_none());

        let products = catalog();
        assert_eq!(narrow_by_keyword(&products, " ").len(), products.len());
        assert!(search_catalog(&products, "").is_empty());
    }

    #[test]
    fn test_search_catalog_includes_description() {
        let mut products = catalog();
        products[3].description = "Pilot heritage from 1904".to_string();
        let found = search_catalog(&products, "pilot");
        assert_eq!(ids(&found), ["c4"]);
    }

    #[test]
    fn test_discounted_price() {
        let hundred = Price::from_units(100);
        assert_eq!(
            discounted_price(hundred, Some(Discount::from_percent(20))),
            Price::from_units(80)
        );
        assert_eq!(discounted_price(hundred, None), hundred);
        assert_eq!(discounted_price(hundred, Some(Discount::from_percent(0))), hundred);
    }

    #[test]
    fn test_price_in_range_uses_discounted_price() {
        let products = vec![
            priced(product("a", "A", "X", "k"), 100, Some(50)),
            priced(product("b", "B", "X", "k"), 100, None),
            priced(product("c", "C", "X", "k"), 300, Some(0)),
        ];
        let found = price_in_range(&products, Price::from_units(40), Price::from_units(60));
        assert_eq!(ids(&found), ["a"]);

        let inclusive = price_in_range(&products, Price::from_units(100), Price::from_units(300));
        assert_eq!(ids(&inclusive), ["b", "c"]);
    }

    #[test]
    fn test_related_items_same_category_first() {
        let products = catalog();
        let related = related_items(&products, "s2", 4);
        assert_eq!(ids(&related), ["s1", "s3", "s4", "s5"]);
    }

    #[test]
    fn test_related_items_falls_back_to_brand_then_anything() {
        let products = vec![
            product("a", "A", "Omega", "sport"),
            product("b", "B", "Rolex", "sport"),
            product("c", "C", "Seiko", "dress"),
            product("d", "D", "Omega", "dress"),
            product("e", "E", "Tudor", "dive"),
        ];
        let related = related_items(&products, "a", 4);
        // category: b; brand: d; then fill in order: c, e
        assert_eq!(ids(&related), ["b", "d", "c", "e"]);
    }

    #[test]
    fn test_related_items_never_includes_target_and_never_pads() {
        let products = catalog();
        let small = &products[..3];
        let related = related_items(small, "c1", 4);
        assert_eq!(related.len(), 2);
        assert!(related.iter().all(|p| p.id.as_str() != "c1"));

        let mut seen = HashSet::new();
        for p in related_items(&products, "c1", 4) {
            assert!(seen.insert(p.id.clone()));
            assert_ne!(p.id.as_str(), "c1");
        }
        assert!(seen.len() <= 4);
    }

    #[test]
    fn test_related_items_unknown_target() {
        let products = catalog();
        assert!(related_items(&products, "missing", 4).is_empty());
    }

    #[test]
    fn test_featured_selection_prefers_discounted() {
        let mut products = catalog();
        products[4].discount = Some(Discount::from_percent(10));
        products[7].discount = Some(Discount::from_percent(0));
        let featured = featured_selection(&products, 4);
        assert_eq!(ids(&featured), ["c5", "s3", "c1", "c2"]);
    }

    #[test]
    fn test_featured_selection_exhausts_catalog() {
        let products = catalog();
        assert_eq!(featured_selection(&products[..2], 6).len(), 2);
    }

    #[test]
    fn test_find_category_dangling_reference() {
        let categories = vec![Category {
            id: "classic".into(),
            name: "Classic".to_string(),
            description: String::new(),
            image: String::new(),
            features: Vec::new(),
        }];
        assert!(find_category(&categories, "classic").is_some());
        assert!(find_category(&categories, "sport").is_none());
    }

    #[test]
    fn test_category_then_keyword_then_paginate() {
        let products = catalog();
        let in_category = filter_by_category(&products, Some("classic"));
        let visible = narrow_by_keyword(in_category, "tank");
        assert_eq!(visible.len(), 1);

        let page = paginate(&visible, 1, 9);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total_pages, 1);
    }
}
