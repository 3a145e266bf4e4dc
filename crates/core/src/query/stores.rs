//! Store locator filtering and selection.

use std::collections::BTreeSet;

use crate::model::StoreLocation;

use super::Keyword;

/// Filter inputs of the store locator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreFilter {
    /// Services a store must offer (all of them).
    pub services: BTreeSet<String>,
    /// Free text matched against store name or address.
    pub keyword: String,
}

impl StoreFilter {
    /// Stores matching every selected service and the keyword.
    #[must_use]
    pub fn apply<'a>(&self, stores: &'a [StoreLocation]) -> Vec<&'a StoreLocation> {
        let keyword = Keyword::parse(&self.keyword);
        stores
            .iter()
            .filter(|store| store.offers_all(self.services.iter().map(String::as_str)))
            .filter(|store| {
                keyword
                    .as_ref()
                    .is_none_or(|k| k.matches(&store.name) || k.matches(&store.address))
            })
            .collect()
    }
}

/// Every service offered by at least one store, sorted and de-duplicated.
#[must_use]
pub fn available_services(stores: &[StoreLocation]) -> Vec<&str> {
    stores
        .iter()
        .flat_map(|s| s.services.iter().map(String::as_str))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Keep the current selection while it is still visible; otherwise select
/// the first visible store, or nothing when none is visible.
#[must_use]
pub fn reselect<'a>(
    visible: &[&'a StoreLocation],
    current: Option<&str>,
) -> Option<&'a StoreLocation> {
    current
        .and_then(|id| visible.iter().copied().find(|s| s.id.as_str() == id))
        .or_else(|| visible.first().copied())
}
