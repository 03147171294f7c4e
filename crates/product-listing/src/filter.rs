//! Filter pipeline: owner, category, and name search predicates.
//!
//! The stages run in sequence, each seeing only the previous stage's output.
//! Every stage keeps the relative order of its input. A product with an
//! unresolved category or owner never matches an active filter on that field
//! and passes through when the filter is inactive.

use std::collections::BTreeSet;

use crate::enrich::EnrichedProduct;

/// Selection value meaning "no owner restriction".
pub const ALL_OWNERS: &str = "all";

/// Owner restriction applied by the first filter stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OwnerFilter {
    /// Every owner passes.
    #[default]
    All,
    /// Only products whose owner has exactly this name pass.
    Named(String),
}

impl OwnerFilter {
    /// Interprets a selection value, where [`ALL_OWNERS`] clears the filter.
    ///
    /// # Example
    ///
    /// ```
    /// use product_listing::OwnerFilter;
    ///
    /// assert_eq!(OwnerFilter::from_selection("all"), OwnerFilter::All);
    /// assert_eq!(
    ///     OwnerFilter::from_selection("Max"),
    ///     OwnerFilter::Named("Max".to_owned())
    /// );
    /// ```
    #[must_use]
    pub fn from_selection(value: impl Into<String>) -> Self {
        let name = value.into();
        if name == ALL_OWNERS {
            Self::All
        } else {
            Self::Named(name)
        }
    }

    /// Returns the selected owner name, if the filter is active.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Named(name) => Some(name),
        }
    }

    /// Returns `true` when the product passes this stage.
    #[must_use]
    pub fn matches(&self, product: &EnrichedProduct) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => product.owner_name() == Some(name.as_str()),
        }
    }
}

/// Normalised search text: trimmed and lower-cased on construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchText(String);

impl SearchText {
    /// Normalises raw input text.
    ///
    /// # Example
    ///
    /// ```
    /// use product_listing::SearchText;
    ///
    /// assert_eq!(SearchText::new("  BaNa ").as_str(), "bana");
    /// ```
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    /// Returns the normalised text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` when no search is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` when the product passes this stage.
    #[must_use]
    pub fn matches(&self, product: &EnrichedProduct) -> bool {
        self.is_empty() || product.name.to_lowercase().contains(&self.0)
    }
}

/// The complete filter selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Owner stage selection.
    pub owner: OwnerFilter,
    /// Selected category titles; empty means no restriction.
    pub categories: BTreeSet<String>,
    /// Search stage text.
    pub search: SearchText,
}

impl FilterState {
    /// Returns `true` when the product passes the category stage.
    #[must_use]
    pub fn category_matches(&self, product: &EnrichedProduct) -> bool {
        if self.categories.is_empty() {
            return true;
        }
        product
            .category_title()
            .is_some_and(|title| self.categories.contains(title))
    }

    /// Returns `true` when the product passes every stage.
    #[must_use]
    pub fn matches(&self, product: &EnrichedProduct) -> bool {
        self.owner.matches(product) && self.category_matches(product) && self.search.matches(product)
    }

    /// Returns `true` when no stage restricts the product set.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.owner == OwnerFilter::All && self.categories.is_empty() && self.search.is_empty()
    }
}

/// Applies the owner, category, and search stages in sequence.
///
/// # Example
///
/// ```
/// use product_listing::{FilterState, apply_filters};
///
/// let filtered = apply_filters(&[], &FilterState::default());
/// assert!(filtered.is_empty());
/// ```
#[must_use]
pub fn apply_filters<'a>(
    products: &'a [EnrichedProduct],
    state: &FilterState,
) -> Vec<&'a EnrichedProduct> {
    let by_owner: Vec<&EnrichedProduct> = products
        .iter()
        .filter(|product| state.owner.matches(product))
        .collect();

    let by_category: Vec<&EnrichedProduct> = by_owner
        .into_iter()
        .filter(|product| state.category_matches(product))
        .collect();

    by_category
        .into_iter()
        .filter(|product| state.search.matches(product))
        .collect()
}
