//! Filter-then-sort pipeline producing the rows to display.

use crate::enrich::EnrichedProduct;
use crate::filter::{FilterState, apply_filters};
use crate::sort::{SortState, sort_products};

/// The ordered rows produced by one pipeline run.
///
/// Rows borrow from the enriched product set they were derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing<'a> {
    rows: Vec<&'a EnrichedProduct>,
}

impl<'a> Listing<'a> {
    /// Returns the rows in display order.
    #[must_use]
    pub fn rows(&self) -> &[&'a EnrichedProduct] {
        &self.rows
    }

    /// Returns the ids of the rows in display order.
    #[must_use]
    pub fn ids(&self) -> Vec<u32> {
        self.rows.iter().map(|product| product.id).collect()
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` when nothing matched, which the presentation shows as
    /// a placeholder message.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Runs the filter stages and then the sort stage over `products`.
///
/// # Example
///
/// ```
/// use product_listing::{FilterState, SortState, run_pipeline};
///
/// let listing = run_pipeline(&[], &FilterState::default(), SortState::unsorted());
/// assert!(listing.is_empty());
/// ```
#[must_use]
pub fn run_pipeline<'a>(
    products: &'a [EnrichedProduct],
    filter: &FilterState,
    sort: SortState,
) -> Listing<'a> {
    let filtered = apply_filters(products, filter);
    Listing {
        rows: sort_products(filtered, sort),
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::dataset::{Category, Dataset, Product, Sex, User};
    use crate::enrich::Catalogue;
    use crate::filter::{OwnerFilter, SearchText};
    use crate::sort::SortKey;

    #[fixture]
    fn catalogue() -> Catalogue {
        let dataset = Dataset::try_new(
            vec![
                User {
                    id: 10,
                    name: "Max".to_owned(),
                    sex: Sex::Male,
                },
                User {
                    id: 11,
                    name: "Anna".to_owned(),
                    sex: Sex::Female,
                },
            ],
            vec![
                Category {
                    id: 1,
                    title: "Fruits".to_owned(),
                    icon: "🍏".to_owned(),
                    owner_id: 10,
                },
                Category {
                    id: 2,
                    title: "Veg".to_owned(),
                    icon: "🥕".to_owned(),
                    owner_id: 11,
                },
            ],
            vec![
                Product {
                    id: 1,
                    name: "Apple".to_owned(),
                    category_id: 1,
                },
                Product {
                    id: 2,
                    name: "Banana".to_owned(),
                    category_id: 2,
                },
                Product {
                    id: 3,
                    name: "Cherry".to_owned(),
                    category_id: 1,
                },
            ],
        )
        .expect("valid dataset");
        Catalogue::from_dataset(&dataset)
    }

    #[rstest]
    fn default_state_lists_everything_in_dataset_order(catalogue: Catalogue) {
        let listing = run_pipeline(
            catalogue.products(),
            &FilterState::default(),
            SortState::unsorted(),
        );

        assert_eq!(listing.ids(), vec![1, 2, 3]);
        assert_eq!(listing.len(), 3);
        assert!(!listing.is_empty());
    }

    #[rstest]
    fn reversed_id_sort_lists_descending(catalogue: Catalogue) {
        let listing = run_pipeline(
            catalogue.products(),
            &FilterState::default(),
            SortState::descending(SortKey::Id),
        );

        assert_eq!(listing.ids(), vec![3, 2, 1]);
    }

    #[rstest]
    fn filters_apply_before_sorting(catalogue: Catalogue) {
        let filter = FilterState {
            owner: OwnerFilter::from_selection("Max"),
            ..FilterState::default()
        };

        let listing = run_pipeline(
            catalogue.products(),
            &filter,
            SortState::descending(SortKey::Name),
        );

        assert_eq!(listing.ids(), vec![3, 1]);
    }

    #[rstest]
    fn reports_empty_listing(catalogue: Catalogue) {
        let filter = FilterState {
            search: SearchText::new("durian"),
            ..FilterState::default()
        };

        let listing = run_pipeline(catalogue.products(), &filter, SortState::unsorted());

        assert!(listing.is_empty());
        assert!(listing.rows().is_empty());
    }
}
