//! Filter and sort state controller.
//!
//! The controller owns the catalogue and the current selections. Mutators
//! take plain values and apply immediately; [`ListingController::listing`]
//! recomputes the rows from the untouched catalogue on every call.

use tracing::debug;

use crate::enrich::Catalogue;
use crate::filter::{FilterState, OwnerFilter, SearchText};
use crate::pipeline::{Listing, run_pipeline};
use crate::sort::{SortKey, SortState};

/// Holds a catalogue together with the user's filter and sort selections.
///
/// # Example
///
/// ```
/// use product_listing::{Catalogue, Dataset, ListingController, SortKey};
///
/// let json = r#"{
///     "version": 1,
///     "users": [{"id": 1, "name": "Roma", "sex": "m"}],
///     "categories": [{"id": 1, "title": "Drinks", "icon": "🍺", "ownerId": 1}],
///     "products": [
///         {"id": 1, "name": "Milk", "categoryId": 1},
///         {"id": 2, "name": "Beer", "categoryId": 1}
///     ]
/// }"#;
/// let dataset = Dataset::from_json(json).expect("valid dataset");
/// let mut controller = ListingController::new(Catalogue::from_dataset(&dataset));
///
/// controller.set_sort(SortKey::Name);
/// assert_eq!(controller.listing().ids(), vec![2, 1]);
///
/// controller.set_search_text("  MILK ");
/// assert_eq!(controller.listing().ids(), vec![1]);
/// ```
#[derive(Debug, Clone)]
pub struct ListingController {
    catalogue: Catalogue,
    filter: FilterState,
    sort: SortState,
}

impl ListingController {
    /// Creates a controller with every filter cleared and no sort.
    #[must_use]
    pub fn new(catalogue: Catalogue) -> Self {
        Self {
            catalogue,
            filter: FilterState::default(),
            sort: SortState::unsorted(),
        }
    }

    /// Returns the catalogue being listed.
    #[must_use]
    pub const fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// Returns the current filter selection.
    #[must_use]
    pub const fn filter_state(&self) -> &FilterState {
        &self.filter
    }

    /// Returns the current sort selection.
    #[must_use]
    pub const fn sort_state(&self) -> SortState {
        self.sort
    }

    /// Restricts the listing to one owner; `"all"` clears the restriction.
    pub fn set_owner_filter(&mut self, name: impl Into<String>) {
        self.filter.owner = OwnerFilter::from_selection(name);
        debug!(owner = ?self.filter.owner, "owner filter changed");
    }

    /// Clears the owner restriction.
    pub fn show_all_owners(&mut self) {
        self.filter.owner = OwnerFilter::All;
        debug!("owner filter cleared");
    }

    /// Adds the category title to the selection, or removes it when already
    /// selected. Returns `true` when the title is selected afterwards.
    pub fn toggle_category(&mut self, title: impl Into<String>) -> bool {
        let category = title.into();
        let selected = if self.filter.categories.remove(&category) {
            false
        } else {
            self.filter.categories.insert(category.clone())
        };
        debug!(%category, selected, "category toggled");
        selected
    }

    /// Empties the category selection.
    pub fn clear_categories(&mut self) {
        self.filter.categories.clear();
        debug!("category filter cleared");
    }

    /// Stores the search text, trimmed and lower-cased.
    pub fn set_search_text(&mut self, text: &str) {
        self.filter.search = SearchText::new(text);
        debug!(search = self.filter.search.as_str(), "search text changed");
    }

    /// Clears the search text.
    pub fn clear_search(&mut self) {
        self.filter.search = SearchText::default();
        debug!("search text cleared");
    }

    /// Advances the tri-state sort cycle for `key`.
    pub fn set_sort(&mut self, key: SortKey) {
        self.sort = self.sort.cycle(key);
        debug!(key = ?self.sort.key, reversed = self.sort.reversed, "sort changed");
    }

    /// Restores every filter and the sort to their defaults.
    pub fn reset_all(&mut self) {
        self.filter = FilterState::default();
        self.sort = SortState::unsorted();
        debug!("filters and sort reset");
    }

    /// Runs the pipeline against the current selections.
    #[must_use]
    pub fn listing(&self) -> Listing<'_> {
        run_pipeline(self.catalogue.products(), &self.filter, self.sort)
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::dataset::Dataset;

    const CATALOGUE_JSON: &str = r#"{
        "version": 1,
        "users": [
            {"id": 10, "name": "Max", "sex": "m"},
            {"id": 11, "name": "Anna", "sex": "f"}
        ],
        "categories": [
            {"id": 1, "title": "Fruits", "icon": "🍏", "ownerId": 10},
            {"id": 2, "title": "Veg", "icon": "🥕", "ownerId": 11}
        ],
        "products": [
            {"id": 1, "name": "Apple", "categoryId": 1},
            {"id": 2, "name": "Banana", "categoryId": 2},
            {"id": 3, "name": "Cherry", "categoryId": 1},
            {"id": 4, "name": "Unfiled", "categoryId": 9}
        ]
    }"#;

    #[fixture]
    fn controller() -> ListingController {
        let dataset = Dataset::from_json(CATALOGUE_JSON).expect("valid dataset");
        ListingController::new(Catalogue::from_dataset(&dataset))
    }

    #[rstest]
    fn starts_with_everything_listed(controller: ListingController) {
        assert!(controller.filter_state().is_unrestricted());
        assert_eq!(controller.sort_state(), SortState::unsorted());
        assert_eq!(controller.listing().ids(), vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn owner_filter_accepts_all_keyword(mut controller: ListingController) {
        controller.set_owner_filter("Max");
        assert_eq!(controller.listing().ids(), vec![1, 3]);

        controller.set_owner_filter("all");
        assert_eq!(controller.filter_state().owner, OwnerFilter::All);
        assert_eq!(controller.listing().ids(), vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn show_all_owners_clears_owner(mut controller: ListingController) {
        controller.set_owner_filter("Anna");
        controller.show_all_owners();

        assert_eq!(controller.filter_state().owner, OwnerFilter::All);
    }

    #[rstest]
    fn toggling_a_category_twice_restores_selection(mut controller: ListingController) {
        assert!(controller.toggle_category("Veg"));
        assert_eq!(controller.listing().ids(), vec![2]);

        assert!(!controller.toggle_category("Veg"));
        assert!(controller.filter_state().categories.is_empty());
        assert_eq!(controller.listing().ids(), vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn multiple_categories_combine(mut controller: ListingController) {
        controller.toggle_category("Veg");
        controller.toggle_category("Fruits");

        assert_eq!(controller.listing().ids(), vec![1, 2, 3]);

        controller.clear_categories();
        assert_eq!(controller.listing().ids(), vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn search_text_is_normalised(mut controller: ListingController) {
        controller.set_search_text("  AN ");

        assert_eq!(controller.filter_state().search.as_str(), "an");
        assert_eq!(controller.listing().ids(), vec![2]);

        controller.clear_search();
        assert!(controller.filter_state().search.is_empty());
    }

    #[rstest]
    fn sort_cycles_through_three_states(mut controller: ListingController) {
        controller.set_sort(SortKey::Id);
        assert_eq!(controller.listing().ids(), vec![1, 2, 3, 4]);

        controller.set_sort(SortKey::Id);
        assert_eq!(controller.listing().ids(), vec![4, 3, 2, 1]);

        controller.set_sort(SortKey::Id);
        assert_eq!(controller.sort_state(), SortState::unsorted());
        assert_eq!(controller.listing().ids(), vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn category_sort_tolerates_unresolved_rows(mut controller: ListingController) {
        controller.set_sort(SortKey::Category);

        assert_eq!(controller.listing().ids(), vec![4, 1, 3, 2]);
    }

    #[rstest]
    fn reset_all_clears_filters_and_sort(mut controller: ListingController) {
        controller.set_owner_filter("Max");
        controller.toggle_category("Fruits");
        controller.set_search_text("ch");
        controller.set_sort(SortKey::Owner);

        controller.reset_all();

        assert!(controller.filter_state().is_unrestricted());
        assert_eq!(controller.sort_state(), SortState::unsorted());
        assert_eq!(controller.listing().ids(), vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn listing_leaves_catalogue_untouched(mut controller: ListingController) {
        let before = controller.catalogue().clone();

        controller.set_sort(SortKey::Name);
        controller.set_sort(SortKey::Name);
        let _rows = controller.listing().ids();

        assert_eq!(controller.catalogue(), &before);
    }
}
