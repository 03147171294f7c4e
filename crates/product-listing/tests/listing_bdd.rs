//! Behavioural tests for the product listing controller.
//!
//! These scenarios drive the controller the way a listing screen would and
//! check the resulting rows, covering each filter, the sort cycle, and
//! products whose category cannot be resolved.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use product_listing::{
    Catalogue, Dataset, ListingController, NO_MATCHES_MESSAGE, SortIndicator, SortKey,
    column_headers, render_table,
};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

const FRUIT_AND_VEG_JSON: &str = r#"{
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
        {"id": 3, "name": "Cherry", "categoryId": 1}
    ]
}"#;

const DANGLING_CATEGORY_JSON: &str = r#"{
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
        {"id": 4, "name": "Mystery box", "categoryId": 99}
    ]
}"#;

/// Test world holding the controller under test.
#[derive(Default, ScenarioState)]
struct World {
    controller: Slot<ListingController>,
}

impl World {
    /// Extracts the controller from the world state.
    fn controller(&self) -> ListingController {
        self.controller.get().expect("controller should be set")
    }

    /// Applies `change` to the stored controller.
    fn update(&self, change: impl FnOnce(&mut ListingController)) {
        let mut controller = self.controller();
        change(&mut controller);
        self.controller.set(controller);
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

fn controller_from(json: &str) -> ListingController {
    let dataset = Dataset::from_json(json).expect("valid test dataset");
    ListingController::new(Catalogue::from_dataset(&dataset))
}

fn parse_ids(ids: &str) -> Vec<u32> {
    ids.split(',')
        .map(|id| id.trim().parse().expect("numeric product id"))
        .collect()
}

// ============================================================================
// Given steps
// ============================================================================

#[given("the fruit and vegetable catalogue")]
fn the_fruit_and_vegetable_catalogue(world: &World) {
    world.controller.set(controller_from(FRUIT_AND_VEG_JSON));
}

#[given("a catalogue with a product in a missing category")]
fn a_catalogue_with_a_product_in_a_missing_category(world: &World) {
    world.controller.set(controller_from(DANGLING_CATEGORY_JSON));
}

// ============================================================================
// When steps
// ============================================================================

#[when("the owner filter is set to \"{owner}\"")]
fn the_owner_filter_is_set_to(world: &World, owner: String) {
    world.update(|controller| controller.set_owner_filter(owner));
}

#[when("the category \"{title}\" is toggled")]
fn the_category_is_toggled(world: &World, title: String) {
    world.update(|controller| {
        controller.toggle_category(title);
    });
}

#[when("the search text is \"{text}\"")]
fn the_search_text_is(world: &World, text: String) {
    world.update(|controller| controller.set_search_text(&text));
}

#[when("the \"{column}\" column is sorted")]
fn the_column_is_sorted(world: &World, column: String) {
    let key: SortKey = column.parse().expect("known sort column");
    world.update(|controller| controller.set_sort(key));
}

#[when("the \"{column}\" column is sorted {count:u32} times")]
fn the_column_is_sorted_repeatedly(world: &World, column: String, count: u32) {
    let key: SortKey = column.parse().expect("known sort column");
    world.update(|controller| {
        for _ in 0..count {
            controller.set_sort(key);
        }
    });
}

#[when("every filter is reset")]
fn every_filter_is_reset(world: &World) {
    world.update(ListingController::reset_all);
}

// ============================================================================
// Then steps
// ============================================================================

#[then("the listing shows products \"{ids}\"")]
fn the_listing_shows_products(world: &World, ids: String) {
    let controller = world.controller();

    assert_eq!(controller.listing().ids(), parse_ids(&ids));
}

#[then("no column shows a sort direction")]
fn no_column_shows_a_sort_direction(world: &World) {
    let controller = world.controller();

    for header in column_headers(controller.sort_state()) {
        assert_eq!(
            header.indicator,
            SortIndicator::Unsorted,
            "column {} still sorted",
            header.heading
        );
    }
}

#[then("the table shows the no matches placeholder")]
fn the_table_shows_the_no_matches_placeholder(world: &World) {
    let controller = world.controller();
    let listing = controller.listing();

    assert!(listing.is_empty());
    assert_eq!(render_table(&listing), NO_MATCHES_MESSAGE);
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/product_listing.feature",
    name = "Owner filter keeps products in the owner's categories"
)]
fn owner_filter_keeps_owner_products(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/product_listing.feature",
    name = "Category selection keeps products in selected categories"
)]
fn category_selection_keeps_selected_products(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/product_listing.feature",
    name = "Search matches product names case-insensitively"
)]
fn search_matches_names_case_insensitively(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/product_listing.feature",
    name = "Descending id sort reverses the listing"
)]
fn descending_id_sort_reverses_listing(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/product_listing.feature",
    name = "Sort cycle returns to the unsorted order"
)]
fn sort_cycle_returns_to_unsorted(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/product_listing.feature",
    name = "Dangling category is excluded by a category selection"
)]
fn dangling_category_excluded_by_selection(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/product_listing.feature",
    name = "Dangling category survives an empty selection and category sort"
)]
fn dangling_category_survives_category_sort(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/product_listing.feature",
    name = "Resetting clears every selection"
)]
fn resetting_clears_every_selection(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/product_listing.feature",
    name = "No matches renders the placeholder"
)]
fn no_matches_renders_placeholder(world: World) {
    let _ = world;
}
